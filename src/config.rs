//! Command-line / environment configuration

use std::net::{IpAddr, SocketAddr};

use clap::builder::BoolishValueParser;
use clap::{Parser, ValueEnum};

use crate::application::service::CatalogService;
use crate::infra::list_store::ListCatalogStore;
use crate::infra::map_store::MapCatalogStore;

/// Log level options
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only errors
    Error,
    /// Warnings and errors
    Warn,
    /// Info, warnings, and errors
    Info,
    /// Debug messages and above (verbose)
    Debug,
    /// All messages including trace (very verbose)
    Trace,
    /// Disable all logging
    Off,
}

impl LogLevel {
    /// Convert to log::LevelFilter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

/// Catalogの保持方式
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// id → book mapping
    Map,
    /// Ordered list, searched linearly
    List,
}

/// books-graphql - in-memory books catalog over GraphQL
#[derive(Debug, Clone, Parser)]
#[command(name = "books-graphql")]
#[command(about = "In-memory books catalog served over GraphQL")]
#[command(version)]
pub struct Config {
    /// Listen address
    #[arg(long, env = "BOOKS_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Listen port
    #[arg(short, long, env = "BOOKS_PORT", default_value_t = 4000)]
    pub port: u16,

    /// Storage variant
    #[arg(long, env = "BOOKS_STORE", value_enum, default_value_t = StoreKind::Map)]
    pub store: StoreKind,

    /// Start with an empty catalog instead of the two seed books
    #[arg(long, env = "BOOKS_NO_SEED", value_parser = BoolishValueParser::new())]
    pub no_seed: bool,

    /// Disable the GraphiQL page on GET /graphql
    #[arg(long, env = "BOOKS_NO_PLAYGROUND", value_parser = BoolishValueParser::new())]
    pub no_playground: bool,

    /// Set log level (RUST_LOG overrides when set)
    #[arg(short = 'l', long = "log-level", env = "BOOKS_LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Print the GraphQL schema (SDL) and exit
    #[arg(long)]
    pub print_schema: bool,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// 設定に従って Store を選び、必要なら seed を投入する。
    pub fn catalog_service(&self) -> CatalogService {
        match (self.store, self.no_seed) {
            (StoreKind::Map, false) => CatalogService::seeded(MapCatalogStore::new()),
            (StoreKind::Map, true) => CatalogService::new(MapCatalogStore::new()),
            (StoreKind::List, false) => CatalogService::seeded(ListCatalogStore::new()),
            (StoreKind::List, true) => CatalogService::new(ListCatalogStore::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["books-graphql"]).unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.store, StoreKind::Map);
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(!config.no_seed);
        assert!(!config.no_playground);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:4000");
    }

    #[test]
    fn list_store_without_seed() {
        let config = Config::try_parse_from([
            "books-graphql",
            "--store",
            "list",
            "--no-seed",
            "--port",
            "8080",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(config.store, StoreKind::List);
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Debug);
        assert!(config.catalog_service().is_empty());
    }

    #[test]
    fn seeded_by_default() {
        let config = Config::try_parse_from(["books-graphql", "--store", "list"]).unwrap();
        assert_eq!(config.catalog_service().len(), 2);
    }

    #[test]
    fn reject_unknown_store() {
        assert!(Config::try_parse_from(["books-graphql", "--store", "redis"]).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
