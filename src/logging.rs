//! Logging bootstrap (`log` facade + `env_logger` backend).

use log::LevelFilter;

/// Initializes the global logger at `level`.
///
/// `RUST_LOG`, when set, is applied on top of `level`. Calling this more than
/// once keeps the first logger.
pub fn init(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).format_timestamp_millis();
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    if builder.try_init().is_err() {
        log::debug!("logger already initialized");
    }
}
