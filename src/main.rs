use clap::Parser;

use books_graphql::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    if config.print_schema {
        print!("{}", books_graphql::interface::graphql::sdl());
        return Ok(());
    }

    books_graphql::logging::init(config.log_level.to_level_filter());
    books_graphql::interface::http::run(config).await
}
