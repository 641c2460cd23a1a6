use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use todo_server::Config;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log))
        .init();

    let listener = TcpListener::bind(config.addr()).await?;
    todo_server::run(listener).await
}
