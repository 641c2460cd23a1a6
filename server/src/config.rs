//! Command-line configuration for the `todo-server` binary.

use clap::Parser;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 4000;

#[derive(Parser, Debug, Clone)]
#[command(name = "todo-server", version, about = "GraphQL todo list server")]
pub struct Config {
    #[arg(long, default_value = DEFAULT_HOST, help = "Interface to bind")]
    pub host: String,
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT, help = "Port to listen on")]
    pub port: u16,
    #[arg(long, env = "RUST_LOG", default_value = "info", help = "Log filter directives")]
    pub log: String,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
