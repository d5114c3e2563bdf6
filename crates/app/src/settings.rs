//! Handles settings for the application. Configuration is written in
//! `settings.toml` and can be overridden with `TXINSIGHTS__<SECTION>__<KEY>`
//! environment variables.
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "settings";

#[derive(Debug, Parser)]
#[command(name = "txinsights", about = "Read-only transaction insights API")]
pub struct Args {
    /// Config file path, with or without the `.toml` extension.
    #[arg(long, env = "TXINSIGHTS_CONFIG")]
    pub config: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: None,
            port: 3000,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Data {
    /// JSON file with the transactions to serve.
    pub path: String,
}

impl Default for Data {
    fn default() -> Self {
        Self {
            path: "transactions.json".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub data: Data,
}

impl Settings {
    pub fn new(args: &Args) -> Result<Self, ConfigError> {
        let path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        Self::from_config(
            Config::builder()
                .add_source(File::with_name(path).required(args.config.is_some()))
                .add_source(Environment::with_prefix("TXINSIGHTS").separator("__"))
                .build()?,
        )
    }

    fn from_config(config: Config) -> Result<Self, ConfigError> {
        config.try_deserialize()
    }

    pub fn address(&self) -> String {
        let bind = self.server.bind.as_deref().unwrap_or("127.0.0.1");
        format!("{}:{}", bind, self.server.port)
    }
}
