//! Process configuration: defaults overridden by `TRIVIA_*` environment
//! variables (optionally loaded from `.env` by the binary).

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::load);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    pub questions_per_page: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:trivia.sqlite".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            questions_per_page: 10,
        }
    }
}

impl Config {
    fn load() -> Self {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("TRIVIA_"))
            .extract()
            .unwrap_or_else(|e| {
                eprintln!("invalid configuration: {e}");
                std::process::exit(1);
            })
    }
}
