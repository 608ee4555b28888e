use std::env;
use std::num::ParseIntError;

use thiserror::Error;

pub const DEFAULT_NOTION_API_URL: &str = "https://api.notion.com";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("PORT must be a valid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub notion_api_url: String,
    pub is_production: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            notion_api_url: env::var("NOTION_API_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_NOTION_API_URL.to_string()),
            is_production: env::var("APP_ENV").as_deref() == Ok("production"),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
