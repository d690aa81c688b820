//! Server configuration, read from the environment (and a `.env` file when present).

use artsy::{Credentials, ARTSY_BASE_URL};
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),
    #[error("Invalid value {value:?} for {name}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub credentials: Credentials,
    pub artsy_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };
        let credentials = Credentials {
            client_id: required("CLIENT_ID")?,
            client_secret: required("CLIENT_SECRET")?,
        };
        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value })?,
            None => DEFAULT_PORT,
        };
        let artsy_url = lookup("ARTSY_API_URL").unwrap_or_else(|| ARTSY_BASE_URL.to_string());
        Ok(Self {
            credentials,
            artsy_url,
            port,
        })
    }
}
