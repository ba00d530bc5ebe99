// src/config.rs
use std::env;
use thiserror::Error;

/// Which backing store the article service talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreConfig {
    /// Hosted PostgREST endpoint (Supabase project URL + anon key).
    Rest { url: String, api_key: String },
    Postgres { database_url: String },
    Memory,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    store: StoreConfig,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

impl AppConfig {
    /// Build configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let listen_addr = get("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let kind = get("ARTICLE_STORE").unwrap_or_else(|| "rest".into());
        let store = match kind.to_ascii_lowercase().as_str() {
            "rest" | "supabase" => {
                let url = require("SUPABASE_URL")?;
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ConfigError::Invalid(format!(
                        "SUPABASE_URL must be an http(s) URL, got `{url}`"
                    )));
                }
                StoreConfig::Rest {
                    url,
                    api_key: require("SUPABASE_ANON_KEY")?,
                }
            }
            "postgres" => StoreConfig::Postgres {
                database_url: require("DATABASE_URL")?,
            },
            "memory" => StoreConfig::Memory,
            other => {
                return Err(ConfigError::Invalid(format!(
                    "ARTICLE_STORE must be one of rest, postgres, memory; got `{other}`"
                )));
            }
        };

        Ok(Self { listen_addr, store })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn store(&self) -> &StoreConfig {
        &self.store
    }
}
