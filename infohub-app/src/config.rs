//! Configuration loading from environment.

use std::env;

// Published free-tier key; lets the server start unconfigured.
const DEFAULT_API_NINJAS_KEY: &str = "aXJF8DUXeo1vjs0NG1T0qg==VvdhTgHRKpseEVLu";

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub default_city: String,
    pub api_ninjas_key: String,
}

impl Config {
    /// Loads configuration from environment variables. Every variable has
    /// a fallback default, so an empty environment still boots.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse()?;

        let default_city = env::var("WEATHER_CITY").unwrap_or_else(|_| "Hyderabad".to_string());

        let api_ninjas_key =
            env::var("API_NINJAS_KEY").unwrap_or_else(|_| DEFAULT_API_NINJAS_KEY.to_string());

        Ok(Self {
            port,
            default_city,
            api_ninjas_key,
        })
    }
}
