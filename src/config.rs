use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub struct Config {
    pub port: u16,
    pub bind_address: String,
    pub database_url: String,
    pub log_level: String,
    pub profile_base_url: String,
    pub api_base_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("bind_address", &self.bind_address)
            .field("database_url", &"<redacted>")
            .field("log_level", &self.log_level)
            .field("profile_base_url", &self.profile_base_url)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            port: env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(7000),
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://nurses.db?mode=rwc".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            profile_base_url: env::var("PROFILE_BASE_URL").unwrap_or_else(|_| "https://dummyjson.com".to_string()),
            api_base_url: env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:7000".to_string()),
        }
    }
}

// Global static accessible everywhere
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
