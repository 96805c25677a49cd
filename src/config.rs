//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// JSON snapshot file for the log store (in-memory only when unset)
    pub log_store_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => 8080,
        };

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port,
            log_store_path: env::var("LOG_STORE_PATH")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        })
    }

    /// Config for tests: default frontend URL, in-memory store.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            log_store_path: None,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-global; keep every env mutation in this one test.
    #[test]
    fn test_config_from_env() {
        env::remove_var("PORT");
        env::remove_var("LOG_STORE_PATH");
        env::set_var("FRONTEND_URL", "https://carbon.example.com");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.port, 8080);
        assert_eq!(config.frontend_url, "https://carbon.example.com");
        assert_eq!(config.log_store_path, None);

        env::set_var("PORT", "9090");
        env::set_var("LOG_STORE_PATH", "/tmp/logs.json");
        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.port, 9090);
        assert_eq!(config.log_store_path, Some(PathBuf::from("/tmp/logs.json")));

        env::set_var("PORT", "not-a-port");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("PORT", _)));

        env::remove_var("PORT");
        env::remove_var("LOG_STORE_PATH");
        env::remove_var("FRONTEND_URL");
    }
}
