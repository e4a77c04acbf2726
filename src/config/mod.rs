//! Configuration module for the WGW backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Admin sign-in email (sign-in is disabled when unset)
    pub admin_email: Option<String>,
    /// Admin sign-in password (sign-in is disabled when unset)
    pub admin_password: Option<String>,
    /// How long an issued session stays valid
    pub session_ttl: Duration,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let admin_email = env::var("WGW_ADMIN_EMAIL").ok();
        let admin_password = env::var("WGW_ADMIN_PASSWORD").ok();

        let session_ttl_secs = env::var("WGW_SESSION_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(86_400u64);

        let db_path = env::var("WGW_DB_PATH")
            .unwrap_or_else(|_| "./data/app.sqlite".to_string())
            .into();

        let bind_addr = env::var("WGW_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid WGW_BIND_ADDR format");

        let log_level = env::var("WGW_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            admin_email,
            admin_password,
            session_ttl: Duration::from_secs(session_ttl_secs),
            db_path,
            bind_addr,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("WGW_ADMIN_EMAIL");
        env::remove_var("WGW_ADMIN_PASSWORD");
        env::remove_var("WGW_SESSION_TTL_SECS");
        env::remove_var("WGW_DB_PATH");
        env::remove_var("WGW_BIND_ADDR");
        env::remove_var("WGW_LOG_LEVEL");

        let config = Config::from_env();

        assert!(config.admin_email.is_none());
        assert!(config.admin_password.is_none());
        assert_eq!(config.session_ttl, Duration::from_secs(86_400));
        assert_eq!(config.db_path, PathBuf::from("./data/app.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
    }
}
