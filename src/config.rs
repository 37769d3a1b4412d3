use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::env;

/// Front-end origins served when FRONTEND_ORIGINS is unset. The vercel entry
/// is a deployment placeholder carried over from the hosted configuration.
pub const DEFAULT_FRONTEND_ORIGINS: &str =
    "http://localhost:3001,https://your-vercel-url.vercel.app,https://podacium.com";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid SERVER_PORT".to_string()))?;

        // CORS config
        let origins_env = env::var("FRONTEND_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.to_string());
        let allowed_origins = parse_origins(&origins_env);

        let config = Config {
            server: ServerConfig {
                host: server_host,
                port: server_port,
            },
            cors: CorsConfig { allowed_origins },
        };

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> AppResult<()> {
        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "SERVER_PORT must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Split a comma-separated origin list into its entries.
///
/// Tokens are trimmed and empty segments dropped, so trailing commas and stray
/// whitespace degrade to fewer entries rather than an error. Order is
/// preserved and duplicates are kept.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
            },
            cors: CorsConfig {
                allowed_origins: vec!["http://localhost:3001".to_string()],
            },
        };

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_port_zero() {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            cors: CorsConfig {
                allowed_origins: vec![],
            },
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_origins_basic() {
        let origins = parse_origins("http://localhost:3001,https://podacium.com");
        assert_eq!(
            origins,
            vec!["http://localhost:3001", "https://podacium.com"]
        );
    }

    #[test]
    fn test_parse_origins_keeps_duplicates_in_order() {
        let origins = parse_origins("http://a.com,http://b.com,http://a.com");
        assert_eq!(
            origins,
            vec!["http://a.com", "http://b.com", "http://a.com"]
        );
    }
}
