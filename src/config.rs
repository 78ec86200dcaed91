use anyhow::{Context, Result};
use std::path::PathBuf;

/// Fallback backend location when `NEXT_PUBLIC_API_BASE_URL` is unset.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct Config {
    // External backend
    pub api_base_url: String,

    // Server
    pub host: String,
    pub port: u16,

    // Static files (cv.pdf)
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(v) => v.parse().context("PORT must be a valid port number")?,
            Err(_) => 3000,
        };

        Ok(Self {
            // Kept under its historical name so existing deployments keep working
            api_base_url: std::env::var("NEXT_PUBLIC_API_BASE_URL")
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),

            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,

            static_dir: std::env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public")),
        })
    }

    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Settings for the stub backend binary.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub app_name: String,
    pub app_version: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub chat_max_message_chars: usize,
}

impl BackendConfig {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("BACKEND_PORT") {
            Ok(v) => v.parse().context("BACKEND_PORT must be a valid port number")?,
            Err(_) => 8000,
        };

        Ok(Self {
            app_name: std::env::var("APP_NAME")
                .unwrap_or_else(|_| "AI Architect Backend".to_string()),
            app_version: std::env::var("APP_VERSION").unwrap_or_else(|_| "0.1.0".to_string()),
            host: std::env::var("BACKEND_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(|_| {
                    vec![
                        "http://localhost:3000".to_string(),
                        "http://127.0.0.1:3000".to_string(),
                    ]
                }),
            chat_max_message_chars: std::env::var("CHAT_MAX_MESSAGE_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2000),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Settings for the terminal chat client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub site_url: String,
    pub locale: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            site_url: std::env::var("SITE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "http://127.0.0.1:3000".to_string()),
            locale: std::env::var("CHAT_LOCALE").unwrap_or_else(|_| "fr".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_site_env() {
        for key in ["NEXT_PUBLIC_API_BASE_URL", "HOST", "PORT", "STATIC_DIR"] {
            std::env::remove_var(key);
        }
    }

    // ==================== Site Config Tests ====================

    #[test]
    #[serial]
    fn test_site_defaults() {
        clear_site_env();
        let config = Config::from_env().expect("defaults should load");

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.port, 3000);
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    #[serial]
    fn test_api_base_url_trailing_slash_trimmed() {
        clear_site_env();
        std::env::set_var("NEXT_PUBLIC_API_BASE_URL", "https://api.example.com/");
        let config = Config::from_env().unwrap();
        clear_site_env();

        assert_eq!(config.api_base_url, "https://api.example.com");
    }

    #[test]
    #[serial]
    fn test_blank_api_base_url_uses_default() {
        clear_site_env();
        std::env::set_var("NEXT_PUBLIC_API_BASE_URL", "   ");
        let config = Config::from_env().unwrap();
        clear_site_env();

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_error() {
        clear_site_env();
        std::env::set_var("PORT", "not-a-port");
        let result = Config::from_env();
        clear_site_env();

        let err = result.unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    // ==================== Backend Config Tests ====================

    #[test]
    #[serial]
    fn test_backend_cors_origins_parsed() {
        std::env::set_var("CORS_ORIGINS", "https://a.example, ,https://b.example");
        let config = BackendConfig::from_env().unwrap();
        std::env::remove_var("CORS_ORIGINS");

        assert_eq!(
            config.cors_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }

    #[test]
    #[serial]
    fn test_backend_defaults() {
        for key in ["CORS_ORIGINS", "BACKEND_PORT", "CHAT_MAX_MESSAGE_CHARS", "APP_NAME"] {
            std::env::remove_var(key);
        }
        let config = BackendConfig::from_env().unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.chat_max_message_chars, 2000);
        assert_eq!(config.app_name, "AI Architect Backend");
        assert_eq!(config.cors_origins.len(), 2);
    }
}
