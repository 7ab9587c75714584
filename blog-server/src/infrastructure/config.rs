use anyhow::{Context, Result};

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:8000,http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("HTTP_PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("HTTP_PORT is not a valid port: {raw}"))?,
            Err(_) => 3000,
        };
        // Получаем разрешенные CORS домены из .env
        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string());

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn cors_origins(&self) -> impl Iterator<Item = &str> {
        self.cors_allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["HTTP_HOST", "HTTP_PORT", "CORS_ALLOWED_ORIGINS"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn defaults_without_env() {
        clear_env();
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.http_addr(), "0.0.0.0:3000");
        assert_eq!(
            config.cors_origins().collect::<Vec<_>>(),
            vec!["http://localhost:8000", "http://127.0.0.1:8000"]
        );
    }

    #[test]
    #[serial]
    fn reads_env_overrides() {
        clear_env();
        std::env::set_var("HTTP_HOST", "127.0.0.1");
        std::env::set_var("HTTP_PORT", "8080");
        std::env::set_var("CORS_ALLOWED_ORIGINS", " http://a.test , ,http://b.test");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.http_addr(), "127.0.0.1:8080");
        assert_eq!(
            config.cors_origins().collect::<Vec<_>>(),
            vec!["http://a.test", "http://b.test"]
        );
        clear_env();
    }

    #[test]
    #[serial]
    fn rejects_bad_port() {
        clear_env();
        std::env::set_var("HTTP_PORT", "not-a-port");
        assert!(ServerConfig::from_env().is_err());
        clear_env();
    }
}
