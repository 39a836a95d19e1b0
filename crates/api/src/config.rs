use bcr_core::pagination::DEFAULT_PAGE_SIZE;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got {value:?}")]
    InvalidValue {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Name shown in the health check message (default: `BCR`).
    pub service_name: String,
    /// Page size applied when a list request omits `pageSize` (default: `10`).
    pub default_page_size: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SERVICE_NAME`         | `BCR`                      |
    /// | `DEFAULT_PAGE_SIZE`    | `10`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = parse_var("PORT", "3000", "u16")?;

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = parse_var("REQUEST_TIMEOUT_SECS", "30", "u64")?;

        let service_name = std::env::var("SERVICE_NAME").unwrap_or_else(|_| "BCR".into());

        let default_page_size: i64 = parse_var(
            "DEFAULT_PAGE_SIZE",
            &DEFAULT_PAGE_SIZE.to_string(),
            "positive integer",
        )?;
        if default_page_size < 1 {
            return Err(ConfigError::InvalidValue {
                var: "DEFAULT_PAGE_SIZE",
                expected: "positive integer",
                value: default_page_size.to_string(),
            });
        }

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            service_name,
            default_page_size,
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    var: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    let value = std::env::var(var).unwrap_or_else(|_| default.to_string());
    match value.trim().parse() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(ConfigError::InvalidValue {
            var,
            expected,
            value,
        }),
    }
}
