/// Errors raised while reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a valid u16, got '{0}'")]
    InvalidPort(String),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Document store connection string, if configured.
    pub database_url: Option<String>,
    /// Document store database name, if configured.
    pub database_name: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var         | Default   |
    /// |-----------------|-----------|
    /// | `HOST`          | `0.0.0.0` |
    /// | `PORT`          | `8000`    |
    /// | `DATABASE_URL`  | unset     |
    /// | `DATABASE_NAME` | unset     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8000,
        };

        let database_url = lookup("DATABASE_URL").filter(|s| !s.is_empty());
        let database_name = lookup("DATABASE_NAME").filter(|s| !s.is_empty());

        Ok(Self {
            host,
            port,
            database_url,
            database_name,
        })
    }
}
