//! Environment-based application configuration.

use crate::server::error::config::ConfigError;

static DEFAULT_HOST: &str = "0.0.0.0";
static DEFAULT_PORT: u16 = 8080;

/// Server configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Database connection string (`DATABASE_URL`)
    pub database_url: String,
    /// Interface to bind the HTTP listener to (`HOST`)
    pub host: String,
    /// Port to bind the HTTP listener to (`PORT`)
    pub port: u16,
}

impl Config {
    /// Reads configuration from process environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - `PORT` is not a valid port number
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// Used by [`Config::from_env`] with the process environment; tests supply their own
    /// lookup so they don't need to mutate global state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(port) => port.parse().map_err(|e| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: format!("{}", e),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    /// Address the HTTP listener binds to, in `host:port` form
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
