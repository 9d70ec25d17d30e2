//! Service configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 8002;
pub const APP_NAME: &str = "Skips API";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("production") => Self::Production,
            _ => Self::Development,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub environment: Environment,
    pub app_name: String,
    pub version: String,
}

impl Config {
    /// Build config from the process environment, loading `.env` first if present.
    ///
    /// Optional:
    /// - `PORT`: default 8002
    /// - `ENVIRONMENT`: `development` (default) or `production`
    ///
    /// # Errors
    ///
    /// Returns `InvalidPort` if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("ENVIRONMENT").ok().as_deref(),
        )
    }

    fn from_vars(port: Option<&str>, environment: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            environment: Environment::parse(environment),
            app_name: APP_NAME.to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            environment: Environment::Development,
            app_name: APP_NAME.to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
