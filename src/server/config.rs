use crate::server::error::config::ConfigError;

const DEFAULT_APP_NAME: &str = "Car Reservation API";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG_LEVEL: &str = "debug";

/// Application configuration sourced from the process environment.
///
/// When `APP_ENV` is `test`, the port and database URL are read from the
/// `TEST_`-prefixed variables so a test database never shares state with development.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub app_name: String,
    pub environment: String,

    pub host: String,
    pub port: u16,

    pub database_url: String,

    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parsable
    /// - `Err(ConfigError::MissingEnvVar)` - The database URL is not set
    /// - `Err(ConfigError::InvalidEnvVar)` - The port is not a valid `u16`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let environment = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());
        let is_test = environment == "test";

        let (port_var, database_var) = if is_test {
            ("TEST_APP_PORT", "TEST_DATABASE_URL")
        } else {
            ("PORT", "DATABASE_URL")
        };

        let port = match lookup(port_var) {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                name: port_var.to_string(),
                value,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            app_name: lookup("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            environment,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: lookup(database_var)
                .ok_or_else(|| ConfigError::MissingEnvVar(database_var.to_string()))?,
            log_level: lookup("LOGGING_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_dir: lookup("LOGGING_DIR").filter(|dir| !dir.is_empty()),
        })
    }
}
