use crate::{
    BirthdayConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, ServerConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

const LEAP_DAY_POLICY_ENV: &str = "BDAY_LEAP_DAY_POLICY";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub validation: ValidationConfig,
    pub birthday: BirthdayConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for BDAY_CONFIG_DIR env var, else use ./.bday/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply BDAY_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: BDAY_CONFIG_DIR env var > ./.bday/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.validation.validate()?;

        Ok(())
    }

    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Log file location, when file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let config_dir = Self::config_dir()?;
                Ok(Some(config_dir.join(&self.logging.dir).join(filename)))
            }
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections, busy timeout {}s)",
            self.database.path, self.database.max_connections, self.database.busy_timeout_secs
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  validation: max_username_length={}",
            self.validation.max_username_length
        );
        info!(
            "  birthday: leap_day_policy={}",
            self.birthday.leap_day_policy
        );
    }

    fn apply_env_overrides(&mut self) -> ConfigErrorResult<()> {
        // Server
        Self::apply_env_string("BDAY_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("BDAY_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("BDAY_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "BDAY_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );
        Self::apply_env_parse(
            "BDAY_DATABASE_BUSY_TIMEOUT_SECS",
            &mut self.database.busy_timeout_secs,
        );

        // Logging
        Self::apply_env_parse("BDAY_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("BDAY_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("BDAY_LOG_FILE", &mut self.logging.file);

        // Validation
        Self::apply_env_parse(
            "BDAY_VALIDATION_MAX_USERNAME_LENGTH",
            &mut self.validation.max_username_length,
        );

        // Birthday (rejected rather than ignored when unparseable)
        if let Ok(val) = std::env::var(LEAP_DAY_POLICY_ENV) {
            self.birthday.leap_day_policy =
                val.parse().map_err(|source| ConfigError::Env {
                    var: LEAP_DAY_POLICY_ENV,
                    source,
                })?;
        }

        Ok(())
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
