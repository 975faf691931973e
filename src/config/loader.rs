//! Configuration loader for courier-rs
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "COURIER_CONFIG_DIR";

/// Environment variable for specific configuration file
const CONFIG_FILE_ENV: &str = "COURIER_CONFIG_FILE";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "COURIER";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading
///
/// Sources, in order of priority (lowest to highest):
/// 1. `default.toml` - Base default configuration (optional; built-in
///    defaults apply when absent, so the CLI runs with zero setup)
/// 2. `{environment}.toml` - Environment-specific configuration (optional)
/// 3. `local.toml` - Local development overrides (optional)
/// 4. `COURIER_*` environment variables (highest priority)
#[derive(Debug)]
pub struct ConfigLoader {
    /// Configuration directory path
    config_dir: PathBuf,
    /// Specific configuration file path (if set, skips layered loading)
    config_file: Option<PathBuf>,
    /// Current application environment
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a new configuration loader
    ///
    /// Reads `COURIER_CONFIG_DIR`, `COURIER_CONFIG_FILE` and
    /// `COURIER_APP_ENV` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if both `COURIER_CONFIG_DIR` and
    /// `COURIER_CONFIG_FILE` are set, as they are mutually exclusive.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));

        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_file.is_some() && std::env::var(CONFIG_DIR_ENV).is_ok() {
            return Err(ConfigError::mutual_exclusivity(
                "COURIER_CONFIG_DIR and COURIER_CONFIG_FILE cannot both be set. \
                 Use COURIER_CONFIG_DIR for layered configuration or \
                 COURIER_CONFIG_FILE for a single configuration file.",
            ));
        }

        let environment = AppEnvironment::from_env();

        Ok(Self {
            config_dir,
            config_file,
            environment,
        })
    }

    /// Override the configuration file (single-file mode), e.g. from
    /// a `--config` CLI flag
    pub fn with_file(mut self, path: PathBuf) -> Self {
        self.config_file = Some(path);
        self
    }

    /// Override the application environment, e.g. from an `--env` CLI flag
    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    /// Get the current application environment
    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Load configuration from all sources
    ///
    /// If a specific configuration file is set, loads only that file.
    /// Otherwise, performs layered loading from the configuration directory.
    ///
    /// # Errors
    ///
    /// Returns an error if a requested file is missing, parsing fails, or
    /// the resulting settings fail validation.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        Ok(settings)
    }

    /// Build the config::Config instance from all sources
    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = if let Some(ref config_file) = self.config_file {
            // Single file mode; an explicitly named file must exist
            self.add_file_source(builder, config_file, true)?
        } else {
            self.build_layered_config(builder)?
        };

        // Environment variables always win.
        // COURIER_NOTIFICATIONS__DEFAULT_CHANNEL -> notifications.default_channel
        let builder = Self::add_env_source(builder);

        builder.build().map_err(ConfigError::from)
    }

    /// Build layered configuration from multiple files
    fn build_layered_config(
        &self,
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let default_path = self.config_dir.join("default.toml");
        let builder = self.add_file_source(builder, &default_path, false)?;

        let env_path = self
            .config_dir
            .join(format!("{}.toml", self.environment.as_str()));
        let builder = self.add_file_source(builder, &env_path, false)?;

        let local_path = self.config_dir.join("local.toml");
        let builder = self.add_file_source(builder, &local_path, false)?;

        Ok(builder)
    }

    /// Add a file source to the config builder
    fn add_file_source(
        &self,
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: &Path,
        required: bool,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        if required && !path.exists() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                path.display()
            )));
        }

        Ok(builder.add_source(
            File::new(path.to_str().unwrap_or_default(), FileFormat::Toml).required(required),
        ))
    }

    /// Add environment variable source to the config builder
    ///
    /// Environment variables with prefix `COURIER_` are mapped to
    /// configuration keys; double underscores separate nested keys.
    fn add_env_source(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> config::ConfigBuilder<config::builder::DefaultState> {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        )
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: None,
            environment: AppEnvironment::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChannelType;
    use std::io::Write;

    #[test]
    fn test_load_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("courier.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[notifications]\ndefault_channel = \"push\"\n[logger]\nlevel = \"warn\""
        )
        .unwrap();

        let loader = ConfigLoader {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: Some(path),
            environment: AppEnvironment::Test,
        };

        let settings = loader.load().unwrap();
        assert_eq!(settings.notifications.default_channel, ChannelType::Push);
        assert_eq!(settings.logger.level, "warn");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let loader = ConfigLoader {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: Some(PathBuf::from("/nonexistent/courier.toml")),
            environment: AppEnvironment::Test,
        };

        assert!(matches!(
            loader.load(),
            Err(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_empty_config_dir_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader {
            config_dir: dir.path().to_path_buf(),
            config_file: None,
            environment: AppEnvironment::Test,
        };

        let settings = loader.load().unwrap();
        assert_eq!(settings.notifications.default_channel, ChannelType::Email);
    }

    #[test]
    fn test_layered_environment_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.toml"),
            "[notifications]\ndefault_channel = \"email\"",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("test.toml"),
            "[notifications]\ndefault_channel = \"messaging\"",
        )
        .unwrap();

        let loader = ConfigLoader {
            config_dir: dir.path().to_path_buf(),
            config_file: None,
            environment: AppEnvironment::Test,
        };

        let settings = loader.load().unwrap();
        assert_eq!(
            settings.notifications.default_channel,
            ChannelType::Messaging
        );
    }
}
