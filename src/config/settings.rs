//! Configuration settings structures for courier-rs
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::LoggerConfig;
use crate::models::ChannelType;

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "courier-rs".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_channel() -> ChannelType {
    ChannelType::Email
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Notification Configuration
// ============================================================================

/// Notification dispatch configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Channel used when the CLI does not select one explicitly
    #[serde(default = "default_channel")]
    pub default_channel: ChannelType,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            default_channel: default_channel(),
        }
    }
}

// ============================================================================
// Root Settings
// ============================================================================

/// Root settings structure holding every configuration section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub application: ApplicationConfig,

    #[serde(default)]
    pub logger: LoggerConfig,

    #[serde(default)]
    pub notifications: NotificationSettings,
}

impl Settings {
    /// Validate the loaded settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.application.name.trim().is_empty() {
            return Err(ConfigError::validation(
                "application.name",
                "Application name cannot be empty",
            ));
        }

        self.logger
            .validate()
            .map_err(|e| ConfigError::validation("logger".to_string(), e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_empty_app_name_rejected() {
        let mut settings = Settings::default();
        settings.application.name = "  ".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_from_toml() {
        let settings: Settings = toml::from_str(
            r#"
            [application]
            name = "courier-test"

            [logger]
            level = "debug"

            [notifications]
            default_channel = "sms"
            "#,
        )
        .unwrap();

        assert_eq!(settings.application.name, "courier-test");
        assert_eq!(settings.logger.level, "debug");
        assert_eq!(settings.notifications.default_channel, ChannelType::Sms);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.application.name, "courier-rs");
        assert_eq!(settings.notifications.default_channel, ChannelType::Email);
    }
}
