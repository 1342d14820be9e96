//! Storefront configuration.

use anyhow::{bail, Context, Result};
use bookstore_commerce::Currency;
use bookstore_observability::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};

/// The config file bundled with the app.
pub const EMBEDDED_CONFIG: &str = include_str!("../storefront.toml");

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Store identity shown in the header and footer.
    #[serde(default)]
    pub store: StoreConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Parse and validate a TOML config.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: StorefrontConfig =
            toml::from_str(content).context("Failed to parse storefront config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load the bundled config.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_CONFIG).context("Bundled storefront.toml is invalid")
    }

    /// Check values serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.store.name.trim().is_empty() {
            bail!("store.name must not be empty");
        }
        if self.display.placeholder_image.trim().is_empty() {
            bail!("display.placeholder_image must not be empty");
        }
        Ok(())
    }
}

/// Store identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_name")]
    pub name: String,

    #[serde(default)]
    pub tagline: String,

    /// Postal address, one entry per rendered line.
    #[serde(default)]
    pub address_lines: Vec<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,
}

fn default_store_name() -> String {
    "Local Bookstore".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            tagline: String::new(),
            address_lines: Vec::new(),
            email: None,
            phone: None,
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency used when formatting prices. The code is matched ignoring
    /// case.
    #[serde(default)]
    pub currency: Currency,

    /// Image shown for products without their own image.
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
}

fn default_placeholder_image() -> String {
    "/api/placeholder/200/300".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            placeholder_image: default_placeholder_image(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,

    #[serde(default)]
    pub format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = StorefrontConfig::embedded().unwrap();
        assert_eq!(config.store.name, "Local Bookstore");
        assert_eq!(config.store.address_lines.len(), 2);
        assert_eq!(config.display.currency, Currency::USD);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = StorefrontConfig::from_toml_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.store, StoreConfig::default());
        assert_eq!(config.display, DisplayConfig::default());
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_settings_ignore_case() {
        let config = StorefrontConfig::from_toml_str(
            "[display]\ncurrency = \"usd\"\n\n[logging]\nlevel = \"DEBUG\"\nformat = \"Json\"\n",
        )
        .unwrap();
        assert_eq!(config.display.currency, Currency::USD);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);

        let config = StorefrontConfig::from_toml_str("[display]\ncurrency = \"gbp\"\n").unwrap();
        assert_eq!(config.display.currency, Currency::GBP);
    }

    #[test]
    fn test_unknown_currency_is_rejected() {
        let err = StorefrontConfig::from_toml_str("[display]\ncurrency = \"XYZ\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse storefront config"));
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        assert!(StorefrontConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").is_err());
    }

    #[test]
    fn test_empty_store_name_is_rejected() {
        let err = StorefrontConfig::from_toml_str("[store]\nname = \"  \"\n").unwrap_err();
        assert_eq!(err.to_string(), "store.name must not be empty");
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = StorefrontConfig::embedded().unwrap();
        let rendered = toml::to_string_pretty(&config).unwrap();
        assert_eq!(StorefrontConfig::from_toml_str(&rendered).unwrap(), config);
    }
}
