//! Configuration management for Natal CLI
//!
//! Reads display settings from ~/.config/natal/config.toml. Nothing the user
//! enters is ever written back.

use anyhow::{Context, Result};
use natal::{ZodiacCatalog, ZodiacSign, DEFAULT_DATE_FORMAT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "natal";
const CONFIG_FILE: &str = "config.toml";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// chrono format for dates on the command line and in prompts
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_true")]
    pub color: bool,
    /// Ask for acknowledgement after an alert when attached to a terminal
    #[serde(default = "default_true")]
    pub interactive_alerts: bool,
    /// tracing filter used when RUST_LOG is unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
    /// Replacement sign descriptions, keyed by sign name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub descriptions: BTreeMap<String, String>,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            color: true,
            interactive_alerts: true,
            log_filter: None,
            descriptions: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or fall back to defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| "Failed to parse config file")
    }

    /// Write a config file, creating the directory if needed
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Built-in catalog with the configured descriptions applied
    pub fn zodiac_catalog(&self) -> Result<ZodiacCatalog> {
        self.descriptions
            .iter()
            .try_fold(ZodiacCatalog::new(), |catalog, (name, text)| {
                let sign: ZodiacSign = name
                    .parse()
                    .with_context(|| format!("Invalid key in [descriptions]: '{}'", name))?;
                Ok(catalog.with_description(sign, text.clone()))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use natal::{ChineseZodiac, WesternZodiac, ZodiacLookup};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
            date_format = "%d/%m/%Y"
            color = false
            interactive_alerts = false
            log_filter = "natal=debug"

            [descriptions]
            leo = "Roar."
            "Dragon" = "Breathes fire."
            "#,
        )
        .unwrap();

        assert_eq!(config.date_format, "%d/%m/%Y");
        assert!(!config.color);
        assert!(!config.interactive_alerts);
        assert_eq!(config.log_filter.as_deref(), Some("natal=debug"));

        let catalog = config.zodiac_catalog().unwrap();
        assert_eq!(catalog.describe(WesternZodiac::Leo.into()), "Roar.");
        assert_eq!(catalog.describe(ChineseZodiac::Dragon.into()), "Breathes fire.");
        assert_eq!(catalog.override_count(), 2);
    }

    #[test]
    fn test_unknown_sign_in_descriptions() {
        let config = Config::parse("[descriptions]\nophiuchus = \"?\"\n").unwrap();

        let err = config.zodiac_catalog().unwrap_err();
        assert!(err.to_string().contains("ophiuchus"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("natal-config-does-not-exist.toml");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}
