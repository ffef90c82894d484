//! Site-level configuration for language resolution and redirecting.
//!
//! The settings here are the knobs a site operator controls: the default
//! language, whether the root-path language redirect is active, and how long
//! a visitor's language preference is kept before it expires. Configuration
//! is stored as a `site.toml` file in the platform config directory.
//!
//! # Examples
//!
//! ```no_run
//! use blog_lang::config;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Turn the language redirect on
//! config.redirect_enabled = true;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use defaults::{DEFAULT_LANGUAGE, DEFAULT_PREFERENCE_TTL_DAYS, DEFAULT_REDIRECT_ENABLED};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "site.toml";
const APP_NAME: &str = "BlogLang";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Language shown when nothing else determines one (`BLOG.LANG` analog).
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Whether the root-path language redirect runs at all.
    #[serde(default)]
    pub redirect_enabled: bool,
    /// How long a stored language preference stays valid, in days.
    /// Negative values produce an already-expired preference.
    #[serde(default = "default_ttl_days")]
    pub preference_ttl_days: i64,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_ttl_days() -> i64 {
    DEFAULT_PREFERENCE_TTL_DAYS
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            redirect_enabled: DEFAULT_REDIRECT_ENABLED,
            preference_ttl_days: DEFAULT_PREFERENCE_TTL_DAYS,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<SiteConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(SiteConfig::default())
}

pub fn save(config: &SiteConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<SiteConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &SiteConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = SiteConfig {
            default_language: "fr-FR".to_string(),
            redirect_enabled: true,
            preference_ttl_days: 7,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("site.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("site.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, SiteConfig::default());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("site.toml");
        fs::write(&config_path, "redirect_enabled = true\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.redirect_enabled);
        assert_eq!(loaded.default_language, DEFAULT_LANGUAGE);
        assert_eq!(loaded.preference_ttl_days, DEFAULT_PREFERENCE_TTL_DAYS);
    }

    #[test]
    fn default_config_disables_redirect() {
        let config = SiteConfig::default();
        assert!(!config.redirect_enabled);
        assert_eq!(config.default_language, "en-US");
    }
}
