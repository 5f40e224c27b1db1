//! Configuration file support
//!
//! Loads the startup highlight style from ~/.glint/config.toml. Every key is
//! optional.
//!
//! Example:
//! ```toml
//! foreground = "#FF0000"
//! background = "yellow"
//! bold = true
//! italic = false
//! matcher = "case-insensitive"   # or "exact"
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use glint_core::{Color, MatcherKind};

use crate::color::parse_color;

/// Configuration settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Default foreground color of matches
    pub foreground: String,
    /// Default background color of matches
    pub background: String,
    pub bold: bool,
    pub italic: bool,
    pub matcher: MatcherKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            foreground: "red".to_string(),
            background: "yellow".to_string(),
            bold: false,
            italic: false,
            matcher: MatcherKind::CaseInsensitive,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".glint").join("config.toml"))
    }

    /// Load configuration, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => {
                let contents = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                Self::parse(&contents)
                    .with_context(|| format!("Invalid config in {}", path.display()))
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn foreground_color(&self) -> Result<Color> {
        parse_color(&self.foreground).context("Invalid foreground color")
    }

    pub fn background_color(&self) -> Result<Color> {
        parse_color(&self.background).context("Invalid background color")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_config() {
        let config = Config::parse(
            r##"
foreground = "#00FF00"
bold = true
matcher = "exact"
"##,
        )
        .unwrap();

        assert_eq!(config.foreground_color().unwrap(), Color::rgb(0, 255, 0));
        assert_eq!(config.background_color().unwrap(), Color::rgb(255, 255, 0));
        assert!(config.bold);
        assert!(!config.italic);
        assert_eq!(config.matcher, MatcherKind::Exact);
    }

    #[test]
    fn test_rejects_unknown_matcher() {
        assert!(Config::parse("matcher = \"fuzzy\"").is_err());
    }
}
