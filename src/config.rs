//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::state::{ScrollState, DEFAULT_DEBOUNCE};

/// User configuration; every key is optional
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    /// Delay between the last keystroke and field validation
    pub debounce_ms: Option<u64>,
    /// Sanitize submitted values and redact every value in logs
    pub defensive: Option<bool>,
    /// Start every page in the dark theme
    pub dark_theme: Option<bool>,
    /// Make the simulated endpoint reject submissions
    pub simulate_failure: Option<bool>,
    /// Simulated network latency of a submission
    pub submit_latency_ms: Option<u64>,
    /// Site document to load instead of the bundled one
    pub site_path: Option<PathBuf>,
    /// Duration of a smooth scroll
    pub scroll_duration_ms: Option<u64>,
}

impl SiteConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "portfolio", "portfolio-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn data_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let config: SiteConfig = serde_json::from_str(&content)
                    .with_context(|| format!("Invalid config file {}", path.display()))?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn debounce(&self) -> Duration {
        self.debounce_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DEBOUNCE)
    }

    pub fn defensive(&self) -> bool {
        self.defensive.unwrap_or(true)
    }

    pub fn dark_theme(&self) -> bool {
        self.dark_theme.unwrap_or(false)
    }

    pub fn simulate_failure(&self) -> bool {
        self.simulate_failure.unwrap_or(false)
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms.unwrap_or(0))
    }

    pub fn scroll_duration(&self) -> Duration {
        self.scroll_duration_ms
            .map(Duration::from_millis)
            .unwrap_or(ScrollState::DEFAULT_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert!(config.debounce_ms.is_none());
        assert!(config.defensive.is_none());
        assert!(config.dark_theme.is_none());
        assert!(config.simulate_failure.is_none());
        assert!(config.submit_latency_ms.is_none());
        assert!(config.site_path.is_none());
        assert!(config.scroll_duration_ms.is_none());
    }

    #[test]
    fn test_default_accessors() {
        let config = SiteConfig::default();
        assert_eq!(config.debounce(), Duration::from_millis(300));
        assert!(config.defensive());
        assert!(!config.dark_theme());
        assert!(!config.simulate_failure());
        assert_eq!(config.submit_latency(), Duration::ZERO);
        assert_eq!(config.scroll_duration(), ScrollState::DEFAULT_DURATION);
    }

    #[test]
    fn test_serialization() {
        let config = SiteConfig {
            debounce_ms: Some(150),
            defensive: Some(false),
            dark_theme: Some(true),
            simulate_failure: Some(true),
            submit_latency_ms: Some(800),
            site_path: Some(PathBuf::from("/tmp/site.json")),
            scroll_duration_ms: Some(0),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: SiteConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.debounce(), Duration::from_millis(150));
        assert!(!parsed.defensive());
        assert!(parsed.dark_theme());
        assert!(parsed.simulate_failure());
        assert_eq!(parsed.submit_latency(), Duration::from_millis(800));
        assert_eq!(parsed.site_path, Some(PathBuf::from("/tmp/site.json")));
        assert_eq!(parsed.scroll_duration(), Duration::ZERO);
    }

    #[test]
    fn test_partial_serialization() {
        let config = SiteConfig {
            dark_theme: Some(true),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: SiteConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.dark_theme, Some(true));
        assert!(parsed.debounce_ms.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: SiteConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.site_path.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"debounce_ms": 500, "unknown_field": "value"}"#;
        let parsed: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.debounce(), Duration::from_millis(500));
    }

    #[test]
    fn test_config_path_returns_option() {
        let _path = SiteConfig::config_path();
        let _dir = SiteConfig::data_dir();
    }

    #[test]
    fn test_load_returns_ok() {
        // Either the user's file or the defaults
        assert!(SiteConfig::load().is_ok());
    }
}
