//! Configuration management for Workscout.
//!
//! Handles loading configuration from TOML files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Structure traversal settings
    pub structure: StructureConfig,

    /// Suggestion settings
    pub suggest: SuggestConfig,
}

/// Structure traversal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureConfig {
    /// Maximum depth below the project root
    pub max_depth: usize,
}

/// Suggestion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Default minimum confidence for displayed suggestions
    pub min_confidence: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self { structure: StructureConfig::default(), suggest: SuggestConfig::default() }
    }
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self { max_depth: 3 }
    }
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self { min_confidence: 0.0 }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Looks for config in:
    /// 1. `.workscout.toml` in current directory
    /// 2. `~/.config/workscout/config.toml`
    /// 3. Falls back to defaults
    pub fn load() -> anyhow::Result<Self> {
        let local_config = PathBuf::from(".workscout.toml");
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let global_config = config_dir.join("workscout").join("config.toml");
            if global_config.exists() {
                return Self::load_from_file(&global_config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("workscout"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.structure.max_depth, 3);
        assert!(config.suggest.min_confidence.abs() < f32::EPSILON);
    }

    #[test]
    fn test_load_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[suggest]\nmin_confidence = 0.5\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert!((config.suggest.min_confidence - 0.5).abs() < f32::EPSILON);
        // Unset sections keep defaults
        assert_eq!(config.structure.max_depth, 3);
    }

    #[test]
    fn test_load_invalid_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        assert!(Config::load_from_file(&path).is_err());
    }
}
