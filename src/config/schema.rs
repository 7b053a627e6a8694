//! Configuration schema definitions
//!
//! Defines the structure of configuration files using serde for serialization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration structure
///
/// The three core fields (`content`, `theme`, `plugins`) are always present
/// in serialized output, even when empty: the downstream style tool expects
/// a complete shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns identifying template files to scan for class usage.
    /// Resolved relative to the configuration file's own directory. Order is
    /// preserved for readability; semantically the patterns are a union.
    #[serde(default = "default_content")]
    pub content: Vec<String>,

    /// Theme customization
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Tool extensions. Entries are opaque values (identifier strings or
    /// objects); this crate carries them without interpreting them.
    #[serde(default)]
    pub plugins: Vec<serde_yaml::Value>,

    /// Scanner behavior
    #[serde(default, skip_serializing_if = "ScannerConfig::is_default")]
    pub scanner: ScannerConfig,
}

/// Theme customization
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Style-token overrides (colors, spacing, etc.). Keys and values are
    /// opaque to this crate and pass through serialization untouched.
    #[serde(default)]
    pub extend: BTreeMap<String, serde_yaml::Value>,
}

/// Scanner behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScannerConfig {
    /// Follow symbolic links during the content walk
    #[serde(default = "default_false")]
    pub follow_symlinks: bool,

    /// Include dot-prefixed files and directories
    #[serde(default = "default_false")]
    pub include_hidden: bool,
}

impl ScannerConfig {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

// Default value functions
fn default_content() -> Vec<String> {
    vec!["templates/**/*.html".to_string()]
}

fn default_false() -> bool {
    false
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content: default_content(),
            theme: ThemeConfig::default(),
            plugins: Vec::new(),
            scanner: ScannerConfig::default(),
        }
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: default_false(),
            include_hidden: default_false(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.content, vec!["templates/**/*.html"]);
        assert!(config.theme.extend.is_empty());
        assert!(config.plugins.is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        // Complete shape: all three core fields serialize even when empty
        assert!(yaml.contains("content"));
        assert!(yaml.contains("theme"));
        assert!(yaml.contains("plugins"));
        // Default scanner section is omitted
        assert!(!yaml.contains("scanner"));
    }

    #[test]
    fn test_config_deserialization() {
        let yaml = r#"
content:
  - "../templates/**/*.html"
theme:
  extend: {}
plugins: []
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.content, vec!["../templates/**/*.html"]);
        assert!(config.theme.extend.is_empty());
        assert!(config.plugins.is_empty());
    }

    #[test]
    fn test_theme_extend_round_trips_opaque_values() {
        let yaml = r##"
content:
  - "templates/**/*.html"
theme:
  extend:
    colors:
      brand: "#1d4ed8"
plugins:
  - "typography"
"##;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.plugins.len(), 1);
        assert!(config.theme.extend.contains_key("colors"));

        let reserialized = serde_yaml::to_string(&config).unwrap();
        let reparsed: Config = serde_yaml::from_str(&reserialized).unwrap();
        assert_eq!(config, reparsed);
    }
}
