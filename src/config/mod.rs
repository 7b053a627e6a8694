//! Configuration system for stylesieve
//!
//! This module provides the content-path configuration layer: a typed schema
//! for the `content`/`theme`/`plugins` shape, layered loading, and persistent
//! settings.

mod defaults;
pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::{ConfigLoader, LoadedConfig};
#[allow(unused_imports)] // Public API exports - may be used by external code
pub use schema::Config;
#[allow(unused_imports)] // Public API exports - may be used by external code
pub use schema::ScannerConfig;
#[allow(unused_imports)] // Public API exports - may be used by external code
pub use schema::ThemeConfig;

/// Get a configuration value by key (dot notation)
pub fn get_config_value(config: &schema::Config, key: &str) -> anyhow::Result<String> {
    match key {
        "content" => {
            // Return as YAML array
            serde_yaml::to_string(&config.content)
                .map_err(|e| anyhow::anyhow!("Failed to serialize content: {}", e))
        }
        "theme.extend" => serde_yaml::to_string(&config.theme.extend)
            .map_err(|e| anyhow::anyhow!("Failed to serialize theme.extend: {}", e)),
        "plugins" => serde_yaml::to_string(&config.plugins)
            .map_err(|e| anyhow::anyhow!("Failed to serialize plugins: {}", e)),
        "scanner.followSymlinks" => Ok(config.scanner.follow_symlinks.to_string()),
        "scanner.includeHidden" => Ok(config.scanner.include_hidden.to_string()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key (dot notation)
pub fn set_config_value(config: &mut schema::Config, key: &str, value: &str) -> anyhow::Result<()> {
    use anyhow::Context;
    match key {
        "content" => {
            // Parse as YAML array or comma-separated list
            let patterns: Vec<String> = if value.trim_start().starts_with('[') {
                // YAML array format
                serde_yaml::from_str(value).context(
                    "content must be a YAML array (e.g., ['templates/**/*.html'])",
                )?
            } else {
                // Comma-separated list format
                value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            };

            if patterns.is_empty() {
                return Err(anyhow::anyhow!(
                    "content must list at least one glob pattern"
                ));
            }

            config.content = patterns;
        }
        "theme.extend" => {
            config.theme.extend = serde_yaml::from_str(value)
                .context("theme.extend must be a YAML mapping (e.g., '{colors: {brand: \"#fff\"}}')")?;
        }
        "plugins" => {
            config.plugins = serde_yaml::from_str(value)
                .context("plugins must be a YAML array (e.g., ['typography'])")?;
        }
        "scanner.followSymlinks" => {
            config.scanner.follow_symlinks = value
                .parse()
                .context("scanner.followSymlinks must be 'true' or 'false'")?;
        }
        "scanner.includeHidden" => {
            config.scanner.include_hidden = value
                .parse()
                .context("scanner.includeHidden must be 'true' or 'false'")?;
        }
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_content_comma_separated() {
        let mut config = Config::default();
        set_config_value(&mut config, "content", "a/**/*.html, b/**/*.html").unwrap();
        assert_eq!(config.content, vec!["a/**/*.html", "b/**/*.html"]);
    }

    #[test]
    fn test_set_content_yaml_array() {
        let mut config = Config::default();
        set_config_value(&mut config, "content", "['../templates/**/*.html']").unwrap();
        assert_eq!(config.content, vec!["../templates/**/*.html"]);
    }

    #[test]
    fn test_set_content_rejects_empty() {
        let mut config = Config::default();
        assert!(set_config_value(&mut config, "content", " , ").is_err());
    }

    #[test]
    fn test_get_unknown_key() {
        let config = Config::default();
        assert!(get_config_value(&config, "nope").is_err());
    }

    #[test]
    fn test_scanner_flags_round_trip() {
        let mut config = Config::default();
        set_config_value(&mut config, "scanner.followSymlinks", "true").unwrap();
        assert_eq!(
            get_config_value(&config, "scanner.followSymlinks").unwrap(),
            "true"
        );
    }
}
