//! Configuration loading and merging logic
//!
//! Handles loading configuration from multiple sources and merging them
//! according to precedence rules.

use super::{defaults, paths, schema::Config};
use anyhow::{Context, Result};
use globset::Glob;
use std::path::{Path, PathBuf};

/// A loaded configuration together with the directory its glob patterns
/// resolve against.
///
/// Content patterns are relative to the configuration file's own location,
/// so the loader records where the winning file came from. When no file was
/// found on disk (defaults or env-only), the working directory stands in.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The merged configuration
    pub config: Config,
    /// Directory content patterns are anchored at
    pub base_dir: PathBuf,
    /// Path of the configuration file the patterns came from, if any
    pub source: Option<PathBuf>,
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides
    /// 2. Project config (nearest `stylesieve.yaml` walking up from `start_dir`)
    /// 3. User config ($XDG_CONFIG_HOME/stylesieve/config.yaml)
    /// 4. Built-in defaults
    pub fn load(start_dir: &Path) -> Result<LoadedConfig> {
        let mut config = Self::load_defaults();
        let mut source: Option<PathBuf> = None;

        // Load user config
        let user_path = paths::user_config_path();
        if user_path.is_file() {
            let user_config = Self::load_file(&user_path)?;
            config = Self::merge_config(config, user_config);
            source = Some(user_path);
        }

        // Load project config if one exists at or above start_dir
        if let Some(project_path) = paths::find_project_config(start_dir) {
            let project_config = Self::load_file(&project_path)?;
            config = Self::merge_config(config, project_config);
            source = Some(project_path);
        }

        // Apply environment variable overrides. Env-supplied patterns come
        // from the invocation context, not from a config file, so they
        // anchor at start_dir rather than the file's directory.
        let env_overrode_content = Self::env_content_patterns().is_some();
        config = Self::apply_env_overrides(config);

        let base_dir = if env_overrode_content {
            start_dir.to_path_buf()
        } else {
            source
                .as_deref()
                .and_then(Path::parent)
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf())
        };

        tracing::debug!(
            "Loaded configuration (source: {:?}, base_dir: {})",
            source,
            base_dir.display()
        );

        Ok(LoadedConfig {
            config,
            base_dir,
            source,
        })
    }

    /// Load a configuration from an explicit file path
    ///
    /// Bypasses layering; patterns anchor at the file's parent directory.
    pub fn load_path(path: &Path) -> Result<LoadedConfig> {
        let config = Self::load_file(path)?;
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(LoadedConfig {
            config,
            base_dir,
            source: Some(path.to_path_buf()),
        })
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration by loading and checking for errors
    ///
    /// This performs strict validation - it will fail on:
    /// - Invalid YAML syntax
    /// - Invalid value types
    /// - An empty content pattern list
    /// - Glob patterns that do not compile
    /// - File read errors
    pub fn validate(start_dir: &Path) -> Result<()> {
        let loaded = Self::load(start_dir).context("Failed to load merged configuration")?;
        Self::validate_config(&loaded.config)
    }

    /// Validate an already-loaded configuration value
    pub fn validate_config(config: &Config) -> Result<()> {
        if config.content.is_empty() {
            return Err(anyhow::anyhow!(
                "content must list at least one glob pattern"
            ));
        }

        for pattern in &config.content {
            Glob::new(pattern)
                .with_context(|| format!("Invalid content glob pattern: {}", pattern))?;
        }

        Ok(())
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        defaults::default_config()
    }

    /// Merge two configurations, with `other` taking precedence
    fn merge_config(_base: Config, other: Config) -> Config {
        Config {
            content: other.content.clone(),
            theme: other.theme.clone(),
            plugins: other.plugins.clone(),
            scanner: other.scanner.clone(),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: Config) -> Config {
        if let Some(patterns) = Self::env_content_patterns() {
            config.content = patterns;
        }

        config
    }

    /// Content patterns from STYLESIEVE_CONTENT (comma-separated), if set
    /// and non-empty
    fn env_content_patterns() -> Option<Vec<String>> {
        let raw = std::env::var("STYLESIEVE_CONTENT").ok()?;
        let patterns: Vec<String> = raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if patterns.is_empty() {
            None
        } else {
            Some(patterns)
        }
    }

    /// Save configuration to a file
    pub fn save(config: &Config, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Save user-level configuration
    pub fn save_user(config: &Config) -> Result<()> {
        Self::save(config, &paths::user_config_path())
    }

    /// Save project-level configuration in a directory
    pub fn save_project(config: &Config, dir: &Path) -> Result<()> {
        Self::save(config, &paths::project_config_path(dir))
    }
}
