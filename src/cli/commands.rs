//! CLI command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::PathBuf;

use crate::config::{paths, Config, ConfigLoader};
use crate::scanner::{ContentMatcher, ContentScanner};

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get configuration value
    Get {
        /// Configuration key (e.g., "content", "scanner.followSymlinks")
        key: Option<String>,
    },
    /// Set configuration value
    Set {
        /// Configuration key (e.g., "content", "scanner.followSymlinks")
        key: String,
        /// Configuration value
        value: String,
        /// Write to the user-level config instead of the project config
        #[arg(long)]
        user: bool,
    },
    /// List all configuration
    List,
    /// Show configuration file paths
    Path,
    /// Validate configuration
    Validate,
}

/// Handle configuration subcommands
pub fn handle_config_command(cmd: ConfigSubcommand) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;

    match cmd {
        ConfigSubcommand::Get { key } => {
            // Load config (will use defaults if no file exists)
            let loaded = ConfigLoader::load(&cwd).context("Failed to load configuration")?;

            if let Some(key) = key {
                // Get specific key
                let value = crate::config::get_config_value(&loaded.config, &key)?;
                println!("{}", value.trim_end());
            } else {
                // Print all config as YAML
                let yaml = serde_yaml::to_string(&loaded.config)
                    .context("Failed to serialize configuration")?;
                print!("{}", yaml);
            }
        }
        ConfigSubcommand::Set { key, value, user } => {
            if user {
                // Load existing user config or start from defaults
                let user_path = paths::user_config_path();
                let mut config = ConfigLoader::load_file(&user_path)
                    .unwrap_or_else(|_| ConfigLoader::load_defaults());

                crate::config::set_config_value(&mut config, &key, &value)
                    .with_context(|| format!("Failed to set {} = {}", key, value))?;

                ConfigLoader::save_user(&config).context("Failed to save user configuration")?;
                println!("Configuration saved: {}", user_path.display());
            } else {
                // Modify the nearest project config, or create one here
                let (mut config, target_dir) = match paths::find_project_config(&cwd) {
                    Some(path) => {
                        let dir = path
                            .parent()
                            .map(PathBuf::from)
                            .unwrap_or_else(|| cwd.clone());
                        (ConfigLoader::load_file(&path)?, dir)
                    }
                    None => (ConfigLoader::load_defaults(), cwd.clone()),
                };

                crate::config::set_config_value(&mut config, &key, &value)
                    .with_context(|| format!("Failed to set {} = {}", key, value))?;

                ConfigLoader::save_project(&config, &target_dir)
                    .context("Failed to save project configuration")?;
                println!(
                    "Configuration saved: {}",
                    paths::project_config_path(&target_dir).display()
                );
            }
        }
        ConfigSubcommand::List => {
            let loaded = ConfigLoader::load(&cwd).context("Failed to load configuration")?;

            let yaml =
                serde_yaml::to_string(&loaded.config).context("Failed to serialize configuration")?;
            print!("{}", yaml);
        }
        ConfigSubcommand::Path => {
            let user_path = paths::user_config_path();
            println!(
                "User config: {} {}",
                user_path.display(),
                if user_path.is_file() { "(exists)" } else { "(not found)" }
            );
            match paths::find_project_config(&cwd) {
                Some(path) => println!("Project config: {} (exists)", path.display()),
                None => println!("Project config: {} (not found)", paths::PROJECT_CONFIG_FILE),
            }
        }
        ConfigSubcommand::Validate => {
            ConfigLoader::validate(&cwd).context("Configuration validation failed")?;
            println!("Configuration is valid");
        }
    }

    Ok(())
}

/// Handle the init command: write a starter project config
pub fn handle_init(force: bool) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let target = paths::project_config_path(&cwd);

    if target.exists() && !force {
        return Err(anyhow::anyhow!(
            "{} already exists (use --force to overwrite)",
            target.display()
        ));
    }

    ConfigLoader::save(&Config::default(), &target)
        .context("Failed to write starter configuration")?;
    println!("Created {}", target.display());

    Ok(())
}

/// Handle the scan command: list matched content files or their class candidates
pub fn handle_scan(config_path: Option<PathBuf>, classes: bool, json: bool) -> Result<()> {
    let loaded = match config_path {
        Some(path) => ConfigLoader::load_path(&path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
            ConfigLoader::load(&cwd).context("Failed to load configuration")?
        }
    };

    ConfigLoader::validate_config(&loaded.config)?;

    let matcher = ContentMatcher::new(&loaded.base_dir, &loaded.config.content)?;
    let scanner = ContentScanner::new(matcher, loaded.config.scanner.clone());

    if classes {
        let candidates = scanner.scan_classes()?;
        if json {
            let list: Vec<&String> = candidates.iter().collect();
            println!("{}", serde_json::to_string_pretty(&list)?);
        } else {
            for candidate in candidates {
                println!("{}", candidate);
            }
        }
    } else {
        let files = scanner.scan()?;
        if json {
            let list: Vec<String> = files
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect();
            println!("{}", serde_json::to_string_pretty(&list)?);
        } else {
            for file in files {
                println!("{}", file.display());
            }
        }
    }

    Ok(())
}
