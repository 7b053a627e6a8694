//! stylesieve - content-path configuration and template scanner for
//! utility-first CSS builds
//!
//! Declares which template files a style build should scan for class usage
//! and runs that scan, so the downstream style tool only ever sees the files
//! the configuration points at.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use stylesieve::cli::{handle_config_command, handle_init, handle_scan, init_logging, ConfigSubcommand};

/// Content-path configuration and template scanner for utility-first CSS builds
#[derive(Parser, Debug)]
#[command(name = "stylesieve")]
#[command(version)]
#[command(about = "Declare and scan the template files a utility-CSS build inspects for class usage", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
    /// Write a starter project configuration
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
    /// List the template files matched by the content patterns
    Scan {
        /// Explicit configuration file (bypasses config discovery)
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Report extracted style-class candidates instead of file paths
        #[arg(long)]
        classes: bool,

        /// Emit JSON instead of line-oriented text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.debug);

    match args.command {
        Command::Config { subcommand } => handle_config_command(subcommand),
        Command::Init { force } => handle_init(force),
        Command::Scan {
            config,
            classes,
            json,
        } => handle_scan(config, classes, json),
    }
}
