//! stylesieve library
//!
//! Content-path configuration for a utility-CSS build: a typed
//! `content`/`theme`/`plugins` config, a glob matcher anchored at the config
//! file's directory, and a filesystem scanner that reports the template files
//! to inspect for style-class usage.

pub mod cli;
pub mod config;
pub mod scanner;

// Re-export commonly used types for convenience
pub use config::{get_config_value, set_config_value, Config, ConfigLoader, LoadedConfig};
pub use scanner::{class_candidates, ContentMatcher, ContentScanner, ScanError, ScanResult};
