// Content scanner for stylesieve
//
// Turns the configured content patterns into a glob matcher anchored at the
// config directory, walks the matching subtrees, and extracts style-class
// candidates from the files it finds.

pub mod extract;
pub mod matcher;
pub mod walker;

pub use extract::class_candidates;
pub use matcher::ContentMatcher;
pub use walker::ContentScanner;

/// Scanner errors
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Invalid content pattern: {0}")]
    InvalidPattern(String),

    #[error("Failed to resolve working directory: {0}")]
    WorkingDir(String),
}

/// Result type for scanner operations
pub type ScanResult<T> = Result<T, ScanError>;
