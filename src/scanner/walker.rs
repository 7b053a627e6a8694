//! Content file discovery
//!
//! Walks the matcher's scan roots and collects every file the content
//! patterns match. A pattern matching zero files is not an error; the scan
//! silently proceeds with what it found.

use super::matcher::ContentMatcher;
use super::{extract, ScanResult};
use crate::config::schema::ScannerConfig;
use std::collections::BTreeSet;
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// Filesystem scanner driven by a [`ContentMatcher`]
pub struct ContentScanner {
    matcher: ContentMatcher,
    options: ScannerConfig,
}

impl ContentScanner {
    /// Create a scanner with the given matcher and behavior options
    pub fn new(matcher: ContentMatcher, options: ScannerConfig) -> Self {
        Self { matcher, options }
    }

    /// The underlying matcher
    pub fn matcher(&self) -> &ContentMatcher {
        &self.matcher
    }

    /// Collect all files matched by the content patterns
    ///
    /// Results are deduplicated and sorted. Unreadable entries are logged
    /// and skipped rather than failing the whole scan.
    pub fn scan(&self) -> ScanResult<Vec<PathBuf>> {
        let mut matched = BTreeSet::new();

        for root in self.matcher.scan_roots() {
            if !root.is_dir() {
                tracing::debug!("Scan root does not exist, skipping: {}", root.display());
                continue;
            }

            tracing::debug!("Scanning content root: {}", root.display());

            let walk = WalkDir::new(&root)
                .follow_links(self.options.follow_symlinks)
                .into_iter()
                .filter_entry(|entry| self.keep_entry(entry));

            for entry in walk {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        tracing::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                        continue;
                    }
                };

                if !entry.file_type().is_file() {
                    continue;
                }

                if self.matcher.is_match(entry.path()) {
                    matched.insert(entry.path().to_path_buf());
                }
            }
        }

        tracing::info!(
            "Content scan matched {} file(s) across {} pattern(s)",
            matched.len(),
            self.matcher.patterns().len()
        );

        Ok(matched.into_iter().collect())
    }

    /// Scan matched files and extract the style-class candidates they use
    ///
    /// Files that cannot be read as UTF-8 text are logged and skipped, the
    /// same way the walk skips unreadable entries.
    pub fn scan_classes(&self) -> ScanResult<BTreeSet<String>> {
        let mut candidates = BTreeSet::new();

        for path in self.scan()? {
            let contents = match std::fs::read_to_string(&path) {
                Ok(contents) => contents,
                Err(e) => {
                    tracing::warn!("Skipping unreadable content file {}: {}", path.display(), e);
                    continue;
                }
            };
            candidates.extend(extract::class_candidates(&contents));
        }

        Ok(candidates)
    }

    /// Entry filter: drop hidden files and directories unless configured in.
    /// The walk root itself is always kept (depth 0).
    fn keep_entry(&self, entry: &DirEntry) -> bool {
        if self.options.include_hidden || entry.depth() == 0 {
            return true;
        }

        !entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
    }
}
