//! Content pattern matching
//!
//! Compiles the configured glob patterns into a matcher anchored at the
//! configuration file's directory. Patterns may climb out of that directory
//! with `..` segments, so candidates are rebased into the same coordinate
//! space lexically before matching.

use super::{ScanError, ScanResult};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::{Component, Path, PathBuf};

/// Characters that make a path component a wildcard rather than a literal
const GLOB_META: [char; 4] = ['*', '?', '[', '{'];

/// Glob matcher for the configured content patterns
#[derive(Debug)]
pub struct ContentMatcher {
    base_dir: PathBuf,
    patterns: Vec<String>,
    glob_set: GlobSet,
}

impl ContentMatcher {
    /// Build a matcher from a pattern list anchored at `base_dir`
    ///
    /// `base_dir` is the directory of the configuration file the patterns
    /// came from. Relative base directories are resolved against the current
    /// working directory.
    pub fn new(base_dir: &Path, patterns: &[String]) -> ScanResult<Self> {
        let base_dir = absolute(base_dir)?;

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            // literal_separator keeps `*` inside a single path component;
            // only `**` crosses directories
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|e| ScanError::InvalidPattern(format!("{}: {}", pattern, e)))?;
            builder.add(glob);
        }

        let glob_set = builder
            .build()
            .map_err(|e| ScanError::InvalidPattern(e.to_string()))?;

        Ok(Self {
            base_dir,
            patterns: patterns.to_vec(),
            glob_set,
        })
    }

    /// Directory the patterns are anchored at (normalized, absolute)
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// The source pattern list, in declaration order
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Check whether a file path matches any content pattern
    ///
    /// The candidate is rebased relative to the matcher's base directory, so
    /// both absolute paths and paths relative to the working directory work.
    pub fn is_match(&self, candidate: &Path) -> bool {
        let candidate = match absolute(candidate) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("Could not resolve candidate path {:?}: {}", candidate, e);
                return false;
            }
        };

        let rel = relative_to(&self.base_dir, &candidate);
        self.glob_set.is_match(&rel)
    }

    /// Derive the directories the content walk starts from
    ///
    /// Each pattern contributes its literal (wildcard-free) component prefix,
    /// joined to the base directory. A fully literal pattern names a file, so
    /// its parent directory is used. Duplicates are dropped, declaration
    /// order is kept.
    pub fn scan_roots(&self) -> Vec<PathBuf> {
        let mut roots: Vec<PathBuf> = Vec::new();

        for pattern in &self.patterns {
            let mut root = self.base_dir.clone();
            for component in pattern.split('/') {
                if component.contains(GLOB_META) {
                    break;
                }
                root.push(component);
            }
            if !pattern.contains(GLOB_META) {
                root.pop();
            }

            let root = normalize(&root);
            if !roots.contains(&root) {
                roots.push(root);
            }
        }

        roots
    }
}

/// Resolve a path against the working directory and normalize it lexically
fn absolute(path: &Path) -> ScanResult<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize(path));
    }

    let cwd = std::env::current_dir().map_err(|e| ScanError::WorkingDir(e.to_string()))?;
    Ok(normalize(&cwd.join(path)))
}

/// Lexically normalize a path: drop `.` components, fold `..` into the
/// preceding component where one exists
pub(crate) fn normalize(path: &Path) -> PathBuf {
    enum Last {
        Normal,
        Root,
        Other,
    }

    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = out.components().next_back().map(|c| match c {
                    Component::Normal(_) => Last::Normal,
                    Component::RootDir | Component::Prefix(_) => Last::Root,
                    _ => Last::Other,
                });
                match last {
                    Some(Last::Normal) => {
                        out.pop();
                    }
                    // `..` at the filesystem root stays at the root
                    Some(Last::Root) => {}
                    _ => out.push(".."),
                }
            }
            other => out.push(other.as_os_str()),
        }
    }

    out
}

/// Express `target` relative to `base` (both normalized and absolute),
/// climbing with `..` where the paths diverge
pub(crate) fn relative_to(base: &Path, target: &Path) -> PathBuf {
    let base_components: Vec<Component> = base.components().collect();
    let target_components: Vec<Component> = target.components().collect();

    let mut shared = 0;
    while shared < base_components.len()
        && shared < target_components.len()
        && base_components[shared] == target_components[shared]
    {
        shared += 1;
    }

    let mut rel = PathBuf::new();
    for _ in shared..base_components.len() {
        rel.push("..");
    }
    for component in &target_components[shared..] {
        rel.push(component.as_os_str());
    }

    if rel.as_os_str().is_empty() {
        rel.push(".");
    }

    rel
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(base: &str, patterns: &[&str]) -> ContentMatcher {
        let patterns: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
        ContentMatcher::new(Path::new(base), &patterns).unwrap()
    }

    #[test]
    fn test_normalize_folds_parent_segments() {
        assert_eq!(
            normalize(Path::new("/a/b/../c/./d")),
            PathBuf::from("/a/c/d")
        );
        assert_eq!(normalize(Path::new("/a/../../b")), PathBuf::from("/b"));
    }

    #[test]
    fn test_relative_to_climbs_with_parent_segments() {
        assert_eq!(
            relative_to(Path::new("/proj/theme/src"), Path::new("/proj/templates/a.html")),
            PathBuf::from("../../templates/a.html")
        );
        assert_eq!(
            relative_to(Path::new("/proj"), Path::new("/proj/a.html")),
            PathBuf::from("a.html")
        );
    }

    #[test]
    fn test_match_same_directory_pattern() {
        let m = matcher("/proj/src", &["templates/**/*.html"]);
        assert!(m.is_match(Path::new("/proj/src/templates/base.html")));
        assert!(m.is_match(Path::new("/proj/src/templates/nested/deep/page.html")));
        assert!(!m.is_match(Path::new("/proj/src/templates/style.css")));
        assert!(!m.is_match(Path::new("/proj/other/templates/base.html")));
    }

    #[test]
    fn test_match_parent_relative_pattern() {
        let m = matcher("/proj/theme/static_src/src", &["../templates/**/*.html"]);
        assert!(m.is_match(Path::new("/proj/theme/static_src/templates/base.html")));
        assert!(!m.is_match(Path::new("/proj/theme/templates/base.html")));
    }

    #[test]
    fn test_recursive_wildcard_matches_zero_components() {
        let m = matcher("/proj", &["templates/**/*.html"]);
        // `**` also matches the empty component sequence
        assert!(m.is_match(Path::new("/proj/templates/index.html")));
    }

    #[test]
    fn test_single_star_stays_in_one_component() {
        let m = matcher("/proj", &["templates/*.html"]);
        assert!(m.is_match(Path::new("/proj/templates/index.html")));
        assert!(!m.is_match(Path::new("/proj/templates/sub/index.html")));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let patterns = vec!["templates/[".to_string()];
        let err = ContentMatcher::new(Path::new("/proj"), &patterns).unwrap_err();
        assert!(matches!(err, ScanError::InvalidPattern(_)));
    }

    #[test]
    fn test_scan_roots_use_literal_prefix() {
        let m = matcher(
            "/proj/theme/static_src/src",
            &[
                "../templates/**/*.html",
                "../../../myapp/templates/myapp/**/*.html",
                "../../../myapp/templates/myapp/partials/**/*.html",
            ],
        );
        let roots = m.scan_roots();
        assert_eq!(
            roots,
            vec![
                PathBuf::from("/proj/theme/static_src/templates"),
                PathBuf::from("/proj/myapp/templates/myapp"),
                PathBuf::from("/proj/myapp/templates/myapp/partials"),
            ]
        );
    }

    #[test]
    fn test_scan_root_for_literal_pattern_is_parent_dir() {
        let m = matcher("/proj", &["templates/index.html"]);
        assert_eq!(m.scan_roots(), vec![PathBuf::from("/proj/templates")]);
        assert!(m.is_match(Path::new("/proj/templates/index.html")));
    }
}
