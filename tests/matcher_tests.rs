//! Content pattern matching tests
//!
//! Builds the template layout a Django-style project config points at and checks
//! that matching is anchored at the configuration file's directory.

use std::fs;
use std::path::Path;
use stylesieve::ContentMatcher;

/// Content patterns of a Django-style project layout
fn project_patterns() -> Vec<String> {
    vec![
        "../templates/**/*.html".to_string(),
        "../../myapp/templates/myapp/**/*.html".to_string(),
        "../../myapp/templates/myapp/partials/**/*.html".to_string(),
    ]
}

/// Create a file (and its parents) under `root`
fn touch(root: &Path, rel: &str) -> std::path::PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "<div class=\"flex\"></div>\n").unwrap();
    path
}

#[test]
fn test_project_patterns_match_their_fixture_files() {
    let root = tempfile::tempdir().unwrap();
    // The config lives two levels below the project root
    let base_dir = root.path().join("theme").join("static_src");
    fs::create_dir_all(&base_dir).unwrap();

    let theme_template = touch(root.path(), "theme/templates/base.html");
    let app_template = touch(root.path(), "myapp/templates/myapp/home.html");
    let partial = touch(root.path(), "myapp/templates/myapp/partials/navbar.html");
    let outside = touch(root.path(), "otherapp/templates/x.html");

    let matcher = ContentMatcher::new(&base_dir, &project_patterns()).unwrap();

    assert!(matcher.is_match(&theme_template), "theme template must match");
    assert!(matcher.is_match(&app_template), "app template must match");
    assert!(matcher.is_match(&partial), "partial template must match");
    assert!(
        !matcher.is_match(&outside),
        "file outside all three patterns must not match"
    );
}

#[test]
fn test_matching_is_anchored_at_the_config_directory() {
    let root = tempfile::tempdir().unwrap();
    let base_dir = root.path().join("theme").join("static_src");
    fs::create_dir_all(&base_dir).unwrap();

    // Same relative layout, different anchor: must not match
    let elsewhere = touch(root.path(), "elsewhere/templates/base.html");
    // templates/ directly next to the config dir is `./templates`, not `../templates`
    let sibling = touch(root.path(), "theme/static_src/templates/base.html");

    let matcher = ContentMatcher::new(&base_dir, &project_patterns()).unwrap();

    assert!(!matcher.is_match(&elsewhere));
    assert!(!matcher.is_match(&sibling));
}

#[test]
fn test_recursive_wildcard_matches_nested_directories() {
    let root = tempfile::tempdir().unwrap();
    let base_dir = root.path().join("theme").join("static_src");
    fs::create_dir_all(&base_dir).unwrap();

    let nested = touch(root.path(), "myapp/templates/myapp/account/settings/form.html");
    let direct = touch(root.path(), "myapp/templates/myapp/index.html");

    let matcher = ContentMatcher::new(&base_dir, &project_patterns()).unwrap();

    assert!(matcher.is_match(&nested), "** must cross nested directories");
    assert!(matcher.is_match(&direct), "** must also match zero directories");
}

#[test]
fn test_suffix_wildcard_is_extension_specific() {
    let root = tempfile::tempdir().unwrap();
    let base_dir = root.path().join("theme").join("static_src");
    fs::create_dir_all(&base_dir).unwrap();

    let stylesheet = touch(root.path(), "theme/templates/style.css");
    let script = touch(root.path(), "myapp/templates/myapp/app.js");

    let matcher = ContentMatcher::new(&base_dir, &project_patterns()).unwrap();

    assert!(!matcher.is_match(&stylesheet));
    assert!(!matcher.is_match(&script));
}

#[test]
fn test_scan_roots_follow_the_literal_prefixes() {
    let root = tempfile::tempdir().unwrap();
    let base_dir = root.path().join("theme").join("static_src");
    fs::create_dir_all(&base_dir).unwrap();

    let matcher = ContentMatcher::new(&base_dir, &project_patterns()).unwrap();
    let roots = matcher.scan_roots();

    assert_eq!(
        roots,
        vec![
            root.path().join("theme").join("templates"),
            root.path().join("myapp").join("templates").join("myapp"),
            root.path()
                .join("myapp")
                .join("templates")
                .join("myapp")
                .join("partials"),
        ]
    );
}

#[test]
fn test_invalid_glob_is_reported_at_construction() {
    let patterns = vec!["templates/**/*.html".to_string(), "broken/[".to_string()];
    let err = ContentMatcher::new(Path::new("/proj"), &patterns).unwrap_err();
    assert!(err.to_string().contains("broken/["));
}
