//! Tests for URL-to-filesystem path resolution

use std::path::Path;

use minihttpd::content::resolver;

#[test]
fn test_resolve_prefixes_server_root() {
    let resolved = resolver::resolve(Path::new("webroot"), "/index.html").unwrap();

    assert_eq!(resolved, Path::new("webroot").join("index.html"));
}

#[test]
fn test_resolve_translates_each_segment() {
    let resolved = resolver::resolve(Path::new("webroot"), "/css/site/main.css").unwrap();

    assert_eq!(
        resolved,
        Path::new("webroot").join("css").join("site").join("main.css")
    );
}

#[test]
fn test_resolve_skips_empty_and_dot_segments() {
    let resolved = resolver::resolve(Path::new("webroot"), "//a/./b").unwrap();

    assert_eq!(resolved, Path::new("webroot").join("a").join("b"));
}

#[test]
fn test_resolve_refuses_traversal() {
    assert!(resolver::resolve(Path::new("webroot"), "/../secret").is_none());
}

#[test]
fn test_resolve_refuses_traversal_mid_path() {
    assert!(resolver::resolve(Path::new("webroot"), "/a/../../secret").is_none());
}

#[test]
fn test_resolve_bare_root() {
    let resolved = resolver::resolve(Path::new("webroot"), "/").unwrap();

    assert_eq!(resolved, Path::new("webroot"));
}
