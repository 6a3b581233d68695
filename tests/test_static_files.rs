//! Tests for static file resolution

use plainhttp::router::{ResolveError, StaticFileResolver};
use std::fs;
use tempfile::TempDir;

fn static_root() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), b"<h1>home</h1>").unwrap();
    fs::create_dir(dir.path().join("img")).unwrap();
    fs::write(dir.path().join("img").join("a.png"), [0x89, b'P', b'N', b'G']).unwrap();
    fs::write(dir.path().join("secret.txt"), b"outside").unwrap();
    dir
}

#[tokio::test]
async fn test_resolves_exact_bytes() {
    let root = static_root();
    let resolver = StaticFileResolver::new(root.path());

    assert_eq!(resolver.resolve("/index.html").await.unwrap(), b"<h1>home</h1>");
    assert_eq!(
        resolver.resolve("/img/a.png").await.unwrap(),
        vec![0x89, b'P', b'N', b'G']
    );
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let root = static_root();
    let resolver = StaticFileResolver::new(root.path());

    let err = resolver.resolve("/missing.xyz").await.unwrap_err();
    assert!(matches!(err, ResolveError::NotFound { .. }));
}

#[tokio::test]
async fn test_directory_is_not_found() {
    let root = static_root();
    let resolver = StaticFileResolver::new(root.path());

    assert!(matches!(
        resolver.resolve("/img").await,
        Err(ResolveError::NotFound { .. })
    ));
    assert!(matches!(
        resolver.resolve("/").await,
        Err(ResolveError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_rejects_parent_segments() {
    let outer = static_root();
    let inner = outer.path().join("public");
    fs::create_dir(&inner).unwrap();
    let resolver = StaticFileResolver::new(&inner);

    for path in ["/../secret.txt", "/img/../../secret.txt", "/..", "../secret.txt"] {
        let result = resolver.resolve(path).await;
        assert!(
            matches!(result, Err(ResolveError::Forbidden { .. })),
            "{path} should be rejected"
        );
    }
}

#[tokio::test]
async fn test_query_string_is_part_of_the_path() {
    let root = static_root();
    let resolver = StaticFileResolver::new(root.path());

    assert!(resolver.resolve("/index.html?v=1").await.is_err());
}

#[test]
fn test_file_path_joins_under_root() {
    let resolver = StaticFileResolver::new("static");

    assert_eq!(
        resolver.file_path("/img/a.png").unwrap(),
        std::path::Path::new("static").join("img").join("a.png")
    );
    assert_eq!(resolver.root(), std::path::Path::new("static"));
}
