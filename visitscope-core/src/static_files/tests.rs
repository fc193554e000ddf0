use crate::static_files::{ResolveError, relative_static_path, resolve_on_disk, serve_static};
use http::StatusCode;
use std::path::PathBuf;

#[test]
fn strips_prefix_and_decodes_once() {
    assert_eq!(
        relative_static_path("/static", "/static/js/hero%20map.js"),
        Ok(PathBuf::from("js/hero map.js"))
    );
}

#[test]
fn prefix_must_match_whole_segment() {
    assert_eq!(
        relative_static_path("/static", "/staticfoo/app.js"),
        Err(ResolveError::NotFound)
    );
    assert_eq!(
        relative_static_path("/static", "/static"),
        Err(ResolveError::NotFound)
    );
}

#[test]
fn traversal_is_forbidden() {
    assert_eq!(
        relative_static_path("/static", "/static/../Cargo.toml"),
        Err(ResolveError::Forbidden)
    );
    assert_eq!(
        relative_static_path("/static", "/static/%2e%2e/Cargo.toml"),
        Err(ResolveError::Forbidden)
    );
}

#[test]
fn disk_lookup_stays_inside_base_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("js")).unwrap();
    std::fs::write(dir.path().join("js/app.js"), "console.log(1);").unwrap();

    let found = resolve_on_disk(dir.path(), &PathBuf::from("js/app.js")).unwrap();
    assert!(found.ends_with("js/app.js"));

    assert_eq!(
        resolve_on_disk(dir.path(), &PathBuf::from("js")),
        Err(ResolveError::NotFound)
    );
    assert_eq!(
        resolve_on_disk(dir.path(), &PathBuf::from("missing.js")),
        Err(ResolveError::NotFound)
    );
}

#[tokio::test]
async fn serves_file_from_disk_with_mime_type() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("site.css"), "body { margin: 0; }").unwrap();

    let resp = serve_static(dir.path(), "/static", "/static/site.css").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.headers[http::header::CONTENT_TYPE], "text/css");
    assert_eq!(&resp.body[..], b"body { margin: 0; }");
}

#[tokio::test]
async fn falls_back_to_embedded_assets() {
    let dir = tempfile::tempdir().unwrap();

    let resp = serve_static(dir.path(), "/static", "/static/dashboard.js").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(!resp.body.is_empty());
}

#[tokio::test]
async fn disk_file_shadows_embedded_asset() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("dashboard.js"), "// custom").unwrap();

    let resp = serve_static(dir.path(), "/static", "/static/dashboard.js").await;

    assert_eq!(&resp.body[..], b"// custom");
}

#[tokio::test]
async fn unknown_asset_is_not_found() {
    let dir = tempfile::tempdir().unwrap();

    let resp = serve_static(dir.path(), "/static", "/static/nope.png").await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert!(resp.body.is_empty());
}
