use std::fs;

use tempfile::tempdir;

#[test]
fn writes_log_file() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("log.txt");

    viewer_overlay::logging::init(true, Some(path.clone()));
    tracing::info!("logging smoke line");

    assert!(path.exists(), "log file was not created");
    let contents = fs::read_to_string(&path).expect("read log file");
    assert!(contents.contains("logging smoke line"));

    // The global subscriber is set once; a later init must be a quiet no-op.
    viewer_overlay::logging::init(false, None);
    tracing::info!("logging second line");
    let contents = fs::read_to_string(&path).expect("read log file");
    assert!(contents.contains("logging second line"));
}
