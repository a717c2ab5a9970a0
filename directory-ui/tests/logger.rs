// directory-ui/tests/logger.rs
// Global subscriber installation; kept in its own test binary

use directory_ui::logger::init_logger_with_file;
use tempfile::TempDir;

#[test]
fn test_logger_installs_once() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().to_str().unwrap();

    assert!(init_logger_with_file(Some("debug"), Some(dir)).is_ok());
    tracing::info!("written to the rolling file");

    assert!(init_logger_with_file(Some("info"), None).is_err());
}
