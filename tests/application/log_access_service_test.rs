use std::sync::Arc;

use pipeline_ops::application::services::{LogAccessError, LogAccessService};
use pipeline_ops::infrastructure::storage::LocalLogStore;

fn service() -> (tempfile::TempDir, LogAccessService) {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("daily")).unwrap();
    std::fs::write(dir.path().join("daily/run.log"), "ok").unwrap();
    let store = LocalLogStore::new(dir.path().to_path_buf()).unwrap();
    (dir, LogAccessService::new(Arc::new(store)))
}

#[tokio::test]
async fn given_file_under_root_when_fetching_then_returns_content() {
    let (_dir, service) = service();

    let log = service.fetch("daily", "run.log").await.unwrap();

    assert_eq!(log.filename, "run.log");
    assert_eq!(log.content, "ok");
    assert_eq!(log.size, 2);
}

#[tokio::test]
async fn given_blank_filename_when_fetching_then_returns_validation_error() {
    let (_dir, service) = service();

    let result = service.fetch("daily", "  ").await;

    assert!(matches!(result, Err(LogAccessError::Validation(_))));
}

#[tokio::test]
async fn given_nul_byte_when_fetching_then_returns_validation_error() {
    let (_dir, service) = service();

    let result = service.fetch("daily", "run.log\0.txt").await;

    assert!(matches!(result, Err(LogAccessError::Validation(_))));
}

#[tokio::test]
async fn given_traversal_in_log_type_when_fetching_then_access_is_denied() {
    let (_dir, service) = service();

    let result = service.fetch("../..", "passwd").await;

    assert!(matches!(result, Err(LogAccessError::AccessDenied(_))));
}

#[tokio::test]
async fn given_missing_file_when_fetching_then_returns_not_found() {
    let (_dir, service) = service();

    let result = service.fetch("weekly_training", "run.log").await;

    assert!(matches!(result, Err(LogAccessError::NotFound(_))));
}

#[tokio::test]
async fn given_non_utf8_file_when_fetching_then_returns_internal_error() {
    let (dir, service) = service();
    std::fs::write(dir.path().join("daily/binary.log"), [0xff, 0xfe, 0x00]).unwrap();

    let result = service.fetch("daily", "binary.log").await;

    assert!(matches!(result, Err(LogAccessError::Internal(_))));
}
