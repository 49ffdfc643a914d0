#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("storage failed: {0}")]
    StorageFailed(String),
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
}
