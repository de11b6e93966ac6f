/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.storage_unavailable")]
    StorageUnavailable,
}

impl RepositoryError {
    pub fn storage_unavailable() -> Self {
        RepositoryError::StorageUnavailable
    }
}
