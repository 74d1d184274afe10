// src/modules/storage/media_storage.rs

use async_trait::async_trait;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum MediaStorageError {
    #[error("Access denied")]
    AccessDenied,

    #[error("Bucket not found")]
    BucketNotFound,

    #[error("Storage error: {0}")]
    Infrastructure(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Blob store addressed by path-like string keys under a public-readable
/// namespace. Keys are owned by exactly one row; no file is shared, so a
/// delete is always safe once the owning reference is gone.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaStorage: Send + Sync {
    async fn store(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), MediaStorageError>;

    /// Deleting a key that no longer exists is a success: replace/remove
    /// flows must stay idempotent.
    async fn delete(&self, key: &str) -> Result<(), MediaStorageError>;

    fn url(&self, key: &str) -> String;
}
