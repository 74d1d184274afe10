// src/shared/content/media.rs
//
// Single-image attachment lifecycle shared by every resource that owns a
// logo/avatar/badge/featured/thumbnail/gallery field. The stored value is a
// storage key; the protocol below guarantees a row never references a
// missing file and a replaced/removed file never outlives its reference.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::storage::media_storage::{MediaStorage, MediaStorageError};
use crate::shared::content::patch::PatchField;

pub const ALLOWED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

const MB: usize = 1024 * 1024;

//
// ──────────────────────────────────────────────────────────
// Upload policy
// ──────────────────────────────────────────────────────────
//

/// Which field an upload is destined for; drives the size cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Logo,
    Avatar,
    Badge,
    Thumbnail,
    FeaturedImage,
    GalleryImage,
}

impl ImageKind {
    pub fn max_bytes(self) -> usize {
        match self {
            ImageKind::Logo | ImageKind::Avatar | ImageKind::Badge | ImageKind::Thumbnail => 2 * MB,
            ImageKind::FeaturedImage | ImageKind::GalleryImage => 5 * MB,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Request shape
// ──────────────────────────────────────────────────────────
//

/// Inline image upload carried in a JSON payload, data base64-encoded.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: String,
}

impl ImageUpload {
    fn decoded(&self) -> Result<Vec<u8>, MediaError> {
        BASE64
            .decode(self.data.as_bytes())
            .map_err(|_| MediaError::InvalidEncoding)
    }

    fn extension(&self) -> &'static str {
        match self.content_type.as_str() {
            "image/jpeg" => "jpg",
            "image/webp" => "webp",
            _ => "png",
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum MediaError {
    #[error("Image data is not valid base64")]
    InvalidEncoding,

    #[error("Unsupported image type: {0}")]
    UnsupportedType(String),

    #[error("Image exceeds the {limit_bytes} byte limit")]
    FileTooLarge { limit_bytes: usize },

    #[error(transparent)]
    Storage(#[from] MediaStorageError),
}

fn validate(kind: ImageKind, upload: &ImageUpload) -> Result<Vec<u8>, MediaError> {
    if !ALLOWED_MIME_TYPES.contains(&upload.content_type.as_str()) {
        return Err(MediaError::UnsupportedType(upload.content_type.clone()));
    }

    let bytes = upload.decoded()?;
    let limit = kind.max_bytes();
    if bytes.len() > limit {
        return Err(MediaError::FileTooLarge { limit_bytes: limit });
    }

    Ok(bytes)
}

fn new_key(prefix: &str, upload: &ImageUpload) -> String {
    format!("{}/{}.{}", prefix, Uuid::new_v4(), upload.extension())
}

//
// ──────────────────────────────────────────────────────────
// Lifecycle operations
// ──────────────────────────────────────────────────────────
//

/// Store a brand new attachment (create flow). No file, no key.
pub async fn store_new(
    storage: &dyn MediaStorage,
    kind: ImageKind,
    prefix: &str,
    upload: Option<&ImageUpload>,
) -> Result<Option<String>, MediaError> {
    match upload {
        None => Ok(None),
        Some(upload) => {
            let bytes = validate(kind, upload)?;
            let key = new_key(prefix, upload);
            storage.store(&key, bytes, &upload.content_type).await?;
            Ok(Some(key))
        }
    }
}

/// The single-image replacement protocol (update flow):
/// 1. remove flag + existing value => delete the file, clear the field.
/// 2. new upload => validate and store, then delete the old file.
/// 3. neither => the field is untouched (`Unset`, not cleared).
///
/// Returns what the repository should write for the column.
pub async fn apply_single(
    storage: &dyn MediaStorage,
    kind: ImageKind,
    prefix: &str,
    current: Option<&str>,
    upload: Option<&ImageUpload>,
    remove: bool,
) -> Result<PatchField<String>, MediaError> {
    if remove {
        if let Some(old_key) = current {
            storage.delete(old_key).await?;
            return Ok(PatchField::Null);
        }
        if upload.is_none() {
            // Nothing stored and nothing supplied; clearing twice is a no-op.
            return Ok(PatchField::Null);
        }
    }

    match upload {
        Some(upload) => {
            let bytes = validate(kind, upload)?;
            let key = new_key(prefix, upload);
            storage.store(&key, bytes, &upload.content_type).await?;

            if let Some(old_key) = current {
                storage.delete(old_key).await?;
            }

            Ok(PatchField::Value(key))
        }
        None => Ok(PatchField::Unset),
    }
}

/// Gallery semantics: the ordered list is replaced wholesale. `None` keeps
/// the current list; `Some(uploads)` stores every new entry (in order), then
/// deletes every old one. An empty list clears the gallery.
pub async fn replace_gallery(
    storage: &dyn MediaStorage,
    prefix: &str,
    current: &[String],
    uploads: Option<&[ImageUpload]>,
) -> Result<PatchField<Vec<String>>, MediaError> {
    let Some(uploads) = uploads else {
        return Ok(PatchField::Unset);
    };

    // Validate the full batch before touching storage: a bad entry must not
    // leave a half-written gallery.
    let mut batch = Vec::with_capacity(uploads.len());
    for upload in uploads {
        let bytes = validate(ImageKind::GalleryImage, upload)?;
        batch.push((new_key(prefix, upload), bytes, upload.content_type.clone()));
    }

    let keys: Vec<String> = batch.iter().map(|(key, _, _)| key.clone()).collect();

    for (key, bytes, content_type) in batch {
        storage.store(&key, bytes, &content_type).await?;
    }

    for old_key in current {
        storage.delete(old_key).await?;
    }

    Ok(PatchField::Value(keys))
}

/// Row-delete cleanup: every key the row owns is removed from storage.
pub async fn delete_all<'a, I>(storage: &dyn MediaStorage, keys: I) -> Result<(), MediaError>
where
    I: IntoIterator<Item = &'a str>,
{
    for key in keys {
        storage.delete(key).await?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
