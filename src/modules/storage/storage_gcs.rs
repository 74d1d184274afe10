// src/modules/storage/storage_gcs.rs

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::modules::storage::media_storage::{MediaStorage, MediaStorageError};

pub const DEFAULT_BUCKET_NAME: &str = "portfolio-backend-media";

/// google-cloud-storage uses a bucket resource name format:
/// `projects/_/buckets/{bucket}`
///
/// Keeping this here makes it hard to accidentally pass a raw bucket name.
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

fn map_storage_error(msg: &str) -> MediaStorageError {
    let m = msg.to_lowercase();

    if m.contains("permission") || m.contains("forbidden") || m.contains("denied") {
        MediaStorageError::AccessDenied
    } else if m.contains("bucket") && (m.contains("not found") || m.contains("404")) {
        MediaStorageError::BucketNotFound
    } else {
        MediaStorageError::Infrastructure(msg.to_string())
    }
}

fn is_object_missing(msg: &str) -> bool {
    let m = msg.to_lowercase();
    m.contains("404") || m.contains("not found") || m.contains("no such object")
}

/// Internal seam to make the adapter testable without mocking
/// google-cloud-storage types/streams. Tests implement this trait with a
/// fake client.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn upload_object_bytes(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String>;

    async fn delete_object(&self, bucket_resource: &str, object_name: &str)
        -> Result<(), String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn upload_object_bytes(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        self.0
            .upload_object_bytes(bucket_resource, object_name, bytes)
            .await
    }

    async fn delete_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
    ) -> Result<(), String> {
        self.0.delete_object(bucket_resource, object_name).await
    }
}

/// Production adapter: implements the MediaStorage port against GCS.
#[derive(Clone)]
pub struct GcsMediaStorage {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    bucket_name: String,
}

impl GcsMediaStorage {
    /// Synchronous constructor - client is initialized lazily on first use.
    pub fn new(bucket_name: String) -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            bucket_name,
        }
    }

    /// Bucket name from `MEDIA_UPLOAD_BUCKET`, with a fixed fallback.
    pub fn from_env() -> Self {
        let bucket_name = std::env::var("MEDIA_UPLOAD_BUCKET")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BUCKET_NAME.to_string());

        Self::new(bucket_name)
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, MediaStorageError> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await.map_err(|e| {
                    MediaStorageError::Infrastructure(format!("GCS client init failed: {e}"))
                })?;
                Ok(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>, bucket_name: &str) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            client: Arc::new(once),
            bucket_name: bucket_name.to_string(),
        }
    }
}

#[async_trait]
impl MediaStorage for GcsMediaStorage {
    async fn store(
        &self,
        key: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<(), MediaStorageError> {
        let client = self.get_client().await?;

        let bucket = bucket_resource(&self.bucket_name);

        client
            .upload_object_bytes(&bucket, key, bytes)
            .await
            .map_err(|e| map_storage_error(&e))
    }

    async fn delete(&self, key: &str) -> Result<(), MediaStorageError> {
        let client = self.get_client().await?;

        let bucket = bucket_resource(&self.bucket_name);

        match client.delete_object(&bucket, key).await {
            Ok(()) => Ok(()),
            // Already gone counts as deleted; replace/remove stay idempotent.
            Err(e) if is_object_missing(&e) => Ok(()),
            Err(e) => Err(map_storage_error(&e)),
        }
    }

    fn url(&self, key: &str) -> String {
        format!("https://storage.googleapis.com/{}/{}", self.bucket_name, key)
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsClient {
    storage: google_cloud_storage::client::Storage,
    control: google_cloud_storage::client::StorageControl,
}

impl RealGcsClient {
    async fn new() -> anyhow::Result<Self> {
        tracing::info!("Initializing GCS client...");

        let storage = google_cloud_storage::client::Storage::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS storage client: {:?}", e);
                anyhow::anyhow!(e)
            })?;

        let control = google_cloud_storage::client::StorageControl::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS control client: {:?}", e);
                anyhow::anyhow!(e)
            })?;

        tracing::info!("GCS clients created");

        Ok(Self { storage, control })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn upload_object_bytes(
        &self,
        bucket_resource: &str,
        object_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        // TODO: forward the content type once this client exposes object
        // metadata on single-shot writes; bucket serves image/* fine without.
        self.storage
            .write_object(
                bucket_resource.to_string(),
                object_name.to_string(),
                bytes::Bytes::from(bytes),
            )
            .send_buffered()
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    async fn delete_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
    ) -> Result<(), String> {
        self.control
            .delete_object()
            .set_bucket(bucket_resource.to_string())
            .set_object(object_name.to_string())
            .send()
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
