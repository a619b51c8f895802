//! Object storage client for uploaded images.
//!
//! Talks to any S3-compatible endpoint (AWS, MinIO, or a hosted storage
//! service). The service keeps a single public bucket; if it does not exist
//! yet it is created on first use. Files are addressed by the object key the
//! caller provides and are publicly readable immediately after upload.
//!
//! No retries and no caching: every call is a fresh round trip, and errors
//! propagate unmodified to the caller.

use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

/// Errors from the object store. Wraps the SDK's per-operation error types
/// into one surface the api crate can classify.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Bucket operation failed: {0}")]
    Bucket(String),

    #[error("Upload failed: {0}")]
    Upload(String),
}

/// Connection settings for the object store.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// S3-compatible endpoint URL (e.g. `http://localhost:9000`).
    pub endpoint: String,
    pub region: String,
    /// Name of the public bucket holding uploaded images.
    pub bucket: String,
    /// Base URL under which uploaded objects are publicly reachable.
    /// Object keys are appended as `{public_base_url}/{key}`.
    pub public_base_url: String,
}

/// Handle to the public image bucket.
///
/// Cheaply cloneable; the inner SDK client is reference-counted.
#[derive(Clone)]
pub struct ObjectStore {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl ObjectStore {
    /// Build a client for the configured endpoint.
    ///
    /// Credentials come from the standard AWS environment variables
    /// (`AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`). Path-style
    /// addressing is forced so non-AWS endpoints work without DNS tricks.
    pub async fn connect(config: &StorageConfig) -> Self {
        let sdk_config = aws_config::from_env()
            .endpoint_url(config.endpoint.clone())
            .region(aws_sdk_s3::config::Region::new(config.region.clone()))
            .load()
            .await;

        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(s3_config),
            bucket: config.bucket.clone(),
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Ensure the public bucket exists, creating it if absent.
    pub async fn ensure_bucket(&self) -> Result<(), StorageError> {
        match self.client.head_bucket().bucket(&self.bucket).send().await {
            Ok(_) => Ok(()),
            Err(err) => {
                let service_err = err.into_service_error();
                if !service_err.is_not_found() {
                    return Err(StorageError::Bucket(service_err.to_string()));
                }

                self.client
                    .create_bucket()
                    .bucket(&self.bucket)
                    .send()
                    .await
                    .map_err(|e| StorageError::Bucket(e.into_service_error().to_string()))?;

                tracing::info!(bucket = %self.bucket, "Created storage bucket");
                Ok(())
            }
        }
    }

    /// Upload a file under the given object key.
    pub async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::Upload(e.into_service_error().to_string()))?;

        Ok(())
    }

    /// Public URL of an uploaded object.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{key}", self.public_base_url)
    }

    /// Name of the bucket this store writes to.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}
