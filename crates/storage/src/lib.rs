//! Pressrun Object Storage
//!
//! Stores book cover images in a dedicated bucket with support for:
//! - Supabase Storage HTTP API integration for production
//! - In-memory mock storage for testing and development
//! - Collision-resistant object paths and public URL resolution

pub mod mock;
pub mod supabase;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Prefix under which cover images are stored inside the bucket
pub const COVERS_PREFIX: &str = "covers";

/// Extension used when the uploaded file name carries none
const FALLBACK_EXTENSION: &str = "bin";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage configuration error: {0}")]
    Configuration(String),

    #[error("Storage request error: {0}")]
    Request(String),

    #[error("Storage response error: {0}")]
    Response(String),
}

impl From<StorageError> for pressrun_common::Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Configuration(msg) => pressrun_common::Error::Internal(msg),
            other => pressrun_common::Error::Storage(other.to_string()),
        }
    }
}

/// Storage service configuration.
#[derive(Clone)]
pub struct StorageConfig {
    /// Storage provider (supabase, mock)
    pub provider: String,
    /// Base URL of the managed backend, e.g. `https://xyz.supabase.co`
    pub base_url: String,
    /// Service role key used for uploads
    pub service_key: String,
    /// Bucket holding cover images
    pub bucket: String,
}

impl std::fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageConfig")
            .field("provider", &self.provider)
            .field("base_url", &self.base_url)
            .field("service_key", &"[REDACTED]")
            .field("bucket", &self.bucket)
            .finish()
    }
}

impl StorageConfig {
    /// Create storage config from environment variables.
    pub fn from_env() -> Result<Self, StorageError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create storage config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StorageError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = lookup("STORAGE_PROVIDER").unwrap_or_else(|| "mock".to_string());
        let base_url =
            lookup("SUPABASE_URL").unwrap_or_else(|| "http://localhost:54321".to_string());
        let service_key = lookup("SUPABASE_SERVICE_ROLE_KEY").unwrap_or_default();
        let bucket = lookup("STORAGE_COVERS_BUCKET").unwrap_or_else(|| "covers".to_string());

        if provider != "mock" && service_key.is_empty() {
            return Err(StorageError::Configuration(
                "SUPABASE_SERVICE_ROLE_KEY is required for Supabase storage".to_string(),
            ));
        }

        Ok(Self {
            provider,
            base_url,
            service_key,
            bucket,
        })
    }
}

/// Storage service trait for different backends.
#[async_trait::async_trait]
pub trait StorageService: Send + Sync {
    /// Upload a binary object under `path` inside the configured bucket.
    async fn upload(
        &self,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), StorageError>;

    /// Public URL for an object previously stored under `path`.
    fn public_url(&self, path: &str) -> String;
}

/// Factory for creating StorageService implementations.
pub struct StorageServiceFactory;

impl StorageServiceFactory {
    /// Create a StorageService based on configuration.
    pub fn create(config: StorageConfig) -> Result<Box<dyn StorageService>, StorageError> {
        match config.provider.as_str() {
            "supabase" => {
                tracing::info!(bucket = %config.bucket, "Creating Supabase storage service");
                if config.service_key.is_empty() {
                    return Err(StorageError::Configuration(
                        "SUPABASE_SERVICE_ROLE_KEY is required for Supabase storage".to_string(),
                    ));
                }
                Ok(Box::new(supabase::SupabaseStorage::new(config)))
            }
            "mock" => {
                tracing::info!(bucket = %config.bucket, "Creating mock storage service");
                Ok(Box::new(mock::MockStorageService::new(config.bucket)))
            }
            provider => Err(StorageError::Configuration(format!(
                "Unknown storage provider: {}. Supported providers: supabase, mock",
                provider
            ))),
        }
    }
}

/// Build a collision-resistant object path for an uploaded cover.
///
/// The result is `covers/<unix millis>-<uuid>.<ext>` where `ext` is taken from the
/// original file name.
pub fn cover_object_path(original_filename: &str, now: DateTime<Utc>) -> String {
    let ext = original_filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.trim().to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or_else(|| FALLBACK_EXTENSION.to_string());

    format!(
        "{}/{}-{}.{}",
        COVERS_PREFIX,
        now.timestamp_millis(),
        Uuid::new_v4().simple(),
        ext
    )
}
