//! Mock Storage Service Implementation
//!
//! Keeps uploaded objects in memory for test assertions.
//! Thread-safe via `Arc<Mutex<>>`.

use crate::{StorageError, StorageService};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// An object recorded by the mock.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub path: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Mock storage that records uploads and can be told to fail.
#[derive(Debug, Clone)]
pub struct MockStorageService {
    bucket: String,
    objects: Arc<Mutex<HashMap<String, StoredObject>>>,
    fail_uploads: Arc<AtomicBool>,
}

impl MockStorageService {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            objects: Arc::new(Mutex::new(HashMap::new())),
            fail_uploads: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make every following upload fail with a response error.
    pub fn set_fail_uploads(&self, fail: bool) {
        self.fail_uploads.store(fail, Ordering::SeqCst);
    }

    /// Return the object stored under `path`, if any.
    pub fn object(&self, path: &str) -> Option<StoredObject> {
        self.objects
            .lock()
            .expect("objects lock poisoned by a prior panic")
            .get(path)
            .cloned()
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects
            .lock()
            .expect("objects lock poisoned by a prior panic")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MockStorageService {
    fn default() -> Self {
        Self::new("covers")
    }
}

#[async_trait::async_trait]
impl StorageService for MockStorageService {
    async fn upload(
        &self,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), StorageError> {
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(StorageError::Response(
                "Mock storage configured to fail".to_string(),
            ));
        }

        tracing::debug!(path, "Mock storage: recording object");
        let mut objects = self
            .objects
            .lock()
            .map_err(|e| StorageError::Request(format!("objects lock poisoned: {e}")))?;
        if objects.contains_key(path) {
            return Err(StorageError::Response(format!(
                "Object already exists: {}",
                path
            )));
        }
        objects.insert(
            path.to_string(),
            StoredObject {
                path: path.to_string(),
                content_type: content_type.to_string(),
                bytes,
            },
        );
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!("http://mock-storage.local/{}/{}", self.bucket, path)
    }
}
