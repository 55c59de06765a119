//! Supabase Storage HTTP Client Implementation
//!
//! Uploads objects with `POST {base_url}/storage/v1/object/{bucket}/{path}`
//! and resolves public URLs under `/storage/v1/object/public/`.

use crate::{StorageConfig, StorageError, StorageService};

/// Supabase Storage client bound to a single bucket.
pub struct SupabaseStorage {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
    bucket: String,
}

impl SupabaseStorage {
    /// Create a new storage client from configuration.
    pub fn new(config: StorageConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            service_key: config.service_key,
            bucket: config.bucket,
        }
    }

    fn object_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url,
            self.bucket,
            path.trim_start_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl StorageService for SupabaseStorage {
    async fn upload(
        &self,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), StorageError> {
        let size = bytes.len();
        let response = self
            .http
            .post(self.object_url(path))
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await
            .map_err(|e| StorageError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".to_string());
            return Err(StorageError::Response(format!(
                "Storage API returned {}: {}",
                status, body
            )));
        }

        tracing::debug!(path, size, bucket = %self.bucket, "Object uploaded");
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url,
            self.bucket,
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(base_url: &str) -> SupabaseStorage {
        SupabaseStorage::new(StorageConfig {
            provider: "supabase".to_string(),
            base_url: format!("{}/", base_url),
            service_key: "service-key".to_string(),
            bucket: "covers".to_string(),
        })
    }

    #[tokio::test]
    async fn test_upload_posts_to_bucket_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/storage/v1/object/covers/covers/1-abc.png"))
            .and(header("authorization", "Bearer service-key"))
            .and(header("content-type", "image/png"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let storage = client_for(&server.uri());
        storage
            .upload("covers/1-abc.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_upload_error_status_is_response_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(409).set_body_string("Duplicate"))
            .mount(&server)
            .await;

        let storage = client_for(&server.uri());
        let err = storage
            .upload("covers/1-abc.png", "image/png", vec![1, 2, 3])
            .await
            .unwrap_err();
        match err {
            StorageError::Response(msg) => {
                assert!(msg.contains("409"));
                assert!(msg.contains("Duplicate"));
            }
            other => panic!("Expected response error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_upload_unreachable_is_request_error() {
        let storage = client_for("http://127.0.0.1:1");
        let err = storage
            .upload("covers/x.png", "image/png", vec![])
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Request(_)));
    }

    #[test]
    fn test_public_url() {
        let storage = client_for("https://press.supabase.co");
        assert_eq!(
            storage.public_url("covers/1-abc.png"),
            "https://press.supabase.co/storage/v1/object/public/covers/covers/1-abc.png"
        );
    }
}
