use async_trait::async_trait;
use s3::creds::Credentials;
use s3::error::S3Error;
use s3::{Bucket, Region};
use tracing::debug;

use super::error::StorageError;
use super::traits::ObjectStore;

/// S3-backed object store.
///
/// Works against AWS S3 and S3-compatible services (MinIO etc.) via a custom
/// endpoint, in which case path-style addressing is used.
pub struct S3ObjectStore {
    bucket: Box<Bucket>,
    bucket_name: String,
    public_base_url: Option<String>,
    max_size: u64,
}

impl S3ObjectStore {
    pub fn new(
        bucket_name: &str,
        region: &str,
        endpoint: Option<&str>,
        access_key: Option<&str>,
        secret_key: Option<&str>,
        public_base_url: Option<String>,
        max_size: u64,
    ) -> Result<Self, StorageError> {
        let region = match endpoint {
            Some(endpoint) => Region::Custom {
                region: region.to_string(),
                endpoint: endpoint.trim_end_matches('/').to_string(),
            },
            None => region
                .parse::<Region>()
                .map_err(|e| StorageError::Backend(format!("invalid region: {e}")))?,
        };

        // Explicit keys when configured, otherwise the default provider chain
        // (env vars, profile, instance metadata).
        let credentials = match (access_key, secret_key) {
            (Some(ak), Some(sk)) => Credentials::new(Some(ak), Some(sk), None, None, None),
            _ => Credentials::default(),
        }
        .map_err(|e| StorageError::Backend(format!("credentials: {e}")))?;

        let path_style = endpoint.is_some();
        let mut bucket = Bucket::new(bucket_name, region, credentials)
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        if path_style {
            bucket = bucket.with_path_style();
        }

        Ok(Self {
            bucket,
            bucket_name: bucket_name.to_string(),
            public_base_url,
            max_size,
        })
    }

    fn map_err(err: S3Error, key: &str) -> StorageError {
        match err {
            S3Error::HttpFailWithBody(404, _) => StorageError::NotFound(key.to_string()),
            other => StorageError::Backend(other.to_string()),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        if data.len() as u64 > self.max_size {
            return Err(StorageError::SizeLimitExceeded {
                actual: data.len() as u64,
                limit: self.max_size,
            });
        }

        let content_type = mime_guess::from_path(key)
            .first()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let response = self
            .bucket
            .put_object_with_content_type(key, data, &content_type)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        if !(200..300).contains(&response.status_code()) {
            return Err(StorageError::Backend(format!(
                "unexpected status {} storing {key}",
                response.status_code()
            )));
        }

        debug!(key, bucket = %self.bucket_name, size = data.len(), "stored object");
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let response = self
            .bucket
            .get_object(key)
            .await
            .map_err(|e| Self::map_err(e, key))?;

        match response.status_code() {
            200 => Ok(response.bytes().to_vec()),
            404 => Err(StorageError::NotFound(key.to_string())),
            status => Err(StorageError::Backend(format!(
                "unexpected status {status} fetching {key}"
            ))),
        }
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        match self.bucket.head_object(key).await {
            Ok((_, 200)) => Ok(true),
            Ok((_, 404)) => Ok(false),
            Ok((_, status)) => Err(StorageError::Backend(format!(
                "unexpected status {status} checking {key}"
            ))),
            Err(S3Error::HttpFailWithBody(404, _)) => Ok(false),
            Err(e) => Err(StorageError::Backend(e.to_string())),
        }
    }

    async fn delete(&self, key: &str) -> Result<bool, StorageError> {
        match self.bucket.delete_object(key).await {
            Ok(_) => Ok(true),
            Err(S3Error::HttpFailWithBody(404, _)) => Ok(false),
            Err(e) => Err(StorageError::Backend(e.to_string())),
        }
    }

    fn public_url(&self, key: &str) -> String {
        match &self.public_base_url {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), key),
            None => format!("https://{}.s3.amazonaws.com/{}", self.bucket_name, key),
        }
    }
}
