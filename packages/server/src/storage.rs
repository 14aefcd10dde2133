use std::path::PathBuf;
use std::sync::Arc;

use common::ObjectStore;
use common::storage::{filesystem::FilesystemObjectStore, s3::S3ObjectStore};

use crate::config::{StorageBackend, StorageConfig};

/// Build the process-wide object store from configuration.
pub async fn init_store(cfg: &StorageConfig) -> anyhow::Result<Arc<dyn ObjectStore>> {
    match cfg.backend {
        StorageBackend::S3 => {
            let store = S3ObjectStore::new(
                &cfg.bucket,
                &cfg.region,
                cfg.endpoint.as_deref(),
                cfg.access_key.as_deref(),
                cfg.secret_key.as_deref(),
                cfg.public_base_url.clone(),
                cfg.max_upload_size,
            )?;
            Ok(Arc::new(store))
        }
        StorageBackend::Filesystem => {
            let store = FilesystemObjectStore::new(
                PathBuf::from(&cfg.root),
                cfg.public_base_url.clone(),
                cfg.max_upload_size,
            )
            .await?;
            Ok(Arc::new(store))
        }
    }
}
