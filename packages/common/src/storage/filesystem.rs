use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use super::error::StorageError;
use super::traits::ObjectStore;

/// Filesystem-backed object store for local development and tests.
///
/// Objects are stored as flat files under `root`, one file per key. Writes go
/// through a temp file and a rename so readers never observe a partial object.
pub struct FilesystemObjectStore {
    root: PathBuf,
    public_base_url: Option<String>,
    max_size: u64,
}

impl FilesystemObjectStore {
    /// Create a new filesystem object store rooted at `root`.
    pub async fn new(
        root: PathBuf,
        public_base_url: Option<String>,
        max_size: u64,
    ) -> Result<Self, StorageError> {
        fs::create_dir_all(&root).await?;
        fs::create_dir_all(root.join(".tmp")).await?;
        Ok(Self {
            root,
            public_base_url,
            max_size,
        })
    }

    /// Compute the filesystem path for a key.
    ///
    /// Keys are caller-generated flat tokens; anything that would escape the
    /// root directory is rejected.
    fn object_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty()
            || key.contains('/')
            || key.contains('\\')
            || key.contains('\0')
            || key == "."
            || key == ".."
        {
            return Err(StorageError::Backend(format!("invalid object key: {key:?}")));
        }
        Ok(self.root.join(key))
    }

    /// Path for a temporary file during writes.
    fn temp_path(&self) -> PathBuf {
        self.root
            .join(".tmp")
            .join(uuid::Uuid::new_v4().to_string())
    }
}

#[async_trait]
impl ObjectStore for FilesystemObjectStore {
    async fn put(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        if data.len() as u64 > self.max_size {
            return Err(StorageError::SizeLimitExceeded {
                actual: data.len() as u64,
                limit: self.max_size,
            });
        }

        let object_path = self.object_path(key)?;
        let temp_path = self.temp_path();

        if let Err(e) = fs::write(&temp_path, data).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        if let Err(e) = fs::rename(&temp_path, &object_path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let object_path = self.object_path(key)?;
        match fs::read(&object_path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(key.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        let object_path = self.object_path(key)?;
        Ok(fs::try_exists(&object_path).await?)
    }

    async fn delete(&self, key: &str) -> Result<bool, StorageError> {
        let object_path = self.object_path(key)?;
        match fs::remove_file(&object_path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn public_url(&self, key: &str) -> String {
        match &self.public_base_url {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), key),
            None => format!("file://{}", self.root.join(key).display()),
        }
    }
}
