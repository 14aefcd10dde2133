use async_trait::async_trait;

use super::error::StorageError;

/// Key-addressed object storage.
///
/// Keys are generated by the caller; the store does not validate their
/// uniqueness. Writing to an existing key replaces the object.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store bytes under the given key.
    async fn put(&self, key: &str, data: &[u8]) -> Result<(), StorageError>;

    /// Retrieve all bytes for an object by its key.
    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError>;

    /// Check whether an object exists.
    async fn exists(&self, key: &str) -> Result<bool, StorageError>;

    /// Delete an object by its key.
    ///
    /// Returns `true` if the object was deleted, `false` if it did not exist.
    async fn delete(&self, key: &str) -> Result<bool, StorageError>;

    /// Publicly resolvable URL for the object stored under `key`.
    fn public_url(&self, key: &str) -> String;
}
