// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Key-addressed artifact store backed by cacache.

use crate::error::ApiError;
use std::path::PathBuf;

/// Disk-backed blob store for rendered artifacts and pipeline specs.
///
/// Fetch is tri-state (found / not found / error) so callers can decide
/// how much to trust a failure; the render path treats the error arm as
/// a miss.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    cache_dir: PathBuf,
}

impl ArtifactStore {
    /// Create a new store in the specified directory.
    pub async fn new(cache_dir: &str) -> Self {
        let path = PathBuf::from(cache_dir);

        // Create cache directory if it doesn't exist
        if let Err(e) = tokio::fs::create_dir_all(&path).await {
            tracing::warn!(
                error = %e,
                path = %path.display(),
                "Failed to create cache directory"
            );
        }

        Self { cache_dir: path }
    }

    /// Fetch artifact bytes by key.
    pub async fn fetch(&self, key: &str) -> Result<Option<Vec<u8>>, ApiError> {
        match cacache::read(&self.cache_dir, key).await {
            Ok(data) => Ok(Some(data)),
            Err(cacache::Error::EntryNotFound(_, _)) => Ok(None),
            Err(e) => Err(ApiError::Cache(e.to_string())),
        }
    }

    /// Store artifact bytes under a key.
    pub async fn put(&self, key: &str, data: &[u8]) -> Result<(), ApiError> {
        cacache::write(&self.cache_dir, key, data).await?;
        tracing::debug!(key = %key, size = data.len(), "Stored artifact");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_then_fetch() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path().to_str().unwrap()).await;

        store
            .put("visualizations/table/gs:_b_data.csv", b"<html></html>")
            .await
            .unwrap();

        let fetched = store
            .fetch("visualizations/table/gs:_b_data.csv")
            .await
            .unwrap();
        assert_eq!(fetched.as_deref(), Some(b"<html></html>".as_ref()));
    }

    #[tokio::test]
    async fn test_fetch_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path().to_str().unwrap()).await;

        let fetched = store.fetch("visualizations/table/absent").await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn test_put_overwrites_same_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path().to_str().unwrap()).await;

        store.put("visualizations/tfma/k", b"first").await.unwrap();
        store.put("visualizations/tfma/k", b"second").await.unwrap();

        let fetched = store.fetch("visualizations/tfma/k").await.unwrap();
        assert_eq!(fetched.as_deref(), Some(b"second".as_ref()));
    }
}
