//! File storage collaborator for skater documents. The core only keeps
//! the returned URL; file contents are never inspected.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::RwLock;

use crate::error::{Result, StorageError};

#[async_trait::async_trait]
pub trait FileStorage: Send + Sync {
    /// Store bytes under `path` and return a retrievable URL.
    async fn upload(&self, path: &str, bytes: &[u8]) -> Result<String>;
}

/// Writes uploads under a local directory and returns URLs under a
/// configured base. Stands in for the hosted bucket in deployments that
/// serve uploads from disk.
pub struct LocalFileStorage {
    root: PathBuf,
    base_url: String,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait::async_trait]
impl FileStorage for LocalFileStorage {
    async fn upload(&self, path: &str, bytes: &[u8]) -> Result<String> {
        // Every segment must be a plain name; `..`, roots and prefixes
        // would let the joined path leave the upload directory.
        if Path::new(path)
            .components()
            .any(|component| !matches!(component, Component::Normal(_)))
        {
            return Err(StorageError::Validation(format!(
                "Invalid upload path '{path}'"
            )));
        }

        let target = self.root.join(path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, bytes)?;
        Ok(format!("{}/{}", self.base_url.trim_end_matches('/'), path))
    }
}

/// Test double keeping uploads in memory.
#[derive(Default)]
pub struct MemoryFileStorage {
    files: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryFileStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files
            .read()
            .expect("file storage lock poisoned")
            .contains_key(path)
    }
}

#[async_trait::async_trait]
impl FileStorage for MemoryFileStorage {
    async fn upload(&self, path: &str, bytes: &[u8]) -> Result<String> {
        self.files
            .write()
            .expect("file storage lock poisoned")
            .insert(path.to_string(), bytes.to_vec());
        Ok(format!("mem://{path}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn local_storage_rejects_paths_leaving_the_root() {
        let storage = LocalFileStorage::new("uploads", "/uploads");

        for path in [
            "skaters/s1/medical-exam/../../../../escaped.txt",
            "../escaped.txt",
            "/etc/passwd",
        ] {
            let err = storage.upload(path, b"owned").await.unwrap_err();
            assert!(matches!(err, StorageError::Validation(_)), "{path}");
        }
    }
}
