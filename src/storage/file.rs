//! File-per-key backend.
//!
//! Each key maps to `<dir>/<sanitized key>.json`. Writes land in a `.tmp`
//! sibling first and are renamed over the target, so readers never see a
//! half-written value.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::KvBackend;
use crate::error::{NoteMapError, Result};

#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .trim_start_matches('@')
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", name))
    }
}

#[async_trait]
impl KvBackend for FileBackend {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| NoteMapError::CorruptState(format!("{}: {}", path.display(), e)))
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, value.as_bytes())
            .await
            .map_err(|e| NoteMapError::StorageWrite(format!("{}: {}", tmp.display(), e)))?;

        if let Err(e) = fs::rename(&tmp, &path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(NoteMapError::StorageWrite(format!(
                "{}: {}",
                path.display(),
                e
            )));
        }
        Ok(())
    }
}
