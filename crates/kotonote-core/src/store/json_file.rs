//! Local JSON file store
//!
//! The whole notebook lives in one file holding a single JSON array of
//! `{"jp": ..., "kr": ...}` objects. Every mutation rewrites the file in
//! full - no append-only log, no partial update. Writes land in a temp
//! file first and are renamed into place so an interrupted write cannot
//! truncate the notebook.

use crate::error::CoreError;
use crate::model::SentenceRecord;
use crate::store::SentenceStore;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Store adapter over a local JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize and atomically replace the file with the given records
    async fn write_all(&self, records: &[SentenceRecord]) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CoreError::FileWrite {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        let content =
            serde_json::to_string_pretty(records).expect("sentence records are always serializable");

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, content)
            .await
            .map_err(|e| CoreError::FileWrite {
                path: tmp.clone(),
                source: e,
            })?;

        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| CoreError::FileWrite {
                path: self.path.clone(),
                source: e,
            })?;

        debug!(path = %self.path.display(), count = records.len(), "Notebook file rewritten");
        Ok(())
    }
}

#[async_trait]
impl SentenceStore for JsonFileStore {
    async fn read_all(&self) -> Result<Vec<SentenceRecord>, CoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            // A notebook that was never written is empty, not broken
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Notebook file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(CoreError::FileRead {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        serde_json::from_str(&content).map_err(|e| CoreError::JsonParse {
            path: self.path.clone(),
            message: e.to_string(),
            source: e,
        })
    }

    async fn append(&self, record: &SentenceRecord) -> Result<(), CoreError> {
        let mut records = self.read_all().await?;
        records.push(record.clone());
        self.write_all(&records).await
    }

    async fn delete_at(&self, position: usize) -> Result<(), CoreError> {
        let mut records = self.read_all().await?;
        if position >= records.len() {
            return Err(CoreError::PositionMismatch {
                position,
                len: records.len(),
            });
        }
        records.remove(position);
        self.write_all(&records).await
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
