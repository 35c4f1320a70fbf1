//! JSON file backed feedback collection
//!
//! The whole collection lives in one JSON array on disk. Every access goes
//! through [`FeedbackStore`], which serializes reads and rewrites behind a
//! single async mutex so concurrent submissions cannot interleave their
//! read-modify-write cycles.
//!
//! A missing or unparseable store file reads as an empty collection. Entries
//! that parse as JSON but not as a [`FeedbackRecord`] are skipped when
//! listing and written back unchanged on the next rewrite. Write failures are
//! returned to the caller.

use super::validator;
use crate::error::{FeedbackError, Result};
use crate::types::{FeedbackId, FeedbackRecord, FeedbackSubmission, FeedbackType};
use chrono::Utc;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Single-owner access to the feedback collection file
pub struct FeedbackStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FeedbackStore {
    /// Create a store backed by `path`
    ///
    /// The file is not touched until the first operation.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate a submission and append it to the collection
    ///
    /// Invalid submissions are rejected before the store is read, so they
    /// never change its contents.
    pub async fn collect(&self, submission: FeedbackSubmission) -> Result<FeedbackRecord> {
        let feedback_type = validator::check(&submission)?;

        // check() guarantees these are present
        let record = FeedbackRecord {
            feedback_id: FeedbackId::new(),
            timestamp: Utc::now(),
            user_id: submission.user_id.unwrap_or_default(),
            feedback_type,
            description: submission.description.unwrap_or_default(),
            metadata: submission.metadata.unwrap_or_default(),
        };

        let entry = serde_json::to_value(&record)?;

        let _guard = self.lock.lock().await;

        let mut entries = self.load().await;
        entries.push(entry);
        self.persist(&entries).await?;

        info!(
            feedback_id = %record.feedback_id,
            feedback_type = %record.feedback_type,
            user_id = %record.user_id,
            total = entries.len(),
            "Feedback collected"
        );

        Ok(record)
    }

    /// List stored feedback in insertion order, optionally filtered by type
    ///
    /// Stored entries that do not decode as feedback records are skipped;
    /// they stay on disk untouched.
    pub async fn list(&self, feedback_type: Option<FeedbackType>) -> Vec<FeedbackRecord> {
        let entries = {
            let _guard = self.lock.lock().await;
            self.load().await
        };

        entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| self.decode(index, entry))
            .filter(|r| feedback_type.map_or(true, |kind| r.feedback_type == kind))
            .collect()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.list(None).await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Read the raw stored entries, recovering to empty when the file is
    /// missing, unreadable or not a JSON array
    ///
    /// Entries are kept as raw JSON so a rewrite preserves every one of them
    /// byte-for-byte in meaning, including ones this version cannot decode.
    async fn load(&self) -> Vec<serde_json::Value> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Feedback store {} not found, starting empty", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!(
                    "Feedback store {} unreadable ({}), treating as empty",
                    self.path.display(),
                    e
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    "Feedback store {} is not a valid JSON array ({}), treating as empty",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn decode(&self, index: usize, entry: serde_json::Value) -> Option<FeedbackRecord> {
        match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(
                    "Skipping entry {} in feedback store {}: {}",
                    index,
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    /// Rewrite the whole collection via a synced temp file and rename
    async fn persist(&self, entries: &[serde_json::Value]) -> Result<()> {
        let body = serde_json::to_string_pretty(entries)?;
        let tmp_path = self.temp_path();

        let write_err = |source| FeedbackError::StoreWrite {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(write_err)?;
        }

        let mut file = fs::File::create(&tmp_path).await.map_err(write_err)?;
        file.write_all(body.as_bytes()).await.map_err(write_err)?;
        file.sync_all().await.map_err(write_err)?;
        drop(file);

        if let Err(e) = fs::rename(&tmp_path, &self.path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(write_err(e));
        }

        debug!(
            "Feedback store {} rewritten with {} entries",
            self.path.display(),
            entries.len()
        );
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "feedback_data.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
