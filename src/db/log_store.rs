// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-user log storage.
//!
//! Each user's series is kept in insertion order (oldest first). When a
//! snapshot path is configured, the full store is written to it as JSON
//! after every change and reloaded on startup.

use crate::error::AppError;
use crate::models::LogEntry;
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Log store client.
#[derive(Clone, Default)]
pub struct LogStore {
    logs: Arc<DashMap<String, Vec<LogEntry>>>,
    snapshot_path: Option<PathBuf>,
    /// Serializes changes so each snapshot reflects the latest state.
    write_lock: Arc<Mutex<()>>,
}

impl LogStore {
    /// Create an empty store that is never written to disk.
    pub fn new_in_memory() -> Self {
        Self::default()
    }

    /// Open a store backed by a JSON snapshot file.
    ///
    /// A missing file starts an empty store; the file is created on first write.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();

        let logs = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let snapshot: BTreeMap<String, Vec<LogEntry>> = serde_json::from_slice(&bytes)
                    .map_err(|e| {
                        AppError::Database(format!(
                            "Failed to parse log snapshot {}: {}",
                            path.display(),
                            e
                        ))
                    })?;
                snapshot.into_iter().collect::<DashMap<_, _>>()
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "No log snapshot found, starting empty");
                DashMap::new()
            }
            Err(e) => {
                return Err(AppError::Database(format!(
                    "Failed to read log snapshot {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        tracing::info!(
            path = %path.display(),
            users = logs.len(),
            "Log store opened"
        );

        Ok(Self {
            logs: Arc::new(logs),
            snapshot_path: Some(path),
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    // ─── Log Operations ──────────────────────────────────────────

    /// Fetch a user's series, oldest first. Unknown users have an empty series.
    pub async fn fetch_logs(&self, user_id: &str) -> Result<Vec<LogEntry>, AppError> {
        Ok(self
            .logs
            .get(user_id)
            .map(|series| series.value().clone())
            .unwrap_or_default())
    }

    /// Append an entry to a user's series.
    ///
    /// If the snapshot cannot be written the entry is removed again, so a
    /// failed save leaves the series unchanged.
    pub async fn save_log(&self, user_id: &str, entry: &LogEntry) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;

        let count = {
            let mut series = self.logs.entry(user_id.to_string()).or_default();
            series.push(entry.clone());
            series.len()
        };

        if let Err(e) = self.write_snapshot().await {
            if let Some(mut series) = self.logs.get_mut(user_id) {
                series.pop();
            }
            self.logs.remove_if(user_id, |_, series| series.is_empty());
            tracing::warn!(user_id, date = %entry.date, "Log entry rolled back");
            return Err(e);
        }

        tracing::debug!(user_id, date = %entry.date, count, "Log entry saved");
        Ok(())
    }

    /// Remove all of a user's entries, returning how many were removed.
    ///
    /// If the snapshot cannot be written the series is restored.
    pub async fn clear_logs(&self, user_id: &str) -> Result<usize, AppError> {
        let _guard = self.write_lock.lock().await;

        let Some((key, series)) = self.logs.remove(user_id) else {
            tracing::info!(user_id, removed = 0, "Logs cleared");
            return Ok(0);
        };
        let removed = series.len();

        if let Err(e) = self.write_snapshot().await {
            self.logs.insert(key, series);
            tracing::warn!(user_id, "Log clear rolled back");
            return Err(e);
        }

        tracing::info!(user_id, removed, "Logs cleared");
        Ok(removed)
    }

    /// Write the full store to the snapshot file, if one is configured.
    ///
    /// Callers must hold `write_lock`.
    async fn write_snapshot(&self) -> Result<(), AppError> {
        let Some(path) = &self.snapshot_path else {
            return Ok(());
        };

        let snapshot: BTreeMap<String, Vec<LogEntry>> = self
            .logs
            .iter()
            .map(|item| (item.key().clone(), item.value().clone()))
            .collect();

        let bytes = serde_json::to_vec_pretty(&snapshot)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Snapshot encoding failed: {}", e)))?;

        // Replace via rename; readers never see a partial file.
        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &bytes)
            .await
            .map_err(|e| AppError::Database(format!("Failed to write log snapshot: {}", e)))?;
        tokio::fs::rename(&tmp_path, path)
            .await
            .map_err(|e| AppError::Database(format!("Failed to replace log snapshot: {}", e)))?;

        Ok(())
    }
}
