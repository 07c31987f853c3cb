//! Partition Writer
//!
//! Persists each bucket as `<label>.json` in the data directory. The set of
//! files follows whatever labels the classifier found.

use crate::error::{PublishError, PublishResult};
use crate::io::{ensure_dir, write_text};
use baseline_core::{BucketMap, file_stem};
use serde_json::Value;
use std::path::{Path, PathBuf};

pub struct PartitionWriter {
    data_dir: PathBuf,
}

impl PartitionWriter {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the partition file for `label`.
    pub fn partition_path(&self, label: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", file_stem(label)))
    }

    /// Write one partition per bucket, in bucket order.
    ///
    /// Stops at the first failure; partitions already written stay on disk.
    pub async fn write_all(&self, buckets: &BucketMap) -> PublishResult<Vec<PathBuf>> {
        ensure_dir(&self.data_dir).await?;

        let mut written = Vec::with_capacity(buckets.len());
        for bucket in buckets {
            let json = serde_json::to_string_pretty(bucket.records()).map_err(|source| {
                PublishError::Serialize {
                    label: bucket.label().to_string(),
                    source,
                }
            })?;
            let path = self.partition_path(bucket.label());
            write_text(&path, &json).await?;
            tracing::info!(
                path = %path.display(),
                label = bucket.label(),
                records = bucket.len(),
                "File written"
            );
            written.push(path);
        }
        Ok(written)
    }
}

/// Load a partition written by [`PartitionWriter::write_all`].
pub async fn read_partition(path: impl AsRef<Path>) -> PublishResult<Vec<Value>> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| PublishError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&content).map_err(|source| PublishError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
