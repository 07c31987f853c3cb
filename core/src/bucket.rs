//! Bucket Map: feature records grouped by baseline label.

use serde_json::Value;
use std::collections::HashMap;

/// Records sharing one baseline label, in the order they were discovered.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    label: String,
    records: Vec<Value>,
}

impl Bucket {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn records(&self) -> &[Value] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false` for buckets obtained from a [`BucketMap`].
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<Value> {
        self.records
    }
}

/// Label → bucket mapping.
///
/// Labels iterate in first-discovered order. A bucket is created together
/// with its first record, so no bucket in the map is ever empty.
#[derive(Debug, Clone, Default)]
pub struct BucketMap {
    buckets: Vec<Bucket>,
    index: HashMap<String, usize>,
}

impl BucketMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `record` to the bucket for `label`, creating the bucket if needed.
    pub fn push(&mut self, label: impl Into<String>, record: Value) {
        let label = label.into();
        match self.index.get(&label) {
            Some(&slot) => self.buckets[slot].records.push(record),
            None => {
                self.index.insert(label.clone(), self.buckets.len());
                self.buckets.push(Bucket {
                    label,
                    records: vec![record],
                });
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<&Bucket> {
        self.index.get(label).map(|&slot| &self.buckets[slot])
    }

    /// Records for `label`; empty when the label was never seen.
    pub fn records(&self, label: &str) -> &[Value] {
        self.get(label).map(Bucket::records).unwrap_or_default()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(Bucket::label)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bucket> {
        self.buckets.iter()
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of records across all buckets.
    pub fn total_records(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }
}

impl PartialEq for BucketMap {
    fn eq(&self, other: &Self) -> bool {
        self.buckets == other.buckets
    }
}

impl<'a> IntoIterator for &'a BucketMap {
    type Item = &'a Bucket;
    type IntoIter = std::slice::Iter<'a, Bucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for BucketMap {
    type Item = Bucket;
    type IntoIter = std::vec::IntoIter<Bucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}
