//! # Baseline Core
//!
//! Protocol-agnostic half of the baseline page generator: walks a fetched
//! web-features document, groups every feature record by its
//! `status.baseline` label, and describes where the results should go.
//!
//! Fetching the dataset and writing artifacts live in other crates; nothing
//! here touches the network or the filesystem.

pub mod bucket;
pub mod classify;
pub mod config;
pub mod label;

pub use bucket::{Bucket, BucketMap};
pub use classify::{Classifier, DEFAULT_MAX_DEPTH, classify};
pub use config::{PageLabel, STYLESHEET_FILE, SiteConfig};
pub use label::{UNKNOWN_LABEL, file_stem, label_for};

pub mod prelude {
    pub use crate::bucket::{Bucket, BucketMap};
    pub use crate::classify::{Classifier, classify};
    pub use crate::config::{PageLabel, SiteConfig};
    pub use crate::label::UNKNOWN_LABEL;
}
