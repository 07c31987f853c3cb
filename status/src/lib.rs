//! # Baseline Status
//!
//! Turns a classified [`BucketMap`](baseline_core::BucketMap) into files:
//!
//! - **`<label>.json`**: one pretty-printed partition per discovered label
//! - **`<label>.html`**: one page per rendered label that has records
//! - **`index.html`**: links to the rendered pages that exist
//! - **`styles.css`**: the stylesheet, copied verbatim

pub mod error;
pub mod generator;
mod io;
pub mod partition;
mod templates;
pub mod view;

pub use error::{PublishError, PublishResult};
pub use generator::{GeneratedPages, PageGenerator};
pub use partition::{PartitionWriter, read_partition};
pub use templates::IndexEntry;
pub use view::{FeatureView, SupportEntry};
