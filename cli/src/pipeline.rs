//! Generation pipeline
//!
//! fetch → classify → write partitions → render pages → copy stylesheet,
//! one stage at a time. The first failure ends the run; artifacts written
//! before it are left in place.

use crate::fetch::DatasetClient;
use anyhow::{Context, Result};
use baseline_core::{SiteConfig, classify};
use baseline_status::{GeneratedPages, PageGenerator, PartitionWriter};
use std::path::PathBuf;

/// Everything a successful run produced.
#[derive(Debug)]
pub struct BuildReport {
    /// Records per discovered label, in discovery order.
    pub label_counts: Vec<(String, usize)>,
    pub partitions: Vec<PathBuf>,
    pub pages: GeneratedPages,
    pub stylesheet: PathBuf,
}

impl BuildReport {
    pub fn total_records(&self) -> usize {
        self.label_counts.iter().map(|(_, count)| count).sum()
    }
}

#[tracing::instrument(skip_all, fields(source = %config.source_url))]
pub async fn run(config: &SiteConfig) -> Result<BuildReport> {
    let client = DatasetClient::new().context("Failed to build the HTTP client")?;
    let document = client
        .fetch(&config.source_url)
        .await
        .context("Failed to fetch the web-features dataset")?;

    let buckets = classify(document);
    let label_counts: Vec<(String, usize)> = buckets
        .iter()
        .map(|bucket| (bucket.label().to_string(), bucket.len()))
        .collect();
    for (label, records) in &label_counts {
        tracing::debug!(label = %label, records, "Bucket classified");
    }
    tracing::info!(
        labels = buckets.len(),
        records = buckets.total_records(),
        "Dataset classified"
    );

    let partitions = PartitionWriter::new(&config.data_dir)
        .write_all(&buckets)
        .await
        .context("Failed to write baseline partitions")?;

    let generator = PageGenerator::from_config(config);
    let pages = generator
        .generate(&buckets)
        .await
        .context("Failed to generate HTML pages")?;

    let stylesheet = generator
        .install_stylesheet(&config.stylesheet_path)
        .await
        .context("Failed to copy the stylesheet")?;

    Ok(BuildReport {
        label_counts,
        partitions,
        pages,
        stylesheet,
    })
}
