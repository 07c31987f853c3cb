//! Page Renderer
//!
//! Renders one HTML page per rendered label that has records, then the
//! index page. Labels outside the rendered set are never turned into pages.

use crate::error::{PublishError, PublishResult};
use crate::io::{ensure_dir, write_text};
use crate::templates::{FeaturePage, IndexEntry, IndexPage};
use crate::view::FeatureView;
use askama::Template;
use baseline_core::{BucketMap, PageLabel, STYLESHEET_FILE, SiteConfig, file_stem};
use chrono::Utc;
use serde_json::Value;
use std::path::{Path, PathBuf};

const INDEX_FILE: &str = "index.html";

/// Static page generator
pub struct PageGenerator {
    output_dir: PathBuf,
    labels: Vec<PageLabel>,
}

/// Pages written by [`PageGenerator::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPages {
    /// Label pages in index order.
    pub pages: Vec<PathBuf>,
    pub index_path: PathBuf,
    /// What the index lists.
    pub entries: Vec<IndexEntry>,
}

impl PageGenerator {
    pub fn new(output_dir: impl Into<PathBuf>, labels: Vec<PageLabel>) -> Self {
        Self {
            output_dir: output_dir.into(),
            labels,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(&config.output_dir, config.rendered_labels.clone())
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render the label pages and the index into the output directory.
    pub async fn generate(&self, buckets: &BucketMap) -> PublishResult<GeneratedPages> {
        ensure_dir(&self.output_dir).await?;
        let generated_at = Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();

        let mut pages = Vec::new();
        let mut entries = Vec::new();
        for page in &self.labels {
            let records = buckets.records(&page.label);
            if records.is_empty() {
                continue;
            }

            let html = self.render_page(page, records, &generated_at)?;
            let file_name = format!("{}.html", file_stem(&page.label));
            let path = self.output_dir.join(&file_name);
            write_text(&path, &html).await?;
            tracing::info!(path = %path.display(), records = records.len(), "HTML file written");

            entries.push(IndexEntry {
                label: page.label.clone(),
                title: page.title.clone(),
                // Escaped stems contain `%`, which must not be decoded by the browser.
                href: file_name.replace('%', "%25"),
                count: records.len(),
            });
            pages.push(path);
        }

        let html = self.render_index(&entries, &generated_at)?;
        let index_path = self.output_dir.join(INDEX_FILE);
        write_text(&index_path, &html).await?;
        tracing::info!(path = %index_path.display(), "Index HTML file written");

        Ok(GeneratedPages {
            pages,
            index_path,
            entries,
        })
    }

    /// HTML for a single label page.
    pub fn render_page(
        &self,
        page: &PageLabel,
        records: &[Value],
        generated_at: &str,
    ) -> PublishResult<String> {
        let features: Vec<FeatureView> = records.iter().map(FeatureView::from_record).collect();
        FeaturePage {
            title: &page.title,
            heading: &page.heading,
            features: &features,
            stylesheet: STYLESHEET_FILE,
            generated_at,
        }
        .render()
        .map_err(|source| PublishError::Render {
            template: "feature.html",
            source,
        })
    }

    /// HTML for the index page.
    pub fn render_index(&self, entries: &[IndexEntry], generated_at: &str) -> PublishResult<String> {
        IndexPage {
            entries,
            stylesheet: STYLESHEET_FILE,
            generated_at,
        }
        .render()
        .map_err(|source| PublishError::Render {
            template: INDEX_FILE,
            source,
        })
    }

    /// Copy the stylesheet verbatim into the output directory.
    pub async fn install_stylesheet(&self, source: &Path) -> PublishResult<PathBuf> {
        ensure_dir(&self.output_dir).await?;
        let destination = self.output_dir.join(STYLESHEET_FILE);
        tokio::fs::copy(source, &destination)
            .await
            .map_err(|err| PublishError::Copy {
                from: source.to_path_buf(),
                to: destination.clone(),
                source: err,
            })?;
        tracing::info!(path = %destination.display(), "Stylesheet copied");
        Ok(destination)
    }
}
