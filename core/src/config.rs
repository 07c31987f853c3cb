//! Site generation settings.
//!
//! Every run uses fixed constants; the builder methods exist so tests and
//! embedders can point the generator elsewhere.

use std::path::{Path, PathBuf};

/// web-features release the pages are generated from.
pub const DEFAULT_SOURCE_URL: &str = "https://www.unpkg.com/web-features@0.8.6/index.json";
pub const DEFAULT_OUTPUT_DIR: &str = "out";
pub const DEFAULT_DATA_DIR: &str = "site/data";
pub const DEFAULT_STYLESHEET_PATH: &str = "site/styles.css";

/// Name of the stylesheet inside the output directory.
pub const STYLESHEET_FILE: &str = "styles.css";

/// A label that gets its own HTML page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLabel {
    pub label: String,
    /// Document `<title>`.
    pub title: String,
    /// Page `<h1>`.
    pub heading: String,
}

impl PageLabel {
    /// Page label whose heading repeats the title.
    pub fn new(label: impl Into<String>, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            label: label.into(),
            heading: title.clone(),
            title,
        }
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = heading.into();
        self
    }
}

/// Rendered labels used by default: the two Baseline tiers.
pub fn default_rendered_labels() -> Vec<PageLabel> {
    vec![
        PageLabel::new("high", "Widely Available Features"),
        PageLabel::new("low", "Newly Available Features"),
    ]
}

/// Where the dataset comes from and where artifacts go.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub source_url: String,
    /// HTML pages and the stylesheet.
    pub output_dir: PathBuf,
    /// One JSON partition per label.
    pub data_dir: PathBuf,
    /// Stylesheet copied into `output_dir`.
    pub stylesheet_path: PathBuf,
    /// Labels rendered as pages, in index order.
    pub rendered_labels: Vec<PageLabel>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            stylesheet_path: PathBuf::from(DEFAULT_STYLESHEET_PATH),
            rendered_labels: default_rendered_labels(),
        }
    }
}

impl SiteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default layout resolved under `root` instead of the working directory.
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            output_dir: root.join(DEFAULT_OUTPUT_DIR),
            data_dir: root.join(DEFAULT_DATA_DIR),
            stylesheet_path: root.join(DEFAULT_STYLESHEET_PATH),
            ..Self::default()
        }
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_stylesheet_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stylesheet_path = path.into();
        self
    }

    pub fn with_rendered_labels(mut self, labels: Vec<PageLabel>) -> Self {
        self.rendered_labels = labels;
        self
    }

    /// Destination of the copied stylesheet.
    pub fn stylesheet_destination(&self) -> PathBuf {
        self.output_dir.join(STYLESHEET_FILE)
    }

    pub fn page_label(&self, label: &str) -> Option<&PageLabel> {
        self.rendered_labels.iter().find(|page| page.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.data_dir, PathBuf::from("site/data"));
        assert_eq!(config.stylesheet_destination(), PathBuf::from("out/styles.css"));

        let labels: Vec<_> = config
            .rendered_labels
            .iter()
            .map(|page| page.label.as_str())
            .collect();
        assert_eq!(labels, vec!["high", "low"]);
        assert_eq!(
            config.page_label("high").map(|page| page.heading.as_str()),
            Some("Widely Available Features")
        );
        assert_eq!(
            config.page_label("low").map(|page| page.title.as_str()),
            Some("Newly Available Features")
        );
        assert!(config.page_label("unknown").is_none());
    }

    #[test]
    fn test_rooted_at_keeps_layout() {
        let config = SiteConfig::rooted_at("/tmp/site-root");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/site-root/out"));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/site-root/site/data"));
        assert_eq!(
            config.stylesheet_path,
            PathBuf::from("/tmp/site-root/site/styles.css")
        );
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
    }

    #[test]
    fn test_builders() {
        let config = SiteConfig::new()
            .with_source_url("http://localhost:9/index.json")
            .with_output_dir("public")
            .with_rendered_labels(vec![
                PageLabel::new("low", "New").with_heading("Newly Available"),
            ]);

        assert_eq!(config.source_url, "http://localhost:9/index.json");
        assert_eq!(config.stylesheet_destination(), PathBuf::from("public/styles.css"));
        let page = config.page_label("low").cloned();
        assert_eq!(
            page,
            Some(PageLabel {
                label: "low".to_string(),
                title: "New".to_string(),
                heading: "Newly Available".to_string(),
            })
        );
        assert!(config.page_label("high").is_none());
    }
}
