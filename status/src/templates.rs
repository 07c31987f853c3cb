//! Compiled page templates.
//!
//! Sources live in `status/templates/`; askama escapes every interpolated
//! value because the templates are `.html` files.

use crate::view::FeatureView;
use askama::Template;

/// One page per rendered label.
#[derive(Template)]
#[template(path = "feature.html")]
pub(crate) struct FeaturePage<'a> {
    pub title: &'a str,
    pub heading: &'a str,
    pub features: &'a [FeatureView],
    pub stylesheet: &'a str,
    pub generated_at: &'a str,
}

/// Landing page linking to every rendered label page.
#[derive(Template)]
#[template(path = "index.html")]
pub(crate) struct IndexPage<'a> {
    pub entries: &'a [IndexEntry],
    pub stylesheet: &'a str,
    pub generated_at: &'a str,
}

/// A rendered label as listed on the index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub label: String,
    pub title: String,
    /// Page file name, relative to the index.
    pub href: String,
    pub count: usize,
}
