//! Display projection of feature records.
//!
//! Records stay opaque everywhere else; pages only need a handful of
//! web-features fields, pulled out here with empty values for anything
//! missing or oddly shaped.

use serde_json::Value;

const UNNAMED_FEATURE: &str = "Unnamed feature";

/// Fields of one feature record shown on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureView {
    pub name: String,
    pub description: String,
    /// Date the feature became newly available, if any.
    pub baseline_low_date: String,
    /// Date the feature became widely available, if any.
    pub baseline_high_date: String,
    pub support: Vec<SupportEntry>,
    /// Specification links (http/https only).
    pub specs: Vec<String>,
}

/// First supporting release for one browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportEntry {
    pub browser: String,
    pub version: String,
}

impl FeatureView {
    pub fn from_record(record: &Value) -> Self {
        let status = &record["status"];
        let name = text(&record["name"]);

        Self {
            name: if name.is_empty() {
                UNNAMED_FEATURE.to_string()
            } else {
                name
            },
            description: text(&record["description"]),
            baseline_low_date: text(&status["baseline_low_date"]),
            baseline_high_date: text(&status["baseline_high_date"]),
            support: support_entries(&status["support"]),
            specs: spec_links(&record["spec"]),
        }
    }
}

/// Strings as-is, numbers as JSON text, everything else empty.
fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn support_entries(support: &Value) -> Vec<SupportEntry> {
    let Some(browsers) = support.as_object() else {
        return Vec::new();
    };
    browsers
        .iter()
        .filter_map(|(browser, version)| {
            let version = text(version);
            (!version.is_empty()).then(|| SupportEntry {
                browser: browser_name(browser).to_string(),
                version,
            })
        })
        .collect()
}

fn browser_name(key: &str) -> &str {
    match key {
        "chrome" => "Chrome",
        "chrome_android" => "Chrome Android",
        "edge" => "Edge",
        "firefox" => "Firefox",
        "firefox_android" => "Firefox for Android",
        "safari" => "Safari",
        "safari_ios" => "Safari on iOS",
        other => other,
    }
}

fn spec_links(spec: &Value) -> Vec<String> {
    let candidates: Vec<&Value> = match spec {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };
    candidates
        .into_iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|url| url.starts_with("https://") || url.starts_with("http://"))
        .map(str::to_string)
        .collect()
}
