//! Baseline labels
//!
//! A label is the bucket key for a feature record. It is derived from the
//! record's `status.baseline` value and also names the persisted partition
//! and rendered page for that bucket.

use serde_json::Value;
use std::borrow::Cow;

/// Sentinel label for records whose baseline value is absent or false-like.
pub const UNKNOWN_LABEL: &str = "unknown";

/// Derive the bucket label for a `status.baseline` value.
///
/// False-like values (`false`, `null`, `0`, `""`) collapse onto
/// [`UNKNOWN_LABEL`], the same as an absent field. Arrays and objects have no
/// usable label text and collapse onto it as well.
pub fn label_for(baseline: &Value) -> String {
    match baseline {
        Value::String(s) if !s.is_empty() => s.clone(),
        Value::Bool(true) => "true".to_string(),
        Value::Number(n) if !is_zero(n) => number_text(n),
        _ => UNKNOWN_LABEL.to_string(),
    }
}

/// Integral floats drop the fraction, so `1.0` labels the same bucket as `1`.
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(v) if n.is_f64() && v.fract() == 0.0 && v.abs() < 1e15 => format!("{v:.0}"),
        _ => n.to_string(),
    }
}

fn is_zero(n: &serde_json::Number) -> bool {
    n.as_f64().is_some_and(|v| v == 0.0)
}

/// File stem used for the artifacts of `label`.
///
/// Labels come from remote data, so every byte outside `[A-Za-z0-9_-]` is
/// written as `%XX` before the label is used as a path component. `%` is
/// escaped too, which keeps distinct labels on distinct files. The empty
/// label maps to a lone `%`, which no escape sequence produces.
pub fn file_stem(label: &str) -> Cow<'_, str> {
    let safe = |b: u8| b.is_ascii_alphanumeric() || b == b'-' || b == b'_';
    if label.is_empty() {
        return Cow::Borrowed("%");
    }
    if label.bytes().all(safe) {
        return Cow::Borrowed(label);
    }
    let mut stem = String::with_capacity(label.len() * 3);
    for b in label.bytes() {
        if safe(b) {
            stem.push(char::from(b));
        } else {
            stem.push_str(&format!("%{b:02X}"));
        }
    }
    Cow::Owned(stem)
}
