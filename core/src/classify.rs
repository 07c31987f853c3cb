//! Tree Walker / Classifier
//!
//! Walks an arbitrarily nested JSON document depth-first and moves every
//! feature record into the [`BucketMap`] slot named by its baseline label.
//!
//! A feature record is an object whose `status` member is an object carrying
//! a `baseline` key, whatever its value. Records are terminal: their own
//! members are never inspected, even when they contain look-alike records.
//! Every other object or array is recursed into in document order, and
//! scalars end the walk silently.

use crate::bucket::BucketMap;
use crate::label::label_for;
use serde_json::{Map, Value};

/// Deepest composite the walker will descend into.
///
/// Parsed JSON is always a finite tree; the guard only bounds recursion for
/// documents built in memory.
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    max_depth: usize,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Consume `document` and group its feature records by baseline label.
    ///
    /// Never fails: a scalar root or a document without records yields an
    /// empty map.
    pub fn classify(&self, document: Value) -> BucketMap {
        let mut buckets = BucketMap::new();
        self.visit(document, 0, &mut buckets);
        buckets
    }

    fn visit(&self, node: Value, depth: usize, buckets: &mut BucketMap) {
        match node {
            Value::Object(members) => {
                if let Some(baseline) = baseline_of(&members) {
                    let label = label_for(baseline);
                    buckets.push(label, Value::Object(members));
                    return;
                }
                if self.too_deep(depth) {
                    return;
                }
                for (_, child) in members {
                    self.visit(child, depth + 1, buckets);
                }
            }
            Value::Array(items) => {
                if self.too_deep(depth) {
                    return;
                }
                for item in items {
                    self.visit(item, depth + 1, buckets);
                }
            }
            _ => {}
        }
    }

    fn too_deep(&self, depth: usize) -> bool {
        if depth < self.max_depth {
            return false;
        }
        tracing::warn!(
            depth,
            max_depth = self.max_depth,
            "Skipping subtree nested beyond the maximum depth"
        );
        true
    }
}

/// Classify `document` with the default depth limit.
pub fn classify(document: Value) -> BucketMap {
    Classifier::default().classify(document)
}

/// The `status.baseline` value when `members` describes a feature record.
fn baseline_of(members: &Map<String, Value>) -> Option<&Value> {
    members.get("status")?.as_object()?.get("baseline")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::UNKNOWN_LABEL;
    use serde_json::json;

    #[test]
    fn test_single_widely_available_feature() {
        let record = json!({"status": {"baseline": "high"}});
        let buckets = classify(json!({"a": record.clone()}));

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets.records("high"), &[record]);
    }

    #[test]
    fn test_false_baseline_goes_to_unknown_and_plain_objects_contribute_nothing() {
        let record = json!({"status": {"baseline": false}});
        let buckets = classify(json!({"a": record.clone(), "b": {"x": 1}}));

        assert_eq!(buckets.labels().collect::<Vec<_>>(), vec![UNKNOWN_LABEL]);
        assert_eq!(buckets.records(UNKNOWN_LABEL), &[record]);
        assert!(buckets.records("low").is_empty());
        assert!(buckets.records("high").is_empty());
    }

    #[test]
    fn test_null_baseline_goes_to_unknown() {
        let buckets = classify(json!({"a": {"status": {"baseline": null}}}));
        assert_eq!(buckets.records(UNKNOWN_LABEL).len(), 1);
    }

    #[test]
    fn test_nested_groups_keep_document_order() {
        let f1 = json!({"name": "f1", "status": {"baseline": "low"}});
        let f2 = json!({"name": "f2", "status": {"baseline": "low"}});
        let buckets = classify(json!({"group1": {"f1": f1.clone(), "f2": f2.clone()}}));

        assert_eq!(buckets.records("low"), &[f1, f2]);
    }

    #[test]
    fn test_sibling_order_follows_document_not_key_order() {
        let buckets = classify(json!({
            "zeta": {"name": "zeta", "status": {"baseline": "high"}},
            "alpha": {"name": "alpha", "status": {"baseline": "high"}}
        }));
        let names: Vec<_> = buckets
            .records("high")
            .iter()
            .map(|record| record["name"].as_str().unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_records_are_not_recursed_into() {
        let record = json!({
            "status": {"baseline": "high"},
            "inner": {"status": {"baseline": "low"}}
        });
        let buckets = classify(json!({"outer": record.clone()}));

        assert_eq!(buckets.records("high"), &[record]);
        assert!(!buckets.contains("low"));
        assert_eq!(buckets.total_records(), 1);
    }

    #[test]
    fn test_root_record_is_classified() {
        let root = json!({"status": {"baseline": "low"}, "name": "root"});
        let buckets = classify(root.clone());
        assert_eq!(buckets.records("low"), &[root]);
    }

    #[test]
    fn test_arrays_are_walked_like_objects() {
        let first = json!({"status": {"baseline": "high"}});
        let second = json!({"status": {"baseline": "low"}});
        let buckets = classify(json!([first.clone(), 3, [second.clone()], null]));

        assert_eq!(buckets.records("high"), &[first]);
        assert_eq!(buckets.records("low"), &[second]);
    }

    #[test]
    fn test_status_without_baseline_is_recursed_into() {
        let buckets = classify(json!({
            "status": {"note": "not a record", "child": {"status": {"baseline": "low"}}},
            "group": {"status": "scalar", "f": {"status": {"baseline": "high"}}}
        }));

        assert_eq!(buckets.records("low").len(), 1);
        assert_eq!(buckets.records("high").len(), 1);
        assert_eq!(buckets.total_records(), 2);
    }

    #[test]
    fn test_scalar_and_empty_roots_yield_nothing() {
        for root in [json!(null), json!(42), json!("text"), json!({}), json!([])] {
            assert!(classify(root).is_empty());
        }
    }

    #[test]
    fn test_composite_without_records_contributes_nothing() {
        let buckets = classify(json!({
            "group": {"a": {"x": [1, 2, {"y": true}]}, "b": []},
            "f": {"status": {"baseline": "high"}}
        }));
        assert_eq!(buckets.total_records(), 1);
    }

    #[test]
    fn test_every_record_lands_in_exactly_one_bucket() {
        let document = json!({
            "css": {
                "grid": {"status": {"baseline": "high"}},
                "subgrid": {"status": {"baseline": "low"}},
                "masonry": {"status": {"baseline": false}},
                "anchor": {"status": {}}
            },
            "js": [
                {"status": {"baseline": "high"}},
                {"nested": {"status": {"baseline": ""}}}
            ]
        });
        let buckets = classify(document);

        assert_eq!(buckets.total_records(), 5);
        assert_eq!(buckets.records("high").len(), 2);
        assert_eq!(buckets.records("low").len(), 1);
        assert_eq!(buckets.records(UNKNOWN_LABEL).len(), 2);
    }

    #[test]
    fn test_depth_guard_skips_deep_subtrees() {
        let deep = json!({"a": {"b": {"c": {"status": {"baseline": "high"}}}}});
        let shallow = json!({"f": {"status": {"baseline": "low"}}});

        let buckets = Classifier::new().with_max_depth(2).classify(deep.clone());
        assert!(buckets.is_empty());

        let buckets = Classifier::new().with_max_depth(2).classify(shallow);
        assert_eq!(buckets.records("low").len(), 1);

        let buckets = Classifier::new().with_max_depth(3).classify(deep);
        assert_eq!(buckets.records("high").len(), 1);
    }
}
