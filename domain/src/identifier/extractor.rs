//! Project ID extraction from raw option values
//!
//! Option values written by other plugins have no common shape: a bare ID,
//! a tracking snippet URL, a settings map, or an opaque blob. Extraction
//! flattens whatever is there into one string and scans it with two
//! patterns, most specific first.
//!
//! Only the first pattern that matches the text is considered. If its
//! capture fails validation the value yields nothing, even if the generic
//! pattern would have found something else further along.

use super::validator::ProjectId;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Tracking tag URL, e.g. `https://www.clarity.ms/tag/aq9itx5whc`
static TAG_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"clarity\.ms/tag/([a-zA-Z0-9]{8,15})").expect("tag URL pattern is valid")
});

/// Any run of 8 to 15 alphanumeric characters
static GENERIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-zA-Z0-9]{8,15})").expect("generic ID pattern is valid")
});

/// Extract a project ID from a raw option value.
///
/// Returns `None` for absent or empty values, when neither pattern matches,
/// or when the first matching pattern captures an invalid candidate.
pub fn extract_project_id(value: Option<&Value>) -> Option<ProjectId> {
    let value = value?;
    if is_empty_value(value) {
        return None;
    }

    let haystack = flatten_value(value);

    for pattern in [&*TAG_URL_PATTERN, &*GENERIC_PATTERN] {
        if let Some(captures) = pattern.captures(&haystack) {
            return captures.get(1).and_then(|m| ProjectId::parse(m.as_str()));
        }
    }

    None
}

/// Whether a stored value counts as "not set".
///
/// Mirrors how option values are treated as falsy by the host platform:
/// null, false, empty string, `"0"`, zero and empty collections.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty() || s == "0",
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Flatten a value into a single searchable string.
///
/// Structured values use compact JSON, which is deterministic and keeps
/// every nested string intact. Object keys stay in their stored order.
fn flatten_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) | Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
