//! Route record extraction.
//!
//! Input batches arrive as raw JSON values. [`RouteRecord::from_value`]
//! pulls out the three semantically relevant fields using the configurable
//! field-name mapping from [`FieldsConfig`](crate::config::FieldsConfig),
//! leaving everything the checkers do not care about behind.

use crate::config::FieldsConfig;
use serde_json::Value;

/// An externally supplied route definition.
///
/// All fields are optional because the upstream export format has been
/// inconsistent across revisions; the checkers turn absent fields into
/// explicit failures rather than assuming defaults. Records are immutable
/// input and are never modified by a checker.
#[derive(Debug, Clone)]
pub struct RouteRecord {
    /// Free-text display name.
    pub name: Option<String>,
    /// Free-text destination label (e.g. "opensearch-prod", "Splunk Cloud").
    pub destination: Option<String>,
    /// Raw filter value, kept untyped so the filter checker can distinguish
    /// a missing key from a non-string value from a blank string.
    pub filter: Option<Value>,
}

impl RouteRecord {
    /// Extracts a record from a raw JSON value.
    ///
    /// The route name is looked up under each configured key in order and the
    /// first present string wins. Non-object values produce a record with all
    /// fields absent, which the checkers report as such.
    pub fn from_value(value: &Value, fields: &FieldsConfig) -> RouteRecord {
        let obj = value.as_object();

        let name = obj
            .and_then(|map| {
                fields
                    .name
                    .iter()
                    .find_map(|key| map.get(key).and_then(Value::as_str))
            })
            .map(str::to_string);

        let destination = obj
            .and_then(|map| map.get(&fields.destination))
            .and_then(Value::as_str)
            .map(str::to_string);

        let filter = obj.and_then(|map| map.get(&fields.filter)).cloned();

        RouteRecord {
            name,
            destination,
            filter,
        }
    }
}
