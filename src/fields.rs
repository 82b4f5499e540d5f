//! Typed description of a PDF form field.
//!
//! A [`FormField`] is one entry of the `pdftk dump_data_fields_utf8` output,
//! parsed into a flat record. The serde representation matches the JSON shape
//! consumed and produced by other tools in this space: camelCase keys, with
//! `fieldValue` being either a string or a boolean.

use serde::{Deserialize, Serialize};

/// Current value of a form field.
///
/// Checkbox-style fields are naturally boolean; everything else is text.
/// Serialized untagged, so `true` and `"Yes"` are both valid JSON values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Checkbox/radio state supplied by a caller
    Boolean(bool),
    /// Text content, or a button state token as reported by pdftk
    Text(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// One interactive form field as reported by the pdftk field dump.
///
/// All metadata is carried as strings exactly as pdftk printed it; absent
/// lines become empty strings, never zero. `field_type` is a pass-through
/// tag (`Text`, `Button`, `Choice`, ...) with no closed enum, so unknown
/// types from newer pdftk versions survive verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormField {
    /// Unique field name within the document
    pub title: String,
    /// Field type tag as reported by pdftk
    pub field_type: String,
    /// Current value
    pub field_value: FieldValue,
    /// Default value, empty if absent
    pub field_default: String,
    /// Opaque flag digits, empty if absent
    pub field_flags: String,
    /// Maximum length as a numeric string, empty if absent
    pub field_max_length: String,
    /// Allowed discrete values, lexicographically sorted, empty if none
    pub field_options: Vec<String>,
}
