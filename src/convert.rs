//! Adapters from typed form fields to flat FDF data.
//!
//! `pdftk` only understands the `Yes`/`Off` name tokens for button states, so
//! boolean values are mapped here before the data reaches the FDF writer.
//! An optional rewrite mapping translates caller-side field names to the
//! names the PDF actually uses.

use std::collections::HashMap;

use crate::fdf::FdfData;
use crate::fields::{FieldValue, FormField};

/// Convert typed fields into the flat mapping consumed by the FDF writer.
///
/// Booleans become `"Yes"`/`"Off"`; text passes through unchanged. Output
/// order follows the input slice.
pub fn field_json_to_fdf(fields: &[FormField]) -> FdfData {
    let mut data = FdfData::default();
    for field in fields {
        data.insert(field.title.clone(), Some(fdf_token(&field.field_value)));
    }
    data
}

/// Like [`field_json_to_fdf`], but first rewrites each field title through
/// `rewrite`.
///
/// A title present in `rewrite` is replaced by its target; a title absent
/// from it passes through unchanged. Several sources may map to one target;
/// the last one in input order wins.
pub fn map_form_to_pdf(fields: &[FormField], rewrite: &HashMap<String, String>) -> FdfData {
    let mut data = FdfData::default();
    for field in fields {
        let name = rewrite
            .get(&field.title)
            .cloned()
            .unwrap_or_else(|| field.title.clone());
        data.insert(name, Some(fdf_token(&field.field_value)));
    }
    data
}

fn fdf_token(value: &FieldValue) -> String {
    match value {
        FieldValue::Boolean(true) => "Yes".to_string(),
        FieldValue::Boolean(false) => "Off".to_string(),
        FieldValue::Text(s) => s.clone(),
    }
}
