//! Parser for `pdftk dump_data_fields_utf8` output.
//!
//! The dump is a line-oriented text protocol: a metadata preamble, then one
//! chunk per field separated by `---` lines. Fields within a chunk are
//! unordered and line-anchored, so each property is pulled out with an
//! independent regex rather than a grammar. Malformed or partial chunks
//! degrade to defaulted fields instead of erroring; pdftk versions differ in
//! which lines they emit.

use lazy_static::lazy_static;
use regex::Regex;

use crate::fields::{FieldValue, FormField};

lazy_static! {
    static ref RE_NAME: Regex = Regex::new(r"FieldName: ([^\n]*)").unwrap();
    static ref RE_TYPE: Regex = Regex::new(r"FieldType: ([\t .A-Za-z]+)").unwrap();
    static ref RE_FLAGS: Regex = Regex::new(r"FieldFlags: ([\d\t .]+)").unwrap();
    static ref RE_MAX_LENGTH: Regex = Regex::new(r"FieldMaxLength: ([\d\t .]+)").unwrap();
    static ref RE_VALUE: Regex = Regex::new(r"FieldValue: ([^\n]*)").unwrap();
    static ref RE_DEFAULT: Regex = Regex::new(r"FieldValueDefault: ([^\n]*)").unwrap();
    static ref RE_OPTION: Regex = Regex::new(r"FieldStateOption: ([^\n]*)").unwrap();
}

/// Parse the complete text of a pdftk field dump into an ordered field list.
///
/// Field order matches the dump; a dump with no `---` delimiter yields an
/// empty list. The text before the first delimiter is document metadata and
/// is discarded.
pub fn parse_data_fields(dump: &str) -> Vec<FormField> {
    let fields: Vec<FormField> = dump.split("---").skip(1).map(parse_chunk).collect();
    log::debug!("parsed {} form fields from data dump", fields.len());
    fields
}

fn parse_chunk(chunk: &str) -> FormField {
    let mut options: Vec<String> = RE_OPTION
        .captures_iter(chunk)
        .map(|captures| captures[1].trim().to_string())
        .collect();
    options.sort();

    FormField {
        title: first_capture(&RE_NAME, chunk),
        field_type: first_capture(&RE_TYPE, chunk),
        field_value: FieldValue::Text(first_capture(&RE_VALUE, chunk)),
        field_default: first_capture(&RE_DEFAULT, chunk),
        field_flags: first_capture(&RE_FLAGS, chunk),
        field_max_length: first_capture(&RE_MAX_LENGTH, chunk),
        field_options: options,
    }
}

/// First capture group of `re` in `chunk`, trimmed; empty string if no match.
fn first_capture(re: &Regex, chunk: &str) -> String {
    re.captures(chunk)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}
