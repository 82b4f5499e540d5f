//! Integration tests for pdftk field-dump parsing.
//!
//! The sample dump below mirrors real `pdftk dump_data_fields_utf8` output
//! for a form with three text fields and five checkboxes.

use pdf_formfill::fields::{FieldValue, FormField};
use pdf_formfill::parse_data_fields;

const SAMPLE_DUMP: &str = "---
FieldType: Text
FieldName: first_name
FieldNameAlt: First Name
FieldFlags: 0
FieldJustification: Left
---
FieldType: Text
FieldName: last_name
FieldFlags: 0
FieldJustification: Left
---
FieldType: Text
FieldName: date
FieldFlags: 0
FieldJustification: Left
---
FieldType: Button
FieldName: football
FieldFlags: 0
FieldJustification: Left
FieldStateOption: Off
FieldStateOption: Yes
---
FieldType: Button
FieldName: baseball
FieldFlags: 0
FieldJustification: Left
FieldStateOption: Yes
FieldStateOption: Off
---
FieldType: Button
FieldName: basketball
FieldFlags: 0
FieldJustification: Left
---
FieldType: Button
FieldName: nascar
FieldFlags: 0
FieldJustification: Left
FieldStateOption: Off
FieldStateOption: Yes
---
FieldType: Button
FieldName: hockey
FieldFlags: 0
FieldJustification: Left
FieldStateOption: Off
FieldStateOption: Yes
";

// ============================================================================
// Dump-order field extraction
// ============================================================================

#[test]
fn test_parses_all_fields_in_dump_order() {
    let fields = parse_data_fields(SAMPLE_DUMP);
    let titles: Vec<&str> = fields.iter().map(|f| f.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "first_name",
            "last_name",
            "date",
            "football",
            "baseball",
            "basketball",
            "nascar",
            "hockey"
        ]
    );
}

#[test]
fn test_text_field_shape() {
    let fields = parse_data_fields(SAMPLE_DUMP);
    let expected = FormField {
        title: "first_name".to_string(),
        field_type: "Text".to_string(),
        field_value: FieldValue::Text(String::new()),
        field_default: String::new(),
        field_flags: "0".to_string(),
        field_max_length: String::new(),
        field_options: Vec::new(),
    };
    assert_eq!(fields[0], expected);
}

#[test]
fn test_checkbox_options_sorted_ascending() {
    let fields = parse_data_fields(SAMPLE_DUMP);
    let baseball = fields.iter().find(|f| f.title == "baseball").unwrap();
    // Emitted Yes-then-Off in the dump; attached sorted.
    assert_eq!(baseball.field_options, vec!["Off", "Yes"]);
}

#[test]
fn test_field_without_state_options_gets_empty_list() {
    let fields = parse_data_fields(SAMPLE_DUMP);
    let basketball = fields.iter().find(|f| f.title == "basketball").unwrap();
    assert!(basketball.field_options.is_empty());
}

// ============================================================================
// Value, default, max-length lines
// ============================================================================

#[test]
fn test_filled_field_lines() {
    let dump = "---
FieldType: Text
FieldName: zip
FieldValue: 90210
FieldValueDefault: 00000
FieldFlags: 0
FieldMaxLength: 10
";
    let fields = parse_data_fields(dump);
    assert_eq!(fields[0].field_value, FieldValue::Text("90210".to_string()));
    assert_eq!(fields[0].field_default, "00000");
    assert_eq!(fields[0].field_max_length, "10");
}

#[test]
fn test_missing_max_length_is_empty_string_not_zero() {
    let dump = "---\nFieldType: Text\nFieldName: free\n";
    let fields = parse_data_fields(dump);
    assert_eq!(fields[0].field_max_length, "");
}

#[test]
fn test_spec_option_sorting_example() {
    let dump = "---\nFieldName: foo\nFieldType: Text\nFieldStateOption: B\nFieldStateOption: A\n";
    let fields = parse_data_fields(dump);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].title, "foo");
    assert_eq!(fields[0].field_type, "Text");
    assert_eq!(fields[0].field_options, vec!["A", "B"]);
}

// ============================================================================
// Robustness against malformed chunks
// ============================================================================

#[test]
fn test_malformed_chunk_degrades_to_defaults() {
    let dump = "---\ngarbage that matches nothing\n---\nFieldName: ok\n";
    let fields = parse_data_fields(dump);
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0], FormField::default());
    assert_eq!(fields[1].title, "ok");
}

#[test]
fn test_metadata_preamble_is_discarded() {
    let dump = "NumberOfFields: 1\nFieldName: not_a_field\n---\nFieldName: real\n";
    let fields = parse_data_fields(dump);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].title, "real");
}

#[test]
fn test_unknown_field_type_passes_through() {
    let dump = "---\nFieldName: sig\nFieldType: Signature\n";
    let fields = parse_data_fields(dump);
    assert_eq!(fields[0].field_type, "Signature");
}

// ============================================================================
// JSON boundary
// ============================================================================

#[test]
fn test_dump_result_json_shape() {
    let fields = parse_data_fields("---\nFieldType: Button\nFieldName: agree\nFieldFlags: 0\nFieldStateOption: Yes\nFieldStateOption: Off\n");
    let json = serde_json::to_value(&fields).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "title": "agree",
            "fieldType": "Button",
            "fieldValue": "",
            "fieldDefault": "",
            "fieldFlags": "0",
            "fieldMaxLength": "",
            "fieldOptions": ["Off", "Yes"],
        }])
    );
}

#[test]
fn test_batch_equals_accumulated_streaming_parse() {
    // A consumer that accumulates chunks then parses once must match a
    // single-shot parse of the same text.
    let parts = ["---\nFieldName: a\n", "---\nField", "Name: b\n"];
    let mut accumulated = String::new();
    for part in parts {
        accumulated.push_str(part);
    }
    let joined: String = parts.concat();
    assert_eq!(parse_data_fields(&accumulated), parse_data_fields(&joined));
    assert_eq!(parse_data_fields(&accumulated).len(), 2);
}
