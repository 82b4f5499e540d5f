//! FDF (Forms Data Format) generation.
//!
//! Builds the flat FDF documents that `pdftk fill_form` consumes: a fixed
//! header with the binary marker, one `<< /T (name) /V (value) >>` dictionary
//! per field in insertion order, and a fixed trailer. The layout is byte-exact
//! so any conforming FDF reader accepts the output unmodified.

use indexmap::IndexMap;

/// Ordered field name → value mapping consumed by the FDF writer.
///
/// `None` values encode as an empty `/V ()` entry.
pub type FdfData = IndexMap<String, Option<String>>;

/// A single `/T`/`/V` entry of an FDF document.
#[derive(Debug, Clone)]
pub struct FdfRecord {
    /// Fully qualified field name
    pub name: String,
    /// Field value; `None` encodes as the empty string
    pub value: Option<String>,
}

/// FDF document writer.
///
/// Pure and deterministic: the same records in the same order always produce
/// the same bytes. No I/O happens here.
///
/// # Example
///
/// ```
/// use pdf_formfill::fdf::FdfWriter;
///
/// let mut writer = FdfWriter::new();
/// writer.add_record("name", Some("John Doe".into()));
/// writer.add_record("email", None);
/// let bytes = writer.to_bytes();
/// assert!(bytes.starts_with(b"%FDF-1.2\n"));
/// ```
#[derive(Debug, Default)]
pub struct FdfWriter {
    records: Vec<FdfRecord>,
}

impl FdfWriter {
    /// Create an empty FDF writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer from an ordered name → value mapping.
    pub fn from_map(data: &FdfData) -> Self {
        let records = data
            .iter()
            .map(|(name, value)| FdfRecord {
                name: name.clone(),
                value: value.clone(),
            })
            .collect();
        Self { records }
    }

    /// Append one field record. Order of calls is the order in the output.
    pub fn add_record(&mut self, name: impl Into<String>, value: Option<String>) {
        self.records.push(FdfRecord {
            name: name.into(),
            value,
        });
    }

    /// Generate the FDF document bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut output = Vec::new();

        // FDF header
        output.extend_from_slice(b"%FDF-1.2\n");
        // Binary marker: raw high-bit bytes, never escaped
        output.extend_from_slice(&[0xe2, 0xe3, 0xcf, 0xd3]);
        output.extend_from_slice(b"\n1 0 obj \n<<\n/FDF \n<<\n/Fields [\n");

        for record in &self.records {
            let value = record.value.as_deref().map(escape_pdf_string).unwrap_or_default();
            let entry = format!(
                "<<\n/T ({})\n/V ({})\n>>\n",
                escape_pdf_string(&record.name),
                value
            );
            output.extend_from_slice(entry.as_bytes());
        }

        output.extend_from_slice(b"]\n>>\n>>\nendobj \ntrailer\n\n<<\n/Root 1 0 R\n>>\n%%EOF\n");
        output
    }
}

/// Generate an FDF document directly from a name → value mapping.
pub fn create_fdf(data: &FdfData) -> Vec<u8> {
    FdfWriter::from_map(data).to_bytes()
}

/// Escape a string for use inside a PDF literal string.
///
/// Single pass: backslashes first, then both parentheses. Applying this to an
/// already-escaped string double-escapes it, matching the FDF literal rules.
pub fn escape_pdf_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '(' => escaped.push_str("\\("),
            ')' => escaped.push_str("\\)"),
            _ => escaped.push(c),
        }
    }
    escaped
}
