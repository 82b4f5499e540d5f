//! High-level fill and field-extraction API.
//!
//! [`FormFiller`] ties the pieces together: it dumps and parses fields,
//! builds the FDF exchange document, and asks the tool to produce the filled
//! PDF. The source path is readability-checked up front so a missing file is
//! reported before any process is spawned.

use std::fs::File;
use std::path::Path;

use indexmap::IndexMap;

use crate::dump;
use crate::error::{Error, Result};
use crate::fdf::{FdfData, FdfWriter};
use crate::fields::FormField;
use crate::tool::{FormTool, Pdftk};

/// Behavior flags for a fill operation.
///
/// `flatten` (the default) bakes values into the document permanently,
/// removing further editability. Extra flags such as `drop_xfa` or
/// `need_appearances` pass through to the tool verbatim, before the flatten
/// flag.
#[derive(Debug, Clone)]
pub struct FillOptions {
    flatten: bool,
    flags: Vec<String>,
}

impl FillOptions {
    /// Default options: flatten, no extra flags.
    pub fn new() -> Self {
        Self {
            flatten: true,
            flags: Vec::new(),
        }
    }

    /// Enable or disable flattening.
    pub fn flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }

    /// Append a pass-through behavior flag.
    pub fn flag(mut self, flag: impl Into<String>) -> Self {
        self.flags.push(flag.into());
        self
    }

    fn to_args(&self) -> Vec<String> {
        let mut args = self.flags.clone();
        if self.flatten {
            args.push("flatten".to_string());
        }
        args
    }
}

impl Default for FillOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Fills PDF forms and extracts field metadata through a [`FormTool`].
///
/// # Example
///
/// ```no_run
/// use pdf_formfill::{FillOptions, FormFiller};
/// use pdf_formfill::fdf::FdfData;
///
/// # fn main() -> pdf_formfill::Result<()> {
/// let filler = FormFiller::new();
/// let mut data = FdfData::default();
/// data.insert("first_name".into(), Some("John".into()));
/// data.insert("hockey".into(), Some("Yes".into()));
/// filler.fill_to_file("form.pdf", &data, &FillOptions::new(), "filled.pdf")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FormFiller<T = Pdftk> {
    tool: T,
}

impl FormFiller<Pdftk> {
    /// Form filler backed by the `pdftk` binary on `PATH`.
    pub fn new() -> Self {
        Self { tool: Pdftk::new() }
    }
}

impl Default for FormFiller<Pdftk> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FormTool> FormFiller<T> {
    /// Form filler backed by a custom tool implementation.
    pub fn with_tool(tool: T) -> Self {
        Self { tool }
    }

    /// Extract the form fields of `source` as typed records, in dump order.
    pub fn dump_fields(&self, source: impl AsRef<Path>) -> Result<Vec<FormField>> {
        let source = source.as_ref();
        check_readable(source)?;
        let text = self.tool.dump(source)?;
        Ok(dump::parse_data_fields(&text))
    }

    /// Build an empty fill template: every field title of `source` mapped to
    /// the empty string, in dump order.
    pub fn fdf_template(&self, source: impl AsRef<Path>) -> Result<IndexMap<String, String>> {
        let fields = self.dump_fields(source)?;
        Ok(fields
            .into_iter()
            .map(|field| (field.title, String::new()))
            .collect())
    }

    /// Fill the form in `source` with `data` and return the resulting PDF
    /// bytes.
    pub fn fill(
        &self,
        source: impl AsRef<Path>,
        data: &FdfData,
        options: &FillOptions,
    ) -> Result<Vec<u8>> {
        let source = source.as_ref();
        check_readable(source)?;
        let fdf = self.exchange_document(source, data, options)?;
        self.tool.fill(source, &fdf, &options.to_args())
    }

    /// Fill the form in `source` with `data`, writing the result to `dest`.
    pub fn fill_to_file(
        &self,
        source: impl AsRef<Path>,
        data: &FdfData,
        options: &FillOptions,
        dest: impl AsRef<Path>,
    ) -> Result<()> {
        let source = source.as_ref();
        check_readable(source)?;
        let fdf = self.exchange_document(source, data, options)?;
        self.tool
            .fill_to_file(source, &fdf, &options.to_args(), dest.as_ref())
    }

    /// Build the FDF exchange document for one fill call.
    ///
    /// When not flattening, the document starts from the full field template
    /// of `source` so unfilled fields survive in the output; caller values
    /// overlay their template entries in place.
    fn exchange_document(
        &self,
        source: &Path,
        data: &FdfData,
        options: &FillOptions,
    ) -> Result<Vec<u8>> {
        let mut records = FdfData::default();
        if !options.flatten {
            for field in self.dump_fields(source)? {
                records.insert(field.title, None);
            }
        }
        for (name, value) in data {
            records.insert(name.clone(), value.clone());
        }
        Ok(FdfWriter::from_map(&records).to_bytes())
    }
}

fn check_readable(path: &Path) -> Result<()> {
    match File::open(path) {
        Ok(_) => Ok(()),
        Err(source) => Err(Error::InputNotFound {
            path: path.to_path_buf(),
            source,
        }),
    }
}
