//! # pdf_formfill
//!
//! Fill interactive PDF form fields and extract field metadata by driving the
//! `pdftk` command-line tool.
//!
//! ## What it does
//!
//! - **Field extraction**: parses `pdftk dump_data_fields_utf8` output into
//!   typed [`FormField`] records (JSON-serializable, camelCase keys).
//! - **FDF generation**: byte-exact Forms Data Format documents from an
//!   ordered name → value mapping, including the literal-string escaping
//!   rules ([`fdf`]).
//! - **Form filling**: pipes the FDF document and source PDF through
//!   `pdftk fill_form`, flattened or not, returning bytes or writing a file
//!   ([`FormFiller`]).
//!
//! The process boundary is the [`FormTool`] trait; the bundled [`Pdftk`]
//! implementation shells out, and tests substitute fakes returning canned
//! dump text, so the translation layer itself never needs pdftk installed.
//!
//! ## Quick start
//!
//! ```no_run
//! use pdf_formfill::{FillOptions, FormFiller};
//! use pdf_formfill::fdf::FdfData;
//!
//! # fn main() -> pdf_formfill::Result<()> {
//! let filler = FormFiller::new();
//!
//! // Inspect the form
//! let fields = filler.dump_fields("form.pdf")?;
//! println!("{}", serde_json::to_string_pretty(&fields).unwrap());
//!
//! // Fill it
//! let mut data = FdfData::default();
//! data.insert("first_name".into(), Some("John".into()));
//! data.insert("hockey".into(), Some("Yes".into()));
//! filler.fill_to_file("form.pdf", &data, &FillOptions::new(), "filled.pdf")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Known limitation
//!
//! pdftk does not reliably render non-ASCII fill values (diacritics, Indic
//! and Arabic scripts) even with `need_appearances`; the FDF bytes this crate
//! produces carry the UTF-8 content intact, but what the viewer shows is up
//! to the tool.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Typed field records and their JSON shape
pub mod fields;

// FDF exchange-format generation
pub mod fdf;

// pdftk field-dump parsing
pub mod dump;

// Field-to-FDF adapters
pub mod convert;

// External tool boundary
pub mod tool;

// Fill orchestration
pub mod fill;

// Re-exports
pub use convert::{field_json_to_fdf, map_form_to_pdf};
pub use dump::parse_data_fields;
pub use error::{Error, Result};
pub use fdf::{create_fdf, FdfData, FdfWriter};
pub use fields::{FieldValue, FormField};
pub use fill::{FillOptions, FormFiller};
pub use tool::{FormTool, Pdftk};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
