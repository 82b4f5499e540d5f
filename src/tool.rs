//! The external document-processing tool boundary.
//!
//! Everything that touches a process lives here. The rest of the crate only
//! sees the [`FormTool`] trait: `dump` hands back the full field-dump text,
//! `fill` hands back the filled PDF bytes. Tests substitute a fake
//! implementation returning canned text/bytes, so the translation layer never
//! needs pdftk installed.

use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Capability-bounded interface to the external form tool.
///
/// Any implementation (subprocess, RPC, canned fake) is substitutable. The
/// caller guarantees `source` was readability-checked before these are
/// invoked; implementations do not re-check.
pub trait FormTool {
    /// Run the tool's field-dump mode and return its full stdout text.
    fn dump(&self, source: &Path) -> Result<String>;

    /// Fill `source` using the given FDF bytes and behavior flags, returning
    /// the filled PDF as bytes.
    fn fill(&self, source: &Path, fdf: &[u8], flags: &[String]) -> Result<Vec<u8>>;

    /// Fill `source` and write the result to `dest`.
    ///
    /// The default implementation buffers through [`FormTool::fill`];
    /// implementations may stream to the destination directly.
    fn fill_to_file(&self, source: &Path, fdf: &[u8], flags: &[String], dest: &Path) -> Result<()> {
        let bytes = self.fill(source, fdf, flags)?;
        std::fs::write(dest, bytes)?;
        Ok(())
    }
}

/// `pdftk` invoked as a subprocess.
///
/// Dump mode runs `pdftk <src> dump_data_fields_utf8` and captures stdout in
/// full. Fill mode runs `pdftk <src> fill_form - output <dest> [flags]` with
/// the FDF document piped over stdin.
#[derive(Debug, Clone)]
pub struct Pdftk {
    binary: String,
}

impl Pdftk {
    /// Use the `pdftk` binary found on `PATH`.
    pub fn new() -> Self {
        Self {
            binary: "pdftk".to_string(),
        }
    }

    /// Use a specific pdftk binary.
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn run_fill(
        &self,
        source: &Path,
        fdf: &[u8],
        flags: &[String],
        dest: &OsStr,
    ) -> Result<Vec<u8>> {
        let mut cmd = Command::new(&self.binary);
        cmd.arg(source)
            .arg("fill_form")
            .arg("-")
            .arg("output")
            .arg(dest)
            .args(flags)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        log::debug!("spawning {:?}", cmd);

        let mut child = cmd.spawn().map_err(Error::ToolSpawn)?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(fdf)?;
            // Dropped here so pdftk sees end-of-input before we wait.
        }
        let output = child.wait_with_output()?;
        check_status(output.status, &output.stderr)?;
        Ok(output.stdout)
    }
}

impl Default for Pdftk {
    fn default() -> Self {
        Self::new()
    }
}

impl FormTool for Pdftk {
    fn dump(&self, source: &Path) -> Result<String> {
        let mut cmd = Command::new(&self.binary);
        cmd.arg(source)
            .arg("dump_data_fields_utf8")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        log::debug!("spawning {:?}", cmd);

        let output = cmd.output().map_err(Error::ToolSpawn)?;
        check_status(output.status, &output.stderr)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn fill(&self, source: &Path, fdf: &[u8], flags: &[String]) -> Result<Vec<u8>> {
        self.run_fill(source, fdf, flags, OsStr::new("-"))
    }

    fn fill_to_file(&self, source: &Path, fdf: &[u8], flags: &[String], dest: &Path) -> Result<()> {
        // pdftk writes the destination itself; stdout stays empty.
        self.run_fill(source, fdf, flags, dest.as_os_str())?;
        Ok(())
    }
}

fn check_status(status: std::process::ExitStatus, stderr: &[u8]) -> Result<()> {
    if status.success() {
        Ok(())
    } else {
        Err(Error::Tool {
            status,
            stderr: String::from_utf8_lossy(stderr).into_owned(),
        })
    }
}
