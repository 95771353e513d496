// SPDX-License-Identifier: MIT
// Copyright (c) 2026 yamlvet contributors

//! Console reporting for validation outcomes.
//!
//! Line-oriented, input-ordered output:
//! ```text
//! Validating: "<file>" with schema "<schema>"
//!   Okay!
//! ```
//! ```text
//! Validating: "<file>" with schema "<schema>"
//!   Validation failed!
//!     Error validating data "<file>" with schema "<schema>"
//!       <instance-path>: <message>
//! ```

use std::io::Write;
use std::path::Path;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::color::scheme;
use crate::validate::DocumentFailure;

/// Streams per-file validation results to the console.
pub struct TextReporter<W: WriteColor> {
    out: W,
}

impl TextReporter<StandardStream> {
    /// Reporter writing to stdout with the given color mode.
    pub fn stdout(choice: ColorChoice) -> Self {
        Self {
            out: StandardStream::stdout(choice),
        }
    }
}

impl<W: WriteColor> TextReporter<W> {
    /// Reporter writing to any color-capable sink (buffers in tests).
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Header line printed once per validated file.
    pub fn validating(&mut self, file: &Path, schema: &Path) -> std::io::Result<()> {
        writeln!(
            self.out,
            "Validating: \"{}\" with schema \"{}\"",
            file.display(),
            schema.display()
        )
    }

    /// Every document in the file conformed.
    pub fn okay(&mut self) -> std::io::Result<()> {
        write!(self.out, "  ")?;
        self.out.set_color(&scheme::pass())?;
        write!(self.out, "Okay!")?;
        self.out.reset()?;
        writeln!(self.out)
    }

    /// The resolved schema file does not exist; the file is skipped.
    pub fn skip_missing_schema(&mut self) -> std::io::Result<()> {
        write!(self.out, "  ")?;
        self.out.set_color(&scheme::skip())?;
        write!(self.out, "Skip")?;
        self.out.reset()?;
        writeln!(self.out, ": schema not found.")
    }

    /// Full failure block: header plus every violating document.
    pub fn failure(
        &mut self,
        file: &Path,
        schema: &Path,
        failures: &[DocumentFailure],
        document_count: usize,
    ) -> std::io::Result<()> {
        write!(self.out, "  ")?;
        self.out.set_color(&scheme::fail())?;
        write!(self.out, "Validation failed!")?;
        self.out.reset()?;
        writeln!(self.out)?;

        for failure in failures {
            // Document index only matters in multi-document streams.
            let data = if document_count > 1 {
                format!("{}#{}", file.display(), failure.document)
            } else {
                file.display().to_string()
            };
            writeln!(
                self.out,
                "    Error validating data \"{}\" with schema \"{}\"",
                data,
                schema.display()
            )?;
            for violation in &failure.violations {
                writeln!(self.out, "      {}", violation)?;
            }
        }
        Ok(())
    }

    /// Printed when exclusion filtered out every input.
    pub fn nothing_to_scan(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "No files to scan.")
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
