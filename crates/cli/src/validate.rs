// SPDX-License-Identifier: MIT
// Copyright (c) 2026 yamlvet contributors

//! Validation driver: per-file schema resolution, validation, reporting.
//!
//! Files are processed sequentially in input order. A validation failure
//! marks the run failed and moves on; a data-load error aborts the rest of
//! the run through the outer error boundary in `main`.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::color::resolve_color;
use crate::error::ExitCode;
use crate::loader::{self, Backend};
use crate::paths;
use crate::report::TextReporter;
use crate::schema::{self, Schema, SchemaViolation};

/// Violations found in one document of a file.
#[derive(Debug)]
pub struct DocumentFailure {
    /// Zero-based document index within the stream.
    pub document: usize,
    /// Field-level violations, in the order the library reported them.
    pub violations: Vec<SchemaViolation>,
}

/// What happened to a single file.
#[derive(Debug)]
pub enum Outcome {
    /// Every document conformed to the schema.
    Validated { schema_path: PathBuf },
    /// The resolved schema file does not exist; the file is skipped.
    SchemaMissing { schema_path: PathBuf },
    /// The file is its own schema; a schema is never validated against itself.
    SelfSchema,
    /// At least one document failed validation.
    Failed {
        schema_path: PathBuf,
        document_count: usize,
        failures: Vec<DocumentFailure>,
    },
}

/// Validate one file against its resolved schema.
///
/// # Errors
///
/// Propagates data-load and schema-load errors; both are unexpected at this
/// level and terminate the whole run with exit code 3.
pub fn validate_file(
    file: &Path,
    configured_schema: &Path,
    backend: Backend,
    strict: bool,
) -> crate::Result<Outcome> {
    let documents = loader::load_documents(file, backend)?;

    // `file` is canonical, so it always has a parent directory.
    let file_dir = file.parent().unwrap_or_else(|| Path::new("/"));
    let schema_path = schema::resolve_schema_path(file_dir, configured_schema);

    if file == schema_path {
        return Ok(Outcome::SelfSchema);
    }
    if !schema_path.is_file() {
        return Ok(Outcome::SchemaMissing { schema_path });
    }

    let schema = Schema::load(&schema_path, backend, strict)?;

    let mut failures = Vec::new();
    for (index, document) in documents.iter().enumerate() {
        let violations = schema.validate(document);
        if !violations.is_empty() {
            failures.push(DocumentFailure {
                document: index,
                violations,
            });
        }
    }

    if failures.is_empty() {
        Ok(Outcome::Validated { schema_path })
    } else {
        Ok(Outcome::Failed {
            schema_path,
            document_count: documents.len(),
            failures,
        })
    }
}

/// Run the whole validation pass described by the CLI configuration.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let resolved = paths::collect(&cli.paths)?;
    tracing::debug!(paths = ?resolved, "collected input paths");

    let remaining = paths::apply_excludes(resolved, &cli.exclude);
    tracing::debug!(paths = ?remaining, "after exclusion filter");

    let mut reporter = TextReporter::stdout(resolve_color());

    if remaining.is_empty() {
        reporter.nothing_to_scan()?;
        return Ok(ExitCode::Success);
    }

    let strict = !cli.no_strict;
    let mut failed = false;

    for file in &remaining {
        match validate_file(file, &cli.schema, cli.parser, strict)? {
            Outcome::SelfSchema => {}
            Outcome::SchemaMissing { schema_path } => {
                reporter.validating(file, &schema_path)?;
                reporter.skip_missing_schema()?;
            }
            Outcome::Validated { schema_path } => {
                reporter.validating(file, &schema_path)?;
                reporter.okay()?;
            }
            Outcome::Failed {
                schema_path,
                document_count,
                failures,
            } => {
                reporter.validating(file, &schema_path)?;
                reporter.failure(file, &schema_path, &failures, document_count)?;
                failed = true;
            }
        }
    }

    Ok(if failed {
        ExitCode::ValidationFailed
    } else {
        ExitCode::Success
    })
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
