// SPDX-License-Identifier: MIT
// Copyright (c) 2026 yamlvet contributors

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::loader::Backend;

/// Validate YAML files against per-directory schemas
#[derive(Parser, Debug)]
#[command(name = "yamlvet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File path of the schema; absolute, or relative to each checked file's directory
    #[arg(short, long, default_value = "schema.yaml", value_name = "PATH")]
    pub schema: PathBuf,

    /// YAML library used to load files
    #[arg(short, long, value_enum, default_value = "serde-yaml")]
    pub parser: Backend,

    /// Disable strict mode; unexpected elements in the data are accepted
    #[arg(long)]
    pub no_strict: bool,

    /// Disable recursive scan under the given paths (directory expansion is
    /// the calling hook's job, this flag only documents the intent)
    #[arg(long)]
    pub no_recursive: bool,

    /// Path prefix to exclude from validation; may be given multiple times
    #[arg(long, value_name = "PATH")]
    pub exclude: Vec<String>,

    /// Output debug logs (same as YAMLVET_LOG=debug)
    #[arg(long)]
    pub debug: bool,

    /// Files to validate
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
