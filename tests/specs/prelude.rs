// SPDX-License-Identifier: MIT
// Copyright (c) 2026 yamlvet contributors

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;

use std::fs;
use std::path::PathBuf;
use std::process::Command;

/// Returns a Command configured to run the yamlvet binary.
///
/// NO_COLOR keeps assertions byte-exact regardless of the environment.
pub fn yamlvet_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("yamlvet"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// A schema accepting `{name: string, port: integer}` with `name` required.
pub const SCHEMA_YAML: &str = "\
type: object
properties:
  name:
    type: string
  port:
    type: integer
required:
  - name
";

/// Write `files` into a fresh temp directory and return it with its
/// canonical root (symlink-resolved, so paths match yamlvet's output).
pub fn fixture(files: &[(&str, &str)]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }
    let root = dir.path().canonicalize().unwrap();
    (dir, root)
}
