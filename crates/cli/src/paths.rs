//! Input path collection and exclusion filtering.

use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Resolve every input path to an absolute, symlink-free file path.
///
/// Order is preserved. Fails on the first path that does not exist or is not
/// a regular file: a bad input path aborts the whole run, not just that file.
pub fn collect(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut resolved = Vec::with_capacity(inputs.len());

    for input in inputs {
        let real = fs::canonicalize(input).map_err(|_| Error::InputPath {
            path: input.clone(),
        })?;
        if !real.is_file() {
            return Err(Error::InputPath { path: real });
        }
        resolved.push(real);
    }

    Ok(resolved)
}

/// Drop every path that starts with one of the exclude prefixes.
///
/// Matching is on the string form of the resolved path, not on path
/// segments: excluding `/a/b` also drops `/a/bc`.
pub fn apply_excludes(paths: Vec<PathBuf>, excludes: &[String]) -> Vec<PathBuf> {
    if excludes.is_empty() {
        return paths;
    }

    paths
        .into_iter()
        .filter(|path| {
            let text = path.to_string_lossy();
            !excludes.iter().any(|prefix| text.starts_with(prefix.as_str()))
        })
        .collect()
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
