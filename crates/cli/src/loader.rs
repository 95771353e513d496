// SPDX-License-Identifier: MIT
// Copyright (c) 2026 yamlvet contributors

//! YAML loading backends.
//!
//! Two interchangeable parsers load multi-document YAML streams into
//! `serde_json::Value` documents ready for schema validation. The backend is
//! picked once at startup via `--parser`.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// YAML library used to load data files and schemas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// The `serde_yaml` crate
    SerdeYaml,
    /// The `serde_yaml_ng` crate
    SerdeYamlNg,
}

impl Backend {
    /// The parser implementation behind this backend.
    pub fn parser(self) -> &'static dyn YamlParser {
        match self {
            Backend::SerdeYaml => &SerdeYamlParser,
            Backend::SerdeYamlNg => &SerdeYamlNgParser,
        }
    }
}

/// A YAML parsing backend.
///
/// Object-safe so the selected backend can travel as `&dyn YamlParser`.
pub trait YamlParser: Sync {
    /// Backend identifier as shown in `--parser` help and logs.
    fn name(&self) -> &'static str;

    /// Parse a YAML stream into its documents.
    fn parse_documents(&self, path: &Path, source: &str) -> Result<Vec<Value>>;
}

struct SerdeYamlParser;

impl YamlParser for SerdeYamlParser {
    fn name(&self) -> &'static str {
        "serde-yaml"
    }

    fn parse_documents(&self, path: &Path, source: &str) -> Result<Vec<Value>> {
        let mut documents = Vec::new();
        for document in serde_yaml::Deserializer::from_str(source) {
            let value = Value::deserialize(document).map_err(|e| Error::DataLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
            documents.push(value);
        }
        Ok(normalize(documents))
    }
}

struct SerdeYamlNgParser;

impl YamlParser for SerdeYamlNgParser {
    fn name(&self) -> &'static str {
        "serde-yaml-ng"
    }

    fn parse_documents(&self, path: &Path, source: &str) -> Result<Vec<Value>> {
        let mut documents = Vec::new();
        for document in serde_yaml_ng::Deserializer::from_str(source) {
            let value = Value::deserialize(document).map_err(|e| Error::DataLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
            documents.push(value);
        }
        Ok(normalize(documents))
    }
}

/// An empty stream still counts as one document: empty files validate as null.
fn normalize(documents: Vec<Value>) -> Vec<Value> {
    if documents.is_empty() {
        vec![Value::Null]
    } else {
        documents
    }
}

/// Load the YAML documents contained in `path` using the chosen backend.
pub fn load_documents(path: &Path, backend: Backend) -> Result<Vec<Value>> {
    let source = fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), backend = backend.parser().name(), "loading yaml");
    backend.parser().parse_documents(path, &source)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
