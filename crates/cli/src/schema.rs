// SPDX-License-Identifier: MIT
// Copyright (c) 2026 yamlvet contributors

//! Schema loading, per-directory resolution, and validation.
//!
//! Schemas are JSON Schema documents written in YAML, loaded with the same
//! backend as the data files and compiled with the `jsonschema` crate
//! (Draft 2020-12). Validation itself is entirely the library's job; this
//! module only adapts paths, strict mode, and error shapes around it.

use std::fmt;
use std::path::{Path, PathBuf};

use jsonschema::{Draft, Validator};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::loader::{self, Backend};

/// Resolve the candidate schema path for a file in `file_dir`.
///
/// An absolute configured path is used as-is; a relative one is joined to
/// the directory of the file being validated, so each directory can carry
/// its own schema in a recursive-validation setup.
pub fn resolve_schema_path(file_dir: &Path, configured: &Path) -> PathBuf {
    if configured.is_absolute() {
        configured.to_path_buf()
    } else {
        file_dir.join(configured)
    }
}

/// A single field-level violation reported by the validator.
#[derive(Debug, Clone)]
pub struct SchemaViolation {
    /// JSON Pointer to the violating value in the document.
    pub instance_path: String,
    /// Human-readable message from the validation library.
    pub message: String,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// A compiled schema ready to validate documents.
#[derive(Debug)]
pub struct Schema {
    path: PathBuf,
    validator: Validator,
}

impl Schema {
    /// Load and compile the schema at `path`.
    ///
    /// With `strict`, object schemas reject fields they do not declare.
    /// A multi-document schema file contributes only its first document.
    ///
    /// # Errors
    ///
    /// `Error::SchemaLoad` when the file cannot be read, parsed, or
    /// compiled. A missing schema file is the caller's concern: callers
    /// check existence first and skip instead of failing.
    pub fn load(path: &Path, backend: Backend, strict: bool) -> Result<Self> {
        let documents = loader::load_documents(path, backend).map_err(|e| match e {
            Error::DataLoad { path, reason } => Error::SchemaLoad { path, reason },
            Error::Io { path, source } => Error::SchemaLoad {
                path,
                reason: source.to_string(),
            },
            other => other,
        })?;

        let mut value = documents.into_iter().next().unwrap_or(Value::Null);
        if strict {
            apply_strict(&mut value);
        }

        let validator = jsonschema::options()
            .with_draft(Draft::Draft202012)
            .build(&value)
            .map_err(|e| Error::SchemaLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            validator,
        })
    }

    /// Path the schema was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate one document, returning every violation found.
    pub fn validate(&self, document: &Value) -> Vec<SchemaViolation> {
        self.validator
            .iter_errors(document)
            .map(|e| SchemaViolation {
                instance_path: e.instance_path.to_string(),
                message: e.to_string(),
            })
            .collect()
    }
}

/// Keywords whose value is a single subschema.
const SUBSCHEMA_KEYWORDS: &[&str] = &[
    "additionalProperties",
    "items",
    "not",
    "if",
    "then",
    "else",
    "contains",
    "propertyNames",
];

/// Keywords whose value maps names to subschemas.
const SUBSCHEMA_MAP_KEYWORDS: &[&str] = &["properties", "patternProperties", "$defs", "definitions"];

/// Keywords whose value is a list of subschemas.
const SUBSCHEMA_LIST_KEYWORDS: &[&str] = &["allOf", "anyOf", "oneOf", "prefixItems"];

/// Rewrite `schema` so object schemas reject undeclared fields.
///
/// Inserts `additionalProperties: false` into every object schema that
/// declares `properties` without saying anything about extra fields; an
/// explicit `additionalProperties` always wins over strict mode. Only
/// schema-bearing keywords are walked, so enum constants and default values
/// are left untouched.
pub fn apply_strict(schema: &mut Value) {
    let Value::Object(object) = schema else {
        return;
    };

    if object.contains_key("properties") && !object.contains_key("additionalProperties") {
        object.insert("additionalProperties".to_string(), Value::Bool(false));
    }

    for keyword in SUBSCHEMA_KEYWORDS {
        if let Some(sub) = object.get_mut(*keyword) {
            apply_strict(sub);
        }
    }
    for keyword in SUBSCHEMA_MAP_KEYWORDS {
        if let Some(Value::Object(map)) = object.get_mut(*keyword) {
            for sub in map.values_mut() {
                apply_strict(sub);
            }
        }
    }
    for keyword in SUBSCHEMA_LIST_KEYWORDS {
        if let Some(Value::Array(list)) = object.get_mut(*keyword) {
            for sub in list.iter_mut() {
                apply_strict(sub);
            }
        }
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
