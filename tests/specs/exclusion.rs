// SPDX-License-Identifier: MIT
// Copyright (c) 2026 yamlvet contributors

//! Exclusion filter behavior, including the string-prefix matching lock.

use super::prelude::*;
use predicates::prelude::PredicateBooleanExt;

/// An excluded file is absent from processing.
#[test]
fn excluded_file_is_not_validated() {
    let (_dir, root) = fixture(&[
        ("schema.yaml", SCHEMA_YAML),
        ("a.yaml", "name: a\n"),
        ("b.yaml", "name: 7\n"),
    ]);

    // b.yaml would fail validation; excluding it makes the run pass.
    yamlvet_cmd()
        .arg("--exclude")
        .arg(root.join("b.yaml"))
        .arg(root.join("a.yaml"))
        .arg(root.join("b.yaml"))
        .assert()
        .code(0)
        .stdout(
            predicates::str::contains("a.yaml")
                .and(predicates::str::contains("b.yaml").not()),
        );
}

/// Exclusion matches string prefixes, not path segments: excluding `/a/b`
/// also drops `/a/bc`.
#[test]
fn exclusion_uses_string_prefix_matching() {
    let (_dir, root) = fixture(&[
        ("schema.yaml", SCHEMA_YAML),
        ("b.yaml", "name: b\n"),
        ("bc.yaml", "name: bc\n"),
        ("c.yaml", "name: c\n"),
    ]);

    yamlvet_cmd()
        .arg("--exclude")
        .arg(root.join("b"))
        .arg(root.join("b.yaml"))
        .arg(root.join("bc.yaml"))
        .arg(root.join("c.yaml"))
        .assert()
        .code(0)
        .stdout(
            predicates::str::contains("c.yaml")
                .and(predicates::str::contains("b.yaml").not())
                .and(predicates::str::contains("bc.yaml").not()),
        );
}

/// A directory prefix excludes everything beneath it.
#[test]
fn directory_prefix_excludes_its_files() {
    let (_dir, root) = fixture(&[
        ("schema.yaml", SCHEMA_YAML),
        ("a.yaml", "name: a\n"),
        ("vendored/schema.yaml", SCHEMA_YAML),
        ("vendored/v.yaml", "name: 7\n"),
    ]);

    yamlvet_cmd()
        .arg("--exclude")
        .arg(root.join("vendored"))
        .arg(root.join("a.yaml"))
        .arg(root.join("vendored/v.yaml"))
        .assert()
        .code(0)
        .stdout(predicates::str::contains("v.yaml").not());
}

/// Excluding every input leaves nothing to do; that is success, not failure.
#[test]
fn excluding_everything_is_a_no_op_success() {
    let (_dir, root) = fixture(&[("schema.yaml", SCHEMA_YAML), ("a.yaml", "name: a\n")]);

    yamlvet_cmd()
        .arg("--exclude")
        .arg(&root)
        .arg(root.join("a.yaml"))
        .assert()
        .code(0)
        .stdout("No files to scan.\n");
}

/// Exclusion applies after path resolution, so a bad input path still
/// aborts the run even when an exclude would have dropped it.
#[test]
fn missing_path_fails_even_when_excluded() {
    let (_dir, root) = fixture(&[("schema.yaml", SCHEMA_YAML)]);

    yamlvet_cmd()
        .arg("--exclude")
        .arg(root.join("missing.yaml"))
        .arg(root.join("missing.yaml"))
        .assert()
        .code(2);
}

/// A non-matching exclude changes nothing.
#[test]
fn unrelated_exclude_is_ignored() {
    let (_dir, root) = fixture(&[("schema.yaml", SCHEMA_YAML), ("a.yaml", "name: a\n")]);

    yamlvet_cmd()
        .args(["--exclude", "/nonexistent/prefix"])
        .arg(root.join("a.yaml"))
        .assert()
        .code(0)
        .stdout(predicates::str::contains("Okay!"));
}
