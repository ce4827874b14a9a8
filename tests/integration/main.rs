//! Integration tests for go-code-tree
//!
//! These run the full pipelines and the built binaries against small
//! temporary Go modules.

use codetree_core::{ErrorKind, ImportOptions};
use codetree_indexer::ScanOptions;
use go_code_tree::commands::{function_graph, import_graph};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (path, contents) in files {
        let full = dir.path().join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, contents).unwrap();
    }
    dir
}

fn sample() -> TempDir {
    project(&[
        ("go.mod", "module github.com/org/repo\n"),
        (
            "pkg/x/a.go",
            "package x\n\nimport (\n\t\"strings\"\n\t\"github.com/org/repo/pkg/y\"\n)\n\nfunc (r *Reader) Read(p []byte) (n int, err error) { return 0, nil }\n\nvar _ = strings.ToUpper\n",
        ),
        ("pkg/y/y.go", "package y\n\nfunc Y() {}\n"),
        ("pkg/y/y_test.go", "package y\n\nfunc TestY() {}\n"),
    ])
}

#[test]
fn test_import_graph_local_and_third_party() {
    let dir = sample();

    let local = import_graph(dir.path(), ScanOptions::default(), ImportOptions::default()).unwrap();
    assert!(local.starts_with("digraph \"repo\" {\n"));
    assert!(local.contains("  \"pkg/x/a.go\" -> \"repo/pkg/y\" [color=\"seagreen\"];"));
    assert!(!local.contains("\"strings\""));
    assert!(!local.contains("y_test.go"));

    let third = import_graph(
        dir.path(),
        ScanOptions::default(),
        ImportOptions {
            show_third_party: true,
        },
    )
    .unwrap();
    assert!(third.contains("  \"pkg/x/a.go\" -> \"strings\" [color=\"seagreen\"];"));
}

#[test]
fn test_function_graph_contains_rendered_signature() {
    let dir = sample();
    let dot = function_graph(dir.path(), ScanOptions::default()).unwrap();

    assert!(dot.contains("rankdir=LR;"));
    assert!(dot.contains(
        "  \"a.go\" -> \"func (r *Reader) Read(p []byte) (n int, err error)\" [color=\"seagreen\", style=\"filled\", fillcolor=\"mintcream\"];"
    ));
    assert_eq!(dot.matches("  \"pkg\" -> \"y\" ").count(), 1);
    assert!(!dot.contains("TestY"));
}

#[test]
fn test_output_is_idempotent() {
    let dir = sample();
    let options = ImportOptions {
        show_third_party: true,
    };
    let first = import_graph(dir.path(), ScanOptions::default(), options).unwrap();
    let second = import_graph(dir.path(), ScanOptions::default(), options).unwrap();
    assert_eq!(first, second);

    let first = function_graph(dir.path(), ScanOptions::default()).unwrap();
    let second = function_graph(dir.path(), ScanOptions::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_project_has_no_statements() {
    let dir = project(&[("go.mod", "module example.com/empty\n")]);
    let dot = function_graph(dir.path(), ScanOptions::default()).unwrap();
    assert_eq!(
        dot,
        "digraph \"empty\" {\n  rankdir=LR;\n  node [shape=box, color=\"burlywood\", style=\"filled\", fillcolor=\"seashell\"];\n  edge [color=\"burlywood\"];\n}"
    );
}

#[test]
fn test_missing_manifest_is_manifest_error() {
    let dir = project(&[("main.go", "package main\n")]);
    let err = import_graph(dir.path(), ScanOptions::default(), ImportOptions::default()).unwrap_err();

    let cause = err
        .downcast_ref::<codetree_core::Error>()
        .expect("typed error");
    assert_eq!(cause.kind(), ErrorKind::Manifest);
    assert!(err.to_string().contains("Error reading module name"));
}

#[test]
fn test_syntax_error_produces_no_graph() {
    let dir = project(&[
        ("go.mod", "module example.com/m\n"),
        ("bad.go", "package main\n\nfunc main( {\n"),
    ]);
    let err = function_graph(dir.path(), ScanOptions::default()).unwrap_err();
    let cause = err.downcast_ref::<codetree_core::Error>().unwrap();
    assert_eq!(cause.kind(), ErrorKind::Parse);
}

fn run(bin: &str, dir: &Path, extra: &[&str]) -> std::process::Output {
    Command::new(bin)
        .arg("--dir")
        .arg(dir)
        .args(extra)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_binaries_print_dot_to_stdout() {
    let dir = sample();

    let imp = run(env!("CARGO_BIN_EXE_go-code-tree-imp"), dir.path(), &["--third"]);
    assert!(imp.status.success());
    let stdout = String::from_utf8_lossy(&imp.stdout);
    assert!(stdout.starts_with("digraph \"repo\" {"));
    assert!(stdout.contains("\"strings\""));
    assert!(stdout.ends_with("}\n"));

    let func = run(env!("CARGO_BIN_EXE_go-code-tree-fn"), dir.path(), &[]);
    assert!(func.status.success());
    assert!(String::from_utf8_lossy(&func.stdout).contains("func Y()"));
}

#[test]
fn test_binary_logs_error_without_output() {
    let dir = TempDir::new().unwrap();
    let out = run(env!("CARGO_BIN_EXE_go-code-tree-imp"), dir.path(), &[]);

    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("manifest not found"));
}
