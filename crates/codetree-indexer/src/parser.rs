//! tree-sitter Go parser with fail-fast syntax checking
//!
//! tree-sitter recovers from syntax errors; this wrapper turns the first
//! ERROR or MISSING node into a [`Diagnostic`] so a broken file aborts the run.

use codetree_core::{Diagnostic, Error, Result};
use std::path::Path;
use tree_sitter::{Language, Node, Parser, Tree};

/// How much of a file must be syntactically valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMode {
    /// Package clause and import declarations only.
    ImportsOnly,
    /// The whole file.
    Full,
}

pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    pub fn new() -> Result<Self> {
        let language: Language = tree_sitter_go::LANGUAGE.into();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| Error::Grammar(e.to_string()))?;
        Ok(Self { parser })
    }

    /// Parse `source` and check it according to `mode`.
    pub fn parse(&mut self, path: &Path, source: &str, mode: ExtractMode) -> Result<Tree> {
        let tree = self.parser.parse(source, None).ok_or_else(|| Error::Parse {
            path: path.to_path_buf(),
            diagnostic: Diagnostic {
                line: 1,
                column: 1,
                message: "parser produced no syntax tree".to_string(),
            },
        })?;

        if let Some(diagnostic) = check(tree.root_node(), source.as_bytes(), mode) {
            return Err(Error::Parse {
                path: path.to_path_buf(),
                diagnostic,
            });
        }
        Ok(tree)
    }
}

fn check(root: Node<'_>, source: &[u8], mode: ExtractMode) -> Option<Diagnostic> {
    let mut cursor = root.walk();
    let mut seen_package = false;
    let mut seen_decl = false;

    for child in root.children(&mut cursor) {
        // Terminators (`\n`, `;`) are anonymous children of source_file.
        if child.kind() == "comment" || (!child.is_named() && !child.is_missing()) {
            continue;
        }
        if mode == ExtractMode::ImportsOnly && seen_package && !is_import_section(child, source) {
            return None;
        }
        if let Some(diagnostic) = first_error(child, source) {
            return Some(diagnostic);
        }
        if !seen_package {
            if child.kind() != "package_clause" {
                return Some(diagnostic_at(child, "expected 'package'".to_string()));
            }
            seen_package = true;
            continue;
        }

        // tree-sitter-go also accepts statements and misplaced clauses here.
        let message = match child.kind() {
            "import_declaration" if seen_decl => "imports must appear before other declarations",
            "import_declaration" => continue,
            "function_declaration" | "method_declaration" | "const_declaration"
            | "var_declaration" | "type_declaration" => {
                seen_decl = true;
                continue;
            }
            "package_clause" => "unexpected 'package' clause",
            _ => "non-declaration statement outside function body",
        };
        return Some(diagnostic_at(child, message.to_string()));
    }

    if !seen_package {
        let end = root.end_position();
        return Some(Diagnostic {
            line: end.row + 1,
            column: end.column + 1,
            message: "expected 'package', found EOF".to_string(),
        });
    }
    None
}

/// Import declarations, including ones tree-sitter could not recover.
pub fn is_import_section(node: Node<'_>, source: &[u8]) -> bool {
    match node.kind() {
        "import_declaration" => true,
        _ if node.is_error() => node
            .utf8_text(source)
            .is_ok_and(|text| text.trim_start().starts_with("import")),
        _ => false,
    }
}

/// Depth-first search for the first ERROR or MISSING node.
pub fn first_error(node: Node<'_>, source: &[u8]) -> Option<Diagnostic> {
    if node.is_missing() {
        return Some(diagnostic_at(node, format!("missing {}", node.kind())));
    }
    if node.is_error() {
        let snippet = node
            .utf8_text(source)
            .unwrap_or_default()
            .lines()
            .next()
            .unwrap_or_default()
            .chars()
            .take(40)
            .collect::<String>();
        return Some(diagnostic_at(node, format!("unexpected `{}`", snippet.trim())));
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(diagnostic) = first_error(child, source) {
            return Some(diagnostic);
        }
    }
    None
}

fn diagnostic_at(node: Node<'_>, message: String) -> Diagnostic {
    let start = node.start_position();
    Diagnostic {
        line: start.row + 1,
        column: start.column + 1,
        message,
    }
}
