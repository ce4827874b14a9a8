//! Go language extractor using tree-sitter

use crate::extractor::{ExtractionResult, LanguageExtractor};
use crate::parser::{is_import_section, ExtractMode, GoParser};
use crate::signature::{ChanDir, Field, FieldList, FunctionDecl, TypeExpr};
use codetree_core::Result;
use std::path::Path;
use tree_sitter::Node;

pub struct GoExtractor {
    parser: GoParser,
}

impl GoExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            parser: GoParser::new()?,
        })
    }
}

impl LanguageExtractor for GoExtractor {
    fn extract(&mut self, path: &Path, source: &str, mode: ExtractMode) -> Result<ExtractionResult> {
        let tree = self.parser.parse(path, source, mode)?;
        let root = tree.root_node();
        let src = source.as_bytes();

        let mut result = ExtractionResult::default();
        let mut cursor = root.walk();
        let mut seen_package = false;
        for child in root.children(&mut cursor) {
            if !child.is_named() || child.kind() == "comment" {
                continue;
            }
            // Only the leading import section was checked.
            if mode == ExtractMode::ImportsOnly && seen_package && !is_import_section(child, src) {
                break;
            }
            match child.kind() {
                "package_clause" => seen_package = true,
                "import_declaration" => extract_imports(child, src, &mut result.imports),
                "function_declaration" | "method_declaration" if mode == ExtractMode::Full => {
                    result.functions.push(lower_function(child, src).to_string());
                }
                _ => {}
            }
        }

        tracing::debug!(
            "Extracted {} imports, {} functions from {}",
            result.imports.len(),
            result.functions.len(),
            path.display()
        );
        Ok(result)
    }
}

fn text<'a>(node: Node<'_>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or_default()
}

fn extract_imports(decl: Node<'_>, source: &[u8], imports: &mut Vec<String>) {
    let mut cursor = decl.walk();
    for child in decl.named_children(&mut cursor) {
        match child.kind() {
            "import_spec" => push_import_path(child, source, imports),
            "import_spec_list" => {
                let mut inner = child.walk();
                for spec in child.named_children(&mut inner) {
                    if spec.kind() == "import_spec" {
                        push_import_path(spec, source, imports);
                    }
                }
            }
            _ => {}
        }
    }
}

fn push_import_path(spec: Node<'_>, source: &[u8], imports: &mut Vec<String>) {
    if let Some(path) = spec.child_by_field_name("path") {
        let literal = text(path, source);
        imports.push(literal.trim_matches(|c| c == '"' || c == '`').to_string());
    }
}

/// Lower a `function_declaration` or `method_declaration` node.
pub fn lower_function(node: Node<'_>, source: &[u8]) -> FunctionDecl {
    let receiver = node
        .child_by_field_name("receiver")
        .map(|list| lower_field_list(list, source));
    let name = node
        .child_by_field_name("name")
        .map(|n| text(n, source).to_string())
        .unwrap_or_default();
    let params = node
        .child_by_field_name("parameters")
        .map(|list| lower_field_list(list, source))
        .unwrap_or_default();
    let results = node.child_by_field_name("result").map(|result| {
        if result.kind() == "parameter_list" {
            lower_field_list(result, source)
        } else {
            FieldList(vec![Field::unnamed(lower_type(Some(result), source))])
        }
    });

    FunctionDecl {
        receiver,
        name,
        params,
        results,
    }
}

fn lower_field_list(list: Node<'_>, source: &[u8]) -> FieldList {
    let mut fields = Vec::new();
    let mut cursor = list.walk();
    for decl in list.named_children(&mut cursor) {
        let ty = match decl.kind() {
            "parameter_declaration" => lower_type(decl.child_by_field_name("type"), source),
            "variadic_parameter_declaration" => TypeExpr::Variadic(Box::new(lower_type(
                decl.child_by_field_name("type"),
                source,
            ))),
            _ => continue,
        };
        let mut names_cursor = decl.walk();
        let names = decl
            .children_by_field_name("name", &mut names_cursor)
            .map(|n| text(n, source).to_string())
            .collect();
        fields.push(Field { names, ty });
    }
    FieldList(fields)
}

/// Lower a type node. Missing nodes and unknown kinds become `Unsupported`.
pub fn lower_type(node: Option<Node<'_>>, source: &[u8]) -> TypeExpr {
    let Some(node) = node else {
        return TypeExpr::Unsupported;
    };
    let boxed = |field: &str| Box::new(lower_type(node.child_by_field_name(field), source));

    match node.kind() {
        "type_identifier" | "identifier" => TypeExpr::Ident(text(node, source).to_string()),
        "pointer_type" => TypeExpr::Pointer(Box::new(lower_type(node.named_child(0), source))),
        "slice_type" => TypeExpr::Slice(boxed("element")),
        "array_type" => TypeExpr::Array {
            len: node
                .child_by_field_name("length")
                .map(|len| text(len, source).to_string())
                .unwrap_or_default(),
            elem: boxed("element"),
        },
        "map_type" => TypeExpr::Map {
            key: boxed("key"),
            value: boxed("value"),
        },
        "channel_type" => TypeExpr::Chan {
            dir: chan_dir(node),
            elem: boxed("value"),
        },
        "qualified_type" => match (
            node.child_by_field_name("package"),
            node.child_by_field_name("name"),
        ) {
            (Some(package), Some(name)) => TypeExpr::Qualified {
                package: text(package, source).to_string(),
                name: text(name, source).to_string(),
            },
            _ => TypeExpr::Unsupported,
        },
        _ => TypeExpr::Unsupported,
    }
}

/// `<-chan T` starts with the arrow, `chan<- T` has it second.
fn chan_dir(node: Node<'_>) -> ChanDir {
    let first = node.child(0).map(|n| n.kind());
    let second = node.child(1).map(|n| n.kind());
    match (first, second) {
        (Some("<-"), _) => ChanDir::Recv,
        (_, Some("<-")) => ChanDir::Send,
        _ => ChanDir::Both,
    }
}
