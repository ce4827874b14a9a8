//! Graphviz DOT serialization with fixed per-graph styling

use crate::graph::CodeGraph;
use crate::model::{EdgeKind, NodeKind};
use std::fmt;

/// Color attributes of a node or edge statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: &'static str,
    pub fill: Option<&'static str>,
}

impl Style {
    const fn plain(color: &'static str) -> Self {
        Style { color, fill: None }
    }

    const fn filled(color: &'static str, fill: &'static str) -> Self {
        Style {
            color,
            fill: Some(fill),
        }
    }

    fn attributes(&self) -> String {
        match self.fill {
            Some(fill) => format!(
                "color=\"{}\", style=\"filled\", fillcolor=\"{}\"",
                self.color, fill
            ),
            None => format!("color=\"{}\"", self.color),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankDir {
    TopBottom,
    LeftRight,
}

impl RankDir {
    fn as_str(&self) -> &'static str {
        match self {
            RankDir::TopBottom => "TB",
            RankDir::LeftRight => "LR",
        }
    }
}

/// Layout direction plus node and edge styles for one kind of graph.
///
/// A node kind without a style gets no node statement.
#[derive(Debug, Clone, Copy)]
pub struct StyleTable {
    pub rankdir: RankDir,
    pub directory: Option<Style>,
    pub file: Option<Style>,
    pub function: Option<Style>,
    pub package: Option<Style>,
    pub directory_containment: Style,
    pub file_containment: Style,
    pub local_import: Style,
    pub external_import: Style,
    pub function_containment: Style,
}

const DEFAULT_NODE: &str =
    "node [shape=box, color=\"burlywood\", style=\"filled\", fillcolor=\"seashell\"];";
const DEFAULT_EDGE: &str = "edge [color=\"burlywood\"];";

impl StyleTable {
    /// File → directory and file → import graph.
    pub const IMPORTS: StyleTable = StyleTable {
        rankdir: RankDir::TopBottom,
        directory: Some(Style::filled("seagreen", "mintcream")),
        file: Some(Style::filled("orange", "lightyellow")),
        function: None,
        package: None,
        directory_containment: Style::plain("orange"),
        file_containment: Style::plain("orange"),
        local_import: Style::plain("seagreen"),
        external_import: Style::plain("seagreen"),
        function_containment: Style::plain("seagreen"),
    };

    /// Directory → file → function containment graph.
    pub const FUNCTIONS: StyleTable = StyleTable {
        rankdir: RankDir::LeftRight,
        directory: None,
        file: Some(Style::filled("seagreen", "mintcream")),
        function: Some(Style::filled("dodgerblue4", "aliceblue")),
        package: None,
        directory_containment: Style::filled("orange", "lightyellow"),
        file_containment: Style::plain("orange"),
        local_import: Style::plain("seagreen"),
        external_import: Style::plain("seagreen"),
        function_containment: Style::filled("seagreen", "mintcream"),
    };

    pub fn node_style(&self, kind: NodeKind) -> Option<Style> {
        match kind {
            NodeKind::Directory => self.directory,
            NodeKind::File => self.file,
            NodeKind::Function => self.function,
            NodeKind::Package => self.package,
        }
    }

    pub fn edge_style(&self, kind: EdgeKind) -> Style {
        match kind {
            EdgeKind::DirectoryContainment => self.directory_containment,
            EdgeKind::FileContainment => self.file_containment,
            EdgeKind::LocalImport => self.local_import,
            EdgeKind::ExternalImport => self.external_import,
            EdgeKind::FunctionContainment => self.function_containment,
        }
    }
}

/// Render a frozen graph as DOT text.
///
/// Header and default attributes, styled node statements, edge statements,
/// closing brace. No trailing newline.
pub fn render(graph: &CodeGraph, styles: &StyleTable) -> String {
    Dot { graph, styles }.to_string()
}

struct Dot<'a> {
    graph: &'a CodeGraph,
    styles: &'a StyleTable,
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {} {{", quote(self.graph.title()))?;
        writeln!(f, "  rankdir={};", self.styles.rankdir.as_str())?;
        writeln!(f, "  {DEFAULT_NODE}")?;
        writeln!(f, "  {DEFAULT_EDGE}")?;

        for node in self.graph.nodes() {
            if let Some(style) = self.styles.node_style(node.kind) {
                writeln!(f, "  {} [{}];", quote(&node.name), style.attributes())?;
            }
        }

        for edge in self.graph.edges() {
            let style = self.styles.edge_style(edge.kind);
            writeln!(
                f,
                "  {} -> {} [{}];",
                quote(&edge.source),
                quote(&edge.target),
                style.attributes()
            )?;
        }

        f.write_str("}")
    }
}

/// Quoted DOT identifier. Embedded double quotes are escaped.
fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('"', "\\\""))
}
