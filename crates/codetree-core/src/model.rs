//! Core data structures shared by the import and function graphs

use std::collections::BTreeMap;
use std::fmt;

/// File path (or other key) → ordered targets.
///
/// Keys are kept sorted so every consumer walks files in the same order.
pub type Relation = BTreeMap<String, Vec<String>>;

/// The project's root module path, as declared in `go.mod`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Module(String);

impl Module {
    pub fn new(path: impl Into<String>) -> Self {
        Module(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last `/`-separated segment of the module path.
    ///
    /// Used as the graph title and as the short prefix of local imports.
    pub fn basename(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or_default()
    }

    /// Classify an import path against this module.
    ///
    /// Paths that start with the module path are local and get the module
    /// prefix replaced by [`Module::basename`]:
    /// `github.com/org/repo/pkg/x` → `repo/pkg/x`.
    pub fn classify(&self, import: &str) -> ImportPath {
        match import.strip_prefix(self.as_str()) {
            Some(rest) => ImportPath::Local(format!("{}{}", self.basename(), rest)),
            None => ImportPath::External(import.to_string()),
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An import path after classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImportPath {
    /// Inside the project; holds the rewritten, repo-relative form.
    Local(String),
    /// Third-party or standard library; holds the path unchanged.
    External(String),
}

impl ImportPath {
    pub fn is_local(&self) -> bool {
        matches!(self, ImportPath::Local(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            ImportPath::Local(path) | ImportPath::External(path) => path,
        }
    }
}

/// What a graph node stands for. Decides which style the node gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Directory,
    File,
    Function,
    /// An import target: a local package or an external one.
    Package,
}

/// Style category of an edge. Edges are unique per (source, target, kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Parent directory segment → child segment (function graph).
    DirectoryContainment,
    /// File → the directory holding it (import graph).
    FileContainment,
    LocalImport,
    ExternalImport,
    /// File basename → function signature (function graph).
    FunctionContainment,
}

/// A node of a frozen graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub name: String,
    pub kind: NodeKind,
}

/// A directed, styled edge between two node names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
}
