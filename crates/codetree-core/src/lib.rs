//! Code tree core: data model, relation builders and DOT output

pub mod dot;
pub mod error;
pub mod functions;
pub mod graph;
pub mod imports;
pub mod model;


pub use dot::{RankDir, Style, StyleTable, render};
pub use error::{Diagnostic, Error, ErrorKind, Result};
pub use functions::FunctionGraphBuilder;
pub use graph::{CodeGraph, GraphBuilder};
pub use imports::{FileImports, ImportGraphBuilder, ImportOptions};
pub use model::{EdgeKind, GraphEdge, GraphNode, ImportPath, Module, NodeKind, Relation};
