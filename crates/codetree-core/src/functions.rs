//! Function containment builder: directory chain → file → function signatures

use crate::graph::{CodeGraph, GraphBuilder};
use crate::model::{EdgeKind, Module, NodeKind, Relation};

/// Builds the containment graph from a file → signatures relation.
pub struct FunctionGraphBuilder {
    builder: GraphBuilder,
}

impl FunctionGraphBuilder {
    pub fn new(module: &Module) -> Self {
        Self {
            builder: GraphBuilder::new(module.basename()),
        }
    }

    /// Record one file and the functions it declares.
    ///
    /// Identical edges coming from different files collapse.
    pub fn add_file(&mut self, file: &str, functions: &[String]) {
        let segments: Vec<&str> = file.split('/').collect();
        let last = segments.len().saturating_sub(1);
        let kind_at = |i: usize| {
            if i == last {
                NodeKind::File
            } else {
                NodeKind::Directory
            }
        };
        for (i, pair) in segments.windows(2).enumerate() {
            let parent = self.builder.add_node(pair[0], kind_at(i));
            let child = self.builder.add_node(pair[1], kind_at(i + 1));
            self.builder.add_edge(parent, child, EdgeKind::DirectoryContainment);
        }

        let basename = segments.get(last).copied().unwrap_or(file);
        let file_idx = self.builder.add_node(basename, NodeKind::File);
        for function in functions {
            let fn_idx = self.builder.add_node(function, NodeKind::Function);
            self.builder.add_edge(file_idx, fn_idx, EdgeKind::FunctionContainment);
        }
    }

    pub fn add_relation(&mut self, functions: &Relation) -> &mut Self {
        for (file, signatures) in functions {
            self.add_file(file, signatures);
        }
        self
    }

    pub fn finish(self) -> CodeGraph {
        self.builder.freeze()
    }
}
