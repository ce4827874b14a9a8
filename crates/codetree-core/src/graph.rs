//! Deduplicating graph builder and the frozen graph it produces.
//!
//! Nodes are identified by their text; edges by (source, target, kind).
//! Both keep insertion order, so identical input yields identical output.

use crate::model::{EdgeKind, GraphEdge, GraphNode, NodeKind};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, HashSet};

/// Mutable graph under construction.
///
/// Owned by one builder at a time and consumed by [`GraphBuilder::freeze`].
pub struct GraphBuilder {
    title: String,
    inner: DiGraph<GraphNode, EdgeKind>,
    by_name: HashMap<String, NodeIndex>,
    edges: HashSet<(NodeIndex, NodeIndex, EdgeKind)>,
}

impl GraphBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        GraphBuilder {
            title: title.into(),
            inner: DiGraph::new(),
            by_name: HashMap::new(),
            edges: HashSet::new(),
        }
    }

    /// Add a node, or return the existing one. The first kind recorded wins.
    pub fn add_node(&mut self, name: &str, kind: NodeKind) -> NodeIndex {
        if let Some(&idx) = self.by_name.get(name) {
            return idx;
        }
        let idx = self.inner.add_node(GraphNode {
            name: name.to_string(),
            kind,
        });
        self.by_name.insert(name.to_string(), idx);
        idx
    }

    /// Add an edge unless the same (source, target, kind) is already present.
    ///
    /// Returns `true` when the edge is new.
    pub fn add_edge(&mut self, source: NodeIndex, target: NodeIndex, kind: EdgeKind) -> bool {
        if !self.edges.insert((source, target, kind)) {
            return false;
        }
        self.inner.add_edge(source, target, kind);
        true
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn freeze(self) -> CodeGraph {
        tracing::debug!(
            "Froze graph {:?}: {} nodes, {} edges",
            self.title,
            self.inner.node_count(),
            self.inner.edge_count()
        );
        CodeGraph {
            title: self.title,
            inner: self.inner,
        }
    }
}

/// Immutable graph ready for serialization.
pub struct CodeGraph {
    title: String,
    inner: DiGraph<GraphNode, EdgeKind>,
}

impl std::fmt::Debug for CodeGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeGraph")
            .field("title", &self.title)
            .field("node_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .finish()
    }
}

impl CodeGraph {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.inner.node_indices().map(move |idx| &self.inner[idx])
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = GraphEdge> + '_ {
        self.inner.edge_references().map(move |edge| GraphEdge {
            source: self.inner[edge.source()].name.clone(),
            target: self.inner[edge.target()].name.clone(),
            kind: *edge.weight(),
        })
    }

    /// Find a node by its text.
    pub fn node(&self, name: &str) -> Option<&GraphNode> {
        self.nodes().find(|n| n.name == name)
    }

    /// Targets of all outgoing edges of `name`, in insertion order.
    pub fn targets_of(&self, name: &str) -> Vec<&str> {
        let mut targets: Vec<(usize, &str)> = self
            .inner
            .node_indices()
            .filter(|&idx| self.inner[idx].name == name)
            .flat_map(|idx| self.inner.edges(idx))
            .map(|edge| (edge.id().index(), self.inner[edge.target()].name.as_str()))
            .collect();
        // petgraph lists outgoing edges newest first.
        targets.sort_by_key(|(order, _)| *order);
        targets.into_iter().map(|(_, name)| name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_are_deduplicated_by_name() {
        let mut builder = GraphBuilder::new("repo");
        let a = builder.add_node("a", NodeKind::Directory);
        let again = builder.add_node("a", NodeKind::File);
        assert_eq!(a, again);
        assert_eq!(builder.node_count(), 1);

        let graph = builder.freeze();
        assert_eq!(graph.node("a").map(|n| n.kind), Some(NodeKind::Directory));
    }

    #[test]
    fn test_edges_are_deduplicated_per_kind() {
        let mut builder = GraphBuilder::new("repo");
        let a = builder.add_node("a", NodeKind::File);
        let b = builder.add_node("b", NodeKind::Package);

        assert!(builder.add_edge(a, b, EdgeKind::LocalImport));
        assert!(!builder.add_edge(a, b, EdgeKind::LocalImport));
        assert!(builder.add_edge(a, b, EdgeKind::ExternalImport));
        assert_eq!(builder.edge_count(), 2);
    }

    #[test]
    fn test_targets_keep_insertion_order() {
        let mut builder = GraphBuilder::new("repo");
        let file = builder.add_node("f.go", NodeKind::File);
        for name in ["z", "a", "m"] {
            let target = builder.add_node(name, NodeKind::Package);
            builder.add_edge(file, target, EdgeKind::LocalImport);
        }
        let graph = builder.freeze();
        assert_eq!(graph.targets_of("f.go"), vec!["z", "a", "m"]);
        assert!(graph.targets_of("missing").is_empty());
    }
}
