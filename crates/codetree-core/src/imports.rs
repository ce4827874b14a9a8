//! Import relation builder: raw per-file imports → classified file graph

use crate::graph::{CodeGraph, GraphBuilder};
use crate::model::{EdgeKind, ImportPath, Module, NodeKind, Relation};

/// Options for the import graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOptions {
    /// Also draw edges to imports outside the module.
    pub show_third_party: bool,
}

/// Imports of one file after classification, duplicates removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileImports {
    /// Rewritten repo-relative paths, first-seen order.
    pub local: Vec<String>,
    /// External paths, first-seen order.
    pub external: Vec<String>,
}

impl FileImports {
    /// Classify and deduplicate a raw import list.
    pub fn classify(module: &Module, imports: &[String]) -> Self {
        let mut classified = FileImports::default();
        for import in imports {
            let (bucket, path) = match module.classify(import) {
                ImportPath::Local(path) => (&mut classified.local, path),
                ImportPath::External(path) => (&mut classified.external, path),
            };
            if !bucket.contains(&path) {
                bucket.push(path);
            }
        }
        classified
    }

    /// Targets drawn for this file: locals, then externals when enabled.
    pub fn targets(&self, show_third_party: bool) -> impl Iterator<Item = &str> {
        let external: &[String] = if show_third_party { &self.external } else { &[] };
        self.local.iter().chain(external).map(String::as_str)
    }
}

/// Builds the file-level import graph for one module.
pub struct ImportGraphBuilder<'a> {
    module: &'a Module,
    options: ImportOptions,
}

impl<'a> ImportGraphBuilder<'a> {
    pub fn new(module: &'a Module, options: ImportOptions) -> Self {
        Self { module, options }
    }

    /// Classified relation: file → visible targets, duplicates collapsed.
    pub fn relation(&self, imports: &Relation) -> Relation {
        imports
            .iter()
            .map(|(file, raw)| {
                let classified = FileImports::classify(self.module, raw);
                let targets = classified
                    .targets(self.options.show_third_party)
                    .map(str::to_string)
                    .collect();
                (file.clone(), targets)
            })
            .collect()
    }

    /// Graph with every file, its directory, and its import edges.
    ///
    /// Directory membership for all files comes first, then the imports,
    /// files in sorted order in both passes.
    pub fn build(&self, imports: &Relation) -> CodeGraph {
        let mut builder = GraphBuilder::new(self.module.basename());

        for file in imports.keys() {
            let file_idx = builder.add_node(file, NodeKind::File);
            let dir_idx = builder.add_node(parent_dir(file), NodeKind::Directory);
            builder.add_edge(file_idx, dir_idx, EdgeKind::FileContainment);
        }

        for (file, raw) in imports {
            let classified = FileImports::classify(self.module, raw);
            let file_idx = builder.add_node(file, NodeKind::File);

            for local in &classified.local {
                let target = builder.add_node(local, NodeKind::Package);
                builder.add_edge(file_idx, target, EdgeKind::LocalImport);
            }
            if self.options.show_third_party {
                for external in &classified.external {
                    let target = builder.add_node(external, NodeKind::Package);
                    builder.add_edge(file_idx, target, EdgeKind::ExternalImport);
                }
            }
            tracing::debug!(
                "{}: {} local, {} external imports",
                file,
                classified.local.len(),
                classified.external.len()
            );
        }

        builder.freeze()
    }
}

/// Directory part of a `/`-separated path; `.` for top-level files.
fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(pos) => &path[..pos],
        None => ".",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module() -> Module {
        Module::new("github.com/org/repo")
    }

    fn relation(entries: Vec<(&str, Vec<&str>)>) -> Relation {
        entries
            .into_iter()
            .map(|(file, imports)| {
                (file.to_string(), imports.iter().map(|s| s.to_string()).collect())
            })
            .collect()
    }

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir("pkg/x/a.go"), "pkg/x");
        assert_eq!(parent_dir("main.go"), ".");
        assert_eq!(parent_dir("/a.go"), "/");
    }

    #[test]
    fn test_classify_deduplicates_and_splits() {
        let raw: Vec<String> = [
            "fmt",
            "github.com/org/repo/pkg/y",
            "github.com/org/repo/pkg/y",
            "github.com/other/lib",
            "fmt",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let classified = FileImports::classify(&module(), &raw);
        assert_eq!(classified.local, vec!["repo/pkg/y"]);
        assert_eq!(classified.external, vec!["fmt", "github.com/other/lib"]);
    }

    #[test]
    fn test_relation_hides_third_party_by_default() {
        let imports = relation(vec![("pkg/x/a.go", vec!["fmt", "github.com/org/repo/pkg/y"])]);

        let hidden = ImportGraphBuilder::new(&module(), ImportOptions::default()).relation(&imports);
        assert_eq!(hidden["pkg/x/a.go"], vec!["repo/pkg/y"]);

        let shown = ImportGraphBuilder::new(&module(), ImportOptions { show_third_party: true })
            .relation(&imports);
        assert_eq!(shown["pkg/x/a.go"], vec!["repo/pkg/y", "fmt"]);
    }

    #[test]
    fn test_build_links_files_to_directories_and_imports() {
        let imports = relation(vec![
            ("pkg/x/a.go", vec!["github.com/org/repo/pkg/y", "os"]),
            ("main.go", vec!["github.com/org/repo/pkg/x"]),
        ]);
        let graph = ImportGraphBuilder::new(&module(), ImportOptions::default()).build(&imports);

        assert_eq!(graph.title(), "repo");
        assert_eq!(graph.targets_of("pkg/x/a.go"), vec!["pkg/x", "repo/pkg/y"]);
        assert_eq!(graph.targets_of("main.go"), vec![".", "repo/pkg/x"]);
        assert!(graph.node("os").is_none());
        assert_eq!(graph.node("pkg/x").map(|n| n.kind), Some(NodeKind::Directory));
    }

    #[test]
    fn test_build_marks_external_edges() {
        let imports = relation(vec![("a.go", vec!["os"])]);
        let graph = ImportGraphBuilder::new(&module(), ImportOptions { show_third_party: true })
            .build(&imports);

        let kinds: Vec<EdgeKind> = graph.edges().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EdgeKind::FileContainment, EdgeKind::ExternalImport]);
    }
}
