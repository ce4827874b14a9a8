//! End-to-end pipelines behind the two binaries

use anyhow::Context;
use codetree_core::{FunctionGraphBuilder, ImportGraphBuilder, ImportOptions, StyleTable, render};
use codetree_indexer::{Coordinator, ScanOptions, read_module};
use std::path::Path;

/// Scan `dir` and render the file-level import graph.
pub fn import_graph(dir: &Path, scan: ScanOptions, options: ImportOptions) -> anyhow::Result<String> {
    tracing::info!("Scanning imports under {}", dir.display());
    let module = read_module(dir).context("Error reading module name")?;

    let mut coordinator = Coordinator::new(dir, scan)?;
    let imports = coordinator
        .collect_imports()
        .context("Error getting imports")?;

    let graph = ImportGraphBuilder::new(&module, options).build(&imports);
    tracing::info!(
        "Import graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(render(&graph, &StyleTable::IMPORTS))
}

/// Scan `dir` and render the directory → file → function graph.
pub fn function_graph(dir: &Path, scan: ScanOptions) -> anyhow::Result<String> {
    tracing::info!("Scanning functions under {}", dir.display());
    let module = read_module(dir).context("Error reading module name")?;

    let mut coordinator = Coordinator::new(dir, scan)?;
    let functions = coordinator
        .collect_functions()
        .context("Error getting funcs")?;

    let mut builder = FunctionGraphBuilder::new(&module);
    builder.add_relation(&functions);
    let graph = builder.finish();
    tracing::info!(
        "Function graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(render(&graph, &StyleTable::FUNCTIONS))
}
