//! Shared command-line arguments and logging setup

use clap::Args;
use codetree_indexer::ScanOptions;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Directory of the Go project to scan
    #[arg(long, default_value = "./")]
    pub dir: PathBuf,

    /// Scan mock files
    #[arg(long)]
    pub mocks: bool,

    /// Scan test files
    #[arg(long)]
    pub tests: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl ScanArgs {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            include_mocks: self.mocks,
            include_tests: self.tests,
        }
    }
}

/// Log to stderr; stdout carries the graph.
///
/// `RUST_LOG` takes precedence over `--verbose`.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "go_code_tree={level},codetree_core={level},codetree_indexer={level}"
        ))
    });
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
