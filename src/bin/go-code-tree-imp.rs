//! Import graph of a Go module, printed as DOT

use clap::Parser;
use codetree_core::ImportOptions;
use go_code_tree::{cli, commands};

#[derive(Parser)]
#[command(name = "go-code-tree-imp")]
#[command(about = "Graph the imports between files of a Go module", long_about = None)]
struct Cli {
    #[command(flatten)]
    scan: cli::ScanArgs,

    /// Show third-party imports
    #[arg(long)]
    third: bool,
}

fn main() {
    let cli = Cli::parse();
    cli::init_logging(cli.scan.verbose);

    let options = ImportOptions {
        show_third_party: cli.third,
    };
    match commands::import_graph(&cli.scan.dir, cli.scan.scan_options(), options) {
        Ok(graph) => println!("{graph}"),
        Err(e) => tracing::error!("{e:#}"),
    }
}
