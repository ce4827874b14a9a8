//! Function containment graph of a Go module, printed as DOT

use clap::Parser;
use go_code_tree::{cli, commands};

#[derive(Parser)]
#[command(name = "go-code-tree-fn")]
#[command(about = "Graph directories, files and the functions they declare", long_about = None)]
struct Cli {
    #[command(flatten)]
    scan: cli::ScanArgs,
}

fn main() {
    let cli = Cli::parse();
    cli::init_logging(cli.scan.verbose);

    match commands::function_graph(&cli.scan.dir, cli.scan.scan_options()) {
        Ok(graph) => println!("{graph}"),
        Err(e) => tracing::error!("{e:#}"),
    }
}
