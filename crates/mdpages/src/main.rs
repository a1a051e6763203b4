//! mdpages CLI - builds a static download page from a project README.
//!
//! One-shot batch build: converts the README to HTML, wraps it in a page
//! template and bundles pre-built binaries into the output directory.

mod build;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use build::BuildArgs;
use output::Output;

/// mdpages - README static site builder.
#[derive(Parser)]
#[command(name = "mdpages", version, about)]
struct Cli {
    #[command(flatten)]
    build: BuildArgs,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.build.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = cli.build.execute() {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
