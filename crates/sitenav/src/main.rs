//! sitenav CLI - navigation and sidebar inspection for documentation sites.
//!
//! Provides commands for:
//! - `check`: Validate menus (duplicates, dead links, locale consistency)
//! - `sidebar`: Print the sidebar resolved for a page path
//! - `nav`: Print a locale's top-bar navigation
//! - `links`: List every link of a locale
//! - `pager`: Print previous/next pages around a page path

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, LinksArgs, NavArgs, PagerArgs, SidebarArgs};
use output::Output;

/// sitenav - navigation and sidebar inspection for documentation sites.
#[derive(Parser)]
#[command(name = "sitenav", version, about)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate menus of every locale.
    Check(CheckArgs),
    /// Print the sidebar for a page path as JSON.
    Sidebar(SidebarArgs),
    /// Print the top-bar navigation as JSON.
    Nav(NavArgs),
    /// List every link of a locale, depth-first.
    Links(LinksArgs),
    /// Print previous and next pages for a page path as JSON.
    Pager(PagerArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG (ERROR when unset)
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
        Commands::Nav(args) => args.execute(),
        Commands::Links(args) => args.execute(),
        Commands::Pager(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
