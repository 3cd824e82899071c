//! nsbk - Netscape bookmark export to JSON converter

use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use nsbk_parser::BookmarkItem;

const NO_INPUT_HELP: &str = "no input file provided and no data on stdin
usage: nsbk -f <filepath>
   or: cat bookmarks.html | nsbk";

/// Convert a Netscape bookmark export to hierarchical JSON
#[derive(Parser)]
#[command(name = "nsbk", version, about)]
struct Args {
    /// Bookmark HTML file to convert (defaults to stdin)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let args = Args::parse();
    let items = read_bookmarks(&args)?;

    let json = if args.compact {
        serde_json::to_string(&items)
    } else {
        serde_json::to_string_pretty(&items)
    }
    .context("serializing bookmarks to JSON")?;

    println!("{json}");
    Ok(())
}

fn read_bookmarks(args: &Args) -> anyhow::Result<Vec<BookmarkItem>> {
    match &args.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening file {}", path.display()))?;
            nsbk_parser::parse_from_reader(file)
                .with_context(|| format!("parsing bookmarks from {}", path.display()))
        }
        None => {
            // Reading from an interactive terminal would just hang.
            if io::stdin().is_terminal() {
                anyhow::bail!(NO_INPUT_HELP);
            }
            nsbk_parser::parse_from_reader(io::stdin().lock())
                .context("parsing bookmarks from stdin")
        }
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}
