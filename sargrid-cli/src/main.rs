//! `sargrid` — find the best rescue route over a scored sea grid.
//!
//! Reads a CSV grid of detection scores, searches every starting cell for
//! the self-avoiding route of the requested length with the highest total
//! score, and prints the result.

mod cli;
mod format;

use std::fs::File;
use std::io::BufReader;

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use sargrid_core::SeaGrid;
use sargrid_search::{best_path, best_paths_per_start};

use cli::Cli;
use format::{format_cell, format_path};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        ) // This uses RUST_LOG environment variable
        .init();

    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            // Usage problems exit 1 rather than clap's default 2.
            let _ = err.print();
            std::process::exit(1);
        }
    };

    let file = File::open(&args.input)
        .with_context(|| format!("cannot open {}", args.input.display()))?;
    let grid = SeaGrid::from_reader(BufReader::new(file))
        .with_context(|| format!("cannot load grid from {}", args.input.display()))?;

    let length = args.length as usize;
    if args.all {
        for (start, route) in best_paths_per_start(&grid, length) {
            match route {
                Some(route) => println!("{}", format_path(&grid, &route)),
                None => println!(
                    "no route of length {length} from {}",
                    format_cell(&grid, start)
                ),
            }
        }
    } else {
        let best =
            best_path(&grid, length).context("no route of the requested length exists")?;
        println!("{}", format_path(&grid, &best));
    }
    Ok(())
}
