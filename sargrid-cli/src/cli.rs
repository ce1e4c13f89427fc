use std::path::PathBuf;

use clap::Parser;

/// Search a scored sea grid for the rescue route with the highest total
/// detection value.
#[derive(Parser, Debug)]
#[command(name = "sargrid", version, about)]
pub struct Cli {
    /// CSV file with one row of detection scores per line, top row first.
    pub input: PathBuf,

    /// Number of cells in the searched route.
    #[arg(
        short = 'l',
        long = "length",
        default_value_t = 8,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub length: u32,

    /// Print the best route from every starting cell instead of the single
    /// best route.
    #[arg(long)]
    pub all: bool,
}
