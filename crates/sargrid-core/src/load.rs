//! CSV loader for [`SeaGrid`].
//!
//! The input is a plain text stream of comma-separated integer rows, top
//! row first. Blank lines are skipped, tokens are trimmed before parsing.
//! No header, no quoting, no floating point.

use std::io::BufRead;
use std::num::ParseIntError;

use log::debug;
use thiserror::Error;

use crate::grid::{GridError, SeaGrid};

/// Error raised while reading a grid from a text stream.
///
/// Any load failure aborts the run; none of these are recovered.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read grid input")]
    Io(#[from] std::io::Error),
    /// A token that does not parse as an integer.
    #[error("bad value {token:?} on line {line}")]
    BadToken {
        line: usize,
        token: String,
        source: ParseIntError,
    },
    #[error(transparent)]
    Grid(#[from] GridError),
}

impl SeaGrid {
    /// Read a grid from a comma-separated text stream.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut rows = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let row = line
                .split(',')
                .map(|tok| {
                    let tok = tok.trim();
                    tok.parse::<i32>().map_err(|source| LoadError::BadToken {
                        line: i + 1,
                        token: tok.to_owned(),
                        source,
                    })
                })
                .collect::<Result<Vec<i32>, _>>()?;
            rows.push(row);
        }
        let grid = SeaGrid::from_rows(rows)?;
        debug!("loaded {0}x{0} sea grid", grid.side());
        Ok(grid)
    }
}
