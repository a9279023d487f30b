//! Text map loader.
//!
//! A map file is a rectangle of whitespace-separated cell codes, one row per
//! line (blank lines ignored): `0` for floor, `1..=255` for a wall with
//! material `code - 1`.  Everything is validated up front — rendering never
//! sees a malformed grid.

use std::{fs, io, path::Path};

use thiserror::Error;

use crate::world::Grid;

/// Smallest playable map: one open cell inside a wall ring.
const MIN_SIDE: usize = 3;

/// Errors that can be encountered while reading a map file.
#[derive(Error, Debug)]
pub enum MapError {
    /// Underlying I/O failure – propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A token that does not parse as a cell code.
    #[error("line {line}: `{token}` is not a cell code")]
    BadCell { line: usize, token: String },

    /// A row whose width differs from the first row's.
    #[error("line {line}: row has {found} cells, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// No rows at all.
    #[error("map contains no rows")]
    Empty,

    /// Too small to enclose a single open cell.
    #[error("map must be at least {MIN_SIDE}x{MIN_SIDE} cells")]
    TooSmall,

    /// The enclosure precondition the grid stepper relies on.
    #[error("map border must be solid wall")]
    OpenBorder,
}

/// Parse a map from its textual form.
pub fn parse_map(text: &str) -> Result<Grid, MapError> {
    let mut width = 0usize;
    let mut height = 0usize;
    let mut cells: Vec<u8> = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let start = cells.len();
        for token in line.split_whitespace() {
            let cell = token.parse::<u8>().map_err(|_| MapError::BadCell {
                line: idx + 1,
                token: token.to_string(),
            })?;
            cells.push(cell);
        }
        let found = cells.len() - start;
        if height == 0 {
            width = found;
        } else if found != width {
            return Err(MapError::RaggedRow {
                line: idx + 1,
                expected: width,
                found,
            });
        }
        height += 1;
    }

    if height == 0 {
        return Err(MapError::Empty);
    }
    if width < MIN_SIDE || height < MIN_SIDE {
        return Err(MapError::TooSmall);
    }

    let grid = Grid::new(width, height, cells);
    if !grid.is_enclosed() {
        return Err(MapError::OpenBorder);
    }
    Ok(grid)
}

/// Load and validate a map file.
pub fn load_map<P: AsRef<Path>>(path: P) -> Result<Grid, MapError> {
    parse_map(&fs::read_to_string(path)?)
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
