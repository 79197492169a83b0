use thiserror::Error;
use tracing::warn;

use crate::Coordinate;

/// 2x2 still life
pub const BLOCK: &[Coordinate] = &[(0, 0), (1, 0), (0, 1), (1, 1)];

/// Period-2 oscillator, horizontal phase
pub const BLINKER: &[Coordinate] = &[(0, 0), (1, 0), (2, 0)];

/// Translates itself by (1, 1) every 4 generations
pub const GLIDER: &[Coordinate] = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PatternError {
    #[error("Unexpected character '{got}' at line {line}, column {col}")]
    UnexpectedChar { got: char, line: usize, col: usize },
}

/// Parse the plaintext pattern format: one row of cells per line, `.` for a
/// dead cell, `O` for an alive one. Lines starting with `!` are comments.
/// Rows may differ in length; missing trailing cells are dead.
///
/// Returns the alive coordinates, relative to the top-left of the pattern.
///
/// See: https://conwaylife.com/wiki/Plaintext
pub fn parse(bytes: &[u8]) -> Result<Vec<Coordinate>, PatternError> {
    let mut alive = Vec::new();

    // 1-based, counting comment lines too, so errors point at the file
    let mut line = 0;

    let mut y = 0;

    for row in bytes.split(|&b| b == b'\n') {
        line += 1;

        // Tolerate CRLF input
        let row = row.strip_suffix(b"\r").unwrap_or(row);

        if let [b'!', ..] = row {
            continue;
        }

        for (col, &b) in row.iter().enumerate() {
            match b {
                b'.' => {}
                b'O' => alive.push((col, y)),
                b => {
                    return Err(PatternError::UnexpectedChar {
                        got: b as char,
                        line,
                        col: col + 1,
                    });
                }
            }
        }

        y += 1;
    }

    if alive.is_empty() {
        warn!("pattern contains no alive cells");
    }

    Ok(alive)
}

/// Translate a pattern by `(dx, dy)`, for placing it away from the field
/// edge.
pub fn offset(cells: &[Coordinate], dx: usize, dy: usize) -> Vec<Coordinate> {
    cells.iter().map(|&(x, y)| (x + dx, y + dy)).collect()
}
