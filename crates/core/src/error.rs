//! Error types for grid construction and shots.

use thiserror::Error;

/// Why a shot was rejected
///
/// Both variants are caller-recoverable: the grid is left untouched and the score
/// absorbs a fixed penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShootError {
    #[error("spot ({row}, {col}) is outside the board; the board is {rows} x {cols}")]
    OutOfBounds {
        row: i32,
        col: i32,
        rows: usize,
        cols: usize,
    },

    #[error("cell ({row}, {col}) has no surrounding cells of the same color")]
    NoMatch { row: usize, col: usize },
}

/// A single violated construction constraint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigViolation {
    #[error("board size {rows} x {cols} is not playable; each side must be between {min} and {max}")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        min: usize,
        max: usize,
    },

    #[error("{count} colors is not playable; the number of colors must be between {min} and {max}")]
    InvalidColorCount { count: u8, min: u8, max: u8 },

    #[error("layout has no cells")]
    EmptyLayout,

    #[error("layout row {row} has {found} cells, expected {expected}")]
    RaggedLayout {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("expected {expected} cells for the board, got {found}")]
    CellCountMismatch { expected: usize, found: usize },
}

/// Grid construction failure carrying every violated constraint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid grid configuration: {}", join_violations(.violations))]
pub struct GridError {
    violations: Vec<ConfigViolation>,
}

impl GridError {
    /// `Ok(())` when nothing was violated, otherwise one error holding all of them
    pub(crate) fn check(violations: Vec<ConfigViolation>) -> Result<(), GridError> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(GridError { violations })
        }
    }

    pub fn violations(&self) -> &[ConfigViolation] {
        &self.violations
    }
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
