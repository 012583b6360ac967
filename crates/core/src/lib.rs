//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds every rule of the crush puzzle: the grid, run detection,
//! special blocks and their chained detonations, gravity, refill and scoring.
//! It has no dependency on a terminal or any other I/O; renderers read a
//! [`GridSnapshot`] and front-ends call [`Grid::shoot`].
//!
//! # Module Structure
//!
//! - [`cell`]: a color plus a special-kind tag
//! - [`grid`]: the board, shot resolution, compaction and refill
//! - [`rng`]: injected random sources (seeded LCG and scripted sequences)
//! - [`score`]: points, objective, multiplier and hit streak
//! - [`snapshot`]: owned copy of a grid for renderers
//! - [`error`]: construction and shot errors
//!
//! # Game Rules
//!
//! - Shooting a plain cell clears its horizontal and vertical same-color runs.
//!   A lone cell cannot be shot.
//! - A run of 4 or more leaves a special block of the shot color where the shot
//!   landed: **Row**, **Column**, **RowAndColumn** (both runs long) or
//!   **AllBoard** (a full row and a full column at once).
//! - Shooting a special clears its row, column, both, or the whole board.
//!   Specials swept on the way detonate too.
//! - Every cleared colored cell earns `10 x multiplier`. Every 5th consecutive
//!   hit adds 1 to the multiplier, every 15th adds 3 more. A miss costs 10
//!   points and resets the streak and multiplier.
//!
//! # Example
//!
//! ```
//! use tui_crush_core::{Grid, SequenceSource};
//! use tui_crush_types::Color;
//!
//! let mut grid = Grid::from_layout(
//!     &["RRRRR", "BBRRR", "BBBBB", "GGBBB", "BBGGG"],
//!     4,
//!     SequenceSource::of_colors(&[Color::Yellow]),
//! )
//! .unwrap();
//!
//! let report = grid.shoot(0, 0).unwrap();
//! assert_eq!(report.cleared, 5);
//! assert_eq!(grid.score().points(), 50);
//! assert!(grid.get(0, 0).unwrap().is_special());
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod rng;
pub mod score;
pub mod snapshot;

pub use tui_crush_types as types;

// Re-export commonly used types for convenience
pub use cell::Cell;
pub use error::{ConfigViolation, GridError, ShootError};
pub use grid::{Extents, Grid, ShotReport};
pub use rng::{random_color, RandomSource, SequenceSource, SimpleRng};
pub use score::{Score, ScoreState};
pub use snapshot::GridSnapshot;
