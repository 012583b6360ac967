//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, so they can be used
//! from the grid engine, the terminal view and the input mapping alike.
//!
//! # Grid Bounds
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_DIMENSION` | 3 | Smallest side of a random grid |
//! | `MAX_DIMENSION` | 35 | Largest side of a random grid |
//! | `MIN_COLORS` | 2 | Fewest playable colors |
//! | `MAX_COLORS` | 7 | Most playable colors |
//! | `MIN_RUN_FOR_SPECIAL` | 4 | Run length that earns a special block |
//!
//! # Scoring Constants
//!
//! - `ADDITION_UNIT`: 10 points per cleared cell (times the multiplier)
//! - Every 5th consecutive successful shot raises the multiplier by 1
//! - Every 15th raises it by a further 3
//!
//! # Examples
//!
//! ```
//! use tui_crush_types::{Color, SpecialKind};
//!
//! assert_eq!(Color::from_letter('R'), Color::Red);
//! assert_eq!(Color::from_letter('?'), Color::Black);
//! assert_eq!(Color::from_index(4), Color::Blue);
//! assert!(Color::Black.is_blank());
//!
//! assert!(SpecialKind::Row.is_special());
//! assert_eq!(SpecialKind::RowAndColumn.glyph(), Some("RC"));
//! ```

/// Smallest side length accepted for a randomly generated grid
pub const MIN_DIMENSION: usize = 3;

/// Largest side length accepted for a randomly generated grid
pub const MAX_DIMENSION: usize = 35;

/// Fewest playable colors a grid may use
pub const MIN_COLORS: u8 = 2;

/// Most playable colors a grid may use
pub const MAX_COLORS: u8 = 7;

/// Minimum run length (in either axis) that spawns a special block
pub const MIN_RUN_FOR_SPECIAL: usize = 4;

/// Points awarded per cleared cell before the multiplier
pub const ADDITION_UNIT: u32 = 10;

/// Every `STREAK_STEP` consecutive hits the multiplier grows by `STREAK_STEP_BONUS`
pub const STREAK_STEP: u32 = 5;

/// Multiplier bonus granted at every `STREAK_STEP` hits
pub const STREAK_STEP_BONUS: u32 = 1;

/// Every `STREAK_MILESTONE` consecutive hits the multiplier grows by `STREAK_MILESTONE_BONUS`
pub const STREAK_MILESTONE: u32 = 15;

/// Multiplier bonus granted at every `STREAK_MILESTONE` hits (on top of the step bonus)
pub const STREAK_MILESTONE_BONUS: u32 = 3;

/// Objective used when none is configured
pub const DEFAULT_OBJECTIVE: u32 = 500;


/// The closed color palette
///
/// `Black` is the reserved empty marker and is never a playable match color.
/// The seven playable colors are indexed `1..=7` in declaration order and use the
/// letter codes `R G Y B P C W` (`E` for black/empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Color {
    #[default]
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
}

impl Color {
    /// Playable colors in index order (index 1 first)
    pub const PLAYABLE: [Color; 7] = [
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Purple,
        Color::Cyan,
        Color::White,
    ];

    /// Map a layout letter to a color
    ///
    /// Letters are upper-case. Anything unrecognized is black.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_crush_types::Color;
    ///
    /// assert_eq!(Color::from_letter('W'), Color::White);
    /// assert_eq!(Color::from_letter('E'), Color::Black);
    /// assert_eq!(Color::from_letter('Z'), Color::Black);
    /// ```
    pub fn from_letter(ch: char) -> Self {
        match ch {
            'R' => Color::Red,
            'G' => Color::Green,
            'Y' => Color::Yellow,
            'B' => Color::Blue,
            'P' => Color::Purple,
            'C' => Color::Cyan,
            'W' => Color::White,
            _ => Color::Black,
        }
    }

    /// Map a palette index to a color (0 and anything above 7 are black)
    pub fn from_index(index: u8) -> Self {
        match index {
            1..=7 => Self::PLAYABLE[(index - 1) as usize],
            _ => Color::Black,
        }
    }

    /// Palette index (black is 0)
    pub fn index(&self) -> u8 {
        match self {
            Color::Black => 0,
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
            Color::Purple => 5,
            Color::Cyan => 6,
            Color::White => 7,
        }
    }

    /// Layout letter
    pub fn letter(&self) -> char {
        match self {
            Color::Black => 'E',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::Blue => 'B',
            Color::Purple => 'P',
            Color::Cyan => 'C',
            Color::White => 'W',
        }
    }

    /// Whether this is the reserved empty marker
    pub fn is_blank(&self) -> bool {
        matches!(self, Color::Black)
    }
}

/// Detonation pattern carried by a special block
///
/// - **None**: plain cell, cleared as part of a same-color run
/// - **Row**: clears its whole row
/// - **Column**: clears its whole column
/// - **RowAndColumn**: clears its row, then its column
/// - **AllBoard**: clears every cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpecialKind {
    #[default]
    None,
    Row,
    Column,
    RowAndColumn,
    AllBoard,
}

impl SpecialKind {
    pub fn is_special(&self) -> bool {
        !matches!(self, SpecialKind::None)
    }

    /// Two-character marker drawn on top of the cell color
    pub fn glyph(&self) -> Option<&'static str> {
        match self {
            SpecialKind::None => None,
            SpecialKind::Row => Some("RR"),
            SpecialKind::Column => Some("CC"),
            SpecialKind::RowAndColumn => Some("RC"),
            SpecialKind::AllBoard => Some("AA"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialKind::None => "none",
            SpecialKind::Row => "row",
            SpecialKind::Column => "column",
            SpecialKind::RowAndColumn => "row+column",
            SpecialKind::AllBoard => "all-board",
        }
    }
}

/// Player actions understood by the game session
///
/// Produced by the key mapping and consumed by the session driving the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Move the cursor one row up
    MoveUp,
    /// Move the cursor one row down
    MoveDown,
    /// Move the cursor one column left
    MoveLeft,
    /// Move the cursor one column right
    MoveRight,
    /// Shoot the cell under the cursor
    Shoot,
    /// Start a new game with the same configuration
    Restart,
}
