//! Cell module - the smallest addressable unit of the grid
//!
//! A cell is a color plus a special-kind tag. Cells are plain values: the grid
//! replaces and swaps them in place and never hands out references for mutation.

use crate::types::{Color, SpecialKind};

/// A single grid cell
///
/// Blank cells (color `Black`) never carry a special kind; every constructor and
/// [`Cell::clear`] keep that invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    color: Color,
    special: SpecialKind,
}

impl Cell {
    /// The empty cell
    pub const BLANK: Cell = Cell {
        color: Color::Black,
        special: SpecialKind::None,
    };

    /// Plain cell of the given color
    pub fn new(color: Color) -> Self {
        Self {
            color,
            special: SpecialKind::None,
        }
    }

    /// Special cell of the given color
    ///
    /// A black special collapses to a blank cell.
    pub fn special(color: Color, special: SpecialKind) -> Self {
        if color.is_blank() {
            return Self::BLANK;
        }
        Self { color, special }
    }

    /// Plain cell from a layout letter (`E R G Y B P C W`, anything else is blank)
    pub fn from_letter(ch: char) -> Self {
        Self::new(Color::from_letter(ch))
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn special_kind(&self) -> SpecialKind {
        self.special
    }

    pub fn letter(&self) -> char {
        self.color.letter()
    }

    pub fn is_blank(&self) -> bool {
        self.color.is_blank()
    }

    pub fn is_special(&self) -> bool {
        self.special.is_special()
    }

    /// Run-walking equality: same color and same "is special at all" status.
    ///
    /// A plain cell never extends a run into a special cell of the same hue.
    pub fn color_equals(&self, other: &Cell) -> bool {
        self.color == other.color && self.is_special() == other.is_special()
    }

    /// Reset to the blank cell
    pub fn clear(&mut self) {
        *self = Self::BLANK;
    }

    /// Drop the special charge, keeping the color
    pub(crate) fn disarm(&mut self) {
        self.special = SpecialKind::None;
    }
}
