//! Line-oriented rendering of a grid for plain terminals and logs.
//!
//! Each cell is two characters wide with the cell color as background; special
//! blocks print their two-letter glyph on top. Row indices run down the left side
//! and column indices across the top.

use std::fmt::Write as _;

use crossterm::style::{Color as TermColor, Stylize};

use crate::core::{Cell, GridSnapshot};
use crate::types::Color;

/// Render a snapshot as a colorized, multi-line string
///
/// Layout:
///
/// ```text
/// Score = 0  Objective = 80  Multiplier = x1  Current streak = 0
///                          1 1 1 ...
///      0 1 2 3 4 5 6 7 8 9 0 1 2 ...
///  0 |<cells>|
///  1 |<cells>|
/// ```
pub fn render_text(snap: &GridSnapshot) -> String {
    let mut out = String::with_capacity(snap.rows * (snap.cols * 24 + 8) + 128);

    let _ = writeln!(out, "{}", snap.score);

    // Cells are two characters wide, so wide boards get a separate tens line.
    if snap.cols > 10 {
        out.push_str("    ");
        for c in 0..snap.cols {
            match c / 10 {
                0 => out.push_str("  "),
                tens => {
                    let _ = write!(out, "{:>2}", tens);
                }
            }
        }
        out.push('\n');
    }
    out.push_str("    ");
    for c in 0..snap.cols {
        let _ = write!(out, "{:>2}", c % 10);
    }
    out.push('\n');

    for r in 0..snap.rows {
        let _ = write!(out, "{:>2} |", r);
        for cell in snap.row(r) {
            push_cell(&mut out, *cell);
        }
        out.push_str("|\n");
    }

    if snap.objective_reached() {
        out.push_str("Objective reached!\n");
    } else if !snap.has_any_move {
        out.push_str("No moves left. Keep shooting or restart.\n");
    }
    out
}

fn push_cell(out: &mut String, cell: Cell) {
    let bg = term_color(cell.color());
    let _ = match cell.special_kind().glyph() {
        Some(glyph) if !cell.is_blank() => write!(out, "{}", glyph.with(TermColor::Black).on(bg).bold()),
        _ => write!(out, "{}", "  ".on(bg)),
    };
}

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Purple => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::White => TermColor::Grey,
    }
}
