//! GridView: maps a `core::GridSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, left to right: row indices, the framed grid, the side panel. Column
//! indices sit on the line above the frame and the HUD message on the line below.

use crate::core::{Cell, GridSnapshot};
use crate::fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
use crate::types::Color;

/// Columns reserved left of the frame for row indices.
pub const ROW_LABEL_W: u16 = 3;
/// Lines reserved above the frame for column indices.
pub const COL_LABEL_H: u16 = 1;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Session state drawn on top of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudView<'a> {
    /// Highlighted cell as `(row, col)`
    pub cursor: (usize, usize),
    /// Status line shown under the grid
    pub message: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the crush grid.
pub struct GridView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GridView {
    fn default() -> Self {
        // 2x1 fits the two-letter special glyphs and evens out the glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Screen placement of one rendered frame.
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Top-left corner of the border
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GridView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the grid into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GridSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_hud(snap, None, viewport, fb);
    }

    pub fn render_into_with_hud(
        &self,
        snap: &GridSnapshot,
        hud: Option<&HudView<'_>>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let frame = self.place(snap, viewport);
        let border = GlyphStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w.saturating_sub(2),
            frame.h.saturating_sub(2),
            ' ',
            GlyphStyle::new(Rgb::new(80, 80, 90), BOARD_BG),
        );
        self.draw_border(fb, frame, border);
        self.draw_labels(fb, snap, frame);

        let cursor = hud.map(|h| h.cursor);
        for r in 0..snap.rows {
            for (c, cell) in snap.row(r).iter().enumerate() {
                let focused = cursor == Some((r, c));
                self.draw_cell(fb, frame, r as u16, c as u16, *cell, focused);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if let Some(hud) = hud {
            let style = GlyphStyle::new(Rgb::new(230, 230, 160), SCREEN_BG);
            fb.put_str(
                frame.x.saturating_sub(ROW_LABEL_W),
                frame.y.saturating_add(frame.h),
                hud.message,
                style,
            );
        }

        if snap.objective_reached() {
            self.draw_overlay_text(fb, frame, "GOAL REACHED");
        } else if !snap.has_any_move {
            self.draw_overlay_text(fb, frame, "NO MOVES");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GridSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_hud(
        &self,
        snap: &GridSnapshot,
        hud: Option<&HudView<'_>>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_hud(snap, hud, viewport, &mut fb);
        fb
    }

    fn place(&self, snap: &GridSnapshot, viewport: Viewport) -> Frame {
        let w = (snap.cols as u16).saturating_mul(self.cell_w).saturating_add(2);
        let h = (snap.rows as u16).saturating_mul(self.cell_h).saturating_add(2);
        let block_w = w.saturating_add(ROW_LABEL_W);
        let block_h = h.saturating_add(COL_LABEL_H);

        let left = viewport.width.saturating_sub(block_w) / 2;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(block_h) / 2,
            AnchorY::Top => 0,
        };
        Frame {
            x: left + ROW_LABEL_W,
            y: top + COL_LABEL_H,
            w,
            h,
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: GlyphStyle) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Row indices right-aligned left of the frame, column indices above it
    fn draw_labels(&self, fb: &mut FrameBuffer, snap: &GridSnapshot, frame: Frame) {
        let style = GlyphStyle::new(Rgb::new(150, 150, 160), SCREEN_BG).dim();

        for c in 0..snap.cols as u16 {
            let x = frame.x + 1 + c * self.cell_w;
            let pad = if c < 10 && self.cell_w > 1 { 1 } else { 0 };
            fb.put_u32(x + pad, frame.y - COL_LABEL_H, c as u32, style);
        }
        for r in 0..snap.rows as u16 {
            let y = frame.y + 1 + r * self.cell_h;
            let pad = if r < 10 { 1 } else { 0 };
            fb.put_u32(frame.x - ROW_LABEL_W + pad, y, r as u32, style);
        }
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, frame: Frame, row: u16, col: u16, cell: Cell, focused: bool) {
        let px = frame.x + 1 + col * self.cell_w;
        let py = frame.y + 1 + row * self.cell_h;

        let color = color_rgb(cell.color());
        let glyph = cell.special_kind().glyph().unwrap_or("");
        let last = self.cell_w - 1;

        for dy in 0..self.cell_h {
            for dx in 0..self.cell_w {
                let (ch, style) = if focused {
                    let style = GlyphStyle::new(Rgb::new(255, 255, 255), color).bold();
                    let ch = match (cell.is_special(), dx) {
                        (true, _) => glyph_char(glyph, dx),
                        (false, 0) => '[',
                        (false, d) if d == last => ']',
                        _ => ' ',
                    };
                    (ch, style)
                } else if cell.is_blank() {
                    ('·', GlyphStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim())
                } else if cell.is_special() {
                    (
                        glyph_char(glyph, dx),
                        GlyphStyle::new(Rgb::new(0, 0, 0), color).bold(),
                    )
                } else {
                    ('█', GlyphStyle::new(color, BOARD_BG))
                };
                fb.put_char(px + dx, py + dy, ch, style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GridSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = GlyphStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = GlyphStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let score = snap.score;

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, score.points, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "GOAL", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, score.objective, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MULT", label);
        y = y.saturating_add(1);
        let x = fb.put_str(panel_x, y, "x", value);
        fb.put_u32(x, y, score.multiplier, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STREAK", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, score.streak, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, if snap.has_any_move { "YES" } else { "NONE" }, value);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = GlyphStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn glyph_char(glyph: &str, dx: u16) -> char {
    let bytes = glyph.as_bytes();
    if bytes.is_empty() {
        return ' ';
    }
    bytes[dx as usize % bytes.len()] as char
}

/// Terminal color for a palette entry
pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Black => BOARD_BG,
        Color::Red => Rgb::new(220, 80, 80),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Purple => Rgb::new(200, 120, 220),
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::White => Rgb::new(235, 235, 235),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_char_cycles_over_wide_cells() {
        assert_eq!(glyph_char("RC", 0), 'R');
        assert_eq!(glyph_char("RC", 1), 'C');
        assert_eq!(glyph_char("RC", 2), 'R');
        assert_eq!(glyph_char("", 0), ' ');
    }

    #[test]
    fn blank_maps_to_board_background() {
        assert_eq!(color_rgb(Color::Black), BOARD_BG);
        assert_ne!(color_rgb(Color::Red), color_rgb(Color::Purple));
    }
}
