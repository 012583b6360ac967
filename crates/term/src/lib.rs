//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for the crush grid. It avoids widget
//! toolkits and instead renders into a framebuffer that is flushed to the
//! terminal through `crossterm`.
//!
//! - [`GridView`] draws a [`core::GridSnapshot`](crate::core::GridSnapshot)
//!   into a [`FrameBuffer`] (pure, testable)
//! - [`TerminalRenderer`] flushes full or diffed frames
//! - [`render_text`] prints a grid line by line for non-interactive play

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod text;

pub use tui_crush_core as core;
pub use tui_crush_types as types;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use game_view::{color_rgb, AnchorY, GridView, HudView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use text::render_text;
