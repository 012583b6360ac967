//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::PlayerAction`]. The game is
//! turn based, so there is no repeat handling: one key press is one action.

pub mod map;

pub use tui_crush_types as types;

pub use map::{handle_key_event, should_quit};
