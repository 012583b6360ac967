//! TUI Crush (workspace facade crate).
//!
//! The rules live in dedicated crates under `crates/`; this package re-exports
//! them as `tui_crush::{core,input,term,types}` and adds the pieces shared by the
//! binary and the integration tests: option parsing ([`config`]) and the
//! interactive game session ([`session`]).

pub use tui_crush_core as core;
pub use tui_crush_input as input;
pub use tui_crush_term as term;
pub use tui_crush_types as types;

pub mod config;
pub mod session;
