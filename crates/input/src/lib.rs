//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Only key
//! presses produce commands: one physical key press is one command, with no
//! repeat-on-hold.

pub mod map;

pub use lane_dodge_types as types;

pub use map::{action_for_event, handle_key_event, should_quit};
