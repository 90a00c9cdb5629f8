//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It draws a
//! [`GameSnapshot`](lane_dodge_core::GameSnapshot) into a plain framebuffer and
//! flushes only the changed runs to the terminal. Nothing here mutates game
//! state, and nothing here can fail in a way the simulation would notice:
//! missing sprites fall back to solid blocks.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sprite;

pub use lane_dodge_core as core;
pub use lane_dodge_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sprite::{Sprite, SpriteSet};
