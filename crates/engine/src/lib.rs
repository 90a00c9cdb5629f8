//! Engine module - drives a [`GameState`](lane_dodge_core::GameState) in time.
//!
//! The core simulation has no notion of wall-clock time. This crate supplies
//! the fixed-period scheduler that calls `tick()` and a [`Session`] that
//! serializes scheduled ticks and input commands on a single thread of control,
//! so no tick can ever run while an input handler is mutating the state.

pub mod scheduler;
pub mod session;

pub use lane_dodge_core as core;
pub use lane_dodge_types as types;

pub use scheduler::TickScheduler;
pub use session::Session;
