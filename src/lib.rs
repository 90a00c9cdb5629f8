//! Lane Dodge (workspace facade crate).
//!
//! Re-exports the workspace crates as `lane_dodge::{core, engine, input, term, types}`
//! and hosts the runner-level pieces: configuration, logging setup and the
//! headless trace mode.

pub use lane_dodge_core as core;
pub use lane_dodge_engine as engine;
pub use lane_dodge_input as input;
pub use lane_dodge_term as term;
pub use lane_dodge_types as types;

pub mod config;
pub mod headless;
pub mod logging;
