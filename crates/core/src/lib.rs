//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the road simulation: the obstacle collection, its
//! spawn/advance/despawn policy, collision detection, and the score and
//! game-over state machine. It has **zero dependencies** on rendering, input,
//! or I/O, making it:
//!
//! - **Deterministic**: Same seed (or spawn script) produces identical runs
//! - **Testable**: Every rule is exercised by unit tests
//! - **Portable**: Runs in the terminal, headless, or in benchmarks
//!
//! # Module Structure
//!
//! - [`obstacle`]: single hazards and the ordered, removable [`ObstacleSet`]
//! - [`rng`]: the seedable spawn source and a scripted source for tests
//! - [`game_state`]: player lane, obstacles, score and game-over flag
//! - [`snapshot`]: read-only view handed to renderers
//!
//! # Tick Order
//!
//! Every executed tick runs, in this order:
//!
//! 1. **Spawn**: 50% chance to append one obstacle at row 0 in a random lane
//! 2. **Advance**: every obstacle (including the new one) moves down one row;
//!    obstacles reaching `ROWS` are removed immediately
//! 3. **Collide**: any obstacle on the player's cell ends the run
//! 4. **Score**: +1, even on the tick that ended the run
//!
//! Ticks are ignored entirely while the game is over.
//!
//! # Example
//!
//! ```
//! use lane_dodge_core::{GameState, ScriptedSpawns};
//! use lane_dodge_types::{Direction, PLAYER_ROW};
//!
//! // Force one obstacle into the center lane on the first tick.
//! let mut game = GameState::with_source(ScriptedSpawns::new([Some(1)]));
//! game.tick();
//! assert_eq!(game.obstacles().iter().next().map(|o| o.row), Some(1));
//!
//! // Step aside and let it pass.
//! game.move_player(Direction::Left);
//! for _ in 0..PLAYER_ROW {
//!     game.tick();
//! }
//! assert!(!game.game_over());
//! assert_eq!(game.score(), 1 + PLAYER_ROW as u32);
//! ```

pub mod game_state;
pub mod obstacle;
pub mod rng;
pub mod snapshot;

pub use lane_dodge_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, TickOutcome};
pub use obstacle::{Obstacle, ObstacleSet, Visit};
pub use rng::{ScriptedSpawns, SimpleRng, SpawnSource};
pub use snapshot::{GameSnapshot, ObstacleSnapshot};
