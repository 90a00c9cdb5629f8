//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, headless runs).
//!
//! # Road Dimensions
//!
//! - **Lanes**: 3 columns (indexed 0-2)
//! - **Rows**: 18 rows (indexed 0-17), obstacles scroll from row 0 downward
//! - **Player row**: fixed at `ROWS - 2`
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 180 | Fixed scheduler period |
//! | `SPAWN_PROBABILITY_PERCENT` | 50 | Chance that a tick spawns an obstacle |
//!
//! # Examples
//!
//! ```
//! use lane_dodge_types::{Direction, GameAction, CENTER_LANE, LANES, PLAYER_ROW, ROWS};
//!
//! assert_eq!(LANES, 3);
//! assert_eq!(ROWS, 18);
//! assert_eq!(PLAYER_ROW, 16);
//! assert_eq!(CENTER_LANE, 1);
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//! assert_eq!(action.direction(), Some(Direction::Left));
//! ```

/// Number of lanes on the road
pub const LANES: u8 = 3;

/// Number of rows on the road (obstacles despawn once they reach this row)
pub const ROWS: u8 = 18;

/// Row the player vehicle occupies for the whole process lifetime
pub const PLAYER_ROW: u8 = ROWS - 2;

/// Lane the player starts in (and returns to on restart)
pub const CENTER_LANE: u8 = LANES / 2;

/// Fixed scheduler period in milliseconds
pub const TICK_MS: u32 = 180;

/// Probability (in percent) that a single tick spawns an obstacle
pub const SPAWN_PROBABILITY_PERCENT: u32 = 50;

/// Upper bound on simultaneously live obstacles.
///
/// At most one obstacle spawns per tick and each is removed once its row
/// reaches `ROWS`, so no more than `ROWS` can ever be on the road.
pub const MAX_OBSTACLES: usize = ROWS as usize;


/// Lateral movement direction of the player vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "left" | "l", "right" | "r".
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Discrete commands delivered by an input source
///
/// Each physical input event maps to exactly one action; there is no
/// repeat-on-hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move the player one lane to the left
    MoveLeft,
    /// Move the player one lane to the right
    MoveRight,
    /// Start a new run (accepted at any time)
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use lane_dodge_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveRight"), Some(GameAction::MoveRight));
    /// assert_eq!(GameAction::from_str("RESTART"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Restart => "restart",
        }
    }

    /// The movement direction carried by this action, if any
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::Restart => None,
        }
    }
}

/// Game lifecycle phase
///
/// `Playing --(collision)--> GameOver --(restart)--> Playing`.
/// There is no terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Playing,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Playing => "playing",
            Phase::GameOver => "gameOver",
        }
    }
}
