use arrayvec::ArrayVec;

use crate::types::{Phase, CENTER_LANE, MAX_OBSTACLES, PLAYER_ROW};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObstacleSnapshot {
    pub lane: u8,
    pub row: u8,
}

impl From<crate::Obstacle> for ObstacleSnapshot {
    fn from(value: crate::Obstacle) -> Self {
        Self {
            lane: value.lane,
            row: value.row,
        }
    }
}

/// Read-only view of a [`crate::GameState`] for renderers and observers.
///
/// Obstacles appear in spawn order. Filling an existing snapshot through
/// `GameState::snapshot_into` does not allocate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub player_lane: u8,
    pub player_row: u8,
    pub obstacles: ArrayVec<ObstacleSnapshot, MAX_OBSTACLES>,
    pub score: u32,
    pub game_over: bool,
    pub phase: Phase,
    pub ticks: u32,
    pub episode_id: u32,
    pub frame_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.player_lane = CENTER_LANE;
        self.player_row = PLAYER_ROW;
        self.obstacles.clear();
        self.score = 0;
        self.game_over = false;
        self.phase = Phase::Playing;
        self.ticks = 0;
        self.episode_id = 0;
        self.frame_id = 0;
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    pub fn obstacle_at(&self, lane: u8, row: u8) -> bool {
        self.obstacles.iter().any(|o| o.lane == lane && o.row == row)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            player_lane: 0,
            player_row: 0,
            obstacles: ArrayVec::new(),
            score: 0,
            game_over: false,
            phase: Phase::Playing,
            ticks: 0,
            episode_id: 0,
            frame_id: 0,
        };
        s.clear();
        s
    }
}
