//! Game state module - manages the complete game state
//!
//! This module ties together the obstacle set, the spawn source and the score.
//! It runs the fixed tick order (spawn, advance, collide, score), handles lane
//! changes and restarts, and tracks the playing/game-over phase.

use crate::obstacle::{ObstacleSet, Visit};
use crate::rng::{SimpleRng, SpawnSource};
use crate::snapshot::{GameSnapshot, ObstacleSnapshot};
use crate::types::*;

/// What a call to [`GameState::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is over; nothing moved.
    Skipped,
    Advanced {
        /// Lane of the obstacle spawned this tick, if any.
        spawned: Option<u8>,
        /// Obstacles that scrolled off the road this tick.
        despawned: u32,
        /// This tick put an obstacle on the player's cell.
        collided: bool,
    },
}

impl TickOutcome {
    pub fn collided(&self) -> bool {
        matches!(self, TickOutcome::Advanced { collided: true, .. })
    }

    pub fn advanced(&self) -> bool {
        matches!(self, TickOutcome::Advanced { .. })
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R: SpawnSource = SimpleRng> {
    obstacles: ObstacleSet,
    spawner: R,
    player_lane: u8,
    score: u32,
    phase: Phase,
    /// Ticks executed in the current episode.
    ticks: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Bumped on every change a renderer should pick up.
    frame_id: u32,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }
}

impl<R: SpawnSource> GameState<R> {
    /// Create a new game drawing spawn decisions from `spawner`
    pub fn with_source(spawner: R) -> Self {
        Self {
            obstacles: ObstacleSet::new(),
            spawner,
            player_lane: CENTER_LANE,
            score: 0,
            phase: Phase::Playing,
            ticks: 0,
            episode_id: 0,
            frame_id: 0,
        }
    }

    pub fn player_lane(&self) -> u8 {
        self.player_lane
    }

    pub fn player_row(&self) -> u8 {
        PLAYER_ROW
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Render refresh counter.
    ///
    /// Changes whenever the state changed in a way that should be redrawn.
    pub fn frame_id(&self) -> u32 {
        self.frame_id
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    pub fn spawner(&self) -> &R {
        &self.spawner
    }

    pub fn spawner_mut(&mut self) -> &mut R {
        &mut self.spawner
    }

    #[cfg(test)]
    pub(crate) fn obstacles_mut(&mut self) -> &mut ObstacleSet {
        &mut self.obstacles
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.player_lane = self.player_lane;
        out.player_row = PLAYER_ROW;
        out.obstacles.clear();
        for o in self.obstacles.iter().take(MAX_OBSTACLES) {
            out.obstacles.push(ObstacleSnapshot::from(*o));
        }
        out.score = self.score;
        out.game_over = self.game_over();
        out.phase = self.phase;
        out.ticks = self.ticks;
        out.episode_id = self.episode_id;
        out.frame_id = self.frame_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Run one scheduler tick.
    ///
    /// Order: spawn, advance and despawn, collision check, score. Scoring is
    /// unconditional, so the tick that ends the run still counts. While the game
    /// is over this does nothing.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over() {
            return TickOutcome::Skipped;
        }

        let spawned = self.spawn_step();
        let despawned = self.advance_step();
        let collided = self.collision_step();
        if collided {
            self.phase = Phase::GameOver;
        }

        self.score = self.score.saturating_add(1);
        self.ticks = self.ticks.wrapping_add(1);
        self.frame_id = self.frame_id.wrapping_add(1);

        TickOutcome::Advanced {
            spawned,
            despawned,
            collided,
        }
    }

    fn spawn_step(&mut self) -> Option<u8> {
        if !self.spawner.roll_spawn() {
            return None;
        }
        let lane = self.spawner.pick_lane(LANES).min(LANES - 1);
        self.obstacles.append(lane, 0);
        Some(lane)
    }

    /// Includes the obstacle spawned this tick, so it first shows up at row 1.
    fn advance_step(&mut self) -> u32 {
        self.obstacles.for_each_removable(|o| {
            o.advance();
            if o.is_off_road() {
                Visit::Remove
            } else {
                Visit::Keep
            }
        })
    }

    fn collision_step(&self) -> bool {
        self.obstacles
            .iter()
            .any(|o| o.occupies(self.player_lane, PLAYER_ROW))
    }

    /// Shift the player one lane, clamped at the road edges.
    ///
    /// Ignored while the game is over. Returns whether the lane changed. A
    /// refresh is requested even when the player is already against the wall.
    pub fn move_player(&mut self, direction: Direction) -> bool {
        if self.game_over() {
            return false;
        }

        let moved = match direction {
            Direction::Left if self.player_lane > 0 => {
                self.player_lane -= 1;
                true
            }
            Direction::Right if self.player_lane < LANES - 1 => {
                self.player_lane += 1;
                true
            }
            _ => false,
        };

        self.frame_id = self.frame_id.wrapping_add(1);
        moved
    }

    /// Start a new episode: empty road, zero score, player back in the center lane.
    ///
    /// Safe to call while still playing. The spawn source keeps its state.
    pub fn restart(&mut self) {
        self.obstacles.clear();
        self.score = 0;
        self.phase = Phase::Playing;
        self.player_lane = CENTER_LANE;
        self.ticks = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.frame_id = self.frame_id.wrapping_add(1);
    }

    /// Apply an input command.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => {
                self.move_player(Direction::Left);
            }
            GameAction::MoveRight => {
                self.move_player(Direction::Right);
            }
            GameAction::Restart => self.restart(),
        }
    }
}
