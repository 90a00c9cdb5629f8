//! Session: one game, one scheduler, one thread of control.
//!
//! Both time and input go through `&mut self`, so ticks and commands are
//! serialized by the borrow checker. The scheduler is stopped on the tick that
//! ends the run and re-armed by a restart command.

use crate::core::{GameSnapshot, GameState, SimpleRng, SpawnSource};
use crate::scheduler::TickScheduler;
use crate::types::GameAction;

#[derive(Debug, Clone)]
pub struct Session<R: SpawnSource = SimpleRng> {
    state: GameState<R>,
    scheduler: TickScheduler,
}

impl<R: SpawnSource> Session<R> {
    pub fn new(state: GameState<R>, period_ms: u32) -> Self {
        let mut scheduler = TickScheduler::new(period_ms);
        if state.game_over() {
            scheduler.stop();
        }
        Self { state, scheduler }
    }

    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    /// Advance wall-clock time, running every tick that became due.
    ///
    /// Returns the number of ticks executed. No tick runs after the one that
    /// ended the game, even if more were due.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let due = self.scheduler.advance(elapsed_ms);
        let mut ran = 0;
        for _ in 0..due {
            let outcome = self.state.tick();
            if !outcome.advanced() {
                self.scheduler.stop();
                break;
            }
            ran += 1;
            if outcome.collided() {
                self.scheduler.stop();
                log::info!(
                    "game over: episode {} score {}",
                    self.state.episode_id(),
                    self.state.score()
                );
                break;
            }
        }
        ran
    }

    /// Dispatch one input command.
    pub fn handle(&mut self, action: GameAction) {
        match action {
            GameAction::Restart => {
                self.state.restart();
                self.scheduler.resume();
                log::info!("restart: episode {}", self.state.episode_id());
            }
            GameAction::MoveLeft | GameAction::MoveRight => {
                self.state.apply_action(action);
            }
        }
    }

    /// Milliseconds the caller may block waiting for input.
    pub fn poll_timeout_ms(&self) -> u32 {
        self.scheduler.time_until_next_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedSpawns;
    use crate::types::{CENTER_LANE, PLAYER_ROW};

    fn doomed() -> Session<ScriptedSpawns> {
        // One obstacle in the player's lane, nothing after it.
        let state = GameState::with_source(ScriptedSpawns::new([Some(CENTER_LANE)]));
        Session::new(state, 100)
    }

    #[test]
    fn runs_due_ticks() {
        let mut session = Session::new(GameState::with_source(ScriptedSpawns::empty()), 100);
        assert_eq!(session.advance(250), 2);
        assert_eq!(session.state().score(), 2);
    }

    #[test]
    fn collision_stops_the_scheduler_mid_batch() {
        let mut session = doomed();
        let ran = session.advance(100 * 40);
        assert_eq!(ran, PLAYER_ROW as u32);
        assert!(session.state().game_over());
        assert!(!session.scheduler().is_running());
        assert_eq!(session.state().score(), PLAYER_ROW as u32);

        assert_eq!(session.advance(1_000), 0);
        assert_eq!(session.state().score(), PLAYER_ROW as u32);
    }

    #[test]
    fn restart_rearms_the_scheduler() {
        let mut session = doomed();
        session.advance(100 * 40);
        assert!(session.state().game_over());

        session.handle(GameAction::Restart);
        assert!(session.scheduler().is_running());
        assert!(!session.state().game_over());
        assert_eq!(session.state().score(), 0);
        assert_eq!(session.advance(100), 1);
    }

    #[test]
    fn moves_are_ignored_while_game_over() {
        let mut session = doomed();
        session.advance(100 * 40);
        session.handle(GameAction::MoveLeft);
        assert_eq!(session.state().player_lane(), CENTER_LANE);
    }

    #[test]
    fn poll_timeout_tracks_next_tick() {
        let mut session = Session::new(GameState::with_source(ScriptedSpawns::empty()), 100);
        session.advance(30);
        assert_eq!(session.poll_timeout_ms(), 70);
    }
}
