//! Scheduler + input integration through the facade crate.

use lane_dodge::core::{GameSnapshot, GameState, ScriptedSpawns};
use lane_dodge::engine::Session;
use lane_dodge::types::{GameAction, CENTER_LANE, PLAYER_ROW, TICK_MS};

fn session(script: &[Option<u8>]) -> Session<ScriptedSpawns> {
    Session::new(
        GameState::with_source(ScriptedSpawns::new(script.iter().copied())),
        TICK_MS,
    )
}

#[test]
fn ticks_follow_wall_clock() {
    let mut s = session(&[]);
    // Uneven frames still yield one tick per period on average.
    let mut total = 0;
    for ms in [50, 70, 59, 1, 180, 200, 160] {
        total += s.advance(ms);
    }
    assert_eq!(total, (50 + 70 + 59 + 1 + 180 + 200 + 160) / TICK_MS);
    assert_eq!(s.state().score(), total);
}

#[test]
fn input_between_ticks_does_not_advance_time() {
    let mut s = session(&[]);
    s.handle(GameAction::MoveLeft);
    s.handle(GameAction::MoveRight);
    s.handle(GameAction::MoveRight);
    assert_eq!(s.state().score(), 0);
    assert_eq!(s.state().player_lane(), CENTER_LANE + 1);
}

#[test]
fn game_over_stops_ticking_until_restart() {
    let mut s = session(&[Some(CENTER_LANE)]);
    s.advance(TICK_MS * 100);
    assert!(s.state().game_over());
    assert_eq!(s.state().score(), PLAYER_ROW as u32);

    let mut snap = GameSnapshot::default();
    s.snapshot_into(&mut snap);
    let frozen = snap.clone();

    s.advance(TICK_MS * 100);
    s.handle(GameAction::MoveLeft);
    s.snapshot_into(&mut snap);
    assert_eq!(snap, frozen);

    s.handle(GameAction::Restart);
    s.snapshot_into(&mut snap);
    assert!(!snap.game_over);
    assert_eq!(snap.score, 0);
    assert!(snap.obstacles.is_empty());
    assert_eq!(snap.episode_id, 1);

    assert_eq!(s.advance(TICK_MS), 1);
    assert_eq!(s.state().score(), 1);
}

#[test]
fn dodging_mid_flight_avoids_the_crash() {
    let mut s = session(&[Some(CENTER_LANE)]);
    s.advance(TICK_MS * 10);
    s.handle(GameAction::MoveLeft);
    s.advance(TICK_MS * 20);
    assert!(!s.state().game_over());
    assert_eq!(s.state().score(), 30);
    assert!(s.state().obstacles().is_empty());
}
