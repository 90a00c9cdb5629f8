//! Headless runner: simulate without a terminal and emit a JSON trace.
//!
//! Each executed tick produces one line:
//!
//! ```text
//! {"tick":1,"score":1,"player_lane":1,"player_row":16,"game_over":false,"obstacles":[{"lane":2,"row":1}]}
//! ```
//!
//! The player never moves, so the run ends at the first obstacle that reaches
//! the center lane (or after the requested number of ticks). The same seed
//! always produces the same trace.

use std::io::Write;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::{GameSnapshot, GameState};
use crate::engine::Session;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceObstacle {
    pub lane: u8,
    pub row: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceLine {
    pub tick: u32,
    pub score: u32,
    pub player_lane: u8,
    pub player_row: u8,
    pub game_over: bool,
    pub obstacles: Vec<TraceObstacle>,
}

impl From<&GameSnapshot> for TraceLine {
    fn from(snap: &GameSnapshot) -> Self {
        Self {
            tick: snap.ticks,
            score: snap.score,
            player_lane: snap.player_lane,
            player_row: snap.player_row,
            game_over: snap.game_over,
            obstacles: snap
                .obstacles
                .iter()
                .map(|o| TraceObstacle {
                    lane: o.lane,
                    row: o.row,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessSummary {
    pub ticks: u32,
    pub score: u32,
    pub game_over: bool,
}

/// Run up to `max_ticks` ticks from `seed`, writing one trace line per tick.
pub fn run<W: Write>(seed: u32, max_ticks: u32, out: &mut W) -> Result<HeadlessSummary> {
    log::info!("headless run: seed {} max ticks {}", seed, max_ticks);

    // One "millisecond" per tick: the scheduler still decides when to stop.
    let mut session = Session::new(GameState::new(seed), 1);
    let mut snap = GameSnapshot::default();

    for _ in 0..max_ticks {
        if session.advance(1) == 0 {
            break;
        }
        session.snapshot_into(&mut snap);
        serde_json::to_writer(&mut *out, &TraceLine::from(&snap))?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    let state = session.state();
    let summary = HeadlessSummary {
        ticks: state.ticks(),
        score: state.score(),
        game_over: state.game_over(),
    };
    log::info!(
        "headless run finished: {} ticks, score {}, game over {}",
        summary.ticks,
        summary.score,
        summary.game_over
    );
    Ok(summary)
}
