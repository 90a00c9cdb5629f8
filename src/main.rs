//! Terminal Lane Dodge runner (default binary).
//!
//! Single-threaded event loop: render when the game signals a change, block on
//! input until the next tick is due, then hand the elapsed time to the session.
//! Input commands and ticks therefore never overlap.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use lane_dodge::config::{Mode, RunConfig, USAGE};
use lane_dodge::core::{GameSnapshot, GameState};
use lane_dodge::engine::Session;
use lane_dodge::input::{action_for_event, should_quit};
use lane_dodge::term::{FrameBuffer, GameView, SpriteSet, TerminalRenderer, Viewport};
use lane_dodge::{headless, logging};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = RunConfig::from_env().apply_args(&args)?;

    match config.mode {
        Mode::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        Mode::Headless { ticks } => {
            logging::init(&config, true)?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            headless::run(config.seed, ticks, &mut out)?;
            Ok(())
        }
        Mode::Play => {
            let sink = logging::init(&config, false)?;
            log::info!(
                "starting: seed {} tick {}ms assets {} (log {:?})",
                config.seed,
                config.tick_ms,
                config.assets_dir.display(),
                sink
            );

            let mut term = TerminalRenderer::new();
            term.enter()?;

            let result = run(&mut term, &config);

            // Always try to restore terminal state.
            if let Err(e) = term.exit() {
                log::warn!("terminal restore failed: {:#}", e);
            }
            if let Err(e) = &result {
                log::error!("exiting with error: {:#}", e);
            }
            result
        }
    }
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let mut session = Session::new(GameState::new(config.seed), config.tick_ms);
    let view = GameView::default().with_sprites(SpriteSet::load_dir(&config.assets_dir));

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut viewport = current_viewport();
    let mut drawn_frame: Option<u32> = None;
    let mut last_tick = Instant::now();

    loop {
        // Render only when the state asked for a refresh.
        session.snapshot_into(&mut snap);
        if drawn_frame != Some(snap.frame_id) {
            view.render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            drawn_frame = Some(snap.frame_id);
        }

        // Input with timeout until next tick.
        let timeout = Duration::from_millis(session.poll_timeout_ms() as u64)
            .saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(key) => {
                    log::info!("quit at score {}", session.state().score());
                    return Ok(());
                }
                Event::Key(key) => {
                    if let Some(action) = action_for_event(key) {
                        log::debug!("input: {}", action.as_str());
                        session.handle(action);
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                    drawn_frame = None;
                }
                _ => {}
            }
        }

        // Tick. Whole milliseconds only; the remainder carries to the next pass.
        let elapsed_ms = last_tick.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last_tick += Duration::from_millis(elapsed_ms as u64);
        session.advance(elapsed_ms);
    }
}

fn current_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}
