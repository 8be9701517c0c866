//! Terminal memory-match runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `term`. The match
//! engine is ticked from this loop with real elapsed time, so its delayed
//! transitions fire between frames.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use memory_match::core::{DeckSnapshot, GameConfig, MatchEngine};
use memory_match::input::{handle_key_event, should_quit, Cursor};
use memory_match::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use memory_match::types::{next_pair_count, previous_pair_count, GameAction, TICK_MS};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config);

    let mut engine = MatchEngine::new(&config).context("could not deal the first deck")?;
    info!(
        "starting with {} pairs (seed {})",
        engine.pair_count(),
        engine.seed()
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file only; the terminal belongs to the game.
fn init_logging(config: &GameConfig) {
    let Some(path) = config.log_path.as_deref() else {
        return;
    };
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }
}

fn run(term: &mut TerminalRenderer, engine: &mut MatchEngine) -> Result<()> {
    let view = BoardView::default();
    let mut cursor = Cursor::default();
    let mut snapshot = DeckSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        engine.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snapshot, Some(cursor.index()), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        apply_action(engine, &mut cursor, action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick with the real elapsed time so delays match the wall clock.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            let ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
            last_tick += Duration::from_millis(ms as u64);
            engine.tick(ms);
        }
    }
}

fn apply_action(engine: &mut MatchEngine, cursor: &mut Cursor, action: GameAction) {
    match action {
        action if action.is_cursor_move() => {
            cursor.apply(action, engine.len());
        }
        GameAction::Flip => {
            if let Err(err) = engine.tap(cursor.index()) {
                warn!("tap failed: {}", err);
            }
        }
        GameAction::Reset => {
            engine.reset();
        }
        GameAction::MorePairs => {
            let pairs = next_pair_count(engine.pair_count(), engine.max_pairs());
            change_pair_count(engine, cursor, pairs);
        }
        GameAction::FewerPairs => {
            let pairs = previous_pair_count(engine.pair_count(), engine.max_pairs());
            change_pair_count(engine, cursor, pairs);
        }
        _ => {}
    }
}

fn change_pair_count(engine: &mut MatchEngine, cursor: &mut Cursor, pairs: usize) {
    match engine.new_game(pairs) {
        Ok(_) => {
            cursor.clamp(engine.len());
            info!("switched to {} pairs", pairs);
        }
        Err(err) => warn!("cannot switch to {} pairs: {}", pairs, err),
    }
}
