//! Terminal frontend for both game modes.
//!
//! The frontend is only an input source and a rendering target: key
//! presses go to the game loop over one channel, notifications come back
//! over another.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stdout, stdout};
use tokio::sync::mpsc;
use tracing::{info, instrument};

use crate::config::{MotionConfig, TurnConfig};
use crate::games::snake::MotionEngine;
use crate::games::tictactoe::TurnController;
use crate::scheduler::{InputEvent, IntervalClock, run_motion_loop, run_turn_loop};
use app::{MotionView, TurnView};
use input::TurnKey;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Plays a turn-mode game in the terminal.
#[instrument(skip_all, fields(columns = turn.columns(), rows = turn.rows()))]
pub async fn run_turn_tui(turn: TurnConfig) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = turn_session(&mut terminal, turn).await;
    restore_terminal(&mut terminal)?;
    result
}

/// Plays a motion-mode game in the terminal.
#[instrument(skip_all, fields(tick_ms = motion.tick_ms()))]
pub async fn run_motion_tui(motion: MotionConfig) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = motion_session(&mut terminal, motion).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn turn_session(terminal: &mut Term, turn: TurnConfig) -> Result<()> {
    let dimensions = turn.dimensions();
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();
    let game = tokio::spawn(run_turn_loop(
        TurnController::new(dimensions),
        input_rx,
        update_tx,
    ));

    let mut events = EventStream::new();
    let mut view = TurnView::new(dimensions);

    loop {
        terminal
            .draw(|frame| ui::draw_turn(frame, &view))
            .context("Failed to draw frame")?;

        tokio::select! {
            Some(event) = update_rx.recv() => view.apply(event),

            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    match input::turn_key(key, view.cursor(), dimensions) {
                        TurnKey::Cursor(cursor) => view.set_cursor(cursor),
                        TurnKey::Input(InputEvent::Quit) => break,
                        TurnKey::Input(event) => {
                            let _ = input_tx.send(event);
                        }
                        TurnKey::None => {}
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                None => break,
            },
        }
    }

    drop(input_tx);
    let controller = game.await.context("Turn loop failed")?;
    info!(status = %controller.status(), moves = controller.move_count(), "Turn session ended");
    Ok(())
}

async fn motion_session(terminal: &mut Term, motion: MotionConfig) -> Result<()> {
    let engine = MotionEngine::new(motion);
    let mut view = MotionView::new(engine.lattice(), engine.update());
    let clock = IntervalClock::new(motion.tick_period());

    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();
    let game = tokio::spawn(run_motion_loop(engine, clock, input_rx, update_tx));

    let mut events = EventStream::new();

    loop {
        terminal
            .draw(|frame| ui::draw_motion(frame, &view))
            .context("Failed to draw frame")?;

        tokio::select! {
            Some(update) = update_rx.recv() => view.apply(update),

            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    match input::motion_key(key) {
                        Some(InputEvent::Quit) => break,
                        Some(event) => {
                            let _ = input_tx.send(event);
                        }
                        None => {}
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                None => break,
            },
        }
    }

    drop(input_tx);
    let engine = game.await.context("Motion loop failed")?;
    info!(status = %engine.status(), ticks = engine.ticks(), "Motion session ended");
    Ok(())
}

fn setup_terminal() -> Result<Term> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;
    terminal.clear().context("Failed to clear terminal")?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}
