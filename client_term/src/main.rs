//! Terminal client for the jumper core.
//!
//! Owns the window (a raw-mode terminal), key polling and pacing; all game
//! state lives in the `game_core` session, which this loop drives at a
//! fixed 30 ticks per second.

use std::io::{self, stdout, Write};
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, terminal,
};
use log::info;

use game_core::{GameAction, Params, Session};

mod draw;

fn main() -> io::Result<()> {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(12345);
    let mut session = Session::new(seed);
    info!("session seeded with {seed}");

    let mut out = stdout();
    terminal::enable_raw_mode()?;
    execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut session, &mut out);

    // Restore the terminal even when the loop errored
    execute!(out, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    info!(
        "exiting with final score {} after {} ticks",
        session.progress.score, session.progress.time_survived
    );
    result
}

/// Single dispatch loop: poll keys, feed the session, draw the snapshot.
fn run(session: &mut Session, out: &mut impl Write) -> io::Result<()> {
    let tick = Duration::from_millis(1000 / Params::TICKS_PER_SECOND as u64);
    let mut was_over = false;

    loop {
        let frame_start = Instant::now();

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Left => session.input.push_move(-1),
                    KeyCode::Right => session.input.push_move(1),
                    KeyCode::Enter => {
                        session.handle(GameAction::Advance);
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        session.handle(GameAction::Restart);
                    }
                    KeyCode::Char('q') | KeyCode::Char('Q') => {
                        session.handle(GameAction::Quit);
                    }
                    _ => {}
                }
            }
        }

        if session.should_quit() {
            return Ok(());
        }

        session.step();

        if session.fsm.is_game_over() && !was_over {
            info!(
                "run over: score {} coins {} level {}",
                session.progress.score, session.progress.coins, session.progress.level
            );
        }
        was_over = session.fsm.is_game_over();

        draw::render(out, &session.snapshot())?;

        let elapsed = frame_start.elapsed();
        if elapsed < tick {
            thread::sleep(tick - elapsed);
        }
    }
}
