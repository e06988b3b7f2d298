//! Snapshot-to-terminal rendering.
//!
//! The 800x600 field maps onto a 40x30 cell grid; one cell covers 20 world
//! pixels. All game state arrives through the snapshot, already in screen
//! space.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::Print,
    terminal::{self, ClearType},
};

use game_core::{Params, Phase, Snapshot};

pub const COLS: u16 = 40;
pub const ROWS: u16 = 30;
const CELL: f32 = Params::FIELD_WIDTH / COLS as f32;

pub fn render(out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All))?;

    match snapshot.phase {
        Phase::MainMenu => draw_menu(out)?,
        Phase::Instructions => draw_instructions(out)?,
        Phase::Playing => draw_world(out, snapshot)?,
        Phase::GameOver => draw_game_over(out, snapshot)?,
        Phase::Quitting => {}
    }

    out.flush()
}

fn draw_menu(out: &mut impl Write) -> io::Result<()> {
    center(out, 10, "S K Y L E A F")?;
    center(out, 14, "Press Enter to Start")?;
    center(out, 16, "Press Q to Quit")
}

fn draw_instructions(out: &mut impl Write) -> io::Result<()> {
    center(out, 9, "How to play")?;
    center(out, 12, "Left/Right arrows steer the jump.")?;
    center(out, 13, "Grab coins (o), dodge spikes (X).")?;
    center(out, 14, "Don't fall off the bottom.")?;
    center(out, 17, "Press Enter to play")
}

fn draw_world(out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
    for platform in &snapshot.platforms {
        let width_cells = (platform.w / CELL) as i32;
        for i in 0..width_cells {
            put(out, platform.x + i as f32 * CELL, platform.y, "=")?;
        }
    }
    for coin in &snapshot.coins {
        put(out, coin.x, coin.y, "o")?;
    }
    for obstacle in &snapshot.obstacles {
        put(out, obstacle.x, obstacle.y, "X")?;
    }
    put(out, snapshot.player.x, snapshot.player.y, "^")?;

    // HUD overlays the top row
    let mut hud = format!(
        "Score: {}  Level: {}  Coins: {}",
        snapshot.score, snapshot.level, snapshot.coins_collected
    );
    if snapshot.coin_flash {
        hud.push_str("  +10!");
    }
    queue!(out, cursor::MoveTo(0, 0), Print(hud))?;

    if let Some(note) = &snapshot.latest_achievement {
        queue!(out, cursor::MoveTo(0, 1), Print(note))?;
    }
    Ok(())
}

fn draw_game_over(out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
    center(out, 10, "Game Over!")?;
    center(out, 12, &format!("Final Score: {}", snapshot.score))?;
    center(
        out,
        13,
        &format!("Coins collected: {}", snapshot.coins_collected),
    )?;
    center(out, 16, "Press R to Restart or Q to Quit")
}

/// Draw a glyph at a screen-space position, skipping anything off-grid
fn put(out: &mut impl Write, x: f32, y: f32, glyph: &str) -> io::Result<()> {
    let col = (x / CELL).floor() as i32;
    let row = (y / CELL).floor() as i32;
    if (0..COLS as i32).contains(&col) && (0..ROWS as i32).contains(&row) {
        queue!(out, cursor::MoveTo(col as u16, row as u16), Print(glyph))?;
    }
    Ok(())
}

fn center(out: &mut impl Write, row: u16, text: &str) -> io::Result<()> {
    let col = (COLS as usize).saturating_sub(text.len()) / 2;
    queue!(out, cursor::MoveTo(col as u16, row), Print(text))
}
