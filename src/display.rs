//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only translates
//! the scene into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use pixel_rain::config::{
    Variant, BG_COLOR, CELL_SIZE, COLOR_DEFAULT, GROUND_Y, ROWS, SCREEN_WIDTH,
};
use pixel_rain::entities::GameState;
use pixel_rain::input::COLUMNS_PER_CELL;
use pixel_rain::scene::{score_text, sprites, widgets, Sprite, Widget};

/// Board width in terminal columns.
const BOARD_COLUMNS: usize = (SCREEN_WIDTH / CELL_SIZE) as usize * COLUMNS_PER_CELL as usize;

pub fn rgb(color: u32) -> Color {
    Color::Rgb {
        r: (color >> 16) as u8,
        g: (color >> 8) as u8,
        b: color as u8,
    }
}

fn column_of(px: i32) -> u16 {
    (px / CELL_SIZE) as u16 * COLUMNS_PER_CELL
}

fn row_of(py: i32) -> u16 {
    (py / CELL_SIZE) as u16
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.  The on-screen widgets are only drawn when
/// they can be clicked (`clickable`, i.e. mouse capture is on).
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    variant: Variant,
    clickable: bool,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_background(out)?;
    draw_ground(out)?;

    for sprite in sprites(state) {
        draw_sprite(out, &sprite)?;
    }

    out.queue(style::SetBackgroundColor(rgb(BG_COLOR)))?;
    if clickable {
        for widget in widgets(variant) {
            draw_widget(out, &widget)?;
        }
    }
    draw_score(out, state)?;

    // Park cursor below the board and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, ROWS as u16))?;
    out.flush()?;
    Ok(())
}

// ── Board ─────────────────────────────────────────────────────────────────────

fn draw_background<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(rgb(BG_COLOR)))?;
    let blank = " ".repeat(BOARD_COLUMNS);
    for row in 0..ROWS as u16 {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print(&blank))?;
    }
    Ok(())
}

fn draw_ground<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, row_of(GROUND_Y)))?;
    out.queue(style::SetForegroundColor(rgb(COLOR_DEFAULT)))?;
    out.queue(Print("─".repeat(BOARD_COLUMNS)))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Glyph pair for one cell: two half blocks meet in the middle, leaving a
/// background margin on either side of the filled square.
const SPRITE_GLYPH: &str = "▐▌";

/// Inset square in the sprite colour on the background colour.
fn draw_sprite<W: Write>(out: &mut W, sprite: &Sprite) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(column_of(sprite.x), row_of(sprite.y)))?;
    out.queue(style::SetBackgroundColor(rgb(BG_COLOR)))?;
    out.queue(style::SetForegroundColor(rgb(sprite.color)))?;
    out.queue(Print(SPRITE_GLYPH))?;
    Ok(())
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_widget<W: Write>(out: &mut W, widget: &Widget) -> std::io::Result<()> {
    let width = column_of(widget.width);
    let len = widget.label.chars().count() as u16;
    let col = column_of(widget.x) + width.saturating_sub(len) / 2;
    out.queue(cursor::MoveTo(col, row_of(widget.y)))?;
    out.queue(style::SetForegroundColor(rgb(COLOR_DEFAULT)))?;
    out.queue(Print(widget.label))?;
    Ok(())
}

fn draw_score<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(rgb(COLOR_DEFAULT)))?;
    out.queue(Print(score_text(state)))?;
    Ok(())
}

// ── Menu ──────────────────────────────────────────────────────────────────────

/// Variant picker shown before each game.
pub fn draw_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(style::ResetColor)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    draw_background(out)?;

    let cx = (BOARD_COLUMNS / 2) as u16;
    let cy = (ROWS / 2) as u16;

    let lines: &[&str] = &[
        "PIXEL  RAIN",
        "",
        "[1] Classic",
        "[2] Free movement",
        "",
        "[Q] Quit",
    ];
    out.queue(style::SetForegroundColor(rgb(COLOR_DEFAULT)))?;
    for (i, line) in lines.iter().enumerate() {
        let row = cy.saturating_sub(3) + i as u16;
        out.queue(cursor::MoveTo(
            cx.saturating_sub(line.chars().count() as u16 / 2),
            row,
        ))?;
        out.queue(Print(*line))?;
    }

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixel_rain::compute::init_state;
    use pixel_rain::config::COLOR_HERO;

    fn frame(state: &GameState, variant: Variant, clickable: bool) -> String {
        let mut buf: Vec<u8> = Vec::new();
        render(&mut buf, state, variant, clickable).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn hero_drawn_on_background_not_as_background() {
        let out = frame(&init_state(), Variant::Classic, true);
        let hero_fg = "\x1b[38;2;0;153;0m";
        let hero_bg = "\x1b[48;2;0;153;0m";
        assert_eq!(rgb(COLOR_HERO), Color::Rgb { r: 0, g: 153, b: 0 });
        assert!(out.contains(&format!("{hero_fg}{SPRITE_GLYPH}")));
        assert!(!out.contains(hero_bg));
    }

    #[test]
    fn widgets_hidden_without_mouse() {
        let with_mouse = frame(&init_state(), Variant::Classic, true);
        let without = frame(&init_state(), Variant::Classic, false);
        assert!(with_mouse.contains("Restart"));
        assert!(with_mouse.contains("◀"));
        assert!(!without.contains("Restart"));
        assert!(!without.contains("◀"));
        assert!(without.contains("Score: 0"));
    }
}
