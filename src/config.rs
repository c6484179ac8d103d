//! Build-time game constants.  Nothing here is configurable at runtime
//! except the `Variant`, which the player picks from the start menu.

use std::time::Duration;

// ── Board geometry (pixels) ───────────────────────────────────────────────────

pub const SCREEN_WIDTH: i32 = 384;
pub const SCREEN_HEIGHT: i32 = 512;
pub const CELL_SIZE: i32 = 16;

/// First row enemies may occupy; bullets die once they rise above it.
pub const TOP_PADDING: i32 = 3 * CELL_SIZE;

/// Where the hero appears at start and after every restart.
pub const HERO_SPAWN_X: i32 = SCREEN_WIDTH / 2;
pub const HERO_SPAWN_Y: i32 = SCREEN_HEIGHT - 4 * CELL_SIZE;

/// The line separating the play field from the on-screen buttons.
pub const GROUND_Y: i32 = SCREEN_HEIGHT - 3 * CELL_SIZE;

pub const COLUMNS: i32 = SCREEN_WIDTH / CELL_SIZE;
pub const ROWS: i32 = SCREEN_HEIGHT / CELL_SIZE;

// ── Pacing ────────────────────────────────────────────────────────────────────

/// Frames between enemy advances (and spawn batches).
pub const SPAWN_INTERVAL: u32 = 100;

/// Chance that any single column gets an enemy in a spawn batch.
pub const SPAWN_PROBABILITY: f64 = 0.4;

/// Terminal driver frame length (≈60 FPS).
pub const FRAME: Duration = Duration::from_millis(16);

// ── Palette (0xRRGGBB) ────────────────────────────────────────────────────────

pub const COLOR_DEFAULT: u32 = 0x000000;
pub const COLOR_ENEMY: u32 = 0xff0033;
pub const COLOR_HERO: u32 = 0x009900;
pub const COLOR_BULLET: u32 = COLOR_DEFAULT;
pub const BG_COLOR: u32 = 0x869174;

// ── Variants ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Variant {
    /// Left/right only, with on-screen arrow and shot buttons.
    #[default]
    Classic,
    /// Adds up/down movement; keyboard only.
    FreeMove,
}

impl Variant {
    pub fn allows_vertical(&self) -> bool {
        matches!(self, Variant::FreeMove)
    }

    pub fn has_buttons(&self) -> bool {
        matches!(self, Variant::Classic)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::FreeMove => "Free movement",
        }
    }
}
