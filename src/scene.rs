//! What the renderer draws, independent of how it draws it.
//!
//! The scene is rebuilt from `GameState` every frame, so a dead entity's
//! sprite disappears simply by not being listed any more.

use crate::config::{
    Variant, CELL_SIZE, COLOR_BULLET, COLOR_ENEMY, COLOR_HERO, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use crate::controller::Command;
use crate::entities::{Entity, GameState};

/// One bordered square with an inset square filled in `color`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub x: i32,
    pub y: i32,
    pub color: u32,
}

impl Sprite {
    fn of(entity: &Entity, color: u32) -> Self {
        Sprite {
            x: entity.x,
            y: entity.y,
            color,
        }
    }
}

/// Sprites for every live entity: enemies, then bullets, then the hero on top.
pub fn sprites(state: &GameState) -> Vec<Sprite> {
    let mut out = Vec::with_capacity(state.enemies.len() + state.bullets.len() + 1);
    out.extend(
        state
            .enemies
            .iter()
            .filter(|e| e.alive)
            .map(|e| Sprite::of(e, COLOR_ENEMY)),
    );
    out.extend(
        state
            .bullets
            .iter()
            .filter(|b| b.alive)
            .map(|b| Sprite::of(b, COLOR_BULLET)),
    );
    out.push(Sprite::of(&state.hero, COLOR_HERO));
    out
}

/// `"Score: N"`, with `" Game Over"` once stopped.
pub fn score_text(state: &GameState) -> String {
    if state.is_running() {
        format!("Score: {}", state.score)
    } else {
        format!("Score: {} Game Over", state.score)
    }
}

// ── On-screen controls ────────────────────────────────────────────────────────

/// A clickable label, in board pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Widget {
    pub label: &'static str,
    pub command: Command,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Widget {
    pub fn contains(&self, px: i32, py: i32) -> bool {
        (self.x..self.x + self.width).contains(&px) && (self.y..self.y + self.height).contains(&py)
    }
}

const BUTTON_ROW: i32 = SCREEN_HEIGHT - 2 * CELL_SIZE;

pub const RESTART: Widget = Widget {
    label: "Restart",
    command: Command::Restart,
    x: SCREEN_WIDTH - 4 * CELL_SIZE,
    y: 0,
    width: 4 * CELL_SIZE,
    height: CELL_SIZE,
};

pub const BUTTON_LEFT: Widget = Widget {
    label: "◀",
    command: Command::MoveLeft,
    x: 0,
    y: BUTTON_ROW,
    width: 2 * CELL_SIZE,
    height: CELL_SIZE,
};

pub const BUTTON_RIGHT: Widget = Widget {
    label: "▶",
    command: Command::MoveRight,
    x: SCREEN_WIDTH - 2 * CELL_SIZE,
    y: BUTTON_ROW,
    width: 2 * CELL_SIZE,
    height: CELL_SIZE,
};

pub const BUTTON_SHOT: Widget = Widget {
    label: "✕",
    command: Command::Fire,
    x: SCREEN_WIDTH / 2 - CELL_SIZE,
    y: BUTTON_ROW,
    width: 2 * CELL_SIZE,
    height: CELL_SIZE,
};

/// Widgets active for `variant`.  Restart is always there; the movement and
/// shot buttons only exist in the classic layout.
pub fn widgets(variant: Variant) -> Vec<Widget> {
    let mut out = vec![RESTART];
    if variant.has_buttons() {
        out.extend([BUTTON_LEFT, BUTTON_RIGHT, BUTTON_SHOT]);
    }
    out
}
