//! All game entity types — pure data, no logic.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Stopped,
}

/// A grid-aligned square on the board.  Hero, bullets and enemies all share
/// this shape; their role comes from where they are stored in `GameState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entity {
    /// Left edge in pixels, always a multiple of `CELL_SIZE`.
    pub x: i32,
    /// Top edge in pixels, always a multiple of `CELL_SIZE`.
    pub y: i32,
    pub alive: bool,
}

impl Entity {
    pub fn new(x: i32, y: i32) -> Self {
        Entity { x, y, alive: true }
    }

    /// Same grid cell as `other`.  Liveness is not compared.
    pub fn overlaps(&self, other: &Entity) -> bool {
        self.x == other.x && self.y == other.y
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub hero: Entity,
    pub bullets: Vec<Entity>,
    pub enemies: Vec<Entity>,
    pub score: u32,
    /// Frames since the last enemy advance; wraps at `SPAWN_INTERVAL`.
    pub tick_counter: u32,
    pub status: GameStatus,
}

impl GameState {
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }
}
