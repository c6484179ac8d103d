//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected RNG and logging.

use log::{debug, trace};
use rand::Rng;

use crate::config::{
    CELL_SIZE, COLUMNS, HERO_SPAWN_X, HERO_SPAWN_Y, SCREEN_HEIGHT, SCREEN_WIDTH,
    SPAWN_INTERVAL, SPAWN_PROBABILITY, TOP_PADDING,
};
use crate::entities::{Entity, GameState, GameStatus};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Fresh state: hero at the spawn point, empty board, score 0, running.
pub fn init_state() -> GameState {
    GameState {
        hero: Entity::new(HERO_SPAWN_X, HERO_SPAWN_Y),
        bullets: Vec::new(),
        enemies: Vec::new(),
        score: 0,
        tick_counter: 0,
        status: GameStatus::Running,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_hero_left(state: &GameState) -> GameState {
    shift_hero(state, -CELL_SIZE, 0)
}

pub fn move_hero_right(state: &GameState) -> GameState {
    shift_hero(state, CELL_SIZE, 0)
}

pub fn move_hero_up(state: &GameState) -> GameState {
    shift_hero(state, 0, -CELL_SIZE)
}

pub fn move_hero_down(state: &GameState) -> GameState {
    shift_hero(state, 0, CELL_SIZE)
}

fn shift_hero(state: &GameState, dx: i32, dy: i32) -> GameState {
    let x = (state.hero.x + dx).clamp(0, SCREEN_WIDTH - CELL_SIZE);
    let y = (state.hero.y + dy).clamp(0, SCREEN_HEIGHT - CELL_SIZE);
    GameState {
        hero: Entity { x, y, ..state.hero },
        ..state.clone()
    }
}

/// Fire a bullet from the hero's current cell.  No cap on live bullets.
pub fn fire(state: &GameState) -> GameState {
    let mut bullets = state.bullets.clone();
    bullets.push(Entity::new(state.hero.x, state.hero.y));
    GameState {
        bullets,
        ..state.clone()
    }
}

// ── Per-frame steps ─────────────────────────────────────────────────────────

/// An enemy sits on the hero's row.
pub fn is_fail(state: &GameState) -> bool {
    state.enemies.iter().any(|e| e.y == state.hero.y)
}

/// Bump the frame counter.  Returns the new state and whether the enemy
/// interval elapsed (in which case the counter is back at 0).
pub fn advance_counter(state: &GameState) -> (GameState, bool) {
    let counter = state.tick_counter + 1;
    let due = counter >= SPAWN_INTERVAL;
    let next = GameState {
        tick_counter: if due { 0 } else { counter },
        ..state.clone()
    };
    (next, due)
}

/// Every enemy drops one cell.  Enemies pushed off the bottom are marked dead.
pub fn advance_enemies(state: &GameState) -> GameState {
    let enemies = state
        .enemies
        .iter()
        .map(|e| {
            let y = e.y + CELL_SIZE;
            Entity {
                y,
                alive: e.alive && y < SCREEN_HEIGHT,
                ..*e
            }
        })
        .collect();
    GameState {
        enemies,
        ..state.clone()
    }
}

/// Append a new row of enemies along `TOP_PADDING`; each column rolls
/// independently, so a batch never stacks two enemies in one cell.
pub fn spawn_enemies(state: &GameState, rng: &mut impl Rng) -> GameState {
    let mut enemies = state.enemies.clone();
    let before = enemies.len();
    for column in 0..COLUMNS {
        if rng.gen_bool(SPAWN_PROBABILITY) {
            enemies.push(Entity::new(column * CELL_SIZE, TOP_PADDING));
        }
    }
    debug!("spawned {} enemies", enemies.len() - before);
    GameState {
        enemies,
        ..state.clone()
    }
}

/// Every bullet rises one cell; those above `TOP_PADDING` are marked dead
/// but stay in the list until `prune`.
pub fn advance_bullets(state: &GameState) -> GameState {
    let bullets = state
        .bullets
        .iter()
        .map(|b| {
            let y = b.y - CELL_SIZE;
            Entity {
                y,
                alive: b.alive && y >= TOP_PADDING,
                ..*b
            }
        })
        .collect();
    GameState {
        bullets,
        ..state.clone()
    }
}

/// Mark every bullet/enemy pair sharing a cell as dead and score each pair.
/// Nothing is removed here.  Escaped bullets sit above `TOP_PADDING`, so they
/// can never share a cell with an enemy.
pub fn resolve_collisions(state: &GameState) -> GameState {
    let mut bullets = state.bullets.clone();
    let mut enemies = state.enemies.clone();
    let mut score = state.score;

    for bullet in bullets.iter_mut() {
        for enemy in enemies.iter_mut() {
            if bullet.overlaps(enemy) {
                bullet.alive = false;
                enemy.alive = false;
                score += 1;
                trace!("enemy destroyed at ({}, {})", enemy.x, enemy.y);
            }
        }
    }

    GameState {
        bullets,
        enemies,
        score,
        ..state.clone()
    }
}

/// Drop every entity marked dead.
pub fn prune(state: &GameState) -> GameState {
    let next = GameState {
        bullets: state.bullets.iter().filter(|b| b.alive).copied().collect(),
        enemies: state.enemies.iter().filter(|e| e.alive).copied().collect(),
        ..state.clone()
    };
    debug_assert!(next.enemies.iter().all(on_board), "enemy left the board");
    debug_assert!(on_board(&next.hero), "hero left the board");
    next
}

fn on_board(e: &Entity) -> bool {
    e.x % CELL_SIZE == 0
        && e.y % CELL_SIZE == 0
        && (0..SCREEN_WIDTH).contains(&e.x)
        && (0..SCREEN_HEIGHT).contains(&e.y)
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// A stopped state is returned unchanged.  The fail check runs first and,
/// when it trips, nothing else happens this frame.
pub fn tick(state: &GameState, rng: &mut impl Rng) -> GameState {
    if !state.is_running() {
        return state.clone();
    }

    // ── 1. Fail check ────────────────────────────────────────────────────────
    if is_fail(state) {
        return GameState {
            status: GameStatus::Stopped,
            ..state.clone()
        };
    }

    // ── 2. Enemies advance, then a new row spawns, on the interval ──────────
    let (mut next, due) = advance_counter(state);
    if due {
        next = advance_enemies(&next);
        next = spawn_enemies(&next, rng);
    }

    // ── 3. Bullets rise every frame ─────────────────────────────────────────
    next = advance_bullets(&next);

    // ── 4. Mark hits, then compact ──────────────────────────────────────────
    next = resolve_collisions(&next);
    prune(&next)
}
