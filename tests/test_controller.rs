use pixel_rain::config::*;
use pixel_rain::controller::*;
use pixel_rain::entities::*;

use proptest::prelude::*;
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn always_spawn() -> StepRng {
    StepRng::new(0, 0)
}

fn never_spawn() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

/// A classic game that has already ended: a full row reached the hero.
fn stopped_game() -> Controller<StepRng> {
    let mut c = Controller::with_rng(Variant::Classic, always_spawn());
    c.handle(Command::Fire);
    for _ in 0..3000 {
        c.tick();
    }
    assert_eq!(c.status(), GameStatus::Stopped);
    c
}

// ── commands ──────────────────────────────────────────────────────────────────

#[test]
fn new_game_is_running() {
    let c = Controller::new(Variant::Classic);
    assert!(c.is_running());
    assert_eq!(c.state().hero, Entity::new(HERO_SPAWN_X, HERO_SPAWN_Y));
}

#[test]
fn hero_clamps_left_and_right() {
    let mut c = Controller::with_rng(Variant::Classic, never_spawn());
    for _ in 0..20 {
        c.handle(Command::MoveLeft);
    }
    assert_eq!(c.state().hero.x, 0);
    for _ in 0..30 {
        c.handle(Command::MoveRight);
    }
    assert_eq!(c.state().hero.x, SCREEN_WIDTH - CELL_SIZE);
}

#[test]
fn classic_ignores_vertical_moves() {
    let mut c = Controller::with_rng(Variant::Classic, never_spawn());
    assert!(!c.handle(Command::MoveUp));
    assert!(!c.handle(Command::MoveDown));
    assert_eq!(c.state().hero.y, HERO_SPAWN_Y);
}

#[test]
fn free_move_goes_up_and_down() {
    let mut c = Controller::with_rng(Variant::FreeMove, never_spawn());
    assert!(c.handle(Command::MoveUp));
    assert_eq!(c.state().hero.y, HERO_SPAWN_Y - CELL_SIZE);
    for _ in 0..10 {
        c.handle(Command::MoveDown);
    }
    assert_eq!(c.state().hero.y, SCREEN_HEIGHT - CELL_SIZE);
    for _ in 0..40 {
        c.handle(Command::MoveUp);
    }
    assert_eq!(c.state().hero.y, 0);
}

#[test]
fn fire_spawns_bullet_at_hero() {
    let mut c = Controller::with_rng(Variant::Classic, never_spawn());
    c.handle(Command::MoveLeft);
    assert!(c.handle(Command::Fire));
    assert_eq!(c.state().bullets, vec![Entity::new(176, 448)]);
}

#[test]
fn shooting_a_fresh_row_scores() {
    let mut c = Controller::with_rng(Variant::Classic, always_spawn());
    for _ in 0..100 {
        c.tick();
    }
    assert_eq!(c.state().enemies.len(), 24);

    c.handle(Command::Fire);
    for _ in 0..25 {
        c.tick();
    }
    assert_eq!(c.state().score, 1);
    assert_eq!(c.state().enemies.len(), 23);
    assert!(c.state().bullets.is_empty());
}

#[test]
fn double_shot_in_one_frame_spends_both_bullets() {
    let mut c = Controller::with_rng(Variant::Classic, always_spawn());
    for _ in 0..100 {
        c.tick();
    }
    c.handle(Command::Fire);
    c.handle(Command::Fire);
    for _ in 0..25 {
        c.tick();
    }
    assert_eq!(c.state().score, 2);
    assert_eq!(c.state().enemies.len(), 23);
    assert!(c.state().bullets.is_empty());
}

// ── stop ──────────────────────────────────────────────────────────────────────

#[test]
fn stopped_game_reports_game_over() {
    let c = stopped_game();
    assert!(c.state().enemies.iter().any(|e| e.y == c.state().hero.y));
}

#[test]
fn stopped_game_ignores_commands_and_ticks() {
    let mut c = stopped_game();
    let frozen = c.state().clone();
    for command in [
        Command::MoveLeft,
        Command::MoveRight,
        Command::MoveUp,
        Command::MoveDown,
        Command::Fire,
    ] {
        assert!(!c.handle(command));
    }
    for _ in 0..500 {
        c.tick();
    }
    assert_eq!(*c.state(), frozen);
}

// ── restart ───────────────────────────────────────────────────────────────────

#[test]
fn restart_from_stopped_resets_everything() {
    let mut c = stopped_game();
    assert!(c.handle(Command::Restart));

    let s = c.state();
    assert_eq!(s.status, GameStatus::Running);
    assert_eq!(s.score, 0);
    assert_eq!(s.tick_counter, 0);
    assert!(s.bullets.is_empty());
    assert!(s.enemies.is_empty());
    assert_eq!(s.hero, Entity::new(HERO_SPAWN_X, HERO_SPAWN_Y));

    // commands are live again
    assert!(c.handle(Command::MoveLeft));
    assert_eq!(c.state().hero.x, HERO_SPAWN_X - CELL_SIZE);
}

#[test]
fn restart_while_running_still_resets() {
    let mut c = Controller::with_rng(Variant::FreeMove, always_spawn());
    c.handle(Command::MoveUp);
    c.handle(Command::Fire);
    for _ in 0..150 {
        c.tick();
    }
    assert!(c.is_running());
    assert!(!c.state().enemies.is_empty());

    c.restart();
    assert_eq!(c.state().hero, Entity::new(HERO_SPAWN_X, HERO_SPAWN_Y));
    assert!(c.state().enemies.is_empty());
    assert_eq!(c.state().tick_counter, 0);
}

// ── properties ────────────────────────────────────────────────────────────────

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::MoveLeft),
        Just(Command::MoveRight),
        Just(Command::MoveUp),
        Just(Command::MoveDown),
    ]
}

proptest! {
    #[test]
    fn hero_stays_on_board(commands in prop::collection::vec(command_strategy(), 0..200)) {
        for variant in [Variant::Classic, Variant::FreeMove] {
            let mut c = Controller::with_rng(variant, never_spawn());
            for command in &commands {
                c.handle(*command);
                let hero = c.state().hero;
                prop_assert!((0..=SCREEN_WIDTH - CELL_SIZE).contains(&hero.x));
                prop_assert!((0..=SCREEN_HEIGHT - CELL_SIZE).contains(&hero.y));
                prop_assert_eq!(hero.x % CELL_SIZE, 0);
                prop_assert_eq!(hero.y % CELL_SIZE, 0);
            }
        }
    }

    #[test]
    fn score_never_decreases(
        seed in any::<u64>(),
        steps in prop::collection::vec(0u8..4, 0..600),
    ) {
        let mut c = Controller::with_rng(Variant::Classic, StdRng::seed_from_u64(seed));
        let mut last = 0;
        for step in steps {
            match step {
                0 => { c.handle(Command::MoveLeft); }
                1 => { c.handle(Command::MoveRight); }
                2 => { c.handle(Command::Fire); }
                _ => {}
            }
            c.tick();
            prop_assert!(c.state().score >= last);
            last = c.state().score;
        }
    }
}
