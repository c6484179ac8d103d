//! The game controller: owns the state, takes commands, drives frames.
//!
//! Commands and ticks arrive through `&mut self`, so one can never run in the
//! middle of the other.  While stopped, only `Restart` is accepted and `tick`
//! does nothing.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::compute::{
    fire, init_state, move_hero_down, move_hero_left, move_hero_right, move_hero_up, tick,
};
use crate::config::Variant;
use crate::entities::{GameState, GameStatus};

/// Everything the input adapter can ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Fire,
    Restart,
}

pub struct Controller<R: Rng = StdRng> {
    state: GameState,
    variant: Variant,
    rng: R,
}

impl Controller<StdRng> {
    /// Controller seeded from the OS entropy source.
    pub fn new(variant: Variant) -> Self {
        Self::with_rng(variant, StdRng::from_entropy())
    }
}

impl<R: Rng> Controller<R> {
    pub fn with_rng(variant: Variant, rng: R) -> Self {
        info!("new game ({})", variant.label());
        Controller {
            state: init_state(),
            variant,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Apply one command.  Returns whether it was accepted.
    pub fn handle(&mut self, command: Command) -> bool {
        if command == Command::Restart {
            self.restart();
            return true;
        }
        if !self.is_running() {
            return false;
        }

        let vertical = self.variant.allows_vertical();
        self.state = match command {
            Command::MoveLeft => move_hero_left(&self.state),
            Command::MoveRight => move_hero_right(&self.state),
            Command::MoveUp if vertical => move_hero_up(&self.state),
            Command::MoveDown if vertical => move_hero_down(&self.state),
            Command::Fire => fire(&self.state),
            Command::MoveUp | Command::MoveDown | Command::Restart => return false,
        };
        true
    }

    /// Run one frame.  A no-op once stopped.
    pub fn tick(&mut self) {
        if !self.is_running() {
            return;
        }
        self.state = tick(&self.state, &mut self.rng);
        if !self.is_running() {
            info!("game over, score {}", self.state.score);
        }
    }

    /// Reset everything and resume, whatever the current status.
    pub fn restart(&mut self) {
        info!("restart (previous score {})", self.state.score);
        self.state = init_state();
    }
}
