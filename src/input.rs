//! Input adapter: terminal events in, controller commands out.
//!
//! Keyboard presses and key repeats both count (a held arrow keeps moving,
//! as OS key-repeat does in a browser).  Left clicks are hit-tested against
//! the on-screen widgets for the active variant.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::{Variant, CELL_SIZE};
use crate::controller::Command;
use crate::scene::widgets;

/// Terminal columns used to draw one board cell (rows map 1:1).
pub const COLUMNS_PER_CELL: u16 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Game(Command),
    Quit,
}

#[derive(Clone, Copy, Debug)]
pub struct InputAdapter {
    variant: Variant,
}

impl InputAdapter {
    pub fn new(variant: Variant) -> Self {
        InputAdapter { variant }
    }

    pub fn translate(&self, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key) => self.translate_key(key),
            Event::Mouse(mouse) => self.translate_mouse(mouse),
            _ => None,
        }
    }

    fn translate_key(&self, key: &KeyEvent) -> Option<Action> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let vertical = self.variant.allows_vertical();
        let command = match key.code {
            KeyCode::Left => Command::MoveLeft,
            KeyCode::Right => Command::MoveRight,
            KeyCode::Up if vertical => Command::MoveUp,
            KeyCode::Down if vertical => Command::MoveDown,
            KeyCode::Char(' ') => Command::Fire,
            KeyCode::Char('r') | KeyCode::Char('R') => Command::Restart,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(Action::Quit)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Some(Action::Quit),
            _ => return None,
        };
        Some(Action::Game(command))
    }

    fn translate_mouse(&self, mouse: &MouseEvent) -> Option<Action> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let (px, py) = board_point(mouse.column, mouse.row);
        widgets(self.variant)
            .into_iter()
            .find(|w| w.contains(px, py))
            .map(|w| Action::Game(w.command))
    }
}

/// Top-left pixel of the board cell under terminal cell (`column`, `row`).
pub fn board_point(column: u16, row: u16) -> (i32, i32) {
    (
        (column / COLUMNS_PER_CELL) as i32 * CELL_SIZE,
        row as i32 * CELL_SIZE,
    )
}
