mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal, ExecutableCommand,
};

use pixel_rain::config::{Variant, FRAME};
use pixel_rain::controller::Controller;
use pixel_rain::input::{Action, InputAdapter};

// ── Menu ──────────────────────────────────────────────────────────────────────

enum MenuResult {
    Start(Variant),
    Quit,
}

fn show_menu<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<MenuResult> {
    display::draw_menu(out)?;

    // Block until the user makes a choice
    loop {
        let Ok(event) = rx.recv() else {
            return Ok(MenuResult::Quit);
        };
        if let Event::Key(KeyEvent { code, modifiers, .. }) = event {
            match code {
                KeyCode::Char('1') => return Ok(MenuResult::Start(Variant::Classic)),
                KeyCode::Char('2') => return Ok(MenuResult::Start(Variant::FreeMove)),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(MenuResult::Quit);
                }
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs one game until the player quits back to the menu.
///
/// All pending input is applied before the frame's tick, so a command is
/// always visible to the next fail check and never lands mid-tick.
fn game_loop<W: Write>(
    out: &mut W,
    controller: &mut Controller,
    rx: &mpsc::Receiver<Event>,
    mouse: bool,
) -> std::io::Result<()> {
    let adapter = InputAdapter::new(controller.variant());

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(event) = rx.try_recv() {
            match adapter.translate(&event) {
                Some(Action::Quit) => return Ok(()),
                Some(Action::Game(command)) => {
                    controller.handle(command);
                }
                None => {}
            }
        }

        if controller.is_running() {
            controller.tick();
        }

        display::render(out, controller.state(), controller.variant(), mouse)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)
        .context("entering alternate screen")?;
    out.execute(cursor::Hide)?;
    let mouse = out.execute(EnableMouseCapture).is_ok();
    if !mouse {
        log::warn!("mouse capture unavailable, on-screen buttons hidden");
    }

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(err) => {
                log::error!("input thread stopped: {err}");
                break;
            }
        }
    });

    let result = run(&mut out, &rx, mouse);

    // Always restore the terminal
    if mouse {
        let _ = out.execute(DisableMouseCapture);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("terminal I/O failed")
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, mouse: bool) -> std::io::Result<()> {
    loop {
        match show_menu(out, rx)? {
            MenuResult::Quit => break,
            MenuResult::Start(variant) => {
                let mut controller = Controller::new(variant);
                game_loop(out, &mut controller, rx, mouse)?;
                log::info!("left game with score {}", controller.state().score);
            }
        }
    }
    Ok(())
}
