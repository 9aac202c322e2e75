//! Startup, the blocking event loop, and clean shutdown.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use crossterm::event::{self, Event};
use crossterm::terminal;

use rpncalc::consts::{MIN_TERM_HEIGHT, MIN_TERM_WIDTH};
use rpncalc::display::TermScreen;
use rpncalc::error::InitError;
use rpncalc::input::{convert_key_event, InputController};
use rpncalc::terminal::TerminalGuard;

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rpncalc: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    preflight()?;

    let mut guard = TerminalGuard::enter()
        .map_err(InitError::Terminal)
        .context("entering raw mode")?;
    let mut screen = TermScreen::new(io::stdout());
    screen.init().map_err(InitError::Terminal)?;

    let mut controller = InputController::new();
    controller.repaint(&mut screen)?;
    log::info!("entering main loop");

    // One blocking read per iteration; each key is fully processed and the
    // screen flushed before the next read starts.
    loop {
        match event::read()? {
            Event::Key(key) => {
                let input = convert_key_event(&key);
                if !controller.handle_key(input, &mut screen)? {
                    break;
                }
            }
            Event::Resize(cols, rows) => {
                log::debug!("resize to {cols}x{rows} ignored; layout is fixed");
            }
            _ => {}
        }
    }

    guard.restore()?;
    log::info!("terminal restored, exiting");
    Ok(())
}

/// Fail before touching the terminal when the fixed layout cannot fit.
fn preflight() -> Result<(), InitError> {
    let (cols, rows) = terminal::size()?;
    if cols < MIN_TERM_WIDTH || rows < MIN_TERM_HEIGHT {
        return Err(InitError::TerminalTooSmall {
            cols,
            rows,
            min_cols: MIN_TERM_WIDTH,
            min_rows: MIN_TERM_HEIGHT,
        });
    }
    Ok(())
}
