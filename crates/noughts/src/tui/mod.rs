//! Terminal UI: renders the board and turns mouse and keyboard input into moves.

mod app;
mod input;
mod layout;
mod ui;

pub use app::App;
pub use input::{Cursor, Input, translate};
pub use layout::{BoardLayout, ScreenLayout};
pub use ui::draw;

use crate::{AppConfig, Palette};
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

/// Runs the interactive game until the player quits.
///
/// The terminal is restored on every exit path.
#[instrument(skip_all, fields(frame_rate = *config.frame_rate()))]
pub fn run_tui(config: &AppConfig, palette: Palette) -> Result<()> {
    info!("Starting noughts TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(palette, config.frame_duration());
    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}
