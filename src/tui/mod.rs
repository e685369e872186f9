//! Terminal UI for five-in-a-row.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use input::move_cursor;
pub use ui::draw;

use crate::settings::{Palette, Settings};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(settings: &Settings) -> Result<()> {
    let palette = settings.palette()?;

    info!("Starting five-in-a-row TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(*settings.show_history());
    let res = run_app(&mut terminal, app, &palette);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");

    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    palette: &Palette,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app, palette))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
