//! kotonote-tui - TUI frontend for kotonote using Ratatui

pub mod app;
pub mod components;
pub mod empty_state;
pub mod tabs;
pub mod theme;
pub mod ui;

pub use app::App;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use kotonote_core::{ColorScheme, NotebookSession};
use ratatui::prelude::*;
use std::io;
use std::time::Duration;

/// Run the TUI application
pub async fn run(session: NotebookSession, color_scheme: ColorScheme) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session, color_scheme);
    let mut ui = ui::Ui::new();

    // Populate the cache once up front; a dead store degrades to a
    // banner instead of aborting the session
    app.session.entries_or_degraded().await;

    let result = run_loop(&mut terminal, &mut app, &mut ui).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    ui: &mut ui::Ui,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        // F5 drops the cache and re-reads the store
        if app.needs_refresh {
            app.session.invalidate();
            app.session.entries_or_degraded().await;
            app.needs_refresh = false;
        }

        terminal.draw(|f| ui.render(f, app))?;

        // Poll with a timeout so toast expiry still repaints
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    // Active tab first; global keys only see what it ignored
                    let consumed = ui.handle_key(key.code, app).await;
                    if !consumed {
                        app.handle_key(key.code);
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
