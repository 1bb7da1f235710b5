//! JobPilot - Terminal Job Board
//!
//! A terminal client for the JobPilot job board. Shows the featured job
//! listings and the testimonial showcase on the home screen, and offers a
//! registration form wired to the remote API.

use std::io;
use std::time::{Duration, Instant};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

mod domain;
mod application;
mod infrastructure;
mod presentation;

use application::{App, AppMode};
use infrastructure::{ApiClient, SessionStore, DEFAULT_SESSION_FILE};
use presentation::{render_ui, InputHandler};

/// Poll timeout when no carousel deadline is closer.
const IDLE_TICK: Duration = Duration::from_millis(250);

/// Entry point for the JobPilot terminal client.
///
/// Sets up the terminal interface, restores a persisted session if one
/// exists, and runs the main event loop until the user quits. An optional
/// first argument is treated as the opaque entry hint, e.g.
/// `jobpilot redirect=/jobs`.
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there are issues
/// with the terminal interface during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let entry_hint = std::env::args().nth(1).unwrap_or_default();
    let api = ApiClient::from_env();

    let mut app = App::new(&entry_hint);
    if let Ok(user) = SessionStore::load(DEFAULT_SESSION_FILE) {
        app.session = Some(user);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, &api);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Renders the current snapshot, waits for keyboard input up to the next
/// carousel deadline, and drives the time-based work: the autoplay timer,
/// the job fetch, and an in-flight registration. A newly signed-in identity
/// is persisted for the next run.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    api: &ApiClient,
) -> io::Result<()> {
    loop {
        if app.take_pending_fetch() {
            let client = api.clone();
            app.jobs.start(move || client.fetch_jobs());
        }

        terminal.draw(|f| render_ui(f, app))?;

        let timeout = app
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .map(|until_due| until_due.min(IDLE_TICK))
            .unwrap_or(IDLE_TICK);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') if matches!(app.mode, AppMode::Browse) => return Ok(()),
                        _ => InputHandler::handle_key_event(app, api, key.code, key.modifiers),
                    }
                }
            }
        }

        if let Some(user) = app.on_tick(Instant::now()) {
            let _ = SessionStore::save(&user, DEFAULT_SESSION_FILE);
        }
    }
}
