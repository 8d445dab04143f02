use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::app::App;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Raw-mode alternate screen that is restored when dropped, so an early `?`
/// in the draw loop still hands the user back a usable shell.
struct Screen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Screen {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("could not switch the terminal to raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("could not open the alternate screen")?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))
            .context("could not attach the ratatui backend")?;
        Ok(Self { terminal })
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            log::warn!("leaving raw mode failed: {err}");
        }
        if let Err(err) = execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            log::warn!("leaving the alternate screen failed: {err}");
        }
        if let Err(err) = self.terminal.show_cursor() {
            log::warn!("restoring the cursor failed: {err}");
        }
    }
}

/// Draw the current view, wait for input, repeat until a quit key arrives.
pub fn run_app(app: &mut App) -> Result<()> {
    let mut screen = Screen::enter()?;

    loop {
        screen
            .terminal
            .draw(|frame| app.draw(frame))
            .context("failed to draw frame")?;

        if !event::poll(POLL_INTERVAL).context("event polling failed")? {
            continue;
        }
        let event = event::read().context("failed to read event")?;
        if dispatch(app, &event) {
            log::info!("quit requested");
            return Ok(());
        }
    }
}

/// Forward key presses to the app; releases, repeats and non-key events are
/// ignored. Returns `true` when the app asked to quit.
fn dispatch(app: &mut App, event: &Event) -> bool {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
        _ => false,
    }
}
