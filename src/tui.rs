//! Terminal setup and teardown for the pager demo.

use std::io::{self, Stdout};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

use crate::error::PagerError;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// An active terminal session; the terminal is restored when it is dropped.
pub struct Session {
    pub terminal: Tui,
}

impl Session {
    /// Switches to the alternate screen with raw mode and mouse capture.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::Io`] if the terminal cannot be configured.
    pub fn start() -> Result<Self, PagerError> {
        enable_raw_mode()?;
        let terminal = setup_or_restore(
            || {
                execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
                Terminal::new(CrosstermBackend::new(io::stdout()))
            },
            restore,
        )?;
        set_panic_hook();

        tracing::debug!("Terminal session started");
        Ok(Self { terminal })
    }
}

/// Runs `setup`, calling `restore` if it fails so raw mode is not left on.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    setup().inspect_err(|_| {
        if let Err(e) = restore() {
            tracing::warn!("Failed to restore terminal: {e}");
        }
    })
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Err(e) = restore() {
            tracing::warn!("Failed to restore terminal: {e}");
        }
    }
}

fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        hook(panic_info);
    }));
}

/// Leaves the alternate screen and disables raw mode.
///
/// # Errors
///
/// Returns the underlying IO error if the terminal cannot be reset.
pub fn restore() -> io::Result<()> {
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()
}
