use std::io::{self, Stdout, Write};
use std::mem;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Size;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};

/// What the UI loop needs from a terminal. Tests implement it over
/// ratatui's `TestBackend`.
pub(crate) trait TerminalSurface {
    fn size(&self) -> io::Result<Size>;

    fn clear(&mut self) -> io::Result<()>;

    fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>);
}

/// Terminal modes switched on for the journal. Each flag is set only once
/// its step succeeded, and `undo` reverts them newest first.
#[derive(Debug, Default)]
struct JournalModes {
    raw: bool,
    alternate_screen: bool,
    cursor_hidden: bool,
}

impl JournalModes {
    fn apply(&mut self, out: &mut impl Write) -> AppResult<()> {
        enable_raw_mode()
            .map_err(|source| AppError::io_with_context(source, "failed to enable raw mode"))?;
        self.raw = true;

        execute!(out, EnterAlternateScreen).map_err(|source| {
            AppError::io_with_context(source, "failed to enter the alternate screen")
        })?;
        self.alternate_screen = true;

        execute!(out, Hide)
            .map_err(|source| AppError::io_with_context(source, "failed to hide the cursor"))?;
        self.cursor_hidden = true;
        Ok(())
    }

    /// Reverts every applied mode, even after one step fails; the first
    /// failure is returned.
    fn undo(&mut self, out: &mut impl Write) -> io::Result<()> {
        let mut first_err = None;
        if mem::take(&mut self.cursor_hidden) {
            keep_first(&mut first_err, execute!(out, Show));
        }
        if mem::take(&mut self.alternate_screen) {
            keep_first(&mut first_err, execute!(out, LeaveAlternateScreen));
        }
        if mem::take(&mut self.raw) {
            keep_first(&mut first_err, disable_raw_mode());
        }
        first_err.map_or(Ok(()), Err)
    }

    fn any_applied(&self) -> bool {
        self.raw || self.alternate_screen || self.cursor_hidden
    }
}

fn keep_first(slot: &mut Option<io::Error>, result: io::Result<()>) {
    if let Err(err) = result
        && slot.is_none()
    {
        *slot = Some(err);
    }
}

/// The real terminal while the journal is open. Dropping it puts the
/// terminal back the way it was, also on an error path.
pub(crate) struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    modes: JournalModes,
}

impl TerminalSession {
    pub(crate) fn enter() -> AppResult<Self> {
        let mut modes = JournalModes::default();
        let mut stdout = io::stdout();
        if let Err(err) = modes.apply(&mut stdout) {
            let _ = modes.undo(&mut stdout);
            return Err(err);
        }

        let terminal = Terminal::new(CrosstermBackend::new(stdout)).and_then(|mut terminal| {
            terminal.clear()?;
            Ok(terminal)
        });
        match terminal {
            Ok(terminal) => {
                debug!("journal modes applied");
                Ok(Self { terminal, modes })
            }
            Err(err) => {
                let _ = modes.undo(&mut io::stdout());
                Err(err.into())
            }
        }
    }

    pub(crate) fn restore(&mut self) -> io::Result<()> {
        if !self.modes.any_applied() {
            return Ok(());
        }
        self.modes.undo(self.terminal.backend_mut())
    }
}

impl TerminalSurface for TerminalSession {
    fn size(&self) -> io::Result<Size> {
        self.terminal.size()
    }

    fn clear(&mut self) -> io::Result<()> {
        self.terminal.clear()
    }

    fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        self.terminal.draw(render).map(|_| ())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(error = %err, "terminal not fully restored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::JournalModes;

    #[test]
    fn undo_without_applied_modes_writes_nothing() {
        let mut out = Vec::new();
        let mut modes = JournalModes::default();

        modes.undo(&mut out).expect("nothing to undo");

        assert!(out.is_empty());
        assert!(!modes.any_applied());
    }

    #[test]
    fn undo_reverts_screen_modes_once() {
        let mut out = Vec::new();
        let mut modes = JournalModes {
            raw: false,
            alternate_screen: true,
            cursor_hidden: true,
        };

        modes.undo(&mut out).expect("screen modes revert");
        let written = out.len();
        assert!(written > 0);
        assert!(!modes.any_applied());

        modes.undo(&mut out).expect("second undo is a no-op");
        assert_eq!(out.len(), written);
    }
}
