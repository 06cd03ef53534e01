use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode alternate screen for the lifetime of the value
pub struct TerminalGuard {
    terminal: CrosstermTerminal,
    restored: bool,
}

/// Disable raw mode and leave the alternate screen. Both steps always run;
/// the first failure is returned.
fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen);
    raw.and(screen)
}

impl TerminalGuard {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = leave_screen(&mut io::stdout());
                return Err(e).context("Failed to initialise terminal");
            }
        };
        tracing::debug!("entered alternate screen");

        Ok(Self { terminal, restored: false })
    }

    pub fn terminal_mut(&mut self) -> &mut CrosstermTerminal {
        &mut self.terminal
    }

    /// Leave the alternate screen, reporting the first failure. On failure
    /// the drop handler still retries the cleanup.
    pub fn restore(mut self) -> Result<()> {
        leave_screen(self.terminal.backend_mut())
            .and_then(|()| self.terminal.show_cursor())
            .context("Failed to restore terminal")?;
        self.restored = true;
        Ok(())
    }
}

// Also runs on panic and early return
impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        let _ = leave_screen(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
    }
}
