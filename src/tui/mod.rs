//! Interactive conversion form
mod app;
mod events;
mod layout;
mod picker;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::App;
use terminal::TerminalGuard;

use crate::config::Config;

/// Run the interactive form until the user quits
pub fn run_interactive(config: &Config) -> Result<()> {
    let mut guard = TerminalGuard::enter()?;
    let mut app = App::new(config);

    let res = app.run(guard.terminal_mut());
    tracing::debug!(conversions = app.session().history().len(), "interactive session ended");

    guard.restore()?;
    res
}
