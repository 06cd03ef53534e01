//! Interactive conversion form.
//!
//! The `App` owns a [`Session`] and the form state. Three fuzzy pickers
//! (category, from, to) and a value field feed
//! [`Session::convert_and_record`]; the history panel shows the most recent
//! records of that session only.
//!
//! Rendering happens only when state is dirty, or every 100ms so terminal
//! resizes are picked up.

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::picker::Picker;
use super::rendering::{RenderState, render_ui};
use crate::clipboard::copy_to_clipboard;
use crate::config::Config;
use crate::convert::parse_value;
use crate::history::Session;
use crate::table::{list_categories, list_units};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Longest accepted value input
const MAX_VALUE_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Field receiving keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Category,
    From,
    To,
    Value,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Category => Focus::From,
            Focus::From => Focus::To,
            Focus::To => Focus::Value,
            Focus::Value => Focus::Category,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Category => Focus::Value,
            Focus::From => Focus::Category,
            Focus::To => Focus::From,
            Focus::Value => Focus::To,
        }
    }
}

pub struct App {
    session: Session,
    precision: usize,
    history_limit: usize,
    category: Picker,
    from: Picker,
    to: Picker,
    // Category the unit pickers were built for
    active_category: Option<String>,
    value_input: String,
    focus: Focus,
    result_text: Option<String>,
    status_message: Option<StatusMessage>,
    should_quit: bool,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut category = Picker::new("Category", list_categories());
        category.select(&config.default_category);

        let mut app = Self {
            session: Session::new(),
            precision: config.precision,
            history_limit: config.history_limit,
            category,
            from: Picker::new("From", Vec::<String>::new()),
            to: Picker::new("To", Vec::<String>::new()),
            active_category: None,
            value_input: String::new(),
            focus: Focus::Value,
            result_text: None,
            status_message: None,
            should_quit: false,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        };
        app.sync_units();
        app
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn check_and_clear_expired_status(&mut self) {
        let expired =
            self.status_message.as_ref().is_some_and(|msg| Instant::now() >= msg.expires_at);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    /// Rebuild the unit pickers when the selected category changed
    fn sync_units(&mut self) {
        let selected = self.category.selected_item().map(str::to_string);
        if selected == self.active_category {
            return;
        }

        let units = match selected.as_deref() {
            Some(name) => list_units(name).unwrap_or_default(),
            None => Vec::new(),
        };
        self.from = Picker::new("From", units.iter().copied());
        self.to = Picker::new("To", units.iter().copied());
        // Default to a distinct destination unit
        self.to.move_selection(1);

        tracing::debug!(category = ?selected, units = units.len(), "unit pickers rebuilt");
        self.active_category = selected;
        self.result_text = None;
        self.needs_redraw = true;
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();

            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_millis(100)
            {
                let state = self.render_state();
                terminal.draw(|f| render_ui(f, &state))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn render_state(&self) -> RenderState<'_> {
        RenderState {
            category: &self.category,
            from: &self.from,
            to: &self.to,
            focus: self.focus,
            value_input: &self.value_input,
            result_text: self.result_text.as_deref(),
            history: self.session.recent_history(self.history_limit),
            history_limit: self.history_limit,
            precision: self.precision,
            status_message: self.status_message.as_ref(),
        }
    }

    fn focused_picker(&mut self) -> Option<&mut Picker> {
        match self.focus {
            Focus::Category => Some(&mut self.category),
            Focus::From => Some(&mut self.from),
            Focus::To => Some(&mut self.to),
            Focus::Value => None,
        }
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Escape => self.escape(),
            Action::NextField => {
                self.focus = self.focus.next();
                self.needs_redraw = true;
            }
            Action::PrevField => {
                self.focus = self.focus.prev();
                self.needs_redraw = true;
            }
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::Input(c) => self.input(c),
            Action::DeleteChar => self.delete_char(),
            Action::Submit => self.submit(),
            Action::CopyResult => self.copy_result(),
            Action::None => {}
        }
    }

    fn escape(&mut self) {
        let cleared = if self.focus == Focus::Value {
            let had_input = !self.value_input.is_empty();
            self.value_input.clear();
            had_input
        } else {
            self.focused_picker().is_some_and(|picker| picker.clear_query())
        };

        if cleared {
            self.sync_units();
            self.needs_redraw = true;
        } else {
            self.should_quit = true;
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if let Some(picker) = self.focused_picker()
            && picker.move_selection(delta)
        {
            self.sync_units();
            self.needs_redraw = true;
        }
    }

    fn input(&mut self, c: char) {
        match self.focused_picker() {
            Some(picker) => picker.push_char(c),
            None => {
                if !(c.is_ascii_digit() || c == '.') {
                    self.set_status(
                        format!("✗ '{}' is not part of a number", c),
                        MessageType::Error,
                        STATUS_ERROR_DURATION_MS,
                    );
                    return;
                }
                if self.value_input.len() < MAX_VALUE_LEN {
                    self.value_input.push(c);
                }
            }
        }
        self.sync_units();
        self.needs_redraw = true;
    }

    fn delete_char(&mut self) {
        let changed = match self.focused_picker() {
            Some(picker) => picker.pop_char(),
            None => self.value_input.pop().is_some(),
        };
        if changed {
            self.sync_units();
            self.needs_redraw = true;
        }
    }

    fn submit(&mut self) {
        let (Some(category), Some(from), Some(to)) =
            (self.category.selected_item(), self.from.selected_item(), self.to.selected_item())
        else {
            self.set_status(
                "✗ Select a category and both units",
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            );
            return;
        };
        let (category, from, to) = (category.to_string(), from.to_string(), to.to_string());

        let outcome = parse_value(&self.value_input)
            .and_then(|value| self.session.convert_and_record(value, &from, &to, &category))
            .map(|record| record.result_text(self.precision));

        match outcome {
            Ok(text) => {
                self.result_text = Some(text);
                self.set_status("✓ Converted", MessageType::Success, STATUS_SUCCESS_DURATION_MS);
            }
            Err(e) => {
                self.set_status(format!("✗ {}", e), MessageType::Error, STATUS_ERROR_DURATION_MS);
            }
        }
    }

    fn copy_result(&mut self) {
        let Some(text) = self.result_text.clone() else {
            self.set_status("✗ No result to copy", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        };

        match copy_to_clipboard(&text) {
            Ok(()) => self.set_status(
                "✓ Copied to clipboard",
                MessageType::Success,
                STATUS_SUCCESS_DURATION_MS,
            ),
            Err(e) => self.set_status(
                format!("✗ Clipboard error: {}", e),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            ),
        }
    }
}
