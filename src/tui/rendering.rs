use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::app::{Focus, MessageType, StatusMessage};
use super::layout::AppLayout;
use super::picker::Picker;
use crate::models::ConversionRecord;

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const ERROR: Color = Color::Rgb(239, 68, 68);
const BAR: Color = Color::Rgb(24, 24, 27);

/// Everything the form needs to draw one frame
pub struct RenderState<'a> {
    pub category: &'a Picker,
    pub from: &'a Picker,
    pub to: &'a Picker,
    pub focus: Focus,
    pub value_input: &'a str,
    pub result_text: Option<&'a str>,
    pub history: &'a [ConversionRecord],
    pub history_limit: usize,
    pub precision: usize,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire form
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();
    let history_rows = u16::try_from(state.history_limit)
        .unwrap_or(u16::MAX)
        .min(area.height.saturating_sub(AppLayout::FIXED_ROWS));
    let layout = AppLayout::new(area, history_rows);

    render_picker(frame, layout.category_area, state.category, state.focus == Focus::Category);
    render_picker(frame, layout.from_area, state.from, state.focus == Focus::From);
    render_picker(frame, layout.to_area, state.to, state.focus == Focus::To);
    render_value(frame, layout.value_area, state.value_input, state.focus == Focus::Value);
    render_result(frame, layout.result_area, state.result_text);
    render_history(frame, layout.history_area, state.history, state.precision);
    render_status_bar(frame, layout.status_area, state.status_message);
}

fn field_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused { ACCENT } else { MUTED };
    Block::default().borders(Borders::ALL).border_style(Style::default().fg(border)).title(title)
}

fn render_picker(frame: &mut Frame, area: Rect, picker: &Picker, focused: bool) {
    let title = if picker.query().is_empty() {
        format!(" {} ", picker.title())
    } else {
        format!(" {} [{}] ", picker.title(), picker.query())
    };

    let items: Vec<ListItem> =
        picker.visible().into_iter().map(|name| ListItem::new(name.to_string())).collect();

    let list = List::new(items)
        .block(field_block(title, focused))
        .style(Style::default().fg(MUTED))
        .highlight_style(Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD));

    let selected = picker.selected_item().map(|_| picker.selected_index());
    let mut list_state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_value(frame: &mut Frame, area: Rect, value_input: &str, focused: bool) {
    let mut spans = vec![Span::raw(value_input.to_string())];
    if focused {
        spans.push(Span::styled("_", Style::default().fg(ACCENT)));
    }
    let paragraph =
        Paragraph::new(Line::from(spans)).block(field_block(" Value ".to_string(), focused));
    frame.render_widget(paragraph, area);
}

fn render_result(frame: &mut Frame, area: Rect, result_text: Option<&str>) {
    let line = match result_text {
        Some(text) => Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled("Press Enter to convert", Style::default().fg(MUTED))),
    };
    let paragraph = Paragraph::new(line).block(field_block(" Result ".to_string(), false));
    frame.render_widget(paragraph, area);
}

fn render_history(frame: &mut Frame, area: Rect, history: &[ConversionRecord], precision: usize) {
    let items: Vec<ListItem> = history
        .iter()
        .map(|record| ListItem::new(record.format_with_precision(precision)))
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(MUTED))
        .block(field_block(" Conversion History ".to_string(), false));
    frame.render_widget(list, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, status_message: Option<&StatusMessage>) {
    let (text, style) = match status_message {
        Some(msg) => {
            let bg = match msg.message_type {
                MessageType::Success => ACCENT,
                MessageType::Error => ERROR,
            };
            (format!(" {} ", msg.text), Style::default().fg(BRIGHT).bg(bg))
        }
        None => (
            " Tab: next field | ↑↓: select | type: filter | Enter: convert | Ctrl+Y: copy | Ctrl+C: quit "
                .to_string(),
            Style::default().fg(BRIGHT).bg(BAR),
        ),
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}
