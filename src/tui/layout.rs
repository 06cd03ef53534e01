use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Form layout:
/// - Category / From / To pickers side by side (top)
/// - Value input and result (3 rows)
/// - History panel sized to the display limit
/// - Status bar (bottom row)
pub struct AppLayout {
    pub category_area: Rect,
    pub from_area: Rect,
    pub to_area: Rect,
    pub value_area: Rect,
    pub result_area: Rect,
    pub history_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Rows used by everything except the history entries: picker minimum,
    /// input row, history borders and status bar
    pub const FIXED_ROWS: u16 = 5 + 3 + 2 + 1;

    pub fn new(area: Rect, history_rows: u16) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),                                 // Pickers
                Constraint::Length(3),                              // Value + result
                Constraint::Length(history_rows.saturating_add(2)), // History (+ borders)
                Constraint::Length(1),                              // Status bar
            ])
            .split(area);

        let pickers = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Percentage(35),
                Constraint::Percentage(35),
            ])
            .split(rows[0]);

        let input_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(rows[1]);

        Self {
            category_area: pickers[0],
            from_area: pickers[1],
            to_area: pickers[2],
            value_area: input_row[0],
            result_area: input_row[1],
            history_area: rows[2],
            status_area: rows[3],
        }
    }
}
