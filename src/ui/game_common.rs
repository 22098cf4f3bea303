//! Layout and widgets shared by the play field and the score board.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Rows reserved under the play field for the score and key hints.
const STATUS_ROWS: u16 = 2;

/// Regions of the play screen, inside the outer border.
///
/// ```text
/// ┌─ Flappy ────────────────────────┬─ Info ──────┐
/// │ field                           │ info        │
/// │                                 │             │
/// │ status (2 rows)                 │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayLayout {
    pub field: Rect,
    pub status: Rect,
    pub info: Rect,
}

impl PlayLayout {
    /// Split the bordered interior. The info column keeps its width until the
    /// field would drop below `min_field_width`.
    pub fn split(inner: Rect, info_width: u16, min_field_width: u16) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(min_field_width), Constraint::Length(info_width)])
            .split(inner);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(STATUS_ROWS)])
            .split(columns[0]);
        Self {
            field: rows[0],
            status: rows[1],
            info: columns[1],
        }
    }
}

/// Clear `area`, draw a titled border and return the interior.
pub fn bordered(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Centered message on the first row, key hints on the second.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    color: Color,
    controls: &[(&str, &str)],
) {
    if area.height == 0 {
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    frame.render_widget(
        Paragraph::new(message.to_string())
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        rows[0],
    );
    if rows[1].height > 0 && !controls.is_empty() {
        frame.render_widget(
            Paragraph::new(controls_line(controls)).alignment(Alignment::Center),
            rows[1],
        );
    }
}

/// Key hints such as `[R] Restart  [Q] Quit`, keys bright and actions dim.
pub fn controls_line(controls: &[(&str, &str)]) -> Line<'static> {
    let spans = controls
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let sep = (i > 0).then(|| Span::raw("  "));
            sep.into_iter().chain([
                Span::styled(key.to_string(), Style::default().fg(Color::White)),
                Span::styled(format!(" {}", action), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

/// A ` Label: value` line for the info column.
pub fn labeled_value(label: &str, value: String, value_color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(value_color)),
    ])
}
