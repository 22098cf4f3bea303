//! Top-scores board shown between rounds.

use crate::session::ScoreBoard;
use crate::ui::game_common::controls_line;
use crate::utils::build_info;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Block, Borders, Clear, Paragraph,
    },
    Frame,
};

const CONTROLS: &[(&str, &str)] = &[("[R]", "Restart"), ("[Q]", "Quit")];

/// Render the board full-screen.
pub fn render_scoreboard(frame: &mut Frame, area: Rect, board: &ScoreBoard) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Top Scores ")
        .title(
            Title::from(format!(" {} ", build_info::version_label()))
                .position(Position::Bottom)
                .alignment(Alignment::Right),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = scoreboard_lines(board);
    let content_height = lines.len() as u16;
    let y_offset = inner.y + inner.height.saturating_sub(content_height) / 2;
    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(
        text,
        Rect::new(
            inner.x,
            y_offset,
            inner.width,
            content_height.min(inner.height),
        ),
    );
}

/// Board contents, top to bottom.
pub fn scoreboard_lines(board: &ScoreBoard) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "CRASH!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {}", board.final_score),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
    ];

    if board.top_scores.is_empty() {
        lines.push(Line::from(Span::styled(
            "No scores yet",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (i, score) in board.top_scores.iter().enumerate() {
        let place = i + 1;
        let style = if board.rank == Some(place) {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(
            format!("{}. {}", place, score),
            style,
        )));
    }

    if board.is_new_best {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "New best!",
            Style::default().fg(Color::Green),
        )));
    }

    lines.push(Line::from(""));
    lines.push(controls_line(CONTROLS));
    lines
}
