//! Play-field rendering.
//!
//! The world is sampled at each terminal cell's center, so whatever the
//! terminal size the picture matches the collision geometry the simulation
//! used (with the usual squash from non-square cells).

use crate::game::FrameSnapshot;
use crate::ui::game_common::{bordered, labeled_value, render_status_bar, PlayLayout};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CONTROLS: &[(&str, &str)] = &[("[Space/Up]", "Flap"), ("[Q/Esc]", "Quit")];
const INFO_WIDTH: u16 = 20;
const MIN_FIELD_WIDTH: u16 = 20;

/// What occupies one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Sky,
    Pipe,
    Ground,
    Bird,
    /// Bird center cell; shows which way it is heading.
    BirdHead,
    /// The bird is above the top of the screen, in this column.
    OffscreenMarker,
}

/// Render the play scene for one frame.
pub fn render_flappy(frame: &mut Frame, area: Rect, snapshot: &FrameSnapshot) {
    let inner = bordered(frame, area, " Flappy ", Color::Cyan);
    let layout = PlayLayout::split(inner, INFO_WIDTH, MIN_FIELD_WIDTH);

    render_play_area(frame, layout.field, snapshot);
    render_status_bar(
        frame,
        layout.status,
        &format!("Score: {}", snapshot.score),
        Color::Green,
        CONTROLS,
    );
    render_info_panel(frame, layout.info, snapshot);
}

/// Classify every cell of a `width` x `height` view of the world, row by row.
pub fn rasterize(snapshot: &FrameSnapshot, width: u16, height: u16) -> Vec<Vec<Cell>> {
    let (width, height) = (width as usize, height as usize);
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let cell_w = snapshot.world_width / width as f64;
    let cell_h = snapshot.world_height / height as f64;
    let to_col = |wx: f64| (wx / cell_w).floor();
    let to_row = |wy: f64| (wy / cell_h).floor();

    let avatar = snapshot.avatar;
    let head_col = to_col(avatar.x + avatar.width / 2.0);
    let head_row = to_row(avatar.y + avatar.height / 2.0);

    let mut grid = vec![vec![Cell::Sky; width]; height];
    for (row, cells) in grid.iter_mut().enumerate() {
        let wy = (row as f64 + 0.5) * cell_h;
        for (col, cell) in cells.iter_mut().enumerate() {
            let wx = (col as f64 + 0.5) * cell_w;
            *cell = if col as f64 == head_col && row as f64 == head_row {
                Cell::BirdHead
            } else if avatar.contains(wx, wy) {
                Cell::Bird
            } else if snapshot.ground.contains(wx, wy) {
                Cell::Ground
            } else if snapshot.obstacles.iter().any(|r| r.contains(wx, wy)) {
                Cell::Pipe
            } else {
                Cell::Sky
            };
        }
    }

    if avatar.bottom() <= 0.0 && head_col >= 0.0 && (head_col as usize) < width {
        grid[0][head_col as usize] = Cell::OffscreenMarker;
    }

    grid
}

fn bird_glyph(velocity: f64) -> &'static str {
    if velocity < -2.0 {
        "▲"
    } else if velocity > 4.0 {
        "▼"
    } else {
        "►"
    }
}

fn render_play_area(frame: &mut Frame, area: Rect, snapshot: &FrameSnapshot) {
    let grid = rasterize(snapshot, area.width, area.height);
    let bird_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = grid
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|cell| match cell {
                    Cell::Sky => Span::raw(" "),
                    Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                    Cell::Ground => Span::styled("▒", Style::default().fg(Color::Gray)),
                    Cell::Bird => Span::styled("▓", Style::default().fg(Color::Yellow)),
                    Cell::BirdHead => {
                        Span::styled(bird_glyph(snapshot.avatar_velocity), bird_style)
                    }
                    Cell::OffscreenMarker => Span::styled("^", bird_style),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &FrameSnapshot) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let lines = vec![
        Line::from(Span::styled(
            format!(" Score: {}", snapshot.score),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        labeled_value("Level", snapshot.level.to_string(), Color::Yellow),
        labeled_value("Gap", snapshot.gap.to_string(), Color::Green),
        labeled_value("Spacing", snapshot.spacing.to_string(), Color::Green),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
