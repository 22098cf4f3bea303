pub mod flappy_scene;
pub mod game_common;
pub mod scoreboard_scene;

use crate::session::Screen;
use ratatui::Frame;

/// Draw whichever screen the session is on.
pub fn draw(frame: &mut Frame, screen: &Screen) {
    let area = frame.size();
    match screen {
        Screen::Playing(round) => flappy_scene::render_flappy(frame, area, &round.snapshot()),
        Screen::ScoreBoard(board) => scoreboard_scene::render_scoreboard(frame, area, board),
    }
}
