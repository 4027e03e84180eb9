//! Terminal rendering for Dino Run.

pub mod game_common;
pub mod runner_scene;
pub mod sprites;

use crate::runner::RunnerGame;
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub use runner_scene::render_runner_scene;

const MIN_WIDTH: u16 = 60;
const MIN_HEIGHT: u16 = 12;

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, game: &RunnerGame, now_ms: u64) {
    let size = frame.size();

    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        let msg = Paragraph::new(format!(
            "Terminal too small ({}x{}), need {}x{}",
            size.width, size.height, MIN_WIDTH, MIN_HEIGHT
        ))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
        frame.render_widget(msg, size);
        return;
    }

    render_runner_scene(frame, size, game, now_ms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::TimingMode;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw_text(width: u16, height: u16) -> String {
        let game = RunnerGame::new(TimingMode::default(), 0);
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw_ui(f, &game, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_small_terminal_warning() {
        assert!(draw_text(40, 10).contains("Terminal too small"));
    }

    #[test]
    fn test_full_scene_drawn() {
        let text = draw_text(100, 24);
        assert!(text.contains("Dino Run"));
        assert!(text.contains("Score: 0"));
    }
}
