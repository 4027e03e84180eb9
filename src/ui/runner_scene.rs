//! Dino Run scene rendering.
//!
//! The play field is painted into an RGB pixel buffer in game units and then
//! packed two pixels per terminal row using `▀` (fg = top pixel, bg = bottom
//! pixel). The field keeps its 4:1 aspect ratio and is centered in the area.

use super::game_common::{
    create_game_layout, render_info_panel_frame, render_modal, render_status_bar,
};
use super::sprites::{actor_sprite, obstacle_sprite, PixelSprite};
use crate::core::constants::*;
use crate::runner::{GameOver, ObstacleKind, RunnerGame};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HALF_TOP: char = '\u{2580}'; // ▀

type Rgb = (u8, u8, u8);

const SKY: Rgb = (16, 18, 26);
const GROUND: Rgb = (139, 69, 19);
const GROUND_GRAIN: Rgb = (110, 54, 14);
const ACTOR_COLOR: Rgb = (0, 170, 0);
const CACTUS_COLOR: Rgb = (0, 100, 0);
const BIRD_COLOR: Rgb = (139, 69, 19);

fn rgb(c: Rgb) -> Color {
    Color::Rgb(c.0, c.1, c.2)
}

/// Blend `c` toward the sky color; `alpha` 1.0 keeps `c` unchanged.
fn fade(c: Rgb, alpha: f64) -> Rgb {
    let mix = |fg: u8, bg: u8| (bg as f64 + (fg as f64 - bg as f64) * alpha).round() as u8;
    (mix(c.0, SKY.0), mix(c.1, SKY.1), mix(c.2, SKY.2))
}

fn obstacle_color(kind: ObstacleKind) -> Rgb {
    match kind {
        ObstacleKind::Cactus => CACTUS_COLOR,
        ObstacleKind::Bird => BIRD_COLOR,
    }
}

/// Render the full Dino Run scene.
pub fn render_runner_scene(frame: &mut Frame, area: Rect, game: &RunnerGame, now_ms: u64) {
    let layout = create_game_layout(frame, area, " Dino Run ", Color::LightGreen, 6, 26);

    render_status_line(frame, layout.status_line, game, now_ms);
    render_play_field(frame, layout.content, game);
    render_controls(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);

    if let Some(over) = &game.game_over {
        render_game_over(frame, layout.content, over);
    }
}

fn render_status_line(frame: &mut Frame, area: Rect, game: &RunnerGame, now_ms: u64) {
    let line = Paragraph::new(Span::styled(
        game.status_line(now_ms),
        Style::default().fg(Color::White),
    ));
    frame.render_widget(line, area);
}

/// RGB pixel buffer addressed in game units through `scale`.
struct PixelBuffer {
    width: usize,
    height: usize,
    scale: f64,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    fn new(width: usize, height: usize, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
            pixels: vec![SKY; width * height],
        }
    }

    fn set(&mut self, x: i64, y: i64, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize] = c;
        }
    }

    fn get(&self, x: usize, y: usize) -> Rgb {
        if y < self.height {
            self.pixels[y * self.width + x]
        } else {
            SKY
        }
    }

    /// Fill a rectangle given in game units. Anything non-empty covers at
    /// least one pixel.
    fn fill_game_rect(&mut self, gx: f64, gy: f64, gw: f64, gh: f64, c: Rgb) {
        let x0 = (gx * self.scale).floor() as i64;
        let y0 = (gy * self.scale).floor() as i64;
        let x1 = ((gx + gw) * self.scale).ceil() as i64;
        let y1 = ((gy + gh) * self.scale).ceil() as i64;
        for y in y0..y1 {
            for x in x0..x1 {
                self.set(x, y, c);
            }
        }
    }

    fn draw_sprite(&mut self, sprite: &PixelSprite, gx: f64, gy: f64, c: Rgb) {
        for (col, row) in sprite.filled() {
            self.fill_game_rect(
                gx + col as f64 * SPRITE_PIXEL_SIZE,
                gy + row as f64 * SPRITE_PIXEL_SIZE,
                SPRITE_PIXEL_SIZE,
                SPRITE_PIXEL_SIZE,
                c,
            );
        }
    }
}

/// Paint ground, obstacles and actor into a pixel buffer sized for `area`.
fn paint_field(area: Rect, game: &RunnerGame) -> PixelBuffer {
    let cols = area.width as f64;
    let px_rows = area.height as f64 * 2.0;
    let scale = (cols / FIELD_WIDTH).min(px_rows / FIELD_HEIGHT);
    let width = ((FIELD_WIDTH * scale).round() as usize).min(area.width as usize);
    let height = ((FIELD_HEIGHT * scale).round() as usize).min(area.height as usize * 2);

    let mut buf = PixelBuffer::new(width, height, scale);

    // ── Ground ──────────────────────────────────────────────────────
    buf.fill_game_rect(0.0, GROUND_Y, FIELD_WIDTH, GROUND_HEIGHT, GROUND);
    let grain_row = (GROUND_Y * scale).ceil() as i64 + 1;
    let drift = (game.frame_count as usize) % 5;
    for x in (0..width).filter(|x| (x + drift) % 5 == 0) {
        buf.set(x as i64, grain_row, GROUND_GRAIN);
    }

    let alpha = game.opacity();

    // ── Obstacles ───────────────────────────────────────────────────
    for obstacle in &game.obstacles {
        let color = fade(obstacle_color(obstacle.kind), alpha);
        buf.draw_sprite(
            obstacle_sprite(obstacle.kind),
            obstacle.x,
            obstacle.kind.y(),
            color,
        );
    }

    // ── Actor ───────────────────────────────────────────────────────
    let actor = &game.actor;
    buf.draw_sprite(
        actor_sprite(actor.stance.posture()),
        actor.x,
        actor.y,
        fade(ACTOR_COLOR, alpha),
    );

    buf
}

/// Render the play field using half-block pixel packing.
fn render_play_field(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    if area.height < 2 || area.width < 10 {
        return;
    }

    let buf = paint_field(area, game);
    let term_rows = buf.height.div_ceil(2);
    let x_off = area.x + (area.width.saturating_sub(buf.width as u16)) / 2;
    let y_off = area.y + (area.height.saturating_sub(term_rows as u16)) / 2;

    for term_row in 0..term_rows {
        let mut spans: Vec<Span> = Vec::new();
        let mut cur_fg = Color::Reset;
        let mut cur_bg = Color::Reset;
        let mut cur_text = String::new();

        for x in 0..buf.width {
            let fg = rgb(buf.get(x, term_row * 2));
            let bg = rgb(buf.get(x, term_row * 2 + 1));

            if (fg != cur_fg || bg != cur_bg) && !cur_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut cur_text),
                    Style::default().fg(cur_fg).bg(cur_bg),
                ));
            }
            cur_fg = fg;
            cur_bg = bg;
            cur_text.push(HALF_TOP);
        }
        if !cur_text.is_empty() {
            spans.push(Span::styled(
                cur_text,
                Style::default().fg(cur_fg).bg(cur_bg),
            ));
        }

        let row_y = y_off + term_row as u16;
        if row_y < area.y + area.height {
            let line = Paragraph::new(Line::from(spans));
            frame.render_widget(line, Rect::new(x_off, row_y, buf.width as u16, 1));
        }
    }
}

fn render_controls(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    if game.game_over.is_some() {
        render_status_bar(
            frame,
            area,
            "Game Over",
            Color::Red,
            &[("[Any]", "Continue"), ("[Q]", "Quit")],
        );
        return;
    }

    let duck_hint = if game.actor.is_lowered() {
        "Stand"
    } else {
        "Duck"
    };
    render_status_bar(
        frame,
        area,
        "Run!",
        Color::LightGreen,
        &[
            ("[Space/Up]", "Jump"),
            ("[Down]", duck_hint),
            ("[Left/Right]", "Speed"),
            ("[Q]", "Quit"),
        ],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    let inner = render_info_panel_frame(frame, area);
    let label = Style::default().fg(Color::DarkGray);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Run: ", label),
            Span::styled(
                (game.runs_played + 1).to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("Best: ", label),
            Span::styled(
                game.high_score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Opacity: ", label),
            Span::styled(
                format!("{:.0}%", game.opacity() * 100.0),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" \u{2588} ", Style::default().fg(rgb(ACTOR_COLOR))),
            Span::styled("Runner", label),
        ]),
        Line::from(vec![
            Span::styled(" \u{2588} ", Style::default().fg(rgb(CACTUS_COLOR))),
            Span::styled("Cactus (jump)", label),
        ]),
        Line::from(vec![
            Span::styled(" \u{2588} ", Style::default().fg(rgb(BIRD_COLOR))),
            Span::styled("Bird (duck)", label),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Log:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    // Newest entries that still fit
    let room = (inner.height as usize).saturating_sub(lines.len());
    let skip = game.log.len().saturating_sub(room);
    for entry in game.log.iter().skip(skip) {
        let style = if entry.highlight {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(entry.message.clone(), style)));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_game_over(frame: &mut Frame, area: Rect, over: &GameOver) {
    let mut body = vec![Line::from(Span::styled(
        format!("Game Over! Score: {}", over.score),
        Style::default().fg(Color::White),
    ))];
    if over.new_high_score {
        body.push(Line::from(Span::styled(
            "New high score!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    } else {
        body.push(Line::from(Span::styled(
            format!("High Score: {}", over.high_score),
            Style::default().fg(Color::Cyan),
        )));
    }

    render_modal(frame, area, "GAME OVER", Color::Red, body);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{Obstacle, TimingMode};
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(game: &RunnerGame, now_ms: u64) -> (String, ratatui::buffer::Buffer) {
        let backend = TestBackend::new(110, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                render_runner_scene(f, area, game, now_ms);
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let text = buffer.content.iter().map(|c| c.symbol()).collect::<String>();
        (text, buffer)
    }

    #[test]
    fn test_fade_endpoints() {
        assert_eq!(fade(ACTOR_COLOR, 1.0), ACTOR_COLOR);
        assert_eq!(fade(ACTOR_COLOR, 0.0), SKY);
    }

    #[test]
    fn test_scene_shows_status_line() {
        let mut game = RunnerGame::new(TimingMode::default(), 0);
        game.score = 2;
        let (text, _) = render_to_string(&game, 3_500);
        assert!(text.contains("Time: 3s | Score: 2 | High Score: 0 | Speed: 5.00"));
    }

    #[test]
    fn test_scene_draws_actor_pixels() {
        let game = RunnerGame::new(TimingMode::default(), 0);
        let (_, buffer) = render_to_string(&game, 0);
        let actor = rgb(ACTOR_COLOR);
        assert!(buffer
            .content
            .iter()
            .any(|c| c.symbol() == "\u{2580}" && (c.fg == actor || c.bg == actor)));
    }

    #[test]
    fn test_scene_draws_faded_obstacles() {
        let mut game = RunnerGame::new(TimingMode::default(), 0);
        game.score = 30;
        let mut cactus = Obstacle::new(ObstacleKind::Cactus, 5.0);
        cactus.x = 300.0;
        game.obstacles.push(cactus);

        let (_, buffer) = render_to_string(&game, 0);
        let faded = rgb(fade(CACTUS_COLOR, 0.7));
        assert!(buffer
            .content
            .iter()
            .any(|c| c.fg == faded || c.bg == faded));
    }

    #[test]
    fn test_game_over_modal() {
        let mut game = RunnerGame::new(TimingMode::default(), 0);
        game.score = 4;
        game.end_run(0);

        let (text, _) = render_to_string(&game, 0);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("Game Over! Score: 4"));
        assert!(text.contains("New high score!"));
    }

    #[test]
    fn test_pixel_buffer_min_one_pixel() {
        let mut buf = PixelBuffer::new(10, 10, 0.1);
        buf.fill_game_rect(40.0, 40.0, 4.0, 4.0, ACTOR_COLOR);
        assert_eq!(buf.get(4, 4), ACTOR_COLOR);
        assert_eq!(buf.get(5, 5), SKY);
    }
}
