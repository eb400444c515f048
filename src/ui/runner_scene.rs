//! Runner play-field rendering.
//!
//! Uses a cell buffer for per-character color control: the ground, runner,
//! and obstacles are drawn into a 2D grid and then stamped row-by-row as
//! Paragraph widgets. The simulation's logical-pixel coordinates are scaled
//! to whatever cell area the host gives us.

use crate::runner::types::{
    ObstacleKind, Phase, RunnerGame, GROUND_LEVEL, GROUND_TICK_SPACING, PLAYER_SIZE, PLAYER_X,
    SCROLL_SPEED, VIEW_HEIGHT, VIEW_WIDTH,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Cell in the render buffer with foreground and background colors.
#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// Render the runner scene: ground, runner, obstacles, score, overlays.
///
/// Runs on every display frame regardless of phase; a too-small area is a
/// silent no-op rather than an error.
pub fn render_runner(frame: &mut Frame, area: Rect, game: &RunnerGame, accent: Color) {
    if area.height < 4 || area.width < 20 {
        return;
    }

    let width = area.width as usize;
    let height = area.height as usize;
    let mut buffer: Vec<Vec<Cell>> = vec![vec![Cell::default(); width]; height];

    let x_scale = width as f64 / VIEW_WIDTH;
    let y_scale = height as f64 / VIEW_HEIGHT;

    draw_ground(&mut buffer, game, x_scale, y_scale);
    draw_obstacles(&mut buffer, game, x_scale, y_scale);
    draw_player(&mut buffer, game, x_scale, y_scale, accent);

    if game.phase != Phase::Idle {
        draw_score(&mut buffer, game.score);
    }

    stamp(frame, area, &buffer);

    // Overlays last, on top of the (possibly frozen) scene.
    match game.phase {
        Phase::Idle => draw_start_prompt(frame, area),
        Phase::GameOver => draw_game_over(frame, area, game.score),
        Phase::Running => {}
    }
}

/// Ground line with a horizontally scrolling tick pattern. The pattern
/// phase advances with the world scroll, selling the motion illusion.
fn draw_ground(buffer: &mut [Vec<Cell>], game: &RunnerGame, x_scale: f64, y_scale: f64) {
    let height = buffer.len();
    let width = buffer[0].len();
    let ground_row = ((GROUND_LEVEL * y_scale).round() as usize).min(height - 1);

    let phase = (game.tick_count as f64 * SCROLL_SPEED) % GROUND_TICK_SPACING;
    let cell_px = 1.0 / x_scale;

    for (col, cell) in buffer[ground_row].iter_mut().enumerate().take(width) {
        let world_x = col as f64 * cell_px + phase;
        let ch = if world_x % GROUND_TICK_SPACING < cell_px {
            '╍'
        } else {
            '─'
        };
        *cell = Cell {
            ch,
            fg: Color::Rgb(110, 100, 80),
            bg: Color::Reset,
        };
    }

    // Sparse rubble below the line for depth.
    for row in (ground_row + 1)..height {
        for (col, cell) in buffer[row].iter_mut().enumerate().take(width) {
            if (col + row * 3) % 7 == 0 {
                *cell = Cell {
                    ch: '░',
                    fg: Color::Rgb(70, 60, 45),
                    bg: Color::Reset,
                };
            }
        }
    }
}

/// All live obstacles. Air obstacles bob on a small sinusoidal wing offset
/// keyed by the tick counter.
fn draw_obstacles(buffer: &mut [Vec<Cell>], game: &RunnerGame, x_scale: f64, y_scale: f64) {
    let height = buffer.len() as i32;
    let width = buffer[0].len() as i32;

    for obstacle in &game.obstacles {
        let rect = obstacle.rect();
        let (ch, fg, wing_px) = match obstacle.kind {
            ObstacleKind::Ground => ('▓', Color::Rgb(80, 150, 80), 0.0),
            ObstacleKind::Air { .. } => (
                'v',
                Color::Rgb(170, 90, 170),
                (game.tick_count as f64 * 0.25).sin() * 3.0,
            ),
        };

        let col0 = (rect.x * x_scale).round() as i32;
        let cols = ((rect.w * x_scale).ceil() as i32).max(1);
        let row0 = ((rect.y + wing_px) * y_scale).round() as i32;
        let rows = ((rect.h * y_scale).round() as i32).max(1);

        for dy in 0..rows {
            let row = row0 + dy;
            if row < 0 || row >= height {
                continue;
            }
            for dx in 0..cols {
                let col = col0 + dx;
                if col >= 0 && col < width {
                    buffer[row as usize][col as usize] = Cell {
                        ch,
                        fg,
                        bg: Color::Reset,
                    };
                }
            }
        }
    }
}

/// The runner sprite. Legs swap on tick parity for a running gait.
fn draw_player(buffer: &mut [Vec<Cell>], game: &RunnerGame, x_scale: f64, y_scale: f64, accent: Color) {
    let height = buffer.len() as i32;
    let width = buffer[0].len() as i32;

    let col0 = (PLAYER_X * x_scale).round() as i32;
    let cols = ((PLAYER_SIZE * x_scale).ceil() as i32).max(1);
    let row0 = (game.player.y * y_scale).round() as i32;
    let rows = ((PLAYER_SIZE * y_scale).round() as i32).max(2);

    let left_leg = game.tick_count % 2 == 0;

    for dy in 0..rows {
        let row = row0 + dy;
        if row < 0 || row >= height {
            continue;
        }
        let is_feet = dy == rows - 1;
        for dx in 0..cols {
            let col = col0 + dx;
            if col < 0 || col >= width {
                continue;
            }
            let ch = if is_feet {
                // Leg-swap animation keyed by tick parity.
                if left_leg {
                    if dx == 0 {
                        '/'
                    } else {
                        ' '
                    }
                } else if dx == cols - 1 {
                    '\\'
                } else {
                    ' '
                }
            } else {
                '█'
            };
            if ch != ' ' {
                buffer[row as usize][col as usize] = Cell {
                    ch,
                    fg: accent,
                    bg: Color::Reset,
                };
            }
        }
    }
}

/// Score readout in the top-right corner.
fn draw_score(buffer: &mut [Vec<Cell>], score: u32) {
    let width = buffer[0].len();
    let label = "Score: ";
    let value = score.to_string();
    let start = width.saturating_sub(label.len() + value.len() + 1);

    for (i, ch) in label.chars().enumerate() {
        if start + i < width {
            buffer[0][start + i] = Cell {
                ch,
                fg: Color::DarkGray,
                bg: Color::Reset,
            };
        }
    }
    for (i, ch) in value.chars().enumerate() {
        let col = start + label.len() + i;
        if col < width {
            buffer[0][col] = Cell {
                ch,
                fg: Color::White,
                bg: Color::Reset,
            };
        }
    }
}

/// Stamp the cell buffer onto the frame, merging runs of equal style into
/// single spans.
fn stamp(frame: &mut Frame, area: Rect, buffer: &[Vec<Cell>]) {
    for (row_idx, row_data) in buffer.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_bg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            current_fg = cell.fg;
            current_bg = cell.bg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(current_bg),
            ));
        }

        let line = Paragraph::new(Line::from(spans));
        let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
        if row_area.y < area.y + area.height {
            frame.render_widget(line, row_area);
        }
    }
}

/// "Press Space to start" prompt centered on the field.
fn draw_start_prompt(frame: &mut Frame, area: Rect) {
    super::common::render_center_overlay(
        frame,
        area,
        vec![Line::from(Span::styled(
            "[ Press Space/Up to Start ]",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))],
    );
}

/// Game-over banner with the final score, over the frozen scene.
fn draw_game_over(frame: &mut Frame, area: Rect, score: u32) {
    super::common::render_center_overlay(
        frame,
        area,
        vec![
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("Final score: {}", score),
                Style::default().fg(Color::White),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[Space/Up] Run again",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    );
}
