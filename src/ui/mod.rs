//! Splash-screen composition: warm-up banner, runner play field, status bar.

pub mod common;
pub mod runner_scene;
pub mod throbber;

use crate::runner::types::{Phase, RunnerGame};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the whole splash screen.
///
/// Runs unconditionally on every display frame, independent of the session
/// phase. `accent` is the host's one styling knob; there is no other
/// external configuration. A terminal too small to hold the layout renders
/// nothing; the widget fails closed instead of erroring.
pub fn draw_splash(frame: &mut Frame, game: &RunnerGame, accent: Color) {
    let area = frame.size();
    if area.width < 24 || area.height < 10 {
        return;
    }

    let layout = common::create_splash_layout(frame, area, " hurdle ", accent);
    draw_banner(frame, layout.banner, accent);
    runner_scene::render_runner(frame, layout.field, game, accent);
    draw_status(frame, layout.status_bar, game, accent);
}

/// Warm-up banner: spinner plus rotating status message.
fn draw_banner(frame: &mut Frame, area: Rect, accent: Color) {
    if area.height < 1 {
        return;
    }
    let line = Line::from(vec![
        Span::styled(format!(" {} ", throbber::spinner_char()), Style::default().fg(accent)),
        Span::styled(throbber::warmup_message(), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Phase-dependent status bar.
fn draw_status(frame: &mut Frame, area: Rect, game: &RunnerGame, accent: Color) {
    match game.phase {
        Phase::Idle => common::render_status_bar(
            frame,
            area,
            "Standing by",
            accent,
            &[("[Space/Up]", "Start"), ("[Q]", "Skip")],
        ),
        Phase::Running => common::render_status_bar(
            frame,
            area,
            "Run!",
            accent,
            &[("[Space/Up]", "Jump"), ("[Q]", "Skip")],
        ),
        Phase::GameOver => common::render_status_bar(
            frame,
            area,
            "Down!",
            Color::Red,
            &[("[Space/Up]", "Run again"), ("[Q]", "Skip")],
        ),
    }
}
