//! Shared layout and chrome for the splash screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `create_splash_layout`.
pub struct SplashLayout {
    /// One-line banner: warm-up spinner and status message.
    pub banner: Rect,
    /// The runner play field.
    pub field: Rect,
    /// Status bar (2 lines: state message + key hints).
    pub status_bar: Rect,
}

/// Create the splash layout with an outer border.
///
/// ```text
/// ┌─ Title ─────────────────────────┐
/// │ [banner: spinner + message]     │
/// │                                 │
/// │   [play field]                  │
/// │                                 │
/// │ [status bar - 2 lines]          │
/// └─────────────────────────────────┘
/// ```
pub fn create_splash_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    accent: Color,
) -> SplashLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(2),
        ])
        .split(inner);

    SplashLayout {
        banner: v_chunks[0],
        field: v_chunks[1],
        status_bar: v_chunks[2],
    }
}

/// Render the standard status bar (2 lines: status message + controls).
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    // Line 1: Status message (centered)
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    // Line 2: Controls (centered)
    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Render a block of lines centered on `area` without clearing it, so the
/// frozen scene stays visible behind the overlay.
pub fn render_center_overlay(frame: &mut Frame, area: Rect, lines: Vec<Line>) {
    if area.height < lines.len() as u16 || area.width < 10 {
        return;
    }

    let content_height = lines.len() as u16;
    let y_offset = area.y + (area.height - content_height) / 2;

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(
        text,
        Rect::new(area.x, y_offset, area.width, content_height),
    );
}
