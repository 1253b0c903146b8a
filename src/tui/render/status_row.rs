use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen): key hints for the current mode
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let hint = match app.mode {
        Mode::Browse => {
            "\u{2191}\u{2193} move  Space toggle  Enter edit  Del delete  Ctrl+K add  ? help  q quit"
        }
        Mode::Add { .. } => "Enter add  \u{2191}\u{2193} suggestions  Esc cancel",
        Mode::Edit { .. } => "Enter save  Esc cancel",
        Mode::Help => "Esc close",
    };

    let mut spans = vec![Span::styled(
        format!(" {}", hint),
        Style::default().fg(app.theme.dim).bg(bg),
    )];
    let used = hint.chars().count() + 1;
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
