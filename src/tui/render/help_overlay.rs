use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::render::centered_rect;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" List", header_style)));
    add_binding(&mut lines, " \u{2191}\u{2193}", "Move selection (wraps)", key_style, desc_style);
    add_binding(&mut lines, " Space", "Toggle completed", key_style, desc_style);
    add_binding(&mut lines, " Enter/e", "Edit selected", key_style, desc_style);
    add_binding(&mut lines, " Delete", "Delete selected", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Filters", header_style)));
    add_binding(&mut lines, " Ctrl+1", "All", key_style, desc_style);
    add_binding(&mut lines, " Ctrl+2", "Pending", key_style, desc_style);
    add_binding(&mut lines, " Ctrl+3", "Completed", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Add palette", header_style)));
    add_binding(&mut lines, " Ctrl+K", "Open (from anywhere)", key_style, desc_style);
    add_binding(&mut lines, " a", "Open", key_style, desc_style);
    add_binding(&mut lines, " \u{2191}\u{2193}", "Pick a suggestion", key_style, desc_style);
    add_binding(&mut lines, " Enter", "Add", key_style, desc_style);
    add_binding(&mut lines, " Esc", "Cancel", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Global", header_style)));
    add_binding(&mut lines, " ?", "Toggle this help", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 12;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}
