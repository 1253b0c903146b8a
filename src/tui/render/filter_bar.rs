use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Filter;
use crate::tui::app::App;

const TABS: [(Filter, &str); 3] = [
    (Filter::All, "Ctrl+1"),
    (Filter::Pending, "Ctrl+2"),
    (Filter::Completed, "Ctrl+3"),
];

/// Render the two header rows: title with total count, then filter tabs
pub fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let counts = app.store.counts();

    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut lines: Vec<Line> = Vec::new();

    // Row 1: " taskpad  5 tasks"
    let task_word = if counts.total == 1 { "task" } else { "tasks" };
    lines.push(Line::from(vec![
        Span::styled(" taskpad", title_style),
        Span::styled(format!("  {} {}", counts.total, task_word), dim_style),
    ]));

    // Row 2: filter tabs with per-filter counts
    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default().bg(bg))];
    for (i, (filter, shortcut)) in TABS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  \u{2502}  ", dim_style));
        }
        let count = match filter {
            Filter::All => counts.total,
            Filter::Pending => counts.pending,
            Filter::Completed => counts.completed,
        };
        let label = format!("{} {}", filter.label(), count);
        if *filter == app.filter {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(app.theme.highlight)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                label,
                Style::default().fg(app.theme.text).bg(bg),
            ));
        }
        spans.push(Span::styled(format!(" {}", shortcut), dim_style));
    }
    lines.push(Line::from(spans));

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
