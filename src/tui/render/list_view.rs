use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthChar;

use crate::model::{Todo, visible};
use crate::tui::app::{App, Mode};

/// Render the todo list with selection highlight and inline editing
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let height = area.height as usize;

    // Cloned so the scroll offset can be adjusted below
    let todos: Vec<Todo> = visible(app.store.all(), app.filter)
        .into_iter()
        .cloned()
        .collect();

    if todos.is_empty() {
        let msg = "No tasks found \u{2014} Ctrl+K to add one";
        let paragraph = Paragraph::new(Line::from(Span::styled(
            format!("{:^width$}", msg, width = width),
            Style::default().fg(app.theme.dim).bg(bg),
        )))
        .style(Style::default().bg(bg));
        let y = area.y + (area.height / 2).min(area.height.saturating_sub(1));
        frame.render_widget(paragraph, Rect::new(area.x, y, area.width, 1));
        return;
    }

    // Scroll-follow: keep the selected row inside the window
    if let Some(idx) = app
        .selected
        .and_then(|id| todos.iter().position(|t| t.id == id))
    {
        if idx < app.scroll_offset {
            app.scroll_offset = idx;
        } else if height > 0 && idx >= app.scroll_offset + height {
            app.scroll_offset = idx + 1 - height;
        }
    }
    if app.scroll_offset >= todos.len() {
        app.scroll_offset = todos.len().saturating_sub(1);
    }

    let mut lines: Vec<Line> = Vec::new();
    for todo in todos.iter().skip(app.scroll_offset).take(height) {
        let is_selected = app.selected == Some(todo.id);
        let row_bg = if is_selected { app.theme.selection_bg } else { bg };

        let marker_style = if is_selected {
            Style::default()
                .fg(app.theme.highlight)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(row_bg)
        };
        let checkbox_style = if todo.completed {
            Style::default().fg(app.theme.green).bg(row_bg)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };

        let marker = if is_selected { " \u{25B6} " } else { "   " };
        let checkbox = if todo.completed { "[x] " } else { "[ ] " };

        let mut spans = vec![
            Span::styled(marker, marker_style),
            Span::styled(checkbox, checkbox_style),
        ];

        let text_width = width.saturating_sub(7);
        let editing = match &app.mode {
            Mode::Edit { id, draft, cursor } if *id == todo.id => Some((draft, *cursor)),
            _ => None,
        };

        if let Some((draft, cursor)) = editing {
            // Inline edit field: draft split at the cursor
            let edit_style = Style::default().fg(app.theme.text_bright).bg(row_bg);
            spans.push(Span::styled(draft[..cursor].to_string(), edit_style));
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.highlight).bg(row_bg),
            ));
            spans.push(Span::styled(draft[cursor..].to_string(), edit_style));
        } else {
            let mut text_style = Style::default()
                .fg(if is_selected {
                    app.theme.text_bright
                } else {
                    app.theme.text
                })
                .bg(row_bg);
            if todo.completed {
                text_style = Style::default()
                    .fg(app.theme.dim)
                    .bg(row_bg)
                    .add_modifier(Modifier::CROSSED_OUT);
            }
            spans.push(Span::styled(
                truncate_to_width(&todo.text, text_width),
                text_style,
            ));
        }

        // Pad the row so the selection background reaches the right edge
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        if used < width {
            spans.push(Span::styled(
                " ".repeat(width - used),
                Style::default().bg(row_bg),
            ));
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Truncate to a display width, appending an ellipsis when cut
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('\u{2026}');
    out
}
