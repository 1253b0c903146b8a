use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, Mode};

const MAX_INNER_WIDTH: u16 = 60;

/// Render the add-session palette overlay
pub fn render_palette(frame: &mut Frame, app: &App, area: Rect) {
    let Mode::Add {
        draft,
        cursor,
        selected,
    } = &app.mode
    else {
        return;
    };

    let bg = app.theme.background;
    let text_color = app.theme.text;
    let bright = app.theme.text_bright;
    let highlight = app.theme.highlight;
    let dim = app.theme.dim;
    let sel_bg = app.theme.selection_bg;

    let prompt_style = Style::default()
        .fg(highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let input_style = Style::default().fg(bright).bg(bg);
    let cursor_style = Style::default().fg(highlight).bg(bg);
    let normal_style = Style::default().fg(text_color).bg(bg);
    let footer_style = Style::default().fg(dim).bg(bg);
    let blank_style = Style::default().bg(bg);

    let content_width = area.width.saturating_sub(4);
    let inner_w = content_width.min(MAX_INNER_WIDTH) as usize;
    let popup_w = (inner_w as u16) + 2;

    let suggestions = app.filtered_suggestions(draft);

    let mut lines: Vec<Line> = Vec::new();

    // Input line: "> draft▌" with the cursor splitting the draft,
    // or a rotating placeholder while the draft is empty
    let mut input_spans = vec![Span::styled(" > ", prompt_style)];
    let mut input_used = 3usize;
    if draft.is_empty() {
        input_spans.push(Span::styled("\u{258C}", cursor_style));
        let placeholder = format!(
            "Ex: {}",
            app.suggestions
                .get(app.placeholder_idx)
                .map(|s| s.as_str())
                .unwrap_or("a new task")
        );
        input_spans.push(Span::styled(placeholder.clone(), footer_style));
        input_used += 1 + placeholder.chars().count();
    } else {
        input_spans.push(Span::styled(draft[..*cursor].to_string(), input_style));
        input_spans.push(Span::styled("\u{258C}", cursor_style));
        input_spans.push(Span::styled(draft[*cursor..].to_string(), input_style));
        input_used += draft.chars().count() + 1;
    }
    if input_used < inner_w {
        input_spans.push(Span::styled(" ".repeat(inner_w - input_used), blank_style));
    }
    lines.push(Line::from(input_spans));

    // Separator
    lines.push(Line::from(Span::styled(
        "\u{2500}".repeat(inner_w),
        Style::default().fg(dim).bg(bg),
    )));

    if suggestions.is_empty() {
        let msg = "No matching suggestions";
        let msg_len = msg.chars().count();
        let left_pad = inner_w.saturating_sub(msg_len) / 2;
        let right_pad = inner_w.saturating_sub(msg_len + left_pad);
        lines.push(Line::from(vec![
            Span::styled(" ".repeat(left_pad), blank_style),
            Span::styled(msg, footer_style),
            Span::styled(" ".repeat(right_pad), blank_style),
        ]));
    } else {
        for (i, suggestion) in suggestions.iter().enumerate() {
            let is_selected = *selected == Some(i);
            let row_bg = if is_selected { sel_bg } else { bg };
            let row_pad = Style::default().bg(row_bg);

            let indicator = if is_selected { " \u{25B6} " } else { "   " };
            let indicator_style = if is_selected {
                Style::default()
                    .fg(highlight)
                    .bg(row_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                row_pad
            };
            let label_style = if is_selected {
                Style::default()
                    .fg(bright)
                    .bg(row_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                normal_style
            };

            let mut spans = vec![
                Span::styled(indicator, indicator_style),
                Span::styled("+ ", Style::default().fg(dim).bg(row_bg)),
                Span::styled(suggestion.to_string(), label_style),
            ];
            let used = 5 + suggestion.chars().count();
            if used < inner_w {
                spans.push(Span::styled(" ".repeat(inner_w - used), row_pad));
            }
            lines.push(Line::from(spans));
        }
    }

    // Footer
    lines.push(Line::from(Span::styled(" ".repeat(inner_w), blank_style)));
    let footer = "Enter add   \u{2191}\u{2193} suggestions   Esc cancel";
    let footer_len = footer.chars().count();
    let mut footer_spans = vec![Span::styled(format!("   {}", footer), footer_style)];
    if footer_len + 3 < inner_w {
        footer_spans.push(Span::styled(
            " ".repeat(inner_w - footer_len - 3),
            blank_style,
        ));
    }
    lines.push(Line::from(footer_spans));

    let popup_h = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(popup_w) / 2;
    let y = area.y + 3u16.min(area.height.saturating_sub(popup_h));
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, popup_area);
}
