use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

use super::common;

pub(super) fn handle_palette(app: &mut App, key: KeyEvent) {
    // Suggestion count for highlight movement, taken before borrowing the mode
    let draft_snapshot = match &app.mode {
        Mode::Add { draft, .. } => draft.clone(),
        _ => return,
    };
    let suggestion_count = app.filtered_suggestions(&draft_snapshot).len();

    let Mode::Add {
        draft,
        cursor,
        selected,
    } = &mut app.mode
    else {
        return;
    };

    match key.code {
        KeyCode::Esc => {
            // Draft discarded, no mutation
            app.mode = Mode::Browse;
        }
        KeyCode::Enter => {
            let (text, selected) = (std::mem::take(draft), *selected);
            app.mode = Mode::Browse;
            let entry = selected
                .and_then(|i| app.filtered_suggestions(&text).get(i).map(|s| s.to_string()))
                .unwrap_or(text);
            app.store.add(&entry);
        }
        // Highlight moves over the suggestion list; None is the draft row
        KeyCode::Down => {
            *selected = match *selected {
                None if suggestion_count > 0 => Some(0),
                Some(i) if i + 1 < suggestion_count => Some(i + 1),
                other => other,
            };
        }
        KeyCode::Up => {
            *selected = match *selected {
                Some(0) => None,
                Some(i) => Some(i - 1),
                None => None,
            };
        }
        KeyCode::Backspace => {
            // Backspace on an empty draft closes the palette
            if !common::backspace(draft, cursor) {
                app.mode = Mode::Browse;
            } else {
                *selected = None;
            }
        }
        KeyCode::Delete => {
            common::delete_forward(draft, cursor);
            *selected = None;
        }
        KeyCode::Left => common::move_left(draft, cursor),
        KeyCode::Right => common::move_right(draft, cursor),
        KeyCode::Home => *cursor = 0,
        KeyCode::End => *cursor = draft.len(),
        KeyCode::Char(c) => {
            common::insert_char(draft, cursor, c);
            *selected = None;
        }
        _ => {}
    }
}
