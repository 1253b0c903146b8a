use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

use super::common;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    let Mode::Edit { id, draft, cursor } = &mut app.mode else {
        return;
    };

    match key.code {
        // Commit: an empty draft is discarded by the store, keeping the
        // prior text
        KeyCode::Enter => {
            let id = *id;
            let text = std::mem::take(draft);
            app.mode = Mode::Browse;
            app.store.edit(id, &text);
        }
        KeyCode::Esc => {
            app.mode = Mode::Browse;
        }
        KeyCode::Backspace => {
            common::backspace(draft, cursor);
        }
        KeyCode::Delete => common::delete_forward(draft, cursor),
        KeyCode::Left => common::move_left(draft, cursor),
        KeyCode::Right => common::move_right(draft, cursor),
        KeyCode::Home => *cursor = 0,
        KeyCode::End => *cursor = draft.len(),
        KeyCode::Char(c) => common::insert_char(draft, cursor, c),
        _ => {}
    }
}
