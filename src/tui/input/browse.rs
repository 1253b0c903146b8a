use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Filter;
use crate::tui::app::{App, Mode};

pub(super) fn handle_browse(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Quit: q or Ctrl+Q
        (m, KeyCode::Char('q')) if m.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        (_, KeyCode::Char('q')) => {
            app.should_quit = true;
        }

        // Filter shortcuts clear the selection along with the switch
        (m, KeyCode::Char('1')) if m.contains(KeyModifiers::CONTROL) => {
            app.set_filter(Filter::All);
        }
        (m, KeyCode::Char('2')) if m.contains(KeyModifiers::CONTROL) => {
            app.set_filter(Filter::Pending);
        }
        (m, KeyCode::Char('3')) if m.contains(KeyModifiers::CONTROL) => {
            app.set_filter(Filter::Completed);
        }

        (_, KeyCode::Up) => app.move_previous(),
        (_, KeyCode::Down) => app.move_next(),

        (_, KeyCode::Char(' ')) => app.toggle_selected(),
        (_, KeyCode::Delete) => app.delete_selected(),

        // Activate the selected todo for inline editing
        (_, KeyCode::Enter) | (_, KeyCode::Char('e')) => begin_edit_selected(app),

        // Add without the palette shortcut (on-screen button equivalent)
        (_, KeyCode::Char('a')) => app.open_add(),

        (_, KeyCode::Char('?')) => app.mode = Mode::Help,

        _ => {}
    }
}

// Only a rendered row can enter editing; a selection that has left the
// visible set (toggled away under a filter) stays in Browse.
fn begin_edit_selected(app: &mut App) {
    let Some(todo) = app.selected_todo() else {
        return;
    };
    let (id, draft) = (todo.id, todo.text.clone());
    if app.visible_ids().contains(&id) {
        app.mode = Mode::Edit {
            id,
            cursor: draft.len(),
            draft,
        };
    }
}
