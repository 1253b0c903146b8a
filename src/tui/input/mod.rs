mod browse;
mod common;
mod edit;
mod palette;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl+K opens the add session from every mode, resetting any prior draft
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('k')) {
        app.open_add();
        return;
    }

    match &app.mode {
        Mode::Browse => browse::handle_browse(app, key),
        Mode::Edit { .. } => edit::handle_edit(app, key),
        Mode::Add { .. } => palette::handle_palette(app, key),
        Mode::Help => handle_help(app, key),
    }
}

fn handle_help(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
            app.mode = Mode::Browse;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::config_io::Config;
    use crate::model::Filter;
    use crate::store::TodoStore;
    use tempfile::TempDir;

    fn test_app() -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        let store = TodoStore::open(dir.path());
        let app = App::new(store, &Config::default());
        (dir, app)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn press_ctrl(app: &mut App, c: char) {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn ctrl_k_opens_add_from_every_mode() {
        let (_dir, mut app) = test_app();
        let id = app.store.add("x").unwrap();

        press_ctrl(&mut app, 'k');
        assert!(matches!(app.mode, Mode::Add { .. }));

        // Re-entrant: a prior draft is reset
        type_text(&mut app, "half-typed");
        press_ctrl(&mut app, 'k');
        assert_eq!(
            app.mode,
            Mode::Add {
                draft: String::new(),
                cursor: 0,
                selected: None
            }
        );

        press(&mut app, KeyCode::Esc);
        app.select(id);
        press(&mut app, KeyCode::Enter); // start editing
        assert!(matches!(app.mode, Mode::Edit { .. }));
        press_ctrl(&mut app, 'k');
        assert!(matches!(app.mode, Mode::Add { .. }));

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.mode, Mode::Help);
        press_ctrl(&mut app, 'k');
        assert!(matches!(app.mode, Mode::Add { .. }));
    }

    #[test]
    fn add_session_commits_the_draft() {
        let (_dir, mut app) = test_app();
        press_ctrl(&mut app, 'k');
        type_text(&mut app, "Buy milk");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(app.store.all().len(), 1);
        assert_eq!(app.store.all()[0].text, "Buy milk");
    }

    #[test]
    fn add_session_escape_discards_the_draft() {
        let (_dir, mut app) = test_app();
        press_ctrl(&mut app, 'k');
        type_text(&mut app, "never added");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.mode, Mode::Browse);
        assert!(app.store.all().is_empty());
    }

    #[test]
    fn add_session_commits_a_selected_suggestion() {
        let (_dir, mut app) = test_app();
        press_ctrl(&mut app, 'k');
        press(&mut app, KeyCode::Down); // highlight first suggestion
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.store.all().len(), 1);
        assert_eq!(app.store.all()[0].text, "Buy milk");
    }

    #[test]
    fn add_session_blank_draft_adds_nothing() {
        let (_dir, mut app) = test_app();
        press_ctrl(&mut app, 'k');
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Browse);
        assert!(app.store.all().is_empty());
    }

    #[test]
    fn palette_backspace_on_empty_draft_closes() {
        let (_dir, mut app) = test_app();
        press_ctrl(&mut app, 'k');
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.mode, Mode::Browse);
    }

    #[test]
    fn typing_resets_the_suggestion_highlight() {
        let (_dir, mut app) = test_app();
        press_ctrl(&mut app, 'k');
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('x'));
        match &app.mode {
            Mode::Add { selected, .. } => assert_eq!(*selected, None),
            other => panic!("unexpected mode {:?}", other),
        }
    }

    #[test]
    fn edit_commit_replaces_text() {
        let (_dir, mut app) = test_app();
        let id = app.store.add("Old").unwrap();
        app.select(id);
        press(&mut app, KeyCode::Char('e'));

        // Draft starts as the current text, cursor at the end
        assert_eq!(
            app.mode,
            Mode::Edit {
                id,
                draft: "Old".into(),
                cursor: 3
            }
        );

        type_text(&mut app, "er");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(app.store.get(id).unwrap().text, "Older");
    }

    #[test]
    fn scenario_empty_edit_draft_keeps_stored_text() {
        let (_dir, mut app) = test_app();
        let id = app.store.add("Old").unwrap();
        app.select(id);
        press(&mut app, KeyCode::Enter);

        for _ in 0..3 {
            press(&mut app, KeyCode::Backspace);
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(app.store.get(id).unwrap().text, "Old");
    }

    #[test]
    fn edit_escape_discards_changes() {
        let (_dir, mut app) = test_app();
        let id = app.store.add("Old").unwrap();
        app.select(id);
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, " changed");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(app.store.get(id).unwrap().text, "Old");
    }

    #[test]
    fn edit_requires_a_visible_selection() {
        let (_dir, mut app) = test_app();
        let id = app.store.add("x").unwrap();
        app.set_filter(Filter::Pending);
        app.select(id);

        // Space-toggling the selected todo removes it from the Pending view
        press(&mut app, KeyCode::Char(' '));
        assert!(app.visible_ids().is_empty());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Browse);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.mode, Mode::Browse);
    }

    #[test]
    fn enter_without_selection_stays_in_browse() {
        let (_dir, mut app) = test_app();
        app.store.add("x").unwrap();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Browse);
    }

    #[test]
    fn browse_space_toggles_and_delete_deletes() {
        let (_dir, mut app) = test_app();
        let id = app.store.add("x").unwrap();
        app.select(id);

        press(&mut app, KeyCode::Char(' '));
        assert!(app.store.get(id).unwrap().completed);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.store.get(id).unwrap().completed);

        press(&mut app, KeyCode::Delete);
        assert!(app.store.get(id).is_none());
        assert_eq!(app.selected, None);
    }

    #[test]
    fn browse_arrows_navigate() {
        let (_dir, mut app) = test_app();
        let a = app.store.add("a").unwrap();
        let b = app.store.add("b").unwrap();

        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, Some(b));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, Some(a));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected, Some(b));
    }

    #[test]
    fn ctrl_number_switches_filter_and_clears_selection() {
        let (_dir, mut app) = test_app();
        let id = app.store.add("x").unwrap();
        app.select(id);

        press_ctrl(&mut app, '2');
        assert_eq!(app.filter, Filter::Pending);
        assert_eq!(app.selected, None);

        press_ctrl(&mut app, '3');
        assert_eq!(app.filter, Filter::Completed);
        press_ctrl(&mut app, '1');
        assert_eq!(app.filter, Filter::All);
    }

    #[test]
    fn help_opens_and_closes() {
        let (_dir, mut app) = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.mode, Mode::Help);

        // Browsing keys are inert inside the overlay
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, None);
        assert_eq!(app.mode, Mode::Help);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Browse);
    }

    #[test]
    fn draft_stops_growing_at_the_length_cap() {
        let (_dir, mut app) = test_app();
        press_ctrl(&mut app, 'k');
        type_text(&mut app, &"x".repeat(150));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.all()[0].text.chars().count(), 100);
    }
}
