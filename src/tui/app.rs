use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::{Config, read_config};
use crate::model::{Filter, Todo, visible};
use crate::store::TodoStore;

use super::input;
use super::render;
use super::theme::Theme;

/// How often the palette placeholder advances (cosmetic only)
const PLACEHOLDER_ROTATE: Duration = Duration::from_secs(3);

/// Built-in palette suggestions, overridable via `suggestions` in config.toml
pub const DEFAULT_SUGGESTIONS: [&str; 5] = [
    "Buy milk",
    "Reply to emails",
    "Read a book",
    "Stretch for ten minutes",
    "Tidy the desk",
];

/// Current interaction mode. Exactly one is active at any time; the key
/// dispatcher in `input` is the only code that moves between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Browse,
    /// Inline edit of an existing todo. `cursor` is a byte offset into `draft`.
    Edit { id: i64, draft: String, cursor: usize },
    /// Command palette / add session. `selected` indexes the filtered
    /// suggestion list; `None` means the raw draft row.
    Add {
        draft: String,
        cursor: usize,
        selected: Option<usize>,
    },
    Help,
}

/// Main application state: the store plus the three cursors (filter,
/// selection, mode). Nothing outside this controller mutates them.
pub struct App {
    pub store: TodoStore,
    pub filter: Filter,
    /// The active todo, valid only against the currently visible subset
    pub selected: Option<i64>,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub suggestions: Vec<String>,
    /// Index into `suggestions` shown as the palette placeholder
    pub placeholder_idx: usize,
    /// First visible row of the todo list
    pub scroll_offset: usize,
}

impl App {
    pub fn new(store: TodoStore, config: &Config) -> Self {
        let suggestions = if config.suggestions.is_empty() {
            DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
        } else {
            config.suggestions.clone()
        };

        App {
            store,
            filter: Filter::All,
            selected: None,
            mode: Mode::Browse,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            suggestions,
            placeholder_idx: 0,
            scroll_offset: 0,
        }
    }

    /// Ids of the currently visible todos, in display order
    pub fn visible_ids(&self) -> Vec<i64> {
        visible(self.store.all(), self.filter)
            .iter()
            .map(|t| t.id)
            .collect()
    }

    pub fn selected_todo(&self) -> Option<&Todo> {
        self.store.get(self.selected?)
    }

    // -----------------------------------------------------------------------
    // Filter & selection
    // -----------------------------------------------------------------------

    /// Switch filter; the selection is always cleared, it is only valid
    /// relative to one visible subset
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.selected = None;
        self.scroll_offset = 0;
    }

    /// Select the given id if it is currently visible; otherwise no-op
    pub fn select(&mut self, id: i64) {
        if self.visible_ids().contains(&id) {
            self.selected = Some(id);
        }
    }

    /// Advance the selection downward, wrapping at the end.
    /// A selection not in the visible list restarts at the first element.
    pub fn move_next(&mut self) {
        let ids = self.visible_ids();
        if ids.is_empty() {
            return;
        }
        let position = self.selected.and_then(|id| ids.iter().position(|&x| x == id));
        self.selected = Some(match position {
            Some(i) => ids[(i + 1) % ids.len()],
            None => ids[0],
        });
    }

    /// Advance the selection upward, wrapping at the start.
    /// A selection not in the visible list restarts at the last element.
    pub fn move_previous(&mut self) {
        let ids = self.visible_ids();
        if ids.is_empty() {
            return;
        }
        let position = self.selected.and_then(|id| ids.iter().position(|&x| x == id));
        self.selected = Some(match position {
            Some(i) => ids[(i + ids.len() - 1) % ids.len()],
            None => ids[ids.len() - 1],
        });
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected {
            self.store.toggle(id);
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected {
            self.store.delete(id);
            self.selected = None;
        }
    }

    // -----------------------------------------------------------------------
    // Palette
    // -----------------------------------------------------------------------

    /// Enter the add session with a fresh draft. Re-entrant: opening from
    /// any mode (including Add itself) resets the prior draft.
    pub fn open_add(&mut self) {
        self.mode = Mode::Add {
            draft: String::new(),
            cursor: 0,
            selected: None,
        };
    }

    /// Suggestions containing the draft, case-insensitively, in list order
    pub fn filtered_suggestions(&self, draft: &str) -> Vec<&str> {
        let needle = draft.trim().to_lowercase();
        self.suggestions
            .iter()
            .filter(|s| needle.is_empty() || s.to_lowercase().contains(&needle))
            .map(|s| s.as_str())
            .collect()
    }

    /// Advance the cosmetic palette placeholder
    pub fn rotate_placeholder(&mut self) {
        if !self.suggestions.is_empty() {
            self.placeholder_idx = (self.placeholder_idx + 1) % self.suggestions.len();
        }
    }
}

/// Run the TUI application against the given data directory
pub fn run(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let store = TodoStore::open(data_dir);
    let config = read_config(data_dir).unwrap_or_default();
    let mut app = App::new(store, &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut last_rotate = Instant::now();
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if last_rotate.elapsed() >= PLACEHOLDER_ROTATE {
            app.rotate_placeholder();
            last_rotate = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
