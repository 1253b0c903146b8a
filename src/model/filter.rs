use crate::model::todo::Todo;

/// View predicate over the todo collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Pending,
    Completed,
}

impl Filter {
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Pending => "Pending",
            Filter::Completed => "Completed",
        }
    }

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

/// Derive the visible subset for a filter, order preserved.
/// Recomputed on every render or navigation step; never cached across mutations.
pub fn visible(all: &[Todo], filter: Filter) -> Vec<&Todo> {
    all.iter().filter(|t| filter.matches(t)).collect()
}
