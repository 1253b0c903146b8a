use serde::Serialize;

use crate::model::Todo;
use crate::store::Counts;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TodoJson<'a> {
    pub id: i64,
    pub text: &'a str,
    pub completed: bool,
    pub created_at: &'a str,
}

impl<'a> From<&'a Todo> for TodoJson<'a> {
    fn from(todo: &'a Todo) -> Self {
        TodoJson {
            id: todo.id,
            text: &todo.text,
            completed: todo.completed,
            created_at: &todo.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct ListJson<'a> {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub todos: Vec<TodoJson<'a>>,
}

impl<'a> ListJson<'a> {
    pub fn new(counts: Counts, todos: Vec<&'a Todo>) -> Self {
        ListJson {
            total: counts.total,
            pending: counts.pending,
            completed: counts.completed,
            todos: todos.into_iter().map(TodoJson::from).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct IdJson {
    pub id: i64,
}

// ---------------------------------------------------------------------------
// Plain-text helpers
// ---------------------------------------------------------------------------

/// One todo as a list row: `[x] 1712000000000  text`
pub fn todo_row(todo: &Todo) -> String {
    let mark = if todo.completed { 'x' } else { ' ' };
    format!("[{}] {}  {}", mark, todo.id, todo.text)
}
