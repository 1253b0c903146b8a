use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::model::Todo;

/// File name of the serialized collection inside the data directory
pub const STORE_FILE: &str = "todos.json";

/// Error type for storage writes
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not serialize todos: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load the collection from `dir/todos.json`.
/// Missing or corrupt data yields an empty collection.
pub fn load(dir: &Path) -> Vec<Todo> {
    let path = dir.join(STORE_FILE);
    let Ok(content) = fs::read_to_string(&path) else {
        return Vec::new();
    };
    serde_json::from_str(&content).unwrap_or_default()
}

/// Write the full collection to `dir/todos.json` atomically
/// (temp file in the same directory, then rename).
pub fn save(dir: &Path, todos: &[Todo]) -> Result<(), StoreError> {
    fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(todos)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(json.as_bytes())?;
    tmp.flush()?;
    tmp.persist(dir.join(STORE_FILE))
        .map_err(|e| StoreError::Io(e.error))?;
    Ok(())
}
