use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Maximum stored text length, in characters
pub const MAX_TEXT_LEN: usize = 100;

/// A single task record.
///
/// The serialized field names (`texto`, `concluida`, `criadaEm`) are kept
/// for compatibility with data written by earlier versions of this app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Creation timestamp in Unix milliseconds, unique within the store
    pub id: i64,
    /// Trimmed, non-empty text
    #[serde(rename = "texto")]
    pub text: String,
    #[serde(rename = "concluida")]
    pub completed: bool,
    /// ISO-8601 creation time, immutable after creation
    #[serde(rename = "criadaEm")]
    pub created_at: String,
}

impl Todo {
    /// Create a pending todo with the given id, stamped with the current time
    pub fn new(id: i64, text: String) -> Self {
        Todo {
            id,
            text,
            completed: false,
            created_at: now_iso(),
        }
    }
}

/// Current time as ISO-8601 with millisecond precision and a `Z` suffix
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Clamp text to [`MAX_TEXT_LEN`] characters, on a char boundary
pub fn clamp_text(text: &str) -> &str {
    match text.char_indices().nth(MAX_TEXT_LEN) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
