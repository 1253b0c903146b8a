//! Single-line draft editing shared by the edit and add sessions.
//! Cursors are byte offsets into the draft, always on a char boundary.

use crate::model::MAX_TEXT_LEN;

/// Insert a printable char at the cursor, respecting the length cap
pub(super) fn insert_char(draft: &mut String, cursor: &mut usize, c: char) {
    if c.is_control() || draft.chars().count() >= MAX_TEXT_LEN {
        return;
    }
    draft.insert(*cursor, c);
    *cursor += c.len_utf8();
}

/// Remove the char before the cursor. Returns false at the start.
pub(super) fn backspace(draft: &mut String, cursor: &mut usize) -> bool {
    let Some(prev) = draft[..*cursor].chars().next_back() else {
        return false;
    };
    *cursor -= prev.len_utf8();
    draft.remove(*cursor);
    true
}

/// Remove the char under the cursor, if any
pub(super) fn delete_forward(draft: &mut String, cursor: &mut usize) {
    if *cursor < draft.len() {
        draft.remove(*cursor);
    }
}

pub(super) fn move_left(draft: &str, cursor: &mut usize) {
    if let Some(prev) = draft[..*cursor].chars().next_back() {
        *cursor -= prev.len_utf8();
    }
}

pub(super) fn move_right(draft: &str, cursor: &mut usize) {
    if let Some(next) = draft[*cursor..].chars().next() {
        *cursor += next.len_utf8();
    }
}
