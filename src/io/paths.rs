use std::path::PathBuf;

/// Resolve the data directory holding `todos.json` and `config.toml`.
///
/// Precedence: explicit `--data-dir` flag, then `$TASKPAD_DIR`, then the
/// platform data directory (e.g. `~/.local/share/taskpad`), falling back to
/// `.taskpad` under the current directory when no home is known.
pub fn resolve_data_dir(flag: Option<&str>) -> PathBuf {
    if let Some(dir) = flag {
        return PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var("TASKPAD_DIR") {
        return PathBuf::from(dir);
    }
    match dirs::data_dir() {
        Some(base) => base.join("taskpad"),
        None => PathBuf::from(".taskpad"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_takes_precedence() {
        let dir = resolve_data_dir(Some("/tmp/somewhere"));
        assert_eq!(dir, PathBuf::from("/tmp/somewhere"));
    }

    #[test]
    fn default_ends_with_app_dir() {
        // Env var may leak in from the test environment; only check the
        // flag-less default shape when it is unset.
        if std::env::var("TASKPAD_DIR").is_err() {
            let dir = resolve_data_dir(None);
            assert!(dir.ends_with("taskpad") || dir.ends_with(".taskpad"));
        }
    }
}
