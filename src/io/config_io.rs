use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Optional user configuration, read from `config.toml` in the data directory
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    /// Command palette suggestions (replaces the built-in list when set)
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    /// Color overrides, hex strings keyed by theme slot (`[ui.colors]`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

/// Read `config.toml` from the data directory.
/// Missing or malformed config yields `None`; callers fall back to defaults.
pub fn read_config(dir: &Path) -> Option<Config> {
    let content = fs::read_to_string(dir.join("config.toml")).ok()?;
    toml::from_str(&content).ok()
}
