use crate::theme::ThemeKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Persisted user preferences. The theme flag is the only one so far; it
/// is stored verbatim and read back on startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: ThemeKind,
}

/// Where the preference file lives.
fn prefs_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sunvale_prefs.json")
}

/// Parse a preference file body, falling back to defaults on anything
/// unreadable.
fn parse(json: &str) -> Preferences {
    serde_json::from_str(json).unwrap_or_default()
}

/// Load preferences from disk. A missing or corrupt file yields defaults.
pub fn load() -> Preferences {
    match fs::read_to_string(prefs_path()) {
        Ok(json) => parse(&json),
        Err(_) => Preferences::default(),
    }
}

/// Write preferences to disk.
pub fn save(prefs: &Preferences) -> io::Result<()> {
    let json = serde_json::to_string_pretty(prefs).map_err(io::Error::from)?;
    fs::write(prefs_path(), json)
}
