use std::fs;
use std::path::Path;

use chrono::Utc;
use client_logging::{client_info, client_warn};
use serde::{Deserialize, Serialize};

const PREFS_FILENAME: &str = ".storesync_prefs.ron";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedPrefs {
    active_tab: Option<String>,
    saved_utc: Option<String>,
}

/// Loads the last-active tab name, or `None` when nothing usable is on
/// disk. A missing, unreadable, or corrupt file is not an error; the host
/// just starts on its default tab.
pub fn load_active_tab(prefs_dir: &Path) -> Option<String> {
    let path = prefs_dir.join(PREFS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return None;
        }
        Err(err) => {
            client_warn!("Failed to read prefs from {:?}: {}", path, err);
            return None;
        }
    };

    let prefs: PersistedPrefs = match ron::from_str(&content) {
        Ok(prefs) => prefs,
        Err(err) => {
            client_warn!("Failed to parse prefs from {:?}: {}", path, err);
            return None;
        }
    };

    prefs.active_tab
}

/// Persists the last-active tab name. Best effort; failures are logged and
/// swallowed, since a lost preference only costs one extra click.
pub fn save_active_tab(prefs_dir: &Path, name: &str) {
    if let Err(err) = fs::create_dir_all(prefs_dir) {
        client_warn!("Failed to ensure prefs dir {:?}: {}", prefs_dir, err);
        return;
    }

    let prefs = PersistedPrefs {
        active_tab: Some(name.to_string()),
        saved_utc: Some(Utc::now().to_rfc3339()),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&prefs, pretty) {
        Ok(text) => text,
        Err(err) => {
            client_warn!("Failed to serialize prefs: {}", err);
            return;
        }
    };

    // Write-then-rename so a crash mid-write never leaves a torn file.
    let path = prefs_dir.join(PREFS_FILENAME);
    let tmp_path = prefs_dir.join(format!("{PREFS_FILENAME}.tmp"));
    if let Err(err) = fs::write(&tmp_path, &content) {
        client_warn!("Failed to write prefs to {:?}: {}", tmp_path, err);
        return;
    }
    if let Err(err) = fs::rename(&tmp_path, &path) {
        client_warn!("Failed to move prefs into place at {:?}: {}", path, err);
        return;
    }
    client_info!("Saved active tab {:?} to {:?}", name, path);
}
