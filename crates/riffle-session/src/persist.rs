// Session persistence: save/restore the compared texts across restarts.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::DiffSession;
use riffle_core::Side;

#[derive(Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub left_title: String,
    pub right_title: String,
    pub left_text: String,
    pub right_text: String,
    #[serde(default)]
    pub scroll: usize,
}

impl SessionSnapshot {
    pub fn from_session(session: &DiffSession) -> Self {
        Self {
            left_title: session.title(Side::Left).to_string(),
            right_title: session.title(Side::Right).to_string(),
            left_text: session.text(Side::Left),
            right_text: session.text(Side::Right),
            scroll: session.scroll(),
        }
    }

    /// Rebuild a session from a snapshot. Snapshot text was written by the
    /// engine and is already normalized.
    pub fn into_session(self) -> DiffSession {
        let mut session = DiffSession::new(&self.left_text, &self.right_text);
        session.left_title = self.left_title;
        session.right_title = self.right_title;
        session.set_scroll(self.scroll);
        session
    }
}

// ──────────────────────────────────────────────
// Snapshot file I/O
// ──────────────────────────────────────────────

fn snapshot_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("riffle").join("session.json"))
}

pub fn save_snapshot(snapshot: &SessionSnapshot) {
    let path = match snapshot_path() {
        Some(p) => p,
        None => {
            log::warn!("Could not determine config directory for session save");
            return;
        }
    };

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            log::error!("Failed to create session directory: {}", e);
            return;
        }
    }

    match serde_json::to_string_pretty(snapshot) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&path, json) {
                log::error!("Failed to write session file: {}", e);
            }
        }
        Err(e) => {
            log::error!("Failed to serialize session: {}", e);
        }
    }
}

pub fn load_snapshot() -> Option<SessionSnapshot> {
    let path = snapshot_path()?;
    let data = std::fs::read_to_string(&path).ok()?;
    serde_json::from_str(&data).ok()
}
