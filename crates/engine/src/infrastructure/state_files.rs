//! Overlay state files.
//!
//! Writes the current game state into the overlay directory:
//! - `game_state.json` for the HTML overlay
//! - `stats.txt` and `last_action.txt` for plain text sources
//!
//! Each file is written to a temporary sibling and renamed into place so the
//! overlay never reads a half-written file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use survivor_domain::GameSnapshot;

use crate::infrastructure::ports::{SinkError, StateSinkPort};

pub const STATE_JSON_FILE: &str = "game_state.json";
pub const STATS_FILE: &str = "stats.txt";
pub const LAST_ACTION_FILE: &str = "last_action.txt";

/// Default overlay directory, relative to the working directory.
pub const DEFAULT_OVERLAY_DIR: &str = "obs_files";

pub struct FileStateSink {
    dir: PathBuf,
}

impl FileStateSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the overlay directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), SinkError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| SinkError::io(self.dir.display(), e))
    }

    async fn write_atomic(&self, file_name: &str, contents: &[u8]) -> Result<(), SinkError> {
        let target = self.dir.join(file_name);
        let tmp = self.dir.join(format!(".{file_name}.tmp"));

        tokio::fs::write(&tmp, contents)
            .await
            .map_err(|e| SinkError::io(tmp.display(), e))?;
        tokio::fs::rename(&tmp, &target)
            .await
            .map_err(|e| SinkError::io(target.display(), e))
    }
}

#[async_trait]
impl StateSinkPort for FileStateSink {
    async fn write_snapshot(&self, snapshot: &GameSnapshot) -> Result<(), SinkError> {
        let json = serde_json::to_vec_pretty(snapshot)?;
        self.write_atomic(STATE_JSON_FILE, &json).await?;
        self.write_atomic(STATS_FILE, render_stats(snapshot).as_bytes())
            .await?;
        self.write_atomic(LAST_ACTION_FILE, snapshot.last_action.as_bytes())
            .await
    }
}

/// Human-readable stats block for text overlays.
pub fn render_stats(snapshot: &GameSnapshot) -> String {
    let filled = (snapshot.hp / 10) as usize;
    let empty = (snapshot.max_hp.saturating_sub(snapshot.hp) / 10) as usize;
    let hp_bar = format!("{}{}", "#".repeat(filled), ".".repeat(empty));

    let items = if snapshot.recent_items.is_empty() {
        "Empty".to_string()
    } else {
        snapshot.recent_items.join(", ")
    };

    let monster = match &snapshot.monster {
        Some(m) if m.is_alive => format!("{} {}/{}", m.name, m.hp, m.max_hp),
        Some(m) => format!("{} (defeated)", m.name),
        None => "None".to_string(),
    };

    format!(
        "=== THE SURVIVOR ===\n\
         HP: {}/{}\n\
         [{}]\n\
         Level: {}\n\
         XP: {}/{}\n\
         Recent items: {}\n\
         Monster: {}\n\
         Likes: {} (next milestone in {})\n",
        snapshot.hp,
        snapshot.max_hp,
        hp_bar,
        snapshot.level,
        snapshot.xp,
        snapshot.xp_for_next_level,
        items,
        monster,
        snapshot.total_likes,
        snapshot.likes_to_next_milestone,
    )
}
