//! File-backed session store.
//!
//! Persists the bearer token and last active view in a small JSON file
//! under the user's config directory so they survive between
//! invocations. Writes are best-effort: failures are logged and
//! tolerated, never surfaced to the command that triggered them.

use std::path::PathBuf;

use ismartpay_client::{ConsoleConfig, PersistedSession, SessionStore};

const SESSION_FILE_NAME: &str = "session.json";

/// Resolve the session file location: explicit override first, then
/// `$XDG_CONFIG_HOME/ismartpay/`, then `~/.config/ismartpay/`.
pub fn session_file_path(config: &ConsoleConfig) -> PathBuf {
    if let Some(path) = &config.session_file {
        return path.clone();
    }

    let config_dir = std::env::var_os("XDG_CONFIG_HOME").map_or_else(
        || {
            let home = std::env::var_os("HOME").unwrap_or_default();
            PathBuf::from(home).join(".config")
        },
        PathBuf::from,
    );

    config_dir.join("ismartpay").join(SESSION_FILE_NAME)
}

/// JSON-file [`SessionStore`].
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> PersistedSession {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("session file is corrupt, starting fresh: {e}");
                PersistedSession::default()
            }),
            Err(_) => PersistedSession::default(),
        }
    }

    fn save(&self, session: &PersistedSession) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("could not create session directory: {e}");
                return;
            }
        }

        match serde_json::to_string_pretty(session) {
            Ok(contents) => {
                if let Err(e) = std::fs::write(&self.path, contents) {
                    tracing::warn!("could not persist session: {e}");
                }
            }
            Err(e) => tracing::warn!("could not serialize session: {e}"),
        }
    }

    fn clear(&self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("could not remove session file: {e}");
            }
        }
    }
}
