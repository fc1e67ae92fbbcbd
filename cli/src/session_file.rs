//! `SessionStore` persisted as a small JSON file.
//!
//! The file holds `{ "token": ..., "user": ... }`. It is created on login and
//! removed on logout or when the server rejects the token.

use std::io;
use std::path::{Path, PathBuf};

use api::{SessionStore, StoredSession, User};

pub const DEFAULT_SESSION_FILE: &str = ".menu-session.json";

#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Option<StoredSession> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "session file unreadable");
                return None;
            }
        };
        match serde_json::from_str::<StoredSession>(&raw) {
            Ok(session) if !session.token.is_empty() => Some(session),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "session file malformed");
                None
            }
        }
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<String> {
        self.load().map(|s| s.token)
    }

    fn user(&self) -> Option<User> {
        self.load().and_then(|s| s.user)
    }

    fn save(&self, session: &StoredSession) {
        let result = serde_json::to_string_pretty(session)
            .map_err(io::Error::other)
            .and_then(|raw| std::fs::write(&self.path, raw));
        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to write session file");
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(path = %self.path.display(), error = %e, "failed to remove session file"),
        }
    }
}

#[cfg(test)]
#[path = "session_file_test.rs"]
mod session_file_test;
