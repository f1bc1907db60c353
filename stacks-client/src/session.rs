// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Session persistence: one serialized session object under a fixed filename.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::ClientResult;
use crate::wallet::Session;

/// Fixed session filename, the file-based analogue of the wallet storage key.
pub const SESSION_FILENAME: &str = "stacks-session.json";

/// Default session path under `~/.stacks-dapps/`.
pub fn default_session_path() -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        home.join(".stacks-dapps").join(SESSION_FILENAME)
    } else {
        PathBuf::from(SESSION_FILENAME)
    }
}

/// Load a previously persisted session, if any.
///
/// A missing file means "not connected"; an unreadable file is treated the
/// same way, after a warning, so a corrupt session never wedges the view.
pub fn load_session(path: &Path) -> Option<Session> {
    let contents = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&contents) {
        Ok(session) => Some(session),
        Err(err) => {
            warn!("discarding unreadable session at {}: {}", path.display(), err);
            None
        }
    }
}

/// Persist the session, creating parent directories as needed.
pub fn save_session(path: &Path, session: &Session) -> ClientResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(session)?)?;
    Ok(())
}

/// Remove the persisted session on disconnect.
pub fn clear_session(path: &Path) -> ClientResult<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SESSION_FILENAME);

        assert_eq!(load_session(&path), None);

        let session = Session::demo();
        save_session(&path, &session).unwrap();
        assert_eq!(load_session(&path), Some(session));

        clear_session(&path).unwrap();
        assert_eq!(load_session(&path), None);
        // Clearing twice is fine.
        clear_session(&path).unwrap();
    }

    #[test]
    fn corrupt_session_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SESSION_FILENAME);
        fs::write(&path, "{not json").unwrap();
        assert_eq!(load_session(&path), None);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("dirs").join(SESSION_FILENAME);
        save_session(&path, &Session::demo()).unwrap();
        assert!(load_session(&path).is_some());
    }
}
