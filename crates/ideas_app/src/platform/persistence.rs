//! Remembers the last listing location between runs.
//!
//! Only the location is stored; fetched content is never persisted.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use ideas_logging::{ideas_info, ideas_warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

use super::history::Location;

const SESSION_FILENAME: &str = ".ideas_session.ron";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize session: {0}")]
    Serialize(#[from] ron::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedSession {
    location: String,
    saved_at: String,
}

pub(crate) fn load_location(state_dir: &Path) -> Option<Location> {
    let path = state_dir.join(SESSION_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
        Err(err) => {
            ideas_warn!("Failed to read session from {:?}: {}", path, err);
            return None;
        }
    };

    let session: PersistedSession = match ron::from_str(&content) {
        Ok(session) => session,
        Err(err) => {
            ideas_warn!("Failed to parse session from {:?}: {}", path, err);
            return None;
        }
    };

    let location = Location::parse(&session.location);
    if !location.is_listing() {
        ideas_warn!("Ignoring saved location outside the listing: {}", location);
        return None;
    }
    ideas_info!(
        "Restored location {} saved at {}",
        location,
        session.saved_at
    );
    Some(location)
}

/// Writes the session through a temp file in the same directory, then renames it.
pub(crate) fn save_location(state_dir: &Path, location: &Location) -> Result<PathBuf, PersistError> {
    fs::create_dir_all(state_dir)?;
    let session = PersistedSession {
        location: location.to_string(),
        saved_at: Utc::now().to_rfc3339(),
    };
    let content = ron::ser::to_string_pretty(&session, ron::ser::PrettyConfig::new())?;

    let target = state_dir.join(SESSION_FILENAME);
    let mut tmp = NamedTempFile::new_in(state_dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(&target).map_err(|err| PersistError::Io(err.error))?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_session_restores_nothing() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_location(temp.path()), None);
    }

    #[test]
    fn saved_listing_location_is_restored() {
        let temp = TempDir::new().unwrap();
        let location = Location::parse("/ideas?page=3&pageSize=20&sort=Oldest");
        let written = save_location(temp.path(), &location).unwrap();
        assert!(written.ends_with(SESSION_FILENAME));

        assert_eq!(load_location(temp.path()), Some(location));
    }

    #[test]
    fn saving_twice_replaces_previous_session() {
        let temp = TempDir::new().unwrap();
        save_location(temp.path(), &Location::parse("/ideas?page=2")).unwrap();
        save_location(temp.path(), &Location::parse("/ideas?page=5")).unwrap();
        assert_eq!(load_location(temp.path()).unwrap().query, "page=5");
    }

    #[test]
    fn corrupt_or_foreign_sessions_are_ignored() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SESSION_FILENAME), "not ron at all (").unwrap();
        assert_eq!(load_location(temp.path()), None);

        save_location(temp.path(), &Location::parse("/ideas/9")).unwrap();
        assert_eq!(load_location(temp.path()), None);
    }
}
