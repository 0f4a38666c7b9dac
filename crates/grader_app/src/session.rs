use std::fs;
use std::io::Write as _;
use std::path::Path;

use client_logging::{client_info, client_warn};
use grader_core::Identity;
use serde::{Deserialize, Serialize};

const SESSION_FILENAME: &str = ".grader_session.ron";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredSession {
    id_token: String,
    email: Option<String>,
}

/// Resolves the stored session. `Ok(None)` means no session is stored (the
/// user is signed out); an unreadable or unparsable file is an auth failure
/// the UI can offer to reset.
pub(crate) fn load_identity(dir: &Path) -> Result<Option<Identity>, String> {
    let path = dir.join(SESSION_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            client_warn!("failed to read stored session from {:?}: {}", path, err);
            return Err(format!("stored session unreadable: {err}"));
        }
    };

    let stored: StoredSession = ron::from_str(&content)
        .map_err(|err| format!("stored session corrupt: {err}"))?;

    client_info!("resolved stored session from {:?}", path);
    Ok(Some(Identity {
        id_token: stored.id_token,
        email: stored.email,
    }))
}

/// Writes the session atomically: temp file in the same directory, then
/// rename over the target.
pub(crate) fn save_identity(dir: &Path, identity: &Identity) -> Result<(), String> {
    let stored = StoredSession {
        id_token: identity.id_token.clone(),
        email: identity.email.clone(),
    };
    let content = ron::ser::to_string_pretty(&stored, ron::ser::PrettyConfig::new())
        .map_err(|err| format!("failed to serialize session: {err}"))?;

    let target = dir.join(SESSION_FILENAME);
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .map_err(|err| format!("failed to stage session file: {err}"))?;
    tmp.write_all(content.as_bytes())
        .and_then(|()| tmp.flush())
        .map_err(|err| format!("failed to write session file: {err}"))?;
    tmp.persist(&target)
        .map_err(|err| format!("failed to store session file: {err}"))?;
    Ok(())
}

/// Drops the stored session; missing file is fine.
pub(crate) fn clear(dir: &Path) {
    let path = dir.join(SESSION_FILENAME);
    match fs::remove_file(&path) {
        Ok(()) => client_info!("cleared stored session at {:?}", path),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => client_warn!("failed to clear stored session at {:?}: {}", path, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            id_token: "token-abc".to_string(),
            email: Some("user@example.com".to_string()),
        }
    }

    #[test]
    fn missing_file_resolves_to_signed_out() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(load_identity(dir.path()), Ok(None));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        save_identity(dir.path(), &identity()).expect("save ok");

        let loaded = load_identity(dir.path()).expect("load ok");
        assert_eq!(loaded, Some(identity()));
    }

    #[test]
    fn corrupt_file_is_an_auth_failure() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(SESSION_FILENAME), "not ron {{{").expect("write");

        let result = load_identity(dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn clear_removes_the_stored_session() {
        let dir = tempfile::tempdir().expect("tempdir");
        save_identity(dir.path(), &identity()).expect("save ok");

        clear(dir.path());

        assert_eq!(load_identity(dir.path()), Ok(None));
        // Clearing again is harmless.
        clear(dir.path());
    }
}
