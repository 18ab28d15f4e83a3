use std::fs;
use std::path::PathBuf;

use crate::error::ClientError;

/// Durable client-side storage for the two session entries the client
/// persists: the bearer token and the username it belongs to.
///
/// Entries live as plain files in the CLI config directory so that every
/// process invocation sees the same session, the way the browser client
/// kept them in local storage.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    dir: PathBuf,
}

const TOKEN_ENTRY: &str = "token";
const USERNAME_ENTRY: &str = "username";

pub fn default_config_dir() -> Result<PathBuf, ClientError> {
    if let Ok(custom_dir) = std::env::var("STUDY_PLANNER_CONFIG_DIR") {
        return Ok(PathBuf::from(custom_dir));
    }
    let home = std::env::var("HOME")
        .map_err(|_| ClientError::Config("HOME environment variable not set".to_string()))?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("study-planner")
        .join("cli"))
}

impl CredentialStore {
    pub fn open_default() -> Result<Self, ClientError> {
        Self::open(default_config_dir()?)
    }

    pub fn open(dir: PathBuf) -> Result<Self, ClientError> {
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(Self { dir })
    }

    pub fn token(&self) -> Option<String> {
        self.read_entry(TOKEN_ENTRY)
    }

    pub fn username(&self) -> Option<String> {
        self.read_entry(USERNAME_ENTRY)
    }

    pub fn save(&self, token: &str, username: &str) -> Result<(), ClientError> {
        fs::write(self.dir.join(TOKEN_ENTRY), token)?;
        fs::write(self.dir.join(USERNAME_ENTRY), username)?;
        Ok(())
    }

    /// Removes both entries. Missing files are not an error.
    pub fn clear(&self) -> Result<(), ClientError> {
        for entry in [TOKEN_ENTRY, USERNAME_ENTRY] {
            let path = self.dir.join(entry);
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }

    fn read_entry(&self, entry: &str) -> Option<String> {
        let content = fs::read_to_string(self.dir.join(entry)).ok()?;
        let trimmed = content.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> CredentialStore {
        let dir = std::env::temp_dir().join(format!("planner-store-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        CredentialStore::open(dir).unwrap()
    }

    #[test]
    fn round_trips_both_entries() {
        let store = temp_store("roundtrip");
        assert!(store.token().is_none());
        store.save("tok-abc", "alice").unwrap();
        assert_eq!(store.token().as_deref(), Some("tok-abc"));
        assert_eq!(store.username().as_deref(), Some("alice"));
    }

    #[test]
    fn clear_removes_both_entries() {
        let store = temp_store("clear");
        store.save("tok-abc", "alice").unwrap();
        store.clear().unwrap();
        assert!(store.token().is_none());
        assert!(store.username().is_none());
        // clearing twice is fine
        store.clear().unwrap();
    }
}
