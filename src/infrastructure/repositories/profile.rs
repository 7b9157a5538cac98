//! JSON Profile Repository
//!
//! Implements the ProfileRepository port on `.ftpush.json`.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::entities::DeploymentProfile;
use crate::domain::ports::{LoadedProfile, ProfileError, ProfileRepository};

/// JSON-based profile repository
///
/// Writes pretty-printed JSON with a trailing newline, replacing the file
/// atomically.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonProfileRepository;

impl JsonProfileRepository {
    pub fn new() -> Self {
        Self
    }
}

fn io_error(path: &Path, source: std::io::Error) -> ProfileError {
    ProfileError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl ProfileRepository for JsonProfileRepository {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn load(&self, path: &Path) -> Result<LoadedProfile, ProfileError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ProfileError::NotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => return Err(io_error(path, e)),
        };

        let mut unknown_keys = Vec::new();
        let deserializer = &mut serde_json::Deserializer::from_str(&content);
        let profile: DeploymentProfile = serde_ignored::deserialize(deserializer, |p| {
            unknown_keys.push(p.to_string());
        })
        .map_err(|e| ProfileError::Invalid {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if !unknown_keys.is_empty() {
            debug!(?unknown_keys, "profile contains unknown keys");
        }
        Ok(LoadedProfile {
            profile,
            unknown_keys,
        })
    }

    fn save(&self, profile: &DeploymentProfile, path: &Path) -> Result<(), ProfileError> {
        let mut json = serde_json::to_string_pretty(profile).map_err(|e| ProfileError::Invalid {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        json.push('\n');

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| io_error(path, e))?;
        tmp.write_all(json.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| io_error(path, e))?;
        tmp.persist(path).map_err(|e| io_error(path, e.error))?;
        debug!(path = %path.display(), records = profile.history.len(), "profile saved");
        Ok(())
    }
}
