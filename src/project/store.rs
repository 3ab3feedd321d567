//! Filesystem project store with timestamped backups

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{ProjectReader, ProjectWriter};
use crate::config::ProjectManifest;
use crate::error::{ImportError, Result};

/// JSON manifest on disk, e.g. `aurelia_project/aurelia.json`
#[derive(Debug, Clone)]
pub struct JsonProjectStore {
    path: PathBuf,
}

impl JsonProjectStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Backup path for a timestamp: `<file>.<millis>.bak`
    fn backup_path(&self, stamp: i64) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(format!(".{stamp}.bak"));
        PathBuf::from(name)
    }

    /// First unused backup path at or after the current time
    fn next_backup_path(&self) -> PathBuf {
        let mut stamp = chrono::Utc::now().timestamp_millis();
        loop {
            let candidate = self.backup_path(stamp);
            if !candidate.exists() {
                return candidate;
            }
            stamp += 1;
        }
    }

    /// Whether `file_name` is a backup of this store's manifest
    fn is_backup_name(&self, file_name: &str) -> bool {
        let Some(base) = self.path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        file_name
            .strip_prefix(base)
            .and_then(|rest| rest.strip_prefix('.'))
            .and_then(|rest| rest.strip_suffix(".bak"))
            .is_some_and(|stamp| !stamp.is_empty() && stamp.chars().all(|c| c.is_ascii_digit()))
    }

    /// Backups of this manifest, oldest first
    pub fn list_backups(&self) -> Result<Vec<PathBuf>> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut backups: Vec<PathBuf> = fs::read_dir(&dir)
            .map_err(|e| ImportError::FileReadFailed {
                path: dir.display().to_string(),
                reason: e.to_string(),
            })?
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| self.is_backup_name(name))
            })
            .map(|entry| entry.path())
            .collect();

        backups.sort();
        Ok(backups)
    }

    /// Remove every backup of this manifest; returns the removed paths
    pub fn clean_backups(&self) -> Result<Vec<PathBuf>> {
        let backups = self.list_backups()?;
        for backup in &backups {
            fs::remove_file(backup).map_err(|e| ImportError::FileWriteFailed {
                path: backup.display().to_string(),
                reason: e.to_string(),
            })?;
            debug!(path = %backup.display(), "removed manifest backup");
        }
        Ok(backups)
    }
}

impl ProjectReader for JsonProjectStore {
    fn read(&self) -> Result<ProjectManifest> {
        if !self.path.exists() {
            return Err(ImportError::ConfigNotFound {
                path: self.path.display().to_string(),
            });
        }

        let content = fs::read_to_string(&self.path).map_err(|e| ImportError::ConfigReadFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        let value = serde_json::from_str(&content).map_err(|e| ImportError::ConfigParseFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        ProjectManifest::from_value(value)
    }
}

impl ProjectWriter for JsonProjectStore {
    fn backup(&self) -> Result<PathBuf> {
        let backup = self.next_backup_path();
        fs::copy(&self.path, &backup).map_err(|e| ImportError::FileWriteFailed {
            path: backup.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!(path = %backup.display(), "created manifest backup");
        Ok(backup)
    }

    fn write(&self, manifest: &ProjectManifest) -> Result<()> {
        let mut content = manifest.to_json_pretty()?;
        content.push('\n');

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| ImportError::FileWriteFailed {
                    path: parent.display().to_string(),
                    reason: e.to_string(),
                })?;
            }
        }

        fs::write(&self.path, content).map_err(|e| ImportError::FileWriteFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn store_with(content: &str) -> (TempDir, JsonProjectStore) {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("aurelia_project");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("aurelia.json");
        fs::write(&path, content).unwrap();
        (temp, JsonProjectStore::new(path))
    }

    #[test]
    fn test_read_manifest() {
        let (_temp, store) =
            store_with(r#"{"build": {"bundles": [{"name": "vendor-bundle.js"}]}}"#);
        let manifest = store.read().unwrap();
        assert_eq!(manifest.bundles()[0].name, "vendor-bundle.js");
    }

    #[test]
    fn test_read_missing_manifest() {
        let temp = TempDir::new().unwrap();
        let store = JsonProjectStore::new(temp.path().join("aurelia.json"));
        assert!(matches!(
            store.read(),
            Err(ImportError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_read_invalid_json_reports_path() {
        let (_temp, store) = store_with("{not json");
        match store.read() {
            Err(ImportError::ConfigParseFailed { path, .. }) => {
                assert!(path.ends_with("aurelia.json"));
            }
            other => panic!("Expected ConfigParseFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_backup_then_write() {
        let original = r#"{"build": {"bundles": [{"name": "vendor-bundle.js"}]}}"#;
        let (_temp, store) = store_with(original);

        let mut manifest = store.read().unwrap();
        manifest.bundles_mut()[0].dependencies_mut().push("jquery".into());

        let backup = store.backup().unwrap();
        store.write(&manifest).unwrap();

        assert_eq!(fs::read_to_string(&backup).unwrap(), original);
        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(written["build"]["bundles"][0]["dependencies"], json!(["jquery"]));
    }

    #[test]
    fn test_backups_never_collide() {
        let (_temp, store) = store_with(r#"{"build": {"bundles": []}}"#);
        let first = store.backup().unwrap();
        let second = store.backup().unwrap();
        assert_ne!(first, second);
        assert_eq!(store.list_backups().unwrap().len(), 2);
    }

    #[test]
    fn test_clean_backups_only_touches_backups() {
        let (_temp, store) = store_with(r#"{"build": {"bundles": []}}"#);
        store.backup().unwrap();
        let dir = store.path().parent().unwrap().to_path_buf();
        fs::write(dir.join("aurelia.json.notes.bak"), "keep").unwrap();
        fs::write(dir.join("other.json.123.bak"), "keep").unwrap();

        let removed = store.clean_backups().unwrap();
        assert_eq!(removed.len(), 1);
        assert!(store.path().exists());
        assert!(dir.join("aurelia.json.notes.bak").exists());
        assert!(dir.join("other.json.123.bak").exists());
        assert!(store.list_backups().unwrap().is_empty());
    }
}
