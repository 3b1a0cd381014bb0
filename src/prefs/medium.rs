//! Backing media the preference store persists into
//!
//! A medium is a flat key-value store that can answer point lookups but is not
//! expected to enumerate its contents; the store keeps its own key index.

use super::error::{PrefsError, Result};
use super::types::PrefValue;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Persistent key-value API wrapped by the preference store
pub trait PreferenceMedium {
    /// Look up a stored value
    fn get(&self, key: &str) -> Option<PrefValue>;

    /// Store a value, replacing any previous value and type
    fn set(&mut self, key: &str, value: PrefValue);

    /// Delete a single key; absent keys are ignored
    fn delete_key(&mut self, key: &str);

    /// Delete every key in the medium
    fn delete_all(&mut self);

    /// Whether the medium holds a value for this key
    fn has_key(&self, key: &str) -> bool;

    /// Write pending changes to durable storage
    fn flush(&mut self) -> Result<()>;
}

/// In-process medium, used for tests and dry runs
#[derive(Debug, Default, Clone)]
pub struct MemoryMedium {
    entries: BTreeMap<String, PrefValue>,
    flushes: usize,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `flush` has been called
    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceMedium for MemoryMedium {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: PrefValue) {
        self.entries.insert(key.to_string(), value);
    }

    fn delete_key(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn delete_all(&mut self) {
        self.entries.clear();
    }

    fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

/// On-disk layout of a preference file
#[derive(Debug, Default, Serialize, Deserialize)]
struct PrefsDocument {
    #[serde(default)]
    entries: BTreeMap<String, PrefValue>,
}

/// Medium backed by a single TOML file
///
/// All entries are held in memory; `flush` rewrites the whole file.
#[derive(Debug)]
pub struct FileMedium {
    path: PathBuf,
    doc: PrefsDocument,
}

impl FileMedium {
    /// Open a preference file, starting empty if it does not exist yet
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        debug!("Opening preference file: {:?}", path);

        if !path.exists() {
            info!("Preference file doesn't exist, starting empty");
            return Ok(Self {
                path,
                doc: PrefsDocument::default(),
            });
        }

        let content = fs::read_to_string(&path).map_err(|source| PrefsError::Io {
            path: path.clone(),
            source,
        })?;

        let doc: PrefsDocument = toml::from_str(&content).map_err(|source| PrefsError::Parse {
            path: path.clone(),
            source,
        })?;

        debug!("Loaded {} entries from {:?}", doc.entries.len(), path);
        Ok(Self { path, doc })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceMedium for FileMedium {
    fn get(&self, key: &str) -> Option<PrefValue> {
        self.doc.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: PrefValue) {
        self.doc.entries.insert(key.to_string(), value);
    }

    fn delete_key(&mut self, key: &str) {
        self.doc.entries.remove(key);
    }

    fn delete_all(&mut self) {
        self.doc.entries.clear();
    }

    fn has_key(&self, key: &str) -> bool {
        self.doc.entries.contains_key(key)
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| PrefsError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
                info!("Created preference directory: {:?}", parent);
            }
        }

        let content = toml::to_string_pretty(&self.doc)?;
        fs::write(&self.path, content).map_err(|source| PrefsError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!("Flushed {} entries to {:?}", self.doc.entries.len(), self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_medium_basics() {
        let mut medium = MemoryMedium::new();
        medium.set("a", PrefValue::Int(1));
        medium.set("b", PrefValue::Text("x".to_string()));

        assert!(medium.has_key("a"));
        assert_eq!(medium.get("a"), Some(PrefValue::Int(1)));

        medium.delete_key("a");
        medium.delete_key("a");
        assert!(!medium.has_key("a"));

        medium.delete_all();
        assert!(medium.is_empty());
    }

    #[test]
    fn test_file_medium_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let medium = FileMedium::open(temp_dir.path().join("prefs.toml")).unwrap();
        assert!(!medium.has_key("anything"));
    }

    #[test]
    fn test_file_medium_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("prefs.toml");

        let mut medium = FileMedium::open(&path).unwrap();
        medium.set("volume", PrefValue::Float(0.8));
        medium.set("level", PrefValue::Int(3));
        medium.set("player name", PrefValue::Text("ada \"the\" great".to_string()));
        medium.flush().unwrap();

        let reopened = FileMedium::open(&path).unwrap();
        assert_eq!(reopened.get("volume"), Some(PrefValue::Float(0.8)));
        assert_eq!(reopened.get("level"), Some(PrefValue::Int(3)));
        assert_eq!(
            reopened.get("player name"),
            Some(PrefValue::Text("ada \"the\" great".to_string()))
        );
    }

    #[test]
    fn test_file_medium_rejects_garbage() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        let result = FileMedium::open(&path);
        assert!(matches!(result, Err(PrefsError::Parse { .. })));
    }
}
