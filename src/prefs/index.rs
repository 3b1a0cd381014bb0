//! Enumerable record of keys written through the store
//!
//! The backing medium cannot list its keys, so the store keeps this set and
//! persists it as JSON (`{"keys": [...]}`) under a reserved key.

use super::error::Result;
use super::medium::PreferenceMedium;
use super::types::PrefValue;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Reserved medium key holding the serialized index
pub const KEY_INDEX_KEY: &str = "__prefs_key_index";

/// Whether a key may be used for a user entry
pub fn is_user_key(key: &str) -> bool {
    !key.is_empty() && key != KEY_INDEX_KEY
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct KeyIndexDocument {
    #[serde(default)]
    keys: Option<Vec<String>>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct KeyIndex {
    keys: BTreeSet<String>,
}

impl KeyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the index from a medium
    ///
    /// A missing index is empty. A malformed one is logged and treated as empty
    /// so the store stays usable; it is overwritten on the next persist.
    pub fn load(medium: &impl PreferenceMedium) -> Self {
        match medium.get(KEY_INDEX_KEY) {
            None => {
                debug!("No key index found, starting empty");
                Self::new()
            }
            Some(PrefValue::Text(raw)) => match Self::decode(&raw) {
                Ok(index) => {
                    debug!("Loaded key index with {} keys", index.len());
                    index
                }
                Err(e) => {
                    warn!("Ignoring malformed key index: {}", e);
                    Self::new()
                }
            },
            Some(other) => {
                warn!("Ignoring key index stored as {}", other.value_type());
                Self::new()
            }
        }
    }

    pub fn decode(raw: &str) -> serde_json::Result<Self> {
        let doc: KeyIndexDocument = serde_json::from_str(raw)?;
        let keys = doc
            .keys
            .unwrap_or_default()
            .into_iter()
            .filter(|key| is_user_key(key))
            .collect();
        Ok(Self { keys })
    }

    pub fn encode(&self) -> Result<String> {
        let doc = KeyIndexDocument {
            keys: Some(self.keys.iter().cloned().collect()),
        };
        Ok(serde_json::to_string(&doc)?)
    }

    /// Write the index under the reserved key and flush the medium
    pub fn persist(&self, medium: &mut impl PreferenceMedium) -> Result<()> {
        medium.set(KEY_INDEX_KEY, PrefValue::Text(self.encode()?));
        medium.flush()?;
        debug!("Persisted key index with {} keys", self.len());
        Ok(())
    }

    /// Returns true if the key was not already present
    pub fn insert(&mut self, key: &str) -> bool {
        if self.keys.contains(key) {
            return false;
        }
        self.keys.insert(key.to_string())
    }

    /// Returns true if the key was present
    pub fn remove(&mut self, key: &str) -> bool {
        self.keys.remove(key)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn keys(&self) -> &BTreeSet<String> {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
