//! Typed preference store over a backing medium

use super::error::{PrefsError, Result};
use super::index::{KEY_INDEX_KEY, KeyIndex, is_user_key};
use super::medium::PreferenceMedium;
use super::notify::{Observers, PrefsChanged, SubscriptionId};
use super::types::{Entry, PrefValue, ValueType};
use log::{debug, info, warn};
use std::collections::BTreeSet;
use std::sync::mpsc::Receiver;

/// Registry of typed preferences with an enumerable key index
///
/// Construct one per process and pass it by reference to whatever needs it.
/// Observers are notified after every persistence of the key index, which
/// happens when a key is first written, removed, or everything is cleared.
/// Overwriting an existing key does not notify.
pub struct PreferenceStore<M> {
    medium: M,
    index: KeyIndex,
    observers: Observers,
}

impl<M: PreferenceMedium> PreferenceStore<M> {
    /// Create a store, loading the key index from the medium
    pub fn new(medium: M) -> Self {
        let index = KeyIndex::load(&medium);
        debug!("Opened preference store with {} keys", index.len());
        Self {
            medium,
            index,
            observers: Observers::new(),
        }
    }

    pub fn medium(&self) -> &M {
        &self.medium
    }

    /// Consume the store, returning the medium
    pub fn into_medium(self) -> M {
        self.medium
    }

    /// Store a value under `key`, replacing any previous value and type
    pub fn set(&mut self, key: &str, value: impl Into<PrefValue>) -> Result<()> {
        validate_key(key)?;
        let value = value.into();
        debug!("Set preference: {} = {} ({})", key, value, value.value_type());

        self.medium.set(key, value);
        if self.index.insert(key) {
            self.persist_index()?;
        }
        Ok(())
    }

    /// Parse `raw` as `ty` and store it
    ///
    /// Nothing is written if the text does not parse.
    pub fn set_parsed(&mut self, key: &str, raw: &str, ty: ValueType) -> Result<PrefValue> {
        validate_key(key)?;
        let value = ty.parse_value(raw)?;
        self.set(key, value.clone())?;
        Ok(value)
    }

    /// Read `key` as the type of `default`, or return `default` if absent
    ///
    /// A key stored as another type is a `TypeMismatch` error, not a coercion.
    pub fn get(&self, key: &str, default: PrefValue) -> Result<PrefValue> {
        let Some(value) = self.value(key) else {
            return Ok(default);
        };

        let requested = default.value_type();
        let stored = value.value_type();
        if stored != requested {
            return Err(mismatch(key, stored, requested));
        }
        Ok(value)
    }

    /// Raw stored value for a user key, whatever its type
    pub fn value(&self, key: &str) -> Option<PrefValue> {
        if !is_user_key(key) {
            return None;
        }
        self.medium.get(key)
    }

    /// Type tag of a stored key
    pub fn type_of(&self, key: &str) -> Option<ValueType> {
        self.value(key).map(|value| value.value_type())
    }

    pub fn set_text(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        self.set(key, PrefValue::Text(value.into()))
    }

    pub fn set_int(&mut self, key: &str, value: i64) -> Result<()> {
        self.set(key, PrefValue::Int(value))
    }

    pub fn set_float(&mut self, key: &str, value: f64) -> Result<()> {
        self.set(key, PrefValue::Float(value))
    }

    pub fn get_text(&self, key: &str, default: &str) -> Result<String> {
        match self.value(key) {
            None => Ok(default.to_string()),
            Some(PrefValue::Text(v)) => Ok(v),
            Some(other) => Err(mismatch(key, other.value_type(), ValueType::Text)),
        }
    }

    pub fn get_int(&self, key: &str, default: i64) -> Result<i64> {
        match self.value(key) {
            None => Ok(default),
            Some(PrefValue::Int(v)) => Ok(v),
            Some(other) => Err(mismatch(key, other.value_type(), ValueType::Int)),
        }
    }

    pub fn get_float(&self, key: &str, default: f64) -> Result<f64> {
        match self.value(key) {
            None => Ok(default),
            Some(PrefValue::Float(v)) => Ok(v),
            Some(other) => Err(mismatch(key, other.value_type(), ValueType::Float)),
        }
    }

    /// Delete `key`; removing an absent key is a no-op
    pub fn remove(&mut self, key: &str) -> Result<()> {
        if !is_user_key(key) {
            return Ok(());
        }

        self.medium.delete_key(key);
        if self.index.remove(key) {
            info!("Removed preference: {}", key);
            self.persist_index()?;
        } else {
            debug!("Remove of unknown preference ignored: {}", key);
        }
        Ok(())
    }

    /// Empty the medium and the key index
    pub fn clear_all(&mut self) -> Result<()> {
        info!("Clearing all preferences ({} keys)", self.index.len());
        self.medium.delete_all();
        self.index.clear();
        self.persist_index()
    }

    /// Live set of known keys
    pub fn all_keys(&self) -> &BTreeSet<String> {
        self.index.keys()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains(key)
    }

    /// Ask the medium directly, bypassing the key index
    pub fn has_key(&self, key: &str) -> bool {
        self.medium.has_key(key)
    }

    /// Snapshot of every indexed entry, in key order
    pub fn entries(&self) -> Vec<Entry> {
        self.index
            .keys()
            .iter()
            .filter_map(|key| match self.medium.get(key) {
                Some(value) => Some(Entry {
                    key: key.clone(),
                    value,
                }),
                None => {
                    warn!("Indexed preference '{}' has no stored value", key);
                    None
                }
            })
            .collect()
    }

    /// Flush the medium
    pub fn save(&mut self) -> Result<()> {
        self.medium.flush()
    }

    /// Notify observers without a key index change, e.g. after an edit
    pub fn notify_changed(&mut self) {
        self.observers.notify();
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut() + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn subscribe_channel(&mut self) -> Receiver<PrefsChanged> {
        self.observers.subscribe_channel()
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn persist_index(&mut self) -> Result<()> {
        self.index.persist(&mut self.medium)?;
        self.observers.notify();
        Ok(())
    }
}

fn mismatch(key: &str, stored: ValueType, requested: ValueType) -> PrefsError {
    PrefsError::TypeMismatch {
        key: key.to_string(),
        stored,
        requested,
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(PrefsError::invalid("key must not be empty"));
    }
    if key == KEY_INDEX_KEY {
        return Err(PrefsError::invalid(format!("'{}' is reserved", KEY_INDEX_KEY)));
    }
    Ok(())
}
