//! Display cache kept in sync with a store through change notifications

use super::medium::PreferenceMedium;
use super::notify::PrefsChanged;
use super::store::PreferenceStore;
use super::types::ValueType;
use log::debug;
use std::sync::mpsc::Receiver;

/// One rendered line of the preference listing
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceRow {
    pub key: String,
    pub value: String,
    pub value_type: ValueType,
}

/// Snapshot of a store's entries for rendering
///
/// Rows are owned copies, so rendering never holds a borrow of the live key
/// set while the store is being modified.
pub struct PreferenceView {
    rows: Vec<PreferenceRow>,
    changes: Receiver<PrefsChanged>,
}

impl PreferenceView {
    /// Subscribe to `store` and take an initial snapshot
    pub fn attach<M: PreferenceMedium>(store: &mut PreferenceStore<M>) -> Self {
        let changes = store.subscribe_channel();
        let mut view = Self {
            rows: Vec::new(),
            changes,
        };
        view.refresh(store);
        view
    }

    /// Rebuild every row from the store
    pub fn refresh<M: PreferenceMedium>(&mut self, store: &PreferenceStore<M>) {
        self.rows = store
            .entries()
            .into_iter()
            .map(|entry| PreferenceRow {
                value_type: entry.type_tag(),
                value: entry.value.to_string(),
                key: entry.key,
            })
            .collect();
        debug!("Refreshed preference view ({} rows)", self.rows.len());
    }

    /// Refresh if any change notification arrived since the last sync
    ///
    /// Returns whether a refresh happened.
    pub fn sync<M: PreferenceMedium>(&mut self, store: &PreferenceStore<M>) -> bool {
        let mut changed = false;
        while self.changes.try_recv().is_ok() {
            changed = true;
        }
        if changed {
            self.refresh(store);
        }
        changed
    }

    pub fn rows(&self) -> &[PreferenceRow] {
        &self.rows
    }

    pub fn find(&self, key: &str) -> Option<&PreferenceRow> {
        self.rows.iter().find(|row| row.key == key)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::medium::MemoryMedium;

    #[test]
    fn test_attach_takes_snapshot() {
        let mut store = PreferenceStore::new(MemoryMedium::new());
        store.set_float("volume", 0.5).unwrap();

        let view = PreferenceView::attach(&mut store);
        assert_eq!(
            view.rows(),
            &[PreferenceRow {
                key: "volume".to_string(),
                value: "0.5".to_string(),
                value_type: ValueType::Float,
            }]
        );
    }

    #[test]
    fn test_sync_only_after_notification() {
        let mut store = PreferenceStore::new(MemoryMedium::new());
        let mut view = PreferenceView::attach(&mut store);
        assert!(!view.sync(&store));

        store.set_int("level", 1).unwrap();
        assert!(view.sync(&store));
        assert_eq!(view.find("level").map(|r| r.value.as_str()), Some("1"));

        // Overwrites leave the key set alone and do not notify
        store.set_int("level", 2).unwrap();
        assert!(!view.sync(&store));
        assert_eq!(view.find("level").map(|r| r.value.as_str()), Some("1"));

        store.notify_changed();
        assert!(view.sync(&store));
        assert_eq!(view.find("level").map(|r| r.value.as_str()), Some("2"));

        store.clear_all().unwrap();
        assert!(view.sync(&store));
        assert!(view.is_empty());
    }
}
