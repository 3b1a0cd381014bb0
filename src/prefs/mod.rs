//! Typed key-value preference store
//!
//! The store provides:
//! - Text, integer and float values with a per-key type tag
//! - An enumerable key index on top of a medium that cannot list its keys
//! - Change notification for views derived from the key set
//! - In-memory and TOML file media

pub mod error;
pub mod index;
pub mod medium;
pub mod notify;
pub mod store;
pub mod types;
pub mod view;

pub use error::{PrefsError, Result};
pub use index::{KEY_INDEX_KEY, KeyIndex};
pub use medium::{FileMedium, MemoryMedium, PreferenceMedium};
pub use notify::{PrefsChanged, SubscriptionId};
pub use store::PreferenceStore;
pub use types::{Entry, PrefValue, ValueType};
pub use view::{PreferenceRow, PreferenceView};
