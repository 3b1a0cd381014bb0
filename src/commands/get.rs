use crate::prefs::{PreferenceMedium, PreferenceStore, ValueType};
use anyhow::Result;
use log::info;

/// Print the value of a preference
///
/// # Arguments
/// * `key` - Preference key
/// * `value_type` - Expected type; defaults to the stored type
///
/// # Returns
/// * `Ok(())` - Value displayed successfully
/// * `Err(anyhow::Error)` - Unknown key or type mismatch
pub fn get_command<M: PreferenceMedium>(
    store: &PreferenceStore<M>,
    key: &str,
    value_type: Option<ValueType>,
) -> Result<()> {
    info!("Getting preference: {}", key);

    let Some(stored_type) = store.type_of(key) else {
        anyhow::bail!("Preference '{}' not found", key);
    };

    let requested = value_type.unwrap_or(stored_type);
    let value = store.get(key, requested.default_value())?;

    println!("{}", value);
    Ok(())
}
