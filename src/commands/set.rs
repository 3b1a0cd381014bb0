use crate::prefs::{PreferenceMedium, PreferenceStore, ValueType};
use anyhow::{Context, Result};
use log::info;

/// Create or overwrite a preference
///
/// # Arguments
/// * `key` - Preference key
/// * `value` - Value as entered by the user
/// * `value_type` - Type to parse the value as
///
/// # Returns
/// * `Ok(())` - Preference stored successfully
/// * `Err(anyhow::Error)` - Invalid key or value, or storage error
pub fn set_command<M: PreferenceMedium>(
    store: &mut PreferenceStore<M>,
    key: &str,
    value: &str,
    value_type: ValueType,
) -> Result<()> {
    info!("Setting {} to {} ({})", key, value, value_type);

    let stored = store.set_parsed(key, value, value_type)?;
    store.save().context("Failed to save preferences")?;

    println!("Set {} = {} ({})", key, stored, value_type);
    Ok(())
}
