use crate::prefs::{PreferenceMedium, PreferenceStore, ValueType};
use crate::ui::prompts::text_input;
use anyhow::{Context, Result};
use log::info;

/// Add a new preference
///
/// # Arguments
/// * `key` - Preference key
/// * `value` - Value; prompted for when `None`
/// * `value_type` - Type to parse the value as
///
/// # Returns
/// * `Ok(())` - Preference added successfully
/// * `Err(anyhow::Error)` - Key already exists, invalid value, or storage error
pub fn add_command<M: PreferenceMedium>(
    store: &mut PreferenceStore<M>,
    key: &str,
    value: Option<String>,
    value_type: ValueType,
) -> Result<()> {
    info!("Adding preference: {}", key);

    if key.is_empty() {
        anyhow::bail!("Key must not be empty");
    }

    // Check if the key already exists
    if store.contains_key(key) {
        println!("Use 'prefs edit' to change an existing preference.");
        anyhow::bail!("A preference named '{}' already exists", key);
    }

    let value = match value {
        Some(value) => value,
        None => text_input(&format!("Value for '{}' ({})", key, value_type), None)?,
    };

    let stored = store.set_parsed(key, &value, value_type)?;
    store.save().context("Failed to save preferences")?;

    println!("Added preference: {} = {} ({})", key, stored, value_type);
    Ok(())
}
