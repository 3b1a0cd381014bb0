use crate::prefs::{PreferenceMedium, PreferenceStore, ValueType};
use crate::ui::prompts::prompt_modify_confirmation;
use anyhow::{Context, Result};
use log::info;

/// Modify an existing preference
///
/// The new value is validated before asking for confirmation, so a rejected
/// value never reaches the store.
///
/// # Arguments
/// * `key` - Preference key
/// * `value` - New value as entered by the user
/// * `value_type` - New type; defaults to the stored type
/// * `skip_prompt` - Skip confirmation prompt
///
/// # Returns
/// * `Ok(())` - Preference modified, or the user cancelled
/// * `Err(anyhow::Error)` - Unknown key, invalid value, or storage error
pub fn edit_command<M: PreferenceMedium>(
    store: &mut PreferenceStore<M>,
    key: &str,
    value: &str,
    value_type: Option<ValueType>,
    skip_prompt: bool,
) -> Result<()> {
    info!("Editing preference: {}", key);

    let current = match store.value(key) {
        Some(current) if store.contains_key(key) => current,
        _ => {
            println!("Use 'prefs add' to create a new preference.");
            anyhow::bail!("Preference '{}' not found", key);
        }
    };

    let value_type = value_type.unwrap_or_else(|| current.value_type());
    let new_value = value_type.parse_value(value)?;

    println!("Current: {} = {} ({})", key, current, current.value_type());
    println!("New:     {} = {} ({})", key, new_value, value_type);

    if !skip_prompt && !prompt_modify_confirmation(key)? {
        println!("Operation cancelled.");
        return Ok(());
    }

    store.set(key, new_value)?;
    store.notify_changed();
    store.save().context("Failed to save preferences")?;

    println!("Modified preference: {}", key);
    Ok(())
}
