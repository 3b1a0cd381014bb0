use crate::prefs::{PreferenceMedium, PreferenceStore};
use crate::ui::prompts::prompt_remove_confirmation;
use anyhow::Result;
use log::info;

/// Remove a preference
///
/// # Arguments
/// * `key` - Preference key
/// * `skip_prompt` - Skip confirmation prompt
///
/// # Returns
/// * `Ok(())` - Preference removed, absent, or the user cancelled
/// * `Err(anyhow::Error)` - Storage error
pub fn remove_command<M: PreferenceMedium>(
    store: &mut PreferenceStore<M>,
    key: &str,
    skip_prompt: bool,
) -> Result<()> {
    info!("Removing preference: {}", key);

    if !store.contains_key(key) {
        println!("Preference '{}' not found.", key);
        return Ok(());
    }

    if !skip_prompt && !prompt_remove_confirmation(key)? {
        println!("Operation cancelled.");
        return Ok(());
    }

    store.remove(key)?;

    println!("Removed preference: {}", key);
    Ok(())
}
