use crate::prefs::{PreferenceMedium, PreferenceStore};
use crate::ui::prompts::prompt_clear_confirmation;
use anyhow::Result;
use log::info;

/// Remove every preference
///
/// # Arguments
/// * `skip_prompt` - Skip confirmation prompt
///
/// # Returns
/// * `Ok(())` - Store cleared, or the user cancelled
/// * `Err(anyhow::Error)` - Storage error
pub fn clear_command<M: PreferenceMedium>(
    store: &mut PreferenceStore<M>,
    skip_prompt: bool,
) -> Result<()> {
    let count = store.all_keys().len();
    info!("Clearing {} preferences", count);

    if !skip_prompt && !prompt_clear_confirmation(count)? {
        println!("Operation cancelled.");
        return Ok(());
    }

    store.clear_all()?;

    println!("Removed all preferences ({} keys).", count);
    Ok(())
}
