use anyhow::Result;
use dialoguer::{Input, Select};

/// Interactive confirmation prompt using arrow-key navigable selection
///
/// # Arguments
/// * `prompt` - The question to ask the user
/// * `default_yes` - Whether "Yes" should be the default selection (index 0)
///
/// # Returns
/// * `Ok(true)` if user selects "Yes"
/// * `Ok(false)` if user selects "No"
pub fn prompt_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let items = vec!["Yes", "No"];
    let default_index = if default_yes { 0 } else { 1 };

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default_index)
        .interact()?;

    Ok(selection == 0)
}

pub fn prompt_remove_confirmation(key: &str) -> Result<bool> {
    prompt_confirmation(
        &format!("Are you sure you want to remove '{}'?", key),
        false // Default to "No" for safety
    )
}

pub fn prompt_clear_confirmation(count: usize) -> Result<bool> {
    prompt_confirmation(
        &format!("Are you sure you want to remove all {} preferences?", count),
        false
    )
}

pub fn prompt_modify_confirmation(key: &str) -> Result<bool> {
    prompt_confirmation(&format!("Modify preference '{}'?", key), true)
}

/// Simple text input prompt with optional default value
///
/// # Arguments
/// * `prompt` - The prompt message to display
/// * `default` - Optional default value
///
/// # Returns
/// * `Ok(String)` - User input or default value
pub fn text_input(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input_prompt = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true);

    if let Some(default_val) = default {
        input_prompt = input_prompt.default(default_val.to_string());
    }

    Ok(input_prompt.interact_text()?)
}
