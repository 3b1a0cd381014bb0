use crate::prefs::{PreferenceMedium, PreferenceStore, PreferenceView};
use anyhow::Result;
use colored::*;
use log::info;

/// List all preferences
///
/// # Returns
/// * `Ok(())` - List displayed successfully
pub fn list_command<M: PreferenceMedium>(store: &mut PreferenceStore<M>) -> Result<()> {
    info!("Listing preferences");

    let view = PreferenceView::attach(store);

    if view.is_empty() {
        println!("No preferences stored.");
        return Ok(());
    }

    println!(
        "{:<24} {:<32} {}",
        "Key".bold(),
        "Value".bold(),
        "Type".bold()
    );
    println!("{}", "-".repeat(64));

    for row in view.rows() {
        println!(
            "{:<24} {:<32} {}",
            row.key.cyan(),
            row.value,
            row.value_type.to_string().dimmed()
        );
    }

    println!("\nTotal preferences: {}", view.len());
    Ok(())
}
