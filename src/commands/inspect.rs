use crate::prefs::{PreferenceMedium, PreferenceStore};
use anyhow::Result;
use colored::*;

/// Report index membership and file presence of a key
///
/// The two can disagree when the file was edited by something other than
/// this tool.
pub fn has_command<M: PreferenceMedium>(store: &PreferenceStore<M>, key: &str) -> Result<()> {
    let indexed = store.contains_key(key);
    let present = store.has_key(key);

    println!("{:<10} {}", "indexed:", yes_no(indexed));
    println!("{:<10} {}", "stored:", yes_no(present));

    if indexed != present {
        println!("{}", "Key index and preference file disagree for this key.".yellow());
    }
    Ok(())
}

/// Print the stored type of a preference
pub fn type_command<M: PreferenceMedium>(store: &PreferenceStore<M>, key: &str) -> Result<()> {
    match store.type_of(key) {
        Some(ty) => {
            println!("{}", ty);
            Ok(())
        }
        None => anyhow::bail!("Preference '{}' not found", key),
    }
}

fn yes_no(value: bool) -> ColoredString {
    if value { "yes".green() } else { "no".red() }
}
