pub mod add;
pub mod clear;
pub mod edit;
pub mod get;
pub mod inspect;
pub mod list;
pub mod remove;
pub mod set;

pub use add::add_command;
pub use clear::clear_command;
pub use edit::edit_command;
pub use get::get_command;
pub use inspect::{has_command, type_command};
pub use list::list_command;
pub use remove::remove_command;
pub use set::set_command;

use crate::cli::Commands;
use crate::config::Config;
use crate::prefs::{PreferenceMedium, PreferenceStore};
use anyhow::Result;

/// Dispatch a parsed command against the store
pub fn run<M: PreferenceMedium>(
    command: Commands,
    store: &mut PreferenceStore<M>,
    config: &Config,
) -> Result<()> {
    // Prompts are skipped when forced or disabled in config.toml
    let skip_prompt = |force: bool| force || !config.confirm_destructive;

    match command {
        Commands::List => list_command(store),
        Commands::Get { key, value_type } => get_command(store, &key, value_type),
        Commands::Set {
            key,
            value,
            value_type,
        } => set_command(store, &key, &value, value_type),
        Commands::Add {
            key,
            value,
            value_type,
        } => add_command(store, &key, value, value_type),
        Commands::Edit {
            key,
            value,
            value_type,
            force,
        } => edit_command(store, &key, &value, value_type, skip_prompt(force)),
        Commands::Remove { key, force } => remove_command(store, &key, skip_prompt(force)),
        Commands::Clear { force } => clear_command(store, skip_prompt(force)),
        Commands::Has { key } => has_command(store, &key),
        Commands::Type { key } => type_command(store, &key),
    }
}
