use crate::prefs::ValueType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prefs")]
#[command(about = "Inspect, edit and manage a typed preference store")]
pub struct Cli {
    /// Preference file to operate on (overrides PREFS_FILE and config.toml)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all preferences with their values and types
    List,
    /// Print the value of a preference
    Get {
        /// Preference key
        key: String,
        /// Expected type (defaults to the stored type)
        #[arg(short = 't', long = "type")]
        value_type: Option<ValueType>,
    },
    /// Create or overwrite a preference
    Set {
        /// Preference key
        key: String,
        /// New value
        value: String,
        /// Value type: text, int or float
        #[arg(short = 't', long = "type", default_value = "text")]
        value_type: ValueType,
    },
    /// Add a new preference; fails if the key already exists
    Add {
        /// Preference key
        key: String,
        /// Value (prompted for if omitted)
        value: Option<String>,
        /// Value type: text, int or float
        #[arg(short = 't', long = "type", default_value = "text")]
        value_type: ValueType,
    },
    /// Modify an existing preference
    Edit {
        /// Preference key
        key: String,
        /// New value
        value: String,
        /// New type (defaults to the stored type)
        #[arg(short = 't', long = "type")]
        value_type: Option<ValueType>,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
    /// Remove a preference
    Remove {
        /// Preference key
        key: String,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
    /// Remove every preference
    Clear {
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
    /// Report whether a key is known to the index and present in the file
    Has {
        /// Preference key
        key: String,
    },
    /// Print the stored type of a preference
    Type {
        /// Preference key
        key: String,
    },
}
