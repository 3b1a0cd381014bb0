use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use prefs_cli::cli::Cli;
use prefs_cli::commands;
use prefs_cli::config::Config;
use prefs_cli::prefs::{FileMedium, PreferenceStore};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logger to file (truncate on each run)
    let log_path = Config::get_config_dir()?.join("prefs-cli.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {:?}", log_path))?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let cli = Cli::parse();
    info!("Starting prefs-cli");

    let config = Config::load()?;
    let store_path = config.resolve_store_path(cli.file)?;
    debug!("Using preference file: {:?}", store_path);

    let medium = FileMedium::open(&store_path)?;
    let mut store = PreferenceStore::new(medium);

    commands::run(cli.command, &mut store, &config)
}
