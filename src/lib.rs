pub mod cli;
pub mod commands;
pub mod config;
pub mod prefs;
pub mod ui;
