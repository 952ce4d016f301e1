//! CLI argument parsing and command dispatch

pub mod args;
pub mod common;
pub mod update;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, USAGE};
