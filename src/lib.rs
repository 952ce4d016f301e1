#![forbid(unsafe_code)]

//! update_dependency: pin a role dependency's version in a YAML file
//!
//! Works on Ansible role metadata (`meta/main.yml`, dependencies under a
//! `dependencies` key) and galaxy requirements files (a bare list of
//! dependencies). Only the `version` of the matching records changes; every
//! other key and entry is written back in its original order.

pub mod cli;
pub mod document;
pub mod error;
pub mod output;
pub mod types;
pub mod updater;

// Re-export error types for convenient access
pub use error::{DocumentError, UpdateError};

// Re-export core domain types for convenient access
pub use document::DependencyDocument;
pub use types::FileKind;
pub use updater::{DependencyEntry, DependencyRecord, UpdateOutcome, update_dependencies};
