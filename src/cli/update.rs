//! Update command implementation
//!
//! This module drives a single run:
//! - Loads the YAML file and splits out the dependency list for its kind
//! - Rewrites the version of every record with the requested role name
//! - Writes the file back only when something changed
//! - Maps the outcome onto the process exit code

use crate::cli::args::Cli;
use crate::cli::common::{EXIT_FAILURE, EXIT_SUCCESS};
use crate::document::DependencyDocument;
use crate::error::UpdateError;
use crate::output::Reporter;
use crate::types::FileKind;
use crate::updater::{UpdateOutcome, update_dependencies};
use std::path::{Path, PathBuf};
use termcolor::WriteColor;
use tracing::{debug, info};

/// What a successful run did to the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateReport {
    /// The file was rewritten
    Updated {
        path: PathBuf,
        role: String,
        previous: Option<String>,
        version: String,
    },
    /// Nothing to do, the file was not touched
    AlreadyAtVersion { role: String, version: String },
}

/// Run the update command and report to stdout
///
/// # Returns
///
/// Exit code:
/// - 0: Updated, or already at the requested version
/// - 1: Any error (read, parse, shape, role not found, write)
pub fn run_update(cli: &Cli) -> i32 {
    let mut reporter = Reporter::stdout(cli.color);
    run_update_with(
        &cli.filename,
        cli.mode,
        &cli.role_name,
        &cli.role_version,
        &mut reporter,
    )
}

/// Run the update command, reporting through `reporter`
pub fn run_update_with<W: WriteColor>(
    path: &Path,
    kind: FileKind,
    role_name: &str,
    role_version: &str,
    reporter: &mut Reporter<W>,
) -> i32 {
    // A closed stdout must not change the exit code.
    match update_file(path, kind, role_name, role_version) {
        Ok(UpdateReport::Updated {
            path,
            role,
            previous,
            version,
        }) => {
            let _ = reporter.updated(&role, previous.as_deref(), &version, &path);
            EXIT_SUCCESS
        }
        Ok(UpdateReport::AlreadyAtVersion { role, version }) => {
            let _ = reporter.already_at_version(&role, &version);
            EXIT_SUCCESS
        }
        Err(e) => {
            let _ = reporter.error(&e);
            EXIT_FAILURE
        }
    }
}

/// Update `role_name` to `role_version` in the file at `path`
///
/// The file is only written when at least one record changed.
///
/// # Errors
///
/// Returns `UpdateError::Document` for read, parse, shape and write
/// failures and `UpdateError::RoleNotFound` when no record has the name.
pub fn update_file(
    path: &Path,
    kind: FileKind,
    role_name: &str,
    role_version: &str,
) -> Result<UpdateReport, UpdateError> {
    debug!(path = %path.display(), %kind, role = role_name, version = role_version, "updating dependency");

    let mut document = DependencyDocument::load(path, kind)?;

    let outcome = update_dependencies(document.dependencies_mut(), role_name, role_version);
    if outcome.needs_write() {
        info!(?outcome, "rewriting {}", path.display());
        document.save(path)?;
    }

    match outcome {
        UpdateOutcome::NotFound => Err(UpdateError::RoleNotFound {
            role: role_name.to_string(),
        }),
        UpdateOutcome::AlreadyAtVersion => Ok(UpdateReport::AlreadyAtVersion {
            role: role_name.to_string(),
            version: role_version.to_string(),
        }),
        UpdateOutcome::Updated { previous, .. } => Ok(UpdateReport::Updated {
            path: path.to_path_buf(),
            role: role_name.to_string(),
            previous,
            version: role_version.to_string(),
        }),
    }
}
