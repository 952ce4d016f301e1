//! Error types for update_dependency
//!
//! Errors are split the same way the work is: `DocumentError` covers reading,
//! shape-checking and writing the YAML file, `UpdateError` adds the domain
//! failure of not finding the requested role.

use std::path::PathBuf;

/// Errors raised while loading, validating or writing a dependency document
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The file could not be opened or read
    #[error("I/O error occurred while reading input YAML file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not well-formed YAML
    #[error("Error occurred while parsing input YAML file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The top-level value has the wrong shape for the requested file kind
    #[error("{} is wrong format: {reason}", path.display())]
    WrongFormat { path: PathBuf, reason: String },

    /// Meta file without a (non-empty) `dependencies` key
    #[error("{} is missing dependency section.", path.display())]
    MissingDependencies { path: PathBuf },

    /// Meta file whose `dependencies` value is not a list
    #[error("{} has a dependency section that is not a list.", path.display())]
    DependenciesNotAList { path: PathBuf },

    /// The updated document could not be rendered as YAML
    #[error("Error occurred while serializing YAML for {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The updated document could not be written back
    #[error("I/O error occurred while writing YAML file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error type for a dependency update run
#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    /// Document error
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// No dependency record carries the requested role name
    #[error("Role {role} is not found.")]
    RoleNotFound { role: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dependencies_names_file() {
        let err = DocumentError::MissingDependencies {
            path: PathBuf::from("meta/main.yml"),
        };
        assert_eq!(
            err.to_string(),
            "meta/main.yml is missing dependency section."
        );
    }

    #[test]
    fn test_read_error_names_file() {
        let err = DocumentError::Read {
            path: PathBuf::from("requirements.yml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let message = err.to_string();
        assert!(message.contains("reading input YAML file requirements.yml"));
        assert!(message.contains("no such file"));
    }

    #[test]
    fn test_role_not_found_display() {
        let err = UpdateError::RoleNotFound {
            role: "geerlingguy.java".to_string(),
        };
        assert_eq!(err.to_string(), "Role geerlingguy.java is not found.");
    }

    #[test]
    fn test_document_error_is_transparent() {
        let err: UpdateError = DocumentError::WrongFormat {
            path: PathBuf::from("meta/main.yml"),
            reason: "expected a mapping".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "meta/main.yml is wrong format: expected a mapping"
        );
    }
}
