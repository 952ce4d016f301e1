#![forbid(unsafe_code)]

//! Core domain types for update_dependency
//!
//! This module defines the small set of types shared by the CLI layer and
//! the document/updater layers.

use clap::ValueEnum;
use std::fmt;

/// Shape of the YAML file holding the dependency list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum FileKind {
    /// Role metadata file (`meta/main.yml`), dependencies under a `dependencies` key
    Meta,
    /// Galaxy requirements file, the document itself is the dependency list
    Galaxy,
}

impl FileKind {
    /// Returns the token used on the command line for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Meta => "meta",
            FileKind::Galaxy => "galaxy",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_tokens() {
        assert_eq!(FileKind::Meta.as_str(), "meta");
        assert_eq!(FileKind::Galaxy.as_str(), "galaxy");
        assert_eq!(FileKind::Galaxy.to_string(), "galaxy");
    }

    #[test]
    fn test_file_kind_from_str() {
        assert_eq!(FileKind::from_str("meta", false), Ok(FileKind::Meta));
        assert_eq!(FileKind::from_str("galaxy", false), Ok(FileKind::Galaxy));
        assert!(FileKind::from_str("requirements", false).is_err());
    }
}
