//! Meta and galaxy document shapes
//!
//! A meta file is a mapping whose `dependencies` key holds the list; every
//! other top-level key is kept as-is. A galaxy file is the list itself.

use crate::document::io;
use crate::error::DocumentError;
use crate::types::FileKind;
use crate::updater::DependencyEntry;
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::debug;

/// Top-level key holding the dependency list in a meta file
pub const DEPENDENCIES_KEY: &str = "dependencies";

/// A parsed dependency file with its dependency list split out
#[derive(Debug, Clone, PartialEq)]
pub enum DependencyDocument {
    /// Meta file. `root` keeps every top-level key in order; the
    /// `dependencies` slot is filled back in by [`DependencyDocument::into_value`].
    Meta {
        root: Mapping,
        dependencies: Vec<DependencyEntry>,
    },
    /// Galaxy file: the document is the list
    Galaxy { dependencies: Vec<DependencyEntry> },
}

impl DependencyDocument {
    /// Load a dependency document from a YAML file
    ///
    /// # Errors
    ///
    /// Propagates read and parse failures from [`io::load_yaml`] and shape
    /// failures from [`DependencyDocument::from_value`].
    pub fn load(path: &Path, kind: FileKind) -> Result<Self, DocumentError> {
        let value = io::load_yaml(path)?;
        Self::from_value(kind, value, path)
    }

    /// Split a parsed YAML value according to `kind`
    ///
    /// # Errors
    ///
    /// For meta files: `WrongFormat` if the document is not a mapping,
    /// `MissingDependencies` if `dependencies` is absent or empty/false-like,
    /// `DependenciesNotAList` if it is present but not a sequence.
    /// For galaxy files: `WrongFormat` if the document is not a sequence.
    pub fn from_value(kind: FileKind, value: Value, path: &Path) -> Result<Self, DocumentError> {
        match kind {
            FileKind::Meta => {
                let mut root = match value {
                    Value::Mapping(root) => root,
                    other => {
                        return Err(DocumentError::WrongFormat {
                            path: path.to_path_buf(),
                            reason: format!("expected a mapping, found {}", describe(&other)),
                        });
                    }
                };

                let Some(slot) = root
                    .get_mut(DEPENDENCIES_KEY)
                    .filter(|slot| !is_falsy(slot))
                else {
                    return Err(DocumentError::MissingDependencies {
                        path: path.to_path_buf(),
                    });
                };

                // The slot stays in place as null until into_value refills it.
                let seq = match std::mem::take(slot) {
                    Value::Sequence(seq) => seq,
                    _ => {
                        return Err(DocumentError::DependenciesNotAList {
                            path: path.to_path_buf(),
                        });
                    }
                };

                debug!(entries = seq.len(), keys = root.len(), "loaded meta document");
                Ok(DependencyDocument::Meta {
                    root,
                    dependencies: into_entries(seq),
                })
            }
            FileKind::Galaxy => match value {
                Value::Sequence(seq) => {
                    debug!(entries = seq.len(), "loaded galaxy document");
                    Ok(DependencyDocument::Galaxy {
                        dependencies: into_entries(seq),
                    })
                }
                other => Err(DocumentError::WrongFormat {
                    path: path.to_path_buf(),
                    reason: format!("expected a list of dependencies, found {}", describe(&other)),
                }),
            },
        }
    }

    pub fn kind(&self) -> FileKind {
        match self {
            DependencyDocument::Meta { .. } => FileKind::Meta,
            DependencyDocument::Galaxy { .. } => FileKind::Galaxy,
        }
    }

    pub fn dependencies(&self) -> &[DependencyEntry] {
        match self {
            DependencyDocument::Meta { dependencies, .. }
            | DependencyDocument::Galaxy { dependencies } => dependencies,
        }
    }

    pub fn dependencies_mut(&mut self) -> &mut [DependencyEntry] {
        match self {
            DependencyDocument::Meta { dependencies, .. }
            | DependencyDocument::Galaxy { dependencies } => dependencies,
        }
    }

    /// Reassemble the full YAML value
    ///
    /// For meta files the list goes back under `dependencies` at its
    /// original position.
    pub fn into_value(self) -> Value {
        match self {
            DependencyDocument::Meta {
                mut root,
                dependencies,
            } => {
                root.insert(
                    Value::String(DEPENDENCIES_KEY.to_string()),
                    Value::Sequence(from_entries(dependencies)),
                );
                Value::Mapping(root)
            }
            DependencyDocument::Galaxy { dependencies } => {
                Value::Sequence(from_entries(dependencies))
            }
        }
    }

    /// Write the document back to `path`
    ///
    /// # Errors
    ///
    /// Propagates serialize and write failures from [`io::write_yaml`].
    pub fn save(self, path: &Path) -> Result<(), DocumentError> {
        io::write_yaml(path, &self.into_value())
    }
}

fn into_entries(seq: Vec<Value>) -> Vec<DependencyEntry> {
    seq.into_iter().map(DependencyEntry::from_value).collect()
}

fn from_entries(entries: Vec<DependencyEntry>) -> Vec<Value> {
    entries.into_iter().map(DependencyEntry::into_value).collect()
}

/// Empty or false-like values count as a missing dependency section
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Sequence(seq) => seq.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        Value::Tagged(tagged) => is_falsy(&tagged.value),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "an empty document",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
