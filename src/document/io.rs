//! Reading and writing YAML files
//!
//! Reads are a plain `read_to_string` followed by a `serde_yaml` parse.
//! Writes render the whole document first, then replace the target file
//! atomically through a temporary file in the same directory, so a failed
//! write never leaves a truncated file behind.

use crate::error::DocumentError;
use serde_yaml::Value;
use std::fs;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Read and parse a YAML file into a generic value tree
///
/// # Errors
///
/// Returns `DocumentError::Read` if the file cannot be opened or read, and
/// `DocumentError::Parse` if its content is not well-formed YAML.
pub fn load_yaml(path: &Path) -> Result<Value, DocumentError> {
    let content = fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read YAML file");

    serde_yaml::from_str(&content).map_err(|source| DocumentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Render a value as block-style YAML text
///
/// String scalars that a YAML 1.1 reader (Ansible) would load as booleans or
/// null, such as `yes`, `off` or `N`, are written single-quoted.
///
/// # Errors
///
/// Returns `DocumentError::Serialize` if the value cannot be represented.
pub fn render_yaml(path: &Path, value: &Value) -> Result<String, DocumentError> {
    let mut quoting = Yaml11Quoting::new(value);
    let masked = quoting.mask(value.clone());

    let rendered = serde_yaml::to_string(&masked).map_err(|source| DocumentError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(quoting.unmask(rendered))
}

/// Plain scalars a YAML 1.1 loader resolves to a bool or null
const YAML11_RESERVED: &[&str] = &[
    "y", "n", "yes", "no", "on", "off", "true", "false", "null", "~",
];

fn is_yaml11_reserved(s: &str) -> bool {
    YAML11_RESERVED
        .iter()
        .any(|word| word.eq_ignore_ascii_case(s))
}

/// Swaps YAML 1.1 reserved strings for plain placeholder tokens before
/// rendering, then puts them back single-quoted.
///
/// serde_yaml only quotes by YAML 1.2 rules and offers no per-scalar style.
struct Yaml11Quoting {
    prefix: String,
    words: Vec<String>,
}

impl Yaml11Quoting {
    fn new(value: &Value) -> Self {
        let mut prefix = String::from("update-dependency-quoted-");
        while contains_text(value, &prefix) {
            prefix.push('x');
        }
        Yaml11Quoting {
            prefix,
            words: Vec::new(),
        }
    }

    fn mask(&mut self, value: Value) -> Value {
        match value {
            Value::String(s) if is_yaml11_reserved(&s) => {
                let token = format!("{}{}", self.prefix, self.words.len());
                self.words.push(s);
                Value::String(token)
            }
            Value::Sequence(seq) => {
                Value::Sequence(seq.into_iter().map(|v| self.mask(v)).collect())
            }
            Value::Mapping(map) => Value::Mapping(
                map.into_iter()
                    .map(|(k, v)| (self.mask(k), self.mask(v)))
                    .collect(),
            ),
            Value::Tagged(mut tagged) => {
                let inner = std::mem::take(&mut tagged.value);
                tagged.value = self.mask(inner);
                Value::Tagged(tagged)
            }
            other => other,
        }
    }

    fn unmask(&self, mut rendered: String) -> String {
        // Highest index first so token 1 never eats the head of token 10.
        for (index, word) in self.words.iter().enumerate().rev() {
            let token = format!("{}{}", self.prefix, index);
            rendered = rendered.replace(&token, &format!("'{}'", word));
        }
        rendered
    }
}

fn contains_text(value: &Value, needle: &str) -> bool {
    match value {
        Value::String(s) => s.contains(needle),
        Value::Sequence(seq) => seq.iter().any(|v| contains_text(v, needle)),
        Value::Mapping(map) => map
            .iter()
            .any(|(k, v)| contains_text(k, needle) || contains_text(v, needle)),
        Value::Tagged(tagged) => contains_text(&tagged.value, needle),
        Value::Null | Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Serialize `value` and replace the contents of `path` with it
///
/// If `path` is a symlink the link target is rewritten, and the original
/// file permissions are restored after the replace.
///
/// # Errors
///
/// Returns `DocumentError::Serialize` if rendering fails and
/// `DocumentError::Write` on any I/O failure. The original file is left
/// intact in both cases.
pub fn write_yaml(path: &Path, value: &Value) -> Result<(), DocumentError> {
    let content = render_yaml(path, value)?;
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

    write_atomic(&target, content.as_bytes()).map_err(|source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %target.display(), bytes = content.len(), "wrote YAML file");

    Ok(())
}

fn write_atomic(target: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = parent_dir(target);
    let original_perms = match fs::metadata(target) {
        Ok(metadata) => {
            ensure_writable(target, &metadata)?;
            Some(metadata.permissions())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(e),
    };

    let mut temp_file = NamedTempFile::new_in(&dir)?;
    temp_file.write_all(content)?;
    temp_file.flush()?;
    temp_file.as_file().sync_all()?;

    temp_file.persist(target).map_err(|e| e.error)?;

    if let Some(perms) = original_perms {
        if let Err(e) = fs::set_permissions(target, perms) {
            warn!(path = %target.display(), "could not restore file permissions: {}", e);
        }
    }

    Ok(())
}

/// Refuse to replace a file the caller could not write in place
///
/// The rename only needs a writable directory, so a read-only target has to
/// be rejected up front.
fn ensure_writable(target: &Path, metadata: &fs::Metadata) -> std::io::Result<()> {
    if metadata.permissions().readonly() {
        return Err(std::io::Error::new(
            ErrorKind::PermissionDenied,
            format!("{} is read-only", target.display()),
        ));
    }
    OpenOptions::new().write(true).open(target)?;
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
