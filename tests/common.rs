//! Test utilities for update_dependency integration tests

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// A meta file with one dependency and an unrelated top-level key
pub const META_FOO: &str = r#"galaxy_info:
  author: ops
  min_ansible_version: '2.9'
dependencies:
- name: foo
  version: 1.0.0
"#;

/// A galaxy requirements file with one dependency
pub const GALAXY_FOO: &str = r#"- name: foo
  version: 1.0.0
"#;

/// Write `content` to `name` inside `dir` and return the full path
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// The compiled binary, with colour and log overrides cleared
pub fn update_cmd() -> Command {
    let mut cmd = Command::cargo_bin("update_dependency").unwrap();
    cmd.env_remove("UPDATE_DEPENDENCY_LOG").arg("--color").arg("never");
    cmd
}

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}
