//! Test support utilities for opengpg integration tests.
//!
//! Provides fixture keys, throwaway key generation, a decryption helper,
//! and an isolated working directory for CLI runs.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;
pub mod keys;
pub mod skip;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use keys::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// Child processes use `.current_dir()` so tests can run in parallel.
pub struct Test {
    /// Temporary working directory
    pub dir: TempDir,
}

impl Test {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Write `contents` to `name` inside the test directory.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        std::fs::write(&path, contents).expect("failed to write file");
        path
    }

    /// Read `name` from the test directory.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("failed to read file")
    }

    /// Write a `.opengpg.toml` naming the given recipients.
    pub fn config(&self, recipients: &[(&str, &str)]) -> PathBuf {
        let mut body = String::from("[opengpg]\nversion = \"0.1.0\"\n\n[recipients]\n");
        for (name, path) in recipients {
            body.push_str(&format!("{} = \"{}\"\n", name, path));
        }
        self.write(".opengpg.toml", &body)
    }
}
