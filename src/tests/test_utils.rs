//! Test utilities and fixtures.
//!
//! Reusable helpers for tests that touch the filesystem or the process
//! environment.

use std::path::PathBuf;
use tempfile::TempDir;

/// The mapping used throughout the scenario tests.
pub const SCENARIO_ROUTES: [(&str, &str); 4] = [
    ("/", "A"),
    ("/products/", "B"),
    ("/products/3", "C"),
    ("/admin/products/", "D"),
];

/// Test fixture owning a temporary directory and any environment variables it set.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to clean up after the test
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        std::env::set_var(&key, value.into());
        self.env_vars.push(key);
    }

    /// Write a file into the fixture directory and return its path.
    ///
    /// # Parameters
    ///
    /// * `name` - File name, including extension.
    /// * `contents` - The contents to write to the file.
    pub fn create_file<C: AsRef<[u8]>>(&self, name: &str, contents: C) -> std::io::Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
