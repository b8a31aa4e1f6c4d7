#![expect(missing_docs, clippy::missing_panics_doc, reason = "test helpers")]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory standing in for a Nim cache directory. Files are created with their own name as content, so
/// renames can be checked for preserving content.
pub struct FixtureDir {
    dir: TempDir,
}

impl FixtureDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn with_files<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let result = Self::new();

        for name in names {
            result.touch(name.as_ref());
        }

        result
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn touch(&self, name: &str) -> PathBuf {
        let path = self.path().join(name);

        fs::write(&path, name).unwrap();

        path
    }

    pub fn mkdir(&self, name: &str) -> PathBuf {
        let path = self.path().join(name);

        fs::create_dir(&path).unwrap();

        path
    }

    /// Names of all entries, sorted.
    pub fn entries(&self) -> Vec<String> {
        let mut names = fs::read_dir(self.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect::<Vec<_>>();

        names.sort_unstable();

        names
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path().join(name)).unwrap()
    }
}

impl Default for FixtureDir {
    fn default() -> Self {
        Self::new()
    }
}
