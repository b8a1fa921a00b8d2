//! Shared in-memory file backing store for port test doubles.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

/// In-memory files and directories shared between a test and `MockScaffoldFs`.
///
/// Tests seed entries via this handle before passing the port double to
/// production code, then inspect the same handle afterwards.
#[derive(Clone, Debug, Default)]
pub struct TestFiles {
    pub(crate) files: Arc<Mutex<BTreeMap<String, String>>>,
    pub(crate) dirs: Arc<Mutex<BTreeSet<String>>>,
}

impl TestFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, registering its parent directories.
    pub fn add(&self, path: &str, content: &str) {
        self.add_parents(path);
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
    }

    /// Seed a directory and its ancestors.
    pub fn add_dir(&self, path: &str) {
        self.add_parents(path);
        self.dirs.lock().unwrap().insert(path.to_string());
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    /// Sorted paths of every file.
    pub fn file_paths(&self) -> Vec<String> {
        self.files.lock().unwrap().keys().cloned().collect()
    }

    /// Sorted paths of every directory.
    pub fn dir_paths(&self) -> Vec<String> {
        self.dirs.lock().unwrap().iter().cloned().collect()
    }

    /// True when no file or directory has been created.
    pub fn is_empty(&self) -> bool {
        self.files.lock().unwrap().is_empty() && self.dirs.lock().unwrap().is_empty()
    }

    pub(crate) fn add_parents(&self, path: &str) {
        let mut dirs = self.dirs.lock().unwrap();
        let mut current = String::new();
        let segments: Vec<&str> = path.split('/').collect();
        for segment in &segments[..segments.len().saturating_sub(1)] {
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(segment);
            dirs.insert(current.clone());
        }
    }
}
