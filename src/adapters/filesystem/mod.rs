//! Filesystem adapter for the `ScaffoldFilesystem` port.

mod scaffold_filesystem;

use std::path::PathBuf;

/// Filesystem-backed store rooted at the directory a command runs in.
///
/// Relative paths are joined onto the root as given; identifiers are
/// treated as opaque path segments.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}
