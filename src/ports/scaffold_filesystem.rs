//! Filesystem operations needed by the scaffold commands.

use std::path::PathBuf;

use crate::domain::AppError;

/// Port for filesystem access scoped to the invocation root.
///
/// All `path` arguments are relative to the root and use `/` separators.
pub trait ScaffoldFilesystem {
    /// Check whether any entry exists, including a dangling symlink.
    fn file_exists(&self, path: &str) -> bool;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &str) -> bool;

    /// Create a single directory. Fails if the parent is missing or the
    /// entry already exists.
    fn create_dir(&self, path: &str) -> Result<(), AppError>;

    /// Write UTF-8 content to a file. The parent directory must already exist.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Resolve a relative path to an absolute path under the root.
    fn resolve_path(&self, path: &str) -> PathBuf;
}
