//! `ScaffoldFilesystem` implementation for `FilesystemStore`.

use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::ScaffoldFilesystem;

use super::FilesystemStore;

impl ScaffoldFilesystem for FilesystemStore {
    fn file_exists(&self, path: &str) -> bool {
        fs::symlink_metadata(self.resolve_path(path)).is_ok()
    }

    fn is_dir(&self, path: &str) -> bool {
        self.resolve_path(path).is_dir()
    }

    fn create_dir(&self, path: &str) -> Result<(), AppError> {
        fs::create_dir(self.resolve_path(path)).map_err(AppError::from)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        fs::write(self.resolve_path(path), content).map_err(AppError::from)
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}
