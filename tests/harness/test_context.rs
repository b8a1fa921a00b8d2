//! Shared testing harness for `modular-quickstart` integration tests.

use assert_cmd::Command;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled binary within a custom directory.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd =
            Command::cargo_bin("modular-quickstart").expect("Failed to locate modular-quickstart binary");
        cmd.current_dir(dir.as_ref());
        cmd
    }

    /// Path to a project directory under the work directory.
    pub(crate) fn project_path(&self, name: &str) -> PathBuf {
        self.work_dir.join(name)
    }

    /// Create a project through the CLI and return its path.
    pub(crate) fn create_project(&self, name: &str) -> PathBuf {
        self.cli().args(["create-project", name]).assert().success();
        self.project_path(name)
    }

    /// Read a file relative to the work directory.
    pub(crate) fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|err| panic!("Failed to read {}: {}", relative, err))
    }

    /// Snapshot of every entry under the work directory: relative path to file
    /// content, with directories recorded as `None`.
    pub(crate) fn snapshot(&self) -> BTreeMap<String, Option<String>> {
        let mut entries = BTreeMap::new();
        collect(&self.work_dir, &self.work_dir, &mut entries);
        entries
    }
}

fn collect(root: &Path, dir: &Path, entries: &mut BTreeMap<String, Option<String>>) {
    for entry in fs::read_dir(dir).expect("Failed to read directory") {
        let path = entry.expect("Failed to read entry").path();
        let relative = path.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/");
        if path.is_dir() {
            entries.insert(relative, None);
            collect(root, &path, entries);
        } else {
            entries.insert(relative, Some(fs::read_to_string(&path).unwrap_or_default()));
        }
    }
}
