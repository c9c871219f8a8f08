use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary workspace with fake `gcloud` / `gh` executables
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        Self { root }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.path().join("data")
    }

    /// Path of a lister that does not exist
    pub fn missing_tool(&self, name: &str) -> PathBuf {
        self.root.path().join("missing").join(name)
    }

    /// Write an executable that prints `stdout` and exits with `code`
    #[cfg(unix)]
    pub fn fake_tool(&self, name: &str, stdout: &str, code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let dir = self.root.path().join("bin");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let script = format!("#!/bin/sh\ncat <<'SKYLINE_EOF'\n{stdout}\nSKYLINE_EOF\nexit {code}\n");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    pub fn read(&self, file: &str) -> String {
        fs::read_to_string(self.data_dir().join(file)).unwrap()
    }

    pub fn read_json(&self, file: &str) -> serde_json::Value {
        serde_json::from_str(&self.read(file)).unwrap()
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }
}
