use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Throwaway Ranger admin installation with a fake `java` that records its
/// arguments, one per line, and exits with a chosen status
pub struct FakeInstall {
    root: TempDir,
}

impl FakeInstall {
    pub fn new(java_exit_code: i32) -> Self {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("admin/ews/webapp")).unwrap();
        fs::create_dir_all(root.path().join("admin/ews/lib")).unwrap();
        fs::create_dir_all(root.path().join("jdk/bin")).unwrap();

        let java = root.path().join("jdk/bin/java");
        let script = format!(
            "#!/bin/sh\nfor arg in \"$@\"; do printf '%s\\n' \"$arg\"; done > '{}'\nexit {java_exit_code}\n",
            root.path().join("java-args.txt").display()
        );
        fs::write(&java, script).unwrap();
        make_executable(&java);

        Self { root }
    }

    pub fn admin_home(&self) -> PathBuf {
        self.root.path().join("admin")
    }

    pub fn java_home(&self) -> PathBuf {
        self.root.path().join("jdk")
    }

    /// Arguments the fake java received, if it ran
    pub fn recorded_args(&self) -> Option<Vec<String>> {
        fs::read_to_string(self.root.path().join("java-args.txt"))
            .ok()
            .map(|text| text.lines().map(str::to_string).collect())
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
