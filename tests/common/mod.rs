//! Shared testing utilities for kompose-rpmspec CLI tests.
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const COMMIT: &str = "135165b39c55d4e2ea9a1f8b3e6d1d8a7f51a6a9";
pub const KOMPOSE_PACKAGE: &str = "golang-github-kubernetes-kompose";

/// Testing harness providing an isolated working directory for CLI runs.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("kompose-rpmspec").expect("Failed to locate kompose-rpmspec binary");
        cmd.current_dir(&self.work_dir).env("RUST_LOG", "info");
        cmd
    }

    /// Absolute path of a file under `tests/fixtures`.
    pub fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
    }

    /// Install a stand-in for gofed that copies the fixture spec into place,
    /// records its arguments, and exits with `exit_code`.
    #[cfg(unix)]
    pub fn install_fake_gofed(&self, package: &str, exit_code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let fixture = Self::fixture(&format!("{}.spec", KOMPOSE_PACKAGE));
        let script = self.root.path().join("gofed.sh");
        let body = format!(
            "#!/bin/sh\n\
             echo \"$@\" > \"{args}\"\n\
             echo \"(1/2) Checking if the package already exists in PkgDB\"\n\
             mkdir -p {package}\n\
             cp \"{fixture}\" {package}/{package}.spec\n\
             echo \"(2/2) Spec file {package}/{package}.spec at your disposal\"\n\
             exit {exit_code}\n",
            args = self.args_file().display(),
            package = package,
            fixture = fixture.display(),
            exit_code = exit_code,
        );
        fs::write(&script, body).expect("Failed to write fake gofed");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake gofed executable");
        script
    }

    /// File where the fake gofed records the arguments it was given.
    pub fn args_file(&self) -> PathBuf {
        self.root.path().join("gofed.args")
    }

    pub fn recorded_args(&self) -> String {
        fs::read_to_string(self.args_file()).expect("fake gofed did not record arguments")
    }

    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }
}
