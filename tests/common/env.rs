//! Isolated test environment for running the pbxmend binary.
//!
//! `TestEnv` owns a temp directory holding `Demo.xcodeproj/project.pbxproj`
//! and a separate temp HOME so no user configuration leaks in.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::DEMO_PROJECT;

pub const BUNDLE: &str = "Demo.xcodeproj";

/// Result of running a pbxmend command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

pub struct TestEnv {
    /// Directory holding the `.xcodeproj` bundle and any source files
    pub root: TempDir,
    /// Stand-in for HOME and the XDG config directory
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Environment with the demo project
    pub fn demo() -> Self {
        Self::with_project(DEMO_PROJECT)
    }

    /// Environment whose project file holds `text`
    pub fn with_project(text: &str) -> Self {
        let env = Self::empty();
        env.write_project(text);
        env
    }

    /// Environment with no project at all
    pub fn empty() -> Self {
        Self {
            root: TempDir::new().expect("create project dir"),
            home_dir: TempDir::new().expect("create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_pbxmend")),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn pbxproj(&self) -> PathBuf {
        self.path(BUNDLE).join("project.pbxproj")
    }

    pub fn read_project(&self) -> String {
        std::fs::read_to_string(self.pbxproj()).expect("read project file")
    }

    pub fn write_project(&self, text: &str) {
        let path = self.pbxproj();
        std::fs::create_dir_all(path.parent().unwrap()).expect("create bundle");
        std::fs::write(path, text).expect("write project file");
    }

    /// Write a file below the project root, creating parent directories
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(path, content).expect("write file");
    }

    /// Backup siblings of the project file, oldest first
    pub fn backups(&self) -> Vec<PathBuf> {
        let mut found: Vec<PathBuf> = std::fs::read_dir(self.path(BUNDLE))
            .expect("list bundle")
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("project.pbxproj.backup"))
            })
            .collect();
        found.sort();
        found
    }

    /// Run pbxmend from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let home = self.home_dir.path();
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", home)
            .env("USERPROFILE", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("NO_COLOR", "1");
        for var in [
            "PBXMEND_LOG",
            "PBXMEND_ID_STRATEGY",
            "PBXMEND_DEFAULT_ROLE",
            "PBXMEND_DEFAULT_GROUP",
            "PBXMEND_SCAN_LIMIT",
            "PBXMEND_BACKUP",
        ] {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute pbxmend");
        output_to_result(output)
    }

    /// Write the user-level config file
    pub fn write_user_config(&self, content: &str) {
        let dir = self.home_dir.path().join(".config").join("pbxmend");
        std::fs::create_dir_all(&dir).expect("create user config dir");
        std::fs::write(dir.join("config.toml"), content).expect("write user config");
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
