//! Shared helpers for CLI specs.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub use serde_json::json;

/// A job file with a bucket scan, a link walk, a map and a reduce
pub const PIPELINE_JOB: &str = r#"
inputs = "people"

[[phase]]
type = "link"
bucket = "people"
tag = "friend"

[[phase]]
type = "map"
function = ["riak_kv_mapreduce", "map_object_value"]

[[phase]]
type = "reduce"
function = "function(v) { return v; }"
keep = true
"#;

/// Scratch directory holding job files
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root and return its path
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn mapred(&self) -> CliBuilder {
        CliBuilder::new(self.path())
    }
}

/// Run the `mapred` binary with no project
pub fn cli() -> CliBuilder {
    CliBuilder::new(&std::env::temp_dir())
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    fn new(cwd: &Path) -> Self {
        let mut cmd = Command::cargo_bin("mapred").expect("mapred binary should be built");
        cmd.current_dir(cwd).env_remove("RUST_LOG");
        Self { cmd }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    pub fn passes(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert::from(output);
        assert!(
            run.success,
            "expected success, got failure\nstdout:\n{}\nstderr:\n{}",
            run.stdout, run.stderr
        );
        run
    }

    pub fn fails(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert::from(output);
        assert!(
            !run.success,
            "expected failure, got success\nstdout:\n{}",
            run.stdout
        );
        run
    }
}

pub struct RunAssert {
    success: bool,
    stdout: String,
    stderr: String,
}

impl From<std::process::Output> for RunAssert {
    fn from(output: std::process::Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl RunAssert {
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout missing {:?}\nstdout:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing {:?}\nstderr:\n{}",
            needle,
            self.stderr
        );
        self
    }

    /// Parse stdout as a single JSON document
    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap_or_else(|e| {
            panic!("stdout is not JSON ({e}):\n{}", self.stdout);
        })
    }
}
