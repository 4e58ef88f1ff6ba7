//! Shared testing utilities for blogwright integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the developer's setup into a test run.
const SCRUBBED_ENV: [&str; 4] =
    ["GROQ_API_KEY", "BLOGWRIGHT_API_URL", "BLOGWRIGHT_MODEL", "BLOGWRIGHT_LOG"];

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
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

    /// Build a command for invoking the compiled `blogwright` binary with a clean environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("blogwright").expect("Failed to locate blogwright binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.root.path());
        for name in SCRUBBED_ENV {
            cmd.env_remove(name);
        }
        cmd
    }

    /// Build a command wired to a backend at `server_url` with a test credential.
    pub fn cli_against(&self, server_url: &str) -> Command {
        let mut cmd = self.cli();
        cmd.env("GROQ_API_KEY", "gsk_test")
            .env("BLOGWRIGHT_API_URL", format!("{}/openai/v1/chat/completions", server_url));
        cmd
    }

    /// Write `blogwright.toml` into the working directory.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("blogwright.toml");
        fs::write(&path, content).expect("Failed to write config file");
        path
    }
}

/// Body of a successful chat completion carrying `content`.
#[allow(dead_code)]
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "llama-3.3-70b-versatile",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
    .to_string()
}
