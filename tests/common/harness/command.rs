//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `jot` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct JotCommand {
    args: Vec<String>,
}

impl JotCommand {
    /// Creates a new command for the `jot` binary.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Sets the `--dir` option to specify the data directory.
    pub fn dir(mut self, path: &Path) -> Self {
        self.args.push("--dir".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Runs the command and returns an Assert for making assertions.
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("jot").expect("Failed to find jot binary");
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `new` command.
    pub fn new_note(self, title: &str) -> Self {
        self.args(["new", title])
    }

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `show` command.
    pub fn show(self, id: i64) -> Self {
        self.args(["show", &id.to_string()])
    }

    /// Configures for the `edit` command.
    pub fn edit(self, id: i64) -> Self {
        self.args(["edit", &id.to_string()])
    }

    /// Configures for the `rm` command.
    pub fn rm(self, id: i64) -> Self {
        self.args(["rm", &id.to_string()])
    }

    /// Configures for the `step add` command.
    pub fn step_add(self, note_id: i64) -> Self {
        self.args(["step", "add", &note_id.to_string()])
    }

    /// Configures for the `step edit` command.
    pub fn step_edit(self, step_id: i64) -> Self {
        self.args(["step", "edit", &step_id.to_string()])
    }

    /// Configures for the `step rm` command.
    pub fn step_rm(self, step_id: i64) -> Self {
        self.args(["step", "rm", &step_id.to_string()])
    }

    /// Configures for the `free new` command.
    pub fn free_new(self, title: &str) -> Self {
        self.args(["free", "new", title])
    }

    /// Configures for the `free ls` command.
    pub fn free_ls(self) -> Self {
        self.args(["free", "ls"])
    }

    /// Configures for the `free show` command.
    pub fn free_show(self, id: i64) -> Self {
        self.args(["free", "show", &id.to_string()])
    }

    /// Configures for the `free rm` command.
    pub fn free_rm(self, id: i64) -> Self {
        self.args(["free", "rm", &id.to_string()])
    }

    /// Configures for the `category add` command.
    pub fn category_add(self, name: &str) -> Self {
        self.args(["category", "add", name])
    }

    /// Configures for the `category ls` command.
    pub fn category_ls(self) -> Self {
        self.args(["category", "ls"])
    }

    /// Configures for the `category rm` command.
    pub fn category_rm(self, key: &str) -> Self {
        self.args(["category", "rm", key])
    }

    /// Configures for the `search` command with a query.
    pub fn search(self, query: &str) -> Self {
        self.args(["search", query])
    }

    /// Configures for the `export` command.
    pub fn export(self, id: i64) -> Self {
        self.args(["export", &id.to_string()])
    }
}

impl Default for JotCommand {
    fn default() -> Self {
        Self::new()
    }
}
