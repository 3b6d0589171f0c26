// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Test helpers for ans integration tests

// Not every test binary uses every helper; cargo_bin is standard for CLI testing
#![allow(dead_code, deprecated)]

use std::path::Path;
use std::process::Output;

use assert_cmd::Command;
use serde_json::{Value, json};

const ANS_VARS: &[&str] = &[
    "ANS_API_KEY",
    "ANS_API_URI",
    "ANS_PROFILE",
    "ANS_CONFIG_DIR",
    "ANS_API_TIMEOUT_SECONDS",
    "ANS_API_INSECURE",
    "ANS_API_PAGINATION_PERPAGE",
    "ANS_COMMAND_WAIT_TIMEOUT_SECONDS",
    "ANS_COMMAND_WAIT_SLEEP_SECONDS",
    "RUST_LOG",
];

/// Get a Command for running the ans binary
pub fn ans_cmd() -> Command {
    Command::cargo_bin("ans").expect("Failed to find ans binary")
}

/// An ans Command that ignores the caller's environment and config
pub fn isolated_cmd(config_dir: &Path) -> Command {
    let mut cmd = ans_cmd();
    for var in ANS_VARS {
        cmd.env_remove(var);
    }
    cmd.env("ANS_CONFIG_DIR", config_dir);
    cmd
}

/// An ans Command pointed at a mock API
pub fn api_cmd(config_dir: &Path, uri: &str) -> Command {
    let mut cmd = isolated_cmd(config_dir);
    cmd.env("ANS_API_KEY", "test-api-key")
        .env("ANS_API_URI", uri)
        .env("ANS_COMMAND_WAIT_SLEEP_SECONDS", "1")
        .env("ANS_COMMAND_WAIT_TIMEOUT_SECONDS", "30");
    cmd
}

/// Run a command off the async runtime so the mock server keeps serving
pub async fn run(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output().expect("Failed to execute ans"))
        .await
        .expect("command task panicked")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Wrap a payload in the API response envelope
pub fn envelope(data: Value) -> Value {
    json!({ "data": data, "meta": {} })
}
