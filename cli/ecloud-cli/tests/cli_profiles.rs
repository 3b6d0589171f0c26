// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Profile CLI tests against an isolated config directory

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod common;

use std::path::Path;

use common::{isolated_cmd, stdout};
use predicates::prelude::*;
use serde_json::Value;

fn create(dir: &Path, name: &str, key: &str) {
    isolated_cmd(dir)
        .args(["profile", "create", name, "--api-key", key])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Created profile '{}'", name)));
}

fn list_json(dir: &Path) -> Vec<Value> {
    let output = isolated_cmd(dir)
        .args(["-o", "json", "profile", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_str(&stdout(&output)).unwrap()
}

fn current(profiles: &[Value]) -> Option<String> {
    profiles
        .iter()
        .find(|p| p["current"] == true)
        .map(|p| p["name"].as_str().unwrap().to_string())
}

#[test]
fn test_first_profile_becomes_current() {
    let dir = tempfile::tempdir().unwrap();
    create(dir.path(), "work", "abcdef123456");

    let profiles = list_json(dir.path());
    assert_eq!(profiles.len(), 1);
    assert_eq!(current(&profiles).as_deref(), Some("work"));
    assert!(dir.path().join("profiles.d").join("work.json").exists());
}

#[test]
fn test_profile_get_masks_api_key() {
    let dir = tempfile::tempdir().unwrap();
    create(dir.path(), "work", "abcdef123456");

    let output = isolated_cmd(dir.path())
        .args(["-o", "json", "profile", "get", "work"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let profiles: Vec<Value> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(profiles[0]["api_key"], "****3456");
    assert_eq!(profiles[0]["api_uri"], "https://api.ukfast.io");
    assert_eq!(profiles[0]["command_wait_timeout_seconds"], 1200);
}

#[test]
fn test_duplicate_profile_rejected() {
    let dir = tempfile::tempdir().unwrap();
    create(dir.path(), "work", "key-1");

    isolated_cmd(dir.path())
        .args(["profile", "create", "work", "--api-key", "key-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_reserved_profile_name_rejected() {
    let dir = tempfile::tempdir().unwrap();
    isolated_cmd(dir.path())
        .args(["profile", "create", "env", "--api-key", "key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reserved"));
}

#[test]
fn test_set_current_and_previous() {
    let dir = tempfile::tempdir().unwrap();
    create(dir.path(), "work", "key-1");
    create(dir.path(), "home", "key-2");

    // A second profile does not steal current without --current
    assert_eq!(current(&list_json(dir.path())).as_deref(), Some("work"));

    isolated_cmd(dir.path())
        .args(["profile", "set-current", "home"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current profile: home"));

    isolated_cmd(dir.path())
        .args(["profile", "set-current", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current profile: work"));
}

#[test]
fn test_set_current_unknown_profile() {
    let dir = tempfile::tempdir().unwrap();
    isolated_cmd(dir.path())
        .args(["profile", "set-current", "missing"])
        .assert()
        .failure();
}

#[test]
fn test_delete_requires_force_without_terminal() {
    let dir = tempfile::tempdir().unwrap();
    create(dir.path(), "work", "key-1");

    isolated_cmd(dir.path())
        .args(["profile", "delete", "work"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_delete_current_profile_clears_current() {
    let dir = tempfile::tempdir().unwrap();
    create(dir.path(), "work", "key-1");

    isolated_cmd(dir.path())
        .args(["profile", "delete", "--force", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted profile 'work'"));

    assert!(list_json(dir.path()).is_empty());
    isolated_cmd(dir.path())
        .args(["ecloud", "vpc", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No profile configured"));
}

#[test]
fn test_env_profile() {
    let dir = tempfile::tempdir().unwrap();
    let output = isolated_cmd(dir.path())
        .args(["-o", "json", "profile", "get", "env"])
        .env("ANS_API_KEY", "secret-key-9876")
        .env("ANS_API_URI", "http://localhost:9999")
        .output()
        .unwrap();
    assert!(output.status.success());

    let profiles: Vec<Value> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(profiles[0]["name"], "env");
    assert_eq!(profiles[0]["api_key"], "****9876");
    assert_eq!(profiles[0]["api_uri"], "http://localhost:9999");
}
