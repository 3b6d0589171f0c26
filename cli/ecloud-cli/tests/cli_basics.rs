// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Basic CLI tests - help, version, completion

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod common;

use common::{ans_cmd, isolated_cmd};
use predicates::prelude::*;
use test_case::test_case;

#[test]
fn test_ans_version() {
    ans_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ans"));
}

#[test]
fn test_ans_help() {
    ans_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("ecloud"))
        .stdout(predicate::str::contains("profile"));
}

#[test_case("vm" ; "vm")]
#[test_case("solution" ; "solution")]
#[test_case("vpc" ; "vpc")]
#[test_case("az" ; "availability zone")]
#[test_case("instance" ; "instance")]
#[test_case("firewallpolicy" ; "firewall policy")]
#[test_case("floatingip" ; "floating ip")]
#[test_case("task" ; "task")]
fn test_ecloud_help_lists_resource(resource: &str) {
    ans_cmd()
        .args(["ecloud", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains(resource));
}

#[test_case(&["ecloud", "vm", "stop", "--help"], "--force" ; "vm stop force")]
#[test_case(&["ecloud", "instance", "restart", "--help"], "--force" ; "instance restart force")]
#[test_case(&["ecloud", "vpc", "delete", "--help"], "--wait" ; "vpc delete wait")]
#[test_case(&["ecloud", "vpc", "list", "--help"], "--filter" ; "list filter")]
#[test_case(&["ecloud", "fip", "--help"], "assign" ; "fip alias")]
#[test_case(&["ecloud", "availabilityzone", "--help"], "list" ; "az alias")]
fn test_subcommand_help(args: &[&str], expected: &str) {
    ans_cmd()
        .args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn test_show_requires_an_id() {
    ans_cmd()
        .args(["ecloud", "vpc", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_vm_create_requires_template_or_appliance() {
    ans_cmd()
        .args([
            "ecloud",
            "vm",
            "create",
            "--environment",
            "Hybrid",
            "--cpu",
            "2",
            "--ram",
            "4",
        ])
        .assert()
        .failure();
}

#[test]
fn test_invalid_output_format() {
    ans_cmd()
        .args(["-o", "xml", "profile", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_completion_bash() {
    ans_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ans"));
}

#[test]
fn test_ecloud_without_profile_fails() {
    let dir = tempfile::tempdir().unwrap();
    isolated_cmd(dir.path())
        .args(["ecloud", "vpc", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No profile configured"));
}
