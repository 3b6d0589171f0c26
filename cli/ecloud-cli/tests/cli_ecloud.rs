// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! End-to-end eCloud command tests against a mock API server

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod common;

use common::{api_cmd, envelope, run, stderr, stdout};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn vpc(id: &str, name: &str, status: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "region_id": "reg-1",
        "sync": {"status": status, "type": "update"}
    })
}

fn task(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "resource_id": "net-1",
        "name": "network_delete",
        "status": status,
        "created_at": "2026-01-01T00:00:00+00:00"
    })
}

async fn mount_get(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_vpc_list_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ecloud/v2/vpcs"))
        .and(header("Authorization", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            vpc("vpc-1", "production", "complete"),
            vpc("vpc-2", "staging", "in-progress"),
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = api_cmd(dir.path(), &server.uri());
    cmd.args(["ecloud", "vpc", "list"]);
    let output = run(cmd).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("ID"));
    assert!(out.contains("SYNC.STATUS"));
    assert!(out.contains("production"));
    assert!(out.contains("in-progress"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_vpc_list_json_with_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ecloud/v2/vpcs"))
        .and(query_param("name:eq", "production"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(json!([vpc("vpc-1", "production", "complete")]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = api_cmd(dir.path(), &server.uri());
    cmd.args(["-o", "json", "ecloud", "vpc", "list", "--filter", "name=production"]);
    let output = run(cmd).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let vpcs: Vec<Value> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(vpcs.len(), 1);
    assert_eq!(vpcs[0]["id"], "vpc-1");
    assert_eq!(vpcs[0]["sync"]["status"], "complete");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_value_output_with_property() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/ecloud/v2/vpcs",
        envelope(json!([
            vpc("vpc-1", "production", "complete"),
            vpc("vpc-2", "staging", "complete"),
        ])),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = api_cmd(dir.path(), &server.uri());
    cmd.args(["-o", "value", "--property", "id", "ecloud", "vpc", "list"]);
    let output = run(cmd).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "vpc-1\nvpc-2\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_show_reports_missing_ids_and_prints_the_rest() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/ecloud/v2/instances/i-1",
        envelope(json!({"id": "i-1", "name": "web", "vpc_id": "vpc-1"})),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/ecloud/v2/instances/i-missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{"title": "Not found", "detail": "Resource not found", "status": 404}]
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = api_cmd(dir.path(), &server.uri());
    cmd.args(["-o", "json", "ecloud", "instance", "show", "i-1", "i-missing"]);
    let output = run(cmd).await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Error retrieving instance [i-missing]"));
    let instances: Vec<Value> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(instances.len(), 1);
    assert_eq!(instances[0]["id"], "i-1");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_network_delete_waits_for_task() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/ecloud/v2/networks/net-1"))
        .respond_with(
            ResponseTemplate::new(202)
                .set_body_json(envelope(json!({"task_id": "task-1", "id": "net-1"}))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ecloud/v2/tasks/task-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(task("task-1", "complete"))))
        .expect(1..)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = api_cmd(dir.path(), &server.uri());
    cmd.args(["ecloud", "network", "delete", "--wait", "net-1"]);
    let output = run(cmd).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_task_wait_polls_until_complete() {
    let server = MockServer::start().await;
    // Mounted first so it answers the first poll only
    Mock::given(method("GET"))
        .and(path("/ecloud/v2/tasks/task-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(task("task-1", "in-progress"))),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_get(&server, "/ecloud/v2/tasks/task-1", envelope(task("task-1", "complete"))).await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = api_cmd(dir.path(), &server.uri());
    cmd.args(["ecloud", "task", "wait", "task-1"]);
    let output = run(cmd).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_task_wait_fails_on_failed_task() {
    let server = MockServer::start().await;
    mount_get(&server, "/ecloud/v2/tasks/task-1", envelope(task("task-1", "failed"))).await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = api_cmd(dir.path(), &server.uri());
    cmd.args(["ecloud", "task", "wait", "task-1"]);
    let output = run(cmd).await;

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Error waiting for task [task-1]"));
    assert!(err.contains("task in [failed] state"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_vpc_create_waits_for_sync() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ecloud/v2/vpcs"))
        .respond_with(ResponseTemplate::new(201).set_body_json(envelope(json!({"id": "vpc-new"}))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ecloud/v2/vpcs/vpc-new"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(vpc("vpc-new", "created", "in-progress"))),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_get(
        &server,
        "/ecloud/v2/vpcs/vpc-new",
        envelope(vpc("vpc-new", "created", "complete")),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = api_cmd(dir.path(), &server.uri());
    cmd.args([
        "-o", "json", "ecloud", "vpc", "create", "--region", "reg-1", "--name", "created",
        "--wait",
    ]);
    let output = run(cmd).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let vpcs: Vec<Value> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(vpcs[0]["id"], "vpc-new");
    assert_eq!(vpcs[0]["sync"]["status"], "complete");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ecloud/v2/vpcs"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "errors": [{"title": "Server Error", "detail": "boom", "status": 500}]
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = api_cmd(dir.path(), &server.uri());
    cmd.args(["ecloud", "vpc", "list"]);
    let output = run(cmd).await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Error retrieving VPCs"));
}

async fn requests_to(server: &MockServer, verb: &str, route: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.method.as_str() == verb && r.url.path() == route)
        .count()
}

fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({
        "errors": [{"title": "Not found", "detail": "Resource not found", "status": 404}]
    }))
}

fn vm(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "name": "web-01",
        "status": status,
        "power_status": "Online"
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn test_template_rename_waits_for_new_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ecloud/v1/pods/3/templates/old/move"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ecloud/v1/pods/3/templates/new"))
        .respond_with(not_found())
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_get(
        &server,
        "/ecloud/v1/pods/3/templates/new",
        envelope(json!({"name": "new", "cpu": 2, "ram": 4, "hdd": 40})),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = api_cmd(dir.path(), &server.uri());
    cmd.args([
        "-o", "json", "ecloud", "pod", "template", "update", "3", "old", "--name", "new",
        "--wait",
    ]);
    let output = run(cmd).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let templates: Vec<Value> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(templates[0]["name"], "new");
    // Two polls on the new name, then the final fetch; the old name is never read
    assert_eq!(requests_to(&server, "GET", "/ecloud/v1/pods/3/templates/new").await, 3);
    assert_eq!(requests_to(&server, "GET", "/ecloud/v1/pods/3/templates/old").await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_template_delete_waits_until_gone() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/ecloud/v1/solutions/12/templates/web-base"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ecloud/v1/solutions/12/templates/web-base"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({"name": "web-base"}))))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ecloud/v1/solutions/12/templates/web-base"))
        .respond_with(not_found())
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = api_cmd(dir.path(), &server.uri());
    cmd.args([
        "ecloud", "solution", "template", "delete", "12", "web-base", "--wait",
    ]);
    let output = run(cmd).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        requests_to(&server, "GET", "/ecloud/v1/solutions/12/templates/web-base").await,
        2
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_vm_start_waits_for_complete_status() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/ecloud/v1/vms/42/power-on"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ecloud/v1/vms/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vm(42, "Beingbuilt"))))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_get(&server, "/ecloud/v1/vms/42", envelope(vm(42, "Complete"))).await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = api_cmd(dir.path(), &server.uri());
    cmd.args(["ecloud", "vm", "start", "42", "--wait"]);
    let output = run(cmd).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(requests_to(&server, "GET", "/ecloud/v1/vms/42").await, 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_instance_start_without_task_polls_sync_status() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/ecloud/v2/instances/i-1/power-on"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    mount_get(
        &server,
        "/ecloud/v2/instances/i-1",
        envelope(json!({
            "id": "i-1",
            "name": "web",
            "sync": {"status": "failed", "type": "update"}
        })),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = api_cmd(dir.path(), &server.uri());
    cmd.args(["ecloud", "instance", "start", "i-1", "--wait"]);
    let output = run(cmd).await;

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Error powering on instance [i-1]"));
    assert!(err.contains("resource in [failed] state"));
    assert_eq!(requests_to(&server, "GET", "/ecloud/v2/instances/i-1").await, 1);
    // No task was scheduled, so no task endpoint is polled
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_vpc_delete_waits_until_gone() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/ecloud/v2/vpcs/vpc-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ecloud/v2/vpcs/vpc-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(vpc("vpc-1", "prod", "in-progress"))),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ecloud/v2/vpcs/vpc-1"))
        .respond_with(not_found())
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut cmd = api_cmd(dir.path(), &server.uri());
    cmd.args(["ecloud", "vpc", "delete", "vpc-1", "--wait"]);
    let output = run(cmd).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(requests_to(&server, "GET", "/ecloud/v2/vpcs/vpc-1").await, 2);
}
