// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

// Allow expect/unwrap in tests - they provide clear panic messages on failure
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! HTTP-level tests for the eCloud client against a mock API server.

use ecloud_client::types::v1::VirtualMachineStatus;
use ecloud_client::types::v2::{CreateVpcRequest, SyncStatus, TaskStatus};
use ecloud_client::{Client, ClientConfig, Error, Filter, Parameters, TagOwner, TemplateOwner};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Test Infrastructure
// ============================================================================

const API_KEY: &str = "test-api-key";

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let client = Client::new(ClientConfig::new(API_KEY).with_base_url(server.uri()))
        .expect("failed to build client");
    (server, client)
}

fn page(data: serde_json::Value, current: u64, total_pages: u64) -> serde_json::Value {
    let count = data.as_array().map(|a| a.len()).unwrap_or(0);
    json!({
        "data": data,
        "meta": {
            "pagination": {
                "total": count as u64 * total_pages,
                "count": count,
                "per_page": 100,
                "total_pages": total_pages,
                "links": {
                    "next": if current < total_pages { json!("next") } else { json!(null) },
                    "previous": null,
                    "first": "first",
                    "last": "last"
                }
            }
        }
    })
}

// ============================================================================
// Transport
// ============================================================================

#[tokio::test]
async fn test_sends_api_key_and_unwraps_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/ecloud/v2/vpcs/vpc-abcd1234"))
        .and(header("Authorization", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": "vpc-abcd1234",
                "name": "production",
                "region_id": "reg-1",
                "sync": {"status": "complete", "type": "update"}
            },
            "meta": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let vpc = client.get_vpc("vpc-abcd1234").await.unwrap();
    assert_eq!(vpc.name, "production");
    assert_eq!(vpc.sync.status, SyncStatus::Complete);
}

#[tokio::test]
async fn test_not_found_maps_to_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/ecloud/v2/instances/i-missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{
                "title": "Not found",
                "detail": "No Instance with that ID was found",
                "status": 404
            }]
        })))
        .mount(&server)
        .await;

    let err = client.get_instance("i-missing").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        "resource not found: Not found: No Instance with that ID was found"
    );
}

#[tokio::test]
async fn test_not_found_without_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/ecloud/v1/vms/42"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.get_vm(42).await.unwrap_err();
    match err {
        Error::NotFound { path, detail } => {
            assert_eq!(path, "/ecloud/v1/vms/42");
            assert_eq!(detail, "/ecloud/v1/vms/42");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test_case(400 ; "bad request")]
#[test_case(401 ; "unauthorized")]
#[test_case(422 ; "validation")]
#[test_case(500 ; "server error")]
#[tokio::test]
async fn test_error_envelope_is_surfaced(status: u16) {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/ecloud/v2/vpcs"))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({
            "errors": [{
                "title": "Request failed",
                "detail": "region_id is invalid",
                "status": status,
                "source": "region_id"
            }]
        })))
        .mount(&server)
        .await;

    let req = CreateVpcRequest {
        region_id: "reg-bad".to_string(),
        ..Default::default()
    };
    let err = client.create_vpc(&req).await.unwrap_err();
    assert_eq!(err.status(), Some(status));
    match err {
        Error::Api { errors, .. } => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].source.as_deref(), Some("region_id"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/ecloud/v2/tasks/task-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client.get_task("task-1").await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

// ============================================================================
// Collections
// ============================================================================

#[tokio::test]
async fn test_list_follows_pagination() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/ecloud/v2/regions"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "100"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(json!([{"id": "reg-1", "name": "Manchester"}]), 1, 2)),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/ecloud/v2/regions"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(json!([{"id": "reg-2", "name": "London"}]), 2, 2)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let regions = client.list_regions(&Parameters::new()).await.unwrap();
    let ids: Vec<_> = regions.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["reg-1", "reg-2"]);
}

#[tokio::test]
async fn test_list_explicit_page_fetches_once() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/ecloud/v2/regions"))
        .and(query_param("page", "3"))
        .and(query_param("per_page", "10"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(json!([{"id": "reg-3", "name": "Paris"}]), 3, 5)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let params = Parameters::new().with_page(3).with_per_page(10);
    let regions = client.list_regions(&params).await.unwrap();
    assert_eq!(regions.len(), 1);
}

#[tokio::test]
async fn test_list_sends_filters() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/ecloud/v2/images"))
        .and(query_param("name:eq", "Ubuntu 22.04"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            json!([{"id": "img-abcd1234", "name": "Ubuntu 22.04"}]),
            1,
            1,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let params = Parameters::new().with_filter(Filter::eq("name", "Ubuntu 22.04"));
    let images = client.list_images(&params).await.unwrap();
    assert_eq!(images[0].id, "img-abcd1234");
}

#[tokio::test]
async fn test_list_without_meta_is_single_page() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/ecloud/v1/pods"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 14, "name": "Manchester South"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let pods = client.list_pods(&Parameters::new()).await.unwrap();
    assert_eq!(pods.len(), 1);
    assert_eq!(pods[0].id, 14);
}

// ============================================================================
// Mutations and tasks
// ============================================================================

#[tokio::test]
async fn test_create_vpc_returns_id() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/ecloud/v2/vpcs"))
        .and(body_json(json!({"name": "staging", "region_id": "reg-1"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"data": {"id": "vpc-new"}, "meta": {}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let req = CreateVpcRequest {
        name: Some("staging".to_string()),
        region_id: "reg-1".to_string(),
        ..Default::default()
    };
    assert_eq!(client.create_vpc(&req).await.unwrap(), "vpc-new");
}

#[tokio::test]
async fn test_delete_with_task_reference() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/ecloud/v2/instances/i-abcd1234"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "data": {"task_id": "task-abcd1234", "id": "i-abcd1234"},
            "meta": {}
        })))
        .mount(&server)
        .await;

    let task = client.delete_instance("i-abcd1234").await.unwrap();
    assert_eq!(task.as_deref(), Some("task-abcd1234"));
}

#[tokio::test]
async fn test_action_without_body_has_no_task() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/ecloud/v2/instances/i-abcd1234/power-on"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let task = client.power_on_instance("i-abcd1234").await.unwrap();
    assert_eq!(task, None);
}

#[tokio::test]
async fn test_attach_volume_sends_instance() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/ecloud/v2/volumes/vol-1/attach"))
        .and(body_json(json!({"instance_id": "i-1"})))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "data": {"task_id": "task-attach"},
            "meta": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let task = client.attach_volume("vol-1", "i-1").await.unwrap();
    assert_eq!(task.as_deref(), Some("task-attach"));
}

#[tokio::test]
async fn test_get_task_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/ecloud/v2/tasks/task-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": "task-1",
                "resource_id": "i-1",
                "name": "instance_power_on",
                "status": "in-progress"
            }
        })))
        .mount(&server)
        .await;

    let task = client.get_task("task-1").await.unwrap();
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.resource_id, "i-1");
}

// ============================================================================
// v1 resources
// ============================================================================

#[tokio::test]
async fn test_get_vm_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/ecloud/v1/vms/123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 123,
                "name": "web01",
                "status": "Beingbuilt",
                "power_status": "Offline"
            }
        })))
        .mount(&server)
        .await;

    let vm = client.get_vm(123).await.unwrap();
    assert_eq!(vm.status, VirtualMachineStatus::BeingBuilt);
}

#[tokio::test]
async fn test_template_name_is_path_encoded() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/ecloud/v1/pods/14/templates/CentOS%207%2064-bit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"name": "CentOS 7 64-bit", "cpu": 2, "ram": 2}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let template = client
        .get_template(TemplateOwner::Pod(14), "CentOS 7 64-bit")
        .await
        .unwrap();
    assert_eq!(template.name, "CentOS 7 64-bit");
}

#[tokio::test]
async fn test_rename_template() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/ecloud/v1/solutions/1/templates/old/move"))
        .and(body_json(json!({"destination": "new"})))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    client
        .rename_template(TemplateOwner::Solution(1), "old", "new")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_vm_tags() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/ecloud/v1/vms/7/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            json!([{"key": "env", "value": "prod"}]),
            1,
            1,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let tags = client
        .list_resource_tags(TagOwner::Vm(7), &Parameters::new())
        .await
        .unwrap();
    assert_eq!(tags[0].key, "env");
    assert_eq!(tags[0].value, "prod");
}
