// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Common types used across both API generations

use serde::{Deserialize, Serialize};

/// RFC3339 timestamp
pub type Timestamp = String;

/// Standard response envelope
///
/// Every successful response wraps its payload in `data`, with paging
/// information (for collections) under `meta`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response<T> {
    pub data: T,
    #[serde(default)]
    pub meta: Meta,
}

/// Response metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Paging information for collection responses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub per_page: u64,
    #[serde(default)]
    pub total_pages: u64,
    #[serde(default)]
    pub links: Links,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
}

/// Error envelope returned with non-2xx responses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

/// A single API error
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.title.is_empty(), self.detail.is_empty()) {
            (false, false) => write!(f, "{}: {}", self.title, self.detail),
            (false, true) => write!(f, "{}", self.title),
            (true, false) => write!(f, "{}", self.detail),
            (true, true) => write!(f, "unknown error"),
        }
    }
}

/// Payload of a create call that only returns the new resource's ID
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdResponse<I = String> {
    pub id: I,
}

/// Payload of a v2 mutation that the server completes asynchronously
///
/// `task_id` can be polled via the tasks endpoint; `id` is the affected
/// resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskReference {
    pub task_id: String,
    #[serde(default)]
    pub id: String,
}

/// Payload of a v2 action (delete, power, assign) that only yields a task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskId {
    pub task_id: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError {
            title: "Not Found".to_string(),
            detail: "The vpc 'vpc-abc' was not found".to_string(),
            status: 404,
            source: None,
        };
        assert_eq!(err.to_string(), "Not Found: The vpc 'vpc-abc' was not found");

        let err = ApiError {
            title: String::new(),
            detail: "boom".to_string(),
            ..Default::default()
        };
        assert_eq!(err.to_string(), "boom");
        assert_eq!(ApiError::default().to_string(), "unknown error");
    }

    #[test]
    fn test_response_without_meta() {
        let resp: Response<TaskReference> =
            serde_json::from_str(r#"{"data":{"task_id":"task-1","id":"i-1"}}"#).unwrap();
        assert_eq!(resp.data.task_id, "task-1");
        assert!(resp.meta.pagination.is_none());
    }
}
