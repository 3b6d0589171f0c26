// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for ecloud-client

use ecloud_api::ApiError;
use thiserror::Error;

/// Errors returned by [`crate::Client`] calls
#[derive(Error, Debug)]
pub enum Error {
    /// The requested resource does not exist (HTTP 404)
    #[error("resource not found: {detail}")]
    NotFound { path: String, detail: String },

    /// The API rejected the request with a non-2xx status
    #[error("API returned {status}: {}", join_errors(.errors))]
    Api { status: u16, errors: Vec<ApiError> },

    /// Transport-level failure (connect, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Client configuration is unusable (bad URL, bad API key header)
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Returns true when the error means the resource does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// HTTP status code of an API error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::NotFound { .. } => Some(404),
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

fn join_errors(errors: &[ApiError]) -> String {
    if errors.is_empty() {
        return "no error detail".to_string();
    }
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_joins_errors() {
        let err = Error::Api {
            status: 422,
            errors: vec![
                ApiError {
                    title: "Validation Error".to_string(),
                    detail: "The name field is required".to_string(),
                    status: 422,
                    source: Some("name".to_string()),
                },
                ApiError {
                    title: "Validation Error".to_string(),
                    detail: "The region id field is required".to_string(),
                    status: 422,
                    source: Some("region_id".to_string()),
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "API returned 422: Validation Error: The name field is required; \
             Validation Error: The region id field is required"
        );
        assert_eq!(err.status(), Some(422));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found() {
        let err = Error::NotFound {
            path: "/ecloud/v2/vpcs/vpc-1".to_string(),
            detail: "The vpc 'vpc-1' was not found".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.to_string(),
            "resource not found: The vpc 'vpc-1' was not found"
        );
    }
}
