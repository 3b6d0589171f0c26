// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Key/value tags attached to v1 virtual machines and solutions

use serde::{Deserialize, Serialize};

use crate::common::Timestamp;

/// Tag information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// Request to create a tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTagRequest {
    pub key: String,
    pub value: String,
}

/// Request to update a tag's value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchTagRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
