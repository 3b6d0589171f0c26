// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Solution types

use serde::{Deserialize, Serialize};

/// Solution information
///
/// A solution groups the VMs, networks and storage of one customer
/// environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub environment: String,
    #[serde(default)]
    pub pod_id: i64,
    #[serde(default)]
    pub encryption_enabled: bool,
    #[serde(default)]
    pub encryption_default: bool,
}

/// Request to update a solution
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchSolutionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_default: Option<bool>,
}
