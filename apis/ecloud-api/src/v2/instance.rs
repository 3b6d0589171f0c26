// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::sync::ResourceSync;
use crate::common::Timestamp;

/// Instance information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instance {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub vpc_id: String,
    #[serde(default)]
    pub availability_zone_id: String,
    #[serde(default)]
    pub image_id: String,
    #[serde(default)]
    pub vcpu_cores: i64,
    /// RAM in MiB
    #[serde(default)]
    pub ram_capacity: i64,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub backup_enabled: bool,
    #[serde(default)]
    pub platform: String,
    /// Total volume capacity in GiB
    #[serde(default)]
    pub volume_capacity: i64,
    #[serde(default)]
    pub online: Option<bool>,
    #[serde(default)]
    pub agent_running: Option<bool>,
    #[serde(default)]
    pub sync: ResourceSync,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateInstanceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub vpc_id: String,
    pub image_id: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub image_data: HashMap<String, String>,
    pub vcpu_cores: i64,
    pub ram_capacity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    pub volume_capacity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_iops: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_enabled: Option<bool>,
    pub network_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floating_ip_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_floating_ip: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_script: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_key_pair_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_group_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchInstanceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcpu_cores: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram_capacity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_group_id: Option<String>,
}
