// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Network, router and NIC types

use serde::{Deserialize, Serialize};

use super::sync::ResourceSync;
use crate::common::Timestamp;

/// Network information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub router_id: String,
    #[serde(default)]
    pub subnet: String,
    #[serde(default)]
    pub sync: ResourceSync,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateNetworkRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub router_id: String,
    pub subnet: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchNetworkRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Router information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Router {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub vpc_id: String,
    #[serde(default)]
    pub availability_zone_id: String,
    #[serde(default)]
    pub router_throughput_id: String,
    #[serde(default)]
    pub sync: ResourceSync,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRouterRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub vpc_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_zone_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub router_throughput_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchRouterRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub router_throughput_id: Option<String>,
}

/// Network interface card information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nic {
    pub id: String,
    #[serde(default)]
    pub mac_address: String,
    #[serde(default)]
    pub instance_id: String,
    #[serde(default)]
    pub network_id: String,
    #[serde(default)]
    pub ip_address: String,
    #[serde(default)]
    pub sync: ResourceSync,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}
