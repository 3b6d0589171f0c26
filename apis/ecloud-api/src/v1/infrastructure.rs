// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Hosts, datastores, sites, networks and firewalls

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostCpu {
    #[serde(default)]
    pub qty: i64,
    #[serde(default)]
    pub cores: i64,
    #[serde(default)]
    pub speed: String,
}

/// RAM figures in GB
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostRam {
    #[serde(default)]
    pub capacity: i64,
    #[serde(default)]
    pub reserved: i64,
    #[serde(default)]
    pub allocated: i64,
    #[serde(default)]
    pub available: i64,
}

/// Dedicated host information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Host {
    pub id: i64,
    #[serde(default)]
    pub solution_id: i64,
    #[serde(default)]
    pub pod_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cpu: HostCpu,
    #[serde(default)]
    pub ram: HostRam,
}

/// Datastore information, capacities in GB
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Datastore {
    pub id: i64,
    #[serde(default)]
    pub solution_id: i64,
    #[serde(default)]
    pub site_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub capacity: i64,
    #[serde(default)]
    pub allocated: i64,
    #[serde(default)]
    pub available: i64,
}

/// Site information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub id: i64,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub solution_id: i64,
    #[serde(default)]
    pub pod_id: i64,
}

/// Solution network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// Firewall information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Firewall {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub role: String,
}

/// Running configuration of a firewall
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirewallConfig {
    /// Base64-encoded configuration
    pub config: String,
}
