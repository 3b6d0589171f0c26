// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Virtual machine types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::tag::CreateTagRequest;

/// Provisioning status of a virtual machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum VirtualMachineStatus {
    Complete,
    Failed,
    #[serde(rename = "Beingbuilt")]
    #[strum(serialize = "Beingbuilt")]
    BeingBuilt,
    #[serde(other)]
    Unknown,
}

/// Power state of a virtual machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum VirtualMachinePowerStatus {
    Online,
    Offline,
    #[serde(other)]
    Unknown,
}

/// A disk attached to a virtual machine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VirtualMachineDisk {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub disk_type: String,
    #[serde(default)]
    pub key: i64,
    /// Capacity in GB
    #[serde(default)]
    pub capacity: i64,
}

/// Virtual machine information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VirtualMachine {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub computername: String,
    /// vCPU count
    #[serde(default)]
    pub cpu: i64,
    /// RAM in GB
    #[serde(default)]
    pub ram: i64,
    /// Total disk capacity in GB
    #[serde(default)]
    pub hdd: i64,
    #[serde(default)]
    pub ip_internal: Option<String>,
    #[serde(default)]
    pub ip_external: Option<String>,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub template: String,
    #[serde(default)]
    pub backup: bool,
    #[serde(default)]
    pub support: bool,
    #[serde(default)]
    pub environment: String,
    #[serde(default)]
    pub solution_id: i64,
    pub status: VirtualMachineStatus,
    pub power_status: VirtualMachinePowerStatus,
    #[serde(default)]
    pub tools_status: String,
    #[serde(default)]
    pub encrypted: bool,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub gpu_profile: Option<String>,
    #[serde(default)]
    pub hdd_disks: Vec<VirtualMachineDisk>,
}

/// Disk specification used when creating or resizing a VM
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VirtualMachineDiskRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Capacity in GB
    pub capacity: i64,
}

/// Request to create a virtual machine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateVirtualMachineRequest {
    pub environment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appliance_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datastore_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<i64>,
    pub cpu: i64,
    pub ram: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdd: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hdd_disks: Vec<VirtualMachineDiskRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computername: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<CreateTagRequest>,
    #[serde(default)]
    pub backup: bool,
    #[serde(default)]
    pub support: bool,
    #[serde(default)]
    pub monitoring: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_keys: Vec<String>,
    #[serde(default)]
    pub encrypt: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bootstrap_script: Option<String>,
    #[serde(default)]
    pub external_ip_required: bool,
}

/// Request to update a virtual machine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchVirtualMachineRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hdd_disks: Vec<VirtualMachineDiskRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Request to clone a virtual machine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CloneVirtualMachineRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Request to create a template from a virtual machine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVirtualMachineTemplateRequest {
    pub template_name: String,
    pub template_type: super::template::TemplateType,
}
