// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! VM template types
//!
//! Templates are owned either by a solution (private templates) or by a pod
//! (shared templates). They are addressed by name rather than ID.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Where a template is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TemplateType {
    Solution,
    Pod,
}

/// A disk belonging to a template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateDisk {
    #[serde(default)]
    pub name: String,
    /// Capacity in GB
    #[serde(default)]
    pub capacity: i64,
}

/// Template information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    #[serde(default)]
    pub cpu: i64,
    #[serde(default)]
    pub ram: i64,
    #[serde(default)]
    pub hdd: i64,
    #[serde(default)]
    pub hdd_disks: Vec<TemplateDisk>,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub operating_system: String,
    #[serde(default)]
    pub solution_id: Option<i64>,
}

/// Request to rename a template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameTemplateRequest {
    pub destination: String,
}
