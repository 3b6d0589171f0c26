// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Marketplace appliance types

use serde::{Deserialize, Serialize};

use crate::common::Timestamp;

/// Appliance information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appliance {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub logo_uri: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub documentation_uri: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// A parameter an appliance accepts at deploy time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplianceParameter {
    pub id: String,
    #[serde(default)]
    pub version_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub key: String,
    #[serde(default, rename = "type")]
    pub parameter_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub validation_rule: String,
}
