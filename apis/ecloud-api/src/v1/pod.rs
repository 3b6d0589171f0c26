// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Pod types

use serde::{Deserialize, Serialize};

/// Services a pod offers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PodServices {
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub burst: bool,
    #[serde(default)]
    pub appliances: bool,
}

/// Pod information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pod {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub services: PodServices,
}
