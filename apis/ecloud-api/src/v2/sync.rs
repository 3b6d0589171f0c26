// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Resource synchronisation state
//!
//! Every v2 resource carries a `sync` block describing whether the last
//! change has been applied to the underlying platform.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Sync status of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SyncStatus {
    Complete,
    Failed,
    InProgress,
    #[serde(other)]
    Unknown,
}

/// Sync block embedded in v2 resources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSync {
    pub status: SyncStatus,
    /// Kind of change being synced (`update`, `delete`)
    #[serde(default, rename = "type")]
    pub sync_type: String,
}

impl Default for ResourceSync {
    fn default() -> Self {
        Self {
            status: SyncStatus::Unknown,
            sync_type: String::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_sync_status_wire_form() {
        let sync: ResourceSync =
            serde_json::from_str(r#"{"status":"in-progress","type":"update"}"#).unwrap();
        assert_eq!(sync.status, SyncStatus::InProgress);
        assert_eq!(sync.status.to_string(), "in-progress");
        assert_eq!(SyncStatus::from_str("failed").unwrap(), SyncStatus::Failed);
    }

    #[test]
    fn test_sync_status_unknown() {
        let status: SyncStatus = serde_json::from_str(r#""queued""#).unwrap();
        assert_eq!(status, SyncStatus::Unknown);
    }
}
