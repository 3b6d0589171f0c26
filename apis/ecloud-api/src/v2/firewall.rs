// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Firewall policy and rule types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::sync::ResourceSync;
use crate::common::Timestamp;

/// Firewall policy information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirewallPolicy {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub router_id: String,
    #[serde(default)]
    pub sequence: i64,
    #[serde(default)]
    pub sync: ResourceSync,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateFirewallPolicyRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub router_id: String,
    pub sequence: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchFirewallPolicyRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,
}

/// What a rule does with matching traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum FirewallRuleAction {
    Allow,
    Drop,
    Reject,
}

/// Traffic direction a rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum FirewallRuleDirection {
    In,
    Out,
    InOut,
}

/// Firewall rule information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirewallRule {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub firewall_policy_id: String,
    #[serde(default)]
    pub sequence: i64,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub destination: String,
    pub action: FirewallRuleAction,
    pub direction: FirewallRuleDirection,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFirewallRuleRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub firewall_policy_id: String,
    pub sequence: i64,
    pub source: String,
    pub destination: String,
    pub action: FirewallRuleAction,
    pub direction: FirewallRuleDirection,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchFirewallRuleRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<FirewallRuleAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<FirewallRuleDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_direction_wire_form() {
        let d: FirewallRuleDirection = serde_json::from_str(r#""IN_OUT""#).unwrap();
        assert_eq!(d, FirewallRuleDirection::InOut);
        assert_eq!(d.to_string(), "IN_OUT");
        assert_eq!(
            FirewallRuleDirection::from_str("in_out").unwrap(),
            FirewallRuleDirection::InOut
        );
    }

    #[test]
    fn test_action_parses_case_insensitively() {
        assert_eq!(
            FirewallRuleAction::from_str("allow").unwrap(),
            FirewallRuleAction::Allow
        );
        assert!(FirewallRuleAction::from_str("permit").is_err());
    }
}
