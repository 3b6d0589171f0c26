// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Firewall rule commands

use anyhow::{Context as _, Result};
use clap::{ArgAction, Args, Subcommand};
use ecloud_api::v2::{
    CreateFirewallRuleRequest, FirewallRuleAction, FirewallRuleDirection,
    PatchFirewallRuleRequest,
};

use super::Context;
use super::common::{ListArgs, WaitFlag, for_each, show_each};
use super::wait::task_or_deleted_wait;

pub(super) const COLUMNS: &[&str] = &[
    "id",
    "name",
    "firewall_policy_id",
    "sequence",
    "source",
    "destination",
    "action",
    "direction",
    "enabled",
];

#[derive(Subcommand, Clone)]
pub enum FirewallRuleCommand {
    /// List firewall rules
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show firewall rule(s)
    #[command(alias = "get")]
    Show(FirewallRuleShowArgs),
    /// Create a firewall rule
    Create(FirewallRuleCreateArgs),
    /// Update a firewall rule
    Update(FirewallRuleUpdateArgs),
    /// Delete firewall rule(s)
    #[command(alias = "rm")]
    Delete(FirewallRuleDeleteArgs),
}

#[derive(Args, Clone)]
pub struct FirewallRuleShowArgs {
    /// Firewall rule ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Args, Clone)]
pub struct FirewallRuleCreateArgs {
    /// Firewall policy ID
    #[arg(long)]
    pub policy: String,

    /// Evaluation order within the policy
    #[arg(long)]
    pub sequence: i64,

    /// Source address, range or ANY
    #[arg(long)]
    pub source: String,

    /// Destination address, range or ANY
    #[arg(long)]
    pub destination: String,

    /// ALLOW, DROP or REJECT
    #[arg(long)]
    pub action: FirewallRuleAction,

    /// IN, OUT or IN_OUT
    #[arg(long)]
    pub direction: FirewallRuleDirection,

    /// Whether the rule is active
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub enabled: bool,

    /// Rule name
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
pub struct FirewallRuleUpdateArgs {
    /// Firewall rule ID
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// Evaluation order within the policy
    #[arg(long)]
    pub sequence: Option<i64>,

    /// Source address, range or ANY
    #[arg(long)]
    pub source: Option<String>,

    /// Destination address, range or ANY
    #[arg(long)]
    pub destination: Option<String>,

    /// ALLOW, DROP or REJECT
    #[arg(long)]
    pub action: Option<FirewallRuleAction>,

    /// IN, OUT or IN_OUT
    #[arg(long)]
    pub direction: Option<FirewallRuleDirection>,

    /// Whether the rule is active
    #[arg(long)]
    pub enabled: Option<bool>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
pub struct FirewallRuleDeleteArgs {
    /// Firewall rule ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

impl FirewallRuleCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let client = &ctx.client;
        match self {
            Self::List(args) => {
                let rules = client
                    .list_firewall_rules(&args.parameters()?)
                    .await
                    .context("Error retrieving firewall rules")?;
                ctx.output.print(&rules, COLUMNS)
            }
            Self::Show(args) => {
                show_each(&ctx.output, "firewall rule", &args.ids, COLUMNS, |id| async move {
                    client.get_firewall_rule(&id).await
                })
                .await
            }
            Self::Create(args) => {
                let req = CreateFirewallRuleRequest {
                    name: args.name,
                    firewall_policy_id: args.policy,
                    sequence: args.sequence,
                    source: args.source,
                    destination: args.destination,
                    action: args.action,
                    direction: args.direction,
                    enabled: args.enabled,
                };
                let task = client
                    .create_firewall_rule(&req)
                    .await
                    .context("Error creating firewall rule")?;
                ctx.finish_task(
                    "firewall rule",
                    &task.id,
                    &task.task_id,
                    args.wait.wait,
                    COLUMNS,
                    client.get_firewall_rule(&task.id),
                )
                .await
            }
            Self::Update(args) => {
                let req = PatchFirewallRuleRequest {
                    name: args.name,
                    sequence: args.sequence,
                    source: args.source,
                    destination: args.destination,
                    action: args.action,
                    direction: args.direction,
                    enabled: args.enabled,
                };
                let task = client
                    .patch_firewall_rule(&args.id, &req)
                    .await
                    .with_context(|| format!("Error updating firewall rule [{}]", args.id))?;
                ctx.finish_task(
                    "firewall rule",
                    &args.id,
                    &task.task_id,
                    args.wait.wait,
                    COLUMNS,
                    client.get_firewall_rule(&args.id),
                )
                .await
            }
            Self::Delete(args) => {
                let wait = args.wait.wait;
                for_each("removing", "firewall rule", &args.ids, |id| async move {
                    let task_id = client.delete_firewall_rule(&id).await?;
                    if wait {
                        task_or_deleted_wait(client, ctx.wait, task_id.as_deref(), || {
                            client.get_firewall_rule(&id)
                        })
                        .await?;
                    }
                    Ok(())
                })
                .await
            }
        }
    }
}
