// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Firewall policy commands

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use ecloud_api::v2::{CreateFirewallPolicyRequest, PatchFirewallPolicyRequest};

use super::Context;
use super::common::{ListArgs, WaitFlag, for_each, show_each};
use super::firewall_rule;
use super::wait::task_or_deleted_wait;

pub(super) const COLUMNS: &[&str] = &["id", "name", "router_id", "sequence", "sync.status"];

#[derive(Subcommand, Clone)]
pub enum FirewallPolicyCommand {
    /// List firewall policies
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show firewall policy(s)
    #[command(alias = "get")]
    Show(FirewallPolicyShowArgs),
    /// Create a firewall policy
    Create(FirewallPolicyCreateArgs),
    /// Update a firewall policy
    Update(FirewallPolicyUpdateArgs),
    /// Delete firewall policy(s)
    #[command(alias = "rm")]
    Delete(FirewallPolicyDeleteArgs),
    /// List rules in a firewall policy
    #[command(name = "firewallrule")]
    FirewallRule {
        #[command(subcommand)]
        command: FirewallPolicyRuleCommand,
    },
}

#[derive(Subcommand, Clone)]
pub enum FirewallPolicyRuleCommand {
    /// List rules in a firewall policy
    #[command(alias = "ls")]
    List {
        /// Firewall policy ID
        policy: String,

        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Args, Clone)]
pub struct FirewallPolicyShowArgs {
    /// Firewall policy ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Args, Clone)]
pub struct FirewallPolicyCreateArgs {
    /// Router ID
    #[arg(long)]
    pub router: String,

    /// Evaluation order; lower runs first
    #[arg(long)]
    pub sequence: i64,

    /// Policy name
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
pub struct FirewallPolicyUpdateArgs {
    /// Firewall policy ID
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// Evaluation order
    #[arg(long)]
    pub sequence: Option<i64>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
pub struct FirewallPolicyDeleteArgs {
    /// Firewall policy ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

impl FirewallPolicyCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let client = &ctx.client;
        match self {
            Self::List(args) => {
                let policies = client
                    .list_firewall_policies(&args.parameters()?)
                    .await
                    .context("Error retrieving firewall policies")?;
                ctx.output.print(&policies, COLUMNS)
            }
            Self::Show(args) => {
                show_each(&ctx.output, "firewall policy", &args.ids, COLUMNS, |id| async move {
                    client.get_firewall_policy(&id).await
                })
                .await
            }
            Self::Create(args) => {
                let req = CreateFirewallPolicyRequest {
                    name: args.name,
                    router_id: args.router,
                    sequence: args.sequence,
                };
                let task = client
                    .create_firewall_policy(&req)
                    .await
                    .context("Error creating firewall policy")?;
                ctx.finish_task(
                    "firewall policy",
                    &task.id,
                    &task.task_id,
                    args.wait.wait,
                    COLUMNS,
                    client.get_firewall_policy(&task.id),
                )
                .await
            }
            Self::Update(args) => {
                let req = PatchFirewallPolicyRequest {
                    name: args.name,
                    sequence: args.sequence,
                };
                let task = client
                    .patch_firewall_policy(&args.id, &req)
                    .await
                    .with_context(|| format!("Error updating firewall policy [{}]", args.id))?;
                ctx.finish_task(
                    "firewall policy",
                    &args.id,
                    &task.task_id,
                    args.wait.wait,
                    COLUMNS,
                    client.get_firewall_policy(&args.id),
                )
                .await
            }
            Self::Delete(args) => {
                let wait = args.wait.wait;
                for_each("removing", "firewall policy", &args.ids, |id| async move {
                    let task_id = client.delete_firewall_policy(&id).await?;
                    if wait {
                        task_or_deleted_wait(client, ctx.wait, task_id.as_deref(), || {
                            client.get_firewall_policy(&id)
                        })
                        .await?;
                    }
                    Ok(())
                })
                .await
            }
            Self::FirewallRule {
                command: FirewallPolicyRuleCommand::List { policy, list },
            } => {
                let rules = client
                    .list_firewall_policy_rules(&policy, &list.parameters()?)
                    .await
                    .with_context(|| {
                        format!("Error retrieving firewall policy rules [{}]", policy)
                    })?;
                ctx.output.print(&rules, firewall_rule::COLUMNS)
            }
        }
    }
}
