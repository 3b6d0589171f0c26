// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Floating IP commands

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use ecloud_api::v2::{CreateFloatingIpRequest, PatchFloatingIpRequest};

use super::Context;
use super::common::{ListArgs, WaitFlag, for_each, show_each};
use super::wait::{task_or_deleted_wait, task_or_sync_wait};

const COLUMNS: &[&str] = &["id", "name", "ip_address", "resource_id", "sync.status"];

#[derive(Subcommand, Clone)]
pub enum FloatingIpCommand {
    /// List floating IPs
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show floating IP(s)
    #[command(alias = "get")]
    Show(FloatingIpShowArgs),
    /// Create a floating IP
    Create(FloatingIpCreateArgs),
    /// Update a floating IP
    Update(FloatingIpUpdateArgs),
    /// Delete floating IP(s)
    #[command(alias = "rm")]
    Delete(FloatingIpBatchArgs),
    /// Assign a floating IP to a resource
    Assign(FloatingIpAssignArgs),
    /// Unassign floating IP(s) from their resource
    Unassign(FloatingIpBatchArgs),
}

#[derive(Args, Clone)]
pub struct FloatingIpShowArgs {
    /// Floating IP ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Args, Clone)]
pub struct FloatingIpCreateArgs {
    /// VPC ID
    #[arg(long)]
    pub vpc: String,

    /// Availability zone ID
    #[arg(long)]
    pub availability_zone: Option<String>,

    /// Floating IP name
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
pub struct FloatingIpUpdateArgs {
    /// Floating IP ID
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
pub struct FloatingIpAssignArgs {
    /// Floating IP ID
    pub id: String,

    /// ID of the resource to assign to, such as an instance or NIC
    #[arg(long)]
    pub resource: String,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
pub struct FloatingIpBatchArgs {
    /// Floating IP ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

impl FloatingIpCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let client = &ctx.client;
        match self {
            Self::List(args) => {
                let fips = client
                    .list_floating_ips(&args.parameters()?)
                    .await
                    .context("Error retrieving floating IPs")?;
                ctx.output.print(&fips, COLUMNS)
            }
            Self::Show(args) => {
                show_each(&ctx.output, "floating IP", &args.ids, COLUMNS, |id| async move {
                    client.get_floating_ip(&id).await
                })
                .await
            }
            Self::Create(args) => {
                let req = CreateFloatingIpRequest {
                    name: args.name,
                    vpc_id: args.vpc,
                    availability_zone_id: args.availability_zone,
                };
                let task = client
                    .create_floating_ip(&req)
                    .await
                    .context("Error creating floating IP")?;
                ctx.finish_task(
                    "floating IP",
                    &task.id,
                    &task.task_id,
                    args.wait.wait,
                    COLUMNS,
                    client.get_floating_ip(&task.id),
                )
                .await
            }
            Self::Update(args) => {
                let req = PatchFloatingIpRequest { name: args.name };
                let task = client
                    .patch_floating_ip(&args.id, &req)
                    .await
                    .with_context(|| format!("Error updating floating IP [{}]", args.id))?;
                ctx.finish_task(
                    "floating IP",
                    &args.id,
                    &task.task_id,
                    args.wait.wait,
                    COLUMNS,
                    client.get_floating_ip(&args.id),
                )
                .await
            }
            Self::Delete(args) => {
                let wait = args.wait.wait;
                for_each("removing", "floating IP", &args.ids, |id| async move {
                    let task_id = client.delete_floating_ip(&id).await?;
                    if wait {
                        task_or_deleted_wait(client, ctx.wait, task_id.as_deref(), || {
                            client.get_floating_ip(&id)
                        })
                        .await?;
                    }
                    Ok(())
                })
                .await
            }
            Self::Assign(args) => {
                let task_id = client
                    .assign_floating_ip(&args.id, &args.resource)
                    .await
                    .with_context(|| format!("Error assigning floating IP [{}]", args.id))?;
                if args.wait.wait {
                    wait_for_sync(ctx, &args.id, task_id.as_deref())
                        .await
                        .with_context(|| format!("Error waiting for floating IP [{}]", args.id))?;
                }
                Ok(())
            }
            Self::Unassign(args) => {
                let wait = args.wait.wait;
                for_each("unassigning", "floating IP", &args.ids, |id| async move {
                    let task_id = client.unassign_floating_ip(&id).await?;
                    if wait {
                        wait_for_sync(ctx, &id, task_id.as_deref()).await?;
                    }
                    Ok(())
                })
                .await
            }
        }
    }
}

async fn wait_for_sync(ctx: &Context, id: &str, task_id: Option<&str>) -> Result<()> {
    task_or_sync_wait(&ctx.client, ctx.wait, task_id, || async {
        ctx.client.get_floating_ip(id).await.map(|fip| fip.sync.status)
    })
    .await?;
    Ok(())
}
