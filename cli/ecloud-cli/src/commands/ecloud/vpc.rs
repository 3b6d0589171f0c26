// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! VPC commands
//!
//! VPC mutations return no task; completion is tracked through the
//! resource's `sync.status` instead.

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use ecloud_api::v2::{CreateVpcRequest, PatchVpcRequest, SyncStatus};

use super::Context;
use super::common::{ListArgs, WaitFlag, for_each, show_each};
use super::task;
use super::wait::{deleted_wait, sync_status_wait};

const COLUMNS: &[&str] = &["id", "name", "region_id", "sync.status", "created_at"];

#[derive(Subcommand, Clone)]
pub enum VpcCommand {
    /// List VPCs
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show VPC(s)
    #[command(alias = "get")]
    Show(VpcShowArgs),
    /// Create a VPC
    Create(VpcCreateArgs),
    /// Update a VPC
    Update(VpcUpdateArgs),
    /// Delete VPC(s)
    #[command(alias = "rm")]
    Delete(VpcDeleteArgs),
    /// List tasks for a VPC
    Task {
        #[command(subcommand)]
        command: VpcTaskCommand,
    },
}

#[derive(Args, Clone)]
pub struct VpcShowArgs {
    /// VPC ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Args, Clone)]
pub struct VpcCreateArgs {
    /// Region ID
    #[arg(long)]
    pub region: String,

    /// VPC name
    #[arg(long)]
    pub name: Option<String>,

    /// Client ID (resellers only)
    #[arg(long)]
    pub client_id: Option<i64>,

    /// Enable advanced networking
    #[arg(long)]
    pub advanced_networking: Option<bool>,

    /// Enable console access
    #[arg(long)]
    pub console_enabled: Option<bool>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
pub struct VpcUpdateArgs {
    /// VPC ID
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// Enable console access
    #[arg(long)]
    pub console_enabled: Option<bool>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
pub struct VpcDeleteArgs {
    /// VPC ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Subcommand, Clone)]
pub enum VpcTaskCommand {
    /// List tasks for a VPC
    #[command(alias = "ls")]
    List {
        /// VPC ID
        vpc: String,

        #[command(flatten)]
        list: ListArgs,
    },
}

impl VpcCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let client = &ctx.client;
        match self {
            Self::List(args) => {
                let vpcs = client
                    .list_vpcs(&args.parameters()?)
                    .await
                    .context("Error retrieving VPCs")?;
                ctx.output.print(&vpcs, COLUMNS)
            }
            Self::Show(args) => {
                show_each(&ctx.output, "VPC", &args.ids, COLUMNS, |id| async move {
                    client.get_vpc(&id).await
                })
                .await
            }
            Self::Create(args) => {
                let req = CreateVpcRequest {
                    name: args.name,
                    region_id: args.region,
                    client_id: args.client_id,
                    advanced_networking: args.advanced_networking,
                    console_enabled: args.console_enabled,
                };
                let id = client.create_vpc(&req).await.context("Error creating VPC")?;
                finish(ctx, &id, args.wait.wait).await
            }
            Self::Update(args) => {
                let req = PatchVpcRequest {
                    name: args.name,
                    console_enabled: args.console_enabled,
                };
                client
                    .patch_vpc(&args.id, &req)
                    .await
                    .with_context(|| format!("Error updating VPC [{}]", args.id))?;
                finish(ctx, &args.id, args.wait.wait).await
            }
            Self::Delete(args) => {
                let wait = args.wait.wait;
                for_each("removing", "VPC", &args.ids, |id| async move {
                    client.delete_vpc(&id).await?;
                    if wait {
                        deleted_wait(ctx.wait, || client.get_vpc(&id)).await?;
                    }
                    Ok(())
                })
                .await
            }
            Self::Task {
                command: VpcTaskCommand::List { vpc, list },
            } => {
                let tasks = client
                    .list_vpc_tasks(&vpc, &list.parameters()?)
                    .await
                    .with_context(|| format!("Error retrieving VPC tasks [{}]", vpc))?;
                ctx.output.print(&tasks, task::COLUMNS)
            }
        }
    }
}

/// Optionally wait for the VPC to sync, then print it
async fn finish(ctx: &Context, id: &str, wait: bool) -> Result<()> {
    if wait {
        sync_status_wait(
            ctx.wait,
            || async { ctx.client.get_vpc(id).await.map(|vpc| vpc.sync.status) },
            SyncStatus::Complete,
        )
        .await
        .with_context(|| format!("Error waiting for VPC [{}]", id))?;
    }
    let vpc = ctx
        .client
        .get_vpc(id)
        .await
        .with_context(|| format!("Error retrieving VPC [{}]", id))?;
    ctx.output.print(&[vpc], COLUMNS)
}
