// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Volume commands

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use ecloud_api::v2::{CreateVolumeRequest, PatchVolumeRequest};

use super::Context;
use super::common::{ListArgs, WaitFlag, for_each, show_each};
use super::wait::task_or_deleted_wait;

pub(super) const COLUMNS: &[&str] = &[
    "id",
    "name",
    "vpc_id",
    "capacity",
    "iops",
    "attached",
    "sync.status",
];

#[derive(Subcommand, Clone)]
pub enum VolumeCommand {
    /// List volumes
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show volume(s)
    #[command(alias = "get")]
    Show(VolumeShowArgs),
    /// Create a volume
    Create(VolumeCreateArgs),
    /// Update a volume
    Update(VolumeUpdateArgs),
    /// Delete volume(s)
    #[command(alias = "rm")]
    Delete(VolumeDeleteArgs),
}

#[derive(Args, Clone)]
pub struct VolumeShowArgs {
    /// Volume ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Args, Clone)]
pub struct VolumeCreateArgs {
    /// VPC ID
    #[arg(long)]
    pub vpc: String,

    /// Capacity in GiB
    #[arg(long)]
    pub capacity: i64,

    /// Availability zone ID
    #[arg(long)]
    pub availability_zone: Option<String>,

    /// IOPS tier (300, 600, 1200 or 2500)
    #[arg(long)]
    pub iops: Option<i64>,

    /// Encrypt the volume
    #[arg(long)]
    pub encrypted: Option<bool>,

    /// Volume name
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
pub struct VolumeUpdateArgs {
    /// Volume ID
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New capacity in GiB
    #[arg(long)]
    pub capacity: Option<i64>,

    /// New IOPS tier
    #[arg(long)]
    pub iops: Option<i64>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
pub struct VolumeDeleteArgs {
    /// Volume ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

impl VolumeCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let client = &ctx.client;
        match self {
            Self::List(args) => {
                let volumes = client
                    .list_volumes(&args.parameters()?)
                    .await
                    .context("Error retrieving volumes")?;
                ctx.output.print(&volumes, COLUMNS)
            }
            Self::Show(args) => {
                show_each(&ctx.output, "volume", &args.ids, COLUMNS, |id| async move {
                    client.get_volume(&id).await
                })
                .await
            }
            Self::Create(args) => {
                let req = CreateVolumeRequest {
                    name: args.name,
                    vpc_id: args.vpc,
                    availability_zone_id: args.availability_zone,
                    capacity: args.capacity,
                    iops: args.iops,
                    is_encrypted: args.encrypted,
                };
                let task = client
                    .create_volume(&req)
                    .await
                    .context("Error creating volume")?;
                ctx.finish_task(
                    "volume",
                    &task.id,
                    &task.task_id,
                    args.wait.wait,
                    COLUMNS,
                    client.get_volume(&task.id),
                )
                .await
            }
            Self::Update(args) => {
                let req = PatchVolumeRequest {
                    name: args.name,
                    capacity: args.capacity,
                    iops: args.iops,
                };
                let task = client
                    .patch_volume(&args.id, &req)
                    .await
                    .with_context(|| format!("Error updating volume [{}]", args.id))?;
                ctx.finish_task(
                    "volume",
                    &args.id,
                    &task.task_id,
                    args.wait.wait,
                    COLUMNS,
                    client.get_volume(&args.id),
                )
                .await
            }
            Self::Delete(args) => {
                let wait = args.wait.wait;
                for_each("removing", "volume", &args.ids, |id| async move {
                    let task_id = client.delete_volume(&id).await?;
                    if wait {
                        task_or_deleted_wait(client, ctx.wait, task_id.as_deref(), || {
                            client.get_volume(&id)
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
