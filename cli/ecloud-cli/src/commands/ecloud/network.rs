// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Network commands

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use ecloud_api::v2::{CreateNetworkRequest, PatchNetworkRequest};

use super::Context;
use super::common::{ListArgs, WaitFlag, for_each, show_each};
use super::wait::task_or_deleted_wait;

pub(super) const COLUMNS: &[&str] = &["id", "name", "router_id", "subnet", "sync.status"];

#[derive(Subcommand, Clone)]
pub enum NetworkCommand {
    /// List networks
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show network(s)
    #[command(alias = "get")]
    Show(NetworkShowArgs),
    /// Create a network
    Create(NetworkCreateArgs),
    /// Update a network
    Update(NetworkUpdateArgs),
    /// Delete network(s)
    #[command(alias = "rm")]
    Delete(NetworkDeleteArgs),
}

#[derive(Args, Clone)]
pub struct NetworkShowArgs {
    /// Network ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Args, Clone)]
pub struct NetworkCreateArgs {
    /// Router ID
    #[arg(long)]
    pub router: String,

    /// Subnet in CIDR notation
    #[arg(long)]
    pub subnet: String,

    /// Network name
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
pub struct NetworkUpdateArgs {
    /// Network ID
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
pub struct NetworkDeleteArgs {
    /// Network ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

impl NetworkCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let client = &ctx.client;
        match self {
            Self::List(args) => {
                let networks = client
                    .list_networks(&args.parameters()?)
                    .await
                    .context("Error retrieving networks")?;
                ctx.output.print(&networks, COLUMNS)
            }
            Self::Show(args) => {
                show_each(&ctx.output, "network", &args.ids, COLUMNS, |id| async move {
                    client.get_network(&id).await
                })
                .await
            }
            Self::Create(args) => {
                let req = CreateNetworkRequest {
                    name: args.name,
                    router_id: args.router,
                    subnet: args.subnet,
                };
                let task = client
                    .create_network(&req)
                    .await
                    .context("Error creating network")?;
                ctx.finish_task(
                    "network",
                    &task.id,
                    &task.task_id,
                    args.wait.wait,
                    COLUMNS,
                    client.get_network(&task.id),
                )
                .await
            }
            Self::Update(args) => {
                let req = PatchNetworkRequest { name: args.name };
                let task = client
                    .patch_network(&args.id, &req)
                    .await
                    .with_context(|| format!("Error updating network [{}]", args.id))?;
                ctx.finish_task(
                    "network",
                    &args.id,
                    &task.task_id,
                    args.wait.wait,
                    COLUMNS,
                    client.get_network(&args.id),
                )
                .await
            }
            Self::Delete(args) => {
                let wait = args.wait.wait;
                for_each("removing", "network", &args.ids, |id| async move {
                    let task_id = client.delete_network(&id).await?;
                    if wait {
                        task_or_deleted_wait(client, ctx.wait, task_id.as_deref(), || {
                            client.get_network(&id)
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
