// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Router commands

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use ecloud_api::v2::{CreateRouterRequest, PatchRouterRequest};

use super::Context;
use super::common::{ListArgs, WaitFlag, for_each, show_each};
use super::wait::task_or_deleted_wait;
use super::{firewall_policy, network};

const COLUMNS: &[&str] = &["id", "name", "vpc_id", "availability_zone_id", "sync.status"];

#[derive(Subcommand, Clone)]
pub enum RouterCommand {
    /// List routers
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show router(s)
    #[command(alias = "get")]
    Show(RouterShowArgs),
    /// Create a router
    Create(RouterCreateArgs),
    /// Update a router
    Update(RouterUpdateArgs),
    /// Delete router(s)
    #[command(alias = "rm")]
    Delete(RouterDeleteArgs),
    /// List networks attached to a router
    Network {
        #[command(subcommand)]
        command: RouterChildCommand,
    },
    /// List firewall policies of a router
    #[command(name = "firewallpolicy")]
    FirewallPolicy {
        #[command(subcommand)]
        command: RouterChildCommand,
    },
}

#[derive(Subcommand, Clone)]
pub enum RouterChildCommand {
    /// List items belonging to a router
    #[command(alias = "ls")]
    List {
        /// Router ID
        router: String,

        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Args, Clone)]
pub struct RouterShowArgs {
    /// Router ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Args, Clone)]
pub struct RouterCreateArgs {
    /// VPC ID
    #[arg(long)]
    pub vpc: String,

    /// Availability zone ID
    #[arg(long)]
    pub availability_zone: Option<String>,

    /// Router throughput ID
    #[arg(long)]
    pub router_throughput: Option<String>,

    /// Router name
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
pub struct RouterUpdateArgs {
    /// Router ID
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// Router throughput ID
    #[arg(long)]
    pub router_throughput: Option<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
pub struct RouterDeleteArgs {
    /// Router ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

impl RouterCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let client = &ctx.client;
        match self {
            Self::List(args) => {
                let routers = client
                    .list_routers(&args.parameters()?)
                    .await
                    .context("Error retrieving routers")?;
                ctx.output.print(&routers, COLUMNS)
            }
            Self::Show(args) => {
                show_each(&ctx.output, "router", &args.ids, COLUMNS, |id| async move {
                    client.get_router(&id).await
                })
                .await
            }
            Self::Create(args) => {
                let req = CreateRouterRequest {
                    name: args.name,
                    vpc_id: args.vpc,
                    availability_zone_id: args.availability_zone,
                    router_throughput_id: args.router_throughput,
                };
                let task = client
                    .create_router(&req)
                    .await
                    .context("Error creating router")?;
                ctx.finish_task(
                    "router",
                    &task.id,
                    &task.task_id,
                    args.wait.wait,
                    COLUMNS,
                    client.get_router(&task.id),
                )
                .await
            }
            Self::Update(args) => {
                let req = PatchRouterRequest {
                    name: args.name,
                    router_throughput_id: args.router_throughput,
                };
                let task = client
                    .patch_router(&args.id, &req)
                    .await
                    .with_context(|| format!("Error updating router [{}]", args.id))?;
                ctx.finish_task(
                    "router",
                    &args.id,
                    &task.task_id,
                    args.wait.wait,
                    COLUMNS,
                    client.get_router(&args.id),
                )
                .await
            }
            Self::Delete(args) => {
                let wait = args.wait.wait;
                for_each("removing", "router", &args.ids, |id| async move {
                    let task_id = client.delete_router(&id).await?;
                    if wait {
                        task_or_deleted_wait(client, ctx.wait, task_id.as_deref(), || {
                            client.get_router(&id)
                        })
                        .await?;
                    }
                    Ok(())
                })
                .await
            }
            Self::Network {
                command: RouterChildCommand::List { router, list },
            } => {
                let networks = client
                    .list_router_networks(&router, &list.parameters()?)
                    .await
                    .with_context(|| format!("Error retrieving router networks [{}]", router))?;
                ctx.output.print(&networks, network::COLUMNS)
            }
            Self::FirewallPolicy {
                command: RouterChildCommand::List { router, list },
            } => {
                let policies = client
                    .list_router_firewall_policies(&router, &list.parameters()?)
                    .await
                    .with_context(|| {
                        format!("Error retrieving router firewall policies [{}]", router)
                    })?;
                ctx.output.print(&policies, firewall_policy::COLUMNS)
            }
        }
    }
}
