// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! VPN gateway commands

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use ecloud_api::v2::{CreateVpnGatewayRequest, PatchVpnGatewayRequest};

use super::Context;
use super::common::{ListArgs, WaitFlag, for_each, show_each};
use super::wait::task_or_deleted_wait;

const COLUMNS: &[&str] = &["id", "name", "router_id", "fqdn", "sync.status"];

#[derive(Subcommand, Clone)]
pub enum VpnGatewayCommand {
    /// List VPN gateways
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show VPN gateway(s)
    #[command(alias = "get")]
    Show(VpnGatewayIdsArgs),
    /// Create a VPN gateway
    Create(VpnGatewayCreateArgs),
    /// Update a VPN gateway
    Update(VpnGatewayUpdateArgs),
    /// Delete VPN gateway(s)
    #[command(alias = "rm")]
    Delete(VpnGatewayDeleteArgs),
}

#[derive(Args, Clone)]
pub struct VpnGatewayIdsArgs {
    /// VPN gateway ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Args, Clone)]
pub struct VpnGatewayCreateArgs {
    /// Router ID
    #[arg(long)]
    pub router: String,

    /// VPN gateway specification ID
    #[arg(long)]
    pub specification: String,

    /// Gateway name
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
pub struct VpnGatewayUpdateArgs {
    /// VPN gateway ID
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
pub struct VpnGatewayDeleteArgs {
    /// VPN gateway ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

impl VpnGatewayCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let client = &ctx.client;
        match self {
            Self::List(args) => {
                let gateways = client
                    .list_vpn_gateways(&args.parameters()?)
                    .await
                    .context("Error retrieving VPN gateways")?;
                ctx.output.print(&gateways, COLUMNS)
            }
            Self::Show(args) => {
                show_each(&ctx.output, "VPN gateway", &args.ids, COLUMNS, |id| async move {
                    client.get_vpn_gateway(&id).await
                })
                .await
            }
            Self::Create(args) => {
                let req = CreateVpnGatewayRequest {
                    name: args.name,
                    router_id: args.router,
                    specification_id: args.specification,
                };
                let task = client
                    .create_vpn_gateway(&req)
                    .await
                    .context("Error creating VPN gateway")?;
                ctx.finish_task(
                    "VPN gateway",
                    &task.id,
                    &task.task_id,
                    args.wait.wait,
                    COLUMNS,
                    client.get_vpn_gateway(&task.id),
                )
                .await
            }
            Self::Update(args) => {
                let req = PatchVpnGatewayRequest { name: args.name };
                let task = client
                    .patch_vpn_gateway(&args.id, &req)
                    .await
                    .with_context(|| format!("Error updating VPN gateway [{}]", args.id))?;
                ctx.finish_task(
                    "VPN gateway",
                    &args.id,
                    &task.task_id,
                    args.wait.wait,
                    COLUMNS,
                    client.get_vpn_gateway(&args.id),
                )
                .await
            }
            Self::Delete(args) => {
                let wait = args.wait.wait;
                for_each("removing", "VPN gateway", &args.ids, |id| async move {
                    let task_id = client.delete_vpn_gateway(&id).await?;
                    if wait {
                        task_or_deleted_wait(client, ctx.wait, task_id.as_deref(), || {
                            client.get_vpn_gateway(&id)
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
