// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Host commands

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use super::Context;
use super::common::{ListArgs, show_each};

pub(super) const COLUMNS: &[&str] = &[
    "id",
    "name",
    "solution_id",
    "pod_id",
    "cpu.cores",
    "ram.capacity",
];

#[derive(Subcommand, Clone)]
pub enum HostCommand {
    /// List hosts
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show host(s)
    #[command(alias = "get")]
    Show(HostShowArgs),
}

#[derive(Args, Clone)]
pub struct HostShowArgs {
    /// Host ID(s)
    #[arg(required = true)]
    pub ids: Vec<i64>,
}

impl HostCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(args) => list_hosts(args, ctx).await,
            Self::Show(args) => show_hosts(args, ctx).await,
        }
    }
}

async fn list_hosts(args: ListArgs, ctx: &Context) -> Result<()> {
    let hosts = ctx
        .client
        .list_hosts(&args.parameters()?)
        .await
        .context("Error retrieving hosts")?;
    ctx.output.print(&hosts, COLUMNS)
}

async fn show_hosts(args: HostShowArgs, ctx: &Context) -> Result<()> {
    let client = &ctx.client;
    show_each(&ctx.output, "host", &args.ids, COLUMNS, |id| async move {
        client.get_host(id).await
    })
    .await
}
