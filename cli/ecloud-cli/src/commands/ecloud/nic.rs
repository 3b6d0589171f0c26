// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! NIC commands

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use super::Context;
use super::common::{ListArgs, show_each};

pub(super) const COLUMNS: &[&str] = &[
    "id",
    "mac_address",
    "instance_id",
    "network_id",
    "ip_address",
];

#[derive(Subcommand, Clone)]
pub enum NicCommand {
    /// List NICs
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show NIC(s)
    #[command(alias = "get")]
    Show(NicShowArgs),
}

#[derive(Args, Clone)]
pub struct NicShowArgs {
    /// NIC ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,
}

impl NicCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(args) => {
                let nics = ctx
                    .client
                    .list_nics(&args.parameters()?)
                    .await
                    .context("Error retrieving NICs")?;
                ctx.output.print(&nics, COLUMNS)
            }
            Self::Show(args) => {
                let client = &ctx.client;
                show_each(&ctx.output, "NIC", &args.ids, COLUMNS, |id| async move {
                    client.get_nic(&id).await
                })
                .await
            }
        }
    }
}
