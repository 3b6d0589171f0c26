// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Dedicated firewall commands

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use super::Context;
use super::common::{BatchErrors, ListArgs, show_each};

pub(super) const COLUMNS: &[&str] = &["id", "name", "hostname", "ip", "role"];

#[derive(Subcommand, Clone)]
pub enum FirewallCommand {
    /// List firewalls
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show firewall(s)
    #[command(alias = "get")]
    Show(FirewallShowArgs),
}

#[derive(Args, Clone)]
pub struct FirewallShowArgs {
    /// Firewall ID(s)
    #[arg(required = true)]
    pub ids: Vec<i64>,

    /// Print the firewall configuration instead of its details
    #[arg(long)]
    pub config: bool,
}

impl FirewallCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(args) => {
                let firewalls = ctx
                    .client
                    .list_firewalls(&args.parameters()?)
                    .await
                    .context("Error retrieving firewalls")?;
                ctx.output.print(&firewalls, COLUMNS)
            }
            Self::Show(args) if args.config => show_configs(args, ctx).await,
            Self::Show(args) => {
                let client = &ctx.client;
                show_each(&ctx.output, "firewall", &args.ids, COLUMNS, |id| async move {
                    client.get_firewall(id).await
                })
                .await
            }
        }
    }
}

async fn show_configs(args: FirewallShowArgs, ctx: &Context) -> Result<()> {
    let mut errors = BatchErrors::default();
    for id in &args.ids {
        match ctx.client.get_firewall_config(*id).await {
            Ok(config) => println!("{}", config.config),
            Err(e) => errors.record(format!("Error retrieving firewall config [{}]: {}", id, e)),
        }
    }
    errors.finish()
}
