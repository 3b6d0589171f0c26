// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Site commands

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use super::Context;
use super::common::{ListArgs, show_each};

pub(super) const COLUMNS: &[&str] = &["id", "state", "solution_id", "pod_id"];

#[derive(Subcommand, Clone)]
pub enum SiteCommand {
    /// List sites
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show site(s)
    #[command(alias = "get")]
    Show(SiteShowArgs),
}

#[derive(Args, Clone)]
pub struct SiteShowArgs {
    /// Site ID(s)
    #[arg(required = true)]
    pub ids: Vec<i64>,
}

impl SiteCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(args) => {
                let sites = ctx
                    .client
                    .list_sites(&args.parameters()?)
                    .await
                    .context("Error retrieving sites")?;
                ctx.output.print(&sites, COLUMNS)
            }
            Self::Show(args) => {
                let client = &ctx.client;
                show_each(&ctx.output, "site", &args.ids, COLUMNS, |id| async move {
                    client.get_site(id).await
                })
                .await
            }
        }
    }
}
