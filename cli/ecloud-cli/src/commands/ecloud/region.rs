// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Region commands

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use super::Context;
use super::common::{ListArgs, show_each};

const COLUMNS: &[&str] = &["id", "name"];

#[derive(Subcommand, Clone)]
pub enum RegionCommand {
    /// List regions
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show region(s)
    #[command(alias = "get")]
    Show(RegionShowArgs),
}

#[derive(Args, Clone)]
pub struct RegionShowArgs {
    /// Region ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,
}

impl RegionCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(args) => {
                let regions = ctx
                    .client
                    .list_regions(&args.parameters()?)
                    .await
                    .context("Error retrieving regions")?;
                ctx.output.print(&regions, COLUMNS)
            }
            Self::Show(args) => {
                let client = &ctx.client;
                show_each(&ctx.output, "region", &args.ids, COLUMNS, |id| async move {
                    client.get_region(&id).await
                })
                .await
            }
        }
    }
}
