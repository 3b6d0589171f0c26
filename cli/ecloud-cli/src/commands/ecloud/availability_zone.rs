// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Availability zone commands

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use super::Context;
use super::common::{ListArgs, show_each};

const COLUMNS: &[&str] = &["id", "name", "code", "region_id"];

#[derive(Subcommand, Clone)]
pub enum AvailabilityZoneCommand {
    /// List availability zones
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show availability zone(s)
    #[command(alias = "get")]
    Show(AvailabilityZoneShowArgs),
}

#[derive(Args, Clone)]
pub struct AvailabilityZoneShowArgs {
    /// Availability zone ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,
}

impl AvailabilityZoneCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(args) => {
                let zones = ctx
                    .client
                    .list_availability_zones(&args.parameters()?)
                    .await
                    .context("Error retrieving availability zones")?;
                ctx.output.print(&zones, COLUMNS)
            }
            Self::Show(args) => {
                let client = &ctx.client;
                show_each(&ctx.output, "availability zone", &args.ids, COLUMNS, |id| async move {
                    client.get_availability_zone(&id).await
                })
                .await
            }
        }
    }
}
