// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Datastore commands

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use super::Context;
use super::common::{ListArgs, show_each};

pub(super) const COLUMNS: &[&str] = &["id", "name", "status", "capacity", "allocated", "available"];

#[derive(Subcommand, Clone)]
pub enum DatastoreCommand {
    /// List datastores
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show datastore(s)
    #[command(alias = "get")]
    Show(DatastoreShowArgs),
}

#[derive(Args, Clone)]
pub struct DatastoreShowArgs {
    /// Datastore ID(s)
    #[arg(required = true)]
    pub ids: Vec<i64>,
}

impl DatastoreCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(args) => {
                let datastores = ctx
                    .client
                    .list_datastores(&args.parameters()?)
                    .await
                    .context("Error retrieving datastores")?;
                ctx.output.print(&datastores, COLUMNS)
            }
            Self::Show(args) => {
                let client = &ctx.client;
                show_each(&ctx.output, "datastore", &args.ids, COLUMNS, |id| async move {
                    client.get_datastore(id).await
                })
                .await
            }
        }
    }
}
