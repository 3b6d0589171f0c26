// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Appliance commands
//!
//! Appliances are pre-built application images that can be deployed onto
//! a v1 virtual machine. Their IDs are UUID strings.

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use super::Context;
use super::common::{ListArgs, show_each};

pub(super) const COLUMNS: &[&str] = &["id", "name", "publisher"];

const PARAMETER_COLUMNS: &[&str] = &["id", "name", "key", "type", "required"];

#[derive(Subcommand, Clone)]
pub enum ApplianceCommand {
    /// List appliances
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show appliance(s)
    #[command(alias = "get")]
    Show(ApplianceShowArgs),
    /// Inspect appliance parameters
    Parameter {
        #[command(subcommand)]
        command: ApplianceParameterCommand,
    },
}

#[derive(Args, Clone)]
pub struct ApplianceShowArgs {
    /// Appliance ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Subcommand, Clone)]
pub enum ApplianceParameterCommand {
    /// List the parameters an appliance accepts
    #[command(alias = "ls")]
    List(ApplianceParameterListArgs),
}

#[derive(Args, Clone)]
pub struct ApplianceParameterListArgs {
    /// Appliance ID
    pub appliance: String,

    #[command(flatten)]
    pub list: ListArgs,
}

impl ApplianceCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(args) => {
                let appliances = ctx
                    .client
                    .list_appliances(&args.parameters()?)
                    .await
                    .context("Error retrieving appliances")?;
                ctx.output.print(&appliances, COLUMNS)
            }
            Self::Show(args) => {
                let client = &ctx.client;
                show_each(&ctx.output, "appliance", &args.ids, COLUMNS, |id| async move {
                    client.get_appliance(&id).await
                })
                .await
            }
            Self::Parameter {
                command: ApplianceParameterCommand::List(args),
            } => {
                let parameters = ctx
                    .client
                    .list_appliance_parameters(&args.appliance, &args.list.parameters()?)
                    .await
                    .context("Error retrieving appliance parameters")?;
                ctx.output.print(&parameters, PARAMETER_COLUMNS)
            }
        }
    }
}
