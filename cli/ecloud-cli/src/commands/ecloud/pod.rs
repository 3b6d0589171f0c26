// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Pod commands

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use ecloud_client::TemplateOwner;

use super::Context;
use super::common::{ListArgs, show_each};
use super::template::TemplateCommand;

const COLUMNS: &[&str] = &[
    "id",
    "name",
    "services.public",
    "services.burst",
    "services.appliances",
];

#[derive(Subcommand, Clone)]
pub enum PodCommand {
    /// List pods
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show pod(s)
    #[command(alias = "get")]
    Show(PodShowArgs),
    /// Manage pod templates
    Template {
        #[command(subcommand)]
        command: TemplateCommand,
    },
    /// List appliances available in a pod
    Appliance {
        #[command(subcommand)]
        command: PodApplianceCommand,
    },
}

#[derive(Args, Clone)]
pub struct PodShowArgs {
    /// Pod ID(s)
    #[arg(required = true)]
    pub ids: Vec<i64>,
}

#[derive(Subcommand, Clone)]
pub enum PodApplianceCommand {
    /// List appliances available in a pod
    #[command(alias = "ls")]
    List {
        /// Pod ID
        pod: i64,

        #[command(flatten)]
        list: ListArgs,
    },
}

impl PodCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(args) => {
                let pods = ctx
                    .client
                    .list_pods(&args.parameters()?)
                    .await
                    .context("Error retrieving pods")?;
                ctx.output.print(&pods, COLUMNS)
            }
            Self::Show(args) => {
                let client = &ctx.client;
                show_each(&ctx.output, "pod", &args.ids, COLUMNS, |id| async move {
                    client.get_pod(id).await
                })
                .await
            }
            Self::Template { command } => command.run(ctx, TemplateOwner::Pod).await,
            Self::Appliance {
                command: PodApplianceCommand::List { pod, list },
            } => {
                let appliances = ctx
                    .client
                    .list_pod_appliances(pod, &list.parameters()?)
                    .await
                    .with_context(|| format!("Error retrieving pod appliances [{}]", pod))?;
                ctx.output.print(&appliances, super::appliance::COLUMNS)
            }
        }
    }
}
