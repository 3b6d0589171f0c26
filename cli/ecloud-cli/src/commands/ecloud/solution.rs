// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Solution commands

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use ecloud_api::v1::PatchSolutionRequest;
use ecloud_client::{TagOwner, TemplateOwner};

use super::Context;
use super::common::{ListArgs, show_each};
use super::resource_tag::ResourceTagCommand;
use super::template::TemplateCommand;
use super::{datastore, firewall, host, site, vm};

const COLUMNS: &[&str] = &["id", "name", "environment", "pod_id"];
const NETWORK_COLUMNS: &[&str] = &["id", "name"];

#[derive(Subcommand, Clone)]
pub enum SolutionCommand {
    /// List solutions
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show solution(s)
    #[command(alias = "get")]
    Show(SolutionShowArgs),
    /// Update a solution
    Update(SolutionUpdateArgs),
    /// List virtual machines in a solution
    Vm {
        #[command(subcommand)]
        command: SolutionChildCommand,
    },
    /// List networks in a solution
    Network {
        #[command(subcommand)]
        command: SolutionChildCommand,
    },
    /// List firewalls in a solution
    Firewall {
        #[command(subcommand)]
        command: SolutionChildCommand,
    },
    /// List datastores in a solution
    Datastore {
        #[command(subcommand)]
        command: SolutionChildCommand,
    },
    /// List sites in a solution
    Site {
        #[command(subcommand)]
        command: SolutionChildCommand,
    },
    /// List hosts in a solution
    Host {
        #[command(subcommand)]
        command: SolutionChildCommand,
    },
    /// Manage solution templates
    Template {
        #[command(subcommand)]
        command: TemplateCommand,
    },
    /// Manage solution tags
    Tag {
        #[command(subcommand)]
        command: ResourceTagCommand,
    },
}

/// The only verb available on a solution's child collections
#[derive(Subcommand, Clone)]
pub enum SolutionChildCommand {
    /// List items belonging to a solution
    #[command(alias = "ls")]
    List(SolutionChildListArgs),
}

#[derive(Args, Clone)]
pub struct SolutionChildListArgs {
    /// Solution ID
    pub solution: i64,

    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Args, Clone)]
pub struct SolutionShowArgs {
    /// Solution ID(s)
    #[arg(required = true)]
    pub ids: Vec<i64>,
}

#[derive(Args, Clone)]
pub struct SolutionUpdateArgs {
    /// Solution ID
    pub id: i64,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// Encrypt new virtual machines by default
    #[arg(long)]
    pub encryption_default: Option<bool>,
}

impl SolutionCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let client = &ctx.client;
        match self {
            Self::List(args) => {
                let solutions = client
                    .list_solutions(&args.parameters()?)
                    .await
                    .context("Error retrieving solutions")?;
                ctx.output.print(&solutions, COLUMNS)
            }
            Self::Show(args) => {
                show_each(&ctx.output, "solution", &args.ids, COLUMNS, |id| async move {
                    client.get_solution(id).await
                })
                .await
            }
            Self::Update(args) => {
                let req = PatchSolutionRequest {
                    name: args.name,
                    encryption_default: args.encryption_default,
                };
                client
                    .patch_solution(args.id, &req)
                    .await
                    .with_context(|| format!("Error updating solution [{}]", args.id))?;
                let solution = client
                    .get_solution(args.id)
                    .await
                    .with_context(|| format!("Error retrieving solution [{}]", args.id))?;
                ctx.output.print(&[solution], COLUMNS)
            }
            Self::Vm {
                command: SolutionChildCommand::List(args),
            } => {
                let vms = client
                    .list_solution_vms(args.solution, &args.list.parameters()?)
                    .await
                    .context("Error retrieving solution virtual machines")?;
                ctx.output.print(&vms, vm::COLUMNS)
            }
            Self::Network {
                command: SolutionChildCommand::List(args),
            } => {
                let networks = client
                    .list_solution_networks(args.solution, &args.list.parameters()?)
                    .await
                    .context("Error retrieving solution networks")?;
                ctx.output.print(&networks, NETWORK_COLUMNS)
            }
            Self::Firewall {
                command: SolutionChildCommand::List(args),
            } => {
                let firewalls = client
                    .list_solution_firewalls(args.solution, &args.list.parameters()?)
                    .await
                    .context("Error retrieving solution firewalls")?;
                ctx.output.print(&firewalls, firewall::COLUMNS)
            }
            Self::Datastore {
                command: SolutionChildCommand::List(args),
            } => {
                let datastores = client
                    .list_solution_datastores(args.solution, &args.list.parameters()?)
                    .await
                    .context("Error retrieving solution datastores")?;
                ctx.output.print(&datastores, datastore::COLUMNS)
            }
            Self::Site {
                command: SolutionChildCommand::List(args),
            } => {
                let sites = client
                    .list_solution_sites(args.solution, &args.list.parameters()?)
                    .await
                    .context("Error retrieving solution sites")?;
                ctx.output.print(&sites, site::COLUMNS)
            }
            Self::Host {
                command: SolutionChildCommand::List(args),
            } => {
                let hosts = client
                    .list_solution_hosts(args.solution, &args.list.parameters()?)
                    .await
                    .context("Error retrieving solution hosts")?;
                ctx.output.print(&hosts, host::COLUMNS)
            }
            Self::Template { command } => command.run(ctx, TemplateOwner::Solution).await,
            Self::Tag { command } => command.run(ctx, TagOwner::Solution).await,
        }
    }
}
