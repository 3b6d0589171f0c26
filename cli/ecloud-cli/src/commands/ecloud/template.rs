// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Template commands shared by solutions and pods
//!
//! Solution templates are private to a solution; pod templates are shared
//! by every solution in the pod. Both are addressed by name, and renames
//! and deletes complete asynchronously on the server.

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use ecloud_client::TemplateOwner;

use super::Context;
use super::common::{ListArgs, WaitFlag, for_each, show_each};
use super::wait::{template_deleted_wait, template_exists_wait};

pub(super) const COLUMNS: &[&str] = &["name", "cpu", "ram", "hdd", "platform", "operating_system"];

#[derive(Subcommand, Clone)]
pub enum TemplateCommand {
    /// List templates
    #[command(alias = "ls")]
    List(TemplateListArgs),
    /// Show template(s)
    #[command(alias = "get")]
    Show(TemplateShowArgs),
    /// Rename a template
    Update(TemplateUpdateArgs),
    /// Delete template(s)
    #[command(alias = "rm")]
    Delete(TemplateDeleteArgs),
}

#[derive(Args, Clone)]
pub struct TemplateListArgs {
    /// Owner ID
    #[arg(value_name = "PARENT_ID")]
    pub owner: i64,

    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Args, Clone)]
pub struct TemplateShowArgs {
    /// Owner ID
    #[arg(value_name = "PARENT_ID")]
    pub owner: i64,

    /// Template name(s)
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[derive(Args, Clone)]
pub struct TemplateUpdateArgs {
    /// Owner ID
    #[arg(value_name = "PARENT_ID")]
    pub owner: i64,

    /// Current template name
    pub template: String,

    /// New template name
    #[arg(long)]
    pub name: String,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
pub struct TemplateDeleteArgs {
    /// Owner ID
    #[arg(value_name = "PARENT_ID")]
    pub owner: i64,

    /// Template name(s)
    #[arg(required = true)]
    pub names: Vec<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

impl TemplateCommand {
    /// Run against templates of the owner built by `owner`
    pub async fn run(self, ctx: &Context, owner: fn(i64) -> TemplateOwner) -> Result<()> {
        match self {
            Self::List(args) => {
                let templates = ctx
                    .client
                    .list_templates(owner(args.owner), &args.list.parameters()?)
                    .await
                    .context("Error retrieving templates")?;
                ctx.output.print(&templates, COLUMNS)
            }
            Self::Show(args) => {
                let client = &ctx.client;
                let owner = owner(args.owner);
                show_each(&ctx.output, "template", &args.names, COLUMNS, |name| async move {
                    client.get_template(owner, &name).await
                })
                .await
            }
            Self::Update(args) => update_template(args, owner, ctx).await,
            Self::Delete(args) => {
                let owner = owner(args.owner);
                let wait = args.wait.wait;
                for_each("removing", "template", &args.names, |name| async move {
                    ctx.client.delete_template(owner, &name).await?;
                    if wait {
                        template_deleted_wait(&ctx.client, ctx.wait, owner, &name).await?;
                    }
                    Ok(())
                })
                .await
            }
        }
    }
}

async fn update_template(
    args: TemplateUpdateArgs,
    owner: fn(i64) -> TemplateOwner,
    ctx: &Context,
) -> Result<()> {
    let owner = owner(args.owner);
    ctx.client
        .rename_template(owner, &args.template, &args.name)
        .await
        .with_context(|| format!("Error updating template [{}]", args.template))?;

    if !args.wait.wait {
        if ctx.output.is_human() {
            println!("Renaming template {} to {}", args.template, args.name);
        }
        return Ok(());
    }

    template_exists_wait(&ctx.client, ctx.wait, owner, &args.name)
        .await
        .with_context(|| format!("Error waiting for template [{}] rename", args.template))?;
    let template = ctx
        .client
        .get_template(owner, &args.name)
        .await
        .with_context(|| format!("Error retrieving updated template [{}]", args.name))?;
    ctx.output.print(&[template], COLUMNS)
}
