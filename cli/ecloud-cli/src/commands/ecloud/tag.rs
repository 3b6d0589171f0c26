// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Tag commands
//!
//! v2 tags are synchronous; mutations take effect before the call returns.

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use ecloud_api::v2::{CreateTagRequest, PatchTagRequest};

use super::Context;
use super::common::{ListArgs, for_each, show_each};

const COLUMNS: &[&str] = &["id", "name", "scope", "created_at"];

#[derive(Subcommand, Clone)]
pub enum TagCommand {
    /// List tags
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show tag(s)
    #[command(alias = "get")]
    Show(TagIdsArgs),
    /// Create a tag
    Create(TagCreateArgs),
    /// Update a tag
    Update(TagUpdateArgs),
    /// Delete tag(s)
    #[command(alias = "rm")]
    Delete(TagIdsArgs),
}

#[derive(Args, Clone)]
pub struct TagIdsArgs {
    /// Tag ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Args, Clone)]
pub struct TagCreateArgs {
    /// Tag name
    #[arg(long)]
    pub name: String,

    /// Tag scope
    #[arg(long)]
    pub scope: Option<String>,
}

#[derive(Args, Clone)]
pub struct TagUpdateArgs {
    /// Tag ID
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New scope
    #[arg(long)]
    pub scope: Option<String>,
}

impl TagCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let client = &ctx.client;
        match self {
            Self::List(args) => {
                let tags = client
                    .list_tags(&args.parameters()?)
                    .await
                    .context("Error retrieving tags")?;
                ctx.output.print(&tags, COLUMNS)
            }
            Self::Show(args) => {
                show_each(&ctx.output, "tag", &args.ids, COLUMNS, |id| async move {
                    client.get_tag(&id).await
                })
                .await
            }
            Self::Create(args) => {
                let req = CreateTagRequest {
                    name: args.name,
                    scope: args.scope,
                };
                let id = client.create_tag(&req).await.context("Error creating tag")?;
                print_tag(ctx, &id).await
            }
            Self::Update(args) => {
                let req = PatchTagRequest {
                    name: args.name,
                    scope: args.scope,
                };
                client
                    .patch_tag(&args.id, &req)
                    .await
                    .with_context(|| format!("Error updating tag [{}]", args.id))?;
                print_tag(ctx, &args.id).await
            }
            Self::Delete(args) => {
                for_each("removing", "tag", &args.ids, |id| async move {
                    client.delete_tag(&id).await?;
                    Ok(())
                })
                .await
            }
        }
    }
}

async fn print_tag(ctx: &Context, id: &str) -> Result<()> {
    let tag = ctx
        .client
        .get_tag(id)
        .await
        .with_context(|| format!("Error retrieving tag [{}]", id))?;
    ctx.output.print(&[tag], COLUMNS)
}
