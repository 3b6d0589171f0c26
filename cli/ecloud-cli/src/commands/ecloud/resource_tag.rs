// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Key/value tag commands for v1 VMs and solutions

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use ecloud_api::v1::{CreateTagRequest, PatchTagRequest};
use ecloud_client::TagOwner;

use super::Context;
use super::common::{ListArgs, for_each, show_each};

const COLUMNS: &[&str] = &["key", "value", "created_at"];

#[derive(Subcommand, Clone)]
pub enum ResourceTagCommand {
    /// List tags
    #[command(alias = "ls")]
    List(TagListArgs),
    /// Show tag(s)
    #[command(alias = "get")]
    Show(TagKeysArgs),
    /// Create a tag
    Create(TagCreateArgs),
    /// Update a tag
    Update(TagUpdateArgs),
    /// Delete tag(s)
    #[command(alias = "rm")]
    Delete(TagKeysArgs),
}

#[derive(Args, Clone)]
pub struct TagListArgs {
    /// Owner ID
    #[arg(value_name = "PARENT_ID")]
    pub owner: i64,

    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Args, Clone)]
pub struct TagKeysArgs {
    /// Owner ID
    #[arg(value_name = "PARENT_ID")]
    pub owner: i64,

    /// Tag key(s)
    #[arg(required = true)]
    pub keys: Vec<String>,
}

#[derive(Args, Clone)]
pub struct TagCreateArgs {
    /// Owner ID
    #[arg(value_name = "PARENT_ID")]
    pub owner: i64,

    /// Tag key
    #[arg(long)]
    pub key: String,

    /// Tag value
    #[arg(long)]
    pub value: String,
}

#[derive(Args, Clone)]
pub struct TagUpdateArgs {
    /// Owner ID
    #[arg(value_name = "PARENT_ID")]
    pub owner: i64,

    /// Tag key
    pub key: String,

    /// New tag value
    #[arg(long)]
    pub value: String,
}

impl ResourceTagCommand {
    pub async fn run(self, ctx: &Context, owner: fn(i64) -> TagOwner) -> Result<()> {
        match self {
            Self::List(args) => {
                let tags = ctx
                    .client
                    .list_resource_tags(owner(args.owner), &args.list.parameters()?)
                    .await
                    .context("Error retrieving tags")?;
                ctx.output.print(&tags, COLUMNS)
            }
            Self::Show(args) => {
                let client = &ctx.client;
                let owner = owner(args.owner);
                show_each(&ctx.output, "tag", &args.keys, COLUMNS, |key| async move {
                    client.get_resource_tag(owner, &key).await
                })
                .await
            }
            Self::Create(args) => {
                let owner = owner(args.owner);
                let req = CreateTagRequest {
                    key: args.key.clone(),
                    value: args.value,
                };
                ctx.client
                    .create_resource_tag(owner, &req)
                    .await
                    .context("Error creating tag")?;
                let tag = ctx
                    .client
                    .get_resource_tag(owner, &args.key)
                    .await
                    .with_context(|| format!("Error retrieving new tag [{}]", args.key))?;
                ctx.output.print(&[tag], COLUMNS)
            }
            Self::Update(args) => {
                let owner = owner(args.owner);
                let req = PatchTagRequest {
                    value: Some(args.value),
                };
                ctx.client
                    .patch_resource_tag(owner, &args.key, &req)
                    .await
                    .with_context(|| format!("Error updating tag [{}]", args.key))?;
                let tag = ctx
                    .client
                    .get_resource_tag(owner, &args.key)
                    .await
                    .with_context(|| format!("Error retrieving updated tag [{}]", args.key))?;
                ctx.output.print(&[tag], COLUMNS)
            }
            Self::Delete(args) => {
                let owner = owner(args.owner);
                for_each("removing", "tag", &args.keys, |key| async move {
                    ctx.client.delete_resource_tag(owner, &key).await?;
                    Ok(())
                })
                .await
            }
        }
    }
}
