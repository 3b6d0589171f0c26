// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Image commands

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use ecloud_api::v2::PatchImageRequest;

use super::Context;
use super::common::{ListArgs, WaitFlag, for_each, show_each};
use super::wait::task_or_deleted_wait;

const COLUMNS: &[&str] = &["id", "name", "vcpu_cores", "ram_capacity", "platform", "visibility"];

#[derive(Subcommand, Clone)]
pub enum ImageCommand {
    /// List images
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show image(s)
    #[command(alias = "get")]
    Show(ImageShowArgs),
    /// Update an image
    Update(ImageUpdateArgs),
    /// Delete image(s)
    #[command(alias = "rm")]
    Delete(ImageDeleteArgs),
}

#[derive(Args, Clone)]
pub struct ImageShowArgs {
    /// Image ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Args, Clone)]
pub struct ImageUpdateArgs {
    /// Image ID
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
pub struct ImageDeleteArgs {
    /// Image ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

impl ImageCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let client = &ctx.client;
        match self {
            Self::List(args) => {
                let images = client
                    .list_images(&args.parameters()?)
                    .await
                    .context("Error retrieving images")?;
                ctx.output.print(&images, COLUMNS)
            }
            Self::Show(args) => {
                show_each(&ctx.output, "image", &args.ids, COLUMNS, |id| async move {
                    client.get_image(&id).await
                })
                .await
            }
            Self::Update(args) => {
                let req = PatchImageRequest {
                    name: args.name,
                    description: args.description,
                };
                let task = client
                    .patch_image(&args.id, &req)
                    .await
                    .with_context(|| format!("Error updating image [{}]", args.id))?;
                ctx.finish_task(
                    "image",
                    &args.id,
                    &task.task_id,
                    args.wait.wait,
                    COLUMNS,
                    client.get_image(&args.id),
                )
                .await
            }
            Self::Delete(args) => {
                let wait = args.wait.wait;
                for_each("removing", "image", &args.ids, |id| async move {
                    let task_id = client.delete_image(&id).await?;
                    if wait {
                        task_or_deleted_wait(client, ctx.wait, task_id.as_deref(), || {
                            client.get_image(&id)
                        })
                        .await?;
                    }
                    Ok(())
                })
                .await
            }
        }
    }
}
