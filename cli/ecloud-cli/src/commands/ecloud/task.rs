// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Task commands

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use ecloud_api::v2::TaskStatus;

use super::Context;
use super::common::{ListArgs, for_each, show_each};
use super::wait::task_status_wait;

pub(super) const COLUMNS: &[&str] = &["id", "resource_id", "name", "status", "created_at"];

#[derive(Subcommand, Clone)]
pub enum TaskCommand {
    /// List tasks
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show task(s)
    #[command(alias = "get")]
    Show(TaskIdsArgs),
    /// Wait for task(s) to complete
    Wait(TaskIdsArgs),
}

#[derive(Args, Clone)]
pub struct TaskIdsArgs {
    /// Task ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,
}

impl TaskCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let client = &ctx.client;
        match self {
            Self::List(args) => {
                let tasks = client
                    .list_tasks(&args.parameters()?)
                    .await
                    .context("Error retrieving tasks")?;
                ctx.output.print(&tasks, COLUMNS)
            }
            Self::Show(args) => {
                show_each(&ctx.output, "task", &args.ids, COLUMNS, |id| async move {
                    client.get_task(&id).await
                })
                .await
            }
            Self::Wait(args) => {
                for_each("waiting for", "task", &args.ids, |id| async move {
                    task_status_wait(client, ctx.wait, &id, TaskStatus::Complete).await?;
                    Ok(())
                })
                .await
            }
        }
    }
}
