// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance commands

use anyhow::{Context as _, Result, bail};
use clap::{Args, Subcommand};
use ecloud_api::v2::{CreateInstanceRequest, Image, PatchInstanceRequest};
use ecloud_client::{Filter, Parameters};

use super::Context;
use super::common::{ListArgs, WaitFlag, for_each, show_each};
use super::vm::parse_key_value;
use super::wait::{task_or_deleted_wait, task_or_sync_wait};
use super::{nic, task, volume};

const COLUMNS: &[&str] = &[
    "id",
    "name",
    "vpc_id",
    "vcpu_cores",
    "ram_capacity",
    "locked",
    "online",
    "sync.status",
];

#[derive(Subcommand, Clone)]
pub enum InstanceCommand {
    /// List instances
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show instance(s)
    #[command(alias = "get")]
    Show(InstanceIdsArgs),
    /// Create an instance
    Create(InstanceCreateArgs),
    /// Update an instance
    Update(InstanceUpdateArgs),
    /// Delete instance(s)
    #[command(alias = "rm")]
    Delete(InstanceWaitArgs),
    /// Power on instance(s)
    Start(InstanceWaitArgs),
    /// Shut down instance(s)
    Stop(InstancePowerArgs),
    /// Restart instance(s)
    Restart(InstancePowerArgs),
    /// Lock instance(s) against changes
    Lock(InstanceIdsArgs),
    /// Unlock instance(s)
    Unlock(InstanceIdsArgs),
    /// Manage instance volumes
    Volume {
        #[command(subcommand)]
        command: InstanceVolumeCommand,
    },
    /// List instance NICs
    Nic {
        #[command(subcommand)]
        command: InstanceChildCommand,
    },
    /// List instance tasks
    Task {
        #[command(subcommand)]
        command: InstanceChildCommand,
    },
}

#[derive(Args, Clone)]
pub struct InstanceIdsArgs {
    /// Instance ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Args, Clone)]
pub struct InstanceWaitArgs {
    /// Instance ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
pub struct InstancePowerArgs {
    /// Instance ID(s)
    #[arg(required = true)]
    pub ids: Vec<String>,

    /// Hard power off or reset instead of a guest shutdown or restart
    #[arg(long)]
    pub force: bool,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
pub struct InstanceCreateArgs {
    /// VPC ID
    #[arg(long)]
    pub vpc: String,

    /// Image ID (img-...) or image name
    #[arg(long)]
    pub image: String,

    /// Network ID
    #[arg(long)]
    pub network: String,

    /// Number of vCPU cores
    #[arg(long)]
    pub vcpu: i64,

    /// RAM in MiB
    #[arg(long)]
    pub ram: i64,

    /// Primary volume size in GiB
    #[arg(long)]
    pub volume: i64,

    /// Primary volume IOPS tier
    #[arg(long)]
    pub volume_iops: Option<i64>,

    /// Image parameter as key=value (repeatable)
    #[arg(long = "image-data", value_parser = parse_key_value)]
    pub image_data: Vec<(String, String)>,

    /// Instance name
    #[arg(long)]
    pub name: Option<String>,

    /// Lock the instance on creation
    #[arg(long)]
    pub locked: Option<bool>,

    /// Enable backups
    #[arg(long)]
    pub backup_enabled: Option<bool>,

    /// Floating IP ID to assign
    #[arg(long, conflicts_with = "requires_floating_ip")]
    pub floating_ip: Option<String>,

    /// Allocate a new floating IP
    #[arg(long)]
    pub requires_floating_ip: Option<bool>,

    /// Script run on first boot
    #[arg(long)]
    pub user_script: Option<String>,

    /// SSH key pair ID (repeatable)
    #[arg(long = "ssh-key-pair")]
    pub ssh_key_pairs: Vec<String>,

    /// Host group ID
    #[arg(long)]
    pub host_group: Option<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
pub struct InstanceUpdateArgs {
    /// Instance ID
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// Number of vCPU cores
    #[arg(long)]
    pub vcpu: Option<i64>,

    /// RAM in MiB
    #[arg(long)]
    pub ram: Option<i64>,

    /// Volume group ID
    #[arg(long)]
    pub volume_group: Option<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Subcommand, Clone)]
pub enum InstanceVolumeCommand {
    /// List volumes attached to an instance
    #[command(alias = "ls")]
    List(InstanceChildListArgs),
    /// Attach a volume to an instance
    Attach(InstanceVolumeArgs),
    /// Detach a volume from an instance
    Detach(InstanceVolumeArgs),
}

#[derive(Subcommand, Clone)]
pub enum InstanceChildCommand {
    /// List items belonging to an instance
    #[command(alias = "ls")]
    List(InstanceChildListArgs),
}

#[derive(Args, Clone)]
pub struct InstanceChildListArgs {
    /// Instance ID
    pub instance: String,

    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Args, Clone)]
pub struct InstanceVolumeArgs {
    /// Instance ID
    pub instance: String,

    /// Volume ID
    #[arg(long)]
    pub volume: String,

    #[command(flatten)]
    pub wait: WaitFlag,
}

/// Pick the single image a name refers to
pub fn pick_image(name: &str, images: &[Image]) -> Result<String> {
    match images {
        [image] => Ok(image.id.clone()),
        [] => bail!("image '{}' not found", name),
        _ => bail!(
            "more than one image named '{}' ({}); use an image ID",
            name,
            images
                .iter()
                .map(|i| i.id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

async fn resolve_image(ctx: &Context, image: &str) -> Result<String> {
    if image.starts_with("img-") {
        return Ok(image.to_string());
    }
    let params = Parameters::new().with_filter(Filter::eq("name", image));
    let images = ctx
        .client
        .list_images(&params)
        .await
        .with_context(|| format!("Error resolving image '{}'", image))?;
    let id = pick_image(image, &images)?;
    tracing::debug!(name = image, id = %id, "resolved image name");
    Ok(id)
}

impl InstanceCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        let client = &ctx.client;
        match self {
            Self::List(args) => {
                let instances = client
                    .list_instances(&args.parameters()?)
                    .await
                    .context("Error retrieving instances")?;
                ctx.output.print(&instances, COLUMNS)
            }
            Self::Show(args) => {
                show_each(&ctx.output, "instance", &args.ids, COLUMNS, |id| async move {
                    client.get_instance(&id).await
                })
                .await
            }
            Self::Create(args) => create_instance(args, ctx).await,
            Self::Update(args) => {
                let req = PatchInstanceRequest {
                    name: args.name,
                    vcpu_cores: args.vcpu,
                    ram_capacity: args.ram,
                    volume_group_id: args.volume_group,
                };
                let task = client
                    .patch_instance(&args.id, &req)
                    .await
                    .with_context(|| format!("Error updating instance [{}]", args.id))?;
                ctx.finish_task(
                    "instance",
                    &args.id,
                    &task.task_id,
                    args.wait.wait,
                    COLUMNS,
                    client.get_instance(&args.id),
                )
                .await
            }
            Self::Delete(args) => {
                let wait = args.wait.wait;
                for_each("removing", "instance", &args.ids, |id| async move {
                    let task_id = client.delete_instance(&id).await?;
                    if wait {
                        task_or_deleted_wait(client, ctx.wait, task_id.as_deref(), || {
                            client.get_instance(&id)
                        })
                        .await?;
                    }
                    Ok(())
                })
                .await
            }
            Self::Start(args) => {
                let wait = args.wait.wait;
                for_each("powering on", "instance", &args.ids, |id| async move {
                    let task_id = client.power_on_instance(&id).await?;
                    wait_for_sync(ctx, &id, task_id.as_deref(), wait).await
                })
                .await
            }
            Self::Stop(args) => {
                let (force, wait) = (args.force, args.wait.wait);
                for_each("powering off", "instance", &args.ids, |id| async move {
                    let task_id = if force {
                        client.power_off_instance(&id).await?
                    } else {
                        client.power_shutdown_instance(&id).await?
                    };
                    wait_for_sync(ctx, &id, task_id.as_deref(), wait).await
                })
                .await
            }
            Self::Restart(args) => {
                let (force, wait) = (args.force, args.wait.wait);
                for_each("restarting", "instance", &args.ids, |id| async move {
                    let task_id = if force {
                        client.power_reset_instance(&id).await?
                    } else {
                        client.power_restart_instance(&id).await?
                    };
                    wait_for_sync(ctx, &id, task_id.as_deref(), wait).await
                })
                .await
            }
            Self::Lock(args) => {
                for_each("locking", "instance", &args.ids, |id| async move {
                    client.lock_instance(&id).await?;
                    Ok(())
                })
                .await
            }
            Self::Unlock(args) => {
                for_each("unlocking", "instance", &args.ids, |id| async move {
                    client.unlock_instance(&id).await?;
                    Ok(())
                })
                .await
            }
            Self::Volume { command } => match command {
                InstanceVolumeCommand::List(args) => {
                    let volumes = client
                        .list_instance_volumes(&args.instance, &args.list.parameters()?)
                        .await
                        .with_context(|| {
                            format!("Error retrieving instance volumes [{}]", args.instance)
                        })?;
                    ctx.output.print(&volumes, volume::COLUMNS)
                }
                InstanceVolumeCommand::Attach(args) => {
                    let task_id = client
                        .attach_volume(&args.volume, &args.instance)
                        .await
                        .with_context(|| {
                            format!(
                                "Error attaching volume [{}] to instance [{}]",
                                args.volume, args.instance
                            )
                        })?;
                    wait_for_sync(ctx, &args.instance, task_id.as_deref(), args.wait.wait).await
                }
                InstanceVolumeCommand::Detach(args) => {
                    let task_id = client
                        .detach_volume(&args.volume, &args.instance)
                        .await
                        .with_context(|| {
                            format!(
                                "Error detaching volume [{}] from instance [{}]",
                                args.volume, args.instance
                            )
                        })?;
                    wait_for_sync(ctx, &args.instance, task_id.as_deref(), args.wait.wait).await
                }
            },
            Self::Nic {
                command: InstanceChildCommand::List(args),
            } => {
                let nics = client
                    .list_instance_nics(&args.instance, &args.list.parameters()?)
                    .await
                    .with_context(|| format!("Error retrieving instance NICs [{}]", args.instance))?;
                ctx.output.print(&nics, nic::COLUMNS)
            }
            Self::Task {
                command: InstanceChildCommand::List(args),
            } => {
                let tasks = client
                    .list_instance_tasks(&args.instance, &args.list.parameters()?)
                    .await
                    .with_context(|| {
                        format!("Error retrieving instance tasks [{}]", args.instance)
                    })?;
                ctx.output.print(&tasks, task::COLUMNS)
            }
        }
    }
}

async fn create_instance(args: InstanceCreateArgs, ctx: &Context) -> Result<()> {
    let image_id = resolve_image(ctx, &args.image).await?;
    let req = CreateInstanceRequest {
        name: args.name,
        vpc_id: args.vpc,
        image_id,
        image_data: args.image_data.into_iter().collect(),
        vcpu_cores: args.vcpu,
        ram_capacity: args.ram,
        locked: args.locked,
        volume_capacity: args.volume,
        volume_iops: args.volume_iops,
        backup_enabled: args.backup_enabled,
        network_id: args.network,
        floating_ip_id: args.floating_ip,
        requires_floating_ip: args.requires_floating_ip,
        user_script: args.user_script,
        ssh_key_pair_ids: args.ssh_key_pairs,
        host_group_id: args.host_group,
    };
    let task = ctx
        .client
        .create_instance(&req)
        .await
        .context("Error creating instance")?;
    ctx.finish_task(
        "instance",
        &task.id,
        &task.task_id,
        args.wait.wait,
        COLUMNS,
        ctx.client.get_instance(&task.id),
    )
    .await
}

async fn wait_for_sync(ctx: &Context, id: &str, task_id: Option<&str>, wait: bool) -> Result<()> {
    if wait {
        task_or_sync_wait(&ctx.client, ctx.wait, task_id, || async {
            ctx.client.get_instance(id).await.map(|i| i.sync.status)
        })
        .await?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn image(id: &str) -> Image {
        serde_json::from_value(json!({"id": id, "name": "Ubuntu 22.04"})).unwrap()
    }

    #[test]
    fn test_pick_image_single_match() {
        assert_eq!(pick_image("Ubuntu 22.04", &[image("img-1")]).unwrap(), "img-1");
    }

    #[test]
    fn test_pick_image_no_match() {
        let err = pick_image("Ubuntu 22.04", &[]).unwrap_err();
        assert_eq!(err.to_string(), "image 'Ubuntu 22.04' not found");
    }

    #[test]
    fn test_pick_image_ambiguous() {
        let err = pick_image("Ubuntu 22.04", &[image("img-1"), image("img-2")]).unwrap_err();
        assert!(err.to_string().contains("img-1, img-2"));
    }
}
