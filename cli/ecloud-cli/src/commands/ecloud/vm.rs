// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Virtual machine (v1) commands

use anyhow::{Context as _, Result, bail};
use clap::{ArgGroup, Args, Subcommand};
use ecloud_api::v1::{
    CloneVirtualMachineRequest, CreateTagRequest, CreateVirtualMachineRequest,
    CreateVirtualMachineTemplateRequest, PatchVirtualMachineRequest, TemplateType,
    VirtualMachineStatus,
};
use ecloud_client::TagOwner;

use super::Context;
use super::common::{ListArgs, WaitFlag, for_each, show_each};
use super::resource_tag::ResourceTagCommand;
use super::wait::{deleted_wait, vm_status_wait};

pub(super) const COLUMNS: &[&str] = &[
    "id",
    "name",
    "cpu",
    "ram",
    "hdd",
    "ip_internal",
    "ip_external",
    "status",
    "power_status",
];

const DISK_COLUMNS: &[&str] = &["uuid", "name", "type", "capacity"];

#[derive(Subcommand, Clone)]
pub enum VmCommand {
    /// List virtual machines
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show virtual machine(s)
    #[command(alias = "get")]
    Show(VmIdsArgs),
    /// Create a virtual machine
    Create(VmCreateArgs),
    /// Update a virtual machine
    Update(VmUpdateArgs),
    /// Delete virtual machine(s)
    #[command(alias = "rm")]
    Delete(VmWaitIdsArgs),
    /// Power on virtual machine(s)
    Start(VmWaitIdsArgs),
    /// Shut down virtual machine(s)
    Stop(VmPowerArgs),
    /// Restart virtual machine(s)
    Restart(VmPowerArgs),
    /// Manage virtual machine tags
    Tag {
        #[command(subcommand)]
        command: ResourceTagCommand,
    },
    /// Inspect virtual machine disks
    Disk {
        #[command(subcommand)]
        command: VmDiskCommand,
    },
    /// Create templates from virtual machines
    Template {
        #[command(subcommand)]
        command: VmTemplateCommand,
    },
    /// Clone a virtual machine
    Clone(VmCloneArgs),
}

#[derive(Args, Clone)]
pub struct VmIdsArgs {
    /// Virtual machine ID(s)
    #[arg(required = true)]
    pub ids: Vec<i64>,
}

#[derive(Args, Clone)]
pub struct VmWaitIdsArgs {
    /// Virtual machine ID(s)
    #[arg(required = true)]
    pub ids: Vec<i64>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
pub struct VmPowerArgs {
    /// Virtual machine ID(s)
    #[arg(required = true)]
    pub ids: Vec<i64>,

    /// Hard power off or reset instead of a guest shutdown or restart
    #[arg(long)]
    pub force: bool,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
#[command(group(ArgGroup::new("source").required(true).args(["template", "appliance"])))]
pub struct VmCreateArgs {
    /// Environment: Public, Hybrid, Private or Burst
    #[arg(long)]
    pub environment: String,

    /// Template to build from
    #[arg(long)]
    pub template: Option<String>,

    /// Appliance ID to deploy
    #[arg(long)]
    pub appliance: Option<String>,

    /// Password for the template's default user
    #[arg(long)]
    pub template_password: Option<String>,

    /// Pod ID (Public and Burst environments)
    #[arg(long)]
    pub pod: Option<i64>,

    /// Solution ID (Hybrid and Private environments)
    #[arg(long)]
    pub solution: Option<i64>,

    /// Datastore ID
    #[arg(long)]
    pub datastore: Option<i64>,

    /// Site ID
    #[arg(long)]
    pub site: Option<i64>,

    /// Network ID
    #[arg(long)]
    pub network: Option<i64>,

    /// Number of CPUs
    #[arg(long)]
    pub cpu: i64,

    /// RAM in GB
    #[arg(long)]
    pub ram: i64,

    /// Primary disk size in GB
    #[arg(long)]
    pub hdd: Option<i64>,

    /// Virtual machine name
    #[arg(long)]
    pub name: Option<String>,

    /// Guest computer name
    #[arg(long)]
    pub computer_name: Option<String>,

    /// Tag as key=value (repeatable)
    #[arg(long = "tag", value_parser = parse_key_value)]
    pub tags: Vec<(String, String)>,

    /// SSH public key (repeatable)
    #[arg(long = "ssh-key")]
    pub ssh_keys: Vec<String>,

    /// Role
    #[arg(long)]
    pub role: Option<String>,

    /// Script run on first boot
    #[arg(long)]
    pub bootstrap_script: Option<String>,

    /// Enable backups
    #[arg(long)]
    pub backup: bool,

    /// Enable enhanced support
    #[arg(long)]
    pub support: bool,

    /// Enable monitoring
    #[arg(long)]
    pub monitoring: bool,

    /// Encrypt the virtual machine
    #[arg(long)]
    pub encrypt: bool,

    /// Assign an external IP
    #[arg(long)]
    pub external_ip: bool,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Args, Clone)]
pub struct VmUpdateArgs {
    /// Virtual machine ID
    pub id: i64,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// Number of CPUs
    #[arg(long)]
    pub cpu: Option<i64>,

    /// RAM in GB
    #[arg(long)]
    pub ram: Option<i64>,

    /// Role
    #[arg(long)]
    pub role: Option<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

#[derive(Subcommand, Clone)]
pub enum VmDiskCommand {
    /// List disks attached to a virtual machine
    #[command(alias = "ls")]
    List {
        /// Virtual machine ID
        id: i64,
    },
}

#[derive(Subcommand, Clone)]
pub enum VmTemplateCommand {
    /// Create a template from a virtual machine
    Create(VmTemplateCreateArgs),
}

#[derive(Args, Clone)]
pub struct VmTemplateCreateArgs {
    /// Virtual machine ID
    pub id: i64,

    /// Template name
    #[arg(long)]
    pub name: String,

    /// Template type: solution or pod
    #[arg(long = "type", default_value = "solution")]
    pub template_type: TemplateType,
}

#[derive(Args, Clone)]
pub struct VmCloneArgs {
    /// Virtual machine ID
    pub id: i64,

    /// Name of the clone
    #[arg(long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub wait: WaitFlag,
}

/// Parse `key=value`
pub fn parse_key_value(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => bail!("expected key=value, got '{}'", raw),
    }
}

impl VmCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::List(args) => {
                let vms = ctx
                    .client
                    .list_vms(&args.parameters()?)
                    .await
                    .context("Error retrieving virtual machines")?;
                ctx.output.print(&vms, COLUMNS)
            }
            Self::Show(args) => {
                let client = &ctx.client;
                show_each(&ctx.output, "virtual machine", &args.ids, COLUMNS, |id| async move {
                    client.get_vm(id).await
                })
                .await
            }
            Self::Create(args) => create_vm(args, ctx).await,
            Self::Update(args) => update_vm(args, ctx).await,
            Self::Delete(args) => delete_vms(args, ctx).await,
            Self::Start(args) => {
                let wait = args.wait.wait;
                for_each("powering on", "virtual machine", &args.ids, |id| async move {
                    ctx.client.power_on_vm(id).await?;
                    wait_for_vm(ctx, id, wait).await
                })
                .await
            }
            Self::Stop(args) => {
                let (force, wait) = (args.force, args.wait.wait);
                for_each("powering off", "virtual machine", &args.ids, |id| async move {
                    if force {
                        ctx.client.power_off_vm(id).await?;
                    } else {
                        ctx.client.power_shutdown_vm(id).await?;
                    }
                    wait_for_vm(ctx, id, wait).await
                })
                .await
            }
            Self::Restart(args) => {
                let (force, wait) = (args.force, args.wait.wait);
                for_each("restarting", "virtual machine", &args.ids, |id| async move {
                    if force {
                        ctx.client.power_reset_vm(id).await?;
                    } else {
                        ctx.client.power_restart_vm(id).await?;
                    }
                    wait_for_vm(ctx, id, wait).await
                })
                .await
            }
            Self::Tag { command } => command.run(ctx, TagOwner::Vm).await,
            Self::Disk {
                command: VmDiskCommand::List { id },
            } => {
                let disks = ctx
                    .client
                    .list_vm_disks(id)
                    .await
                    .with_context(|| format!("Error retrieving virtual machine disks [{}]", id))?;
                ctx.output.print(&disks, DISK_COLUMNS)
            }
            Self::Template {
                command: VmTemplateCommand::Create(args),
            } => {
                let req = CreateVirtualMachineTemplateRequest {
                    template_name: args.name.clone(),
                    template_type: args.template_type,
                };
                ctx.client
                    .create_vm_template(args.id, &req)
                    .await
                    .with_context(|| {
                        format!("Error creating template from virtual machine [{}]", args.id)
                    })?;
                if ctx.output.is_human() {
                    println!(
                        "Creating {} template {} from virtual machine {}",
                        args.template_type, args.name, args.id
                    );
                }
                Ok(())
            }
            Self::Clone(args) => clone_vm(args, ctx).await,
        }
    }
}

async fn wait_for_vm(ctx: &Context, id: i64, wait: bool) -> Result<()> {
    if wait {
        vm_status_wait(&ctx.client, ctx.wait, id, VirtualMachineStatus::Complete).await?;
    }
    Ok(())
}

async fn print_vm(ctx: &Context, id: i64) -> Result<()> {
    let vm = ctx
        .client
        .get_vm(id)
        .await
        .with_context(|| format!("Error retrieving virtual machine [{}]", id))?;
    ctx.output.print(&[vm], COLUMNS)
}

async fn create_vm(args: VmCreateArgs, ctx: &Context) -> Result<()> {
    let req = CreateVirtualMachineRequest {
        environment: args.environment,
        template: args.template,
        appliance_id: args.appliance,
        template_password: args.template_password,
        pod_id: args.pod,
        solution_id: args.solution,
        datastore_id: args.datastore,
        site_id: args.site,
        network_id: args.network,
        cpu: args.cpu,
        ram: args.ram,
        hdd: args.hdd,
        name: args.name,
        computername: args.computer_name,
        tags: args
            .tags
            .into_iter()
            .map(|(key, value)| CreateTagRequest { key, value })
            .collect(),
        backup: args.backup,
        support: args.support,
        monitoring: args.monitoring,
        ssh_keys: args.ssh_keys,
        encrypt: args.encrypt,
        role: args.role,
        bootstrap_script: args.bootstrap_script,
        external_ip_required: args.external_ip,
        ..Default::default()
    };

    let id = ctx
        .client
        .create_vm(&req)
        .await
        .context("Error creating virtual machine")?;
    tracing::debug!(id, "virtual machine created");

    if args.wait.wait {
        vm_status_wait(&ctx.client, ctx.wait, id, VirtualMachineStatus::Complete)
            .await
            .with_context(|| format!("Error waiting for virtual machine [{}]", id))?;
    }
    print_vm(ctx, id).await
}

async fn update_vm(args: VmUpdateArgs, ctx: &Context) -> Result<()> {
    let req = PatchVirtualMachineRequest {
        name: args.name,
        cpu: args.cpu,
        ram: args.ram,
        role: args.role,
        ..Default::default()
    };

    ctx.client
        .patch_vm(args.id, &req)
        .await
        .with_context(|| format!("Error updating virtual machine [{}]", args.id))?;

    if args.wait.wait {
        vm_status_wait(&ctx.client, ctx.wait, args.id, VirtualMachineStatus::Complete)
            .await
            .with_context(|| format!("Error waiting for virtual machine [{}]", args.id))?;
    }
    print_vm(ctx, args.id).await
}

async fn delete_vms(args: VmWaitIdsArgs, ctx: &Context) -> Result<()> {
    let wait = args.wait.wait;
    for_each("removing", "virtual machine", &args.ids, |id| async move {
        ctx.client.delete_vm(id).await?;
        if wait {
            deleted_wait(ctx.wait, || ctx.client.get_vm(id)).await?;
        }
        Ok(())
    })
    .await
}

async fn clone_vm(args: VmCloneArgs, ctx: &Context) -> Result<()> {
    let req = CloneVirtualMachineRequest { name: args.name };
    let id = ctx
        .client
        .clone_vm(args.id, &req)
        .await
        .with_context(|| format!("Error cloning virtual machine [{}]", args.id))?;

    if args.wait.wait {
        vm_status_wait(&ctx.client, ctx.wait, id, VirtualMachineStatus::Complete)
            .await
            .with_context(|| format!("Error waiting for virtual machine [{}]", id))?;
    }
    print_vm(ctx, id).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("env=prod").unwrap(),
            ("env".to_string(), "prod".to_string())
        );
        assert_eq!(
            parse_key_value("note=a=b").unwrap(),
            ("note".to_string(), "a=b".to_string())
        );
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=x").is_err());
    }
}
