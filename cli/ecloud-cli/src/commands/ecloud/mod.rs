// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! eCloud resource commands

use std::future::Future;

use anyhow::{Context as _, Result};
use clap::Subcommand;
use ecloud_api::v2::TaskStatus;
use ecloud_client::{Client, Error};
use serde::Serialize;

use crate::output::Output;
use crate::wait::WaitConfig;

pub mod common;
pub mod wait;

// v1
pub mod appliance;
pub mod datastore;
pub mod firewall;
pub mod host;
pub mod pod;
pub mod resource_tag;
pub mod site;
pub mod solution;
pub mod template;
pub mod vm;

// v2
pub mod availability_zone;
pub mod firewall_policy;
pub mod firewall_rule;
pub mod floating_ip;
pub mod image;
pub mod instance;
pub mod network;
pub mod nic;
pub mod region;
pub mod router;
pub mod tag;
pub mod task;
pub mod volume;
pub mod vpc;
pub mod vpn_gateway;

/// Everything a resource command needs
pub struct Context {
    pub client: Client,
    pub output: Output,
    pub wait: WaitConfig,
}

impl Context {
    /// Finish a v2 create or update that returned a task
    ///
    /// With `wait`, block until the task completes. Either way, print the
    /// resource as `fetch` returns it afterwards.
    pub async fn finish_task<T, Fut>(
        &self,
        resource: &str,
        id: &str,
        task_id: &str,
        wait: bool,
        columns: &[&str],
        fetch: Fut,
    ) -> Result<()>
    where
        T: Serialize,
        Fut: Future<Output = Result<T, Error>>,
    {
        if wait {
            wait::task_status_wait(&self.client, self.wait, task_id, TaskStatus::Complete)
                .await
                .with_context(|| format!("Error waiting for {} [{}]", resource, id))?;
        }
        let item = fetch
            .await
            .with_context(|| format!("Error retrieving {} [{}]", resource, id))?;
        self.output.print(&[item], columns)
    }
}

#[derive(Subcommand, Clone)]
pub enum EcloudCommand {
    /// Manage virtual machines
    Vm {
        #[command(subcommand)]
        command: vm::VmCommand,
    },
    /// Manage solutions
    Solution {
        #[command(subcommand)]
        command: solution::SolutionCommand,
    },
    /// Manage pods
    Pod {
        #[command(subcommand)]
        command: pod::PodCommand,
    },
    /// Manage hosts
    Host {
        #[command(subcommand)]
        command: host::HostCommand,
    },
    /// Manage datastores
    Datastore {
        #[command(subcommand)]
        command: datastore::DatastoreCommand,
    },
    /// Manage sites
    Site {
        #[command(subcommand)]
        command: site::SiteCommand,
    },
    /// Manage dedicated firewalls
    Firewall {
        #[command(subcommand)]
        command: firewall::FirewallCommand,
    },
    /// Manage appliances
    Appliance {
        #[command(subcommand)]
        command: appliance::ApplianceCommand,
    },
    /// Manage VPCs
    Vpc {
        #[command(subcommand)]
        command: vpc::VpcCommand,
    },
    /// Manage regions
    Region {
        #[command(subcommand)]
        command: region::RegionCommand,
    },
    /// Manage availability zones
    #[command(name = "az", alias = "availabilityzone")]
    AvailabilityZone {
        #[command(subcommand)]
        command: availability_zone::AvailabilityZoneCommand,
    },
    /// Manage networks
    Network {
        #[command(subcommand)]
        command: network::NetworkCommand,
    },
    /// Manage routers
    Router {
        #[command(subcommand)]
        command: router::RouterCommand,
    },
    /// Manage instances
    Instance {
        #[command(subcommand)]
        command: instance::InstanceCommand,
    },
    /// Manage volumes
    Volume {
        #[command(subcommand)]
        command: volume::VolumeCommand,
    },
    /// Manage firewall policies
    #[command(name = "firewallpolicy")]
    FirewallPolicy {
        #[command(subcommand)]
        command: firewall_policy::FirewallPolicyCommand,
    },
    /// Manage firewall rules
    #[command(name = "firewallrule")]
    FirewallRule {
        #[command(subcommand)]
        command: firewall_rule::FirewallRuleCommand,
    },
    /// Manage VPN gateways
    #[command(name = "vpngateway")]
    VpnGateway {
        #[command(subcommand)]
        command: vpn_gateway::VpnGatewayCommand,
    },
    /// Manage floating IPs
    #[command(name = "floatingip", alias = "fip")]
    FloatingIp {
        #[command(subcommand)]
        command: floating_ip::FloatingIpCommand,
    },
    /// Manage NICs
    Nic {
        #[command(subcommand)]
        command: nic::NicCommand,
    },
    /// Manage images
    Image {
        #[command(subcommand)]
        command: image::ImageCommand,
    },
    /// Manage tasks
    Task {
        #[command(subcommand)]
        command: task::TaskCommand,
    },
    /// Manage tags
    Tag {
        #[command(subcommand)]
        command: tag::TagCommand,
    },
}

impl EcloudCommand {
    pub async fn run(self, ctx: &Context) -> Result<()> {
        match self {
            Self::Vm { command } => command.run(ctx).await,
            Self::Solution { command } => command.run(ctx).await,
            Self::Pod { command } => command.run(ctx).await,
            Self::Host { command } => command.run(ctx).await,
            Self::Datastore { command } => command.run(ctx).await,
            Self::Site { command } => command.run(ctx).await,
            Self::Firewall { command } => command.run(ctx).await,
            Self::Appliance { command } => command.run(ctx).await,
            Self::Vpc { command } => command.run(ctx).await,
            Self::Region { command } => command.run(ctx).await,
            Self::AvailabilityZone { command } => command.run(ctx).await,
            Self::Network { command } => command.run(ctx).await,
            Self::Router { command } => command.run(ctx).await,
            Self::Instance { command } => command.run(ctx).await,
            Self::Volume { command } => command.run(ctx).await,
            Self::FirewallPolicy { command } => command.run(ctx).await,
            Self::FirewallRule { command } => command.run(ctx).await,
            Self::VpnGateway { command } => command.run(ctx).await,
            Self::FloatingIp { command } => command.run(ctx).await,
            Self::Nic { command } => command.run(ctx).await,
            Self::Image { command } => command.run(ctx).await,
            Self::Task { command } => command.run(ctx).await,
            Self::Tag { command } => command.run(ctx).await,
        }
    }
}
