// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! eCloud v2 endpoints
//!
//! Most v2 mutations are applied asynchronously. Creates and updates answer
//! with a [`TaskReference`]; deletes and actions answer with a task ID when
//! the server schedules work, or nothing when it completed inline.

use reqwest::Method;
use url::Url;

use ecloud_api::v2::{
    AssignFloatingIpRequest, AvailabilityZone, CreateFirewallPolicyRequest,
    CreateFirewallRuleRequest, CreateFloatingIpRequest, CreateInstanceRequest,
    CreateNetworkRequest, CreateRouterRequest, CreateTagRequest, CreateVolumeRequest,
    CreateVpcRequest, CreateVpnGatewayRequest, FirewallPolicy, FirewallRule, FloatingIp, Image,
    Instance, Network, Nic, PatchFirewallPolicyRequest, PatchFirewallRuleRequest,
    PatchFloatingIpRequest, PatchImageRequest, PatchInstanceRequest, PatchNetworkRequest,
    PatchRouterRequest, PatchTagRequest, PatchVolumeRequest, PatchVpcRequest,
    PatchVpnGatewayRequest, Region, Router, Tag, Task, Volume, VolumeAttachmentRequest, Vpc,
    VpnGateway,
};
use ecloud_api::{IdResponse, TaskReference};

use crate::{Client, Error, NO_BODY, Parameters};

impl Client {
    fn v2(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut all = vec!["ecloud", "v2"];
        all.extend_from_slice(segments);
        self.endpoint(&all)
    }

    async fn v2_list<T: serde::de::DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &Parameters,
    ) -> Result<Vec<T>, Error> {
        self.get_all(self.v2(segments)?, params).await
    }

    async fn v2_get<T: serde::de::DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<T, Error> {
        self.get_data(self.v2(&[collection, id])?).await
    }

    async fn v2_create<B: serde::Serialize>(
        &self,
        collection: &str,
        req: &B,
    ) -> Result<TaskReference, Error> {
        self.call(Method::POST, self.v2(&[collection])?, Some(req))
            .await
    }

    async fn v2_patch<B: serde::Serialize>(
        &self,
        collection: &str,
        id: &str,
        req: &B,
    ) -> Result<TaskReference, Error> {
        self.call(Method::PATCH, self.v2(&[collection, id])?, Some(req))
            .await
    }

    async fn v2_delete(&self, collection: &str, id: &str) -> Result<Option<String>, Error> {
        self.call_task(Method::DELETE, self.v2(&[collection, id])?, NO_BODY)
            .await
    }

    // ========================================================================
    // VPCs
    // ========================================================================

    pub async fn list_vpcs(&self, params: &Parameters) -> Result<Vec<Vpc>, Error> {
        self.v2_list(&["vpcs"], params).await
    }

    pub async fn get_vpc(&self, id: &str) -> Result<Vpc, Error> {
        self.v2_get("vpcs", id).await
    }

    /// Create a VPC, returning its ID
    ///
    /// VPC changes are not tracked by a task; poll the VPC's sync status.
    pub async fn create_vpc(&self, req: &CreateVpcRequest) -> Result<String, Error> {
        let resp: IdResponse = self.call(Method::POST, self.v2(&["vpcs"])?, Some(req)).await?;
        Ok(resp.id)
    }

    pub async fn patch_vpc(&self, id: &str, req: &PatchVpcRequest) -> Result<(), Error> {
        self.call_empty(Method::PATCH, self.v2(&["vpcs", id])?, Some(req))
            .await
    }

    pub async fn delete_vpc(&self, id: &str) -> Result<(), Error> {
        self.call_empty(Method::DELETE, self.v2(&["vpcs", id])?, NO_BODY)
            .await
    }

    pub async fn list_vpc_tasks(&self, id: &str, params: &Parameters) -> Result<Vec<Task>, Error> {
        self.v2_list(&["vpcs", id, "tasks"], params).await
    }

    // ========================================================================
    // Regions and availability zones
    // ========================================================================

    pub async fn list_regions(&self, params: &Parameters) -> Result<Vec<Region>, Error> {
        self.v2_list(&["regions"], params).await
    }

    pub async fn get_region(&self, id: &str) -> Result<Region, Error> {
        self.v2_get("regions", id).await
    }

    pub async fn list_availability_zones(
        &self,
        params: &Parameters,
    ) -> Result<Vec<AvailabilityZone>, Error> {
        self.v2_list(&["availability-zones"], params).await
    }

    pub async fn get_availability_zone(&self, id: &str) -> Result<AvailabilityZone, Error> {
        self.v2_get("availability-zones", id).await
    }

    // ========================================================================
    // Networks
    // ========================================================================

    pub async fn list_networks(&self, params: &Parameters) -> Result<Vec<Network>, Error> {
        self.v2_list(&["networks"], params).await
    }

    pub async fn get_network(&self, id: &str) -> Result<Network, Error> {
        self.v2_get("networks", id).await
    }

    pub async fn create_network(&self, req: &CreateNetworkRequest) -> Result<TaskReference, Error> {
        self.v2_create("networks", req).await
    }

    pub async fn patch_network(
        &self,
        id: &str,
        req: &PatchNetworkRequest,
    ) -> Result<TaskReference, Error> {
        self.v2_patch("networks", id, req).await
    }

    pub async fn delete_network(&self, id: &str) -> Result<Option<String>, Error> {
        self.v2_delete("networks", id).await
    }

    // ========================================================================
    // Routers
    // ========================================================================

    pub async fn list_routers(&self, params: &Parameters) -> Result<Vec<Router>, Error> {
        self.v2_list(&["routers"], params).await
    }

    pub async fn get_router(&self, id: &str) -> Result<Router, Error> {
        self.v2_get("routers", id).await
    }

    pub async fn create_router(&self, req: &CreateRouterRequest) -> Result<TaskReference, Error> {
        self.v2_create("routers", req).await
    }

    pub async fn patch_router(
        &self,
        id: &str,
        req: &PatchRouterRequest,
    ) -> Result<TaskReference, Error> {
        self.v2_patch("routers", id, req).await
    }

    pub async fn delete_router(&self, id: &str) -> Result<Option<String>, Error> {
        self.v2_delete("routers", id).await
    }

    pub async fn list_router_networks(
        &self,
        id: &str,
        params: &Parameters,
    ) -> Result<Vec<Network>, Error> {
        self.v2_list(&["routers", id, "networks"], params).await
    }

    pub async fn list_router_firewall_policies(
        &self,
        id: &str,
        params: &Parameters,
    ) -> Result<Vec<FirewallPolicy>, Error> {
        self.v2_list(&["routers", id, "firewall-policies"], params)
            .await
    }

    // ========================================================================
    // Instances
    // ========================================================================

    pub async fn list_instances(&self, params: &Parameters) -> Result<Vec<Instance>, Error> {
        self.v2_list(&["instances"], params).await
    }

    pub async fn get_instance(&self, id: &str) -> Result<Instance, Error> {
        self.v2_get("instances", id).await
    }

    pub async fn create_instance(
        &self,
        req: &CreateInstanceRequest,
    ) -> Result<TaskReference, Error> {
        self.v2_create("instances", req).await
    }

    pub async fn patch_instance(
        &self,
        id: &str,
        req: &PatchInstanceRequest,
    ) -> Result<TaskReference, Error> {
        self.v2_patch("instances", id, req).await
    }

    pub async fn delete_instance(&self, id: &str) -> Result<Option<String>, Error> {
        self.v2_delete("instances", id).await
    }

    async fn instance_action(&self, id: &str, action: &str) -> Result<Option<String>, Error> {
        self.call_task(Method::PUT, self.v2(&["instances", id, action])?, NO_BODY)
            .await
    }

    pub async fn power_on_instance(&self, id: &str) -> Result<Option<String>, Error> {
        self.instance_action(id, "power-on").await
    }

    /// Hard power off
    pub async fn power_off_instance(&self, id: &str) -> Result<Option<String>, Error> {
        self.instance_action(id, "power-off").await
    }

    /// Graceful guest shutdown
    pub async fn power_shutdown_instance(&self, id: &str) -> Result<Option<String>, Error> {
        self.instance_action(id, "power-shutdown").await
    }

    /// Graceful guest restart
    pub async fn power_restart_instance(&self, id: &str) -> Result<Option<String>, Error> {
        self.instance_action(id, "power-restart").await
    }

    /// Hard reset
    pub async fn power_reset_instance(&self, id: &str) -> Result<Option<String>, Error> {
        self.instance_action(id, "power-reset").await
    }

    pub async fn lock_instance(&self, id: &str) -> Result<(), Error> {
        self.call_empty(Method::PUT, self.v2(&["instances", id, "lock"])?, NO_BODY)
            .await
    }

    pub async fn unlock_instance(&self, id: &str) -> Result<(), Error> {
        self.call_empty(Method::PUT, self.v2(&["instances", id, "unlock"])?, NO_BODY)
            .await
    }

    pub async fn list_instance_volumes(
        &self,
        id: &str,
        params: &Parameters,
    ) -> Result<Vec<Volume>, Error> {
        self.v2_list(&["instances", id, "volumes"], params).await
    }

    pub async fn list_instance_nics(
        &self,
        id: &str,
        params: &Parameters,
    ) -> Result<Vec<Nic>, Error> {
        self.v2_list(&["instances", id, "nics"], params).await
    }

    pub async fn list_instance_tasks(
        &self,
        id: &str,
        params: &Parameters,
    ) -> Result<Vec<Task>, Error> {
        self.v2_list(&["instances", id, "tasks"], params).await
    }

    // ========================================================================
    // Volumes
    // ========================================================================

    pub async fn list_volumes(&self, params: &Parameters) -> Result<Vec<Volume>, Error> {
        self.v2_list(&["volumes"], params).await
    }

    pub async fn get_volume(&self, id: &str) -> Result<Volume, Error> {
        self.v2_get("volumes", id).await
    }

    pub async fn create_volume(&self, req: &CreateVolumeRequest) -> Result<TaskReference, Error> {
        self.v2_create("volumes", req).await
    }

    pub async fn patch_volume(
        &self,
        id: &str,
        req: &PatchVolumeRequest,
    ) -> Result<TaskReference, Error> {
        self.v2_patch("volumes", id, req).await
    }

    pub async fn delete_volume(&self, id: &str) -> Result<Option<String>, Error> {
        self.v2_delete("volumes", id).await
    }

    pub async fn attach_volume(
        &self,
        volume_id: &str,
        instance_id: &str,
    ) -> Result<Option<String>, Error> {
        let req = VolumeAttachmentRequest {
            instance_id: instance_id.to_string(),
        };
        self.call_task(Method::POST, self.v2(&["volumes", volume_id, "attach"])?, Some(&req))
            .await
    }

    pub async fn detach_volume(
        &self,
        volume_id: &str,
        instance_id: &str,
    ) -> Result<Option<String>, Error> {
        let req = VolumeAttachmentRequest {
            instance_id: instance_id.to_string(),
        };
        self.call_task(Method::POST, self.v2(&["volumes", volume_id, "detach"])?, Some(&req))
            .await
    }

    // ========================================================================
    // Firewall policies and rules
    // ========================================================================

    pub async fn list_firewall_policies(
        &self,
        params: &Parameters,
    ) -> Result<Vec<FirewallPolicy>, Error> {
        self.v2_list(&["firewall-policies"], params).await
    }

    pub async fn get_firewall_policy(&self, id: &str) -> Result<FirewallPolicy, Error> {
        self.v2_get("firewall-policies", id).await
    }

    pub async fn create_firewall_policy(
        &self,
        req: &CreateFirewallPolicyRequest,
    ) -> Result<TaskReference, Error> {
        self.v2_create("firewall-policies", req).await
    }

    pub async fn patch_firewall_policy(
        &self,
        id: &str,
        req: &PatchFirewallPolicyRequest,
    ) -> Result<TaskReference, Error> {
        self.v2_patch("firewall-policies", id, req).await
    }

    pub async fn delete_firewall_policy(&self, id: &str) -> Result<Option<String>, Error> {
        self.v2_delete("firewall-policies", id).await
    }

    pub async fn list_firewall_policy_rules(
        &self,
        id: &str,
        params: &Parameters,
    ) -> Result<Vec<FirewallRule>, Error> {
        self.v2_list(&["firewall-policies", id, "firewall-rules"], params)
            .await
    }

    pub async fn list_firewall_rules(
        &self,
        params: &Parameters,
    ) -> Result<Vec<FirewallRule>, Error> {
        self.v2_list(&["firewall-rules"], params).await
    }

    pub async fn get_firewall_rule(&self, id: &str) -> Result<FirewallRule, Error> {
        self.v2_get("firewall-rules", id).await
    }

    pub async fn create_firewall_rule(
        &self,
        req: &CreateFirewallRuleRequest,
    ) -> Result<TaskReference, Error> {
        self.v2_create("firewall-rules", req).await
    }

    pub async fn patch_firewall_rule(
        &self,
        id: &str,
        req: &PatchFirewallRuleRequest,
    ) -> Result<TaskReference, Error> {
        self.v2_patch("firewall-rules", id, req).await
    }

    pub async fn delete_firewall_rule(&self, id: &str) -> Result<Option<String>, Error> {
        self.v2_delete("firewall-rules", id).await
    }

    // ========================================================================
    // VPN gateways
    // ========================================================================

    pub async fn list_vpn_gateways(&self, params: &Parameters) -> Result<Vec<VpnGateway>, Error> {
        self.v2_list(&["vpn-gateways"], params).await
    }

    pub async fn get_vpn_gateway(&self, id: &str) -> Result<VpnGateway, Error> {
        self.v2_get("vpn-gateways", id).await
    }

    pub async fn create_vpn_gateway(
        &self,
        req: &CreateVpnGatewayRequest,
    ) -> Result<TaskReference, Error> {
        self.v2_create("vpn-gateways", req).await
    }

    pub async fn patch_vpn_gateway(
        &self,
        id: &str,
        req: &PatchVpnGatewayRequest,
    ) -> Result<TaskReference, Error> {
        self.v2_patch("vpn-gateways", id, req).await
    }

    pub async fn delete_vpn_gateway(&self, id: &str) -> Result<Option<String>, Error> {
        self.v2_delete("vpn-gateways", id).await
    }

    // ========================================================================
    // Floating IPs
    // ========================================================================

    pub async fn list_floating_ips(&self, params: &Parameters) -> Result<Vec<FloatingIp>, Error> {
        self.v2_list(&["floating-ips"], params).await
    }

    pub async fn get_floating_ip(&self, id: &str) -> Result<FloatingIp, Error> {
        self.v2_get("floating-ips", id).await
    }

    pub async fn create_floating_ip(
        &self,
        req: &CreateFloatingIpRequest,
    ) -> Result<TaskReference, Error> {
        self.v2_create("floating-ips", req).await
    }

    pub async fn patch_floating_ip(
        &self,
        id: &str,
        req: &PatchFloatingIpRequest,
    ) -> Result<TaskReference, Error> {
        self.v2_patch("floating-ips", id, req).await
    }

    pub async fn delete_floating_ip(&self, id: &str) -> Result<Option<String>, Error> {
        self.v2_delete("floating-ips", id).await
    }

    pub async fn assign_floating_ip(
        &self,
        id: &str,
        resource_id: &str,
    ) -> Result<Option<String>, Error> {
        let req = AssignFloatingIpRequest {
            resource_id: resource_id.to_string(),
        };
        self.call_task(Method::POST, self.v2(&["floating-ips", id, "assign"])?, Some(&req))
            .await
    }

    pub async fn unassign_floating_ip(&self, id: &str) -> Result<Option<String>, Error> {
        self.call_task(Method::POST, self.v2(&["floating-ips", id, "unassign"])?, NO_BODY)
            .await
    }

    // ========================================================================
    // NICs, images, tasks
    // ========================================================================

    pub async fn list_nics(&self, params: &Parameters) -> Result<Vec<Nic>, Error> {
        self.v2_list(&["nics"], params).await
    }

    pub async fn get_nic(&self, id: &str) -> Result<Nic, Error> {
        self.v2_get("nics", id).await
    }

    pub async fn list_images(&self, params: &Parameters) -> Result<Vec<Image>, Error> {
        self.v2_list(&["images"], params).await
    }

    pub async fn get_image(&self, id: &str) -> Result<Image, Error> {
        self.v2_get("images", id).await
    }

    pub async fn patch_image(
        &self,
        id: &str,
        req: &PatchImageRequest,
    ) -> Result<TaskReference, Error> {
        self.v2_patch("images", id, req).await
    }

    pub async fn delete_image(&self, id: &str) -> Result<Option<String>, Error> {
        self.v2_delete("images", id).await
    }

    pub async fn list_tasks(&self, params: &Parameters) -> Result<Vec<Task>, Error> {
        self.v2_list(&["tasks"], params).await
    }

    pub async fn get_task(&self, id: &str) -> Result<Task, Error> {
        self.v2_get("tasks", id).await
    }

    // ========================================================================
    // Tags
    // ========================================================================

    pub async fn list_tags(&self, params: &Parameters) -> Result<Vec<Tag>, Error> {
        self.v2_list(&["tags"], params).await
    }

    pub async fn get_tag(&self, id: &str) -> Result<Tag, Error> {
        self.v2_get("tags", id).await
    }

    /// Create a tag, returning its ID
    pub async fn create_tag(&self, req: &CreateTagRequest) -> Result<String, Error> {
        let resp: IdResponse = self.call(Method::POST, self.v2(&["tags"])?, Some(req)).await?;
        Ok(resp.id)
    }

    pub async fn patch_tag(&self, id: &str, req: &PatchTagRequest) -> Result<(), Error> {
        self.call_empty(Method::PATCH, self.v2(&["tags", id])?, Some(req))
            .await
    }

    pub async fn delete_tag(&self, id: &str) -> Result<(), Error> {
        self.call_empty(Method::DELETE, self.v2(&["tags", id])?, NO_BODY)
            .await
    }
}
