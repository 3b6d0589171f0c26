// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! eCloud v1 endpoints

use reqwest::Method;
use url::Url;

use ecloud_api::IdResponse;
use ecloud_api::v1::{
    Appliance, ApplianceParameter, CloneVirtualMachineRequest, CreateTagRequest,
    CreateVirtualMachineRequest, CreateVirtualMachineTemplateRequest, Datastore, Firewall,
    FirewallConfig, Host, Network, PatchSolutionRequest, PatchTagRequest,
    PatchVirtualMachineRequest, Pod, RenameTemplateRequest, Site, Solution, Tag, Template,
    VirtualMachine, VirtualMachineDisk,
};

use crate::{Client, Error, NO_BODY, Parameters};

/// Resource a v1 tag is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagOwner {
    Vm(i64),
    Solution(i64),
}

/// Resource a v1 template is stored under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateOwner {
    Solution(i64),
    Pod(i64),
}

impl TagOwner {
    fn segments(&self) -> (&'static str, String) {
        match self {
            TagOwner::Vm(id) => ("vms", id.to_string()),
            TagOwner::Solution(id) => ("solutions", id.to_string()),
        }
    }
}

impl TemplateOwner {
    fn segments(&self) -> (&'static str, String) {
        match self {
            TemplateOwner::Solution(id) => ("solutions", id.to_string()),
            TemplateOwner::Pod(id) => ("pods", id.to_string()),
        }
    }
}

impl Client {
    fn v1(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut all = vec!["ecloud", "v1"];
        all.extend_from_slice(segments);
        self.endpoint(&all)
    }

    // ========================================================================
    // Virtual machines
    // ========================================================================

    pub async fn list_vms(&self, params: &Parameters) -> Result<Vec<VirtualMachine>, Error> {
        self.get_all(self.v1(&["vms"])?, params).await
    }

    pub async fn get_vm(&self, id: i64) -> Result<VirtualMachine, Error> {
        self.get_data(self.v1(&["vms", &id.to_string()])?).await
    }

    /// Create a virtual machine, returning its ID
    pub async fn create_vm(&self, req: &CreateVirtualMachineRequest) -> Result<i64, Error> {
        let resp: IdResponse<i64> = self.call(Method::POST, self.v1(&["vms"])?, Some(req)).await?;
        Ok(resp.id)
    }

    pub async fn patch_vm(&self, id: i64, req: &PatchVirtualMachineRequest) -> Result<(), Error> {
        self.call_empty(Method::PATCH, self.v1(&["vms", &id.to_string()])?, Some(req))
            .await
    }

    pub async fn delete_vm(&self, id: i64) -> Result<(), Error> {
        self.call_empty(Method::DELETE, self.v1(&["vms", &id.to_string()])?, NO_BODY)
            .await
    }

    async fn vm_power(&self, id: i64, action: &str) -> Result<(), Error> {
        self.call_empty(Method::PUT, self.v1(&["vms", &id.to_string(), action])?, NO_BODY)
            .await
    }

    pub async fn power_on_vm(&self, id: i64) -> Result<(), Error> {
        self.vm_power(id, "power-on").await
    }

    /// Hard power off
    pub async fn power_off_vm(&self, id: i64) -> Result<(), Error> {
        self.vm_power(id, "power-off").await
    }

    /// Graceful guest shutdown
    pub async fn power_shutdown_vm(&self, id: i64) -> Result<(), Error> {
        self.vm_power(id, "power-shutdown").await
    }

    /// Graceful guest restart
    pub async fn power_restart_vm(&self, id: i64) -> Result<(), Error> {
        self.vm_power(id, "power-restart").await
    }

    /// Hard reset
    pub async fn power_reset_vm(&self, id: i64) -> Result<(), Error> {
        self.vm_power(id, "power-reset").await
    }

    /// Clone a virtual machine, returning the new VM's ID
    pub async fn clone_vm(&self, id: i64, req: &CloneVirtualMachineRequest) -> Result<i64, Error> {
        let resp: IdResponse<i64> = self
            .call(Method::POST, self.v1(&["vms", &id.to_string(), "clone"])?, Some(req))
            .await?;
        Ok(resp.id)
    }

    pub async fn create_vm_template(
        &self,
        id: i64,
        req: &CreateVirtualMachineTemplateRequest,
    ) -> Result<(), Error> {
        let url = self.v1(&["vms", &id.to_string(), "clone-to-template"])?;
        self.call_empty(Method::POST, url, Some(req)).await
    }

    /// Disks are embedded in the VM record; there is no separate endpoint
    pub async fn list_vm_disks(&self, id: i64) -> Result<Vec<VirtualMachineDisk>, Error> {
        Ok(self.get_vm(id).await?.hdd_disks)
    }

    // ========================================================================
    // Tags (VMs and solutions)
    // ========================================================================

    pub async fn list_resource_tags(
        &self,
        owner: TagOwner,
        params: &Parameters,
    ) -> Result<Vec<Tag>, Error> {
        let (kind, id) = owner.segments();
        self.get_all(self.v1(&[kind, &id, "tags"])?, params).await
    }

    pub async fn get_resource_tag(&self, owner: TagOwner, key: &str) -> Result<Tag, Error> {
        let (kind, id) = owner.segments();
        self.get_data(self.v1(&[kind, &id, "tags", key])?).await
    }

    pub async fn create_resource_tag(
        &self,
        owner: TagOwner,
        req: &CreateTagRequest,
    ) -> Result<(), Error> {
        let (kind, id) = owner.segments();
        self.call_empty(Method::POST, self.v1(&[kind, &id, "tags"])?, Some(req))
            .await
    }

    pub async fn patch_resource_tag(
        &self,
        owner: TagOwner,
        key: &str,
        req: &PatchTagRequest,
    ) -> Result<(), Error> {
        let (kind, id) = owner.segments();
        self.call_empty(Method::PATCH, self.v1(&[kind, &id, "tags", key])?, Some(req))
            .await
    }

    pub async fn delete_resource_tag(&self, owner: TagOwner, key: &str) -> Result<(), Error> {
        let (kind, id) = owner.segments();
        self.call_empty(Method::DELETE, self.v1(&[kind, &id, "tags", key])?, NO_BODY)
            .await
    }

    // ========================================================================
    // Solutions
    // ========================================================================

    pub async fn list_solutions(&self, params: &Parameters) -> Result<Vec<Solution>, Error> {
        self.get_all(self.v1(&["solutions"])?, params).await
    }

    pub async fn get_solution(&self, id: i64) -> Result<Solution, Error> {
        self.get_data(self.v1(&["solutions", &id.to_string()])?).await
    }

    pub async fn patch_solution(&self, id: i64, req: &PatchSolutionRequest) -> Result<(), Error> {
        self.call_empty(Method::PATCH, self.v1(&["solutions", &id.to_string()])?, Some(req))
            .await
    }

    pub async fn list_solution_vms(
        &self,
        id: i64,
        params: &Parameters,
    ) -> Result<Vec<VirtualMachine>, Error> {
        self.get_all(self.v1(&["solutions", &id.to_string(), "vms"])?, params)
            .await
    }

    pub async fn list_solution_networks(
        &self,
        id: i64,
        params: &Parameters,
    ) -> Result<Vec<Network>, Error> {
        self.get_all(self.v1(&["solutions", &id.to_string(), "networks"])?, params)
            .await
    }

    pub async fn list_solution_firewalls(
        &self,
        id: i64,
        params: &Parameters,
    ) -> Result<Vec<Firewall>, Error> {
        self.get_all(self.v1(&["solutions", &id.to_string(), "firewalls"])?, params)
            .await
    }

    pub async fn list_solution_datastores(
        &self,
        id: i64,
        params: &Parameters,
    ) -> Result<Vec<Datastore>, Error> {
        self.get_all(self.v1(&["solutions", &id.to_string(), "datastores"])?, params)
            .await
    }

    pub async fn list_solution_sites(
        &self,
        id: i64,
        params: &Parameters,
    ) -> Result<Vec<Site>, Error> {
        self.get_all(self.v1(&["solutions", &id.to_string(), "sites"])?, params)
            .await
    }

    pub async fn list_solution_hosts(
        &self,
        id: i64,
        params: &Parameters,
    ) -> Result<Vec<Host>, Error> {
        self.get_all(self.v1(&["solutions", &id.to_string(), "hosts"])?, params)
            .await
    }

    // ========================================================================
    // Templates (solutions and pods)
    // ========================================================================

    pub async fn list_templates(
        &self,
        owner: TemplateOwner,
        params: &Parameters,
    ) -> Result<Vec<Template>, Error> {
        let (kind, id) = owner.segments();
        self.get_all(self.v1(&[kind, &id, "templates"])?, params).await
    }

    pub async fn get_template(&self, owner: TemplateOwner, name: &str) -> Result<Template, Error> {
        let (kind, id) = owner.segments();
        self.get_data(self.v1(&[kind, &id, "templates", name])?).await
    }

    /// Rename a template; the move completes asynchronously
    pub async fn rename_template(
        &self,
        owner: TemplateOwner,
        name: &str,
        new_name: &str,
    ) -> Result<(), Error> {
        let (kind, id) = owner.segments();
        let req = RenameTemplateRequest {
            destination: new_name.to_string(),
        };
        self.call_empty(
            Method::POST,
            self.v1(&[kind, &id, "templates", name, "move"])?,
            Some(&req),
        )
        .await
    }

    pub async fn delete_template(&self, owner: TemplateOwner, name: &str) -> Result<(), Error> {
        let (kind, id) = owner.segments();
        self.call_empty(Method::DELETE, self.v1(&[kind, &id, "templates", name])?, NO_BODY)
            .await
    }

    // ========================================================================
    // Pods
    // ========================================================================

    pub async fn list_pods(&self, params: &Parameters) -> Result<Vec<Pod>, Error> {
        self.get_all(self.v1(&["pods"])?, params).await
    }

    pub async fn get_pod(&self, id: i64) -> Result<Pod, Error> {
        self.get_data(self.v1(&["pods", &id.to_string()])?).await
    }

    pub async fn list_pod_appliances(
        &self,
        id: i64,
        params: &Parameters,
    ) -> Result<Vec<Appliance>, Error> {
        self.get_all(self.v1(&["pods", &id.to_string(), "appliances"])?, params)
            .await
    }

    // ========================================================================
    // Hosts, datastores, sites, firewalls
    // ========================================================================

    pub async fn list_hosts(&self, params: &Parameters) -> Result<Vec<Host>, Error> {
        self.get_all(self.v1(&["hosts"])?, params).await
    }

    pub async fn get_host(&self, id: i64) -> Result<Host, Error> {
        self.get_data(self.v1(&["hosts", &id.to_string()])?).await
    }

    pub async fn list_datastores(&self, params: &Parameters) -> Result<Vec<Datastore>, Error> {
        self.get_all(self.v1(&["datastores"])?, params).await
    }

    pub async fn get_datastore(&self, id: i64) -> Result<Datastore, Error> {
        self.get_data(self.v1(&["datastores", &id.to_string()])?).await
    }

    pub async fn list_sites(&self, params: &Parameters) -> Result<Vec<Site>, Error> {
        self.get_all(self.v1(&["sites"])?, params).await
    }

    pub async fn get_site(&self, id: i64) -> Result<Site, Error> {
        self.get_data(self.v1(&["sites", &id.to_string()])?).await
    }

    pub async fn list_firewalls(&self, params: &Parameters) -> Result<Vec<Firewall>, Error> {
        self.get_all(self.v1(&["firewalls"])?, params).await
    }

    pub async fn get_firewall(&self, id: i64) -> Result<Firewall, Error> {
        self.get_data(self.v1(&["firewalls", &id.to_string()])?).await
    }

    pub async fn get_firewall_config(&self, id: i64) -> Result<FirewallConfig, Error> {
        self.get_data(self.v1(&["firewalls", &id.to_string(), "config"])?)
            .await
    }

    // ========================================================================
    // Appliances
    // ========================================================================

    pub async fn list_appliances(&self, params: &Parameters) -> Result<Vec<Appliance>, Error> {
        self.get_all(self.v1(&["appliances"])?, params).await
    }

    pub async fn get_appliance(&self, id: &str) -> Result<Appliance, Error> {
        self.get_data(self.v1(&["appliances", id])?).await
    }

    pub async fn list_appliance_parameters(
        &self,
        id: &str,
        params: &Parameters,
    ) -> Result<Vec<ApplianceParameter>, Error> {
        self.get_all(self.v1(&["appliances", id, "parameters"])?, params)
            .await
    }
}
