// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! eCloud API data model
//!
//! This crate defines the wire types for the eCloud REST API. The API is
//! split into two generations that live side by side:
//!
//! - [`v1`]: the legacy VMware-backed platform (virtual machines, solutions,
//!   pods, hosts, datastores, sites, firewalls, templates, appliances).
//! - [`v2`]: the VPC platform (VPCs, networks, routers, instances, volumes,
//!   firewall policies, VPN gateways, floating IPs, tasks).
//!
//! Both generations share the response envelopes and error format in
//! [`common`].

pub mod common;
pub mod v1;
pub mod v2;

pub use common::*;
