// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! eCloud v2 type definitions

pub mod firewall;
pub mod floating_ip;
pub mod image;
pub mod instance;
pub mod network;
pub mod sync;
pub mod tag;
pub mod task;
pub mod volume;
pub mod vpc;
pub mod vpn;

pub use firewall::*;
pub use floating_ip::*;
pub use image::*;
pub use instance::*;
pub use network::*;
pub use sync::*;
pub use tag::*;
pub use task::*;
pub use volume::*;
pub use vpc::*;
pub use vpn::*;
