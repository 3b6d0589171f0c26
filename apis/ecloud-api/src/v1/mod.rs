// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! eCloud v1 type definitions

pub mod appliance;
pub mod infrastructure;
pub mod pod;
pub mod solution;
pub mod tag;
pub mod template;
pub mod vm;

pub use appliance::*;
pub use infrastructure::*;
pub use pod::*;
pub use solution::*;
pub use tag::*;
pub use template::*;
pub use vm::*;
