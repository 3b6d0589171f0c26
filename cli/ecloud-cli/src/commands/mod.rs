// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CLI commands

pub mod completion;
pub mod ecloud;
pub mod profile;

pub use ecloud::EcloudCommand;
pub use profile::ProfileCommand;
