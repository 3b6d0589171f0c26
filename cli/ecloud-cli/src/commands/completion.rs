// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Shell completion scripts

use clap::Command;
use clap_complete::Shell;

/// Write the completion script for `shell` to stdout
pub fn generate(shell: Shell, command: &mut Command) {
    let name = command.get_name().to_string();
    clap_complete::generate(shell, command, name, &mut std::io::stdout());
}
