// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! ans - command-line interface for UKFast eCloud

use anyhow::{Context as _, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use ecloud_client::Client;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod output;
mod wait;

use commands::ecloud::Context;
use commands::{EcloudCommand, ProfileCommand};
use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(
    name = "ans",
    version,
    about = "eCloud management CLI",
    long_about = "Command-line interface for managing eCloud v1 and v2 resources"
)]
struct Cli {
    /// Profile to use
    #[arg(short, long, global = true, env = "ANS_PROFILE")]
    profile: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,

    /// Property to output (repeatable, or comma-separated)
    #[arg(long, global = true, value_delimiter = ',')]
    property: Vec<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage connection profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },

    /// Manage eCloud resources
    Ecloud {
        #[command(subcommand)]
        command: EcloudCommand,
    },

    /// Generate shell completion scripts
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Build the command context from the resolved profile
    fn build_context(&self) -> Result<Context> {
        let profile = config::resolve_profile(self.profile.as_deref())?;
        tracing::debug!(profile = %profile.name, uri = %profile.api_uri, "using profile");

        let client = Client::new(profile.client_config()).context("Failed to create API client")?;
        Ok(Context {
            client,
            output: self.output_settings(),
            wait: profile.wait_config(),
        })
    }

    fn output_settings(&self) -> Output {
        Output::new(self.output, self.property.clone())
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "ans=debug,ecloud_client=debug"
        } else {
            "warn"
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Profile { command } => command.clone().run(&cli.output_settings()).await,
        Commands::Ecloud { command } => {
            let ctx = cli.build_context()?;
            command.clone().run(&ctx).await
        }
        Commands::Completion { shell } => {
            commands::completion::generate(*shell, &mut Cli::command());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
