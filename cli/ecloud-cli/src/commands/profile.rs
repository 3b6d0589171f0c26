// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Profile management commands

use std::io::IsTerminal;

use anyhow::{Result, bail};
use clap::Subcommand;
use dialoguer::{Confirm, Input, Password};
use serde::Serialize;

use crate::config::{Config, ENV_PROFILE, Profile, env_profile, resolve_profile};
use crate::output::Output;

const LIST_COLUMNS: &[&str] = &["name", "current", "api_uri"];
const GET_COLUMNS: &[&str] = &[
    "name",
    "api_uri",
    "api_key",
    "api_timeout_seconds",
    "api_insecure",
    "api_pagination_perpage",
    "command_wait_timeout_seconds",
    "command_wait_sleep_seconds",
];

#[derive(Subcommand, Clone)]
pub enum ProfileCommand {
    /// List all profiles
    #[command(alias = "ls")]
    List,

    /// Show profile details
    Get {
        /// Profile name (defaults to current)
        name: Option<String>,
    },

    /// Create a new profile
    Create {
        /// Profile name
        name: Option<String>,
        /// API key
        #[arg(long)]
        api_key: Option<String>,
        /// API base URL
        #[arg(long)]
        api_uri: Option<String>,
        /// Skip TLS verification
        #[arg(long)]
        insecure: bool,
        /// Make this the current profile
        #[arg(long)]
        current: bool,
    },

    /// Delete profile(s)
    #[command(alias = "rm")]
    Delete {
        /// Profile name(s)
        #[arg(required = true)]
        names: Vec<String>,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Set the current profile
    SetCurrent {
        /// Profile name (use '-' for previous)
        name: String,
    },
}

/// A profile as shown to the user, with the API key masked
#[derive(Debug, Serialize)]
struct ProfileView {
    name: String,
    current: bool,
    api_uri: String,
    api_key: String,
    api_timeout_seconds: u64,
    api_insecure: bool,
    api_pagination_perpage: u32,
    command_wait_timeout_seconds: u64,
    command_wait_sleep_seconds: u64,
}

impl ProfileView {
    fn new(profile: &Profile, current: Option<&str>) -> Self {
        Self {
            name: profile.name.clone(),
            current: current == Some(profile.name.as_str()),
            api_uri: profile.api_uri.clone(),
            api_key: mask_key(&profile.api_key),
            api_timeout_seconds: profile.api_timeout_seconds,
            api_insecure: profile.api_insecure,
            api_pagination_perpage: profile.api_pagination_perpage,
            command_wait_timeout_seconds: profile.command_wait_timeout_seconds,
            command_wait_sleep_seconds: profile.command_wait_sleep_seconds,
        }
    }
}

/// Keep only the last four characters of a key
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}

/// Reject names that cannot be stored as a profile file
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("Profile name cannot be empty");
    }
    if name == ENV_PROFILE {
        bail!("Profile name '{}' is reserved", ENV_PROFILE);
    }
    if name == "-" || name.contains(['/', '\\']) || name.starts_with('.') {
        bail!("Invalid profile name '{}'", name);
    }
    Ok(())
}

impl ProfileCommand {
    pub async fn run(self, output: &Output) -> Result<()> {
        match self {
            Self::List => list_profiles(output),
            Self::Get { name } => get_profile(name, output),
            Self::Create {
                name,
                api_key,
                api_uri,
                insecure,
                current,
            } => create_profile(name, api_key, api_uri, insecure, current),
            Self::Delete { names, force } => delete_profiles(&names, force),
            Self::SetCurrent { name } => set_current_profile(&name),
        }
    }
}

fn list_profiles(output: &Output) -> Result<()> {
    let current_profile = resolve_profile(None).ok();
    let current_name = current_profile.as_ref().map(|p| p.name.as_str());

    let mut profiles = Vec::new();
    if let Ok(env) = env_profile() {
        profiles.push(env);
    }
    for name in Profile::list_all()? {
        match Profile::load(&name) {
            Ok(profile) => profiles.push(profile),
            Err(e) => tracing::warn!(profile = %name, "skipping unreadable profile: {:#}", e),
        }
    }

    let views: Vec<ProfileView> = profiles
        .iter()
        .map(|p| ProfileView::new(p, current_name))
        .collect();
    output.print(&views, LIST_COLUMNS)
}

fn get_profile(name: Option<String>, output: &Output) -> Result<()> {
    let profile = match name {
        Some(n) if n == ENV_PROFILE => env_profile()?,
        Some(n) => Profile::load(&n)?,
        None => resolve_profile(None)?,
    };
    let current = Config::load()?.profile;
    output.print(&[ProfileView::new(&profile, current.as_deref())], GET_COLUMNS)
}

fn create_profile(
    name: Option<String>,
    api_key: Option<String>,
    api_uri: Option<String>,
    insecure: bool,
    make_current: bool,
) -> Result<()> {
    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Profile name").interact_text()?,
    };
    validate_name(&name)?;

    if Profile::list_all()?.contains(&name) {
        bail!("Profile '{}' already exists", name);
    }

    let api_key = match api_key {
        Some(k) => k,
        None => Password::new().with_prompt("API key").interact()?,
    };

    let mut profile = Profile::new(name.clone(), api_key);
    if let Some(uri) = api_uri {
        profile.api_uri = uri;
    }
    profile.api_insecure = insecure;

    profile.save()?;
    println!("Created profile '{}'", name);

    let mut config = Config::load()?;
    let set_current = make_current
        || config.current_profile().is_none()
        || (std::io::stdin().is_terminal()
            && Confirm::new()
                .with_prompt("Set as current profile?")
                .default(true)
                .interact()?);
    if set_current {
        config.set_current_profile(&name);
        config.save()?;
        println!("Set '{}' as current profile", name);
    }

    Ok(())
}

fn delete_profiles(names: &[String], force: bool) -> Result<()> {
    if !force && !std::io::stdin().is_terminal() {
        bail!("Refusing to delete without confirmation; use --force");
    }

    let mut config = Config::load()?;
    for name in names {
        if !force
            && !Confirm::new()
                .with_prompt(format!("Delete profile '{}'?", name))
                .default(false)
                .interact()?
        {
            continue;
        }
        Profile::delete(name)?;
        println!("Deleted profile '{}'", name);

        if config.current_profile() == Some(name.as_str()) {
            config.profile = None;
            config.save()?;
        }
    }
    Ok(())
}

fn set_current_profile(name: &str) -> Result<()> {
    let mut config = Config::load()?;

    let name = if name == "-" {
        config
            .old_profile
            .clone()
            .ok_or_else(|| anyhow::anyhow!("No previous profile"))?
    } else {
        name.to_string()
    };
    // Verify profile exists
    Profile::load(&name)?;

    config.set_current_profile(&name);
    config.save()?;
    println!("Current profile: {}", name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("abcdef123456", "****3456" ; "long key")]
    #[test_case("abcd", "****" ; "short key")]
    #[test_case("", "****" ; "empty key")]
    fn test_mask_key(key: &str, expected: &str) {
        assert_eq!(mask_key(key), expected);
    }

    #[test_case("work", true ; "plain")]
    #[test_case("env", false ; "reserved")]
    #[test_case("", false ; "empty")]
    #[test_case("-", false ; "dash")]
    #[test_case("../etc", false ; "traversal")]
    #[test_case("a/b", false ; "slash")]
    fn test_validate_name(name: &str, ok: bool) {
        assert_eq!(validate_name(name).is_ok(), ok);
    }
}
