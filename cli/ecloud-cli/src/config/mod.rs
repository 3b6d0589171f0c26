// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration management

pub mod paths;
pub mod profile;

pub use profile::{Config, Profile};

use anyhow::Result;

/// Name of the implicit profile built from environment variables
pub const ENV_PROFILE: &str = "env";

fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Build an "env" profile from environment variables
pub fn env_profile() -> Result<Profile> {
    env_profile_with(process_env)
}

fn env_profile_with<F>(lookup: F) -> Result<Profile>
where
    F: Fn(&str) -> Option<String>,
{
    let api_key = lookup("ANS_API_KEY").ok_or_else(|| anyhow::anyhow!("ANS_API_KEY must be set"))?;
    let mut profile = Profile::new(ENV_PROFILE.to_string(), api_key);
    profile.apply_overrides(lookup)?;
    Ok(profile)
}

/// Resolve which profile to use
///
/// Priority:
/// 1. CLI --profile argument (clap also reads ANS_PROFILE into it)
/// 2. "env" if ANS_API_KEY is set
/// 3. Current profile from config.json
///
/// `ANS_*` overrides are applied to whichever profile is chosen.
pub fn resolve_profile(cli_profile: Option<&str>) -> Result<Profile> {
    resolve_profile_with(cli_profile, process_env)
}

fn resolve_profile_with<F>(cli_profile: Option<&str>, lookup: F) -> Result<Profile>
where
    F: Fn(&str) -> Option<String>,
{
    let name = match cli_profile {
        Some(name) => Some(name.to_string()),
        None if lookup("ANS_API_KEY").is_some() => Some(ENV_PROFILE.to_string()),
        None => Config::load()?.current_profile().map(str::to_string),
    };

    let name = name.ok_or_else(|| {
        anyhow::anyhow!(
            "No profile configured. Use 'ans profile create' or set the ANS_API_KEY environment variable."
        )
    })?;

    if name == ENV_PROFILE {
        return env_profile_with(lookup);
    }

    let mut profile = Profile::load(&name)?;
    profile.apply_overrides(lookup)?;
    Ok(profile)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_env_profile_requires_key() {
        let err = env_profile_with(|_| None).unwrap_err();
        assert!(err.to_string().contains("ANS_API_KEY"));
    }

    #[test]
    fn test_implicit_env_profile() {
        let profile = resolve_profile_with(None, |k| {
            (k == "ANS_API_KEY").then(|| "secret".to_string())
        })
        .unwrap();
        assert_eq!(profile.name, ENV_PROFILE);
        assert_eq!(profile.api_key, "secret");
    }

    #[test]
    fn test_explicit_env_profile() {
        let profile = resolve_profile_with(Some("env"), |k| match k {
            "ANS_API_KEY" => Some("secret".to_string()),
            "ANS_API_URI" => Some("http://localhost:1234".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(profile.api_uri, "http://localhost:1234");
    }
}
