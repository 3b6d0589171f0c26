// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Profile management types

use std::time::Duration;

use anyhow::Context;
use ecloud_client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_PER_PAGE, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize};

use crate::wait::WaitConfig;

fn default_api_uri() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_timeout_seconds() -> u64 {
    90
}

fn default_api_pagination_perpage() -> u32 {
    DEFAULT_PER_PAGE
}

fn default_command_wait_timeout_seconds() -> u64 {
    1200
}

fn default_command_wait_sleep_seconds() -> u64 {
    5
}

/// A connection profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Profile name
    pub name: String,

    /// API key sent in the Authorization header
    pub api_key: String,

    /// API base URL
    #[serde(default = "default_api_uri")]
    pub api_uri: String,

    /// Per-request timeout
    #[serde(default = "default_api_timeout_seconds")]
    pub api_timeout_seconds: u64,

    /// Skip TLS certificate verification
    #[serde(default)]
    pub api_insecure: bool,

    /// Page size used when listing collections
    #[serde(default = "default_api_pagination_perpage")]
    pub api_pagination_perpage: u32,

    /// How long `--wait` polls before giving up
    #[serde(default = "default_command_wait_timeout_seconds")]
    pub command_wait_timeout_seconds: u64,

    /// Delay between `--wait` polls
    #[serde(default = "default_command_wait_sleep_seconds")]
    pub command_wait_sleep_seconds: u64,
}

impl Profile {
    /// Create a new profile with default settings
    pub fn new(name: String, api_key: String) -> Self {
        Self {
            name,
            api_key,
            api_uri: default_api_uri(),
            api_timeout_seconds: default_api_timeout_seconds(),
            api_insecure: false,
            api_pagination_perpage: default_api_pagination_perpage(),
            command_wait_timeout_seconds: default_command_wait_timeout_seconds(),
            command_wait_sleep_seconds: default_command_wait_sleep_seconds(),
        }
    }

    /// Load a profile from a file
    pub fn load(name: &str) -> anyhow::Result<Self> {
        let path = super::paths::profile_path(name);
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read profile '{}': {}", name, e))?;
        let profile: Profile = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse profile '{}': {}", name, e))?;
        Ok(profile)
    }

    /// Save the profile to a file
    pub fn save(&self) -> anyhow::Result<()> {
        super::paths::ensure_config_dirs()?;
        let path = super::paths::profile_path(&self.name);
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Delete the profile file
    pub fn delete(name: &str) -> anyhow::Result<()> {
        let path = super::paths::profile_path(name);
        std::fs::remove_file(&path)
            .map_err(|e| anyhow::anyhow!("Failed to delete profile '{}': {}", name, e))?;
        Ok(())
    }

    /// List all available profiles
    pub fn list_all() -> anyhow::Result<Vec<String>> {
        let profiles_dir = super::paths::profiles_dir();
        if !profiles_dir.exists() {
            return Ok(vec![]);
        }

        let mut profiles = vec![];
        for entry in std::fs::read_dir(&profiles_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem()
            {
                profiles.push(stem.to_string_lossy().to_string());
            }
        }
        profiles.sort();
        Ok(profiles)
    }

    /// Apply `ANS_*` overrides on top of the stored values
    ///
    /// `lookup` is normally `std::env::var`; it is a parameter so callers
    /// can resolve against any source.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("ANS_API_KEY") {
            self.api_key = key;
        }
        if let Some(uri) = lookup("ANS_API_URI") {
            self.api_uri = uri;
        }
        if let Some(v) = lookup("ANS_API_TIMEOUT_SECONDS") {
            self.api_timeout_seconds = parse_number("ANS_API_TIMEOUT_SECONDS", &v)?;
        }
        if let Some(v) = lookup("ANS_API_INSECURE") {
            self.api_insecure = v == "1" || v.eq_ignore_ascii_case("true");
        }
        if let Some(v) = lookup("ANS_API_PAGINATION_PERPAGE") {
            self.api_pagination_perpage = parse_number("ANS_API_PAGINATION_PERPAGE", &v)?;
        }
        if let Some(v) = lookup("ANS_COMMAND_WAIT_TIMEOUT_SECONDS") {
            self.command_wait_timeout_seconds =
                parse_number("ANS_COMMAND_WAIT_TIMEOUT_SECONDS", &v)?;
        }
        if let Some(v) = lookup("ANS_COMMAND_WAIT_SLEEP_SECONDS") {
            self.command_wait_sleep_seconds = parse_number("ANS_COMMAND_WAIT_SLEEP_SECONDS", &v)?;
        }
        Ok(())
    }

    /// Client settings for this profile
    ///
    /// A zero request timeout means the client default.
    pub fn client_config(&self) -> ClientConfig {
        let timeout = match self.api_timeout_seconds {
            0 => DEFAULT_TIMEOUT,
            secs => Duration::from_secs(secs),
        };
        ClientConfig::new(self.api_key.clone())
            .with_base_url(self.api_uri.clone())
            .with_timeout(timeout)
            .with_insecure(self.api_insecure)
            .with_per_page(self.api_pagination_perpage)
            .with_user_agent(format!("ans/{}", env!("CARGO_PKG_VERSION")))
    }

    /// Poller settings for `--wait`
    pub fn wait_config(&self) -> WaitConfig {
        WaitConfig::from_secs(
            self.command_wait_timeout_seconds,
            self.command_wait_sleep_seconds,
        )
    }
}

fn parse_number<T>(var: &str, value: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("invalid value for {}: '{}'", var, value))
}

/// Main configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Current active profile name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Previous profile (for `ans profile set-current -`)
    #[serde(rename = "oldProfile", skip_serializing_if = "Option::is_none")]
    pub old_profile: Option<String>,
}

impl Config {
    /// Load the main config file
    pub fn load() -> anyhow::Result<Self> {
        let path = super::paths::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save the main config file
    pub fn save(&self) -> anyhow::Result<()> {
        super::paths::ensure_config_dirs()?;
        let path = super::paths::config_file();
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Get the current profile name
    pub fn current_profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    /// Set the current profile
    pub fn set_current_profile(&mut self, name: &str) {
        self.old_profile = self.profile.take();
        self.profile = Some(name.to_string());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_minimal_profile_gets_defaults() {
        let profile: Profile =
            serde_json::from_str(r#"{"name": "work", "api_key": "abc"}"#).unwrap();
        assert_eq!(profile, Profile::new("work".to_string(), "abc".to_string()));
        assert_eq!(profile.wait_config(), WaitConfig::default());
    }

    #[test]
    fn test_overrides() {
        let mut profile = Profile::new("work".to_string(), "abc".to_string());
        profile
            .apply_overrides(vars(&[
                ("ANS_API_KEY", "xyz"),
                ("ANS_API_URI", "http://127.0.0.1:9000"),
                ("ANS_API_INSECURE", "TRUE"),
                ("ANS_COMMAND_WAIT_TIMEOUT_SECONDS", "30"),
                ("ANS_COMMAND_WAIT_SLEEP_SECONDS", "1"),
            ]))
            .unwrap();

        assert_eq!(profile.api_key, "xyz");
        assert_eq!(profile.api_uri, "http://127.0.0.1:9000");
        assert!(profile.api_insecure);
        assert_eq!(profile.wait_config(), WaitConfig::from_secs(30, 1));
        assert_eq!(profile.client_config().base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_zero_api_timeout_uses_client_default() {
        let mut profile = Profile::new("work".to_string(), "abc".to_string());
        profile
            .apply_overrides(vars(&[("ANS_API_TIMEOUT_SECONDS", "0")]))
            .unwrap();
        assert_eq!(profile.api_timeout_seconds, 0);
        assert_eq!(profile.client_config().timeout, DEFAULT_TIMEOUT);

        profile.api_timeout_seconds = 30;
        assert_eq!(profile.client_config().timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_invalid_numeric_override() {
        let mut profile = Profile::new("work".to_string(), "abc".to_string());
        let err = profile
            .apply_overrides(vars(&[("ANS_API_TIMEOUT_SECONDS", "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains("ANS_API_TIMEOUT_SECONDS"));
    }

    #[test]
    fn test_set_current_profile_remembers_previous() {
        let mut config = Config::default();
        config.set_current_profile("a");
        config.set_current_profile("b");
        assert_eq!(config.current_profile(), Some("b"));
        assert_eq!(config.old_profile.as_deref(), Some("a"));
    }
}
