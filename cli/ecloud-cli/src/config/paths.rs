// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration path resolution
//!
//! Supports both a dotfile ~/.ans/ and the platform config dir.

use std::path::PathBuf;

/// Get the ans configuration directory
///
/// Priority:
/// 1. ANS_CONFIG_DIR environment variable
/// 2. ~/.ans/ if it exists
/// 3. Platform config dir (~/.config/ans/ on Linux)
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ANS_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        let dotdir = home.join(".ans");
        if dotdir.exists() {
            return dotdir;
        }
    }

    dirs::config_dir()
        .map(|dir| dir.join("ans"))
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".ans")
        })
}

/// Get the profiles directory
pub fn profiles_dir() -> PathBuf {
    config_dir().join("profiles.d")
}

/// Get the path to the main config file
pub fn config_file() -> PathBuf {
    config_dir().join("config.json")
}

/// Get the path to a specific profile
pub fn profile_path(name: &str) -> PathBuf {
    profiles_dir().join(format!("{}.json", name))
}

/// Ensure config directories exist
pub fn ensure_config_dirs() -> std::io::Result<()> {
    std::fs::create_dir_all(profiles_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_path() {
        let path = profile_path("default");
        assert!(path.ends_with("profiles.d/default.json"));
    }

    #[test]
    fn test_config_file_is_in_config_dir() {
        assert_eq!(config_file().parent(), Some(config_dir().as_path()));
    }
}
