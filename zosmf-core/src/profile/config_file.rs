//! Team configuration files
//!
//! A team configuration file holds a (possibly nested) `profiles` tree, a
//! `defaults` map from profile type to profile name, and per-profile
//! `properties` plus a `secure` list naming properties whose values live in
//! the secure store. User configuration files carry personal overrides and
//! take precedence over the team file next to them.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{CoreError, Result};

/// File name of the shared team configuration.
pub const TEAM_CONFIG_FILE: &str = "zowe.config.json";

/// File name of the personal override configuration.
pub const USER_CONFIG_FILE: &str = "zowe.config.user.json";

/// A single parsed configuration file.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
    profiles: serde_json::Map<String, Value>,
    defaults: HashMap<String, String>,
}

impl ConfigFile {
    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let root: Value = serde_json::from_str(&raw).map_err(|source| CoreError::ConfigParse {
            path: path.display().to_string(),
            source,
        })?;

        let profiles = root
            .get("profiles")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        let defaults = root
            .get("defaults")
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            path: path.to_path_buf(),
            profiles,
            defaults,
        })
    }

    /// Path this file was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve the profile name to use for a profile type.
    ///
    /// The `defaults` map is consulted first; failing that, the profiles
    /// tree is scanned for an entry whose `type` matches.
    pub fn profile_name_for_type(&self, profile_type: &str) -> Option<String> {
        if let Some(name) = self.defaults.get(profile_type) {
            return Some(name.clone());
        }
        find_by_type(&self.profiles, profile_type, "")
    }

    /// Find a profile by dotted path within the nested profiles tree.
    pub fn find_profile(&self, dotted: &str) -> Option<&Value> {
        let mut current = &self.profiles;
        let mut segments = dotted.split('.').peekable();

        while let Some(segment) = segments.next() {
            let profile = current.get(segment)?;
            if segments.peek().is_none() {
                return Some(profile);
            }
            current = profile.get("profiles")?.as_object()?;
        }
        None
    }

    /// Collect the properties and secure-field names for a dotted profile
    /// path, merging parent profiles along the path. A property set on the
    /// deeper profile wins over the same property on an ancestor; secure
    /// field names accumulate across all levels.
    pub fn profile_properties(
        &self,
        dotted: &str,
    ) -> (serde_json::Map<String, Value>, Vec<String>) {
        let mut props = serde_json::Map::new();
        let mut secure = Vec::new();
        let mut segments: Vec<&str> = dotted.split('.').collect();

        while !segments.is_empty() {
            let name = segments.join(".");
            if let Some(profile) = self.find_profile(&name) {
                if let Some(map) = profile.get("properties").and_then(Value::as_object) {
                    for (key, value) in map {
                        // first-seen wins: deeper profiles are visited first
                        props.entry(key.clone()).or_insert_with(|| value.clone());
                    }
                }
                if let Some(list) = profile.get("secure").and_then(Value::as_array) {
                    secure.extend(list.iter().filter_map(Value::as_str).map(String::from));
                }
            }
            segments.pop();
        }

        (props, secure)
    }
}

/// Depth-first scan of the profiles tree for the first profile whose `type`
/// matches, returning its dotted path.
fn find_by_type(
    profiles: &serde_json::Map<String, Value>,
    profile_type: &str,
    prefix: &str,
) -> Option<String> {
    for (name, profile) in profiles {
        let dotted = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };

        if profile.get("type").and_then(Value::as_str) == Some(profile_type) {
            return Some(dotted);
        }
        if let Some(children) = profile.get("profiles").and_then(Value::as_object) {
            if let Some(found) = find_by_type(children, profile_type, &dotted) {
                return Some(found);
            }
        }
    }
    None
}

/// Walk up from `start` looking for `filename`, returning the first hit.
pub fn autodiscover(start: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(filename);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}
