//! Connection profile management
//!
//! A profile is a named bundle of connection parameters (host, port,
//! credentials, protocol options) resolved by type from the team
//! configuration. Profiles are loaded once and never mutated.
//!
//! Resolution order, lowest precedence first: global team config, global
//! user config, project team config, project user config. The project
//! configs are discovered by walking up from the working directory; the
//! global directory is `$ZOWE_HOME`, defaulting to `~/.zowe`.

mod config_file;
mod secure;

pub use config_file::{ConfigFile, TEAM_CONFIG_FILE, USER_CONFIG_FILE};

use std::path::PathBuf;

use serde_json::Value;
use tracing::debug;

use crate::error::{CoreError, Result};

/// A loaded connection profile: its resolved name, merged properties, and
/// any secure fields that could not be resolved from the store.
#[derive(Debug, Clone)]
pub struct Profile {
    /// Dotted profile name the type resolved to.
    pub name: String,
    /// Merged properties across config layers and parent profiles.
    pub properties: serde_json::Map<String, Value>,
    /// Secure fields declared by the profile but absent from the store.
    pub missing_secure_props: Vec<String>,
}

impl Profile {
    /// Look up a string property.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    /// Look up a numeric property as a port.
    pub fn get_u16(&self, key: &str) -> Option<u16> {
        self.properties
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|n| u16::try_from(n).ok())
    }

    /// Look up a boolean property.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.properties.get(key).and_then(Value::as_bool)
    }
}

/// Loads connection profiles from team configuration files.
#[derive(Debug, Clone)]
pub struct ProfileManager {
    search_dir: PathBuf,
    global_dir: PathBuf,
}

impl ProfileManager {
    /// Create a manager that discovers project config from the current
    /// working directory and global config from `$ZOWE_HOME` / `~/.zowe`.
    pub fn new() -> Self {
        let search_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            search_dir,
            global_dir: default_global_dir(),
        }
    }

    /// Create a manager with explicit directories. Used by tests and by
    /// callers that manage their own config locations.
    pub fn with_dirs(search_dir: impl Into<PathBuf>, global_dir: impl Into<PathBuf>) -> Self {
        Self {
            search_dir: search_dir.into(),
            global_dir: global_dir.into(),
        }
    }

    /// Load the profile registered for `profile_type` (e.g., "zosmf").
    ///
    /// Resolves the profile name from the highest-precedence config that
    /// names one, merges properties across all layers, and fills secure
    /// fields from the secure store.
    pub fn load(&self, profile_type: &str) -> Result<Profile> {
        let layers = self.config_layers();
        if layers.is_empty() {
            return Err(CoreError::ConfigNotFound(TEAM_CONFIG_FILE.to_string()));
        }

        let name = layers
            .iter()
            .rev()
            .find_map(|config| config.profile_name_for_type(profile_type))
            .ok_or_else(|| CoreError::ProfileNotFound {
                name: profile_type.to_string(),
                reason: format!(
                    "no profile with matching profile type '{}' found",
                    profile_type
                ),
            })?;

        debug!(profile = %name, profile_type, "resolved profile name");

        let mut properties = serde_json::Map::new();
        let mut secure_fields: Vec<String> = Vec::new();
        for config in &layers {
            let (props, secure) = config.profile_properties(&name);
            // later layers take precedence
            for (key, value) in props {
                properties.insert(key, value);
            }
            for field in secure {
                if !secure_fields.contains(&field) {
                    secure_fields.push(field);
                }
            }
        }

        let mut missing_secure_props = Vec::new();
        if !secure_fields.is_empty() {
            let mut resolved = std::collections::HashMap::new();
            for config in &layers {
                let entries = secure::load_secure_props(&self.global_dir, config.path())?;
                resolved.extend(entries);
            }
            for field in &secure_fields {
                let key = format!("profiles.{}.properties.{}", name, field);
                match resolved.get(&key) {
                    Some(value) => {
                        properties.insert(field.clone(), Value::String(value.clone()));
                    }
                    None => missing_secure_props.push(field.clone()),
                }
            }
        }

        Ok(Profile {
            name,
            properties,
            missing_secure_props,
        })
    }

    /// Collect existing config files, lowest precedence first.
    fn config_layers(&self) -> Vec<ConfigFile> {
        let mut layers = Vec::new();

        for filename in [TEAM_CONFIG_FILE, USER_CONFIG_FILE] {
            let path = self.global_dir.join(filename);
            if path.is_file() {
                if let Ok(config) = ConfigFile::load(&path) {
                    layers.push(config);
                }
            }
        }
        for filename in [TEAM_CONFIG_FILE, USER_CONFIG_FILE] {
            if let Some(path) = config_file::autodiscover(&self.search_dir, filename) {
                if let Ok(config) = ConfigFile::load(&path) {
                    layers.push(config);
                }
            }
        }

        layers
    }
}

impl Default for ProfileManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Global configuration directory: `$ZOWE_HOME`, else `~/.zowe`.
fn default_global_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("ZOWE_HOME") {
        return PathBuf::from(home);
    }
    let home = std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .unwrap_or_default();
    PathBuf::from(home).join(".zowe")
}

/// Typed view of a z/OSMF connection profile.
#[derive(Debug, Clone)]
pub struct ZosmfProfile {
    /// Hostname of the z/OSMF endpoint.
    pub host: String,
    /// Port, defaulting to 443.
    pub port: u16,
    /// Userid for HTTP basic authentication.
    pub user: String,
    /// Password for HTTP basic authentication.
    pub password: String,
    /// Scheme, defaulting to "https".
    pub protocol: String,
    /// Whether to verify the server TLS certificate.
    pub reject_unauthorized: bool,
}

impl ZosmfProfile {
    /// Extract the typed connection parameters from a loaded profile.
    ///
    /// Host, user, and password are required; their absence is the
    /// [`CoreError::MissingConnectionArgs`] error.
    pub fn from_profile(profile: &Profile) -> Result<Self> {
        let host = profile.get_str("host");
        let user = profile.get_str("user");
        let password = profile.get_str("password");

        let (Some(host), Some(user), Some(password)) = (host, user, password) else {
            return Err(CoreError::MissingConnectionArgs);
        };

        Ok(Self {
            host: host.to_string(),
            port: profile.get_u16("port").unwrap_or(443),
            user: user.to_string(),
            password: password.to_string(),
            protocol: profile
                .get_str("protocol")
                .unwrap_or("https")
                .to_string(),
            reject_unauthorized: profile.get_bool("rejectUnauthorized").unwrap_or(true),
        })
    }

    /// Base URL for the z/OSMF REST services.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use std::fs;
    use std::path::Path;

    const TEAM: &str = r#"{
        "profiles": {
            "lpar1": {
                "properties": { "host": "mf.example.com", "rejectUnauthorized": false },
                "profiles": {
                    "zosmf": {
                        "type": "zosmf",
                        "properties": { "port": 10443 },
                        "secure": ["user", "password"]
                    }
                }
            }
        },
        "defaults": { "zosmf": "lpar1.zosmf" }
    }"#;

    fn write_team_config(dir: &Path) -> PathBuf {
        let path = dir.join(TEAM_CONFIG_FILE);
        fs::write(&path, TEAM).unwrap();
        path
    }

    fn write_secure_store(global_dir: &Path, config_path: &Path) {
        let mut inner = serde_json::Map::new();
        inner.insert(
            "profiles.lpar1.zosmf.properties.user".to_string(),
            Value::String("IBMUSER".to_string()),
        );
        inner.insert(
            "profiles.lpar1.zosmf.properties.password".to_string(),
            Value::String("SECRET".to_string()),
        );
        let mut root = serde_json::Map::new();
        root.insert(config_path.display().to_string(), Value::Object(inner));

        let blob = STANDARD.encode(serde_json::to_vec(&root).unwrap());
        fs::write(global_dir.join("secure_config_props"), blob).unwrap();
    }

    #[test]
    fn test_load_resolves_type_through_defaults() {
        let project = tempfile::tempdir().unwrap();
        let global = tempfile::tempdir().unwrap();
        let config_path = write_team_config(project.path());
        write_secure_store(global.path(), &config_path);

        let manager = ProfileManager::with_dirs(project.path(), global.path());
        let profile = manager.load("zosmf").unwrap();

        assert_eq!(profile.name, "lpar1.zosmf");
        assert_eq!(profile.get_str("host"), Some("mf.example.com"));
        assert_eq!(profile.get_u16("port"), Some(10443));
        assert_eq!(profile.get_str("user"), Some("IBMUSER"));
        assert!(profile.missing_secure_props.is_empty());
    }

    #[test]
    fn test_missing_secure_values_are_recorded_not_fatal() {
        let project = tempfile::tempdir().unwrap();
        let global = tempfile::tempdir().unwrap();
        write_team_config(project.path());

        let manager = ProfileManager::with_dirs(project.path(), global.path());
        let profile = manager.load("zosmf").unwrap();

        assert_eq!(
            profile.missing_secure_props,
            vec!["user".to_string(), "password".to_string()]
        );
    }

    #[test]
    fn test_user_config_overrides_team_config() {
        let project = tempfile::tempdir().unwrap();
        let global = tempfile::tempdir().unwrap();
        write_team_config(project.path());
        fs::write(
            project.path().join(USER_CONFIG_FILE),
            r#"{
                "profiles": {
                    "lpar1": {
                        "profiles": {
                            "zosmf": { "properties": { "port": 2443 } }
                        }
                    }
                }
            }"#,
        )
        .unwrap();

        let manager = ProfileManager::with_dirs(project.path(), global.path());
        let profile = manager.load("zosmf").unwrap();

        assert_eq!(profile.get_u16("port"), Some(2443));
        assert_eq!(profile.get_str("host"), Some("mf.example.com"));
    }

    #[test]
    fn test_no_config_anywhere_is_an_error() {
        let project = tempfile::tempdir().unwrap();
        let global = tempfile::tempdir().unwrap();

        let manager = ProfileManager::with_dirs(project.path(), global.path());
        let err = manager.load("zosmf").unwrap_err();
        assert!(matches!(err, CoreError::ConfigNotFound(_)));
    }

    #[test]
    fn test_unknown_type_is_profile_not_found() {
        let project = tempfile::tempdir().unwrap();
        let global = tempfile::tempdir().unwrap();
        write_team_config(project.path());

        let manager = ProfileManager::with_dirs(project.path(), global.path());
        let err = manager.load("tso").unwrap_err();
        assert!(matches!(err, CoreError::ProfileNotFound { .. }));
    }

    #[test]
    fn test_zosmf_profile_requires_connection_args() {
        let project = tempfile::tempdir().unwrap();
        let global = tempfile::tempdir().unwrap();
        write_team_config(project.path());

        let manager = ProfileManager::with_dirs(project.path(), global.path());
        // secure store absent: user/password unresolved
        let profile = manager.load("zosmf").unwrap();
        let err = ZosmfProfile::from_profile(&profile).unwrap_err();
        assert!(matches!(err, CoreError::MissingConnectionArgs));
    }

    #[test]
    fn test_zosmf_profile_base_url() {
        let project = tempfile::tempdir().unwrap();
        let global = tempfile::tempdir().unwrap();
        let config_path = write_team_config(project.path());
        write_secure_store(global.path(), &config_path);

        let manager = ProfileManager::with_dirs(project.path(), global.path());
        let profile = manager.load("zosmf").unwrap();
        let zosmf = ZosmfProfile::from_profile(&profile).unwrap();

        assert_eq!(zosmf.base_url(), "https://mf.example.com:10443");
        assert!(!zosmf.reject_unauthorized);
    }
}
