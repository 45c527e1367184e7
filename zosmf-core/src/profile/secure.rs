//! Secure-property store
//!
//! Secure profile values (credentials, tokens) are kept out of the team
//! configuration file in a base64-encoded JSON blob. The blob maps a
//! configuration file path to its secure entries, each keyed
//! `profiles.<name>.properties.<property>`. A missing store is not an
//! error: it degrades to "no secure values", and the caller records which
//! fields went unresolved.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use tracing::debug;

use crate::error::{CoreError, Result};

/// File name of the secure-property store inside the global config directory.
pub const SECURE_PROPS_FILE: &str = "secure_config_props";

/// Load the secure entries scoped to one configuration file.
///
/// Returns an empty map when the store does not exist or holds no entries
/// for `config_path`.
pub fn load_secure_props(
    global_dir: &Path,
    config_path: &Path,
) -> Result<HashMap<String, String>> {
    let store = global_dir.join(SECURE_PROPS_FILE);
    if !store.is_file() {
        debug!(store = %store.display(), "secure-property store not present");
        return Ok(HashMap::new());
    }

    let encoded = fs::read_to_string(&store)?;
    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|e| CoreError::SecureProfileLoadFailed {
            name: store.display().to_string(),
            reason: format!("store is not valid base64: {}", e),
        })?;
    let root: Value =
        serde_json::from_slice(&decoded).map_err(|e| CoreError::SecureProfileLoadFailed {
            name: store.display().to_string(),
            reason: format!("decoded store is not valid JSON: {}", e),
        })?;

    let key = config_path.display().to_string();
    let entries = root
        .get(&key)
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect()
        })
        .unwrap_or_default();

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Encode a secure store blob the way the credential manager writes it.
    fn write_store(dir: &Path, config_path: &Path, entries: &[(&str, &str)]) {
        let mut inner = serde_json::Map::new();
        for (k, v) in entries {
            inner.insert(k.to_string(), Value::String(v.to_string()));
        }
        let mut root = serde_json::Map::new();
        root.insert(config_path.display().to_string(), Value::Object(inner));
        let blob = STANDARD.encode(serde_json::to_vec(&root).unwrap());
        fs::write(dir.join(SECURE_PROPS_FILE), blob).unwrap();
    }

    #[test]
    fn test_missing_store_yields_empty_map() {
        let dir = tempfile::tempdir().unwrap();
        let props =
            load_secure_props(dir.path(), Path::new("/nowhere/zowe.config.json")).unwrap();
        assert!(props.is_empty());
    }

    #[test]
    fn test_entries_scoped_to_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("zowe.config.json");
        write_store(
            dir.path(),
            &config_path,
            &[
                ("profiles.lpar1.zosmf.properties.user", "IBMUSER"),
                ("profiles.lpar1.zosmf.properties.password", "SECRET"),
            ],
        );

        let props = load_secure_props(dir.path(), &config_path).unwrap();
        assert_eq!(
            props.get("profiles.lpar1.zosmf.properties.user").unwrap(),
            "IBMUSER"
        );

        // entries for a different config file are invisible
        let other = load_secure_props(dir.path(), Path::new("/elsewhere/zowe.config.json"))
            .unwrap();
        assert!(other.is_empty());
    }

    #[test]
    fn test_corrupt_store_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SECURE_PROPS_FILE), "!!not-base64!!").unwrap();

        let err = load_secure_props(dir.path(), Path::new("/any")).unwrap_err();
        assert!(matches!(err, CoreError::SecureProfileLoadFailed { .. }));
    }
}
