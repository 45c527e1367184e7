//! Configuration module
//!
//! Resolves connection settings from CLI overrides or the team
//! configuration. When host, user, and password are all given explicitly
//! the profile store is not consulted.

use anyhow::{Context, Result};
use tracing::debug;
use zosmf_client::ZosmfClient;
use zosmf_core::{ProfileManager, ZosmfProfile};

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Profile type resolved from the team configuration
    pub profile_type: String,
    /// Host override
    pub host: Option<String>,
    /// Port for the host override
    pub port: u16,
    /// Userid override
    pub user: Option<String>,
    /// Password override
    pub password: Option<String>,
    /// Skip TLS certificate verification
    pub insecure: bool,
}

impl Config {
    /// Build a client from the overrides when complete, else from the
    /// profile store.
    pub fn client(&self) -> Result<ZosmfClient> {
        if let (Some(host), Some(user), Some(password)) =
            (&self.host, &self.user, &self.password)
        {
            let profile = ZosmfProfile {
                host: host.clone(),
                port: self.port,
                user: user.clone(),
                password: password.clone(),
                protocol: "https".to_string(),
                reject_unauthorized: !self.insecure,
            };
            return ZosmfClient::from_profile(&profile)
                .context("failed to build client from connection overrides");
        }

        debug!(profile_type = %self.profile_type, "resolving connection from the profile store");
        let profile = ProfileManager::new()
            .load(&self.profile_type)
            .with_context(|| {
                format!("failed to load a '{}' profile", self.profile_type)
            })?;
        let mut zosmf = ZosmfProfile::from_profile(&profile)
            .with_context(|| format!("profile '{}' is incomplete", profile.name))?;
        if self.insecure {
            zosmf.reject_unauthorized = false;
        }

        ZosmfClient::from_profile(&zosmf).context("failed to build client from profile")
    }
}
