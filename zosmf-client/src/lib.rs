//! z/OSMF HTTP Client
//!
//! A type-safe HTTP client for the z/OSMF job REST services.
//!
//! This crate provides the `Jobs` surface of the SDK: submitting JCL from a
//! dataset, a local file, or inline text; polling job status; listing jobs;
//! and managing a job's lifecycle (class change, hold, release, cancel,
//! purge, spool access).
//!
//! # Example
//!
//! ```no_run
//! use zosmf_client::ZosmfClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ZosmfClient::new("https://mf.example.com:443", "IBMUSER", "SECRET");
//!
//!     let job = client
//!         .submit_plaintext("//TESTJOB  JOB (ACCT),'TEST',CLASS=A\n//STEP1 EXEC PGM=IEFBR14\n")
//!         .await?;
//!
//!     println!("Submitted {} as {}", job.jobname, job.jobid);
//!     Ok(())
//! }
//! ```

pub mod error;
mod api;
mod jobs;

// Re-export commonly used types
pub use api::JobsApi;
pub use error::{ClientError, Result};
pub use zosmf_core::domain::job::{Job, JobStatus, JobType, SpoolFile};
pub use zosmf_core::dto::job::{JobFeedback, ListJobsParams};

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use zosmf_core::ZosmfProfile;

/// CSRF guard header z/OSMF requires on every REST request.
const CSRF_HEADER: &str = "X-CSRF-ZOSMF-HEADER";

/// HTTP client for the z/OSMF job REST services
///
/// Every request carries HTTP basic authentication and the z/OSMF CSRF
/// header. The client is cheap to clone; clones share the underlying
/// connection pool.
#[derive(Debug, Clone)]
pub struct ZosmfClient {
    /// Base URL of the z/OSMF endpoint (e.g., "https://mf.example.com:443")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Userid for basic authentication
    user: String,
    /// Password for basic authentication
    password: String,
}

impl ZosmfClient {
    /// Create a new z/OSMF client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the z/OSMF endpoint
    /// * `user` - Userid for basic authentication
    /// * `password` - Password for basic authentication
    ///
    /// # Example
    /// ```
    /// use zosmf_client::ZosmfClient;
    ///
    /// let client = ZosmfClient::new("https://mf.example.com:443", "IBMUSER", "SECRET");
    /// ```
    pub fn new(
        base_url: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            user: user.into(),
            password: password.into(),
        }
    }

    /// Create a new z/OSMF client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use zosmf_client::ZosmfClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ZosmfClient::with_client(
    ///     "https://mf.example.com:443",
    ///     "IBMUSER",
    ///     "SECRET",
    ///     http_client,
    /// );
    /// ```
    pub fn with_client(
        base_url: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            user: user.into(),
            password: password.into(),
        }
    }

    /// Create a client from a loaded z/OSMF connection profile
    ///
    /// Honors the profile's protocol, port, and certificate-verification
    /// settings.
    pub fn from_profile(profile: &ZosmfProfile) -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(!profile.reject_unauthorized)
            .build()
            .map_err(|e| ClientError::InternalError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(
            profile.base_url(),
            profile.user.clone(),
            profile.password.clone(),
            client,
        ))
    }

    /// Get the base URL of the z/OSMF endpoint
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a request with the auth and CSRF headers every z/OSMF call needs.
    pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .basic_auth(&self.user, Some(&self.password))
            .header(CSRF_HEADER, "true")
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the
    /// request failed, or deserializes the response body if successful.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body is plain text (spool records)
    pub(crate) async fn handle_text_response(&self, response: reqwest::Response) -> Result<String> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .text()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to read response body: {}", e)))
    }
}
