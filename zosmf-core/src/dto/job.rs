//! Job DTOs for the z/OSMF job REST services

use serde::{Deserialize, Serialize};

/// Request body for submitting a JCL source held in a cataloged dataset or
/// partitioned dataset member.
///
/// z/OSMF expects the dataset reference in JCL DD syntax, e.g.
/// `//'IBMUSER.TESTS.JCL(IEFBR14)'`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitFromDataset {
    /// Dataset reference, including the surrounding `//'...'`.
    pub file: String,
}

impl SubmitFromDataset {
    /// Build the request body from a plain dataset name such as
    /// `IBMUSER.TESTS.JCL(IEFBR14)`.
    pub fn new(dataset: &str) -> Self {
        Self {
            file: format!("//'{}'", dataset),
        }
    }
}

/// Action requested against a queued or finished job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobActionKind {
    Hold,
    Release,
    Cancel,
}

/// Request body for hold/release/cancel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobActionRequest {
    /// Requested action.
    pub request: JobActionKind,
    /// Request format version. "2.0" selects the synchronous form that
    /// returns a feedback document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl JobActionRequest {
    pub fn new(request: JobActionKind) -> Self {
        Self {
            request,
            version: Some("2.0".to_string()),
        }
    }
}

/// Request body for changing a job's execution class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeClassRequest {
    /// The new execution class, a single character.
    pub class: String,
}

impl ChangeClassRequest {
    pub fn new(class: char) -> Self {
        Self {
            class: class.to_string(),
        }
    }
}

/// Feedback document returned by job actions, class changes, and purge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobFeedback {
    /// Job ID.
    pub jobid: String,
    /// Job name.
    pub jobname: String,
    /// Status code, 0 on success.
    pub status: i32,
    /// Feedback message.
    pub message: String,
    /// Original job ID when the action re-queued the job.
    #[serde(rename = "original-jobid", skip_serializing_if = "Option::is_none")]
    pub original_jobid: Option<String>,
    /// Job owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// System member that processed the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<String>,
    /// System name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sysname: Option<String>,
    /// Job correlator.
    #[serde(rename = "job-correlator", skip_serializing_if = "Option::is_none")]
    pub job_correlator: Option<String>,
    /// Subsystem internal reason code.
    #[serde(rename = "internal-code", skip_serializing_if = "Option::is_none")]
    pub internal_code: Option<String>,
}

/// Query parameters for the job list service.
///
/// Serializes directly into the query string; hyphenated parameter names
/// follow the wire contract.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListJobsParams {
    /// Filter by owning userid. Defaults to the session user on the server
    /// side when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Job name prefix filter, supports a trailing `*` wildcard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Maximum number of jobs to return.
    #[serde(rename = "max-jobs", skip_serializing_if = "Option::is_none")]
    pub max_jobs: Option<u32>,
    /// Filter by user correlator.
    #[serde(rename = "user-correlator", skip_serializing_if = "Option::is_none")]
    pub user_correlator: Option<String>,
}

impl ListJobsParams {
    /// Filter by owning userid.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Filter by job name prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Cap the number of returned jobs.
    pub fn with_max_jobs(mut self, max_jobs: u32) -> Self {
        self.max_jobs = Some(max_jobs);
        self
    }
}
