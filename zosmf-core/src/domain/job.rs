//! Job domain types
//!
//! The z/OSMF job REST services return the same full job object for submit,
//! status, and list responses. Field names follow the wire contract, which
//! uses hyphenated keys for a handful of properties.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A job entry as returned by submit, status, and list responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Job ID assigned by JES (e.g., "JOB00042").
    pub jobid: String,
    /// Job name from the JCL job card.
    pub jobname: String,
    /// Owning userid.
    pub owner: String,
    /// Current queue phase.
    pub status: JobStatus,
    /// Job type (JOB, STC, TSU).
    #[serde(rename = "type")]
    pub job_type: JobType,
    /// Execution class, a single character.
    pub class: String,
    /// Return code (e.g., "CC 0000"), null while the job is active.
    pub retcode: Option<String>,
    /// Owning subsystem (JES2 or JES3).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subsystem: Option<String>,
    /// Opaque unique identifier for the job instance.
    #[serde(rename = "job-correlator", skip_serializing_if = "Option::is_none")]
    pub job_correlator: Option<String>,
    /// URL for this job resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// URL to the job's spool files.
    #[serde(rename = "files-url", skip_serializing_if = "Option::is_none")]
    pub files_url: Option<String>,
    /// Current phase number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<i32>,
    /// Human-readable phase description.
    #[serde(rename = "phase-name", skip_serializing_if = "Option::is_none")]
    pub phase_name: Option<String>,
    /// Why the job is not running, when applicable.
    #[serde(rename = "reason-not-running", skip_serializing_if = "Option::is_none")]
    pub reason_not_running: Option<String>,
}

/// Job queue phase as reported by z/OSMF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JobStatus {
    /// Awaiting conversion or execution.
    Input,
    /// Actively executing.
    Active,
    /// Finished, output on the spool.
    Output,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JobStatus::Input => "INPUT",
            JobStatus::Active => "ACTIVE",
            JobStatus::Output => "OUTPUT",
        };
        f.write_str(s)
    }
}

/// Job type as reported by z/OSMF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JobType {
    /// Batch job.
    Job,
    /// Started task.
    Stc,
    /// Time-sharing user.
    Tsu,
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JobType::Job => "JOB",
            JobType::Stc => "STC",
            JobType::Tsu => "TSU",
        };
        f.write_str(s)
    }
}

/// A spool file entry for a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpoolFile {
    /// Job ID this spool file belongs to.
    pub jobid: String,
    /// Job name.
    pub jobname: String,
    /// Spool file numeric ID, unique within the job.
    pub id: u32,
    /// DD name that produced the file.
    pub ddname: String,
    /// Step name, when attributable to a step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stepname: Option<String>,
    /// Proc step name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub procstep: Option<String>,
    /// Output class.
    pub class: String,
    /// Record format (F, FB, V, VB, U).
    pub recfm: String,
    /// Logical record length.
    pub lrecl: u32,
    /// Total bytes in the file.
    #[serde(rename = "byte-count")]
    pub byte_count: u64,
    /// Total records in the file.
    #[serde(rename = "record-count")]
    pub record_count: u64,
    /// URL to fetch the file's records.
    #[serde(rename = "records-url", skip_serializing_if = "Option::is_none")]
    pub records_url: Option<String>,
}
