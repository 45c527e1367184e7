//! Commands module
//!
//! Defines all CLI commands and routes them to their handlers.

mod job;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Submit a job from a local JCL file, a dataset member, or inline text
    Submit {
        /// Local JCL file to submit
        file: Option<PathBuf>,

        /// Submit a cataloged dataset or PDS member instead
        #[arg(long, conflicts_with = "file")]
        dataset: Option<String>,

        /// Submit inline JCL text instead
        #[arg(long, conflicts_with_all = ["file", "dataset"])]
        text: Option<String>,
    },
    /// Show the status of a job
    Status {
        /// Job name from the JCL job card
        jobname: String,
        /// JES job ID (e.g., JOB00042)
        jobid: String,
    },
    /// List jobs on the spool
    List {
        /// Filter by owning userid
        #[arg(long)]
        owner: Option<String>,

        /// Filter by job name prefix (supports a trailing *)
        #[arg(long)]
        prefix: Option<String>,

        /// Maximum number of jobs to return
        #[arg(long)]
        max_jobs: Option<u32>,
    },
    /// Change a job's execution class
    Class {
        jobname: String,
        jobid: String,
        /// New execution class, a single character
        class: char,
    },
    /// Hold a job on the input queue
    Hold { jobname: String, jobid: String },
    /// Release a held job
    Release { jobname: String, jobid: String },
    /// Cancel a job
    Cancel { jobname: String, jobid: String },
    /// Purge a job and its output from the spool
    Purge { jobname: String, jobid: String },
    /// List a job's spool files, or read one with --id
    Spool {
        jobname: String,
        jobid: String,

        /// Spool file ID to read
        #[arg(long)]
        id: Option<u32>,
    },
}

/// Handle a CLI command
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    job::handle_job_command(command, config).await
}
