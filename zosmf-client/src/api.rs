//! Capability seam for the job operations
//!
//! Code that drives job workflows (the CLI, test harnesses) takes a
//! `JobsApi` rather than the concrete client, so an in-memory fake can
//! stand in where no z/OSMF endpoint is reachable.

use std::path::Path;

use async_trait::async_trait;

use zosmf_core::domain::job::Job;
use zosmf_core::dto::job::{JobFeedback, ListJobsParams};

use crate::ZosmfClient;
use crate::error::Result;

/// The job operations a z/OSMF jobs backend provides.
#[async_trait]
pub trait JobsApi: Send + Sync {
    /// Submit a job from JCL held in a cataloged dataset or PDS member.
    async fn submit_from_dataset(&self, dataset: &str) -> Result<Job>;

    /// Submit a job from a JCL file on the local filesystem.
    async fn submit_from_local_file(&self, path: &Path) -> Result<Job>;

    /// Submit inline JCL source.
    async fn submit_plaintext(&self, jcl: &str) -> Result<Job>;

    /// Get the current status of a job.
    async fn job_status(&self, jobname: &str, jobid: &str) -> Result<Job>;

    /// List jobs on the JES spool.
    async fn list_jobs(&self, params: &ListJobsParams) -> Result<Vec<Job>>;

    /// Change a job's execution class.
    async fn change_job_class(
        &self,
        jobname: &str,
        jobid: &str,
        class: char,
    ) -> Result<JobFeedback>;
}

#[async_trait]
impl JobsApi for ZosmfClient {
    async fn submit_from_dataset(&self, dataset: &str) -> Result<Job> {
        ZosmfClient::submit_from_dataset(self, dataset).await
    }

    async fn submit_from_local_file(&self, path: &Path) -> Result<Job> {
        ZosmfClient::submit_from_local_file(self, path).await
    }

    async fn submit_plaintext(&self, jcl: &str) -> Result<Job> {
        ZosmfClient::submit_plaintext(self, jcl).await
    }

    async fn job_status(&self, jobname: &str, jobid: &str) -> Result<Job> {
        ZosmfClient::job_status(self, jobname, jobid).await
    }

    async fn list_jobs(&self, params: &ListJobsParams) -> Result<Vec<Job>> {
        ZosmfClient::list_jobs(self, params).await
    }

    async fn change_job_class(
        &self,
        jobname: &str,
        jobid: &str,
        class: char,
    ) -> Result<JobFeedback> {
        ZosmfClient::change_job_class(self, jobname, jobid, class).await
    }
}
