//! Job command handlers
//!
//! Handles all job-related CLI commands: submission, status, listing, and
//! lifecycle actions.

use std::path::PathBuf;

use anyhow::{Result, bail};
use colored::*;
use zosmf_client::{Job, JobFeedback, JobStatus, ListJobsParams, ZosmfClient};

use crate::commands::Commands;
use crate::config::Config;

/// Handle job commands
///
/// Routes job subcommands to their respective handlers.
pub async fn handle_job_command(command: Commands, config: &Config) -> Result<()> {
    let client = config.client()?;

    match command {
        Commands::Submit {
            file,
            dataset,
            text,
        } => submit(&client, file, dataset, text).await,
        Commands::Status { jobname, jobid } => status(&client, &jobname, &jobid).await,
        Commands::List {
            owner,
            prefix,
            max_jobs,
        } => list(&client, owner, prefix, max_jobs).await,
        Commands::Class {
            jobname,
            jobid,
            class,
        } => {
            let feedback = client.change_job_class(&jobname, &jobid, class).await?;
            print_feedback("class change", &feedback);
            Ok(())
        }
        Commands::Hold { jobname, jobid } => {
            let feedback = client.hold_job(&jobname, &jobid).await?;
            print_feedback("hold", &feedback);
            Ok(())
        }
        Commands::Release { jobname, jobid } => {
            let feedback = client.release_job(&jobname, &jobid).await?;
            print_feedback("release", &feedback);
            Ok(())
        }
        Commands::Cancel { jobname, jobid } => {
            let feedback = client.cancel_job(&jobname, &jobid).await?;
            print_feedback("cancel", &feedback);
            Ok(())
        }
        Commands::Purge { jobname, jobid } => {
            let feedback = client.purge_job(&jobname, &jobid).await?;
            print_feedback("purge", &feedback);
            Ok(())
        }
        Commands::Spool { jobname, jobid, id } => spool(&client, &jobname, &jobid, id).await,
    }
}

/// Submit from whichever source was given
async fn submit(
    client: &ZosmfClient,
    file: Option<PathBuf>,
    dataset: Option<String>,
    text: Option<String>,
) -> Result<()> {
    let job = if let Some(dataset) = dataset {
        client.submit_from_dataset(&dataset).await?
    } else if let Some(text) = text {
        client.submit_plaintext(&text).await?
    } else if let Some(file) = file {
        client.submit_from_local_file(&file).await?
    } else {
        bail!("provide a JCL file, --dataset, or --text");
    };

    println!(
        "{}",
        format!("Submitted {} as {}", job.jobname, job.jobid).bold()
    );
    print_job_summary(&job);
    Ok(())
}

/// Show one job's status
async fn status(client: &ZosmfClient, jobname: &str, jobid: &str) -> Result<()> {
    let job = client.job_status(jobname, jobid).await?;
    print_job_details(&job);
    Ok(())
}

/// List jobs matching the filters
async fn list(
    client: &ZosmfClient,
    owner: Option<String>,
    prefix: Option<String>,
    max_jobs: Option<u32>,
) -> Result<()> {
    let mut params = ListJobsParams::default();
    if let Some(owner) = owner {
        params = params.with_owner(owner);
    }
    if let Some(prefix) = prefix {
        params = params.with_prefix(prefix);
    }
    if let Some(max_jobs) = max_jobs {
        params = params.with_max_jobs(max_jobs);
    }

    let jobs = client.list_jobs(&params).await?;

    if jobs.is_empty() {
        println!("{}", "No jobs found.".yellow());
    } else {
        println!("{}", format!("Found {} job(s):", jobs.len()).bold());
        println!();
        for job in jobs {
            print_job_summary(&job);
        }
    }

    Ok(())
}

/// List spool files, or print one file's records
async fn spool(
    client: &ZosmfClient,
    jobname: &str,
    jobid: &str,
    id: Option<u32>,
) -> Result<()> {
    if let Some(id) = id {
        let records = client.spool_file_contents(jobname, jobid, id).await?;
        print!("{}", records);
        return Ok(());
    }

    let files = client.spool_files(jobname, jobid).await?;
    if files.is_empty() {
        println!("{}", "No spool files found.".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Spool files for {} {}:", jobname, jobid).bold()
    );
    for file in files {
        println!(
            "  {} {:>4}  {:<8} {:<8} {:>8} records",
            "▸".cyan(),
            file.id,
            file.ddname,
            file.stepname.as_deref().unwrap_or("-").dimmed(),
            file.record_count,
        );
    }
    Ok(())
}

/// Print a job summary
fn print_job_summary(job: &Job) {
    println!("  {} {} {}", "▸".cyan(), job.jobname.bold(), job.jobid.dimmed());
    println!("    Owner:  {}", job.owner.dimmed());
    println!("    Status: {}", colorize_status(&job.status));
    println!("    Class:  {}", job.class);
    if let Some(retcode) = &job.retcode {
        println!("    Result: {}", retcode);
    }
    println!();
}

/// Print detailed job information
fn print_job_details(job: &Job) {
    println!("{}", "Job Details:".bold());
    println!("  Name:      {}", job.jobname.cyan());
    println!("  ID:        {}", job.jobid);
    println!("  Owner:     {}", job.owner);
    println!("  Type:      {}", job.job_type);
    println!("  Status:    {}", colorize_status(&job.status));
    println!("  Class:     {}", job.class);

    if let Some(retcode) = &job.retcode {
        println!("  Result:    {}", retcode);
    }
    if let Some(phase_name) = &job.phase_name {
        println!("  Phase:     {}", phase_name.dimmed());
    }
    if let Some(reason) = &job.reason_not_running {
        println!("  Waiting:   {}", reason.yellow());
    }
    if let Some(correlator) = &job.job_correlator {
        println!("  Correlator: {}", correlator.dimmed());
    }
}

/// Print the feedback from a lifecycle action
fn print_feedback(action: &str, feedback: &JobFeedback) {
    if feedback.status == 0 {
        println!(
            "{}",
            format!(
                "{} {} {}: {}",
                feedback.jobname, feedback.jobid, action, feedback.message
            )
            .green()
        );
    } else {
        println!(
            "{}",
            format!(
                "{} {} {} failed (status {}): {}",
                feedback.jobname, feedback.jobid, action, feedback.status, feedback.message
            )
            .red()
        );
    }
}

/// Color a status the way operators read the queues
fn colorize_status(status: &JobStatus) -> ColoredString {
    match status {
        JobStatus::Input => status.to_string().yellow(),
        JobStatus::Active => status.to_string().cyan(),
        JobStatus::Output => status.to_string().green(),
    }
}
