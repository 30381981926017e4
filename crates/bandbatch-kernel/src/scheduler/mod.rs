//! Scheduler module — the seam between band dispatch and the batch system.
//!
//! [`SchedulerClient`] is the one operation the kernel needs from a batch
//! scheduler: hand it a command string, get back a job handle. The Slurm
//! implementation lives in [`slurm`]; [`testing`] provides in-memory
//! clients for exercising dispatch without a cluster.

mod slurm;
pub mod testing;

pub use slurm::SlurmClient;

use async_trait::async_trait;
use bandbatch_types::JobHandle;
use thiserror::Error;

/// Errors surfaced by a scheduler client.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// The submission command could not be spawned at all.
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The submission command ran and reported failure.
    #[error("{program} exited with status {code}: {stderr}")]
    CommandFailed {
        program: String,
        code: i64,
        stderr: String,
    },

    /// The submission output carried no recognizable job id.
    #[error("no job id found in scheduler output: {0:?}")]
    ParseJobId(String),

    /// The scheduler refused the submission.
    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// A batch scheduler that accepts one command string per job.
///
/// Constructed once per run from the batch configuration; the kernel only
/// submits through it and stores the returned handle. The call blocks until
/// the scheduler has accepted or refused the job — no timeout is imposed
/// here.
#[async_trait]
pub trait SchedulerClient: Send + Sync {
    /// Submit `command` as one batch job and return its handle.
    async fn submit(&self, command: &str) -> Result<JobHandle, SchedulerError>;

    /// One-line description of the client for the audit log.
    fn describe(&self) -> String;
}
