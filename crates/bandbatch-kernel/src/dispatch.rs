//! Band dispatch — one scheduler job per band window.
//!
//! [`JobDispatcher`] owns everything needed to materialize a band's job:
//! the pipeline identity (data, config, and directory roots), the resolved
//! partition, the base invocation, and the scheduler client. Submission is
//! strictly sequential and fail-fast: bands go out in ascending order and
//! the first scheduler error stops the run.
//!
//! ```text
//! Partition ──▶ for each band i:
//!                 label = bands[i].label()
//!                 command = base ++ dirs(label) ++ runs[i] ++ band flag
//!                 handle  = client.submit(command)
//!               ──▶ [JobHandle; nbands]  (submission order)
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use bandbatch_types::{JobHandle, Partition, SubmittedJob};
use thiserror::Error;
use tracing::info;

use crate::scheduler::{SchedulerClient, SchedulerError};

/// Flag that hands a band token to the pipeline's split stage.
const BAND_SELECT_FLAG: &str = "--transform-split_field-spw";

/// Where the pipeline reads and writes for this run.
///
/// Passed in whole at construction; nothing here is read from ambient
/// context.
#[derive(Debug, Clone)]
pub struct PipelineIdentity {
    /// Directory holding the raw measurement sets.
    pub raw_data_dir: PathBuf,
    /// Pipeline run-configuration file.
    pub config_file: PathBuf,
    /// Root under which per-band working directories are created.
    pub ms_dir: PathBuf,
    /// Root under which per-band output directories are created.
    pub output_dir: PathBuf,
}

/// Program and execution backend opening every band command.
#[derive(Debug, Clone)]
pub struct BaseInvocation {
    /// Pipeline executable name.
    pub program: String,
    /// Value for the `--general-backend` flag.
    pub backend: String,
    /// Extra tokens appended to the base invocation for every band
    /// (e.g. a forwarded `--skip` list).
    pub extra: Vec<String>,
}

impl Default for BaseInvocation {
    fn default() -> Self {
        Self {
            program: "caracal".to_string(),
            backend: "singularity".to_string(),
            extra: Vec::new(),
        }
    }
}

/// Submission failure for one band.
///
/// Carries the band token and the fully assembled command so the failure
/// can be diagnosed and resubmitted by hand.
#[derive(Debug, Error)]
#[error("submitting band {band} failed (command: {command}): {source}")]
pub struct DispatchError {
    pub band: String,
    pub command: String,
    #[source]
    pub source: SchedulerError,
}

/// Materializes and submits one scheduler job per band.
pub struct JobDispatcher {
    identity: PipelineIdentity,
    invocation: BaseInvocation,
    partition: Partition,
    client: Arc<dyn SchedulerClient>,
    jobs: Vec<SubmittedJob>,
}

impl JobDispatcher {
    pub fn new(
        identity: PipelineIdentity,
        invocation: BaseInvocation,
        partition: Partition,
        client: Arc<dyn SchedulerClient>,
    ) -> Self {
        Self {
            identity,
            invocation,
            partition,
            client,
            jobs: Vec::new(),
        }
    }

    /// Tokens shared by every band command.
    fn base_tokens(&self) -> Vec<String> {
        let mut tokens = vec![
            self.invocation.program.clone(),
            "--general-backend".to_string(),
            self.invocation.backend.clone(),
            "--general-rawdatadir".to_string(),
            self.identity.raw_data_dir.display().to_string(),
            "--config".to_string(),
            self.identity.config_file.display().to_string(),
        ];
        tokens.extend(self.invocation.extra.iter().cloned());
        tokens
    }

    /// Full command string for band `index`.
    fn band_command(&self, index: usize) -> String {
        let band = &self.partition.bands()[index];
        let label = band.label();

        let mut tokens = self.base_tokens();
        tokens.push("--general-output".to_string());
        tokens.push(self.identity.output_dir.join(&label).display().to_string());
        tokens.push("--general-msdir".to_string());
        tokens.push(self.identity.ms_dir.join(&label).display().to_string());
        tokens.extend(self.partition.runs()[index].iter().cloned());
        tokens.push(BAND_SELECT_FLAG.to_string());
        tokens.push(format!("'{}'", band.token()));
        tokens.join(" ")
    }

    /// Submit every band, in ascending order, stopping at the first
    /// scheduler error. Returns the handles in submission order, aligned
    /// with the partition's bands.
    pub async fn submit(&mut self) -> Result<Vec<JobHandle>, DispatchError> {
        info!(
            scheduler = %self.client.describe(),
            nbands = self.partition.nbands(),
            "submitting band jobs"
        );

        for index in 0..self.partition.nbands() {
            let band = self.partition.bands()[index].token().to_string();
            let command = self.band_command(index);
            let handle = self
                .client
                .submit(&command)
                .await
                .map_err(|source| DispatchError {
                    band: band.clone(),
                    command: command.clone(),
                    source,
                })?;
            let job = SubmittedJob {
                band,
                command,
                handle,
            };
            info!(band = %job.band, handle = %job.handle, command = %job.command, "band job submitted");
            self.jobs.push(job);
        }

        Ok(self.jobs.iter().map(|job| job.handle.clone()).collect())
    }

    /// Jobs submitted so far, in submission order. After a failed
    /// [`Self::submit`] this holds the bands that did go out.
    pub fn jobs(&self) -> &[SubmittedJob] {
        &self.jobs
    }
}
