//! Slurm client — one `sbatch --wrap` invocation per band command.

use async_trait::async_trait;
use bandbatch_types::JobHandle;
use tokio::process::Command;

use super::{SchedulerClient, SchedulerError};

/// Submits jobs through the local `sbatch` binary.
///
/// Directives come straight from the batch configuration's `slurm` table:
/// each `key: value` pair becomes `--key=value`, ahead of the wrapped
/// command. The directive keys are opaque here — whatever `sbatch` accepts.
pub struct SlurmClient {
    program: String,
    directives: Vec<(String, String)>,
}

impl SlurmClient {
    /// Client for the given directive table, submitting via `sbatch`.
    pub fn new(directives: Vec<(String, String)>) -> Self {
        Self {
            program: "sbatch".to_string(),
            directives,
        }
    }

    /// Argument list for one submission.
    fn args(&self, command: &str) -> Vec<String> {
        let mut args: Vec<String> = self
            .directives
            .iter()
            .map(|(key, value)| format!("--{key}={value}"))
            .collect();
        args.push(format!("--wrap={command}"));
        args
    }
}

/// Extract the job id from Slurm's `Submitted batch job <n>` line.
fn parse_job_id(output: &str) -> Option<u64> {
    output
        .lines()
        .find_map(|line| line.trim().strip_prefix("Submitted batch job"))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|id| id.parse().ok())
}

#[async_trait]
impl SchedulerClient for SlurmClient {
    async fn submit(&self, command: &str) -> Result<JobHandle, SchedulerError> {
        let output = Command::new(&self.program)
            .args(self.args(command))
            .output()
            .await
            .map_err(|source| SchedulerError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SchedulerError::CommandFailed {
                program: self.program.clone(),
                code: i64::from(output.status.code().unwrap_or(1)),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let id = parse_job_id(&stdout)
            .ok_or_else(|| SchedulerError::ParseJobId(stdout.trim().to_string()))?;
        Ok(JobHandle(id.to_string()))
    }

    fn describe(&self) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(
            self.directives
                .iter()
                .map(|(key, value)| format!("--{key}={value}")),
        );
        parts.join(" ")
    }
}
