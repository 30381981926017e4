//! Test clients for exercising dispatch without a batch system.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bandbatch_types::JobHandle;
use tokio::sync::Mutex;

use super::{SchedulerClient, SchedulerError};

/// Client that accepts everything and echoes the submitted command back as
/// the job handle. Records every submission in order.
pub struct EchoClient {
    submitted: Mutex<Vec<String>>,
}

impl EchoClient {
    pub fn new() -> Self {
        Self {
            submitted: Mutex::new(Vec::new()),
        }
    }

    /// Commands seen so far, in submission order.
    pub async fn submissions(&self) -> Vec<String> {
        self.submitted.lock().await.clone()
    }
}

impl Default for EchoClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchedulerClient for EchoClient {
    async fn submit(&self, command: &str) -> Result<JobHandle, SchedulerError> {
        self.submitted.lock().await.push(command.to_string());
        Ok(JobHandle(command.to_string()))
    }

    fn describe(&self) -> String {
        "echo".to_string()
    }
}

/// Client that fails at a configured submission index (0-based), accepting
/// everything before it.
pub struct FailingClient {
    fail_at: usize,
    attempts: AtomicUsize,
}

impl FailingClient {
    pub fn new(fail_at: usize) -> Self {
        Self {
            fail_at,
            attempts: AtomicUsize::new(0),
        }
    }

    /// How many submissions were attempted, including the failing one.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SchedulerClient for FailingClient {
    async fn submit(&self, _command: &str) -> Result<JobHandle, SchedulerError> {
        let index = self.attempts.fetch_add(1, Ordering::SeqCst);
        if index == self.fail_at {
            return Err(SchedulerError::Rejected(format!(
                "injected failure at submission {index}"
            )));
        }
        Ok(JobHandle(format!("job-{index}")))
    }

    fn describe(&self) -> String {
        format!("failing at {}", self.fail_at)
    }
}
