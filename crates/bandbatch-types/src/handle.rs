//! Job handles returned by the batch scheduler.

use std::fmt;

/// Opaque identifier for one submitted batch job.
///
/// The scheduler owns the meaning (for Slurm this is the decimal job id);
/// this side only stores, orders, and logs it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobHandle(pub String);

impl fmt::Display for JobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobHandle {
    fn from(s: &str) -> Self {
        JobHandle(s.to_string())
    }
}

impl From<String> for JobHandle {
    fn from(s: String) -> Self {
        JobHandle(s)
    }
}

/// Audit record for one submitted band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedJob {
    /// Band token the job covers.
    pub band: String,
    /// Full command string handed to the scheduler.
    pub command: String,
    /// Handle the scheduler returned.
    pub handle: JobHandle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_displays_its_token() {
        assert_eq!(JobHandle::from("4217").to_string(), "4217");
    }
}
