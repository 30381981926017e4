//! bandbatch-kernel: the core of bandbatch.
//!
//! This crate provides:
//!
//! - **Partition**: split a channel range into band windows and attach
//!   per-band extra options
//! - **Dispatch**: assemble one full pipeline command per band and submit it
//! - **Scheduler**: the scheduler-client seam, with a Slurm implementation
//!   and in-memory test clients
//! - **Config**: batch configuration, pipeline identity, observation info

pub mod config;
pub mod dispatch;
pub mod partition;
pub mod scheduler;

pub use config::{BatchConfig, ObsInfo};
pub use dispatch::{BaseInvocation, DispatchError, JobDispatcher, PipelineIdentity};
pub use partition::{partition, PartitionError};
pub use scheduler::{SchedulerClient, SchedulerError, SlurmClient};
