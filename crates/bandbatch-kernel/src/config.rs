//! Configuration loading — batch config, pipeline identity, observation
//! info.
//!
//! Three files define a run: the batch configuration (scheduler directives
//! and the base invocation), the pipeline run configuration (directory
//! roots, under `general:`), and the observation-info JSON the upstream
//! pipeline emitted (per-observation, per-sub-band channel counts).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::dispatch::{BaseInvocation, PipelineIdentity};

/// Batch configuration file.
///
/// ```yaml
/// slurm:
///   job-name: bandbatch
///   time: "12:00:00"
///   mem: 32G
/// pipeline:
///   program: caracal
///   backend: singularity
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchConfig {
    /// Scheduler directive table, one `--key=value` per entry.
    #[serde(default)]
    pub slurm: BTreeMap<String, serde_yaml::Value>,

    /// Base invocation overrides.
    #[serde(default)]
    pub pipeline: PipelineSection,
}

/// `pipeline:` section of the batch configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineSection {
    pub program: String,
    pub backend: String,
}

impl Default for PipelineSection {
    fn default() -> Self {
        Self {
            program: "caracal".to_string(),
            backend: "singularity".to_string(),
        }
    }
}

impl BatchConfig {
    /// Load the batch configuration from a YAML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read batch config from {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse batch config from {}", path.display()))
    }

    /// Render the directive table for the scheduler client, key-sorted so
    /// submissions are reproducible run to run.
    pub fn directives(&self) -> Vec<(String, String)> {
        self.slurm
            .iter()
            .map(|(key, value)| (key.clone(), render_scalar(value)))
            .collect()
    }

    /// Base invocation from the `pipeline:` section, with `extra` tokens
    /// appended for every band.
    pub fn base_invocation(&self, extra: Vec<String>) -> BaseInvocation {
        BaseInvocation {
            program: self.pipeline.program.clone(),
            backend: self.pipeline.backend.clone(),
            extra,
        }
    }
}

/// Render a YAML scalar the way it should appear on a command line.
fn render_scalar(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}

#[derive(Debug, Deserialize)]
struct RunConfigFile {
    general: GeneralSection,
}

#[derive(Debug, Deserialize)]
struct GeneralSection {
    rawdatadir: PathBuf,
    msdir: PathBuf,
    output: PathBuf,
}

impl PipelineIdentity {
    /// Read the directory roots from the pipeline run configuration's
    /// `general` section; the configuration path itself becomes
    /// `config_file`.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path).with_context(|| {
            format!("Failed to read pipeline config from {}", config_path.display())
        })?;
        let parsed: RunConfigFile = serde_yaml::from_str(&content).with_context(|| {
            format!("Failed to parse pipeline config from {}", config_path.display())
        })?;
        Ok(Self {
            raw_data_dir: parsed.general.rawdatadir,
            config_file: config_path.to_path_buf(),
            ms_dir: parsed.general.msdir,
            output_dir: parsed.general.output,
        })
    }
}

/// Channel counts the upstream pipeline recorded per observation and
/// sub-band.
#[derive(Debug, Clone, Deserialize)]
pub struct ObsInfo {
    /// `nchans[obs][spw]`.
    pub nchans: Vec<Vec<i64>>,
}

impl ObsInfo {
    /// Load observation info from a JSON file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read observation info from {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse observation info from {}", path.display()))
    }

    /// Channel count for `(obs, spw)`, if recorded.
    pub fn channel_count(&self, obs: usize, spw: usize) -> Option<i64> {
        self.nchans.get(obs)?.get(spw).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_full_batch_config() {
        let yaml = r#"
slurm:
  time: "12:00:00"
  job-name: deepfield
  cpus-per-task: 8
pipeline:
  program: meerkathi
  backend: docker
"#;
        let config: BatchConfig = serde_yaml::from_str(yaml).expect("parse failed");
        assert_eq!(config.pipeline.program, "meerkathi");
        assert_eq!(config.pipeline.backend, "docker");
        // Directives come out key-sorted, scalars rendered as CLI text.
        assert_eq!(
            config.directives(),
            vec![
                ("cpus-per-task".to_string(), "8".to_string()),
                ("job-name".to_string(), "deepfield".to_string()),
                ("time".to_string(), "12:00:00".to_string()),
            ]
        );
    }

    #[test]
    fn minimal_batch_config_uses_defaults() {
        let config: BatchConfig = serde_yaml::from_str("slurm: {}").expect("parse failed");
        assert!(config.directives().is_empty());
        assert_eq!(config.pipeline.program, "caracal");
        assert_eq!(config.pipeline.backend, "singularity");
    }

    #[test]
    fn batch_config_load_from_reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "slurm:\n  mem: 64G\n").unwrap();
        let config = BatchConfig::load_from(file.path()).unwrap();
        assert_eq!(
            config.directives(),
            vec![("mem".to_string(), "64G".to_string())]
        );
    }

    #[test]
    fn identity_reads_the_general_section() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "general:\n  rawdatadir: /data/raw\n  msdir: /data/ms\n  output: /data/out\n"
        )
        .unwrap();
        let identity = PipelineIdentity::load_from(file.path()).unwrap();
        assert_eq!(identity.raw_data_dir, PathBuf::from("/data/raw"));
        assert_eq!(identity.ms_dir, PathBuf::from("/data/ms"));
        assert_eq!(identity.output_dir, PathBuf::from("/data/out"));
        assert_eq!(identity.config_file, file.path());
    }

    #[test]
    fn identity_load_fails_without_general_section() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "schedule: []\n").unwrap();
        assert!(PipelineIdentity::load_from(file.path()).is_err());
    }

    #[test]
    fn obs_info_indexes_by_observation_and_sub_band() {
        let info: ObsInfo =
            serde_json::from_str(r#"{"nchans": [[4096, 2048], [1024]]}"#).expect("parse failed");
        assert_eq!(info.channel_count(0, 0), Some(4096));
        assert_eq!(info.channel_count(0, 1), Some(2048));
        assert_eq!(info.channel_count(1, 0), Some(1024));
        assert_eq!(info.channel_count(1, 1), None);
        assert_eq!(info.channel_count(2, 0), None);
    }
}
