//! Command-line arguments for the bandbatch driver.

use std::path::PathBuf;

use clap::Parser;

use bandbatch_kernel::partition::PartitionError;
use bandbatch_types::BandSpec;

/// Split a pipeline run over frequency bands and submit one batch job each
#[derive(Parser, Debug)]
#[command(name = "bandbatch")]
#[command(version)]
#[command(about = "Band-partitioned batch submission for a spectral pipeline", long_about = None)]
pub struct Cli {
    /// Pipeline run-configuration file
    pub config: PathBuf,

    /// YAML file with batch scheduler configuration
    #[arg(long = "batch-config")]
    pub batch_config: PathBuf,

    /// Number of frequency bands to split the data into
    #[arg(short = 'n', long = "nband", default_value_t = 1)]
    pub nband: u32,

    /// Comma-separated band tokens, e.g. '0:0~1023,0:1024~2048'; overrides --nband
    #[arg(short = 'b', long = "bands")]
    pub bands: Option<String>,

    /// Comma-separated step indices for the pipeline program to skip
    #[arg(long = "skip")]
    pub skip: Option<String>,

    /// Observation index supplying the channel count
    #[arg(long = "obs", default_value_t = 0)]
    pub obs: usize,

    /// Sub-band (spectral window) index supplying the channel count
    #[arg(long = "spw", default_value_t = 0)]
    pub spw: u32,

    /// Observation-info JSON (default: <output>/obsinfo.json)
    #[arg(long = "obs-info")]
    pub obs_info: Option<PathBuf>,
}

impl Cli {
    /// Resolve the band spec: an explicit `--bands` list wins over `--nband`.
    pub fn band_spec(&self) -> Result<BandSpec, PartitionError> {
        match &self.bands {
            Some(bands) => BandSpec::parse_bands(bands).ok_or_else(|| {
                PartitionError::InvalidBandSpec(format!(
                    "cannot split over {bands:?}; expected comma-separated band tokens"
                ))
            }),
            None => Ok(BandSpec::ByCount(self.nband)),
        }
    }

    /// Tokens forwarded into every sub-job's base invocation.
    pub fn forwarded_tokens(&self) -> Vec<String> {
        match &self.skip {
            Some(skip) => vec!["--skip".to_string(), skip.clone()],
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).expect("args should parse")
    }

    #[test]
    fn bands_override_nband() {
        let cli = parse(&[
            "bandbatch",
            "run.yml",
            "--batch-config",
            "batch.yml",
            "-n",
            "8",
            "-b",
            "0:0~512,0:512~1024",
        ]);
        assert_eq!(
            cli.band_spec().unwrap(),
            BandSpec::ByExplicitBands(vec!["0:0~512".into(), "0:512~1024".into()])
        );
    }

    #[test]
    fn nband_is_the_default_path() {
        let cli = parse(&["bandbatch", "run.yml", "--batch-config", "batch.yml", "-n", "4"]);
        assert_eq!(cli.band_spec().unwrap(), BandSpec::ByCount(4));
    }

    #[test]
    fn blank_bands_are_an_invalid_spec() {
        let cli = parse(&[
            "bandbatch",
            "run.yml",
            "--batch-config",
            "batch.yml",
            "-b",
            " ",
        ]);
        assert!(matches!(
            cli.band_spec(),
            Err(PartitionError::InvalidBandSpec(_))
        ));
    }

    #[test]
    fn skip_is_forwarded_as_two_tokens() {
        let cli = parse(&[
            "bandbatch",
            "run.yml",
            "--batch-config",
            "batch.yml",
            "--skip",
            "2,3",
        ]);
        assert_eq!(cli.forwarded_tokens(), vec!["--skip", "2,3"]);
    }
}
