//! Partitioning of a channel range into band windows.
//!
//! [`partition`] is the single entry point: given the total channel count
//! and a [`BandSpec`], it returns a fully-formed [`Partition`] with the
//! per-band extra options already rendered and index-aligned. Pure data in,
//! pure data out — no I/O, no intermediate state.

use bandbatch_types::{BandSpec, BandWindow, Partition, RunOptions};
use thiserror::Error;

/// Errors raised while building a partition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PartitionError {
    /// Total channel count was zero or negative.
    #[error("invalid channel count {0}; expected a positive number of channels")]
    InvalidChannelCount(i64),

    /// The band spec cannot describe at least one band.
    #[error("invalid band spec: {0}")]
    InvalidBandSpec(String),

    /// A run-options entry referenced a band outside the partition.
    #[error("run options index {index} out of range for {nbands} bands")]
    IndexOutOfRange { index: usize, nbands: usize },
}

/// Split `total_channels` channels of sub-band `spw` according to `spec`,
/// attaching rendered extra options from `runs`.
///
/// Counted windows all share width `total_channels / nband` (floor
/// division), window `i` spanning `[i*width, (i+1)*width)`. The last
/// window's upper edge is `nband * width`: when the count does not divide
/// evenly it is left unclamped, and the remainder channels fall to the
/// downstream band-selection semantics rather than to a widened final
/// window.
///
/// Explicit tokens are taken verbatim — no arithmetic, no coverage or
/// overlap checks; `spw` is ignored for them.
pub fn partition(
    total_channels: i64,
    spw: u32,
    spec: &BandSpec,
    runs: &[RunOptions],
) -> Result<Partition, PartitionError> {
    if total_channels <= 0 {
        return Err(PartitionError::InvalidChannelCount(total_channels));
    }

    let bands: Vec<BandWindow> = match spec {
        BandSpec::ByCount(0) => {
            return Err(PartitionError::InvalidBandSpec(
                "band count must be at least 1".into(),
            ))
        }
        BandSpec::ByCount(nband) => {
            let nband = i64::from(*nband);
            let width = total_channels / nband;
            (0..nband)
                .map(|i| BandWindow::from_edges(spw, i * width, (i + 1) * width))
                .collect()
        }
        BandSpec::ByExplicitBands(tokens) if tokens.is_empty() => {
            return Err(PartitionError::InvalidBandSpec(
                "explicit band list is empty".into(),
            ))
        }
        BandSpec::ByExplicitBands(tokens) => tokens
            .iter()
            .map(|token| BandWindow::from_token(token.as_str()))
            .collect(),
    };

    let mut rendered: Vec<Vec<String>> = vec![Vec::new(); bands.len()];
    for run in runs {
        if run.index >= bands.len() {
            return Err(PartitionError::IndexOutOfRange {
                index: run.index,
                nbands: bands.len(),
            });
        }
        rendered[run.index] = run.render();
    }

    Ok(Partition::new(bands, rendered))
}
