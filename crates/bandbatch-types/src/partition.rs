//! Partitions — ordered band windows plus aligned per-band option tokens.

use crate::band::BandWindow;

/// How to split the channel range.
///
/// Exactly two shapes exist; anything else is unrepresentable. The dynamic
/// entry point is [`BandSpec::parse_bands`], which handles the command
/// line's comma-separated form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BandSpec {
    /// Split into this many equal-width windows.
    ByCount(u32),
    /// Use these band tokens verbatim, one window per token.
    ByExplicitBands(Vec<String>),
}

impl BandSpec {
    /// Parse the comma-separated command-line form, e.g.
    /// `"0:0~1023,0:1024~2048"`.
    ///
    /// Returns `None` when the string holds no tokens or a blank one; a
    /// plain word like `"foo"` still parses as a single explicit token —
    /// explicit bands are never validated beyond being non-empty.
    pub fn parse_bands(s: &str) -> Option<Self> {
        let tokens: Vec<String> = s.split(',').map(|t| t.trim().to_string()).collect();
        if tokens.iter().any(|t| t.is_empty()) {
            return None;
        }
        Some(BandSpec::ByExplicitBands(tokens))
    }
}

/// The full set of bands plus aligned per-band extra options for one run.
///
/// Immutable once built: `runs()[i]` holds the rendered extra-option tokens
/// for `bands()[i]`, empty when none were supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    bands: Vec<BandWindow>,
    runs: Vec<Vec<String>>,
}

impl Partition {
    /// Build from aligned columns. `runs` must be index-aligned with
    /// `bands`; the partitioner is the intended caller.
    pub fn new(bands: Vec<BandWindow>, runs: Vec<Vec<String>>) -> Self {
        debug_assert_eq!(bands.len(), runs.len());
        Self { bands, runs }
    }

    /// Number of bands.
    pub fn nbands(&self) -> usize {
        self.bands.len()
    }

    /// Band windows, in order.
    pub fn bands(&self) -> &[BandWindow] {
        &self.bands
    }

    /// Rendered extra-option tokens, index-aligned with [`Self::bands`].
    pub fn runs(&self) -> &[Vec<String>] {
        &self.runs
    }

    /// Iterate bands with their option tokens.
    pub fn iter(&self) -> impl Iterator<Item = (&BandWindow, &[String])> {
        self.bands
            .iter()
            .zip(self.runs.iter().map(|tokens| tokens.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bands_splits_on_commas() {
        let spec = BandSpec::parse_bands("0:0~1023,0:1024~2048").unwrap();
        assert_eq!(
            spec,
            BandSpec::ByExplicitBands(vec!["0:0~1023".into(), "0:1024~2048".into()])
        );
    }

    #[test]
    fn parse_bands_trims_whitespace() {
        let spec = BandSpec::parse_bands("0:0~512, 0:512~1024").unwrap();
        assert_eq!(
            spec,
            BandSpec::ByExplicitBands(vec!["0:0~512".into(), "0:512~1024".into()])
        );
    }

    #[test]
    fn parse_bands_rejects_blank_input() {
        assert!(BandSpec::parse_bands("").is_none());
        assert!(BandSpec::parse_bands("   ").is_none());
    }

    #[test]
    fn parse_bands_rejects_empty_tokens() {
        assert!(BandSpec::parse_bands("0:0~512,,0:512~1024").is_none());
        assert!(BandSpec::parse_bands("0:0~512,").is_none());
    }

    #[test]
    fn iter_pairs_bands_with_their_runs() {
        let partition = Partition::new(
            vec![BandWindow::from_token("a"), BandWindow::from_token("b")],
            vec![vec![], vec!["--x 1".into()]],
        );
        let pairs: Vec<_> = partition.iter().collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].0.token(), "b");
        assert_eq!(pairs[1].1, ["--x 1".to_string()]);
    }
}
