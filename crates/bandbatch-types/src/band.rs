//! Band window tokens and directory labels.

use std::fmt;

/// One contiguous channel window, identified by its textual token.
///
/// The canonical form is `"<spw>:<start>~<end>"`, e.g. `"0:0~1023"`: the
/// sub-band (spectral window) index, a colon, then the channel range with a
/// tilde between the edges. Windows built with [`BandWindow::from_edges`]
/// always carry this form; windows built with [`BandWindow::from_token`]
/// carry the caller's token verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandWindow {
    token: String,
}

/// Channel edges parsed back out of a band token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelRange {
    /// Sub-band (spectral window) index.
    pub spw: u32,
    /// First channel of the window.
    pub start: i64,
    /// Nominal upper edge of the window.
    pub end: i64,
}

impl BandWindow {
    /// Build a window from its edges in canonical textual form.
    pub fn from_edges(spw: u32, start: i64, end: i64) -> Self {
        Self {
            token: format!("{spw}:{start}~{end}"),
        }
    }

    /// Wrap a caller-supplied token verbatim — no arithmetic, no validation.
    pub fn from_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The textual token, exactly as it will appear on the command line.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Directory-safe label for this window.
    ///
    /// The structural separators `:` and `~` are replaced (not removed)
    /// with `_`, so `"0:0~1023"` becomes `"0_0_1023"` and stays readable
    /// and distinct from its siblings.
    pub fn label(&self) -> String {
        self.token.replace([':', '~'], "_")
    }

    /// Parse the token back into channel edges.
    ///
    /// Returns `None` for tokens not of the canonical `spw:start~end` form.
    pub fn channels(&self) -> Option<ChannelRange> {
        let (spw, range) = self.token.split_once(':')?;
        let (start, end) = range.split_once('~')?;
        Some(ChannelRange {
            spw: spw.trim().parse().ok()?,
            start: start.trim().parse().ok()?,
            end: end.trim().parse().ok()?,
        })
    }
}

impl fmt::Display for BandWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}
