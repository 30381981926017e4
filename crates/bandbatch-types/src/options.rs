//! Per-band extra command-line options.

use std::fmt;

/// Value of a single extra option.
///
/// A closed set of shapes; [`fmt::Display`] is the one place option values
/// turn into command-line text.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Booleans render as lowercase literal tokens.
            OptionValue::Bool(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            OptionValue::Int(i) => write!(f, "{i}"),
            OptionValue::Float(x) => write!(f, "{x}"),
            OptionValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        OptionValue::Int(i)
    }
}

impl From<f64> for OptionValue {
    fn from(x: f64) -> Self {
        OptionValue::Float(x)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Str(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Str(s)
    }
}

/// Extra options destined for one band of a partition.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    /// Which band these options attach to.
    pub index: usize,
    /// Ordered `(key, value)` pairs.
    pub options: Vec<(String, OptionValue)>,
}

impl RunOptions {
    /// Empty options for band `index`.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            options: Vec::new(),
        }
    }

    /// Append one `(key, value)` pair.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.push((key.into(), value.into()));
        self
    }

    /// Render to one `--<key> <value>` token per pair, order preserved.
    pub fn render(&self) -> Vec<String> {
        self.options
            .iter()
            .map(|(key, value)| format!("--{key} {value}"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bools_render_lowercase() {
        assert_eq!(OptionValue::Bool(true).to_string(), "true");
        assert_eq!(OptionValue::Bool(false).to_string(), "false");
    }

    #[test]
    fn render_emits_one_token_per_pair_in_order() {
        let opts = RunOptions::new(1).with("a", 1i64).with("b", true);
        assert_eq!(opts.render(), vec!["--a 1", "--b true"]);
    }

    #[test]
    fn render_keeps_string_values_as_is() {
        let opts = RunOptions::new(0).with("cal-model", "meerkat_band");
        assert_eq!(opts.render(), vec!["--cal-model meerkat_band"]);
    }

    #[test]
    fn empty_options_render_empty() {
        assert!(RunOptions::new(3).render().is_empty());
    }
}
