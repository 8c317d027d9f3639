use crate::cluster::ClusterError;
use crate::ranker::SortOrder;

/// Fraction of tokens that must match a group's anchor for a line to join it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    pub const DEFAULT: f64 = 0.8;

    pub fn new(value: f64) -> Result<Self, ClusterError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ClusterError::InvalidThreshold(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Number of matching tokens a pattern of `len` tokens must exceed.
    pub fn cutoff(&self, len: usize) -> usize {
        (self.0 * len as f64).floor() as usize
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" | "text" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}' (expected table | json)")),
        }
    }
}

/// Validated options for one run.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub threshold: Threshold,
    pub order: SortOrder,
    pub format: OutputFormat,
    pub top: Option<usize>,
}

impl RunConfig {
    pub fn new(threshold: f64, order: SortOrder, format: OutputFormat) -> Result<Self, ClusterError> {
        Ok(Self { threshold: Threshold::new(threshold)?, order, format, top: None })
    }

    pub fn with_top(mut self, top: Option<usize>) -> Self {
        self.top = top;
        self
    }
}
