//! Poll-result records.
//!
//! The swarm input arrives as a poll-results payload: a list of labeled
//! numeric samples, an optional data-space domain, and a response count.
//! This module mirrors that payload so it can be deserialized from JSON and
//! handed to the layout engine. How the payload reaches the process (file,
//! pipe, upstream service) is the caller's concern.

use serde::Deserialize;

/// A single labeled sample.
///
/// A missing or null value deserializes to `None` and surfaces as `NaN`
/// from [`Sample::value`], which the layout engine then filters the same
/// way it filters any other non-finite entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Sample {
    /// Optional display label, carried through untouched.
    #[serde(default)]
    label: Option<String>,

    /// The quantitative value to be positioned.
    #[serde(default)]
    value: Option<f64>,
}

impl Sample {
    /// Creates a sample with a label and value
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: Some(label.into()),
            value: Some(value),
        }
    }

    /// Returns the sample's label, if present
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the sample's value, or `NaN` when it was absent
    pub fn value(&self) -> f64 {
        self.value.unwrap_or(f64::NAN)
    }
}

/// A full poll-results payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PollResults {
    /// Data-space domain suggested by the producer, as `[min, max]`.
    #[serde(default)]
    domain: Option<[f64; 2]>,

    /// The samples to lay out.
    #[serde(default)]
    data: Vec<Sample>,

    /// Total number of responses; zero means "no responses yet".
    #[serde(default)]
    vote_count: Option<u64>,
}

impl PollResults {
    /// Returns the producer-suggested domain, if any
    pub fn domain(&self) -> Option<[f64; 2]> {
        self.domain
    }

    /// Returns the samples
    pub fn data(&self) -> &[Sample] {
        &self.data
    }

    /// Returns the declared response count, if any
    pub fn vote_count(&self) -> Option<u64> {
        self.vote_count
    }

    /// Extracts the value sequence, index-aligned with [`PollResults::data`]
    pub fn values(&self) -> Vec<f64> {
        self.data.iter().map(Sample::value).collect()
    }

    /// Returns true when there is nothing to lay out: either no samples or
    /// a declared response count of zero.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() || self.vote_count == Some(0)
    }
}
