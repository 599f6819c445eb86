//! Execution result types.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Histogram of measurement outcomes (bitstring -> occurrence count).
///
/// Bitstrings follow the node convention: character 0 is qubit 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts(FxHashMap<String, u64>);

impl Counts {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` occurrences of a bitstring.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.0.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Get the count for a bitstring (0 if never observed).
    pub fn get(&self, bitstring: &str) -> u64 {
        self.0.get(bitstring).copied().unwrap_or(0)
    }

    /// Number of distinct outcomes observed.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether any outcome was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over (bitstring, count) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Total number of recorded shots.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// The most frequent outcome, if any.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.0
            .iter()
            .max_by_key(|(_, count)| **count)
            .map(|(k, v)| (k.as_str(), *v))
    }
}

/// Result of executing a circuit on a backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Measurement outcome histogram.
    pub counts: Counts,
    /// Number of shots executed.
    pub shots: u32,
    /// Wall-clock execution time in milliseconds, if measured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a new execution result.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            execution_time_ms: None,
        }
    }

    /// Attach the execution time.
    pub fn with_execution_time(mut self, millis: u64) -> Self {
        self.execution_time_ms = Some(millis);
        self
    }

    /// The single sampled bitstring of a one-shot run.
    ///
    /// Returns `None` when the result holds zero or several outcomes.
    pub fn single_bitstring(&self) -> Option<&str> {
        if self.counts.len() == 1 {
            self.counts.iter().next().map(|(bits, _)| bits)
        } else {
            None
        }
    }
}
