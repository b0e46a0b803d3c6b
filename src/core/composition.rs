// composition.rs - Prefix-sum composition index over a sequence

use serde::{Deserialize, Serialize};

use super::error::IslandError;

/// Composition of one half-open window `[begin, end)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub length: usize,
    pub first_count: usize,
    pub second_count: usize,
    pub pair_count: usize,
    pub gc_fraction: f64,
    pub obs_exp_ratio: f64,
}

impl Metrics {
    /// Derive fractions from raw counts.
    /// The observed/expected ratio is 0 when either symbol is absent.
    pub fn from_counts(
        length: usize,
        first_count: usize,
        second_count: usize,
        pair_count: usize,
    ) -> Self {
        let gc_fraction = if length == 0 {
            0.0
        } else {
            (first_count + second_count) as f64 / length as f64
        };
        let expected_denominator = first_count as f64 * second_count as f64;
        let obs_exp_ratio = if expected_denominator == 0.0 {
            0.0
        } else {
            (pair_count as f64 * length as f64) / expected_denominator
        };

        Self {
            length,
            first_count,
            second_count,
            pair_count,
            gc_fraction,
            obs_exp_ratio,
        }
    }
}

/// Cumulative counts of the two target symbols and of the ordered pair.
///
/// `cum_first[i]` counts `first` in `sequence[..i]`; `cum_pair[i]` counts
/// pairs `(first, second)` starting at positions `< i`. All three tables
/// have `len + 1` entries so any window is answered with two lookups.
#[derive(Debug, Clone)]
pub struct CompositionIndex {
    first: u8,
    second: u8,
    cum_first: Vec<u32>,
    cum_second: Vec<u32>,
    cum_pair: Vec<u32>,
}

impl CompositionIndex {
    /// Build the index in a single pass
    pub fn new(sequence: &[u8], first: u8, second: u8) -> Result<Self, IslandError> {
        let len = sequence.len();
        if len >= u32::MAX as usize {
            return Err(IslandError::SequenceTooLong(len));
        }

        let mut cum_first = Vec::with_capacity(len + 1);
        let mut cum_second = Vec::with_capacity(len + 1);
        let mut cum_pair = Vec::with_capacity(len + 1);

        let (mut n_first, mut n_second, mut n_pair) = (0u32, 0u32, 0u32);
        cum_first.push(0);
        cum_second.push(0);
        cum_pair.push(0);

        for (i, &base) in sequence.iter().enumerate() {
            if base == first {
                n_first += 1;
                if sequence.get(i + 1) == Some(&second) {
                    n_pair += 1;
                }
            }
            if base == second {
                n_second += 1;
            }
            cum_first.push(n_first);
            cum_second.push(n_second);
            cum_pair.push(n_pair);
        }

        Ok(Self {
            first,
            second,
            cum_first,
            cum_second,
            cum_pair,
        })
    }

    /// Length of the indexed sequence
    pub fn len(&self) -> usize {
        self.cum_first.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn symbols(&self) -> (u8, u8) {
        (self.first, self.second)
    }

    /// Metrics for `[begin, end)` in O(1)
    pub fn metrics_of(&self, begin: usize, end: usize) -> Result<Metrics, IslandError> {
        let len = self.len();
        if begin >= end || end > len {
            return Err(IslandError::WindowOutOfRange { begin, end, len });
        }
        Ok(self.metrics_unchecked(begin, end))
    }

    /// Metrics for a range already known to satisfy `begin < end <= len`
    #[inline]
    pub(crate) fn metrics_unchecked(&self, begin: usize, end: usize) -> Metrics {
        let first_count = (self.cum_first[end] - self.cum_first[begin]) as usize;
        let second_count = (self.cum_second[end] - self.cum_second[begin]) as usize;
        // A pair starting at end - 1 reaches outside the window
        let pair_count = (self.cum_pair[end - 1] - self.cum_pair[begin]) as usize;
        Metrics::from_counts(end - begin, first_count, second_count, pair_count)
    }
}
