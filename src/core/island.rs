// island.rs - Window and island records

use serde::{Deserialize, Serialize};

use super::composition::{CompositionIndex, Metrics};

/// Half-open interval `[begin, end)` over sequence positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Window {
    pub begin: usize,
    pub end: usize,
}

impl Window {
    pub fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.begin
    }

    /// Number of bp between this window and a later one (0 when abutting)
    pub fn gap_to(&self, next: &Window) -> usize {
        next.begin.saturating_sub(self.end)
    }
}

/// A reported island with metrics recomputed over its final span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Island {
    pub begin: usize,
    pub end: usize,
    pub metrics: Metrics,
}

impl Island {
    /// Build an island for `window`, reading its metrics from the index.
    /// `window` must lie inside the indexed sequence.
    pub(crate) fn from_window(window: Window, index: &CompositionIndex) -> Self {
        Self {
            begin: window.begin,
            end: window.end,
            metrics: index.metrics_unchecked(window.begin, window.end),
        }
    }

    pub fn window(&self) -> Window {
        Window::new(self.begin, self.end)
    }

    pub fn length(&self) -> usize {
        self.end - self.begin
    }

    pub fn gc_fraction(&self) -> f64 {
        self.metrics.gc_fraction
    }

    pub fn obs_exp_ratio(&self) -> f64 {
        self.metrics.obs_exp_ratio
    }
}

impl std::fmt::Display for Island {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Island at ({}, {})\tgc: {}\tobs/exp: {}\tlength: {}",
            self.begin,
            self.end,
            self.gc_fraction(),
            self.obs_exp_ratio(),
            self.length()
        )
    }
}
