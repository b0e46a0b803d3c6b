// scanner.rs - Sliding window scan over a composition index

use super::composition::CompositionIndex;
use super::island::{Island, Window};
use super::params::Parameters;

/// Scanner emitting maximal qualifying runs as raw windows.
///
/// Two states: searching slides a `min_window_size` window one bp at a time
/// until it passes both thresholds; extending then grows that window one bp
/// at a time, re-testing the whole grown span, and emits it as soon as the
/// next bp would make it fail (or the sequence ends). Searching resumes at
/// the emitted end, so raw windows never overlap.
pub struct WindowScanner<'a> {
    index: &'a CompositionIndex,
    params: &'a Parameters,
    position: usize,
}

impl<'a> WindowScanner<'a> {
    pub fn new(index: &'a CompositionIndex, params: &'a Parameters) -> Self {
        Self {
            index,
            params,
            position: 0,
        }
    }

    /// Grow a qualifying window to the right while the full span still qualifies
    fn extend(&self, begin: usize, mut end: usize) -> usize {
        let len = self.index.len();
        while end < len
            && self
                .params
                .qualifies(&self.index.metrics_unchecked(begin, end + 1))
        {
            end += 1;
        }
        end
    }
}

impl Iterator for WindowScanner<'_> {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        let window_size = self.params.min_window_size;
        let len = self.index.len();

        while self.position + window_size <= len {
            let begin = self.position;
            let metrics = self.index.metrics_unchecked(begin, begin + window_size);
            if self.params.qualifies(&metrics) {
                let end = self.extend(begin, begin + window_size);
                self.position = end;
                return Some(Window::new(begin, end));
            }
            self.position += 1;
        }
        None
    }
}

/// Every qualifying window of exactly `min_window_size` bp, step 1.
///
/// Windows overlap and are neither extended nor merged.
pub fn fixed_windows<'a>(
    index: &'a CompositionIndex,
    params: &'a Parameters,
) -> impl Iterator<Item = Island> + 'a {
    let window_size = params.min_window_size;
    let last_begin = (index.len() + 1).saturating_sub(window_size);
    (0..last_begin)
        .map(move |begin| Island::from_window(Window::new(begin, begin + window_size), index))
        .filter(move |island| params.qualifies(&island.metrics))
}
