// merger.rs - Coalescing raw windows into islands

use super::composition::CompositionIndex;
use super::island::{Island, Window};
use super::params::Parameters;

/// Fuse windows that touch exactly (`next.begin == current.end`).
///
/// Input must be ordered and non-overlapping, as produced by the scanner.
pub fn merge_adjacent<I>(windows: I) -> Vec<Window>
where
    I: IntoIterator<Item = Window>,
{
    let mut merged: Vec<Window> = Vec::new();
    for window in windows {
        match merged.last_mut() {
            Some(last) if last.end == window.begin => last.end = window.end,
            _ => merged.push(window),
        }
    }
    merged
}

/// Fuse consecutive windows separated by fewer than `merge_gap` bp.
///
/// The fused span is not re-tested against the thresholds: the gap alone
/// triggers the merge. A fused window keeps absorbing its successors in the
/// same pass, so chains of close islands collapse into one.
pub fn merge_within_gap<I>(windows: I, merge_gap: usize) -> Vec<Window>
where
    I: IntoIterator<Item = Window>,
{
    let mut merged: Vec<Window> = Vec::new();
    for window in windows {
        match merged.last_mut() {
            Some(last) if last.gap_to(&window) < merge_gap => last.end = window.end,
            _ => merged.push(window),
        }
    }
    merged
}

/// Run both merge passes and attach metrics recomputed over each final span
pub fn merge_islands<I>(raw: I, index: &CompositionIndex, params: &Parameters) -> Vec<Island>
where
    I: IntoIterator<Item = Window>,
{
    let adjacent = merge_adjacent(raw);
    merge_within_gap(adjacent, params.merge_gap)
        .into_iter()
        .map(|window| Island::from_window(window, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(begin: usize, end: usize) -> Window {
        Window::new(begin, end)
    }

    #[test]
    fn test_merge_adjacent_only_touching() {
        let merged = merge_adjacent(vec![w(0, 10), w(10, 20), w(21, 30), w(30, 35)]);
        assert_eq!(merged, vec![w(0, 20), w(21, 35)]);
    }

    #[test]
    fn test_merge_adjacent_empty() {
        assert!(merge_adjacent(Vec::new()).is_empty());
    }

    #[test]
    fn test_merge_within_gap_is_strict() {
        // Gap of exactly merge_gap stays separate
        let merged = merge_within_gap(vec![w(0, 10), w(20, 30)], 10);
        assert_eq!(merged, vec![w(0, 10), w(20, 30)]);

        let merged = merge_within_gap(vec![w(0, 10), w(19, 30)], 10);
        assert_eq!(merged, vec![w(0, 30)]);
    }

    #[test]
    fn test_merge_within_gap_is_transitive() {
        let merged = merge_within_gap(vec![w(0, 10), w(15, 20), w(25, 30), w(100, 110)], 6);
        assert_eq!(merged, vec![w(0, 30), w(100, 110)]);
    }

    #[test]
    fn test_zero_gap_never_merges() {
        let windows = vec![w(0, 10), w(10, 20)];
        assert_eq!(merge_within_gap(windows.clone(), 0), windows);
    }

    #[test]
    fn test_merged_islands_are_not_revalidated() {
        // Two CpG-rich blocks around an AT-only gap
        let sequence = b"CGCGCGCGATATATATATATCGCGCGCG";
        let params = Parameters {
            min_window_size: 8,
            merge_gap: 20,
            ..Parameters::default()
        };
        let index = CompositionIndex::new(sequence, b'C', b'G').unwrap();
        let islands = merge_islands(vec![w(0, 8), w(20, 28)], &index, &params);

        assert_eq!(islands.len(), 1);
        assert_eq!(islands[0].begin, 0);
        assert_eq!(islands[0].end, 28);
        // Recomputed over the full span: 16 of 28 bp are C/G
        assert_eq!(islands[0].metrics.first_count, 8);
        assert_eq!(islands[0].metrics.second_count, 8);
        assert_eq!(islands[0].metrics.pair_count, 8);
        assert!((islands[0].gc_fraction() - 16.0 / 28.0).abs() < 1e-12);
    }

    #[test]
    fn test_metrics_are_recomputed_not_averaged() {
        let sequence = b"CGCGAAAACCGG";
        let params = Parameters {
            min_window_size: 4,
            merge_gap: 5,
            ..Parameters::default()
        };
        let index = CompositionIndex::new(sequence, b'C', b'G').unwrap();
        let islands = merge_islands(vec![w(0, 4), w(8, 12)], &index, &params);
        assert_eq!(islands.len(), 1);
        assert_eq!(islands[0].metrics, index.metrics_of(0, 12).unwrap());
    }
}
