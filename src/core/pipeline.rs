// pipeline.rs - End-to-end island detection for one or many sequences

use indicatif::ProgressBar;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::composition::{CompositionIndex, Metrics};
use super::error::IslandError;
use super::island::Island;
use super::merger::merge_islands;
use super::params::{Parameters, ScanMode};
use super::scanner::{fixed_windows, WindowScanner};
use crate::data::SequenceRecord;

/// Validated detection settings, reusable across sequences
#[derive(Debug, Clone)]
pub struct IslandFinder {
    params: Parameters,
    mode: ScanMode,
}

impl IslandFinder {
    /// Validate parameters once; fails before any scanning
    pub fn new(params: Parameters) -> Result<Self, IslandError> {
        params.validate()?;
        Ok(Self {
            params,
            mode: ScanMode::Islands,
        })
    }

    pub fn with_mode(mut self, mode: ScanMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    /// Build the composition index matching this finder's dinucleotide
    pub fn index(&self, sequence: &[u8]) -> Result<CompositionIndex, IslandError> {
        CompositionIndex::new(sequence, self.params.first_symbol, self.params.second_symbol)
    }

    /// Detect islands in one sequence
    pub fn find(&self, sequence: &[u8]) -> Result<Vec<Island>, IslandError> {
        if sequence.len() < self.params.min_window_size {
            return Ok(Vec::new());
        }
        let index = self.index(sequence)?;
        self.find_with_index(&index)
    }

    /// Detect islands using an index built earlier, possibly for other thresholds
    pub fn find_with_index(&self, index: &CompositionIndex) -> Result<Vec<Island>, IslandError> {
        let symbols = (self.params.first_symbol, self.params.second_symbol);
        if index.symbols() != symbols {
            let (first, second) = index.symbols();
            return Err(IslandError::InvalidParameters(format!(
                "index was built for {}{} but parameters target {}",
                first as char,
                second as char,
                self.params.dinucleotide()
            )));
        }

        let islands = match self.mode {
            ScanMode::Islands => {
                merge_islands(WindowScanner::new(index, &self.params), index, &self.params)
            }
            ScanMode::Windows => fixed_windows(index, &self.params).collect(),
        };
        Ok(islands)
    }
}

/// Detect islands in `sequence` with the full pipeline
pub fn find_islands(sequence: &[u8], params: &Parameters) -> Result<Vec<Island>, IslandError> {
    IslandFinder::new(params.clone())?.find(sequence)
}

/// Islands found in one record of a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordIslands {
    pub id: String,
    pub length: usize,
    pub checksum: u32,
    pub islands: Vec<Island>,
}

/// Run one independent pipeline per record in parallel; output keeps input order
pub fn find_islands_batch(
    records: &[SequenceRecord],
    finder: &IslandFinder,
    progress: Option<&ProgressBar>,
) -> Result<Vec<RecordIslands>, IslandError> {
    let processed = AtomicUsize::new(0);

    records
        .par_iter()
        .map(|record| -> Result<RecordIslands, IslandError> {
            let islands = finder.find(&record.sequence)?;

            let count = processed.fetch_add(1, Ordering::Relaxed) + 1;
            if let Some(pb) = progress {
                pb.set_position(count as u64);
            }

            Ok(RecordIslands {
                id: record.id.clone(),
                length: record.len(),
                checksum: record.checksum(),
                islands,
            })
        })
        .collect()
}

/// Whole-sequence composition and island coverage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceSummary {
    pub id: String,
    pub composition: Metrics,
    pub island_count: usize,
    pub covered_bp: usize,
    pub covered_fraction: f64,
}

/// Summarize a record given the islands already found in it
pub fn summarize(
    record: &SequenceRecord,
    finder: &IslandFinder,
    islands: &[Island],
) -> Result<SequenceSummary, IslandError> {
    let composition = if record.is_empty() {
        Metrics::from_counts(0, 0, 0, 0)
    } else {
        finder.index(&record.sequence)?.metrics_of(0, record.len())?
    };

    // Fixed windows overlap, so coverage is measured on their union
    let mut covered_bp = 0;
    let mut covered_to = 0;
    for island in islands {
        let begin = island.begin.max(covered_to);
        if island.end > begin {
            covered_bp += island.end - begin;
            covered_to = island.end;
        }
    }

    Ok(SequenceSummary {
        id: record.id.clone(),
        composition,
        island_count: islands.len(),
        covered_bp,
        covered_fraction: if record.is_empty() {
            0.0
        } else {
            covered_bp as f64 / record.len() as f64
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // 20bp unit with 11 C/G and one CpG: a 300bp repeat has gc 0.55, obs/exp 0.667
    const UNIT: &str = "TGCTCTGGGCAACGACCAAT";

    fn region(bp: usize) -> String {
        UNIT.repeat(bp / UNIT.len())
    }

    fn flank(bp: usize) -> String {
        "T".repeat(bp)
    }

    fn two_regions(gap: usize) -> Vec<u8> {
        format!("{}{}{}{}{}", flank(200), region(200), flank(gap), region(200), flank(200))
            .into_bytes()
    }

    fn assert_output_invariants(islands: &[Island], params: &Parameters) {
        for island in islands {
            assert!(island.length() >= params.min_window_size);
        }
        for pair in islands.windows(2) {
            assert!(pair[0].end <= pair[1].begin);
            assert!(pair[1].begin - pair[0].end >= params.merge_gap);
        }
    }

    #[test]
    fn test_at_only_sequence_has_no_islands() {
        let sequence = "AT".repeat(500).into_bytes();
        let islands = find_islands(&sequence, &Parameters::default()).unwrap();
        assert!(islands.is_empty());
    }

    #[test]
    fn test_empty_and_short_sequences() {
        let params = Parameters::default();
        assert!(find_islands(b"", &params).unwrap().is_empty());
        let short = "CG".repeat(99).into_bytes();
        assert!(find_islands(&short, &params).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_parameters_fail_before_scanning() {
        let params = Parameters {
            min_gc_fraction: 2.0,
            ..Parameters::default()
        };
        assert!(matches!(
            find_islands(b"", &params),
            Err(IslandError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_single_flanked_region() {
        let sequence = format!("{}{}{}", flank(200), region(300), flank(200)).into_bytes();
        let params = Parameters::default();
        let index = CompositionIndex::new(&sequence, b'C', b'G').unwrap();

        let core = index.metrics_of(200, 500).unwrap();
        assert_eq!(core.gc_fraction, 0.55);
        assert!((core.obs_exp_ratio - 2.0 / 3.0).abs() < 1e-12);

        let islands = find_islands(&sequence, &params).unwrap();
        assert_eq!(islands.len(), 1);
        let island = &islands[0];
        // The island covers the region; the 0.05 GC slack lets it absorb a few flank bp
        assert!(island.begin <= 200 && island.begin >= 180);
        assert!(island.end >= 500 && island.end <= 520);
        assert_eq!(island.metrics, index.metrics_of(island.begin, island.end).unwrap());
    }

    #[test]
    fn test_close_regions_merge_into_one_island() {
        let sequence = two_regions(50);
        let params = Parameters::default();
        let index = CompositionIndex::new(&sequence, b'C', b'G').unwrap();

        let raw: Vec<_> = WindowScanner::new(&index, &params).collect();
        assert_eq!(raw.len(), 2);

        let islands = find_islands(&sequence, &params).unwrap();
        assert_eq!(islands.len(), 1);
        let island = &islands[0];
        assert_eq!(island.begin, raw[0].begin);
        assert_eq!(island.end, raw[1].end);
        assert!(island.begin <= 200 && island.end >= 650);

        // Recomputed over the fused span, gap included
        assert_eq!(island.metrics, index.metrics_of(island.begin, island.end).unwrap());
        // The fused span falls below the GC threshold and is still reported
        assert!(island.gc_fraction() < params.min_gc_fraction);
    }

    #[test]
    fn test_small_merge_gap_keeps_regions_apart() {
        let sequence = two_regions(50);
        let params = Parameters {
            merge_gap: 10,
            ..Parameters::default()
        };
        let islands = find_islands(&sequence, &params).unwrap();
        assert_eq!(islands.len(), 2);
        assert!(islands[0].begin <= 200);
        assert!(islands[1].end >= 650);
        assert_output_invariants(&islands, &params);
    }

    #[test]
    fn test_deterministic() {
        let sequence = two_regions(80);
        let params = Parameters::default();
        let first = find_islands(&sequence, &params).unwrap();
        let second = find_islands(&sequence, &params).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_output_invariants_across_gaps() {
        for gap in [0, 30, 99, 100, 150, 400] {
            let sequence = two_regions(gap);
            for merge_gap in [0, 10, 100, 250] {
                let params = Parameters {
                    merge_gap,
                    ..Parameters::default()
                };
                let islands = find_islands(&sequence, &params).unwrap();
                assert!(!islands.is_empty());
                assert_output_invariants(&islands, &params);
            }
        }
    }

    #[test]
    fn test_raising_gc_threshold_shrinks_coverage() {
        let sequence = two_regions(50);
        let mut previous: Option<(usize, usize)> = None;
        for min_gc_fraction in [0.4, 0.5, 0.52, 0.55, 0.6] {
            let params = Parameters {
                min_gc_fraction,
                ..Parameters::default()
            };
            let islands = find_islands(&sequence, &params).unwrap();
            let covered: usize = islands.iter().map(|i| i.length()).sum();
            if let Some((count, bp)) = previous {
                assert!(islands.len() <= count);
                assert!(covered <= bp);
            }
            previous = Some((islands.len(), covered));
        }
        assert_eq!(previous, Some((0, 0)));
    }

    #[test]
    fn test_index_reuse_across_thresholds() {
        let sequence = two_regions(50);
        let base = IslandFinder::new(Parameters::default()).unwrap();
        let index = base.index(&sequence).unwrap();

        let strict = IslandFinder::new(Parameters {
            min_gc_fraction: 0.6,
            ..Parameters::default()
        })
        .unwrap();
        assert_eq!(base.find_with_index(&index).unwrap(), base.find(&sequence).unwrap());
        assert!(strict.find_with_index(&index).unwrap().is_empty());

        let other_pair = IslandFinder::new(Parameters {
            first_symbol: b'G',
            second_symbol: b'C',
            ..Parameters::default()
        })
        .unwrap();
        assert!(other_pair.find_with_index(&index).is_err());
    }

    #[test]
    fn test_windows_mode_reports_fixed_windows() {
        let sequence = format!("{}{}{}", flank(200), region(300), flank(200)).into_bytes();
        let finder = IslandFinder::new(Parameters::default())
            .unwrap()
            .with_mode(ScanMode::Windows);
        let windows = finder.find(&sequence).unwrap();
        assert!(windows.len() > 1);
        assert!(windows.iter().all(|w| w.length() == 200));
        assert!(windows.windows(2).all(|p| p[0].begin < p[1].begin));
    }

    #[test]
    fn test_batch_keeps_input_order() {
        let records = vec![
            SequenceRecord::new("island", two_regions(50)),
            SequenceRecord::new("empty", Vec::new()),
            SequenceRecord::new("at_rich", "AT".repeat(500).into_bytes()),
        ];
        let finder = IslandFinder::new(Parameters::default()).unwrap();
        let results = find_islands_batch(&records, &finder, None).unwrap();

        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["island", "empty", "at_rich"]);
        assert_eq!(results[0].islands, finder.find(&records[0].sequence).unwrap());
        assert!(results[1].islands.is_empty());
        assert!(results[2].islands.is_empty());
        assert_eq!(results[0].checksum, records[0].checksum());
    }

    #[test]
    fn test_summary() {
        let record = SequenceRecord::new("seq", two_regions(50));
        let finder = IslandFinder::new(Parameters::default()).unwrap();
        let islands = finder.find(&record.sequence).unwrap();
        let summary = summarize(&record, &finder, &islands).unwrap();

        assert_eq!(summary.composition.length, 850);
        assert_eq!(summary.composition.first_count, 120);
        assert_eq!(summary.composition.second_count, 100);
        assert_eq!(summary.island_count, 1);
        assert_eq!(summary.covered_bp, islands[0].length());
        assert!(summary.covered_fraction > 0.0 && summary.covered_fraction < 1.0);

        let empty = SequenceRecord::new("empty", Vec::new());
        let summary = summarize(&empty, &finder, &[]).unwrap();
        assert_eq!(summary.covered_fraction, 0.0);
    }

    #[test]
    fn test_summary_counts_overlapping_windows_once() {
        let record = SequenceRecord::new("seq", "CG".repeat(150).into_bytes());
        let finder = IslandFinder::new(Parameters::default())
            .unwrap()
            .with_mode(ScanMode::Windows);
        let windows = finder.find(&record.sequence).unwrap();
        assert_eq!(windows.len(), 101);
        let summary = summarize(&record, &finder, &windows).unwrap();
        assert_eq!(summary.covered_bp, 300);
        assert_eq!(summary.covered_fraction, 1.0);
    }
}
