// lib.rs - cpgislands library root

//! # cpgislands - CpG island detection with the Takai & Jones method
//!
//! Scans a DNA sequence with a sliding window, grows every window that is
//! enriched for a target dinucleotide (CpG by default) and merges nearby
//! qualifying regions into islands.
//!
//! ## Features
//!
//! - **Linear time**: prefix-sum composition index, O(1) per window step
//! - **Configurable thresholds**: window size, GC fraction, observed/expected
//!   ratio, merge gap and the target dinucleotide itself
//! - **Batch mode**: independent sequences scanned in parallel
//! - **Multiple formats**: console table, TSV, CSV, BED, JSON
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use cpgislands::prelude::*;
//!
//! let set = SequenceSet::from_fasta(std::path::Path::new("genome.fa"), true)?;
//! let record = set.first().ok_or("empty FASTA")?;
//!
//! let islands = find_islands(&record.sequence, &Parameters::default())
//!     .map_err(|e| e.to_string())?;
//! for island in &islands {
//!     println!("{}", island);
//! }
//! # Ok::<(), String>(())
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::core::{find_islands, find_islands_batch, summarize};
    pub use crate::core::{
        CompositionIndex, Island, IslandError, IslandFinder, Metrics, Parameters, RecordIslands,
        ScanMode, Window,
    };
    pub use crate::data::{RecordSelection, SequenceRecord, SequenceSet};
    pub use crate::output::{print_summaries, print_table, write_islands};
}

// Re-export main types at the root level for convenience
pub use cli::{Args, ValidationResult};
pub use core::{Island, IslandError, IslandFinder, Parameters, ScanMode};
pub use data::{SequenceRecord, SequenceSet};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!("cpgislands v{} - CpG island detection", VERSION)
}
