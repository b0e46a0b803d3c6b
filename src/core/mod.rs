// mod.rs - Core island detection module

pub mod composition;
pub mod error;
pub mod island;
pub mod merger;
pub mod params;
pub mod pipeline;
pub mod scanner;

// Re-export main types for convenience
pub use composition::{CompositionIndex, Metrics};
pub use error::IslandError;
pub use island::{Island, Window};
pub use merger::{merge_adjacent, merge_islands, merge_within_gap};
pub use params::{Parameters, ScanMode};
pub use pipeline::{
    find_islands, find_islands_batch, summarize, IslandFinder, RecordIslands, SequenceSummary,
};
pub use scanner::{fixed_windows, WindowScanner};
