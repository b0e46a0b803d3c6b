// mod.rs - Data structures module

pub mod loaders;
pub mod sequence;

// Re-export main types for convenience
pub use sequence::{normalize_sequence, RecordSelection, SequenceRecord, SequenceSet};
