// sequence.rs - Sequence records and record selection

use crc32fast::Hasher;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One named nucleotide sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceRecord {
    pub id: String,
    pub description: Option<String>,
    pub sequence: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, sequence: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            description: None,
            sequence,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|d| !d.is_empty());
        self
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// CRC32 of the sequence bytes, reported alongside results
    pub fn checksum(&self) -> u32 {
        let mut hasher = Hasher::new();
        hasher.update(&self.sequence);
        hasher.finalize()
    }
}

/// Uppercase in place so soft-masked (lowercase) bases are counted
pub fn normalize_sequence(sequence: &mut [u8]) {
    sequence.make_ascii_uppercase();
}

/// Which records of a multi-record input are analysed
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RecordSelection {
    /// Only the first record
    #[default]
    First,
    /// The record with this identifier
    ById(String),
    /// Every record (batch mode)
    All,
}

/// Ordered collection of records loaded from one source
#[derive(Debug, Clone, Default)]
pub struct SequenceSet {
    pub records: Vec<SequenceRecord>,
    pub source: String,
}

impl SequenceSet {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            source: source.into(),
        }
    }

    pub fn push(&mut self, record: SequenceRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&SequenceRecord> {
        self.records.first()
    }

    pub fn get(&self, id: &str) -> Option<&SequenceRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Total number of bp across all records
    pub fn total_length(&self) -> usize {
        self.records.iter().map(|r| r.len()).sum()
    }

    /// Keep records whose ids pass the include/exclude patterns
    pub fn filter_ids(&mut self, include: Option<&Regex>, exclude: Option<&Regex>) {
        self.records.retain(|record| {
            if let Some(re) = include {
                if !re.is_match(&record.id) {
                    return false;
                }
            }
            if let Some(re) = exclude {
                if re.is_match(&record.id) {
                    return false;
                }
            }
            true
        });
    }

    /// Resolve a selection into the records to analyse
    pub fn select(self, selection: &RecordSelection) -> Result<Vec<SequenceRecord>, String> {
        if self.records.is_empty() {
            return Err(format!("No sequence records available in '{}'", self.source));
        }
        match selection {
            RecordSelection::First => Ok(self.records.into_iter().take(1).collect()),
            RecordSelection::ById(id) => {
                let source = self.source;
                self.records
                    .into_iter()
                    .find(|r| &r.id == id)
                    .map(|r| vec![r])
                    .ok_or_else(|| format!("Record '{}' not found in '{}'", id, source))
            }
            RecordSelection::All => Ok(self.records),
        }
    }
}
