// fasta.rs - FASTA loader

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bio::io::fasta;

use crate::data::sequence::{normalize_sequence, SequenceRecord, SequenceSet};

impl SequenceSet {
    /// Load every record of a FASTA file
    pub fn from_fasta(path: &Path, uppercase: bool) -> Result<Self, String> {
        println!("🧬 Loading FASTA from: {}", path.display());
        let file = File::open(path)
            .map_err(|e| format!("Failed to open FASTA file {}: {}", path.display(), e))?;

        let set = Self::from_fasta_reader(
            BufReader::new(file),
            &path.display().to_string(),
            uppercase,
        )?;

        println!(
            "✅ FASTA loaded: {} records, {} bp",
            set.len(),
            set.total_length()
        );
        Ok(set)
    }

    /// Parse FASTA records from any reader
    pub fn from_fasta_reader<R: Read>(
        reader: R,
        source: &str,
        uppercase: bool,
    ) -> Result<Self, String> {
        let reader = fasta::Reader::new(reader);
        let mut set = Self::new(source);

        for record_result in reader.records() {
            let record = record_result
                .map_err(|e| format!("Invalid FASTA record in {}: {}", source, e))?;

            let mut sequence = record.seq().to_vec();
            if uppercase {
                normalize_sequence(&mut sequence);
            }

            set.push(
                SequenceRecord::new(record.id(), sequence)
                    .with_description(record.desc().map(|d| d.to_string())),
            );
        }

        if set.is_empty() {
            return Err(format!("No FASTA records found in {}", source));
        }
        Ok(set)
    }
}
