// literal.rs - Sequence given directly as text

use crate::data::sequence::{normalize_sequence, SequenceRecord, SequenceSet};

/// Identifier given to a sequence passed on the command line
pub const LITERAL_RECORD_ID: &str = "literal";

impl SequenceSet {
    /// Build a single-record set from raw sequence text; whitespace is ignored
    pub fn from_literal(text: &str, uppercase: bool) -> Result<Self, String> {
        let mut sequence: Vec<u8> = text
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();

        if let Some(pos) = sequence.iter().position(|b| !b.is_ascii_graphic()) {
            return Err(format!(
                "Invalid character at position {} in sequence text",
                pos
            ));
        }
        if uppercase {
            normalize_sequence(&mut sequence);
        }

        let mut set = Self::new("command line");
        set.push(SequenceRecord::new(LITERAL_RECORD_ID, sequence));
        Ok(set)
    }
}
