// mod.rs - Sequence loaders

pub mod fasta;
pub mod literal;

pub use literal::LITERAL_RECORD_ID;
