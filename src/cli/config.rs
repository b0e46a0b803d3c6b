// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub fasta: Option<String>,
    pub output: Option<String>,
    pub format: Option<String>,

    // Record selection
    pub record: Option<String>,
    pub all_records: Option<bool>,
    pub include_records: Option<String>,
    pub exclude_records: Option<String>,
    pub keep_case: Option<bool>,

    // Detection parameters
    pub preset: Option<String>,
    pub min_window_size: Option<usize>,
    pub min_gc_fraction: Option<f64>,
    pub min_obs_exp: Option<f64>,
    pub merge_gap: Option<usize>,
    pub first_symbol: Option<char>,
    pub second_symbol: Option<char>,
    pub mode: Option<String>,

    // Performance
    pub threads: Option<usize>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config = Self::from_toml(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# cpgislands.toml - Configuration file for cpgislands
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# FASTA file with the sequence(s) to scan
fasta = "/path/to/genome.fa"

# Output file (omit to print a table to the console)
output = "islands.bed"

# Output format: table, tsv, csv, bed, json
format = "bed"

# =============================================================================
# RECORD SELECTION
# =============================================================================

# Scan only this record (default: the first record of the file)
# record = "chr21"

# Scan every record in parallel
all_records = false

# Include/exclude records by id (regex, with all_records)
# include_records = "^chr[0-9XY]+$"
# exclude_records = "_random$"

# Keep lowercase (soft-masked) bases as they are
keep_case = false

# =============================================================================
# DETECTION PARAMETERS
# =============================================================================

# Preset: gardiner-garden (200 bp, 0.50, 0.60) or takai-jones (500 bp, 0.55, 0.65)
preset = "gardiner-garden"

# Individual values override the preset
# min_window_size = 200
# min_gc_fraction = 0.5
# min_obs_exp = 0.6
# merge_gap = 100

# Target dinucleotide, order-sensitive
first_symbol = "C"
second_symbol = "G"

# Scan mode: islands, windows
mode = "islands"

# =============================================================================
# PERFORMANCE
# =============================================================================

# Number of threads (omit for auto-detection)
# threads = 8
"#
        .to_string()
    }
}
