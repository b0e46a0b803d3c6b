// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.fasta.is_none() && self.sequence.is_none() {
            self.fasta = config.fasta;
        }
        if self.output.is_none() {
            self.output = config.output;
        }
        if self.format == "table" {
            if let Some(format) = config.format {
                self.format = format;
            }
        }

        // Record selection
        if self.record.is_none() {
            self.record = config.record;
        }
        if !self.all_records && config.all_records.unwrap_or(false) {
            self.all_records = true;
        }
        if self.include_records.is_none() {
            self.include_records = config.include_records;
        }
        if self.exclude_records.is_none() {
            self.exclude_records = config.exclude_records;
        }
        if !self.keep_case && config.keep_case.unwrap_or(false) {
            self.keep_case = true;
        }

        // Detection parameters (only override defaults, not explicit CLI values)
        if self.preset == "gardiner-garden" {
            if let Some(preset) = config.preset {
                self.preset = preset;
            }
        }
        if self.min_window_size.is_none() {
            self.min_window_size = config.min_window_size;
        }
        if self.min_gc_fraction.is_none() {
            self.min_gc_fraction = config.min_gc_fraction;
        }
        if self.min_obs_exp.is_none() {
            self.min_obs_exp = config.min_obs_exp;
        }
        if self.merge_gap.is_none() {
            self.merge_gap = config.merge_gap;
        }
        if self.first_symbol.is_none() {
            self.first_symbol = config.first_symbol;
        }
        if self.second_symbol.is_none() {
            self.second_symbol = config.second_symbol;
        }
        if self.mode == "islands" {
            if let Some(mode) = config.mode {
                self.mode = mode;
            }
        }

        // Performance
        if self.threads.is_none() {
            self.threads = config.threads;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;

    fn parse(args: &[&str]) -> Args {
        Args::from_args(&["cpgislands"], args).unwrap()
    }

    #[test]
    fn test_config_fills_unset_values() {
        let args = parse(&["--fasta", "cli.fa"]);
        let config = Config {
            fasta: Some("config.fa".to_string()),
            format: Some("bed".to_string()),
            preset: Some("takai-jones".to_string()),
            merge_gap: Some(50),
            all_records: Some(true),
            ..Config::new()
        };
        let merged = args.merge_with_config(config);

        assert_eq!(merged.fasta.as_deref(), Some("cli.fa"));
        assert_eq!(merged.format, "bed");
        assert_eq!(merged.preset, "takai-jones");
        assert_eq!(merged.merge_gap, Some(50));
        assert!(merged.all_records);
    }

    #[test]
    fn test_cli_values_take_precedence() {
        let args = parse(&["--format", "json", "--merge-gap", "10", "--mode", "windows"]);
        let config = Config {
            format: Some("bed".to_string()),
            merge_gap: Some(50),
            mode: Some("islands".to_string()),
            ..Config::new()
        };
        let merged = args.merge_with_config(config);

        assert_eq!(merged.format, "json");
        assert_eq!(merged.merge_gap, Some(10));
        assert_eq!(merged.mode, "windows");
    }

    #[test]
    fn test_literal_sequence_blocks_config_fasta() {
        let args = parse(&["--sequence", "ACGT"]);
        let config = Config {
            fasta: Some("config.fa".to_string()),
            ..Config::new()
        };
        let merged = args.merge_with_config(config);
        assert!(merged.fasta.is_none());
        assert_eq!(merged.sequence.as_deref(), Some("ACGT"));
    }
}
