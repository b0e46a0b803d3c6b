// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// cpgislands - CpG island detection with the Takai & Jones sliding window method
pub struct Args {
    /// path to a FASTA file with the sequence(s) to scan
    #[argh(option)]
    pub fasta: Option<String>,

    /// sequence text to scan directly (whitespace is ignored)
    #[argh(option)]
    pub sequence: Option<String>,

    /// scan only the record with this identifier (default: first record)
    #[argh(option)]
    pub record: Option<String>,

    /// scan every record of the FASTA file in parallel
    #[argh(switch)]
    pub all_records: bool,

    /// with --all-records, include only records whose id matches this regex
    #[argh(option)]
    pub include_records: Option<String>,

    /// with --all-records, exclude records whose id matches this regex
    #[argh(option)]
    pub exclude_records: Option<String>,

    /// do not uppercase the sequence (lowercase bases will not match the symbols)
    #[argh(switch)]
    pub keep_case: bool,

    /// parameter preset: gardiner-garden, takai-jones (default: gardiner-garden)
    #[argh(option, default = "String::from(\"gardiner-garden\")")]
    pub preset: String,

    /// minimum window size in bp (overrides preset)
    #[argh(option)]
    pub min_window_size: Option<usize>,

    /// minimum fraction of window bp that are either target symbol, 0.0-1.0 (overrides preset)
    #[argh(option)]
    pub min_gc_fraction: Option<f64>,

    /// minimum observed/expected dinucleotide ratio (overrides preset)
    #[argh(option)]
    pub min_obs_exp: Option<f64>,

    /// islands closer than this many bp are merged (overrides preset)
    #[argh(option)]
    pub merge_gap: Option<usize>,

    /// first symbol of the target dinucleotide (default: C)
    #[argh(option)]
    pub first_symbol: Option<char>,

    /// second symbol of the target dinucleotide (default: G)
    #[argh(option)]
    pub second_symbol: Option<char>,

    /// scan mode: islands, windows (default: islands)
    #[argh(option, default = "String::from(\"islands\")")]
    pub mode: String,

    /// output format: table, tsv, csv, bed, json (default: table, or inferred from --output)
    #[argh(option, default = "String::from(\"table\")")]
    pub format: String,

    /// output file (omit to print a table to the console)
    #[argh(option)]
    pub output: Option<String>,

    /// number of threads for --all-records (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// print whole-sequence composition and island coverage only
    #[argh(switch)]
    pub stats_only: bool,

    /// validate inputs without scanning (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
