// validation.rs - Input validation utilities

use regex::Regex;
use std::path::Path;
use std::str::FromStr;

use crate::cli::args::Args;
use crate::core::{Parameters, ScanMode};
use crate::data::RecordSelection;

/// Output formats accepted by --format
pub const OUTPUT_FORMATS: [&str; 5] = ["table", "tsv", "csv", "bed", "json"];

pub struct ValidationResult {
    pub parameters: Parameters,
    pub scan_mode: ScanMode,
    pub format: String,
    pub selection: RecordSelection,
    pub record_include_regex: Option<Regex>,
    pub record_exclude_regex: Option<Regex>,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    // Validate input source
    match (&args.fasta, &args.sequence) {
        (None, None) => return Err("--fasta or --sequence is required".to_string()),
        (Some(_), Some(_)) => {
            return Err("--fasta and --sequence cannot be used together".to_string())
        }
        (Some(path), None) if !Path::new(path).is_file() => {
            return Err(format!("FASTA file not found: {}", path));
        }
        _ => {}
    }

    // Validate record selection
    let selection = match (&args.record, args.all_records) {
        (Some(_), true) => {
            return Err("--record and --all-records cannot be used together".to_string())
        }
        (Some(id), false) => RecordSelection::ById(id.clone()),
        (None, true) => RecordSelection::All,
        (None, false) => RecordSelection::First,
    };
    if (args.include_records.is_some() || args.exclude_records.is_some()) && !args.all_records {
        return Err("--include-records/--exclude-records require --all-records".to_string());
    }

    let parameters = build_parameters(args)?;
    if parameters.first_symbol == parameters.second_symbol {
        println!(
            "⚠️  Warning: both symbols are '{}'; the observed/expected ratio counts overlapping {} pairs",
            parameters.first_symbol as char,
            parameters.dinucleotide()
        );
    }

    let scan_mode = ScanMode::from_str(&args.mode)?;
    let format = resolve_format(&args.format, args.output.as_deref())?;

    let record_include_regex = if let Some(pattern) = &args.include_records {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid include_records regex: {}", e))?)
    } else {
        None
    };

    let record_exclude_regex = if let Some(pattern) = &args.exclude_records {
        Some(Regex::new(pattern).map_err(|e| format!("Invalid exclude_records regex: {}", e))?)
    } else {
        None
    };

    Ok(ValidationResult {
        parameters,
        scan_mode,
        format,
        selection,
        record_include_regex,
        record_exclude_regex,
    })
}

/// Start from the preset, apply explicit overrides, then check the result
pub fn build_parameters(args: &Args) -> Result<Parameters, String> {
    let mut params = Parameters::from_preset(&args.preset)?;

    if let Some(size) = args.min_window_size {
        params.min_window_size = size;
    }
    if let Some(fraction) = args.min_gc_fraction {
        params.min_gc_fraction = fraction;
    }
    if let Some(ratio) = args.min_obs_exp {
        params.min_obs_exp_ratio = ratio;
    }
    if let Some(gap) = args.merge_gap {
        params.merge_gap = gap;
    }
    if let Some(symbol) = args.first_symbol {
        params.first_symbol = symbol_byte(symbol, args.keep_case)?;
    }
    if let Some(symbol) = args.second_symbol {
        params.second_symbol = symbol_byte(symbol, args.keep_case)?;
    }

    params.validate().map_err(|e| e.to_string())?;
    Ok(params)
}

fn symbol_byte(symbol: char, keep_case: bool) -> Result<u8, String> {
    if !symbol.is_ascii() {
        return Err(format!("Symbol '{}' is not an ASCII character", symbol));
    }
    let byte = symbol as u8;
    Ok(if keep_case { byte } else { byte.to_ascii_uppercase() })
}

/// An explicit format wins; with the default "table" and an output file, use its extension
fn resolve_format(format: &str, output: Option<&str>) -> Result<String, String> {
    let format = format.to_lowercase();
    if !OUTPUT_FORMATS.contains(&format.as_str()) {
        return Err(format!(
            "Unsupported output format: {}. Use: {}",
            format,
            OUTPUT_FORMATS.join(", ")
        ));
    }

    match output {
        Some(path) if format == "table" => {
            let inferred = Path::new(path)
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.to_lowercase())
                .filter(|ext| OUTPUT_FORMATS[1..].contains(&ext.as_str()))
                .unwrap_or_else(|| "tsv".to_string());
            Ok(inferred)
        }
        _ => Ok(format),
    }
}
