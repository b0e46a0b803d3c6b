// mod.rs - Output formatters module

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::core::{Island, Parameters, RecordIslands, ScanMode, SequenceSummary};

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &str) -> Result<(), String> {
    if let Some(parent) = Path::new(file_path).parent() {
        create_dir_all(parent).map_err(|e| {
            format!(
                "Failed to create parent directory '{}': {}",
                parent.display(),
                e
            )
        })?;
    }
    Ok(())
}

fn create_writer(file_path: &str) -> Result<BufWriter<File>, String> {
    ensure_parent_dir(file_path)?;
    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path, e))?;
    Ok(BufWriter::new(file))
}

fn generated_at() -> String {
    chrono::Utc::now()
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string()
}

fn describe_parameters(params: &Parameters) -> String {
    format!(
        "min_window_size={} min_gc_fraction={} min_obs_exp_ratio={} merge_gap={} dinucleotide={}",
        params.min_window_size,
        params.min_gc_fraction,
        params.min_obs_exp_ratio,
        params.merge_gap,
        params.dinucleotide()
    )
}

/// Comment header shared by the line-oriented formats
fn write_header<W: Write>(
    writer: &mut W,
    results: &[RecordIslands],
    params: &Parameters,
    command_line: &str,
) -> Result<(), String> {
    writeln!(writer, "# Command: {}", command_line).map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# Generated: {}", generated_at()).map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# cpgislands v{}", env!("CARGO_PKG_VERSION"))
        .map_err(|e| format!("Write error: {}", e))?;
    writeln!(writer, "# Parameters: {}", describe_parameters(params))
        .map_err(|e| format!("Write error: {}", e))?;
    for result in results {
        writeln!(
            writer,
            "# Record: {} length={} crc32={:08x} islands={}",
            result.id,
            result.length,
            result.checksum,
            result.islands.len()
        )
        .map_err(|e| format!("Write error: {}", e))?;
    }
    Ok(())
}

/// One island as a flat row
#[derive(Debug, Serialize)]
struct IslandRow<'a> {
    record: &'a str,
    begin: usize,
    end: usize,
    length: usize,
    gc_fraction: f64,
    obs_exp_ratio: f64,
    first_count: usize,
    second_count: usize,
    pair_count: usize,
}

impl<'a> IslandRow<'a> {
    fn new(record: &'a str, island: &Island) -> Self {
        Self {
            record,
            begin: island.begin,
            end: island.end,
            length: island.length(),
            gc_fraction: island.metrics.gc_fraction,
            obs_exp_ratio: island.metrics.obs_exp_ratio,
            first_count: island.metrics.first_count,
            second_count: island.metrics.second_count,
            pair_count: island.metrics.pair_count,
        }
    }
}

fn rows(results: &[RecordIslands]) -> impl Iterator<Item = IslandRow<'_>> {
    results.iter().flat_map(|result| {
        result
            .islands
            .iter()
            .map(move |island| IslandRow::new(&result.id, island))
    })
}

/// Write islands in TSV format
pub fn write_tsv(
    file_path: &str,
    results: &[RecordIslands],
    params: &Parameters,
    command_line: &str,
) -> Result<(), String> {
    let mut writer = create_writer(file_path)?;
    write_header(&mut writer, results, params, command_line)?;

    writeln!(
        writer,
        "record\tbegin\tend\tlength\tgc_fraction\tobs_exp_ratio\tfirst_count\tsecond_count\tpair_count"
    )
    .map_err(|e| format!("Write error: {}", e))?;

    for row in rows(results) {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            row.record,
            row.begin,
            row.end,
            row.length,
            row.gc_fraction,
            row.obs_exp_ratio,
            row.first_count,
            row.second_count,
            row.pair_count
        )
        .map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Islands written to: {}", file_path);
    Ok(())
}

/// Write islands in CSV format (header row, no comments)
pub fn write_csv(file_path: &str, results: &[RecordIslands]) -> Result<(), String> {
    let writer = create_writer(file_path)?;
    let mut csv_writer = csv::Writer::from_writer(writer);

    for row in rows(results) {
        csv_writer
            .serialize(&row)
            .map_err(|e| format!("CSV write error: {}", e))?;
    }

    csv_writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Islands written to: {} (CSV format)", file_path);
    Ok(())
}

/// Write islands in BED format: record, begin, end, name, then GC and obs/exp
pub fn write_bed(
    file_path: &str,
    results: &[RecordIslands],
    params: &Parameters,
    command_line: &str,
) -> Result<(), String> {
    let mut writer = create_writer(file_path)?;
    write_header(&mut writer, results, params, command_line)?;

    for row in rows(results) {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}:{}\t{}\t{}",
            row.record,
            row.begin,
            row.end,
            params.dinucleotide(),
            row.pair_count,
            row.gc_fraction,
            row.obs_exp_ratio
        )
        .map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Islands written to: {} (BED format)", file_path);
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    version: &'static str,
    generated: String,
    command: &'a str,
    mode: ScanMode,
    parameters: &'a Parameters,
    records: &'a [RecordIslands],
}

/// Write islands and run metadata as pretty JSON
pub fn write_json(
    file_path: &str,
    results: &[RecordIslands],
    params: &Parameters,
    mode: ScanMode,
    command_line: &str,
) -> Result<(), String> {
    let mut writer = create_writer(file_path)?;
    let report = JsonReport {
        version: env!("CARGO_PKG_VERSION"),
        generated: generated_at(),
        command: command_line,
        mode,
        parameters: params,
        records: results,
    };

    serde_json::to_writer_pretty(&mut writer, &report)
        .map_err(|e| format!("JSON write error: {}", e))?;
    writeln!(writer).map_err(|e| format!("Write error: {}", e))?;

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    println!("✅ Islands written to: {} (JSON format)", file_path);
    Ok(())
}

/// Write islands in the specified format
pub fn write_islands(
    file_path: &str,
    format: &str,
    results: &[RecordIslands],
    params: &Parameters,
    mode: ScanMode,
    command_line: &str,
) -> Result<(), String> {
    match format.to_lowercase().as_str() {
        "tsv" => write_tsv(file_path, results, params, command_line),
        "csv" => write_csv(file_path, results),
        "bed" => write_bed(file_path, results, params, command_line),
        "json" => write_json(file_path, results, params, mode, command_line),
        "table" => Err("Table format prints to the console; omit --output".to_string()),
        _ => Err(format!(
            "Unsupported output format: {}. Use: table, tsv, csv, bed, json",
            format
        )),
    }
}

/// Print islands as a console table
pub fn print_table(results: &[RecordIslands]) {
    for result in results {
        println!(
            "\n🏝️  {} ({} bp): {} islands",
            result.id,
            result.length,
            result.islands.len()
        );
        if result.islands.is_empty() {
            continue;
        }
        println!(
            "  {:>12} {:>12} {:>9} {:>8} {:>8}",
            "begin", "end", "length", "gc", "obs/exp"
        );
        for island in &result.islands {
            println!(
                "  {:>12} {:>12} {:>9} {:>8.3} {:>8.3}",
                island.begin,
                island.end,
                island.length(),
                island.gc_fraction(),
                island.obs_exp_ratio()
            );
        }
    }
}

/// Print whole-sequence composition statistics
pub fn print_summaries(summaries: &[SequenceSummary], params: &Parameters) {
    let pair = params.dinucleotide();
    for summary in summaries {
        let c = &summary.composition;
        println!("\n📈 === {} ===", summary.id);
        println!("  • Length: {} bp", c.length);
        println!(
            "  • {} count: {}, {} count: {}, {} count: {}",
            params.first_symbol as char,
            c.first_count,
            params.second_symbol as char,
            c.second_count,
            pair,
            c.pair_count
        );
        println!("  • GC fraction: {:.4}", c.gc_fraction);
        println!("  • {} observed/expected: {:.4}", pair, c.obs_exp_ratio);
        println!(
            "  • Islands: {} covering {} bp ({:.2}%)",
            summary.island_count,
            summary.covered_bp,
            summary.covered_fraction * 100.0
        );
    }
}
