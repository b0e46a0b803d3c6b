// main.rs - CLI entry point

use std::path::Path;
use std::time::Instant;

use cpgislands::cli::Config;
use cpgislands::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    println!("🚀 {}", cpgislands::get_info());

    let validation_result = validate_args(&args)?;
    let params = &validation_result.parameters;

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("🧵 Threads: {}", n);
    } else if validation_result.selection == RecordSelection::All {
        println!("🧵 Threads: {} (auto-detected)", rayon::current_num_threads());
    }

    let total_start = Instant::now();

    // Acquire sequences
    let uppercase = !args.keep_case;
    let mut set = match (&args.fasta, &args.sequence) {
        (Some(path), _) => SequenceSet::from_fasta(Path::new(path), uppercase)?,
        (None, Some(text)) => SequenceSet::from_literal(text, uppercase)?,
        (None, None) => return Err("--fasta or --sequence is required".to_string()),
    };

    if validation_result.record_include_regex.is_some()
        || validation_result.record_exclude_regex.is_some()
    {
        let before = set.len();
        set.filter_ids(
            validation_result.record_include_regex.as_ref(),
            validation_result.record_exclude_regex.as_ref(),
        );
        println!("📋 Record filters kept {} of {} records", set.len(), before);
    }

    let records = set.select(&validation_result.selection)?;
    if records.len() == 1 {
        println!("🧬 Record: {} ({} bp)", records[0].id, records[0].len());
    } else {
        let total: usize = records.iter().map(|r| r.len()).sum();
        println!("🧬 Records: {} ({} bp total)", records.len(), total);
    }

    println!(
        "🎯 Mode: {} | window ≥ {} bp, GC ≥ {}, {} obs/exp ≥ {}, merge gap < {} bp",
        validation_result.scan_mode.description(),
        params.min_window_size,
        params.min_gc_fraction,
        params.dinucleotide(),
        params.min_obs_exp_ratio,
        params.merge_gap
    );

    if args.dry_run {
        println!("✅ Dry run completed successfully");
        return Ok(());
    }

    let finder = IslandFinder::new(params.clone())
        .map_err(|e| e.to_string())?
        .with_mode(validation_result.scan_mode);

    // Scan
    let scan_start = Instant::now();
    let results = if records.len() > 1 {
        let pb = ProgressBar::new(records.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} records scanned",
                )
                .map_err(|e| format!("Invalid progress template: {}", e))?,
        );
        let results = find_islands_batch(&records, &finder, Some(&pb)).map_err(|e| e.to_string())?;
        pb.finish_with_message("✅ Scan complete!");
        results
    } else {
        find_islands_batch(&records, &finder, None).map_err(|e| e.to_string())?
    };
    let scan_elapsed = scan_start.elapsed();

    let island_total: usize = results.iter().map(|r| r.islands.len()).sum();
    println!(
        "✅ Found {} {} in {:.3}s",
        island_total,
        match validation_result.scan_mode {
            ScanMode::Islands => "islands",
            ScanMode::Windows => "qualifying windows",
        },
        scan_elapsed.as_secs_f64()
    );

    // Handle stats-only mode
    if args.stats_only {
        let summaries = records
            .iter()
            .zip(&results)
            .map(|(record, result)| summarize(record, &finder, &result.islands))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| e.to_string())?;
        print_summaries(&summaries, params);
        println!("\n✅ Statistics analysis completed");
    } else if let Some(output_path) = &args.output {
        write_islands(
            output_path,
            &validation_result.format,
            &results,
            params,
            validation_result.scan_mode,
            &command_line,
        )?;
    } else if validation_result.format == "table" {
        print_table(&results);
    } else {
        return Err(format!(
            "--output is required for format '{}'",
            validation_result.format
        ));
    }

    let total_elapsed = total_start.elapsed();
    println!(
        "\n⏱️  Total execution time: {:.2}s",
        total_elapsed.as_secs_f64()
    );
    Ok(())
}
