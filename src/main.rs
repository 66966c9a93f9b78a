//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::fs;
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser;

use chatstats::ChatstatsError;
use chatstats::cli::{Args, REPORT_JSON};
use chatstats::core::{Analysis, Pipeline};

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChatstatsError> {
    let total_start = Instant::now();
    let config = args.analysis_config()?;

    println!("📦 chatstats v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!("💾 Output:  {}", args.output_dir.display());
    if let Some(ref path) = args.config {
        println!("⚙️  Config:  {}", path.display());
    }
    println!();

    println!("⏳ Analyzing chat...");
    let parse_start = Instant::now();
    let analysis = Pipeline::new(config).run_file(&args.input)?;
    let stats = analysis.stats;
    println!(
        "   Found {} messages, skipped {} system notices ({:.2}s)",
        stats.scanned,
        stats.system_skipped,
        parse_start.elapsed().as_secs_f64()
    );
    println!(
        "   Kept {} after cleaning ({:.1}% dropped)",
        stats.normalized,
        stats.drop_rate()
    );

    fs::create_dir_all(&args.output_dir)?;
    write_outputs(args, &analysis)?;

    println!();
    println!("✅ Done!");

    print_summary(args, &analysis);

    println!();
    println!("⚡ Performance:");
    println!(
        "   Total time:  {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn write_outputs(args: &Args, analysis: &Analysis) -> Result<(), ChatstatsError> {
    if args.no_charts {
        println!("⏭️  Skipping charts (--no-charts)");
    } else {
        write_charts(args, analysis)?;
    }

    if args.csv {
        write_csv(&args.output_dir, analysis)?;
    }

    if args.json {
        let path = args.output_dir.join(REPORT_JSON);
        println!("💾 Writing JSON report...");
        let json = serde_json::to_string_pretty(&analysis.report)?;
        fs::write(&path, json)?;
        println!("   {}", path.display());
    }

    Ok(())
}

#[cfg(feature = "charts")]
fn write_charts(args: &Args, analysis: &Analysis) -> Result<(), ChatstatsError> {
    println!("📈 Rendering charts...");
    let start = Instant::now();
    let paths =
        chatstats::core::render_charts(&analysis.report, &args.output_dir, &args.chart_config())?;
    for path in paths.all() {
        println!("   {}", path.display());
    }
    println!("   Rendered in {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}

#[cfg(not(feature = "charts"))]
fn write_charts(_args: &Args, _analysis: &Analysis) -> Result<(), ChatstatsError> {
    println!("⚠️  Built without chart support, skipping charts");
    Ok(())
}

#[cfg(feature = "csv-output")]
fn write_csv(dir: &Path, analysis: &Analysis) -> Result<(), ChatstatsError> {
    use chatstats::cli::{RECORDS_CSV, WORDS_CSV};
    use chatstats::core::{write_frequency_csv, write_records_csv};

    println!("💾 Writing CSV...");
    let records = dir.join(RECORDS_CSV);
    let words = dir.join(WORDS_CSV);
    write_records_csv(&analysis.scanned, &records)?;
    write_frequency_csv(&analysis.words, &words)?;
    println!("   {}", records.display());
    println!("   {}", words.display());
    Ok(())
}

#[cfg(not(feature = "csv-output"))]
fn write_csv(_dir: &Path, _analysis: &Analysis) -> Result<(), ChatstatsError> {
    println!("⚠️  Built without CSV support, skipping --csv");
    Ok(())
}

fn print_summary(args: &Args, analysis: &Analysis) {
    let report = &analysis.report;

    println!();
    println!("📊 Summary:");
    println!("   Messages:  {}", report.total_messages());
    println!("   Senders:   {}", report.per_sender.len());
    println!("   Days:      {}", report.per_date.len());
    println!(
        "   Words:     {} ({} distinct)",
        analysis.stats.words,
        analysis.words.len()
    );
    if let Some(hour) = report.peak_hour() {
        println!("   Peak hour: {:02}:00", hour);
    }

    if !report.per_sender.is_empty() {
        println!();
        println!("👥 Most frequent texters:");
        for (sender, n) in &report.per_sender {
            println!("   {:<24} {}", sender, n);
        }
    }

    let top = analysis.words.top(args.top);
    if !top.is_empty() {
        println!();
        println!("🔤 Top {} words:", top.len());
        for (i, (word, n)) in top.iter().enumerate() {
            println!("   {:>2}. {:<20} {}", i + 1, word, n);
        }
    }
}
