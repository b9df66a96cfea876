//! fakedata-runner: generate the investment dataset and write it as JSON.
//!
//! Usage:
//!   fakedata-runner --seed 12345 --out ./output
//!   fakedata-runner --config run.json --users 100 --as-of 2024-12-31

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use fakedata_core::{
    config::{ConfigFile, CountOverrides, GenConfig},
    pipeline::Dataset,
    sink::JsonSink,
};
use std::{env, path::PathBuf, str::FromStr};

const USAGE: &str = "\
usage: fakedata-runner [--config FILE] [--seed N] [--as-of YYYY-MM-DD]
                       [--out DIR] [--preview N]
                       [--users N] [--portfolios N] [--assets N]
                       [--transactions N] [--performance-metrics N]
                       [--market-data N] [--recommendations N]";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{USAGE}");
        return Ok(());
    }

    let config = load_config(&args)?;

    println!("fakedata — investment dataset generator");
    println!("  seed:      {}", config.seed);
    println!("  as_of:     {}", config.as_of);
    println!("  out:       {}", config.output_dir.display());
    println!();

    let ctx = config.context();
    let dataset = Dataset::generate(&ctx, &config.counts)?;
    let sink = JsonSink::create(&config.output_dir)?;
    let manifest = dataset.write_all(&sink, &ctx, &config.counts)?;
    log::info!(
        "run complete: {} tables written to {}",
        manifest.tables.len(),
        sink.dir().display()
    );

    print_summary(&dataset, &config)?;
    Ok(())
}

/// Config file (if any) overlaid with command-line flags.
/// All validation happens here, before generation.
fn load_config(args: &[String]) -> Result<GenConfig> {
    check_flags(args)?;

    let base = match flag_value::<PathBuf>(args, "--config")? {
        Some(path) => ConfigFile::load(&path)?,
        None => ConfigFile::default(),
    };

    let as_of = match flag_str(args, "--as-of") {
        Some(raw) => Some(
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .with_context(|| format!("--as-of expects YYYY-MM-DD, got {raw:?}"))?,
        ),
        None => None,
    };

    let cli = ConfigFile {
        seed: flag_value(args, "--seed")?,
        as_of,
        output_dir: flag_value(args, "--out")?,
        preview_rows: flag_value(args, "--preview")?,
        counts: CountOverrides {
            users: flag_value(args, "--users")?,
            portfolios: flag_value(args, "--portfolios")?,
            assets: flag_value(args, "--assets")?,
            transactions: flag_value(args, "--transactions")?,
            performance_metrics: flag_value(args, "--performance-metrics")?,
            market_data: flag_value(args, "--market-data")?,
            recommendations: flag_value(args, "--recommendations")?,
        },
    };

    Ok(base.merge(cli).resolve()?)
}

const FLAGS: &[&str] = &[
    "--config",
    "--seed",
    "--as-of",
    "--out",
    "--preview",
    "--users",
    "--portfolios",
    "--assets",
    "--transactions",
    "--performance-metrics",
    "--market-data",
    "--recommendations",
];

/// Every flag takes exactly one value.
fn check_flags(args: &[String]) -> Result<()> {
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        if !FLAGS.contains(&flag) {
            bail!("unknown argument {flag:?}\n{USAGE}");
        }
        if i + 1 >= args.len() {
            bail!("{flag} expects a value\n{USAGE}");
        }
        i += 2;
    }
    Ok(())
}

fn flag_str<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn flag_value<T>(args: &[String], flag: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    flag_str(args, flag)
        .map(|raw| {
            raw.parse::<T>()
                .with_context(|| format!("invalid value {raw:?} for {flag}"))
        })
        .transpose()
}

fn print_summary(dataset: &Dataset, config: &GenConfig) -> Result<()> {
    println!("=== RUN SUMMARY ===");
    for (kind, rows) in dataset.row_counts() {
        println!("  {:<28} {rows:>6} rows  -> {}", kind.name(), kind.file_name());
    }

    if config.preview_rows == 0 {
        return Ok(());
    }
    for preview in dataset.preview(config.preview_rows)? {
        println!();
        println!(
            "=== {} (first {} of {}) ===",
            preview.kind,
            preview.lines.len(),
            preview.total_rows
        );
        if preview.lines.is_empty() {
            println!("  (empty)");
        }
        for line in &preview.lines {
            println!("  {line}");
        }
    }
    Ok(())
}
