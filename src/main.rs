use anyhow::{bail, Result};
use chrono::NaiveDate;
use std::env;
use std::path::{Path, PathBuf};
use std::process;

use training_tracker::{
    artifact_path, count_completions, load_roster, parse_date, write_artifact,
    ExpirationEngine, FiscalYearEngine, NormalizationEngine, COUNTS_FILE, EXPIRATION_FILE,
    FISCAL_YEAR_FILE, VERSION,
};

/// Run configuration assembled from the command line
#[derive(Debug)]
struct RunConfig {
    roster_path: PathBuf,
    output_dir: PathBuf,
    fiscal_year: i32,
    reference_date: NaiveDate,
    tracked_trainings: Vec<String>,
    strict: bool,
}

const USAGE: &str = "Usage: training-tracker <roster.json> [output-dir] \
    [--fiscal-year N] [--reference-date DATE] [--training NAME]... [--strict]";

/// Trainings reported on when no --training flags are given
fn default_trainings() -> Vec<String> {
    vec![
        "Electrical Safety for Labs".to_string(),
        "X-Ray Safety".to_string(),
        "Laboratory Safety Training".to_string(),
    ]
}

fn parse_args(args: &[String]) -> Result<RunConfig> {
    let mut positional: Vec<String> = Vec::new();
    let mut fiscal_year = 2024;
    let mut reference_date = NaiveDate::from_ymd_opt(2023, 10, 1).unwrap_or(NaiveDate::MIN);
    let mut trainings: Vec<String> = Vec::new();
    let mut strict = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--fiscal-year" => {
                let value = iter.next().ok_or_else(|| {
                    anyhow::anyhow!("--fiscal-year requires a value\n{}", USAGE)
                })?;
                fiscal_year = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("invalid fiscal year: {}", value))?;
            }
            "--reference-date" => {
                let value = iter.next().ok_or_else(|| {
                    anyhow::anyhow!("--reference-date requires a value\n{}", USAGE)
                })?;
                reference_date = parse_date(value)
                    .ok_or_else(|| anyhow::anyhow!("invalid reference date: {}", value))?;
            }
            "--training" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--training requires a value\n{}", USAGE))?;
                trainings.push(value.clone());
            }
            "--strict" => strict = true,
            flag if flag.starts_with("--") => bail!("unknown flag: {}\n{}", flag, USAGE),
            _ => positional.push(arg.clone()),
        }
    }

    if positional.is_empty() || positional.len() > 2 {
        bail!("{}", USAGE);
    }

    Ok(RunConfig {
        roster_path: PathBuf::from(&positional[0]),
        output_dir: positional
            .get(1)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("output")),
        fiscal_year,
        reference_date,
        tracked_trainings: if trainings.is_empty() {
            default_trainings()
        } else {
            trainings
        },
        strict,
    })
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = parse_args(&args)?;

    println!("📋 Training Tracker v{}", VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Load roster
    println!("\n📂 Loading roster...");
    let employees = load_roster(&config.roster_path)?;
    println!("✓ Loaded {} employees", employees.len());

    // 2. Normalize
    println!("\n🔄 Normalizing completions...");
    let engine = if config.strict {
        NormalizationEngine::strict()
    } else {
        NormalizationEngine::new()
    };
    let normalized = engine.normalize(&employees)?;
    let total: usize = normalized.iter().map(|e| e.completions.len()).sum();
    println!("✓ {} distinct completions after deduplication", total);

    // 3. Reports - each stage writes its own artifact; a failed write is
    //    reported and the remaining stages still run.
    let mut failures = 0;

    println!("\n📊 Completion counts...");
    let counts = count_completions(&normalized);
    failures += persist(
        &artifact_path(&config.output_dir, COUNTS_FILE),
        &counts,
        counts.trainings.len(),
        "trainings counted",
    );

    println!("\n📅 Fiscal year {} roster...", config.fiscal_year);
    let fiscal = FiscalYearEngine::new(config.fiscal_year, config.tracked_trainings.clone())
        .build(&normalized);
    failures += persist(
        &artifact_path(&config.output_dir, FISCAL_YEAR_FILE),
        &fiscal,
        fiscal.trainings.len(),
        "trainings tracked",
    );

    println!(
        "\n⏰ Expirations relative to {}...",
        config.reference_date
    );
    let expirations = ExpirationEngine::new(config.reference_date).scan(&normalized);
    failures += persist(
        &artifact_path(&config.output_dir, EXPIRATION_FILE),
        &expirations,
        expirations.employees.len(),
        "employees flagged",
    );

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    if failures == 0 {
        println!("🎉 All reports written to {}", config.output_dir.display());
    } else {
        eprintln!("❌ {} report(s) failed to persist", failures);
        process::exit(1);
    }

    Ok(())
}

/// Write one artifact, reporting success or failure. Returns 1 on failure so
/// the caller can tally without aborting the remaining stages.
fn persist<T: serde::Serialize>(path: &Path, report: &T, n: usize, what: &str) -> u32 {
    match write_artifact(path, report) {
        Ok(()) => {
            println!("✓ {} {} → {}", n, what, path.display());
            0
        }
        Err(err) => {
            eprintln!("❌ Failed to write {}: {:#}", path.display(), err);
            1
        }
    }
}
