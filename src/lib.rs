// Training Tracker - Core Library
// Exposes the reporting pipeline for use in the CLI and tests

pub mod roster;      // Data model + JSON roster loading
pub mod normalize;   // Normalization Engine - latest completion per training
pub mod counts;      // Completion Counter - employees covered per training
pub mod fiscal_year; // Fiscal-Year Roster Builder
pub mod expiration;  // Expiration Scanner - expired / expires soon
pub mod artifacts;   // Artifact Writer - reports to JSON files

// Re-export commonly used types
pub use roster::{
    parse_date, load_roster,
    CompletionRecord, Employee, NormalizedEmployee,
};
pub use normalize::NormalizationEngine;
pub use counts::{count_completions, CountReport, TrainingCount};
pub use fiscal_year::{
    name_sort_key,
    FiscalYearEngine, FiscalYearReport, TrainingRoster,
};
pub use expiration::{
    EmployeeExpirations, ExpirationEngine, ExpirationReport, ExpirationStatus,
    ExpiringTraining,
};
pub use artifacts::{
    artifact_path, write_artifact,
    COUNTS_FILE, EXPIRATION_FILE, FISCAL_YEAR_FILE,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
