// 💾 Artifact Writer - Persist reports as JSON documents
// Each report becomes one pretty-printed JSON file under the output
// directory. Serialization format and destination live here so the report
// builders stay pure.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the completion-count artifact
pub const COUNTS_FILE: &str = "completion_counts.json";

/// File name of the fiscal-year roster artifact
pub const FISCAL_YEAR_FILE: &str = "fiscal_year_completions.json";

/// File name of the expiration artifact
pub const EXPIRATION_FILE: &str = "expiring_trainings.json";

/// Resolve an artifact's destination under the output directory
pub fn artifact_path(output_dir: &Path, file_name: &str) -> PathBuf {
    output_dir.join(file_name)
}

/// Write one report to disk as pretty JSON.
///
/// Creates the output directory if needed. Failures carry the destination
/// path so the caller can report which artifact was lost; a failure here
/// must not stop the other reports from being attempted.
pub fn write_artifact<T: Serialize>(path: &Path, report: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(report)
        .with_context(|| format!("serializing report for {}", path.display()))?;

    fs::write(path, json).with_context(|| format!("writing artifact {}", path.display()))?;

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
