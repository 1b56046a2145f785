// 📂 Roster Loader - Employee data model + JSON ingestion
// The input document is a JSON array of employees, each carrying the raw
// (possibly repeated) training-completion history in input order.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// DATA MODEL
// ============================================================================

/// A single training completion as it appears in the source document.
///
/// Dates stay as raw strings and are parsed on demand - the source data is
/// not trusted to be well-formed, and comparison sites decide how to handle
/// records that fail to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Training identifier, e.g. "X-Ray Safety"
    pub name: String,

    /// Completion date (MM/DD/YYYY or YYYY-MM-DD)
    pub timestamp: String,

    /// Expiration date; None = never expires
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
}

impl CompletionRecord {
    /// Completion date, if it parses
    pub fn timestamp_date(&self) -> Option<NaiveDate> {
        parse_date(&self.timestamp)
    }

    /// Expiration date, if present and it parses
    pub fn expires_date(&self) -> Option<NaiveDate> {
        self.expires.as_deref().and_then(parse_date)
    }
}

/// An employee as read from the roster document.
/// `completions` keeps input order and may repeat training names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Employee name ("First Last" format assumed by the source system)
    pub name: String,

    /// Raw completion history, input order, not assumed sorted
    #[serde(default)]
    pub completions: Vec<CompletionRecord>,
}

/// An employee after normalization: exactly one record per distinct training
/// name, holding the latest completion. Produced by
/// [`NormalizationEngine`](crate::normalize::NormalizationEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedEmployee {
    pub name: String,

    /// One record per training name, first-encounter order
    pub completions: Vec<CompletionRecord>,
}

// ============================================================================
// DATE PARSING
// ============================================================================

/// Parse date from string (supports MM/DD/YYYY and YYYY-MM-DD)
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    // Try MM/DD/YYYY
    if let Ok(date) = NaiveDate::parse_from_str(date_str, "%m/%d/%Y") {
        return Some(date);
    }

    // Try YYYY-MM-DD
    if let Ok(date) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        return Some(date);
    }

    None
}

// ============================================================================
// LOADING
// ============================================================================

/// Load the roster document from disk.
///
/// Read failures and parse failures carry distinct contexts so the caller
/// can tell an unreadable source apart from a malformed one.
pub fn load_roster(path: &Path) -> Result<Vec<Employee>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading roster from {}", path.display()))?;

    let employees: Vec<Employee> = serde_json::from_str(&data)
        .with_context(|| format!("parsing roster from {}", path.display()))?;

    Ok(employees)
}

// ============================================================================
// TESTS
// ============================================================================
