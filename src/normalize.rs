// 🔄 Normalization Engine - Latest completion per training per employee
// Reduces the raw (possibly repeated) completion history down to one record
// per distinct training name: the one with the most recent timestamp.

use crate::roster::{CompletionRecord, Employee, NormalizedEmployee};
use anyhow::{bail, Result};
use std::collections::HashMap;

// ============================================================================
// NORMALIZATION ENGINE
// ============================================================================

/// Left-to-right scan keyed by training name.
///
/// The first record seen for a training always enters the map; a later
/// record displaces the incumbent only when BOTH timestamps parse and the
/// new date is strictly greater. Equal dates keep the incumbent, and a
/// record on either side that fails to parse blocks replacement. With
/// `strict_timestamps` off (the default) unparseable timestamps therefore
/// degrade silently; turn it on to make them a hard error instead.
pub struct NormalizationEngine {
    /// Fail the run on any unparseable completion timestamp (default: false)
    pub strict_timestamps: bool,
}

impl NormalizationEngine {
    /// Create engine with the lenient date policy
    pub fn new() -> Self {
        NormalizationEngine {
            strict_timestamps: false,
        }
    }

    /// Create engine that rejects unparseable timestamps
    pub fn strict() -> Self {
        NormalizationEngine {
            strict_timestamps: true,
        }
    }

    /// Normalize the whole roster. Output preserves employee order and the
    /// full set of employee names, including employees with no completions.
    pub fn normalize(&self, employees: &[Employee]) -> Result<Vec<NormalizedEmployee>> {
        employees
            .iter()
            .map(|employee| self.normalize_employee(employee))
            .collect()
    }

    fn normalize_employee(&self, employee: &Employee) -> Result<NormalizedEmployee> {
        // Keyed map of the currently-best record per training, plus the
        // first-encounter order so output stays deterministic.
        let mut best: HashMap<String, CompletionRecord> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        for record in &employee.completions {
            if self.strict_timestamps && record.timestamp_date().is_none() {
                bail!(
                    "unparseable timestamp {:?} for training {:?} of employee {:?}",
                    record.timestamp,
                    record.name,
                    employee.name
                );
            }

            match best.get(&record.name) {
                None => {
                    order.push(record.name.clone());
                    best.insert(record.name.clone(), record.clone());
                }
                Some(current) => {
                    let newer = match (current.timestamp_date(), record.timestamp_date()) {
                        (Some(current_date), Some(new_date)) => new_date > current_date,
                        _ => false,
                    };
                    if newer {
                        best.insert(record.name.clone(), record.clone());
                    }
                }
            }
        }

        let completions = order
            .into_iter()
            .filter_map(|name| best.remove(&name))
            .collect();

        Ok(NormalizedEmployee {
            name: employee.name.clone(),
            completions,
        })
    }
}

impl Default for NormalizationEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
