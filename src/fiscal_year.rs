// 📅 Fiscal-Year Roster Builder - Who completed what, within the year
// Fiscal year Y runs July 1 (Y-1) through June 30 (Y), both ends inclusive.
// The tracked training list is caller-supplied; a tracked training with no
// matches is still emitted with an empty roster.

use crate::roster::NormalizedEmployee;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// FISCAL-YEAR REPORT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRoster {
    pub name: String,

    /// Employee names, sorted by last name then first name
    #[serde(rename = "completedBy")]
    pub completed_by: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiscalYearReport {
    pub trainings: Vec<TrainingRoster>,
}

// ============================================================================
// NAME SORT KEY
// ============================================================================

/// Split an employee name into a (last, first) sort key.
///
/// The last whitespace-delimited token is the last name; everything before
/// it is the first name. A single-token name sorts with the whole token as
/// last name. Middle names and suffixes therefore end up in the wrong slot
/// ("Sammy Davis Jr" sorts under "Jr") - a known limitation of the source
/// data's "First Last" assumption.
pub fn name_sort_key(name: &str) -> (String, String) {
    let trimmed = name.trim();
    match trimmed.rsplit_once(char::is_whitespace) {
        Some((first, last)) => (last.to_string(), first.trim_end().to_string()),
        None => (trimmed.to_string(), String::new()),
    }
}

// ============================================================================
// ROSTER ENGINE
// ============================================================================

pub struct FiscalYearEngine {
    /// Fiscal year Y; the window is July 1 (Y-1) ..= June 30 (Y)
    pub fiscal_year: i32,

    /// Trainings to report on, output order preserved
    pub tracked_trainings: Vec<String>,
}

impl FiscalYearEngine {
    pub fn new(fiscal_year: i32, tracked_trainings: Vec<String>) -> Self {
        FiscalYearEngine {
            fiscal_year,
            tracked_trainings,
        }
    }

    /// First day of the fiscal year (July 1 of the prior calendar year)
    pub fn window_start(&self) -> NaiveDate {
        // July 1 exists in every chrono-representable year
        NaiveDate::from_ymd_opt(self.fiscal_year - 1, 7, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the fiscal year (June 30), inclusive
    pub fn window_end(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.fiscal_year, 6, 30).unwrap_or(NaiveDate::MAX)
    }

    /// Build the roster report from the normalized dataset.
    ///
    /// Every tracked training appears in the output, even with zero matches;
    /// trainings absent from the dataset are not an error. Completions whose
    /// timestamp fails to parse never fall inside the window.
    pub fn build(&self, dataset: &[NormalizedEmployee]) -> FiscalYearReport {
        let start = self.window_start();
        let end = self.window_end();

        let trainings = self
            .tracked_trainings
            .iter()
            .map(|training| {
                let mut completed_by: Vec<String> = dataset
                    .iter()
                    .filter(|employee| {
                        employee.completions.iter().any(|completion| {
                            completion.name == *training
                                && completion
                                    .timestamp_date()
                                    .map(|date| date >= start && date <= end)
                                    .unwrap_or(false)
                        })
                    })
                    .map(|employee| employee.name.clone())
                    .collect();

                completed_by.sort_by_key(|name| name_sort_key(name));

                TrainingRoster {
                    name: training.clone(),
                    completed_by,
                }
            })
            .collect();

        FiscalYearReport { trainings }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::CompletionRecord;

    fn create_test_employee(name: &str, completions: &[(&str, &str)]) -> NormalizedEmployee {
        NormalizedEmployee {
            name: name.to_string(),
            completions: completions
                .iter()
                .map(|(training, timestamp)| CompletionRecord {
                    name: training.to_string(),
                    timestamp: timestamp.to_string(),
                    expires: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_window_bounds() {
        let engine = FiscalYearEngine::new(2024, vec![]);

        assert_eq!(
            engine.window_start(),
            NaiveDate::from_ymd_opt(2023, 7, 1).unwrap()
        );
        assert_eq!(
            engine.window_end(),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
        );
    }

    #[test]
    fn test_roster_sorted_by_last_name() {
        let engine = FiscalYearEngine::new(2024, vec!["Lab Safety".to_string()]);

        let dataset = vec![
            create_test_employee("Amy Zed", &[("Lab Safety", "2023-08-01")]),
            create_test_employee("Bob Ray", &[("Lab Safety", "2023-08-01")]),
        ];

        let report = engine.build(&dataset);

        assert_eq!(report.trainings.len(), 1);
        assert_eq!(
            report.trainings[0].completed_by,
            vec!["Bob Ray".to_string(), "Amy Zed".to_string()]
        );
    }

    #[test]
    fn test_same_last_name_sorted_by_first_name() {
        let engine = FiscalYearEngine::new(2024, vec!["Lab Safety".to_string()]);

        let dataset = vec![
            create_test_employee("Zoe Ray", &[("Lab Safety", "2023-08-01")]),
            create_test_employee("Bob Ray", &[("Lab Safety", "2023-08-01")]),
        ];

        let report = engine.build(&dataset);
        assert_eq!(
            report.trainings[0].completed_by,
            vec!["Bob Ray".to_string(), "Zoe Ray".to_string()]
        );
    }

    #[test]
    fn test_window_boundaries_inclusive() {
        let engine = FiscalYearEngine::new(2024, vec!["Lab Safety".to_string()]);

        let dataset = vec![
            create_test_employee("Amy Zed", &[("Lab Safety", "2023-07-01")]),
            create_test_employee("Bob Ray", &[("Lab Safety", "2024-06-30")]),
            create_test_employee("Jane Doe", &[("Lab Safety", "2023-06-30")]),
            create_test_employee("John Roe", &[("Lab Safety", "2024-07-01")]),
        ];

        let report = engine.build(&dataset);

        // Exactly the two boundary completions fall inside the window
        assert_eq!(
            report.trainings[0].completed_by,
            vec!["Bob Ray".to_string(), "Amy Zed".to_string()]
        );
    }

    #[test]
    fn test_untracked_trainings_ignored() {
        let engine = FiscalYearEngine::new(2024, vec!["Lab Safety".to_string()]);

        let dataset = vec![create_test_employee(
            "Amy Zed",
            &[("X-Ray Safety", "2023-08-01")],
        )];

        let report = engine.build(&dataset);

        assert_eq!(report.trainings.len(), 1);
        assert!(report.trainings[0].completed_by.is_empty());
    }

    #[test]
    fn test_absent_training_still_emitted() {
        let engine = FiscalYearEngine::new(
            2024,
            vec!["Lab Safety".to_string(), "Forklift Operation".to_string()],
        );

        let dataset = vec![create_test_employee(
            "Amy Zed",
            &[("Lab Safety", "2023-08-01")],
        )];

        let report = engine.build(&dataset);

        assert_eq!(report.trainings.len(), 2);
        assert_eq!(report.trainings[1].name, "Forklift Operation");
        assert!(report.trainings[1].completed_by.is_empty());
    }

    #[test]
    fn test_tracked_order_preserved() {
        let engine = FiscalYearEngine::new(
            2024,
            vec![
                "X-Ray Safety".to_string(),
                "Lab Safety".to_string(),
                "Chemical Handling".to_string(),
            ],
        );

        let report = engine.build(&[]);
        let names: Vec<&str> = report.trainings.iter().map(|t| t.name.as_str()).collect();

        assert_eq!(
            names,
            vec!["X-Ray Safety", "Lab Safety", "Chemical Handling"]
        );
    }

    #[test]
    fn test_unparseable_timestamp_outside_window() {
        let engine = FiscalYearEngine::new(2024, vec!["Lab Safety".to_string()]);

        let dataset = vec![create_test_employee(
            "Amy Zed",
            &[("Lab Safety", "sometime last fall")],
        )];

        let report = engine.build(&dataset);
        assert!(report.trainings[0].completed_by.is_empty());
    }

    #[test]
    fn test_name_sort_key_splits_on_last_whitespace() {
        assert_eq!(
            name_sort_key("Bob Ray"),
            ("Ray".to_string(), "Bob".to_string())
        );
        assert_eq!(
            name_sort_key("Mary Jane Watson"),
            ("Watson".to_string(), "Mary Jane".to_string())
        );
        assert_eq!(name_sort_key("Cher"), ("Cher".to_string(), String::new()));
        assert_eq!(
            name_sort_key("  Bob Ray  "),
            ("Ray".to_string(), "Bob".to_string())
        );
    }
}
