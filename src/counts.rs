// 📊 Completion Counter - Employees covered per training
// Counts, per training name, how many employees carry a normalized
// completion. Normalization guarantees ≤1 record per employee per training,
// so the count is employee coverage, not total completions.

use crate::roster::NormalizedEmployee;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// COUNT REPORT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountReport {
    pub trainings: Vec<TrainingCount>,
}

// ============================================================================
// COUNTER
// ============================================================================

/// Count how many employees completed each training.
///
/// Output order is first-encounter order during a single left-to-right scan
/// over employees and their normalized completions (not alphabetical).
pub fn count_completions(dataset: &[NormalizedEmployee]) -> CountReport {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for employee in dataset {
        for completion in &employee.completions {
            let entry = counts.entry(completion.name.clone()).or_insert_with(|| {
                order.push(completion.name.clone());
                0
            });
            *entry += 1;
        }
    }

    let trainings = order
        .into_iter()
        .map(|name| {
            let count = counts.remove(&name).unwrap_or(0);
            TrainingCount { name, count }
        })
        .collect();

    CountReport { trainings }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::CompletionRecord;

    fn create_test_employee(name: &str, trainings: &[&str]) -> NormalizedEmployee {
        NormalizedEmployee {
            name: name.to_string(),
            completions: trainings
                .iter()
                .map(|t| CompletionRecord {
                    name: t.to_string(),
                    timestamp: "2023-08-01".to_string(),
                    expires: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_count_is_employee_coverage() {
        let dataset = vec![
            create_test_employee("Amy Zed", &["Lab Safety", "X-Ray Safety"]),
            create_test_employee("Bob Ray", &["Lab Safety"]),
            create_test_employee("Jane Doe", &["Lab Safety"]),
        ];

        let report = count_completions(&dataset);

        assert_eq!(report.trainings.len(), 2);
        assert_eq!(report.trainings[0].name, "Lab Safety");
        assert_eq!(report.trainings[0].count, 3);
        assert_eq!(report.trainings[1].name, "X-Ray Safety");
        assert_eq!(report.trainings[1].count, 1);
    }

    #[test]
    fn test_count_never_exceeds_employee_count() {
        let dataset = vec![
            create_test_employee("Amy Zed", &["Lab Safety"]),
            create_test_employee("Bob Ray", &["Lab Safety"]),
        ];

        let report = count_completions(&dataset);

        for training in &report.trainings {
            assert!(training.count <= dataset.len());
        }
    }

    #[test]
    fn test_first_encounter_order() {
        let dataset = vec![
            create_test_employee("Amy Zed", &["Chemical Handling"]),
            create_test_employee("Bob Ray", &["Lab Safety", "Chemical Handling"]),
            create_test_employee("Jane Doe", &["X-Ray Safety"]),
        ];

        let report = count_completions(&dataset);
        let names: Vec<&str> = report.trainings.iter().map(|t| t.name.as_str()).collect();

        assert_eq!(names, vec!["Chemical Handling", "Lab Safety", "X-Ray Safety"]);
    }

    #[test]
    fn test_empty_dataset() {
        let report = count_completions(&[]);
        assert!(report.trainings.is_empty());
    }

    #[test]
    fn test_employees_without_completions_contribute_nothing() {
        let dataset = vec![
            create_test_employee("Amy Zed", &[]),
            create_test_employee("Bob Ray", &["Lab Safety"]),
        ];

        let report = count_completions(&dataset);

        assert_eq!(report.trainings.len(), 1);
        assert_eq!(report.trainings[0].count, 1);
    }
}
