// ⏰ Expiration Scanner - Expired and expiring-soon trainings per employee
// Classifies each employee's normalized completions against a caller-supplied
// reference date. "Soon" means within one month of the reference date.

use crate::roster::NormalizedEmployee;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

// ============================================================================
// EXPIRATION STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ExpirationStatus {
    /// Expiration date is strictly before the reference date
    #[serde(rename = "expired")]
    Expired,

    /// Expiration date falls on or after the reference date, within one month
    #[serde(rename = "expires soon")]
    ExpiresSoon,
}

// ============================================================================
// EXPIRATION REPORT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiringTraining {
    pub name: String,
    pub status: ExpirationStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeExpirations {
    pub name: String,
    pub trainings: Vec<ExpiringTraining>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpirationReport {
    pub employees: Vec<EmployeeExpirations>,
}

// ============================================================================
// EXPIRATION ENGINE
// ============================================================================

pub struct ExpirationEngine {
    /// Reference date D; the soon window is D ..= D+1 month
    pub reference_date: NaiveDate,
}

impl ExpirationEngine {
    pub fn new(reference_date: NaiveDate) -> Self {
        ExpirationEngine { reference_date }
    }

    /// Last day of the "expires soon" window: one calendar month after the
    /// reference date, clamped to the last valid day of the target month
    /// (Jan 31 + 1 month = Feb 28/29).
    pub fn soon_boundary(&self) -> NaiveDate {
        self.reference_date
            .checked_add_months(Months::new(1))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Classify a single expiration date against the reference date.
    ///
    /// A date exactly equal to the reference date counts as expiring soon,
    /// not expired. Dates past the soon boundary are out of scope entirely.
    pub fn classify(&self, expires: NaiveDate) -> Option<ExpirationStatus> {
        if expires < self.reference_date {
            Some(ExpirationStatus::Expired)
        } else if expires <= self.soon_boundary() {
            Some(ExpirationStatus::ExpiresSoon)
        } else {
            None
        }
    }

    /// Scan the normalized dataset for expired and expiring-soon trainings.
    ///
    /// Completions without an expiration date never expire; an expiration
    /// date that fails to parse is treated the same way. Employees with no
    /// qualifying completions are omitted from the report. Within an
    /// employee's entry, qualifying trainings keep normalized scan order.
    pub fn scan(&self, dataset: &[NormalizedEmployee]) -> ExpirationReport {
        let employees = dataset
            .iter()
            .filter_map(|employee| {
                let trainings: Vec<ExpiringTraining> = employee
                    .completions
                    .iter()
                    .filter_map(|completion| {
                        let expires = completion.expires_date()?;
                        let status = self.classify(expires)?;
                        Some(ExpiringTraining {
                            name: completion.name.clone(),
                            status,
                        })
                    })
                    .collect();

                if trainings.is_empty() {
                    None
                } else {
                    Some(EmployeeExpirations {
                        name: employee.name.clone(),
                        trainings,
                    })
                }
            })
            .collect();

        ExpirationReport { employees }
    }
}

// ============================================================================
// TESTS
// ============================================================================
