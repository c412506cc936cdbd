use crate::models::{MonthlyRecord, Station};
use validator::Validate;

#[derive(Debug, Clone)]
pub struct IntegrityReport {
    pub station_name: String,
    pub total_records: usize,
    pub valid_records: usize,
    pub violations: Vec<RainfallViolation>,
}

#[derive(Debug, Clone)]
pub struct RainfallViolation {
    pub year: i32,
    pub month: i32,
    pub violation_type: ViolationType,
    pub details: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationType {
    MinGreaterThanMax,
    MaxGreaterThanTotal,
    OutOfRange,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Checks the monthly invariants of a loaded station without rejecting it.
pub struct IntegrityChecker {
    tolerance: f64,
}

impl IntegrityChecker {
    pub fn new() -> Self {
        Self {
            tolerance: 0.005, // half of the analysed file's rounding step
        }
    }

    pub fn check_station(&self, station: &Station) -> IntegrityReport {
        let mut report = IntegrityReport {
            station_name: station.name().to_string(),
            total_records: station.len(),
            valid_records: 0,
            violations: Vec::new(),
        };

        for record in station.values() {
            let before = report.violations.len();
            self.check_record(record, &mut report);
            if report.violations.len() == before {
                report.valid_records += 1;
            }
        }

        report
    }

    fn check_record(&self, record: &MonthlyRecord, report: &mut IntegrityReport) {
        let mut push = |violation_type, details: String| {
            report.violations.push(RainfallViolation {
                year: record.year(),
                month: record.month(),
                violation_type,
                details,
            });
        };

        if let Err(errors) = record.validate() {
            for field in errors.field_errors().keys() {
                push(
                    ViolationType::OutOfRange,
                    format!("{} is outside its valid range", field),
                );
            }
        }

        if record.min() > record.max() + self.tolerance {
            push(
                ViolationType::MinGreaterThanMax,
                format!("min {:.2} > max {:.2}", record.min(), record.max()),
            );
        }

        if record.max() > record.total() + self.tolerance {
            push(
                ViolationType::MaxGreaterThanTotal,
                format!("max {:.2} > total {:.2}", record.max(), record.total()),
            );
        }
    }

    /// Generate a summary report
    pub fn generate_summary(&self, report: &IntegrityReport) -> String {
        let mut summary = String::new();

        summary.push_str(&format!(
            "=== Integrity Check Report: {} ===\n",
            report.station_name
        ));
        summary.push_str(&format!("Monthly Records: {}\n", report.total_records));
        if report.total_records > 0 {
            summary.push_str(&format!(
                "Valid Records: {} ({:.1}%)\n",
                report.valid_records,
                100.0 * report.valid_records as f64 / report.total_records as f64
            ));
        }
        summary.push_str(&format!("Violations: {}\n", report.violations.len()));

        if !report.violations.is_empty() {
            summary.push_str("\nTop 10 Violations:\n");
            for (i, violation) in report.violations.iter().take(10).enumerate() {
                summary.push_str(&format!(
                    "  {}. {}-{:02}: {}\n",
                    i + 1,
                    violation.year,
                    violation.month,
                    violation.details
                ));
            }
        }

        summary
    }
}

impl Default for IntegrityChecker {
    fn default() -> Self {
        Self::new()
    }
}
