use crate::domain::models::{OutcomeReport, Record};
use crate::validator::validate_age;
use tracing::debug;

pub fn report_for(record: &Record) -> OutcomeReport {
    let (valid, message) = match validate_age(record) {
        Ok(r) => (true, format!("User {} has a valid age.", r.name)),
        Err(e) => (false, e.to_string()),
    };
    debug!(name = %record.name, age = record.age, valid, "validated record");
    OutcomeReport {
        name: record.name.clone(),
        age: record.age,
        valid,
        message,
    }
}

/// Validates every record in order. Invalid records are reported, never fatal.
pub fn validate_batch(records: &[Record]) -> Vec<OutcomeReport> {
    let reports: Vec<OutcomeReport> = records.iter().map(report_for).collect();
    let valid = reports.iter().filter(|r| r.valid).count();
    debug!(
        total = reports.len(),
        valid,
        invalid = reports.len() - valid,
        "batch validated"
    );
    reports
}
