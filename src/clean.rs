//! Cleaning pass over the raw admissions table
//!
//! Fills missing ages with the dataset median, parses the two date
//! columns, and derives the length of stay in whole days. The output
//! is a new vector of cleaned records; the raw rows are consumed.

use crate::record::{Admission, AdmissionRow};
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use log::debug;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Count missing values per column of the raw table
///
/// Only the age can be structurally absent; the date and id columns
/// count empty strings. The categorical columns cannot hold a
/// missing value once a row has deserialized, so their counts are
/// always zero, but they are reported anyway so the output covers
/// the full column set.
pub fn missing_value_counts(rows: &[AdmissionRow]) -> Vec<(&'static str, usize)> {
    vec![
        (
            "PatientID",
            rows.iter().filter(|r| r.patient_id.is_empty()).count(),
        ),
        ("Age", rows.iter().filter(|r| r.age.is_none()).count()),
        ("Gender", 0),
        (
            "AdmissionDate",
            rows.iter().filter(|r| r.admission_date.is_empty()).count(),
        ),
        (
            "DischargeDate",
            rows.iter().filter(|r| r.discharge_date.is_empty()).count(),
        ),
        ("Diagnosis", 0),
        ("Outcome", 0),
        ("Readmission", 0),
    ]
}

/// Median of the ages that are present, rounded to a whole year
///
/// Returns None when no row carries an age.
fn median_age(rows: &[AdmissionRow]) -> Option<u32> {
    let mut ages: Vec<u32> = rows.iter().filter_map(|r| r.age).collect();
    if ages.is_empty() {
        return None;
    }
    ages.sort_unstable();
    let mid = ages.len() / 2;
    let median = if ages.len() % 2 == 1 {
        f64::from(ages[mid])
    } else {
        f64::from(ages[mid - 1] + ages[mid]) / 2.0
    };
    Some(median.round() as u32)
}

fn parse_date(text: &str, column: &str, patient_id: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .with_context(|| format!("bad {column} {text:?} for patient {patient_id}"))
}

/// Clean the raw rows into admission records
///
/// Missing ages are filled with the median of the present ages,
/// the date columns are parsed, and the length of stay is derived
/// as (discharge - admission) in whole days. A malformed date or
/// readmission flag is a hard error. Negative stays pass through;
/// the source data does not enforce discharge after admission.
pub fn clean_admissions(rows: Vec<AdmissionRow>) -> Result<Vec<Admission>> {
    let fill_age = median_age(&rows);
    if let Some(age) = fill_age {
        let missing = rows.iter().filter(|r| r.age.is_none()).count();
        if missing > 0 {
            debug!("filling {missing} missing ages with median {age}");
        }
    }

    let mut cleaned = Vec::with_capacity(rows.len());
    for row in rows {
        let age = match row.age.or(fill_age) {
            Some(age) => age,
            None => bail!("no ages present to compute a median fill"),
        };
        let admission_date = parse_date(&row.admission_date, "AdmissionDate", &row.patient_id)?;
        let discharge_date = parse_date(&row.discharge_date, "DischargeDate", &row.patient_id)?;
        let readmission = match row.readmission {
            0 => false,
            1 => true,
            other => bail!(
                "readmission flag {other} for patient {} is not 0 or 1",
                row.patient_id
            ),
        };
        cleaned.push(Admission {
            length_of_stay: (discharge_date - admission_date).num_days(),
            patient_id: row.patient_id,
            age,
            gender: row.gender,
            admission_date,
            discharge_date,
            diagnosis: row.diagnosis,
            outcome: row.outcome,
            readmission,
        });
    }
    Ok(cleaned)
}
