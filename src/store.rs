//! CSV persistence for the admissions table
//!
//! One delimited file with a fixed column header. The derived
//! length-of-stay field is never part of the file; it only exists
//! on the cleaned in-memory records.

use crate::record::AdmissionRow;
use anyhow::{Context, Result};
use std::path::Path;

/// The fixed column header of the admissions file, in order
pub const CSV_COLUMNS: [&str; 8] = [
    "PatientID",
    "Age",
    "Gender",
    "AdmissionDate",
    "DischargeDate",
    "Diagnosis",
    "Outcome",
    "Readmission",
];

/// Write the admissions table to a CSV file at `path`
///
/// The header row is derived from the row type and matches
/// [`CSV_COLUMNS`].
pub fn save_admissions(path: impl AsRef<Path>, rows: &[AdmissionRow]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("failed to write row {}", row.patient_id))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}

/// Read the admissions table back from a CSV file at `path`
pub fn load_admissions(path: impl AsRef<Path>) -> Result<Vec<AdmissionRow>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut rows = Vec::new();
    for (index, row) in reader.deserialize().enumerate() {
        let row: AdmissionRow =
            row.with_context(|| format!("malformed record {} in {}", index + 1, path.display()))?;
        rows.push(row);
    }
    Ok(rows)
}
