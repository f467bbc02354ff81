//! Row types for the hospital admissions table
//!
//! Two representations are used. [`AdmissionRow`] is the raw shape
//! that goes to and from the CSV file: dates are plain text and the
//! age may be missing. [`Admission`] is the cleaned shape produced
//! by the cleaner, with parsed dates and the derived length of stay.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Patient gender as recorded on admission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Primary diagnosis category for the admission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnosis {
    Diabetes,
    #[serde(rename = "Heart Disease")]
    HeartDisease,
    Fracture,
    Infection,
}

impl Diagnosis {
    pub const ALL: [Diagnosis; 4] = [
        Diagnosis::Diabetes,
        Diagnosis::HeartDisease,
        Diagnosis::Fracture,
        Diagnosis::Infection,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Diagnosis::Diabetes => "Diabetes",
            Diagnosis::HeartDisease => "Heart Disease",
            Diagnosis::Fracture => "Fracture",
            Diagnosis::Infection => "Infection",
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of the hospital spell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Recovered,
    Referred,
    Deceased,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Recovered, Outcome::Referred, Outcome::Deceased];

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Recovered => "Recovered",
            Outcome::Referred => "Referred",
            Outcome::Deceased => "Deceased",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the admissions table in its file format
///
/// The field names map to the fixed CSV column header. Dates are
/// kept as text here because parsing them is the cleaner's job,
/// and the age is optional so that a file with blank ages still
/// loads (the cleaner fills them with the median).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdmissionRow {
    #[serde(rename = "PatientID")]
    pub patient_id: String,
    #[serde(rename = "Age")]
    pub age: Option<u32>,
    #[serde(rename = "Gender")]
    pub gender: Gender,
    #[serde(rename = "AdmissionDate")]
    pub admission_date: String,
    #[serde(rename = "DischargeDate")]
    pub discharge_date: String,
    #[serde(rename = "Diagnosis")]
    pub diagnosis: Diagnosis,
    #[serde(rename = "Outcome")]
    pub outcome: Outcome,
    /// Readmission flag, 0 or 1 in the file
    #[serde(rename = "Readmission")]
    pub readmission: u8,
}

/// A cleaned admission record
///
/// Produced from [`AdmissionRow`] by the cleaner: the age is always
/// present, the dates are parsed, and the length of stay is derived
/// as whole days between discharge and admission. The length of stay
/// exists in memory only and is never written back to the file.
#[derive(Debug, Clone, PartialEq)]
pub struct Admission {
    pub patient_id: String,
    pub age: u32,
    pub gender: Gender,
    pub admission_date: NaiveDate,
    pub discharge_date: NaiveDate,
    pub diagnosis: Diagnosis,
    pub outcome: Outcome,
    pub readmission: bool,
    /// Whole days between discharge and admission. Negative values
    /// are representable; the synthesizer never produces them but
    /// the cleaner does not reject them.
    pub length_of_stay: i64,
}

/// Format the first `n` rows as a preview table, one line per row
pub fn preview(rows: &[AdmissionRow], n: usize) -> String {
    let mut out = String::new();
    for row in rows.iter().take(n) {
        let age = match row.age {
            Some(age) => age.to_string(),
            None => String::from("<missing>"),
        };
        out.push_str(&format!(
            "{}  {}  {}  {}  {}  {}  {}  {}\n",
            row.patient_id,
            age,
            row.gender,
            row.admission_date,
            row.discharge_date,
            row.diagnosis,
            row.outcome,
            row.readmission,
        ));
    }
    out
}
