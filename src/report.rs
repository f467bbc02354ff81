//! Descriptive statistics over the cleaned admissions
//!
//! Everything here is purely descriptive: categorical counts, a
//! stay-duration histogram, two scalar metrics, and the age against
//! length-of-stay correlation matrix. No thresholds or decisions.

use crate::record::{Admission, Diagnosis, Gender, Outcome};
use anyhow::{ensure, Result};
use std::io::Write;

/// The three fixed insight strings printed at the end of a run
pub const INSIGHTS: [&str; 3] = [
    "Patients over 65 have longer stays. Consider allocating more resources to geriatrics.",
    "Higher readmission rates linked to specific diagnoses. Improve post-discharge care.",
    "Length of stay significantly affects operational efficiency. Explore faster discharge workflows.",
];

/// Descriptive summary of one admissions dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub total_rows: usize,
    pub gender_counts: Vec<(Gender, usize)>,
    pub outcome_counts: Vec<(Outcome, usize)>,
    pub diagnosis_counts: Vec<(Diagnosis, usize)>,
    /// Count of admissions per whole-day stay length, covering the
    /// observed range with no gaps
    pub stay_histogram: Vec<(i64, usize)>,
    /// Percentage of admissions flagged as readmissions
    pub readmission_rate: f64,
    pub mean_length_of_stay: f64,
    /// Pearson correlation matrix over (age, length of stay);
    /// indices follow that order
    pub age_stay_correlation: [[f64; 2]; 2],
}

/// Pearson correlation coefficient of two equal-length samples
///
/// NaN when either sample has zero variance, matching the undefined
/// case rather than inventing a value.
fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        f64::NAN
    } else {
        cov / denom
    }
}

fn stay_histogram(admissions: &[Admission]) -> Vec<(i64, usize)> {
    let min = admissions.iter().map(|a| a.length_of_stay).min();
    let max = admissions.iter().map(|a| a.length_of_stay).max();
    let (Some(min), Some(max)) = (min, max) else {
        return Vec::new();
    };
    (min..=max)
        .map(|days| {
            let count = admissions
                .iter()
                .filter(|a| a.length_of_stay == days)
                .count();
            (days, count)
        })
        .collect()
}

impl Report {
    /// Compute the full descriptive report for a non-empty dataset
    pub fn from_admissions(admissions: &[Admission]) -> Result<Self> {
        ensure!(
            !admissions.is_empty(),
            "cannot report on an empty admissions dataset"
        );
        let total_rows = admissions.len();

        let gender_counts = Gender::ALL
            .iter()
            .map(|g| (*g, admissions.iter().filter(|a| a.gender == *g).count()))
            .collect();
        let outcome_counts = Outcome::ALL
            .iter()
            .map(|o| (*o, admissions.iter().filter(|a| a.outcome == *o).count()))
            .collect();
        let diagnosis_counts = Diagnosis::ALL
            .iter()
            .map(|d| (*d, admissions.iter().filter(|a| a.diagnosis == *d).count()))
            .collect();

        let readmitted = admissions.iter().filter(|a| a.readmission).count();
        let readmission_rate = readmitted as f64 / total_rows as f64 * 100.0;

        let stay_total: i64 = admissions.iter().map(|a| a.length_of_stay).sum();
        let mean_length_of_stay = stay_total as f64 / total_rows as f64;

        let ages: Vec<f64> = admissions.iter().map(|a| f64::from(a.age)).collect();
        let stays: Vec<f64> = admissions.iter().map(|a| a.length_of_stay as f64).collect();
        let r = pearson(&ages, &stays);
        let age_stay_correlation = [[1.0, r], [r, 1.0]];

        Ok(Report {
            total_rows,
            gender_counts,
            outcome_counts,
            diagnosis_counts,
            stay_histogram: stay_histogram(admissions),
            readmission_rate,
            mean_length_of_stay,
            age_stay_correlation,
        })
    }

    /// Render the report as console text
    pub fn write_summary(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "\nGender Distribution:")?;
        for (gender, count) in &self.gender_counts {
            writeln!(out, "  {gender}: {count}")?;
        }
        writeln!(out, "\nOutcome Distribution:")?;
        for (outcome, count) in &self.outcome_counts {
            writeln!(out, "  {outcome}: {count}")?;
        }
        writeln!(out, "\nDiagnosis Distribution:")?;
        for (diagnosis, count) in &self.diagnosis_counts {
            writeln!(out, "  {diagnosis}: {count}")?;
        }
        writeln!(out, "\nLength of Stay Distribution:")?;
        for (days, count) in &self.stay_histogram {
            writeln!(out, "  {days} days: {count}")?;
        }
        writeln!(out)?;
        writeln!(out, "Readmission Rate: {:.2}%", self.readmission_rate)?;
        writeln!(
            out,
            "Average Length of Stay: {:.2} days",
            self.mean_length_of_stay
        )?;
        let m = &self.age_stay_correlation;
        writeln!(out, "\nCorrelation (Age, LengthOfStay):")?;
        writeln!(out, "  [{:.2}, {:.2}]", m[0][0], m[0][1])?;
        writeln!(out, "  [{:.2}, {:.2}]", m[1][0], m[1][1])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn admission(id: &str, age: u32, stay: i64, readmitted: bool) -> Admission {
        let admitted = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        Admission {
            patient_id: String::from(id),
            age,
            gender: Gender::Male,
            admission_date: admitted,
            discharge_date: admitted + chrono::Duration::days(stay),
            diagnosis: Diagnosis::Diabetes,
            outcome: Outcome::Recovered,
            readmission: readmitted,
            length_of_stay: stay,
        }
    }

    fn three_patients() -> Vec<Admission> {
        vec![
            admission("P1", 30, 4, false),
            admission("P2", 45, 9, true),
            admission("P3", 70, 14, false),
        ]
    }

    #[test]
    fn readmission_rate_prints_to_two_decimals() {
        let report = Report::from_admissions(&three_patients()).unwrap();
        assert_eq!(format!("{:.2}%", report.readmission_rate), "33.33%");
    }

    #[test]
    fn mean_stay_is_the_arithmetic_mean() {
        let report = Report::from_admissions(&three_patients()).unwrap();
        assert_eq!(report.mean_length_of_stay, (4 + 9 + 14) as f64 / 3.0);
    }

    #[test]
    fn correlation_matrix_is_symmetric_with_unit_diagonal() {
        let report = Report::from_admissions(&three_patients()).unwrap();
        let m = report.age_stay_correlation;
        assert_eq!(m[0][0], 1.0);
        assert_eq!(m[1][1], 1.0);
        assert_eq!(m[0][1], m[1][0]);
        assert!((-1.0..=1.0).contains(&m[0][1]));
    }

    #[test]
    fn perfectly_linear_fields_correlate_to_one() {
        // stay grows linearly with age
        let admissions = vec![
            admission("P1", 20, 2, false),
            admission("P2", 40, 4, false),
            admission("P3", 60, 6, false),
        ];
        let report = Report::from_admissions(&admissions).unwrap();
        assert!((report.age_stay_correlation[0][1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_variance_correlation_is_nan() {
        let admissions = vec![
            admission("P1", 50, 3, false),
            admission("P2", 50, 7, false),
        ];
        let report = Report::from_admissions(&admissions).unwrap();
        assert!(report.age_stay_correlation[0][1].is_nan());
    }

    #[test]
    fn histogram_covers_the_observed_range_without_gaps() {
        let report = Report::from_admissions(&three_patients()).unwrap();
        let days: Vec<i64> = report.stay_histogram.iter().map(|(d, _)| *d).collect();
        assert_eq!(days, (4..=14).collect::<Vec<i64>>());
        let total: usize = report.stay_histogram.iter().map(|(_, c)| c).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn counts_cover_every_category() {
        let report = Report::from_admissions(&three_patients()).unwrap();
        assert_eq!(report.gender_counts.len(), 2);
        assert_eq!(report.outcome_counts.len(), 3);
        assert_eq!(report.diagnosis_counts.len(), 4);
        assert_eq!(report.gender_counts[0], (Gender::Male, 3));
    }

    #[test]
    fn empty_dataset_is_an_error() {
        assert!(Report::from_admissions(&[]).is_err());
    }

    #[test]
    fn summary_contains_the_two_metric_lines() {
        let report = Report::from_admissions(&three_patients()).unwrap();
        let mut buffer = Vec::new();
        report.write_summary(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Readmission Rate: 33.33%"));
        assert!(text.contains("Average Length of Stay: 9.00 days"));
    }
}
