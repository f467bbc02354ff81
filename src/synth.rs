//! Synthetic hospital admissions generator
//!
//! Builds the raw admissions table column by column. Each column
//! draws from its own seeded stream (see [`crate::seeded_rng`]), so
//! the values in one column do not depend on how many draws another
//! column makes. The whole table is reproducible from the global
//! seed alone.

use crate::record::{AdmissionRow, Diagnosis, Gender, Outcome};
use crate::seeded_rng::stream_rng;
use chrono::{Duration, NaiveDate};
use rand::distributions::WeightedIndex;
use rand::prelude::*;

/// First admission date; subsequent admissions are one day apart
const FIRST_ADMISSION: (i32, u32, u32) = (2023, 1, 1);

/// Relative weights for the outcome categories
/// (Recovered, Referred, Deceased)
const OUTCOME_WEIGHTS: [u32; 3] = [7, 2, 1];

/// Probability that an admission leads to a readmission
const READMISSION_RATE: f64 = 0.15;

fn first_admission_date() -> NaiveDate {
    let (y, m, d) = FIRST_ADMISSION;
    NaiveDate::from_ymd_opt(y, m, d).expect("first admission date is a valid date")
}

/// Uniform ages in [20, 90)
fn make_ages(global_seed: u64, num_rows: usize) -> Vec<u32> {
    let mut rng = stream_rng(global_seed, "age");
    (0..num_rows).map(|_| rng.gen_range(20..90)).collect()
}

/// Uniform choice between male and female
fn make_genders(global_seed: u64, num_rows: usize) -> Vec<Gender> {
    let mut rng = stream_rng(global_seed, "gender");
    (0..num_rows)
        .map(|_| {
            if rng.gen() {
                Gender::Female
            } else {
                Gender::Male
            }
        })
        .collect()
}

/// Stay durations in whole days
///
/// The discharge date is the day after admission shifted by a
/// uniform 1 to 14 days, so stays range from 2 to 15 days.
fn make_stay_days(global_seed: u64, num_rows: usize) -> Vec<i64> {
    let mut rng = stream_rng(global_seed, "stay");
    (0..num_rows).map(|_| 1 + rng.gen_range(1..=14)).collect()
}

/// Uniform choice over the diagnosis categories
fn make_diagnoses(global_seed: u64, num_rows: usize) -> Vec<Diagnosis> {
    let mut rng = stream_rng(global_seed, "diagnosis");
    (0..num_rows)
        .map(|_| {
            *Diagnosis::ALL
                .choose(&mut rng)
                .expect("diagnosis list is non-empty")
        })
        .collect()
}

/// Weighted choice over the outcome categories
fn make_outcomes(global_seed: u64, num_rows: usize) -> Vec<Outcome> {
    let mut rng = stream_rng(global_seed, "outcome");
    let weights = WeightedIndex::new(OUTCOME_WEIGHTS).expect("outcome weights are valid");
    (0..num_rows)
        .map(|_| Outcome::ALL[weights.sample(&mut rng)])
        .collect()
}

/// Bernoulli readmission flags, stored as 0/1
fn make_readmissions(global_seed: u64, num_rows: usize) -> Vec<u8> {
    let mut rng = stream_rng(global_seed, "readmission");
    (0..num_rows)
        .map(|_| u8::from(rng.gen_bool(READMISSION_RATE)))
        .collect()
}

/// Generate `num_rows` synthetic admission rows from a global seed
///
/// Patient ids are sequential ("P1", "P2", ...), admission dates are
/// consecutive calendar days starting 2023-01-01, and the remaining
/// fields are drawn from per-column seeded streams. Dates are
/// formatted as ISO `YYYY-MM-DD` text, matching the file format the
/// rows are destined for.
pub fn synthesize_admissions(global_seed: u64, num_rows: usize) -> Vec<AdmissionRow> {
    let ages = make_ages(global_seed, num_rows);
    let genders = make_genders(global_seed, num_rows);
    let stays = make_stay_days(global_seed, num_rows);
    let diagnoses = make_diagnoses(global_seed, num_rows);
    let outcomes = make_outcomes(global_seed, num_rows);
    let readmissions = make_readmissions(global_seed, num_rows);

    let start = first_admission_date();
    let mut rows = Vec::with_capacity(num_rows);
    for i in 0..num_rows {
        let admission = start + Duration::days(i as i64);
        let discharge = admission + Duration::days(stays[i]);
        rows.push(AdmissionRow {
            patient_id: format!("P{}", i + 1),
            age: Some(ages[i]),
            gender: genders[i],
            admission_date: admission.format("%Y-%m-%d").to_string(),
            discharge_date: discharge.format("%Y-%m-%d").to_string(),
            diagnosis: diagnoses[i],
            outcome: outcomes[i],
            readmission: readmissions[i],
        });
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_the_requested_number_of_rows() {
        assert_eq!(synthesize_admissions(1, 100).len(), 100);
        assert_eq!(synthesize_admissions(1, 0).len(), 0);
    }

    #[test]
    fn ages_are_in_range() {
        for row in synthesize_admissions(3, 100) {
            let age = row.age.expect("synthesizer always sets an age");
            assert!((20..90).contains(&age), "age {age} out of range");
        }
    }

    #[test]
    fn readmission_flag_is_zero_or_one() {
        for row in synthesize_admissions(3, 100) {
            assert!(row.readmission == 0 || row.readmission == 1);
        }
    }

    #[test]
    fn admission_dates_are_sequential_days() {
        let rows = synthesize_admissions(3, 5);
        let expected = ["2023-01-01", "2023-01-02", "2023-01-03", "2023-01-04", "2023-01-05"];
        for (row, want) in rows.iter().zip(expected) {
            assert_eq!(row.admission_date, want);
        }
    }

    #[test]
    fn stays_are_between_two_and_fifteen_days() {
        for row in synthesize_admissions(7, 100) {
            let admission =
                NaiveDate::parse_from_str(&row.admission_date, "%Y-%m-%d").unwrap();
            let discharge =
                NaiveDate::parse_from_str(&row.discharge_date, "%Y-%m-%d").unwrap();
            let stay = (discharge - admission).num_days();
            assert!((2..=15).contains(&stay), "stay {stay} out of range");
        }
    }

    #[test]
    fn patient_ids_are_sequential() {
        let rows = synthesize_admissions(3, 3);
        let ids: Vec<&str> = rows.iter().map(|r| r.patient_id.as_str()).collect();
        assert_eq!(ids, ["P1", "P2", "P3"]);
    }

    #[test]
    fn same_seed_reproduces_the_table() {
        assert_eq!(synthesize_admissions(11, 50), synthesize_admissions(11, 50));
    }

    #[test]
    fn different_seeds_change_the_table() {
        assert_ne!(synthesize_admissions(11, 50), synthesize_admissions(12, 50));
    }
}
