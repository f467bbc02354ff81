//! Synthetic hospital admissions dataset with descriptive analysis
//!
//! The crate is a small pipeline of pure stages passed by value:
//! synthesize a seeded admissions table, round-trip it through a
//! CSV file, clean it (median age fill, date parsing, derived
//! length of stay), and report descriptive statistics as console
//! text and SVG charts.

pub use clean::{clean_admissions, missing_value_counts};
pub use plot::render_all;
pub use record::{preview, Admission, AdmissionRow, Diagnosis, Gender, Outcome};
pub use report::{Report, INSIGHTS};
pub use store::{load_admissions, save_admissions, CSV_COLUMNS};
pub use synth::synthesize_admissions;

pub mod clean;
pub mod plot;
pub mod record;
pub mod report;
pub mod seeded_rng;
pub mod store;
pub mod synth;
