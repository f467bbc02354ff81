use anyhow::Result;
use hospital_eda::{
    clean_admissions, load_admissions, missing_value_counts, preview, render_all,
    save_admissions, synthesize_admissions, Report, INSIGHTS,
};
use log::info;
use std::io;
use std::path::Path;

/// Single seed controlling all randomness, so runs are reproducible
const GLOBAL_SEED: u64 = 2023;
const NUM_ROWS: usize = 100;
const DATA_FILE: &str = "hospital_data.csv";
const CHART_DIR: &str = "charts";

fn main() -> Result<()> {
    env_logger::init();

    let rows = synthesize_admissions(GLOBAL_SEED, NUM_ROWS);
    save_admissions(DATA_FILE, &rows)?;
    println!("Dataset generated and saved as '{DATA_FILE}'.");

    let rows = load_admissions(DATA_FILE)?;
    info!("loaded {} rows from {DATA_FILE}", rows.len());

    println!("\nDataset Preview:");
    print!("{}", preview(&rows, 5));

    println!("\nMissing Values:");
    for (column, count) in missing_value_counts(&rows) {
        println!("  {column}: {count}");
    }

    let admissions = clean_admissions(rows)?;
    let report = Report::from_admissions(&admissions)?;
    report.write_summary(&mut io::stdout())?;

    let charts = render_all(&report, Path::new(CHART_DIR))?;
    for path in &charts {
        info!("wrote chart {}", path.display());
    }
    println!("\nCharts written to '{CHART_DIR}/'.");

    println!("\nInsights:");
    for (index, insight) in INSIGHTS.iter().enumerate() {
        println!("{}. {insight}", index + 1);
    }

    Ok(())
}
