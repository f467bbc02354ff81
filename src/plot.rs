//! SVG chart rendering for the descriptive report
//!
//! Each report section becomes one SVG file: two categorical bar
//! charts, the stay-duration histogram, and the 2x2 correlation
//! heatmap. Files land in the output directory passed to
//! [`render_all`].

use crate::report::Report;
use anyhow::{Context, Result};
use plotters::prelude::*;
use plotters_svg::SVGBackend;
use std::fs;
use std::path::{Path, PathBuf};

const BAR_CHART_SIZE: (u32, u32) = (640, 480);
const HEATMAP_SIZE: (u32, u32) = (480, 420);

/// Vertical bar chart of category counts
fn bar_chart(path: &Path, title: &str, x_desc: &str, bars: &[(String, usize)]) -> Result<()> {
    let root = SVGBackend::new(path, BAR_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = bars.iter().map(|(_, count)| *count).max().unwrap_or(0) as u32 + 1;
    let n = bars.len() as i32;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20).into_font())
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d((0..n).into_segmented(), 0u32..y_max)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars.len())
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => bars
                .get(*i as usize)
                .map(|(label, _)| label.clone())
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .x_desc(x_desc)
        .y_desc("Count")
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style_func(|seg, _| {
                let index = match seg {
                    SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => *i,
                    SegmentValue::Last => 0,
                };
                Palette99::pick(index as usize).filled()
            })
            .margin(20)
            .data(
                bars.iter()
                    .enumerate()
                    .map(|(i, (_, count))| (i as i32, *count as u32)),
            ),
    )?;
    root.present()?;
    Ok(())
}

/// Histogram of stay lengths, one bar per whole day
fn stay_histogram_chart(path: &Path, histogram: &[(i64, usize)]) -> Result<()> {
    let root = SVGBackend::new(path, BAR_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let min = histogram.first().map(|(days, _)| *days).unwrap_or(0) as i32;
    let max = histogram.last().map(|(days, _)| *days).unwrap_or(0) as i32;
    let y_max = histogram.iter().map(|(_, count)| *count).max().unwrap_or(0) as u32 + 1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Length of Stay Distribution", ("sans-serif", 20).into_font())
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d((min..max + 1).into_segmented(), 0u32..y_max)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Days")
        .y_desc("Frequency")
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BLUE.mix(0.6).filled())
            .margin(2)
            .data(
                histogram
                    .iter()
                    .map(|(days, count)| (*days as i32, *count as u32)),
            ),
    )?;
    root.present()?;
    Ok(())
}

/// Axis labels for the 2x2 correlation heatmap; the cell centers
/// sit at 0.5 and 1.5 in chart coordinates
fn heatmap_axis_label(position: f64) -> String {
    if (position - 0.5).abs() < 0.26 {
        String::from("Age")
    } else if (position - 1.5).abs() < 0.26 {
        String::from("LengthOfStay")
    } else {
        String::new()
    }
}

/// Shade from white (r = -1) to a full blue (r = +1)
fn heatmap_shade(value: f64) -> RGBColor {
    let t = ((value + 1.0) / 2.0).clamp(0.0, 1.0);
    RGBColor(
        (255.0 - t * (255.0 - 31.0)) as u8,
        (255.0 - t * (255.0 - 119.0)) as u8,
        (255.0 - t * (255.0 - 180.0)) as u8,
    )
}

/// Annotated 2x2 heatmap of the age / length-of-stay correlation
fn correlation_heatmap(path: &Path, matrix: &[[f64; 2]; 2]) -> Result<()> {
    let root = SVGBackend::new(path, HEATMAP_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Correlation Analysis", ("sans-serif", 20).into_font())
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(90)
        .build_cartesian_2d(0f64..2f64, 0f64..2f64)?;
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(5)
        .y_labels(5)
        .x_label_formatter(&|x| heatmap_axis_label(*x))
        .y_label_formatter(&|y| heatmap_axis_label(*y))
        .draw()?;

    chart.draw_series((0..2usize).flat_map(|col| {
        (0..2usize).map(move |row| {
            let shade = heatmap_shade(matrix[row][col]);
            Rectangle::new(
                [
                    (col as f64, row as f64),
                    (col as f64 + 1.0, row as f64 + 1.0),
                ],
                shade.filled(),
            )
        })
    }))?;

    for row in 0..2usize {
        for col in 0..2usize {
            let value = matrix[row][col];
            chart.draw_series(std::iter::once(Text::new(
                format!("{value:.2}"),
                (col as f64 + 0.4, row as f64 + 0.5),
                ("sans-serif", 18).into_font().color(&BLACK),
            )))?;
        }
    }
    root.present()?;
    Ok(())
}

fn labelled<T: ToString>(counts: &[(T, usize)]) -> Vec<(String, usize)> {
    counts
        .iter()
        .map(|(category, count)| (category.to_string(), *count))
        .collect()
}

/// Render all four report charts into `out_dir`, creating the
/// directory if needed, and return the written paths
pub fn render_all(report: &Report, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create chart directory {}", out_dir.display()))?;

    let gender = out_dir.join("gender_distribution.svg");
    bar_chart(
        &gender,
        "Gender Distribution",
        "Gender",
        &labelled(&report.gender_counts),
    )?;

    let outcome = out_dir.join("outcome_distribution.svg");
    bar_chart(
        &outcome,
        "Outcome Distribution",
        "Outcome",
        &labelled(&report.outcome_counts),
    )?;

    let stays = out_dir.join("length_of_stay.svg");
    stay_histogram_chart(&stays, &report.stay_histogram)?;

    let correlation = out_dir.join("correlation.svg");
    correlation_heatmap(&correlation, &report.age_stay_correlation)?;

    Ok(vec![gender, outcome, stays, correlation])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clean::clean_admissions;
    use crate::synth::synthesize_admissions;

    #[test]
    fn render_all_writes_four_svg_files() {
        let admissions = clean_admissions(synthesize_admissions(13, 100)).unwrap();
        let report = Report::from_admissions(&admissions).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let paths = render_all(&report, dir.path()).unwrap();

        assert_eq!(paths.len(), 4);
        for path in paths {
            let meta = fs::metadata(&path).unwrap();
            assert!(meta.len() > 0, "{} is empty", path.display());
            assert_eq!(path.extension().unwrap(), "svg");
        }
    }

    #[test]
    fn shade_interpolates_between_white_and_blue() {
        assert_eq!(heatmap_shade(-1.0), RGBColor(255, 255, 255));
        assert_eq!(heatmap_shade(1.0), RGBColor(31, 119, 180));
    }
}
