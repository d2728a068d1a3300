//! Chart rendering for the results panel and the data overview.
//!
//! Each chart is one PNG written through the plotters bitmap backend.

use std::path::Path;

use ndarray::Array2;
use plotters::prelude::*;

use crate::error::{Result, SkillcastError};

const INITIAL_COLOR: RGBColor = RGBColor(255, 107, 107);
const CURRENT_COLOR: RGBColor = RGBColor(78, 205, 196);

// Five stops sampled from the viridis ramp, darkest first.
const RANKING_PALETTE: [RGBColor; 5] = [
    RGBColor(68, 1, 84),
    RGBColor(59, 82, 139),
    RGBColor(33, 145, 140),
    RGBColor(94, 201, 98),
    RGBColor(253, 231, 37),
];

/// Horizontal bar pair comparing the initial level against the predicted
/// level, on the fixed 0–10 skill axis.
pub fn progress_chart(initial: f64, predicted: f64, path: &Path) -> Result<()> {
    draw_progress(initial, predicted, path).map_err(|e| SkillcastError::Chart(e.to_string()))
}

fn draw_progress(
    initial: f64,
    predicted: f64,
    path: &Path,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (800, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Skill Development Progress", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(0f64..10f64, 0f64..2f64)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("Skill Level")
        .y_labels(0)
        .draw()?;

    let bars = [("Initial", initial, INITIAL_COLOR), ("Current", predicted, CURRENT_COLOR)];
    for (i, (label, value, color)) in bars.iter().enumerate() {
        let base = i as f64;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(0.0, base + 0.25), (value.clamp(0.0, 10.0), base + 0.75)],
            color.filled(),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            format!("{label}: {value:.2}"),
            (0.1, base + 0.95),
            ("sans-serif", 18).into_font(),
        )))?;
    }

    root.present()?;
    Ok(())
}

/// Top features ranked by importance, drawn as horizontal bars with the
/// strongest factor at the top.
pub fn importance_chart(ranked: &[(String, f64)], path: &Path) -> Result<()> {
    draw_importance(ranked, path).map_err(|e| SkillcastError::Chart(e.to_string()))
}

fn draw_importance(
    ranked: &[(String, f64)],
    path: &Path,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    if ranked.is_empty() {
        return Err("no features to rank".into());
    }
    let max = ranked
        .iter()
        .map(|(_, value)| *value)
        .fold(f64::MIN, f64::max)
        .max(1e-12);
    let n = ranked.len();

    let root = BitMapBackend::new(path, (800, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Key Factors Influencing Your Skill Level", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(0f64..max * 1.1, 0f64..n as f64)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("Importance")
        .y_labels(0)
        .draw()?;

    for (i, (name, value)) in ranked.iter().enumerate() {
        let slot = (n - 1 - i) as f64;
        let color = RANKING_PALETTE[i.min(RANKING_PALETTE.len() - 1)];
        chart.draw_series(std::iter::once(Rectangle::new(
            [(0.0, slot + 0.15), (value.max(0.0), slot + 0.7)],
            color.filled(),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            format!("{name} ({value:.3})"),
            (max * 0.02, slot + 0.95),
            ("sans-serif", 16).into_font(),
        )))?;
    }

    root.present()?;
    Ok(())
}

/// Correlation heatmap over the dataset's numeric columns, diverging
/// blue–white–red palette.
pub fn correlation_heatmap(names: &[String], matrix: &Array2<f64>, path: &Path) -> Result<()> {
    draw_heatmap(names, matrix, path).map_err(|e| SkillcastError::Chart(e.to_string()))
}

fn draw_heatmap(
    names: &[String],
    matrix: &Array2<f64>,
    path: &Path,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let n = names.len();
    if matrix.dim() != (n, n) {
        return Err(format!(
            "correlation matrix is {:?}, expected {}x{}",
            matrix.dim(),
            n,
            n
        )
        .into());
    }

    let root = BitMapBackend::new(path, (900, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Feature Correlation Heatmap", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(150)
        .y_label_area_size(150)
        .build_cartesian_2d(0i32..n as i32, 0i32..n as i32)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(n)
        .y_labels(n)
        .x_label_formatter(&|i| names.get(*i as usize).cloned().unwrap_or_default())
        .y_label_formatter(&|i| names.get(*i as usize).cloned().unwrap_or_default())
        .draw()?;

    for i in 0..n {
        for j in 0..n {
            let value = matrix[[i, j]];
            chart.draw_series(std::iter::once(Rectangle::new(
                [(i as i32, j as i32), (i as i32 + 1, j as i32 + 1)],
                diverging_color(value).filled(),
            )))?;
            chart.draw_series(std::iter::once(Text::new(
                format!("{value:.2}"),
                (i as i32, j as i32 + 1),
                ("sans-serif", 13).into_font(),
            )))?;
        }
    }

    root.present()?;
    Ok(())
}

/// Map a correlation in [-1, 1] onto a blue–white–red diverging ramp.
fn diverging_color(value: f64) -> RGBColor {
    const LOW: (f64, f64, f64) = (59.0, 76.0, 192.0);
    const MID: (f64, f64, f64) = (221.0, 221.0, 221.0);
    const HIGH: (f64, f64, f64) = (180.0, 4.0, 38.0);

    let t = ((value + 1.0) / 2.0).clamp(0.0, 1.0);
    let (from, to, f) = if t < 0.5 {
        (LOW, MID, t * 2.0)
    } else {
        (MID, HIGH, (t - 0.5) * 2.0)
    };
    RGBColor(
        (from.0 + (to.0 - from.0) * f).round() as u8,
        (from.1 + (to.1 - from.1) * f).round() as u8,
        (from.2 + (to.2 - from.2) * f).round() as u8,
    )
}
