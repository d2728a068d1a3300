//! Reference-dataset loading and the statistics behind the data overview.

use std::fs::File;
use std::path::Path;

use csv::Reader;
use ndarray::{Array2, Axis};

use crate::error::{Result, SkillcastError};

/// Summary statistics for one numeric column.
#[derive(Debug, Clone)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// In-memory view of the reference dataset.
///
/// Only the numeric columns are retained; the dataset backs the overview
/// section (descriptive statistics and the correlation heatmap) and is
/// read-only for the life of the process.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<String>,
    values: Array2<f64>,
    n_rows: usize,
}

impl Dataset {
    /// Load a CSV file and keep the columns where every cell parses as a
    /// number.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mut rdr = Reader::from_reader(file);
        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

        let mut rows: Vec<Vec<String>> = Vec::new();
        for result in rdr.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        if rows.is_empty() {
            return Err(SkillcastError::Dataset(format!(
                "{} contains no data rows",
                path.display()
            )));
        }

        let mut columns = Vec::new();
        let mut parsed: Vec<Vec<f64>> = Vec::new();
        for (col, name) in headers.iter().enumerate() {
            let cells: Option<Vec<f64>> = rows
                .iter()
                .map(|row| row.get(col).and_then(|cell| cell.trim().parse::<f64>().ok()))
                .collect();
            if let Some(cells) = cells {
                columns.push(name.clone());
                parsed.push(cells);
            }
        }
        if columns.is_empty() {
            return Err(SkillcastError::Dataset(format!(
                "{} has no numeric columns",
                path.display()
            )));
        }

        let n_rows = rows.len();
        let n_cols = columns.len();
        let mut flat = Vec::with_capacity(n_rows * n_cols);
        for row in 0..n_rows {
            for column in &parsed {
                flat.push(column[row]);
            }
        }
        let values = Array2::from_shape_vec((n_rows, n_cols), flat)
            .map_err(|e| SkillcastError::Dataset(e.to_string()))?;

        Ok(Dataset {
            columns,
            values,
            n_rows,
        })
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn numeric_columns(&self) -> &[String] {
        &self.columns
    }

    /// Per-column descriptive statistics over the numeric columns.
    pub fn describe(&self) -> Vec<ColumnSummary> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let column = self.values.column(i);
                let mut sorted = column.to_vec();
                sorted.sort_by(|a, b| a.total_cmp(b));
                let mean = column.sum() / self.n_rows as f64;
                let std = column.std(1.0);
                ColumnSummary {
                    name: name.clone(),
                    count: self.n_rows,
                    mean,
                    std,
                    min: sorted[0],
                    q25: percentile(&sorted, 0.25),
                    median: percentile(&sorted, 0.5),
                    q75: percentile(&sorted, 0.75),
                    max: sorted[sorted.len() - 1],
                }
            })
            .collect()
    }

    /// Pearson correlation matrix over the numeric columns.
    ///
    /// Constant columns correlate with nothing; their entries are zero
    /// except the diagonal.
    pub fn correlation(&self) -> Result<Array2<f64>> {
        let n = self.n_rows as f64;
        let mean = self
            .values
            .mean_axis(Axis(0))
            .ok_or_else(|| SkillcastError::Dataset("empty dataset".into()))?;
        let std = self.values.std_axis(Axis(0), 1.0);
        let centered = &self.values - &mean;
        let cov = centered.t().dot(&centered) / (n - 1.0);

        let k = self.columns.len();
        let mut corr = Array2::zeros((k, k));
        for i in 0..k {
            for j in 0..k {
                if i == j {
                    corr[[i, j]] = 1.0;
                } else if std[i] > f64::EPSILON && std[j] > f64::EPSILON {
                    corr[[i, j]] = cov[[i, j]] / (std[i] * std[j]);
                }
            }
        }
        Ok(corr)
    }
}

/// Linear-interpolated percentile over an already sorted slice.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (h - lo as f64)
}
