use crate::transform::{BarMatrix, LineDataset};
use serde::{Deserialize, Serialize};

/// Summary statistics for one hotel's revenue line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenueSummary {
    pub hotel: String,
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
}

/// Compute per-hotel revenue statistics from the reshaped line datasets.
pub fn revenue_summary(datasets: &[LineDataset]) -> Vec<RevenueSummary> {
    let mut out = Vec::with_capacity(datasets.len());
    for ds in datasets {
        let mut vals: Vec<f64> = ds.points.iter().map(|p| p.y).collect();
        vals.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let count = vals.len();
        let min = vals.first().cloned();
        let max = vals.last().cloned();
        let mean = if count > 0 {
            Some(vals.iter().copied().sum::<f64>() / count as f64)
        } else {
            None
        };
        let median = if count == 0 {
            None
        } else if count % 2 == 1 {
            Some(vals[count / 2])
        } else {
            Some((vals[count / 2 - 1] + vals[count / 2]) / 2.0)
        };
        out.push(RevenueSummary {
            hotel: ds.label.clone(),
            count,
            min,
            max,
            mean,
            median,
        });
    }
    out
}

/// Booking totals for one hotel across the month axis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingsSummary {
    pub hotel: String,
    pub total: u64,
    /// Month with the most bookings; ties resolve to the earlier month.
    pub busiest_month: Option<String>,
}

/// Compute per-hotel booking totals from the dense matrix.
pub fn bookings_summary(matrix: &BarMatrix) -> Vec<BookingsSummary> {
    let mut out = Vec::with_capacity(matrix.hotels.len());
    for (h, hotel) in matrix.hotels.iter().enumerate() {
        let mut total = 0u64;
        let mut best: Option<(u64, &str)> = None;
        for ds in &matrix.datasets {
            let count = ds.values[h];
            total += count;
            if count > 0 && best.is_none_or(|(best_count, _)| count > best_count) {
                best = Some((count, ds.label.as_str()));
            }
        }
        out.push(BookingsSummary {
            hotel: hotel.clone(),
            total,
            busiest_month: best.map(|(_, month)| month.to_string()),
        });
    }
    out
}
