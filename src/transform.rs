//! The reshaping core: pivot the two backend payloads into renderable chart
//! datasets.
//!
//! - [`line_datasets`] turns the per-hotel revenue series into `{x, y}` point
//!   sequences with normalized local calendar dates.
//! - [`bar_matrix`] turns the nested hotel -> month -> count map into a dense
//!   dataset-per-month matrix aligned to sorted hotel and month axes.

use crate::color::{Fill, LINE_FILL, Palette, Rgb};
use crate::models::{BookingsPayload, TrendPayload};
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("timestamp {0} ms is outside the representable date range")]
    TimestampRange(i64),
    #[error("unrecognized month label {0:?}")]
    MonthLabel(String),
}

/// One rendered point of a revenue line: calendar day and amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointXy {
    pub x: String,
    pub y: f64,
}

/// One revenue line: a hotel's points plus its stroke and fill colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineDataset {
    pub label: String,
    pub points: Vec<PointXy>,
    pub border: Rgb,
    pub fill: Fill,
}

/// Truncate a millisecond timestamp to the local calendar date.
pub fn local_day(millis: i64) -> Result<NaiveDate, TransformError> {
    let utc: DateTime<chrono::Utc> =
        DateTime::from_timestamp_millis(millis).ok_or(TransformError::TimestampRange(millis))?;
    Ok(utc.with_timezone(&Local).date_naive())
}

/// Zero-padded `YYYY-MM-DD`.
pub fn format_day(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Pivot the revenue payload into one line dataset per hotel.
///
/// Hotels keep payload iteration order (backend insertion order, not
/// re-sorted). Every input pair becomes exactly one point; duplicates and
/// gaps pass through untouched, the renderer simply connects consecutive
/// points. Border colors come from the palette, the fill is [`LINE_FILL`].
pub fn line_datasets(
    payload: &TrendPayload,
    palette: &mut dyn Palette,
) -> Result<Vec<LineDataset>, TransformError> {
    let mut out = Vec::with_capacity(payload.len());
    for (hotel, raw) in payload.iter() {
        let mut points = Vec::with_capacity(raw.len());
        for &(millis, amount) in raw {
            points.push(PointXy {
                x: format_day(local_day(millis)?),
                y: amount,
            });
        }
        out.push(LineDataset {
            label: hotel.clone(),
            points,
            border: palette.next_color(),
            fill: LINE_FILL,
        });
    }
    Ok(out)
}

/// One bar group: a month's counts aligned to the hotel axis, one shared
/// border/fill color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDataset {
    pub label: String,
    pub values: Vec<u64>,
    pub color: Rgb,
}

/// The dense bookings matrix: sorted hotel axis, chronological month axis,
/// one dataset per month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarMatrix {
    pub hotels: Vec<String>,
    pub months: Vec<String>,
    pub datasets: Vec<BarDataset>,
}

/// Parse a month axis label to the date it sorts by.
///
/// Accepts `2024-03`, `2024-03-05`, and the `March 2024` form the backend's
/// strftime produces. Month-granular labels sort as their first day.
pub fn parse_month_label(label: &str) -> Result<NaiveDate, TransformError> {
    let trimmed = label.trim();
    if let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{trimmed}-1"), "%Y-%m-%d") {
        return Ok(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(&format!("1 {trimmed}"), "%d %B %Y") {
        return Ok(d);
    }
    Err(TransformError::MonthLabel(trimmed.to_string()))
}

/// Pivot the bookings payload into the dense per-month matrix.
///
/// The month axis is the de-duplicated union of month labels across hotels,
/// sorted by parsed calendar date. A (hotel, month) pair absent from the
/// payload contributes a 0, so hotels with no bookings in a month stay on the
/// axis with bar height zero.
pub fn bar_matrix(
    payload: &BookingsPayload,
    palette: &mut dyn Palette,
) -> Result<BarMatrix, TransformError> {
    let hotels: Vec<String> = payload.0.keys().cloned().collect();

    let mut labels: BTreeSet<&str> = BTreeSet::new();
    for per_month in payload.0.values() {
        for month in per_month.keys() {
            labels.insert(month);
        }
    }
    let mut keyed: Vec<(NaiveDate, String)> = Vec::with_capacity(labels.len());
    for label in labels {
        keyed.push((parse_month_label(label)?, label.to_string()));
    }
    keyed.sort_by_key(|(day, _)| *day);
    let months: Vec<String> = keyed.into_iter().map(|(_, label)| label).collect();

    let mut datasets = Vec::with_capacity(months.len());
    for month in &months {
        let values: Vec<u64> = hotels
            .iter()
            .map(|hotel| {
                payload
                    .0
                    .get(hotel)
                    .and_then(|per_month| per_month.get(month))
                    .copied()
                    .unwrap_or(0)
            })
            .collect();
        datasets.push(BarDataset {
            label: month.clone(),
            values,
            color: palette.next_color(),
        });
    }

    Ok(BarMatrix {
        hotels,
        months,
        datasets,
    })
}
