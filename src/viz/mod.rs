//! Chart renderers: the revenue line chart and the bookings-by-month grouped
//! bar chart, to SVG/PNG files or an in-memory RGB buffer (GUI textures).
//!
//! The renderers consume a fully reshaped [`ChartModel`]; all pivoting and
//! color assignment happened in `transform`, so drawing is mechanical.

pub mod util;

use crate::controller::ChartModel;
use crate::transform::{BarMatrix, LineDataset};
use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::{AreaSeries, LineSeries};
use plotters::style::FontFamily;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::Path;
use std::sync::Once;
use util::{format_count, padded_max, to_rgb, to_rgba};

/// One-time registration for a fallback "sans-serif" font when using the
/// `ab_glyph` text path, which doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        );
    });
}

/// Render a chart to `out_path`; `.svg` gets the SVG backend, everything else
/// the bitmap backend.
pub fn render_to_file<P: AsRef<Path>>(
    model: &ChartModel,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw(root, model)
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw(root, model)
    }
}

/// Render a chart into an RGB byte buffer (3 bytes per pixel, row-major).
pub fn render_to_rgb(model: &ChartModel, width: u32, height: u32) -> Result<Vec<u8>> {
    ensure_fonts_registered();
    let mut buf = vec![0u8; (width as usize) * (height as usize) * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        draw(root, model)?;
    }
    Ok(buf)
}

fn draw<DB>(root: DrawingArea<DB, Shift>, model: &ChartModel) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;
    match model {
        ChartModel::Line(datasets) => draw_line(&root, datasets)?,
        ChartModel::Bar(matrix) => draw_bar(&root, matrix)?,
    }
    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

fn parse_day(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| anyhow!("bad date label {s:?}: {e}"))
}

fn draw_line<DB>(root: &DrawingArea<DB, Shift>, datasets: &[LineDataset]) -> Result<()>
where
    DB: DrawingBackend,
{
    if datasets.is_empty() {
        return Err(anyhow!("no data to plot"));
    }

    let mut days: Vec<NaiveDate> = Vec::new();
    let mut values: Vec<f64> = Vec::new();
    for ds in datasets {
        for p in &ds.points {
            days.push(parse_day(&p.x)?);
            values.push(p.y);
        }
    }
    if days.is_empty() {
        return Err(anyhow!("no points to plot"));
    }

    let (mut min_day, mut max_day) = (
        *days.iter().min().ok_or_else(|| anyhow!("no valid days"))?,
        *days.iter().max().ok_or_else(|| anyhow!("no valid days"))?,
    );
    if min_day == max_day {
        // widen a degenerate single-day span so the axis stays drawable
        min_day = min_day - chrono::Duration::days(1);
        max_day = max_day + chrono::Duration::days(1);
    }

    let max_val = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min_val = values.iter().cloned().fold(f64::INFINITY, f64::min).min(0.0);
    let y_max = padded_max(max_val);
    let baseline = 0.0f64.min(min_val);

    let mut chart = ChartBuilder::on(root)
        .margin(16)
        .caption("Amount Incoming", (FontFamily::SansSerif, 24))
        .set_label_area_size(LabelAreaPosition::Left, 72)
        .set_label_area_size(LabelAreaPosition::Bottom, 56)
        .build_cartesian_2d(min_day..max_day, min_val..y_max)
        .map_err(|e| anyhow!("{:?}", e))?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Revenue ($)")
        .x_labels(8)
        .y_labels(10)
        .x_label_formatter(&|d: &NaiveDate| d.format("%Y-%m-%d").to_string())
        .label_style((FontFamily::SansSerif, 12))
        .axis_desc_style((FontFamily::SansSerif, 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    for ds in datasets {
        let border = to_rgb(ds.border);
        let fill = to_rgba(ds.fill);
        let mut series: Vec<(NaiveDate, f64)> = Vec::with_capacity(ds.points.len());
        for p in &ds.points {
            series.push((parse_day(&p.x)?, p.y));
        }

        let elem = chart
            .draw_series(
                AreaSeries::new(series.iter().cloned(), baseline, fill.filled())
                    .border_style(border.stroke_width(2)),
            )
            .map_err(|e| anyhow!("{:?}", e))?;
        let legend_color = border;
        elem.label(&ds.label).legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 18, y)], legend_color.stroke_width(2))
        });

        // redraw the border on top of later fills so every line stays visible
        chart
            .draw_series(LineSeries::new(
                series.iter().cloned(),
                border.stroke_width(2),
            ))
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.85))
        .label_font((FontFamily::SansSerif, 14))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    Ok(())
}

fn draw_bar<DB>(root: &DrawingArea<DB, Shift>, matrix: &BarMatrix) -> Result<()>
where
    DB: DrawingBackend,
{
    if matrix.hotels.is_empty() || matrix.datasets.is_empty() {
        return Err(anyhow!("no data to plot"));
    }

    let n_hotels = matrix.hotels.len();
    let max_count = matrix
        .datasets
        .iter()
        .flat_map(|ds| ds.values.iter())
        .copied()
        .max()
        .unwrap_or(0);
    let y_max = padded_max(max_count as f64);

    let mut chart = ChartBuilder::on(root)
        .margin(16)
        .caption("Bookings By Month", (FontFamily::SansSerif, 24))
        .set_label_area_size(LabelAreaPosition::Left, 72)
        .set_label_area_size(LabelAreaPosition::Bottom, 56)
        .build_cartesian_2d(-0.6f64..(n_hotels as f64 - 0.4), 0.0f64..y_max)
        .map_err(|e| anyhow!("{:?}", e))?;

    let hotels = matrix.hotels.clone();
    chart
        .configure_mesh()
        .x_desc("Hotels")
        .y_desc("Number of Bookings")
        .x_labels(n_hotels.min(12))
        .y_labels(10)
        .disable_x_mesh()
        .x_label_formatter(&move |x: &f64| {
            let i = x.round();
            if (x - i).abs() < 0.05 && i >= 0.0 && (i as usize) < hotels.len() {
                hotels[i as usize].clone()
            } else {
                String::new()
            }
        })
        .y_label_formatter(&|v: &f64| format_count(v.round() as u64))
        .label_style((FontFamily::SansSerif, 12))
        .axis_desc_style((FontFamily::SansSerif, 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let n_months = matrix.datasets.len().max(1);
    let group_width = 0.8f64;
    let bar_w = group_width / n_months as f64;

    for (m, ds) in matrix.datasets.iter().enumerate() {
        let color = to_rgb(ds.color);
        let elem = chart
            .draw_series(ds.values.iter().enumerate().map(|(h, &count)| {
                let x0 = h as f64 - group_width / 2.0 + m as f64 * bar_w;
                let x1 = x0 + bar_w;
                Rectangle::new([(x0, 0.0), (x1, count as f64)], color.filled())
            }))
            .map_err(|e| anyhow!("{:?}", e))?;
        elem.label(&ds.label).legend(move |(x, y)| {
            Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
        });
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.85))
        .label_font((FontFamily::SansSerif, 14))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    Ok(())
}
