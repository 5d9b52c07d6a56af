//! Small helpers shared by the chart renderers.

use crate::color::{Fill, Rgb};
use num_format::{Locale, ToFormattedString};
use plotters::style::{RGBAColor, RGBColor};

#[inline]
pub fn to_rgb(c: Rgb) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

#[inline]
pub fn to_rgba(f: Fill) -> RGBAColor {
    RGBAColor(f.color.r, f.color.g, f.color.b, f.alpha)
}

/// Grouped thousands for count tick labels, e.g. `12,345`.
pub fn format_count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

/// Y range headroom so the tallest bar/point clears the frame.
pub fn padded_max(max: f64) -> f64 {
    if max <= 0.0 { 1.0 } else { max * 1.1 }
}
