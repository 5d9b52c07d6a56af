//! Series colors: an injectable palette seam plus the fixed line fill.
//!
//! The charts color each series at transform time. Production uses random
//! colors; tests and the `--fixed-colors` mode cycle a fixed palette instead,
//! so the reshaped output can be compared deterministically.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An opaque sRGB color, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).ok_or_else(|| D::Error::custom(format!("invalid color {s:?}")))
    }
}

/// A translucent fill: base color plus alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub color: Rgb,
    pub alpha: f64,
}

/// The fill shared by every revenue line dataset: `rgba(249, 238, 236, 0.74)`.
pub const LINE_FILL: Fill = Fill {
    color: Rgb::new(249, 238, 236),
    alpha: 0.74,
};

/// Source of series colors. Transformers pull one color per dataset.
pub trait Palette {
    fn next_color(&mut self) -> Rgb;
}

/// Uniformly random colors, one fresh draw per series.
#[derive(Debug, Clone)]
pub struct RandomPalette {
    rng: StdRng,
}

impl RandomPalette {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for RandomPalette {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette for RandomPalette {
    fn next_color(&mut self) -> Rgb {
        Rgb {
            r: self.rng.gen_range(0..=255),
            g: self.rng.gen_range(0..=255),
            b: self.rng.gen_range(0..=255),
        }
    }
}

/// Microsoft Office (2013+) chart series palette.
/// Order: Blue, Orange, Gray, Gold, Light Blue, Green, Dark Blue, Dark Orange, Dark Gray, Brownish Gold.
const OFFICE10: [Rgb; 10] = [
    Rgb::new(68, 114, 196),  // blue      (#4472C4)
    Rgb::new(237, 125, 49),  // orange    (#ED7D31)
    Rgb::new(165, 165, 165), // gray      (#A5A5A5)
    Rgb::new(255, 192, 0),   // gold      (#FFC000)
    Rgb::new(91, 155, 213),  // light blue(#5B9BD5)
    Rgb::new(112, 173, 71),  // green     (#70AD47)
    Rgb::new(38, 68, 120),   // dark blue (#264478)
    Rgb::new(158, 72, 14),   // dark org. (#9E480E)
    Rgb::new(99, 99, 99),    // dark gray (#636363)
    Rgb::new(153, 115, 0),   // brownish  (#997300)
];

/// Deterministic palette cycling the Office colors.
#[derive(Debug, Clone, Default)]
pub struct OfficePalette {
    idx: usize,
}

impl Palette for OfficePalette {
    fn next_color(&mut self) -> Rgb {
        let color = OFFICE10[self.idx % OFFICE10.len()];
        self.idx += 1;
        color
    }
}
