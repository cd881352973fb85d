//! Sequential colormaps for scalar-colored points.
//!
//! The stop tables are the nine-class ColorBrewer sequential palettes, the
//! same ones the matplotlib colormaps of the same name interpolate.

use serde::Deserialize;

use crate::color::Color;

const BLUES: [(u8, u8, u8); 9] = [
    (247, 251, 255),
    (222, 235, 247),
    (198, 219, 239),
    (158, 202, 225),
    (107, 174, 214),
    (66, 146, 198),
    (33, 113, 181),
    (8, 81, 156),
    (8, 48, 107),
];

const GREYS: [(u8, u8, u8); 9] = [
    (255, 255, 255),
    (240, 240, 240),
    (217, 217, 217),
    (189, 189, 189),
    (150, 150, 150),
    (115, 115, 115),
    (82, 82, 82),
    (37, 37, 37),
    (0, 0, 0),
];

const REDS: [(u8, u8, u8); 9] = [
    (255, 245, 240),
    (254, 224, 210),
    (252, 187, 161),
    (252, 146, 114),
    (251, 106, 74),
    (239, 59, 44),
    (203, 24, 29),
    (165, 15, 21),
    (103, 0, 13),
];

/// A named sequential colormap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    #[default]
    Blues,
    Greys,
    Reds,
}

impl Colormap {
    fn stops(self) -> &'static [(u8, u8, u8); 9] {
        match self {
            Self::Blues => &BLUES,
            Self::Greys => &GREYS,
            Self::Reds => &REDS,
        }
    }

    /// Samples the colormap at `t`, clamped to `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gngplot_core::{color::Color, colormap::Colormap};
    ///
    /// assert_eq!(Colormap::Blues.sample(0.0), Color::from_rgb8(247, 251, 255));
    /// assert_eq!(Colormap::Blues.sample(1.0), Color::from_rgb8(8, 48, 107));
    /// ```
    pub fn sample(self, t: f32) -> Color {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = t * (stops.len() - 1) as f32;
        let lower = (scaled.floor() as usize).min(stops.len() - 2);
        let frac = scaled - lower as f32;

        let (r0, g0, b0) = stops[lower];
        let (r1, g1, b1) = stops[lower + 1];
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * frac).round() as u8;

        Color::from_rgb8(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
    }

    /// Maps every scalar to a color, normalizing linearly between the
    /// smallest and largest scalar. A constant input maps to the middle.
    pub fn map_scalars(self, scalars: &[f32]) -> Vec<Color> {
        let (min, max) = scalars
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &s| {
                (lo.min(s), hi.max(s))
            });
        let range = max - min;

        scalars
            .iter()
            .map(|&s| {
                let t = if range > 0.0 { (s - min) / range } else { 0.5 };
                self.sample(t)
            })
            .collect()
    }
}
