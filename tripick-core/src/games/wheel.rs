//! Wheel geometry for the roulette face.
//!
//! Pure angle and SVG-path arithmetic. Angles are in degrees with 0° at
//! 12 o'clock, increasing clockwise, matching the slice assignment in
//! [`super::roulette`].

use std::f64::consts::PI;
use std::fmt::Write as _;

/// Angular width of one slice for an `n`-option wheel. For all n ≥ 1
/// the widths sum to exactly 360°.
#[must_use]
pub fn slice_width(n: usize) -> f64 {
    360.0 / n.max(1) as f64
}

/// One slice of the rendered wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceGeometry {
    pub start_deg: f64,
    pub mid_deg: f64,
    pub end_deg: f64,
    /// SVG path for the filled sector.
    pub path: String,
    /// Label anchor point, centered along the slice bisector.
    pub label_x: f64,
    pub label_y: f64,
}

/// Square wheel face of `size` px; slices are inset from the rim so the
/// border ring stays visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelLayout {
    pub size: f64,
    pub rim_inset: f64,
    pub label_radius_ratio: f64,
}

impl Default for WheelLayout {
    fn default() -> Self {
        Self {
            size: 360.0,
            rim_inset: 10.0,
            label_radius_ratio: 0.65,
        }
    }
}

impl WheelLayout {
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.size / 2.0
    }

    /// Geometry for slice `index` of an `n`-slice wheel.
    #[must_use]
    pub fn slice(&self, index: usize, n: usize) -> SliceGeometry {
        let width = slice_width(n);
        let start = index as f64 * width;
        let end = start + width;
        let mid = start + width / 2.0;
        let r = self.radius();
        let label = polar(r, r, r * self.label_radius_ratio, mid);
        SliceGeometry {
            start_deg: start,
            mid_deg: mid,
            end_deg: end,
            path: sector_path(r, r, r - self.rim_inset, start, end),
            label_x: label.0,
            label_y: label.1,
        }
    }

    /// All `n` slices in input order.
    #[must_use]
    pub fn slices(&self, n: usize) -> Vec<SliceGeometry> {
        (0..n).map(|i| self.slice(i, n)).collect()
    }
}

fn to_rad(deg: f64) -> f64 {
    (deg - 90.0) * PI / 180.0
}

fn polar(cx: f64, cy: f64, r: f64, deg: f64) -> (f64, f64) {
    let rad = to_rad(deg);
    (r.mul_add(rad.cos(), cx), r.mul_add(rad.sin(), cy))
}

/// SVG sector path from `start` to `end` degrees around `(cx, cy)`,
/// drawn counterclockwise from the end point so the fill winds the same
/// way for every slice.
#[must_use]
pub fn sector_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let (sx, sy) = polar(cx, cy, r, end);
    let (ex, ey) = polar(cx, cy, r, start);
    let large = if end - start <= 180.0 { '0' } else { '1' };
    let mut path = String::new();
    let _ = write!(path, "M {cx} {cy} L {sx} {sy} A {r} {r} 0 {large} 0 {ex} {ey} Z");
    path
}
