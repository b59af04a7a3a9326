//! SVG layout for the bar and donut charts. Pure numbers in, shapes out.

use super::charts::Orientation;

/// Plot area inside an SVG viewBox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Frame {
    pub fn plot_width(&self) -> f64 {
        (self.width - self.left - self.right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(0.0)
    }

    pub fn origin_y(&self) -> f64 {
        self.height - self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Offset along the value axis from the plot origin.
    pub offset: f64,
}

const BAR_FILL: f64 = 0.72;

/// Smallest of 1, 2, 2.5, 5 × 10ⁿ that is at least `max`.
pub fn nice_ceiling(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let base = 10f64.powi(max.log10().floor() as i32);
    [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .map(|m| m * base)
        .find(|candidate| *candidate >= max)
        .unwrap_or(10.0 * base)
}

/// Evenly spaced ticks from 0 to `axis_max` inclusive.
pub fn value_ticks(axis_max: f64, span: f64, steps: usize) -> Vec<Tick> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| {
            let fraction = i as f64 / steps as f64;
            Tick {
                value: axis_max * fraction,
                offset: span * fraction,
            }
        })
        .collect()
}

/// Rectangles for `values` listed in axis order from the origin.
pub fn bar_layout(values: &[f64], axis_max: f64, orientation: Orientation, frame: &Frame) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let scale = |value: f64| {
        if axis_max > 0.0 {
            (value.max(0.0) / axis_max).min(1.0)
        } else {
            0.0
        }
    };

    match orientation {
        Orientation::Horizontal => {
            let band = frame.plot_height() / values.len() as f64;
            let thickness = band * BAR_FILL;
            values
                .iter()
                .enumerate()
                .map(|(i, value)| BarRect {
                    x: frame.left,
                    y: frame.origin_y() - (i as f64 + 1.0) * band + (band - thickness) / 2.0,
                    width: frame.plot_width() * scale(*value),
                    height: thickness,
                })
                .collect()
        }
        Orientation::Vertical => {
            let band = frame.plot_width() / values.len() as f64;
            let thickness = band * BAR_FILL;
            values
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    let length = frame.plot_height() * scale(*value);
                    BarRect {
                        x: frame.left + i as f64 * band + (band - thickness) / 2.0,
                        y: frame.origin_y() - length,
                        width: thickness,
                        height: length,
                    }
                })
                .collect()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlicePath {
    /// SVG path data for the ring segment.
    pub d: String,
    pub fraction: f64,
    pub label_x: f64,
    pub label_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Donut {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    /// Inner radius as a fraction of `radius`.
    pub hole: f64,
}

/// Point at `angle` radians clockwise from 12 o'clock.
fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// Ring segments starting at 12 o'clock and running clockwise. Each slice is
/// pushed out along its bisector by `pull × radius`. Returns nothing when the
/// values sum to zero.
pub fn donut_slices(values: &[f64], pulls: &[f64], donut: &Donut) -> Vec<SlicePath> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 || !total.is_finite() {
        return Vec::new();
    }

    let inner = donut.radius * donut.hole.clamp(0.0, 0.95);
    let mut start = 0.0_f64;

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let fraction = value.max(0.0) / total;
            let sweep = fraction * std::f64::consts::TAU;
            let end = start + sweep;
            let mid = start + sweep / 2.0;

            let pull = pulls.get(i).copied().unwrap_or(0.0) * donut.radius;
            let (cx, cy) = polar(donut.cx, donut.cy, pull, mid);

            let d = ring_segment(cx, cy, donut.radius, inner, start, end);
            let (label_x, label_y) = polar(cx, cy, (donut.radius + inner) / 2.0, mid);
            start = end;

            SlicePath {
                d,
                fraction,
                label_x,
                label_y,
            }
        })
        .collect()
}

fn ring_segment(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    // A lone full-circle arc has coincident endpoints; split it in two.
    if end - start >= std::f64::consts::TAU - 1e-9 {
        let half = start + std::f64::consts::PI;
        return format!(
            "{} {}",
            ring_segment(cx, cy, outer, inner, start, half),
            ring_segment(cx, cy, outer, inner, half, end)
        );
    }

    let large = if end - start > std::f64::consts::PI { 1 } else { 0 };
    let (ox0, oy0) = polar(cx, cy, outer, start);
    let (ox1, oy1) = polar(cx, cy, outer, end);
    let (ix1, iy1) = polar(cx, cy, inner, end);
    let (ix0, iy0) = polar(cx, cy, inner, start);

    format!(
        "M{ox0:.2},{oy0:.2} A{outer:.2},{outer:.2} 0 {large} 1 {ox1:.2},{oy1:.2} \
         L{ix1:.2},{iy1:.2} A{inner:.2},{inner:.2} 0 {large} 0 {ix0:.2},{iy0:.2} Z"
    )
}
