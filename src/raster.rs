//! The rasterization algorithms: pure functions from integer inputs to pixel sets.
//!
//! All four algorithms assume validated inputs (parsing and the negative-radius
//! check happen at the engine boundary) and never fail. Each returns a fresh
//! [`PixelSet`] tagged with the algorithm's fixed display color; duplicate
//! cells collapse via set semantics. Output depends only on the logical
//! inputs; scale and viewport play no part here.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use serde::{Deserialize, Serialize};

use crate::consts::{BRESENHAM_CIRCLE_COLOR, BRESENHAM_LINE_COLOR, DDA_COLOR, STEP_COLOR};
use crate::input::InputMode;
use crate::pixel::{GridPoint, PixelSet};

/// The selectable rasterization algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Naive slope-stepping line (default).
    #[default]
    Step,
    /// Digital differential analyzer line.
    Dda,
    /// Integer-only Bresenham line.
    BresenhamLine,
    /// Midpoint (Bresenham) circle.
    BresenhamCircle,
}

impl Algorithm {
    /// Selector code used by the host's algorithm picker.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Step => "step",
            Self::Dda => "dda",
            Self::BresenhamLine => "bresenham_line",
            Self::BresenhamCircle => "bresenham_circle",
        }
    }

    /// Parse a selector code. Returns `None` for unknown codes.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "step" => Some(Self::Step),
            "dda" => Some(Self::Dda),
            "bresenham_line" => Some(Self::BresenhamLine),
            "bresenham_circle" => Some(Self::BresenhamCircle),
            _ => None,
        }
    }

    /// Human-readable name used in status reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Step => "Step-by-step",
            Self::Dda => "DDA",
            Self::BresenhamLine => "Bresenham line",
            Self::BresenhamCircle => "Bresenham circle",
        }
    }

    /// Fixed display color for pixels emitted by this algorithm.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Step => STEP_COLOR,
            Self::Dda => DDA_COLOR,
            Self::BresenhamLine => BRESENHAM_LINE_COLOR,
            Self::BresenhamCircle => BRESENHAM_CIRCLE_COLOR,
        }
    }

    /// Which input field group this algorithm reads.
    #[must_use]
    pub fn input_mode(self) -> InputMode {
        match self {
            Self::Step | Self::Dda | Self::BresenhamLine => InputMode::Line,
            Self::BresenhamCircle => InputMode::Circle,
        }
    }
}

/// Naive slope-stepping line: iterate the major axis one cell at a time and
/// solve the line equation for the minor coordinate.
///
/// Endpoints are swapped so iteration runs in increasing major-axis order,
/// which keeps the walk monotonic and reproducible regardless of input order.
/// Rounding halves round away from zero (`f64::round`).
#[must_use]
pub fn step_line(x1: i64, y1: i64, x2: i64, y2: i64) -> PixelSet {
    let mut pixels = PixelSet::new(Algorithm::Step.color());
    let dx = x2 - x1;
    let dy = y2 - y1;

    if dx == 0 && dy == 0 {
        pixels.insert(GridPoint::new(x1, y1));
        return pixels;
    }

    if dx.abs() >= dy.abs() {
        let (x1, y1, x2) = if x1 > x2 { (x2, y2, x1) } else { (x1, y1, x2) };
        let k = dy as f64 / dx as f64;
        let b = y1 as f64 - k * x1 as f64;
        for x in x1..=x2 {
            let y = (k * x as f64 + b).round() as i64;
            pixels.insert(GridPoint::new(x, y));
        }
    } else {
        let (x1, y1, y2) = if y1 > y2 { (x2, y2, y1) } else { (x1, y1, y2) };
        let k_inv = dx as f64 / dy as f64;
        let b_inv = x1 as f64 - k_inv * y1 as f64;
        for y in y1..=y2 {
            let x = (k_inv * y as f64 + b_inv).round() as i64;
            pixels.insert(GridPoint::new(x, y));
        }
    }

    pixels
}

/// Digital differential analyzer: step `max(|dx|, |dy|)` times with real-valued
/// increments, rounding each position to the nearest cell.
///
/// Emits `steps + 1` positions, so both endpoints are always present. Rounding
/// halves round away from zero (`f64::round`).
#[must_use]
pub fn dda_line(x1: i64, y1: i64, x2: i64, y2: i64) -> PixelSet {
    let mut pixels = PixelSet::new(Algorithm::Dda.color());
    let dx = x2 - x1;
    let dy = y2 - y1;
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        pixels.insert(GridPoint::new(x1, y1));
        return pixels;
    }

    let x_inc = dx as f64 / steps as f64;
    let y_inc = dy as f64 / steps as f64;
    let mut x = x1 as f64;
    let mut y = y1 as f64;
    for _ in 0..=steps {
        pixels.insert(GridPoint::new(x.round() as i64, y.round() as i64));
        x += x_inc;
        y += y_inc;
    }

    pixels
}

/// One emitted position of the Bresenham line walk, for the diagnostic trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceStep {
    pub step: usize,
    pub x: i64,
    pub y: i64,
    pub err: i64,
}

/// Bresenham line plus the per-step error trace.
///
/// Integer arithmetic only, symmetric across all eight octants via the
/// direction signs. A zero delta gets sign `-1`; the corresponding branch never
/// fires for that axis, so the choice fixes the trace, not the pixels. Both
/// error-term branches may fire in the same step; that is what produces exact
/// 45° diagonals.
#[must_use]
pub fn bresenham_line_traced(x1: i64, y1: i64, x2: i64, y2: i64) -> (PixelSet, Vec<TraceStep>) {
    let mut pixels = PixelSet::new(Algorithm::BresenhamLine.color());
    let mut trace = Vec::new();

    let dx = (x2 - x1).abs();
    let dy = -(y2 - y1).abs();
    let sx: i64 = if x1 < x2 { 1 } else { -1 };
    let sy: i64 = if y1 < y2 { 1 } else { -1 };

    let mut err = dx + dy;
    let mut x = x1;
    let mut y = y1;
    let mut step = 0;

    loop {
        pixels.insert(GridPoint::new(x, y));
        trace.push(TraceStep { step, x, y, err });

        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
        step += 1;
    }

    (pixels, trace)
}

/// Bresenham line across all eight octants.
#[must_use]
pub fn bresenham_line(x1: i64, y1: i64, x2: i64, y2: i64) -> PixelSet {
    bresenham_line_traced(x1, y1, x2, y2).0
}

/// Midpoint circle about `(xc, yc)` with non-negative radius `r`.
///
/// Walks one octant with the integer decision term `d = 3 - 2r` and emits the
/// eight symmetric points per iteration; overlaps on the axes and diagonals
/// collapse via set semantics. `r = 0` therefore yields the single center cell.
#[must_use]
pub fn bresenham_circle(xc: i64, yc: i64, r: i64) -> PixelSet {
    let mut pixels = PixelSet::new(Algorithm::BresenhamCircle.color());
    let mut x: i64 = 0;
    let mut y = r;
    let mut d = 3 - 2 * r;

    while x <= y {
        for (px, py) in [
            (xc + x, yc + y),
            (xc - x, yc + y),
            (xc + x, yc - y),
            (xc - x, yc - y),
            (xc + y, yc + x),
            (xc - y, yc + x),
            (xc + y, yc - x),
            (xc - y, yc - x),
        ] {
            pixels.insert(GridPoint::new(px, py));
        }

        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }

    pixels
}
