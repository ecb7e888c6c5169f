//! View state and the mapping between logical grid cells and screen pixels.
//!
//! [`Grid`] owns the scale (pixels per logical unit) and the viewport, and is
//! the single source of truth for logical↔screen conversion. The origin sits
//! at the viewport center and moves only when the viewport is resized; the
//! scale changes only through [`Grid::set_scale`], which clamps to the zoom
//! bounds. Grid-line and label geometry is computed here, pure and
//! display-free, and consumed by the renderer.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::consts::{
    AXIS_LABEL_OFFSET_PX, CELL_LABEL_MAX_POINTS, CELL_LABEL_MIN_SCALE, DEFAULT_SCALE, MAX_SCALE,
    MIN_SCALE, UNIT_LABEL_MIN_SCALE,
};
use crate::pixel::GridPoint;

/// A position on the render surface, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned screen rectangle: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Which axis an on-screen unit label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// An integer unit label positioned on the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitLabel {
    pub axis: Axis,
    pub value: i64,
    pub pos: ScreenPoint,
}

/// Zoom and viewport state for the origin-centered grid.
///
/// `scale` is screen pixels per logical unit. `origin` is the screen position
/// of logical `(0, 0)`; logical +y points up, screen +y points down.
#[derive(Debug, Clone, Copy)]
pub struct Grid {
    pub scale: f64,
    pub width: f64,
    pub height: f64,
    pub origin: ScreenPoint,
}

impl Default for Grid {
    fn default() -> Self {
        Self { scale: DEFAULT_SCALE, width: 0.0, height: 0.0, origin: ScreenPoint::new(0.0, 0.0) }
    }
}

impl Grid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt a new viewport size. The origin snaps to the viewport center.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.origin = ScreenPoint::new(width / 2.0, height / 2.0);
    }

    /// Set pixels-per-unit, clamped to the zoom bounds.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Zoom readout for the host's slider label.
    #[must_use]
    pub fn scale_label(&self) -> String {
        format!("{:.0} px/unit", self.scale)
    }

    /// Screen position of the center of a logical cell.
    #[must_use]
    pub fn cell_center(&self, cell: GridPoint) -> ScreenPoint {
        ScreenPoint {
            x: self.origin.x + cell.x as f64 * self.scale,
            y: self.origin.y - cell.y as f64 * self.scale,
        }
    }

    /// Screen square covering a logical cell; side length equals the scale.
    #[must_use]
    pub fn cell_rect(&self, cell: GridPoint) -> ScreenRect {
        let center = self.cell_center(cell);
        let half = self.scale / 2.0;
        ScreenRect {
            x: center.x - half,
            y: center.y - half,
            width: self.scale,
            height: self.scale,
        }
    }

    /// The logical cell nearest to a screen position. Inverse of
    /// [`Grid::cell_center`] up to rounding.
    #[must_use]
    pub fn cell_at(&self, screen: ScreenPoint) -> GridPoint {
        GridPoint {
            x: ((screen.x - self.origin.x) / self.scale).round() as i64,
            y: ((self.origin.y - screen.y) / self.scale).round() as i64,
        }
    }

    /// Screen x of every vertical grid line: the positions congruent to the
    /// origin modulo the scale, left to right across the viewport.
    #[must_use]
    pub fn vertical_lines(&self) -> Vec<f64> {
        let mut xs = Vec::new();
        let mut x = self.origin.x % self.scale;
        while x < self.width {
            xs.push(x);
            x += self.scale;
        }
        xs
    }

    /// Screen y of every horizontal grid line, top to bottom.
    #[must_use]
    pub fn horizontal_lines(&self) -> Vec<f64> {
        let mut ys = Vec::new();
        let mut y = self.origin.y % self.scale;
        while y < self.height {
            ys.push(y);
            y += self.scale;
        }
        ys
    }

    /// Whether axis unit labels are drawn at the current zoom. Skipped at
    /// coarse zoom to avoid clutter.
    #[must_use]
    pub fn shows_unit_labels(&self) -> bool {
        self.scale > UNIT_LABEL_MIN_SCALE
    }

    /// Whether per-cell coordinate labels are drawn for a set of `count` pixels.
    #[must_use]
    pub fn shows_cell_labels(&self, count: usize) -> bool {
        self.scale > CELL_LABEL_MIN_SCALE && count < CELL_LABEL_MAX_POINTS
    }

    /// Integer unit labels along both axes, walking outward from the origin
    /// while still on screen. Empty below the label scale threshold. The
    /// origin's `"0"` label is the renderer's job.
    #[must_use]
    pub fn unit_labels(&self) -> Vec<UnitLabel> {
        if !self.shows_unit_labels() {
            return Vec::new();
        }
        let mut labels = Vec::new();
        let label_y = self.origin.y + AXIS_LABEL_OFFSET_PX;
        let label_x = self.origin.x + AXIS_LABEL_OFFSET_PX;

        let mut i: i64 = 1;
        loop {
            let x = self.origin.x + i as f64 * self.scale;
            if x >= self.width {
                break;
            }
            labels.push(UnitLabel { axis: Axis::X, value: i, pos: ScreenPoint::new(x, label_y) });
            i += 1;
        }

        i = -1;
        loop {
            let x = self.origin.x + i as f64 * self.scale;
            if x <= 0.0 {
                break;
            }
            labels.push(UnitLabel { axis: Axis::X, value: i, pos: ScreenPoint::new(x, label_y) });
            i -= 1;
        }

        i = 1;
        loop {
            let y = self.origin.y - i as f64 * self.scale;
            if y <= 0.0 {
                break;
            }
            labels.push(UnitLabel { axis: Axis::Y, value: i, pos: ScreenPoint::new(label_x, y) });
            i += 1;
        }

        i = -1;
        loop {
            let y = self.origin.y - i as f64 * self.scale;
            if y >= self.height {
                break;
            }
            labels.push(UnitLabel { axis: Axis::Y, value: i, pos: ScreenPoint::new(label_x, y) });
            i -= 1;
        }

        labels
    }
}
