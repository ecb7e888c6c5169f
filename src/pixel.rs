//! Pixel model: logical grid cells and the deduplicated set a rasterizer emits.
//!
//! A rasterization call produces one [`PixelSet`]: the logical cells the
//! algorithm touched, with duplicates collapsed, tagged with the algorithm's
//! fixed display color. The set is a result value: the engine replaces the
//! previous set wholesale on every draw rather than editing it.

#[cfg(test)]
#[path = "pixel_test.rs"]
mod pixel_test;

use std::collections::BTreeSet;

/// A cell on the integer logical grid, independent of zoom and viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridPoint {
    pub x: i64,
    pub y: i64,
}

impl GridPoint {
    #[must_use]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// A deduplicated collection of rasterized cells with one display color.
///
/// Backed by an ordered set, so iteration is ascending `(x, y)` and therefore
/// deterministic, which keeps rendering and the per-cell label overlay stable.
/// Equality and test assertions compare contents as sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSet {
    color: &'static str,
    points: BTreeSet<GridPoint>,
}

impl PixelSet {
    /// Create an empty set tagged with a display color.
    #[must_use]
    pub fn new(color: &'static str) -> Self {
        Self { color, points: BTreeSet::new() }
    }

    /// The display color shared by every pixel in this set.
    #[must_use]
    pub fn color(&self) -> &'static str {
        self.color
    }

    /// Add a cell. Returns `false` if the cell was already present.
    pub fn insert(&mut self, cell: GridPoint) -> bool {
        self.points.insert(cell)
    }

    /// Whether the set contains `cell`.
    #[must_use]
    pub fn contains(&self, cell: GridPoint) -> bool {
        self.points.contains(&cell)
    }

    /// Number of distinct cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no cells have been emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Cells in ascending `(x, y)` order.
    pub fn iter(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.points.iter().copied()
    }

    /// The underlying ordered set, for whole-set comparisons.
    #[must_use]
    pub fn points(&self) -> &BTreeSet<GridPoint> {
        &self.points
    }
}
