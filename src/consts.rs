//! Shared numeric constants for the rasterboard crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest allowed scale, in screen pixels per logical unit.
pub const MIN_SCALE: f64 = 5.0;

/// Largest allowed scale, in screen pixels per logical unit.
pub const MAX_SCALE: f64 = 50.0;

/// Scale a fresh session opens with.
pub const DEFAULT_SCALE: f64 = 20.0;

// ── Labels ──────────────────────────────────────────────────────

/// Integer unit labels along the axes are drawn only above this scale.
pub const UNIT_LABEL_MIN_SCALE: f64 = 10.0;

/// Per-cell `(x,y)` labels are drawn only above this scale.
pub const CELL_LABEL_MIN_SCALE: f64 = 25.0;

/// Per-cell labels are suppressed once the pixel set reaches this many points.
pub const CELL_LABEL_MAX_POINTS: usize = 10;

/// Offset of axis unit labels into the positive quadrant, in screen pixels.
pub const AXIS_LABEL_OFFSET_PX: f64 = 8.0;

// ── Colors ──────────────────────────────────────────────────────

/// Pixel color for the step-by-step line algorithm.
pub const STEP_COLOR: &str = "#e63946";

/// Pixel color for the DDA line algorithm.
pub const DDA_COLOR: &str = "#2a9d8f";

/// Pixel color for the Bresenham line algorithm.
pub const BRESENHAM_LINE_COLOR: &str = "#0077b6";

/// Pixel color for the Bresenham (midpoint) circle algorithm.
pub const BRESENHAM_CIRCLE_COLOR: &str = "#8338ec";

/// Background grid line color.
pub const GRID_LINE_COLOR: &str = "#f0f0f0";

/// Axis, caption, and unit label color.
pub const AXIS_COLOR: &str = "#000";

/// Color of the cosmetic per-cell coordinate labels.
pub const CELL_LABEL_COLOR: &str = "darkgray";
