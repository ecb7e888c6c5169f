//! Rendering: draws the grid scene to a 2D canvas context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives read-only grid and pixel
//! state and produces pixels on the surface — it does not mutate any
//! application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) folds them into a
//! status message for the host.

use std::f64::consts::{FRAC_PI_2, PI};

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{AXIS_COLOR, AXIS_LABEL_OFFSET_PX, CELL_LABEL_COLOR, GRID_LINE_COLOR};
use crate::grid::{Axis, Grid};
use crate::pixel::PixelSet;

/// Axis arrowhead length in screen pixels.
const ARROW_SIZE: f64 = 10.0;

/// Axis arrowhead half-angle in radians (~30°).
const ARROW_ANGLE: f64 = PI / 6.0;

/// Gap between a pixel square and its coordinate label, in screen pixels.
const CELL_LABEL_GAP_PX: f64 = 5.0;

/// Axis caption font (the `X` / `Y` markers).
const CAPTION_FONT: &str = "bold 12px Arial";

/// Unit label font.
const LABEL_FONT: &str = "8px Arial";

/// Origin label font.
const ORIGIN_FONT: &str = "bold 8px Arial";

/// Coordinate overlay font.
const CELL_LABEL_FONT: &str = "7px Arial";

/// Repaint the full scene: the grid layer first, then the pixel layer.
///
/// The surface is immediate-mode, so both layers are repainted on every call;
/// the split below keeps the layers independent the way the engine replaces
/// them (pixels per draw, grid per resize/zoom).
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. a detached context).
pub fn draw_scene(
    ctx: &CanvasRenderingContext2d,
    grid: &Grid,
    pixels: Option<&PixelSet>,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, grid.width, grid.height);
    draw_grid(ctx, grid)?;
    if let Some(pixels) = pixels {
        draw_pixels(ctx, grid, pixels)?;
    }
    Ok(())
}

/// Grid layer: background lines, axes with arrowheads, captions, unit labels.
fn draw_grid(ctx: &CanvasRenderingContext2d, grid: &Grid) -> Result<(), JsValue> {
    ctx.set_stroke_style_str(GRID_LINE_COLOR);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    for x in grid.vertical_lines() {
        ctx.move_to(x, 0.0);
        ctx.line_to(x, grid.height);
    }
    for y in grid.horizontal_lines() {
        ctx.move_to(0.0, y);
        ctx.line_to(grid.width, y);
    }
    ctx.stroke();

    draw_axes(ctx, grid)?;
    draw_unit_labels(ctx, grid)
}

/// Axes through the origin, arrowheads toward +x (right) and +y (up).
fn draw_axes(ctx: &CanvasRenderingContext2d, grid: &Grid) -> Result<(), JsValue> {
    let origin = grid.origin;

    ctx.set_stroke_style_str(AXIS_COLOR);
    ctx.set_fill_style_str(AXIS_COLOR);
    ctx.set_line_width(2.0);

    ctx.begin_path();
    ctx.move_to(0.0, origin.y);
    ctx.line_to(grid.width, origin.y);
    ctx.move_to(origin.x, grid.height);
    ctx.line_to(origin.x, 0.0);
    ctx.stroke();

    // Screen y grows downward, so "up" is -pi/2.
    draw_arrowhead(ctx, grid.width, origin.y, 0.0);
    draw_arrowhead(ctx, origin.x, 0.0, -FRAC_PI_2);

    ctx.set_font(CAPTION_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text("X", grid.width - 10.0, origin.y - 10.0)?;
    ctx.fill_text("Y", origin.x + 10.0, 10.0)?;
    Ok(())
}

fn draw_arrowhead(ctx: &CanvasRenderingContext2d, tip_x: f64, tip_y: f64, angle: f64) {
    let x1 = tip_x - ARROW_SIZE * (angle - ARROW_ANGLE).cos();
    let y1 = tip_y - ARROW_SIZE * (angle - ARROW_ANGLE).sin();
    let x2 = tip_x - ARROW_SIZE * (angle + ARROW_ANGLE).cos();
    let y2 = tip_y - ARROW_SIZE * (angle + ARROW_ANGLE).sin();

    ctx.begin_path();
    ctx.move_to(tip_x, tip_y);
    ctx.line_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.close_path();
    ctx.fill();
}

/// Integer unit labels plus the `"0"` marker at the origin. Skipped entirely
/// at coarse zoom; the gate lives on [`Grid::shows_unit_labels`].
fn draw_unit_labels(ctx: &CanvasRenderingContext2d, grid: &Grid) -> Result<(), JsValue> {
    if !grid.shows_unit_labels() {
        return Ok(());
    }

    ctx.set_fill_style_str(AXIS_COLOR);
    ctx.set_font(LABEL_FONT);
    for label in grid.unit_labels() {
        match label.axis {
            Axis::X => {
                ctx.set_text_align("center");
                ctx.set_text_baseline("top");
            }
            Axis::Y => {
                ctx.set_text_align("left");
                ctx.set_text_baseline("middle");
            }
        }
        ctx.fill_text(&label.value.to_string(), label.pos.x, label.pos.y)?;
    }

    ctx.set_font(ORIGIN_FONT);
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");
    ctx.fill_text(
        "0",
        grid.origin.x + AXIS_LABEL_OFFSET_PX,
        grid.origin.y + AXIS_LABEL_OFFSET_PX,
    )
}

/// Pixel layer: one filled square per cell, plus the coordinate overlay when
/// the zoom is deep and the set is small.
fn draw_pixels(ctx: &CanvasRenderingContext2d, grid: &Grid, pixels: &PixelSet) -> Result<(), JsValue> {
    ctx.set_fill_style_str(pixels.color());
    for cell in pixels.iter() {
        let rect = grid.cell_rect(cell);
        ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    if grid.shows_cell_labels(pixels.len()) {
        ctx.set_fill_style_str(CELL_LABEL_COLOR);
        ctx.set_font(CELL_LABEL_FONT);
        ctx.set_text_align("left");
        ctx.set_text_baseline("middle");
        for cell in pixels.iter() {
            let center = grid.cell_center(cell);
            let text = format!("({},{})", cell.x, cell.y);
            ctx.fill_text(&text, center.x + grid.scale / 2.0 + CELL_LABEL_GAP_PX, center.y)?;
        }
    }

    Ok(())
}
