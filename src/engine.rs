//! Engine: the controller that turns raw host input into rendered pixel sets.
//!
//! [`EngineCore`] holds every piece of state and logic that does not depend on
//! the canvas element, so it can be tested natively without a browser.
//! [`Engine`] wraps it with the browser pieces: the canvas 2D context, the
//! high-resolution clock, and logging. One draw action runs to completion on
//! the calling thread; the pixel set and grid are owned here exclusively and
//! replaced atomically, never edited in place.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::grid::Grid;
use crate::input::{self, FieldValues, InputError, InputMode};
use crate::pixel::PixelSet;
use crate::raster::{self, Algorithm, TraceStep};
use crate::render;

/// How many trace steps are spelled out before collapsing to a remainder count.
const TRACE_HEAD: usize = 5;

/// Result of a successful validated draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOutcome {
    pub algorithm: Algorithm,
    /// Number of distinct cells in the new pixel set.
    pub points: usize,
    /// Per-step error trace; present for the Bresenham line only.
    pub trace: Option<Vec<TraceStep>>,
}

/// Host-facing summary of a draw action, sent across the wasm boundary as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct DrawReport {
    pub ok: bool,
    /// One-line summary for the status bar, error text included.
    pub status: String,
    pub elapsed_ms: f64,
    pub points: usize,
    pub algorithm: &'static str,
}

/// One-line status summary for a completed draw.
#[must_use]
pub fn status_line(elapsed_ms: f64, points: usize, algorithm: Algorithm) -> String {
    format!("Time: {elapsed_ms:.3} ms | Points: {points} | Algorithm: {}", algorithm.label())
}

/// Core engine state — all logic that doesn't depend on the canvas element.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub grid: Grid,
    pub algorithm: Algorithm,
    pixels: Option<PixelSet>,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the active algorithm and report which input group it needs.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> InputMode {
        self.algorithm = algorithm;
        algorithm.input_mode()
    }

    /// The input group the current algorithm reads.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.algorithm.input_mode()
    }

    /// Adopt a new viewport size; the grid origin snaps to the center.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.grid.set_viewport(width, height);
    }

    /// Adopt a new zoom level, clamped to the slider bounds.
    pub fn set_scale(&mut self, scale: f64) {
        self.grid.set_scale(scale);
    }

    /// Validate the active field group, rasterize, and install the new pixel
    /// set. Built first, installed second: on any error the previous set is
    /// left untouched and no partial result exists.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when a field fails validation; nothing is
    /// rasterized in that case.
    pub fn draw(&mut self, fields: &FieldValues) -> Result<DrawOutcome, InputError> {
        let (pixels, trace) = match self.algorithm {
            Algorithm::Step => {
                let line = input::parse_line(&fields.x1, &fields.y1, &fields.x2, &fields.y2)?;
                (raster::step_line(line.x1, line.y1, line.x2, line.y2), None)
            }
            Algorithm::Dda => {
                let line = input::parse_line(&fields.x1, &fields.y1, &fields.x2, &fields.y2)?;
                (raster::dda_line(line.x1, line.y1, line.x2, line.y2), None)
            }
            Algorithm::BresenhamLine => {
                let line = input::parse_line(&fields.x1, &fields.y1, &fields.x2, &fields.y2)?;
                let (pixels, trace) =
                    raster::bresenham_line_traced(line.x1, line.y1, line.x2, line.y2);
                log::debug!(
                    "bresenham line ({}, {}) -> ({}, {})",
                    line.x1,
                    line.y1,
                    line.x2,
                    line.y2
                );
                log_trace(&trace);
                (pixels, Some(trace))
            }
            Algorithm::BresenhamCircle => {
                let circle = input::parse_circle(&fields.xc, &fields.yc, &fields.r)?;
                (raster::bresenham_circle(circle.xc, circle.yc, circle.r), None)
            }
        };

        let points = pixels.len();
        self.pixels = Some(pixels);
        Ok(DrawOutcome { algorithm: self.algorithm, points, trace })
    }

    /// Drop the current pixel set.
    pub fn clear(&mut self) {
        self.pixels = None;
    }

    /// The pixel set from the most recent draw, if any.
    #[must_use]
    pub fn pixels(&self) -> Option<&PixelSet> {
        self.pixels.as_ref()
    }
}

/// Emit the first few walk steps and a remainder count at debug level.
fn log_trace(trace: &[TraceStep]) {
    for entry in trace.iter().take(TRACE_HEAD) {
        log::debug!("step {}: point ({}, {}), err = {}", entry.step, entry.x, entry.y, entry.err);
    }
    if trace.len() > TRACE_HEAD {
        log::debug!("... and {} more steps", trace.len() - TRACE_HEAD);
    }
}

/// The full engine. Wraps [`EngineCore`] and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element. The scene is
    /// empty until the host reports the first viewport size via
    /// [`Engine::resize`].
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    /// Select the algorithm by its selector code. Unknown codes leave the
    /// selection unchanged. Returns the input group the host should show.
    pub fn set_algorithm(&mut self, code: &str) -> InputMode {
        match Algorithm::from_code(code) {
            Some(algorithm) => {
                self.core.set_algorithm(algorithm);
            }
            None => {
                log::warn!("unknown algorithm code {code:?}; keeping {:?}", self.core.algorithm);
            }
        }
        self.core.input_mode()
    }

    /// Handle a canvas resize: recompute the origin and repaint everything.
    ///
    /// # Errors
    ///
    /// Returns `Err` if repainting fails.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.core.resize(width, height);
        self.render()
    }

    /// Handle a zoom change: clamp, then repaint at the new scale.
    ///
    /// # Errors
    ///
    /// Returns `Err` if repainting fails.
    pub fn set_scale(&mut self, scale: f64) -> Result<(), JsValue> {
        self.core.set_scale(scale);
        self.render()
    }

    /// Run a draw action from the host's raw field JSON and return the
    /// [`DrawReport`] as JSON. Never panics; every failure folds into the
    /// report status.
    pub fn draw_json(&mut self, fields_json: &str) -> String {
        let report = match serde_json::from_str::<FieldValues>(fields_json) {
            Ok(fields) => self.draw(&fields),
            Err(err) => {
                log::warn!("malformed draw payload: {err}");
                DrawReport {
                    ok: false,
                    status: format!("An error occurred: {err}"),
                    elapsed_ms: 0.0,
                    points: 0,
                    algorithm: self.core.algorithm.code(),
                }
            }
        };
        serde_json::to_string(&report)
            .unwrap_or_else(|err| format!("{{\"ok\":false,\"status\":\"{err}\"}}"))
    }

    /// Run a draw action: validate, rasterize, time, repaint, and log.
    ///
    /// Timing covers parsing and rasterization, matching what the status line
    /// reports as algorithm time; repainting happens after the clock stops.
    pub fn draw(&mut self, fields: &FieldValues) -> DrawReport {
        let started = now_ms();
        match self.core.draw(fields) {
            Ok(outcome) => {
                let elapsed_ms = now_ms() - started;
                match self.render() {
                    Ok(()) => {
                        let status = status_line(elapsed_ms, outcome.points, outcome.algorithm);
                        log::info!("{status}");
                        DrawReport {
                            ok: true,
                            status,
                            elapsed_ms,
                            points: outcome.points,
                            algorithm: outcome.algorithm.code(),
                        }
                    }
                    Err(err) => self.report_render_error(&err, elapsed_ms, outcome.points),
                }
            }
            Err(err) => {
                log::warn!("draw rejected: {err}");
                DrawReport {
                    ok: false,
                    status: format!("Error: {err}"),
                    elapsed_ms: 0.0,
                    points: 0,
                    algorithm: self.core.algorithm.code(),
                }
            }
        }
    }

    /// Clear the pixel layer and repaint the grid. Returns the status line.
    pub fn clear(&mut self) -> String {
        self.core.clear();
        match self.render() {
            Ok(()) => "Canvas cleared.".to_owned(),
            Err(err) => {
                let status = format!("An error occurred: {}", describe_js(&err));
                log::error!("{status}");
                status
            }
        }
    }

    /// Repaint the whole scene from current state.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the 2D context is unavailable or a canvas call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = context_2d(&self.canvas)?;
        render::draw_scene(&ctx, &self.core.grid, self.core.pixels())
    }

    fn report_render_error(&self, err: &JsValue, elapsed_ms: f64, points: usize) -> DrawReport {
        let status = format!("An error occurred: {}", describe_js(err));
        log::error!("{status}");
        DrawReport {
            ok: false,
            status,
            elapsed_ms,
            points,
            algorithm: self.core.algorithm.code(),
        }
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?;
    ctx.dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("2d context has unexpected type"))
}

/// High-resolution clock in milliseconds. Falls back to the coarse JS clock
/// when no `window` (and therefore no `Performance`) exists.
fn now_ms() -> f64 {
    web_sys::window().and_then(|w| w.performance()).map_or_else(js_sys::Date::now, |p| p.now())
}

fn describe_js(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
