//! Raster-algorithm playground: converts line segments and circles on an
//! integer logical grid into pixel sets with four classic algorithms, and
//! draws them on a zoomable, origin-centered canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser. The host
//! page owns the widgets (input fields, algorithm selector, zoom slider) and
//! forwards their raw values to [`engine::Engine`]; everything below the
//! widget layer (validation, rasterization, coordinate mapping, rendering,
//! timing) lives here. The algorithmic core never touches the DOM and is
//! tested natively through [`engine::EngineCore`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Controller and testable [`engine::EngineCore`] |
//! | [`raster`] | The four rasterization algorithms |
//! | [`pixel`] | Logical grid cells and deduplicated pixel sets |
//! | [`grid`] | Zoom/viewport state and logical↔screen conversion |
//! | [`input`] | Raw field parsing and validation |
//! | [`render`] | Scene rendering to the 2D context |
//! | [`consts`] | Shared numeric constants (zoom bounds, colors, label gates) |

pub mod consts;
pub mod engine;
pub mod grid;
pub mod input;
pub mod pixel;
pub mod raster;
pub mod render;

/// Install the panic hook and console logger. The host calls this once,
/// before constructing an [`engine::Engine`].
///
/// # Errors
///
/// Returns `Err` if a logger is already installed.
pub fn init_logging(level: log::Level) -> Result<(), log::SetLoggerError> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(level)
}
