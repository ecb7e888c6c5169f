//! Raw input parsing: the text fields the host collects, and their validation.
//!
//! The host owns the widgets; this module owns what their raw text means. All
//! validation happens here, at the controller boundary, so the rasterizers in
//! [`crate::raster`] only ever see well-formed integers and non-negative radii.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

/// Which input field group the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Two endpoints: `x1, y1, x2, y2`.
    Line,
    /// Center and radius: `xc, yc, r`.
    Circle,
}

/// Validation failure for a draw request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// A required field does not contain a whole number.
    #[error("enter integers in all fields")]
    NotAnInteger,
    /// The circle radius is below zero.
    #[error("radius cannot be negative")]
    NegativeRadius,
}

/// Raw text of every input field as currently shown by the host.
///
/// The engine reads only the group the selected algorithm needs, so stale or
/// invalid text in the hidden group never blocks a draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValues {
    pub x1: String,
    pub y1: String,
    pub x2: String,
    pub y2: String,
    pub xc: String,
    pub yc: String,
    pub r: String,
}

impl Default for FieldValues {
    /// The values a fresh session opens with: a line crossing two quadrants
    /// and a radius-12 circle at the origin.
    fn default() -> Self {
        Self {
            x1: "-10".into(),
            y1: "-5".into(),
            x2: "10".into(),
            y2: "8".into(),
            xc: "0".into(),
            yc: "0".into(),
            r: "12".into(),
        }
    }
}

/// Endpoints of a validated line request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineInput {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

/// Center and radius of a validated circle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircleInput {
    pub xc: i64,
    pub yc: i64,
    pub r: i64,
}

fn parse_int(raw: &str) -> Result<i64, InputError> {
    raw.trim().parse().map_err(|_| InputError::NotAnInteger)
}

/// Parse the line field group.
///
/// # Errors
///
/// Returns [`InputError::NotAnInteger`] if any field is not a whole number.
pub fn parse_line(x1: &str, y1: &str, x2: &str, y2: &str) -> Result<LineInput, InputError> {
    Ok(LineInput {
        x1: parse_int(x1)?,
        y1: parse_int(y1)?,
        x2: parse_int(x2)?,
        y2: parse_int(y2)?,
    })
}

/// Parse the circle field group. A negative radius is rejected here, before
/// any rasterization runs.
///
/// # Errors
///
/// Returns [`InputError::NotAnInteger`] if any field is not a whole number,
/// or [`InputError::NegativeRadius`] if the radius is below zero.
pub fn parse_circle(xc: &str, yc: &str, r: &str) -> Result<CircleInput, InputError> {
    let circle = CircleInput { xc: parse_int(xc)?, yc: parse_int(yc)?, r: parse_int(r)? };
    if circle.r < 0 {
        return Err(InputError::NegativeRadius);
    }
    Ok(circle)
}
