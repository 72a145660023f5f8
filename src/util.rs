//! Utility functions for hit-testing geometry and color names.
//!
//! This module provides:
//! - Edge distance and vertex radius tests used by the shape tools
//! - Color name mapping for the configuration file

use crate::draw::{Color, Point, color::*};

// ============================================================================
// Hit-Testing Geometry
// ============================================================================

/// Edges shorter than this are treated as a single point.
const DEGENERATE_EDGE: f64 = 1e-9;

/// Distance from `p` to the line through the edge `from`-`to`.
///
/// Uses the two-point line distance formula:
///
/// ```text
/// |(l.y - f.y) * p.x - (l.x - f.x) * p.y + l.x * f.y - l.y * f.x|
/// ---------------------------------------------------------------
///            sqrt((l.y - f.y)^2 + (l.x - f.x)^2)
/// ```
///
/// The distance is measured to the infinite line, so points beyond either endpoint but
/// level with the edge still report a small distance. A zero-length edge has no line;
/// in that case the plain distance from `p` to the endpoint is returned instead of NaN.
pub fn edge_distance(p: Point, from: Point, to: Point) -> f64 {
    let dy = to.y - from.y;
    let dx = to.x - from.x;
    let denominator = (dy * dy + dx * dx).sqrt();

    if denominator < DEGENERATE_EDGE {
        return p.distance(from);
    }

    let numerator = (dy * p.x - dx * p.y + to.x * from.y - to.y * from.x).abs();
    numerator / denominator
}

/// Returns `true` when `p` lies strictly inside the circle of `radius` around `center`.
pub fn within_radius(center: Point, p: Point, radius: f64) -> bool {
    center.distance_squared(p) < radius * radius
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "white", "black"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}
