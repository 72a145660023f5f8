//! Appearance and interaction tolerances shared by every shape tool.

use crate::draw::{BLACK, Color, GREEN};

/// Stroke width of committed edges.
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;
/// Radius of vertex markers, also the radius of a direct vertex hit.
pub const DEFAULT_MARKER_RADIUS: f64 = 5.0;
/// Maximum distance from an edge that still counts as a hit on the shape.
pub const DEFAULT_HIT_TOLERANCE: f64 = 5.0;

/// Drawing and hit-testing parameters handed to a tool at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolStyle {
    /// Width of stroked edges and the preview segment
    pub line_width: f64,
    /// Interaction radius around each vertex
    pub marker_radius: f64,
    /// Edge hit tolerance
    pub hit_tolerance: f64,
    /// Color of committed edges
    pub stroke_color: Color,
    /// Color of vertex markers
    pub marker_color: Color,
    /// Color of the selected vertex marker
    pub selection_color: Color,
}

impl Default for ToolStyle {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            marker_radius: DEFAULT_MARKER_RADIUS,
            hit_tolerance: DEFAULT_HIT_TOLERANCE,
            stroke_color: BLACK,
            marker_color: BLACK,
            selection_color: GREEN,
        }
    }
}
