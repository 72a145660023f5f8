//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::style::{DEFAULT_HIT_TOLERANCE, DEFAULT_LINE_WIDTH, DEFAULT_MARKER_RADIUS};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shape tool geometry settings.
///
/// Controls stroke width and the distances used to decide whether the pointer
/// touches a vertex or an edge.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ToolConfig {
    /// Edge stroke width in pixels (valid range: 0.5 - 20.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,

    /// Radius of vertex markers and of a direct vertex hit, in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f64,

    /// Maximum distance from an edge that counts as touching the shape (valid range: 1.0 - 50.0)
    #[serde(default = "default_hit_tolerance")]
    pub hit_tolerance: f64,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
            marker_radius: default_marker_radius(),
            hit_tolerance: default_hit_tolerance(),
        }
    }
}

/// Colors used when rendering shapes and their widgets.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ColorConfig {
    /// Edge color
    #[serde(default = "default_stroke_color")]
    pub stroke: ColorSpec,

    /// Vertex marker color
    #[serde(default = "default_marker_color")]
    pub marker: ColorSpec,

    /// Highlight color for the selected vertex
    #[serde(default = "default_selection_color")]
    pub selection: ColorSpec,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            stroke: default_stroke_color(),
            marker: default_marker_color(),
            selection: default_selection_color(),
        }
    }
}

/// Output canvas settings used by the replay host.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 16 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Background fill painted before shapes are rendered
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Tool used when none is given on the command line ("line" or "triangle")
    #[serde(default = "default_tool")]
    pub default_tool: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
            default_tool: default_tool(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_line_width() -> f64 {
    DEFAULT_LINE_WIDTH
}

fn default_marker_radius() -> f64 {
    DEFAULT_MARKER_RADIUS
}

fn default_hit_tolerance() -> f64 {
    DEFAULT_HIT_TOLERANCE
}

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_marker_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_selection_color() -> ColorSpec {
    ColorSpec::Name("green".to_string())
}

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_tool() -> String {
    "line".to_string()
}
