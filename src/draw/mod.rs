//! Rendering primitives (Cairo-based).
//!
//! This module defines the drawing types the shape tools render with:
//! - [`Point`]: vertex coordinates
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`RenderTarget`]: the write-only surface a tool draws onto
//! - [`CairoTarget`] and [`Recorder`]: the Cairo-backed and in-memory targets

pub mod color;
pub mod point;
pub mod record;
pub mod render;

// Re-export commonly used types at module level
pub use color::Color;
pub use point::Point;
pub use record::{DrawCommand, Recorder};
pub use render::{CairoTarget, RenderTarget, paint_background};

pub use color::{BLACK, BLUE, GREEN, ORANGE, RED, WHITE, YELLOW};
