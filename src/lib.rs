//! Interactive polyline and triangle editing core.
//!
//! Exposes the vertex container, the shape tools with their pointer-driven editing
//! state machine, the render target seam, and the configuration types so that any
//! drawing host can drive tools and draw their output.

pub mod collections;
pub mod config;
pub mod draw;
pub mod input;
pub mod replay;
pub mod util;

pub use config::Config;
