//! Shape tools and the pointer-driven editing state machine.
//!
//! This module translates host pointer events into shape construction and editing.
//! A tool accumulates vertices while drawing, then switches to modify mode where its
//! vertices can be selected and dragged. Tools are created by name through the
//! [`ToolRegistry`].

pub mod editor;
pub mod events;
pub mod registry;
pub mod shape_tool;
pub mod style;
pub mod tool;


// Re-export commonly used types at module level
pub use editor::{EditMode, Outline, VertexEditor};
pub use events::PointerEvent;
pub use registry::{ToolError, ToolFactory, ToolRegistry};
pub use shape_tool::ShapeTool;
pub use style::ToolStyle;
pub use tool::{PolylineTool, TriangleTool};
