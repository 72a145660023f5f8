//! Built-in shape tools.

use super::editor::{Outline, VertexEditor};
use super::shape_tool::ShapeTool;
use super::style::ToolStyle;

/// Open polyline. Each click adds a vertex; clicking the last vertex again finishes it.
#[derive(Debug, Clone)]
pub struct PolylineTool {
    editor: VertexEditor,
}

impl PolylineTool {
    pub const NAME: &'static str = "line";

    pub fn new(style: &ToolStyle) -> Self {
        Self {
            editor: VertexEditor::new(Outline::Open, *style),
        }
    }

    /// Registry factory.
    pub fn boxed(style: &ToolStyle) -> Box<dyn ShapeTool> {
        Box::new(Self::new(style))
    }
}

impl ShapeTool for PolylineTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn editor(&self) -> &VertexEditor {
        &self.editor
    }

    fn editor_mut(&mut self) -> &mut VertexEditor {
        &mut self.editor
    }
}

/// Closed three-corner outline.
///
/// The third click closes the loop by repeating the first vertex, leaving four stored
/// vertices. Re-clicking the last vertex closes early.
#[derive(Debug, Clone)]
pub struct TriangleTool {
    editor: VertexEditor,
}

impl TriangleTool {
    pub const NAME: &'static str = "triangle";
    pub const CORNERS: usize = 3;

    pub fn new(style: &ToolStyle) -> Self {
        Self {
            editor: VertexEditor::new(
                Outline::Closed {
                    corners: Self::CORNERS,
                },
                *style,
            ),
        }
    }

    /// Registry factory.
    pub fn boxed(style: &ToolStyle) -> Box<dyn ShapeTool> {
        Box::new(Self::new(style))
    }
}

impl ShapeTool for TriangleTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn editor(&self) -> &VertexEditor {
        &self.editor
    }

    fn editor_mut(&mut self) -> &mut VertexEditor {
        &mut self.editor
    }
}
