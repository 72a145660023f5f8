//! The interactive shape tool capability.

use super::editor::{EditMode, VertexEditor};
use super::events::PointerEvent;
use crate::collections::OrderedList;
use crate::draw::{Point, RenderTarget};

/// A stateful editor for one shape instance.
///
/// The host forwards pointer events and render requests to the active tool. Each event
/// handler returns whether the event was consumed; a `false` from
/// [`on_pointer_down`](Self::on_pointer_down) means the press finished the shape and the
/// tool no longer wants draw input.
///
/// Implementors supply the tool name and access to their [`VertexEditor`]; every other
/// method has a default that delegates to the editor.
pub trait ShapeTool {
    /// Lowercase identifier used by the registry.
    fn name(&self) -> &'static str;

    fn editor(&self) -> &VertexEditor;

    fn editor_mut(&mut self) -> &mut VertexEditor;

    fn mode(&self) -> EditMode {
        self.editor().mode()
    }

    fn vertices(&self) -> &OrderedList<Point> {
        self.editor().vertices()
    }

    fn is_selected(&self) -> bool {
        self.editor().is_selected()
    }

    fn selected_index(&self) -> Option<usize> {
        self.editor().selected_index()
    }

    fn preview(&self) -> Option<Point> {
        self.editor().preview()
    }

    fn select(&mut self, selected: bool) {
        self.editor_mut().select(selected);
    }

    fn hit_test(&self, p: Point) -> bool {
        self.editor().hit_test(p)
    }

    fn vertex_at(&self, p: Point) -> Option<usize> {
        self.editor().vertex_at(p)
    }

    fn on_pointer_down(&mut self, p: Point) -> bool {
        self.editor_mut().pointer_down(p)
    }

    fn on_pointer_move(&mut self, p: Point) -> bool {
        self.editor_mut().pointer_move(p)
    }

    fn on_pointer_drag(&mut self, p: Point) -> bool {
        self.editor_mut().pointer_drag(p)
    }

    fn on_pointer_up(&mut self, p: Point) -> bool {
        self.editor_mut().pointer_up(p)
    }

    fn render(&self, target: &mut dyn RenderTarget) {
        self.editor().render(target);
    }

    fn render_widgets(&self, target: &mut dyn RenderTarget) {
        self.editor().render_widgets(target);
    }

    /// Routes a [`PointerEvent`] to the matching handler.
    fn handle(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down(p) => self.on_pointer_down(p),
            PointerEvent::Move(p) => self.on_pointer_move(p),
            PointerEvent::Drag(p) => self.on_pointer_drag(p),
            PointerEvent::Up(p) => self.on_pointer_up(p),
        }
    }
}
