//! Vertex editing state machine shared by the shape tools.

use super::style::ToolStyle;
use crate::collections::OrderedList;
use crate::draw::{Point, RenderTarget};
use crate::util;
use log::debug;
use std::fmt;

/// Editing phase of a shape.
///
/// A shape starts in `Draw` and moves to `Modify` exactly once, when it is finalized.
/// There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Pointer-down appends vertices
    #[default]
    Draw,
    /// Vertex count is fixed; vertices can be dragged
    Modify,
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditMode::Draw => f.write_str("draw"),
            EditMode::Modify => f.write_str("modify"),
        }
    }
}

/// How a shape's outline is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outline {
    /// Polyline finished only by re-clicking its last vertex
    Open,
    /// Loop finished after `corners` user-placed vertices (or by re-clicking the last one);
    /// finishing appends the first vertex again to close the outline
    Closed { corners: usize },
}

/// State of one shape under construction or modification.
///
/// Owns the vertex list exclusively. Selection is stored as an index into that list, never
/// as a separate handle to a vertex.
#[derive(Debug, Clone)]
pub struct VertexEditor {
    vertices: OrderedList<Point>,
    outline: Outline,
    mode: EditMode,
    selected: bool,
    selection: Option<usize>,
    preview: Option<Point>,
    pointer_down: bool,
    dragging: bool,
    style: ToolStyle,
}

impl VertexEditor {
    /// Creates an empty, unselected editor in [`EditMode::Draw`].
    pub fn new(outline: Outline, style: ToolStyle) -> Self {
        Self {
            vertices: OrderedList::new(),
            outline,
            mode: EditMode::Draw,
            selected: false,
            selection: None,
            preview: None,
            pointer_down: false,
            dragging: false,
            style,
        }
    }

    pub fn vertices(&self) -> &OrderedList<Point> {
        &self.vertices
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Index of the vertex hit by the last pointer-down, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection
    }

    /// Rubber-band cursor position while drawing.
    pub fn preview(&self) -> Option<Point> {
        self.preview
    }

    /// Returns `true` while a pointer button is held over this shape.
    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    /// Returns `true` once a drag has been seen since the last pointer-down.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Selects or deselects the shape. Deselecting drops the vertex selection and preview.
    pub fn select(&mut self, selected: bool) {
        self.selected = selected;
        if !selected {
            self.selection = None;
            self.preview = None;
        }
    }

    /// Index of the first vertex whose interaction circle contains `p`.
    pub fn vertex_at(&self, p: Point) -> Option<usize> {
        let radius = self.style.marker_radius;
        self.vertices
            .iter()
            .position(|vertex| util::within_radius(*vertex, p, radius))
    }

    /// Returns `true` if `p` is within the hit tolerance of any edge.
    pub fn hit_test(&self, p: Point) -> bool {
        let tolerance = self.style.hit_tolerance;
        self.edges()
            .any(|(from, to)| util::edge_distance(p, *from, *to) < tolerance)
    }

    /// Handles a button press. Returns `false` when the press finished the shape.
    pub fn pointer_down(&mut self, p: Point) -> bool {
        self.pointer_down = true;
        self.selection = self.vertex_at(p);

        if self.mode == EditMode::Modify {
            return true;
        }

        let last = self.vertices.len().checked_sub(1);
        if self.selection.is_some() && self.selection == last {
            self.finalize();
            return false;
        }

        self.vertices.append(p);
        debug!("Appended vertex {} at {}", self.vertices.len() - 1, p);

        if let Outline::Closed { corners } = self.outline {
            if self.vertices.len() >= corners {
                self.finalize();
                return false;
            }
        }

        true
    }

    /// Tracks the cursor for the rubber-band preview. Ignored until the first vertex exists.
    pub fn pointer_move(&mut self, p: Point) -> bool {
        if self.vertices.is_empty() {
            return false;
        }

        if self.mode == EditMode::Draw {
            self.preview = Some(p);
        }
        true
    }

    /// Moves the selected vertex to `p` while modifying.
    pub fn pointer_drag(&mut self, p: Point) -> bool {
        self.dragging = true;

        if self.mode != EditMode::Modify {
            return true;
        }
        let Some(index) = self.selection else {
            return true;
        };

        if let Ok(vertex) = self.vertices.get_mut(index as isize) {
            *vertex = p;
        }

        // The first and closing vertex of a loop are the same corner.
        if let Outline::Closed { .. } = self.outline {
            let last = self.vertices.len().saturating_sub(1);
            let twin = if index == 0 {
                Some(last)
            } else if index == last {
                Some(0)
            } else {
                None
            };
            if let Some(twin) = twin.filter(|twin| *twin != index) {
                if let Ok(vertex) = self.vertices.get_mut(twin as isize) {
                    *vertex = p;
                }
            }
        }

        true
    }

    /// Clears the pointer flags.
    pub fn pointer_up(&mut self, _p: Point) -> bool {
        self.pointer_down = false;
        self.dragging = false;
        true
    }

    /// Strokes every edge, then the widgets when selected.
    pub fn render(&self, target: &mut dyn RenderTarget) {
        if self.vertices.is_empty() {
            return;
        }

        target.set_stroke(self.style.stroke_color, self.style.line_width);
        for (from, to) in self.edges() {
            target.stroke_line(*from, *to);
        }

        if self.selected {
            self.render_widgets(target);
        }
    }

    /// Draws vertex markers, the preview segment, and the selected-vertex highlight.
    pub fn render_widgets(&self, target: &mut dyn RenderTarget) {
        if !self.selected {
            return;
        }

        let radius = self.style.marker_radius;

        target.set_fill(self.style.marker_color);
        for vertex in &self.vertices {
            target.fill_marker(*vertex, radius);
        }

        if let (Some(preview), Some(last)) = (self.preview, self.vertices.iter().last()) {
            target.set_stroke(self.style.stroke_color, self.style.line_width);
            target.stroke_line(*last, preview);
            target.fill_marker(preview, radius);
        }

        if let Some(index) = self.selection {
            if let Ok(vertex) = self.vertices.get(index as isize) {
                target.set_fill(self.style.selection_color);
                target.fill_marker(*vertex, radius);
            }
        }
    }

    /// Consecutive vertex pairs, front to back.
    fn edges(&self) -> impl Iterator<Item = (&Point, &Point)> {
        self.vertices.iter().zip(self.vertices.iter().skip(1))
    }

    fn finalize(&mut self) {
        if let Outline::Closed { .. } = self.outline {
            if let Some(first) = self.vertices.iter().next().copied() {
                self.vertices.append(first);
            }
        }
        self.mode = EditMode::Modify;
        self.preview = None;
        debug!(
            "Shape finalized with {} vertices: {}",
            self.vertices.len(),
            self.vertices
        );
    }
}
