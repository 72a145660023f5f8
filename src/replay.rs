//! Headless host that replays pointer scripts against a shape tool.
//!
//! A script holds one pointer event per line:
//!
//! ```text
//! # build a triangle, then drag its second corner
//! down 100 100
//! move 180 120
//! down 200 100
//! down 150 40
//! down 200 100
//! drag 260 140
//! up 260 140
//! ```
//!
//! Blank lines and anything after `#` are ignored.

use crate::draw::{Point, RenderTarget};
use crate::input::{EditMode, PointerEvent, ShapeTool};
use log::debug;
use thiserror::Error;

/// Errors raised while parsing a replay script.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown event '{keyword}' (expected down, move, drag, or up)")]
    UnknownEvent { line: usize, keyword: String },

    #[error("line {line}: expected '<event> <x> <y>'")]
    MissingCoordinates { line: usize },

    #[error("line {line}: invalid coordinate '{value}'")]
    InvalidCoordinate { line: usize, value: String },

    #[error("line {line}: unexpected trailing input '{rest}'")]
    TrailingInput { line: usize, rest: String },
}

/// Parses a replay script into pointer events.
///
/// # Errors
/// Returns the first [`ScriptError`] encountered, tagged with its 1-based line number.
pub fn parse_script(text: &str) -> Result<Vec<PointerEvent>, ScriptError> {
    let mut events = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }

        let mut parts = content.split_whitespace();
        let keyword = parts.next().unwrap_or_default();
        let (Some(x), Some(y)) = (parts.next(), parts.next()) else {
            return Err(ScriptError::MissingCoordinates { line });
        };
        let rest: Vec<&str> = parts.collect();
        if !rest.is_empty() {
            return Err(ScriptError::TrailingInput {
                line,
                rest: rest.join(" "),
            });
        }

        let point = Point::new(parse_coordinate(x, line)?, parse_coordinate(y, line)?);
        let event = PointerEvent::from_keyword(keyword, point).ok_or_else(|| {
            ScriptError::UnknownEvent {
                line,
                keyword: keyword.to_lowercase(),
            }
        })?;
        events.push(event);
    }

    Ok(events)
}

fn parse_coordinate(value: &str, line: usize) -> Result<f64, ScriptError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ScriptError::InvalidCoordinate {
            line,
            value: value.to_string(),
        })
}

/// Drawing surface host for a single active tool.
///
/// Selection rules for routing input:
/// - a freshly activated tool is selected and receives every event
/// - a pointer-down the tool reports as not consumed (the press finished the shape)
///   deselects it
/// - while deselected, a pointer-down that touches an edge or vertex selects the shape
///   again and is then forwarded; other events are dropped
/// - in modify mode, a pointer-down that touches nothing deselects the shape
pub struct Workbench {
    tool: Box<dyn ShapeTool>,
}

impl Workbench {
    /// Activates `tool`, selecting it for drawing.
    pub fn new(mut tool: Box<dyn ShapeTool>) -> Self {
        tool.select(true);
        Self { tool }
    }

    pub fn tool(&self) -> &dyn ShapeTool {
        self.tool.as_ref()
    }

    /// Routes one event. Returns whether the tool consumed it.
    pub fn dispatch(&mut self, event: PointerEvent) -> bool {
        let PointerEvent::Down(p) = event else {
            if !self.tool.is_selected() {
                debug!(
                    "Dropping {} at {}: shape not selected",
                    event.keyword(),
                    event.point()
                );
                return false;
            }
            return self.tool.handle(event);
        };

        let touches = self.tool.hit_test(p) || self.tool.vertex_at(p).is_some();

        if !self.tool.is_selected() {
            if !touches {
                return false;
            }
            debug!("Pointer-down at {} selects the '{}' shape", p, self.tool.name());
            self.tool.select(true);
        } else if self.tool.mode() == EditMode::Modify && !touches {
            debug!("Pointer-down at {} missed the shape; deselecting", p);
            self.tool.select(false);
            return false;
        }

        let consumed = self.tool.on_pointer_down(p);
        if !consumed {
            self.tool.select(false);
        }
        consumed
    }

    /// Dispatches every event in order.
    pub fn run<I: IntoIterator<Item = PointerEvent>>(&mut self, events: I) {
        for event in events {
            self.dispatch(event);
        }
    }

    pub fn render(&self, target: &mut dyn RenderTarget) {
        self.tool.render(target);
    }
}
