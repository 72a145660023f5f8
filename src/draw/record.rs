//! In-memory render target that records draw calls.

use super::color::Color;
use super::point::Point;
use super::render::RenderTarget;

/// A single primitive captured by [`Recorder`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    SetStroke { color: Color, width: f64 },
    SetFill { color: Color },
    StrokeLine { from: Point, to: Point },
    FillOval { x: f64, y: f64, width: f64, height: f64 },
}

/// [`RenderTarget`] that stores every call in order.
///
/// Useful for hosts that replay drawings elsewhere and for asserting on tool output
/// without a pixel surface.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All stroked segments, in draw order.
    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::StrokeLine { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// Centers of all filled ovals, paired with the fill color active when each was drawn.
    pub fn markers(&self) -> Vec<(Point, Color)> {
        let mut fill = None;
        let mut markers = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::SetFill { color } => fill = Some(*color),
                DrawCommand::FillOval {
                    x,
                    y,
                    width,
                    height,
                } => {
                    if let Some(color) = fill {
                        let center = Point::new(x + width / 2.0, y + height / 2.0);
                        markers.push((center, color));
                    }
                }
                _ => {}
            }
        }
        markers
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl RenderTarget for Recorder {
    fn set_stroke(&mut self, color: Color, width: f64) {
        self.commands.push(DrawCommand::SetStroke { color, width });
    }

    fn set_fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetFill { color });
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        self.commands.push(DrawCommand::StrokeLine { from, to });
    }

    fn fill_oval(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::FillOval {
            x,
            y,
            width,
            height,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, GREEN};

    #[test]
    fn fill_marker_records_bounding_box_around_center() {
        let mut recorder = Recorder::new();
        recorder.set_fill(BLACK);
        recorder.fill_marker(Point::new(10.0, 20.0), 5.0);

        assert_eq!(
            recorder.commands[1],
            DrawCommand::FillOval {
                x: 5.0,
                y: 15.0,
                width: 10.0,
                height: 10.0,
            }
        );
        assert_eq!(recorder.markers(), vec![(Point::new(10.0, 20.0), BLACK)]);
    }

    #[test]
    fn markers_track_latest_fill_color() {
        let mut recorder = Recorder::new();
        recorder.set_fill(BLACK);
        recorder.fill_marker(Point::new(0.0, 0.0), 2.0);
        recorder.set_fill(GREEN);
        recorder.fill_marker(Point::new(4.0, 4.0), 2.0);

        let markers = recorder.markers();
        assert_eq!(markers[0].1, BLACK);
        assert_eq!(markers[1].1, GREEN);
    }
}
