//! Render target abstraction and its Cairo implementation.

use super::color::Color;
use super::point::Point;

/// Write-only drawing surface consumed by the shape tools.
///
/// Stroke and fill state are independent: a tool sets each once and then issues
/// primitives that use the most recent value. Implementations never report failures
/// back to the tool; the host decides how to surface rendering problems.
pub trait RenderTarget {
    /// Sets the color and width used by subsequent [`stroke_line`](Self::stroke_line) calls.
    fn set_stroke(&mut self, color: Color, width: f64);

    /// Sets the color used by subsequent [`fill_oval`](Self::fill_oval) calls.
    fn set_fill(&mut self, color: Color);

    /// Strokes a straight segment.
    fn stroke_line(&mut self, from: Point, to: Point);

    /// Fills the oval inscribed in the given bounding box.
    fn fill_oval(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Fills a circular marker of `radius` centered on `center`.
    fn fill_marker(&mut self, center: Point, radius: f64) {
        self.fill_oval(
            center.x - radius,
            center.y - radius,
            radius * 2.0,
            radius * 2.0,
        );
    }
}

/// [`RenderTarget`] that draws onto a Cairo context.
///
/// Cairo has a single source pattern, so the adapter remembers stroke and fill state
/// and applies the right one before each primitive.
pub struct CairoTarget<'a> {
    ctx: &'a cairo::Context,
    stroke: Color,
    line_width: f64,
    fill: Color,
}

impl<'a> CairoTarget<'a> {
    pub fn new(ctx: &'a cairo::Context) -> Self {
        Self {
            ctx,
            stroke: super::color::BLACK,
            line_width: 1.0,
            fill: super::color::BLACK,
        }
    }
}

impl RenderTarget for CairoTarget<'_> {
    fn set_stroke(&mut self, color: Color, width: f64) {
        self.stroke = color;
        self.line_width = width;
    }

    fn set_fill(&mut self, color: Color) {
        self.fill = color;
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        let color = self.stroke;
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        self.ctx.set_line_width(self.line_width);
        self.ctx.set_line_cap(cairo::LineCap::Round);

        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        let _ = self.ctx.stroke();
    }

    fn fill_oval(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        let color = self.fill;
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);

        self.ctx.save().ok();
        self.ctx.translate(x + width / 2.0, y + height / 2.0);
        self.ctx.scale(width / 2.0, height / 2.0);
        self.ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
        self.ctx.restore().ok();

        let _ = self.ctx.fill();
    }
}

/// Fills the whole context with a solid background color.
///
/// Should be called before any tool renders onto the context.
pub fn paint_background(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.paint(); // Ignore errors - an unpainted surface stays transparent
}
