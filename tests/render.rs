use cairo::{Context, ImageSurface};
use polydraw::draw::{CairoTarget, Point, WHITE, paint_background};
use polydraw::input::{PolylineTool, ShapeTool, ToolStyle, TriangleTool};

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

/// Returns (r, g, b, a) for the pixel at (x, y) of an ARGB32 surface.
fn pixel(surface: &mut ImageSurface, x: usize, y: usize) -> (u8, u8, u8, u8) {
    let stride = surface.stride() as usize;
    let data = surface.data().expect("surface data is accessible");
    let offset = y * stride + x * 4;
    // ARGB32 pixels are native-endian u32 words: alpha in the high byte, blue in the low.
    let word = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    (
        (word >> 16) as u8,
        (word >> 8) as u8,
        word as u8,
        (word >> 24) as u8,
    )
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

fn finished_triangle() -> TriangleTool {
    let mut tool = TriangleTool::new(&ToolStyle::default());
    tool.select(true);
    tool.on_pointer_down(Point::new(10.0, 10.0));
    tool.on_pointer_down(Point::new(60.0, 10.0));
    tool.on_pointer_down(Point::new(60.0, 60.0));
    tool
}

fn render(tool: &dyn ShapeTool) -> ImageSurface {
    let (surface, ctx) = surface_with_context(80, 80);
    {
        let mut target = CairoTarget::new(&ctx);
        tool.render(&mut target);
    }
    drop(ctx);
    surface
}

#[test]
fn empty_tool_leaves_surface_blank() {
    let tool = PolylineTool::new(&ToolStyle::default());
    let mut surface = render(&tool);
    assert!(!surface_has_pixels(&mut surface));
}

#[test]
fn triangle_edges_are_stroked() {
    let mut tool = finished_triangle();
    tool.select(false);
    let mut surface = render(&tool);

    let (r, g, b, a) = pixel(&mut surface, 35, 10);
    assert_eq!(a, 255, "top edge should be opaque");
    assert_eq!((r, g, b), (0, 0, 0), "edges are black by default");

    assert_eq!(pixel(&mut surface, 75, 75).3, 0, "far corner stays empty");
}

#[test]
fn unselected_shape_has_no_vertex_markers() {
    let mut tool = finished_triangle();
    tool.select(false);
    let mut surface = render(&tool);

    assert_eq!(pixel(&mut surface, 57, 63).3, 0);
}

#[test]
fn selected_vertex_marker_is_green() {
    let mut tool = finished_triangle();
    tool.on_pointer_down(Point::new(60.0, 60.0));
    assert_eq!(tool.selected_index(), Some(2));
    let mut surface = render(&tool);

    assert_ne!(pixel(&mut surface, 57, 63).3, 0, "marker covers the vertex");
    let (r, g, b, a) = pixel(&mut surface, 60, 60);
    assert_eq!(a, 255);
    assert_eq!((r, g, b), (0, 255, 0));
}

#[test]
fn background_fills_canvas() {
    let (mut surface, ctx) = surface_with_context(20, 20);
    paint_background(&ctx, WHITE);
    drop(ctx);

    assert_eq!(pixel(&mut surface, 0, 0), (255, 255, 255, 255));
    assert_eq!(pixel(&mut surface, 19, 19), (255, 255, 255, 255));
}
