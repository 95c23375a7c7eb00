use kochwonder_core::Point;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Colours and stroke for a closed outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolylineStyle {
    pub background: &'static str,
    pub stroke: &'static str,
    pub line_width: f64,
}

/// White 2px outline on grey.
pub const SNOWFLAKE_STYLE: PolylineStyle = PolylineStyle {
    background: "grey",
    stroke: "white",
    line_width: 2.0,
};

/// Get the current time in milliseconds (for elapsed time tracking).
pub fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Get 2D rendering context from canvas.
pub fn get_2d_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("No 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

/// Clear the canvas and stroke `points` as a closed polygon.
///
/// The last point is joined back to the first by `close_path`; the sequence
/// itself never repeats its first point.
pub fn draw_closed_polyline(
    ctx: &CanvasRenderingContext2d,
    points: &[Point<f64>],
    size: (u32, u32),
    style: &PolylineStyle,
) {
    ctx.set_fill_style_str(style.background);
    ctx.fill_rect(0.0, 0.0, size.0 as f64, size.1 as f64);

    let Some((first, rest)) = points.split_first() else {
        return;
    };

    ctx.begin_path();
    ctx.move_to(*first.x(), *first.y());
    for p in rest {
        ctx.line_to(*p.x(), *p.y());
    }
    ctx.close_path();

    ctx.set_stroke_style_str(style.stroke);
    ctx.set_line_width(style.line_width);
    ctx.set_line_join("round");
    ctx.stroke();
}
