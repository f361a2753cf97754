use minecanvas_core::{Color, Point, Rect, Surface};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const LABEL_FONT: &str = "20px Arial";

/// [`Surface`] backed by the 2D context of a `<canvas>`.
#[derive(Debug)]
pub(crate) struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` when the canvas refuses to hand out a 2D context.
    pub(crate) fn from_canvas(canvas: HtmlCanvasElement) -> Option<Self> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, context })
    }

    fn trace_path(&self, points: &[Point]) {
        self.context.begin_path();
        let mut points = points.iter();
        if let Some(first) = points.next() {
            self.context.move_to(first.x, first.y);
        }
        for point in points {
            self.context.line_to(point.x, point.y);
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.context.set_stroke_style_str(color.css());
        self.context
            .stroke_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.context.set_fill_style_str(color.css());
        self.context
            .fill_rect(rect.x, rect.y, rect.width, rect.height);
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color) {
        self.context.set_stroke_style_str(color.css());
        self.trace_path(points);
        self.context.stroke();
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.context.set_fill_style_str(color.css());
        self.trace_path(points);
        self.context.close_path();
        self.context.fill();
    }

    fn fill_text(&mut self, text: &str, center: Point, color: Color) {
        self.context.set_fill_style_str(color.css());
        self.context.set_font(LABEL_FONT);
        self.context.set_text_align("center");
        self.context.set_text_baseline("middle");
        if let Err(err) = self.context.fill_text(text, center.x, center.y) {
            log::error!("failed to draw label {:?}: {:?}", text, err);
        }
    }
}
