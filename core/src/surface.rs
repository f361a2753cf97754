use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Board palette, one entry per thing drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Grid,
    BevelLight,
    BevelShadow,
    Mine,
    Open,
    Label,
    FlagPole,
    Flag,
}

impl Color {
    pub const fn css(self) -> &'static str {
        use Color::*;
        match self {
            Grid => "black",
            BevelLight => "white",
            BevelShadow => "black",
            Mine => "red",
            Open => "lightgrey",
            Label => "black",
            FlagPole => "black",
            Flag => "red",
        }
    }
}

/// 2D raster target the board paints itself onto.
pub trait Surface {
    /// Wipes the whole drawable area.
    fn clear(&mut self);

    fn stroke_rect(&mut self, rect: Rect, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Strokes an open path through `points`.
    fn stroke_polyline(&mut self, points: &[Point], color: Color);

    /// Fills the closed polygon through `points`.
    fn fill_polygon(&mut self, points: &[Point], color: Color);

    /// Draws `text` centered on `center`.
    fn fill_text(&mut self, text: &str, center: Point, color: Color);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn clear(&mut self) {
        (**self).clear()
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        (**self).stroke_rect(rect, color)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        (**self).fill_rect(rect, color)
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color) {
        (**self).stroke_polyline(points, color)
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        (**self).fill_polygon(points, color)
    }

    fn fill_text(&mut self, text: &str, center: Point, color: Color) {
        (**self).fill_text(text, center, color)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    StrokeRect(Rect, Color),
    FillRect(Rect, Color),
    StrokePolyline(Vec<Point>, Color),
    FillPolygon(Vec<Point>, Color),
    FillText(String, Point, Color),
}

/// Headless surface that keeps every operation since the last [`Surface::clear`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    frames: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Operations of the current frame, starting with its `Clear`.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of full repaints seen so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillText(text, at, _) => Some((text.as_str(), *at)),
            _ => None,
        })
    }

    pub fn count(&self, predicate: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| predicate(op)).count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
        self.frames += 1;
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::StrokeRect(rect, color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect(rect, color));
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color) {
        self.ops.push(DrawOp::StrokePolyline(points.to_vec(), color));
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.ops.push(DrawOp::FillPolygon(points.to_vec(), color));
    }

    fn fill_text(&mut self, text: &str, center: Point, color: Color) {
        self.ops.push(DrawOp::FillText(text.to_string(), center, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_starts_a_new_frame() {
        let mut surface = RecordingSurface::new();
        surface.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::Open);
        surface.clear();
        surface.fill_text("3", Point::new(2.0, 2.0), Color::Label);

        assert_eq!(surface.frames(), 1);
        assert_eq!(surface.ops().len(), 2);
        assert_eq!(surface.texts().collect::<Vec<_>>(), [("3", Point::new(2.0, 2.0))]);
    }

    #[test]
    fn rect_center_is_midpoint() {
        assert_eq!(Rect::new(40.0, 80.0, 40.0, 40.0).center(), Point::new(60.0, 100.0));
    }
}
