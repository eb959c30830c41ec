use crate::geom::Point2;

/// One vector primitive. Shapes are plain values; the canvas records them
/// in append order and the SVG writer serializes them in that same order,
/// which is the drawing's z-order.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line {
        a: Point2,
        b: Point2,
        width: f64,
        dashed: bool,
    },
    Polyline {
        points: Vec<Point2>,
        width: f64,
    },
    Polygon {
        points: Vec<Point2>,
        width: f64,
        filled: bool,
    },
    Circle {
        center: Point2,
        radius: f64,
        width: f64,
        filled: bool,
    },
    /// Circular arc, angles in degrees, counter-clockwise from `start`.
    Arc {
        center: Point2,
        radius: f64,
        start_deg: f64,
        sweep_deg: f64,
        width: f64,
    },
    Text {
        at: Point2,
        content: String,
        size: f64,
        anchor: TextAnchor,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl Shape {
    /// Applies a point transform. Circles, arcs and text keep their own
    /// size and only move their anchor: flat symbols are faked, not truly
    /// sheared, so round features stay round.
    pub fn map_points(self, f: &impl Fn(Point2) -> Point2) -> Shape {
        match self {
            Shape::Line { a, b, width, dashed } => Shape::Line { a: f(a), b: f(b), width, dashed },
            Shape::Polyline { points, width } => Shape::Polyline {
                points: points.into_iter().map(f).collect(),
                width,
            },
            Shape::Polygon { points, width, filled } => Shape::Polygon {
                points: points.into_iter().map(f).collect(),
                width,
                filled,
            },
            Shape::Circle { center, radius, width, filled } => Shape::Circle {
                center: f(center),
                radius,
                width,
                filled,
            },
            Shape::Arc { center, radius, start_deg, sweep_deg, width } => Shape::Arc {
                center: f(center),
                radius,
                start_deg,
                sweep_deg,
                width,
            },
            Shape::Text { at, content, size, anchor } => Shape::Text {
                at: f(at),
                content,
                size,
                anchor,
            },
        }
    }
}

/// The drawing sink: an explicit ordered command list. Every drawing
/// routine appends; nothing is ever reordered or removed, so rendering
/// the same view twice yields identical sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    pub shapes: Vec<Shape>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn extend(&mut self, shapes: Vec<Shape>) {
        self.shapes.extend(shapes);
    }

    pub fn line(&mut self, a: Point2, b: Point2, width: f64) {
        self.push(Shape::Line { a, b, width, dashed: false });
    }

    pub fn dashed_line(&mut self, a: Point2, b: Point2, width: f64) {
        self.push(Shape::Line { a, b, width, dashed: true });
    }

    pub fn polyline(&mut self, points: Vec<Point2>, width: f64) {
        self.push(Shape::Polyline { points, width });
    }

    pub fn polygon(&mut self, points: Vec<Point2>, width: f64, filled: bool) {
        self.push(Shape::Polygon { points, width, filled });
    }

    pub fn rect(&mut self, corner: Point2, w: f64, h: f64, width: f64) {
        self.polygon(
            vec![
                corner,
                Point2::new(corner.x + w, corner.y),
                Point2::new(corner.x + w, corner.y + h),
                Point2::new(corner.x, corner.y + h),
            ],
            width,
            false,
        );
    }

    pub fn circle(&mut self, center: Point2, radius: f64, width: f64, filled: bool) {
        self.push(Shape::Circle { center, radius, width, filled });
    }

    pub fn arc(&mut self, center: Point2, radius: f64, start_deg: f64, sweep_deg: f64, width: f64) {
        self.push(Shape::Arc { center, radius, start_deg, sweep_deg, width });
    }

    pub fn text(&mut self, at: Point2, content: impl Into<String>, size: f64, anchor: TextAnchor) {
        self.push(Shape::Text { at, content: content.into(), size, anchor });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_order_is_preserved() {
        let mut canvas = Canvas::new();
        canvas.line(Point2::ZERO, Point2::new(1.0, 0.0), 1.0);
        canvas.circle(Point2::ZERO, 5.0, 1.0, false);
        canvas.line(Point2::ZERO, Point2::new(0.0, 1.0), 1.0);
        assert!(matches!(canvas.shapes[0], Shape::Line { .. }));
        assert!(matches!(canvas.shapes[1], Shape::Circle { .. }));
        assert!(matches!(canvas.shapes[2], Shape::Line { .. }));
    }

    #[test]
    fn map_points_moves_circles_without_resizing() {
        let shape = Shape::Circle {
            center: Point2::new(1.0, 2.0),
            radius: 7.0,
            width: 1.0,
            filled: false,
        };
        let moved = shape.map_points(&|p| Point2::new(p.x + 10.0, p.y));
        match moved {
            Shape::Circle { center, radius, .. } => {
                assert_eq!(center, Point2::new(11.0, 2.0));
                assert_eq!(radius, 7.0);
            }
            _ => panic!("circle stayed a circle"),
        }
    }
}
