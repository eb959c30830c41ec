//! Static equipment symbols: vessels, columns, rotating machinery and
//! the small flowsheet glue (sources, sinks, mixers, reducers).
//!
//! Every drawer builds its shapes in a local frame centered on the
//! element anchor, with screen Y growing downward, and reports the
//! bounding box it actually used. Dimensions are `nominal / scale`, so
//! the same symbol shrinks linearly as the drafting scale coarsens.

use super::SymbolSize;
use crate::canvas::Shape;
use crate::geom::Point2;

fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

fn line(a: Point2, b: Point2, width: f64) -> Shape {
    Shape::Line { a, b, width, dashed: false }
}

fn polyline(points: Vec<Point2>, width: f64) -> Shape {
    Shape::Polyline { points, width }
}

fn polygon(points: Vec<Point2>, width: f64, filled: bool) -> Shape {
    Shape::Polygon { points, width, filled }
}

fn open_rect(x: f64, y: f64, w: f64, h: f64, width: f64) -> Shape {
    polygon(
        vec![p(x, y), p(x + w, y), p(x + w, y + h), p(x, y + h)],
        width,
        false,
    )
}

fn size(length: f64, height: f64) -> SymbolSize {
    SymbolSize { length, height }
}

/// Vertical storage tank: open-topped rectangle with a shallow domed
/// roof drawn as an arc.
pub fn tank(u: f64, pen: f64) -> (Vec<Shape>, SymbolSize) {
    let w = 3.0 * u;
    let h = 4.0 * u;
    let shapes = vec![
        polyline(
            vec![
                p(-w / 2.0, -h / 2.0),
                p(-w / 2.0, h / 2.0),
                p(w / 2.0, h / 2.0),
                p(w / 2.0, -h / 2.0),
            ],
            pen,
        ),
        Shape::Arc {
            center: p(0.0, -h / 2.0 + 0.4 * u),
            radius: w / 2.0 + 0.1 * u,
            start_deg: 195.0,
            sweep_deg: 150.0,
            width: pen,
        },
    ];
    (shapes, size(w, h + 0.6 * u))
}

/// Horizontal drum: shell rectangle with semicircular heads.
pub fn drum(u: f64, pen: f64) -> (Vec<Shape>, SymbolSize) {
    let w = 4.0 * u;
    let h = 2.0 * u;
    let r = h / 2.0;
    let shapes = vec![
        line(p(-w / 2.0, -r), p(w / 2.0, -r), pen),
        line(p(-w / 2.0, r), p(w / 2.0, r), pen),
        Shape::Arc { center: p(-w / 2.0, 0.0), radius: r, start_deg: 90.0, sweep_deg: 180.0, width: pen },
        Shape::Arc { center: p(w / 2.0, 0.0), radius: r, start_deg: 270.0, sweep_deg: 180.0, width: pen },
    ];
    (shapes, size(w + h, h))
}

/// Centrifugal pump: casing circle over a flat baseplate, with the
/// discharge tangent drawn to the upper right.
pub fn pump(u: f64, pen: f64) -> (Vec<Shape>, SymbolSize) {
    let r = 1.0 * u;
    let shapes = vec![
        Shape::Circle { center: p(0.0, 0.0), radius: r, width: pen, filled: false },
        line(p(0.0, -r), p(1.4 * u, -r), pen),
        line(p(1.4 * u, -r), p(1.4 * u, -0.6 * u), pen),
        line(p(-1.2 * u, r + 0.4 * u), p(1.2 * u, r + 0.4 * u), pen),
        line(p(-0.7 * u, r), p(-0.9 * u, r + 0.4 * u), pen),
        line(p(0.7 * u, r), p(0.9 * u, r + 0.4 * u), pen),
    ];
    (shapes, size(2.8 * u, 2.0 * r + 0.4 * u))
}

/// Knock-out separator: slim vertical vessel with a dashed demister mat
/// under the gas outlet.
pub fn separator(u: f64, pen: f64) -> (Vec<Shape>, SymbolSize) {
    let w = 2.0 * u;
    let h = 3.6 * u;
    let mut shapes = vec![open_rect(-w / 2.0, -h / 2.0, w, h, pen)];
    let mat_y = -h / 2.0 + 0.8 * u;
    shapes.push(Shape::Line {
        a: p(-w / 2.0, mat_y),
        b: p(w / 2.0, mat_y),
        width: pen,
        dashed: true,
    });
    shapes.push(Shape::Line {
        a: p(-w / 2.0, mat_y + 0.3 * u),
        b: p(w / 2.0, mat_y + 0.3 * u),
        width: pen,
        dashed: true,
    });
    (shapes, size(w, h))
}

/// Stream mixer: triangle collapsing two inlets into one outlet.
pub fn mixer(u: f64, pen: f64) -> (Vec<Shape>, SymbolSize) {
    let w = 1.6 * u;
    let h = 1.6 * u;
    let shapes = vec![polygon(
        vec![p(-w / 2.0, -h / 2.0), p(-w / 2.0, h / 2.0), p(w / 2.0, 0.0)],
        pen,
        false,
    )];
    (shapes, size(w, h))
}

/// Stream splitter: the mixer mirrored, one inlet fanning out.
pub fn splitter(u: f64, pen: f64) -> (Vec<Shape>, SymbolSize) {
    let w = 1.6 * u;
    let h = 1.6 * u;
    let shapes = vec![polygon(
        vec![p(w / 2.0, -h / 2.0), p(w / 2.0, h / 2.0), p(-w / 2.0, 0.0)],
        pen,
        false,
    )];
    (shapes, size(w, h))
}

/// Feed source: flag pointing into the flowsheet.
pub fn source(u: f64, pen: f64) -> (Vec<Shape>, SymbolSize) {
    let w = 2.0 * u;
    let h = 1.2 * u;
    let shapes = vec![polygon(
        vec![
            p(-w / 2.0, -h / 2.0),
            p(w / 4.0, -h / 2.0),
            p(w / 2.0, 0.0),
            p(w / 4.0, h / 2.0),
            p(-w / 2.0, h / 2.0),
        ],
        pen,
        false,
    )];
    (shapes, size(w, h))
}

/// Product sink: the source flag reversed.
pub fn sink(u: f64, pen: f64) -> (Vec<Shape>, SymbolSize) {
    let w = 2.0 * u;
    let h = 1.2 * u;
    let shapes = vec![polygon(
        vec![
            p(w / 2.0, -h / 2.0),
            p(-w / 4.0, -h / 2.0),
            p(-w / 2.0, 0.0),
            p(-w / 4.0, h / 2.0),
            p(w / 2.0, h / 2.0),
        ],
        pen,
        false,
    )];
    (shapes, size(w, h))
}

fn tray_stack(w: f64, h: f64, u: f64, pen: f64) -> Vec<Shape> {
    let mut shapes = vec![open_rect(-w / 2.0, -h / 2.0, w, h, pen)];
    let mut y = -h / 2.0 + 0.8 * u;
    let mut left = true;
    while y < h / 2.0 - 0.4 * u {
        // Alternating sieve trays with a downcomer gap.
        let (x0, x1) = if left {
            (-w / 2.0, w / 2.0 - 0.5 * u)
        } else {
            (-w / 2.0 + 0.5 * u, w / 2.0)
        };
        shapes.push(line(p(x0, y), p(x1, y), pen));
        left = !left;
        y += 0.6 * u;
    }
    shapes
}

/// Distillation column: tall vessel with alternating trays.
pub fn column(u: f64, pen: f64) -> (Vec<Shape>, SymbolSize) {
    let w = 2.0 * u;
    let h = 6.0 * u;
    (tray_stack(w, h, u, pen), size(w, h))
}

/// Absorption column: packed bed marked by diagonal cross-hatching in
/// the mid-section instead of trays.
pub fn absorption_column(u: f64, pen: f64) -> (Vec<Shape>, SymbolSize) {
    let w = 2.0 * u;
    let h = 6.0 * u;
    let bed_top = -1.5 * u;
    let bed_bottom = 1.5 * u;
    let shapes = vec![
        open_rect(-w / 2.0, -h / 2.0, w, h, pen),
        line(p(-w / 2.0, bed_top), p(w / 2.0, bed_top), pen),
        line(p(-w / 2.0, bed_bottom), p(w / 2.0, bed_bottom), pen),
        line(p(-w / 2.0, bed_top), p(w / 2.0, bed_bottom), pen),
        line(p(w / 2.0, bed_top), p(-w / 2.0, bed_bottom), pen),
    ];
    (shapes, size(w, h))
}

/// Liquid-liquid extractor: column body with short mixing stage stubs
/// from both walls.
pub fn extractor(u: f64, pen: f64) -> (Vec<Shape>, SymbolSize) {
    let w = 2.0 * u;
    let h = 5.0 * u;
    let mut shapes = vec![open_rect(-w / 2.0, -h / 2.0, w, h, pen)];
    let mut y = -h / 2.0 + 0.7 * u;
    let mut left = true;
    while y < h / 2.0 - 0.4 * u {
        if left {
            shapes.push(line(p(-w / 2.0, y), p(-w / 6.0, y), pen));
        } else {
            shapes.push(line(p(w / 6.0, y), p(w / 2.0, y), pen));
        }
        left = !left;
        y += 0.7 * u;
    }
    (shapes, size(w, h))
}

/// Expander: trapezoid widening in the flow direction.
pub fn expander(u: f64, pen: f64) -> (Vec<Shape>, SymbolSize) {
    let w = 2.4 * u;
    let h = 2.4 * u;
    let shapes = vec![polygon(
        vec![
            p(-w / 2.0, -0.5 * u),
            p(w / 2.0, -h / 2.0),
            p(w / 2.0, h / 2.0),
            p(-w / 2.0, 0.5 * u),
        ],
        pen,
        false,
    )];
    (shapes, size(w, h))
}

/// Compressor: trapezoid narrowing in the flow direction.
pub fn compressor(u: f64, pen: f64) -> (Vec<Shape>, SymbolSize) {
    let w = 2.4 * u;
    let h = 2.4 * u;
    let shapes = vec![polygon(
        vec![
            p(-w / 2.0, -h / 2.0),
            p(w / 2.0, -0.5 * u),
            p(w / 2.0, 0.5 * u),
            p(-w / 2.0, h / 2.0),
        ],
        pen,
        false,
    )];
    (shapes, size(w, h))
}

/// Pressure safety valve: angle body with a spring bonnet, inlet from
/// below, discharge to the side.
pub fn relief_valve(u: f64, pen: f64) -> (Vec<Shape>, SymbolSize) {
    let s = 0.6 * u;
    let mut shapes = vec![
        // Vertical inlet wedge.
        polygon(vec![p(-s / 2.0, s), p(s / 2.0, s), p(0.0, 0.0)], pen, false),
        // Horizontal outlet wedge.
        polygon(vec![p(s, -s / 2.0), p(s, s / 2.0), p(0.0, 0.0)], pen, false),
    ];
    // Spring above the seat.
    let mut x = -0.3 * u;
    let mut y = -0.2 * u;
    let mut points = vec![p(0.0, 0.0)];
    for _ in 0..4 {
        points.push(p(x, y));
        x = -x;
        y -= 0.25 * u;
    }
    shapes.push(polyline(points, pen));
    (shapes, size(1.6 * u, 2.2 * u))
}

/// Enlarger (concentric reducer run backwards): lying trapezoid.
pub fn enlarger(u: f64, pen: f64) -> (Vec<Shape>, SymbolSize) {
    let w = 1.6 * u;
    let shapes = vec![polygon(
        vec![
            p(-w / 2.0, -0.3 * u),
            p(w / 2.0, -0.7 * u),
            p(w / 2.0, 0.7 * u),
            p(-w / 2.0, 0.3 * u),
        ],
        pen,
        false,
    )];
    (shapes, size(w, 1.4 * u))
}
