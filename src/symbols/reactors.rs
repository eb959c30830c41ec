//! Reactors, heat exchangers and fired/forced duty symbols.

use super::SymbolSize;
use crate::canvas::{Shape, TextAnchor};
use crate::geom::Point2;

fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

fn line(a: Point2, b: Point2, width: f64) -> Shape {
    Shape::Line { a, b, width, dashed: false }
}

fn open_rect(x: f64, y: f64, w: f64, h: f64, width: f64) -> Shape {
    Shape::Polygon {
        points: vec![p(x, y), p(x + w, y), p(x + w, y + h), p(x, y + h)],
        width,
        filled: false,
    }
}

fn size(length: f64, height: f64) -> SymbolSize {
    SymbolSize { length, height }
}

/// Plug-flow reactor: long tube with diagonal packing marks along it.
pub fn pfr(u: f64, pen: f64) -> (Vec<Shape>, SymbolSize) {
    let w = 5.0 * u;
    let h = 1.2 * u;
    let mut shapes = vec![open_rect(-w / 2.0, -h / 2.0, w, h, pen)];
    let mut x = -w / 2.0 + 0.6 * u;
    while x < w / 2.0 - 0.2 * u {
        shapes.push(line(p(x, h / 2.0), p(x + 0.5 * u, -h / 2.0), pen));
        x += 0.8 * u;
    }
    (shapes, size(w, h))
}

/// Continuous stirred-tank reactor: vessel with an agitator shaft, two
/// blades and the motor bubble on top.
pub fn cstr(u: f64, pen: f64) -> (Vec<Shape>, SymbolSize) {
    let w = 3.0 * u;
    let h = 3.6 * u;
    let shaft_top = -h / 2.0 - 0.6 * u;
    let shapes = vec![
        open_rect(-w / 2.0, -h / 2.0, w, h, pen),
        line(p(0.0, shaft_top), p(0.0, 0.8 * u), pen),
        line(p(-0.7 * u, 1.1 * u), p(0.0, 0.8 * u), pen),
        line(p(0.7 * u, 1.1 * u), p(0.0, 0.8 * u), pen),
        Shape::Circle {
            center: p(0.0, shaft_top - 0.4 * u),
            radius: 0.4 * u,
            width: pen,
            filled: false,
        },
        Shape::Text {
            at: p(0.0, shaft_top - 0.25 * u),
            content: "M".to_string(),
            size: 0.5 * u,
            anchor: TextAnchor::Middle,
        },
    ];
    (shapes, size(w, h + 1.4 * u))
}

/// Generic reactor vessel.
pub fn reactor(u: f64, pen: f64) -> (Vec<Shape>, SymbolSize) {
    let w = 2.6 * u;
    let h = 3.4 * u;
    let shapes = vec![
        open_rect(-w / 2.0, -h / 2.0, w, h, pen),
        line(p(-w / 2.0, -h / 2.0 + 0.6 * u), p(w / 2.0, -h / 2.0 + 0.6 * u), pen),
    ];
    (shapes, size(w, h))
}

/// Shell-and-tube exchanger, straight tubes: shell with the tube bundle
/// drawn through it and shell nozzles top and bottom.
pub fn straight_tube_exchanger(u: f64, pen: f64) -> (Vec<Shape>, SymbolSize) {
    let w = 4.0 * u;
    let h = 1.6 * u;
    let shapes = vec![
        open_rect(-w / 2.0, -h / 2.0, w, h, pen),
        line(p(-w / 2.0 - 0.5 * u, 0.0), p(w / 2.0 + 0.5 * u, 0.0), pen),
        line(p(-w / 2.0 + 0.5 * u, -h / 2.0), p(-w / 2.0 + 0.5 * u, h / 2.0), pen),
        line(p(w / 2.0 - 0.5 * u, -h / 2.0), p(w / 2.0 - 0.5 * u, h / 2.0), pen),
        line(p(-1.0 * u, -h / 2.0), p(-1.0 * u, -h / 2.0 - 0.4 * u), pen),
        line(p(1.0 * u, h / 2.0), p(1.0 * u, h / 2.0 + 0.4 * u), pen),
    ];
    (shapes, size(w + 1.0 * u, h + 0.8 * u))
}

/// Shell-and-tube exchanger, U-tube: bundle enters and returns on the
/// same end.
pub fn u_tube_exchanger(u: f64, pen: f64) -> (Vec<Shape>, SymbolSize) {
    let w = 4.0 * u;
    let h = 1.6 * u;
    let turn = w / 2.0 - 0.6 * u;
    let shapes = vec![
        open_rect(-w / 2.0, -h / 2.0, w, h, pen),
        Shape::Polyline {
            points: vec![
                p(-w / 2.0 - 0.5 * u, -0.35 * u),
                p(turn, -0.35 * u),
                p(turn + 0.35 * u, 0.0),
                p(turn, 0.35 * u),
                p(-w / 2.0 - 0.5 * u, 0.35 * u),
            ],
            width: pen,
        },
        line(p(-w / 2.0 + 0.5 * u, -h / 2.0), p(-w / 2.0 + 0.5 * u, h / 2.0), pen),
    ];
    (shapes, size(w + 0.5 * u, h))
}

/// Fired heater: utility circle with a heating coil zigzag.
pub fn heater(u: f64, pen: f64) -> (Vec<Shape>, SymbolSize) {
    let r = 1.2 * u;
    let shapes = vec![
        Shape::Circle { center: p(0.0, 0.0), radius: r, width: pen, filled: false },
        Shape::Polyline {
            points: vec![
                p(-r, 0.0),
                p(-0.5 * r, -0.5 * r),
                p(0.0, 0.5 * r),
                p(0.5 * r, -0.5 * r),
                p(r, 0.0),
            ],
            width: pen,
        },
    ];
    (shapes, size(2.0 * r, 2.0 * r))
}

/// Cooler: utility circle crossed by the coolant pass.
pub fn cooler(u: f64, pen: f64) -> (Vec<Shape>, SymbolSize) {
    let r = 1.2 * u;
    let k = r * std::f64::consts::FRAC_1_SQRT_2;
    let shapes = vec![
        Shape::Circle { center: p(0.0, 0.0), radius: r, width: pen, filled: false },
        line(p(-k, -k), p(k, k), pen),
        line(p(-k, k), p(k, -k), pen),
    ];
    (shapes, size(2.0 * r, 2.0 * r))
}
