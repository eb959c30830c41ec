//! Valve bodies and actuator glyphs.
//!
//! All bodies are drawn flow-horizontal through the anchor; the caller
//! rotates the placed shapes when the run is vertical. The basic body is
//! the drafting bowtie: two wedges meeting at the seat. Subtypes add
//! their distinguishing mark at the center or on the bonnet.

use super::SymbolSize;
use crate::canvas::{Shape, TextAnchor};
use crate::geom::Point2;
use crate::model::{ActuatorKind, ValveKind};

fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

fn line(a: Point2, b: Point2, width: f64) -> Shape {
    Shape::Line { a, b, width, dashed: false }
}

fn wedge(tip: Point2, base_x: f64, half: f64, width: f64) -> Shape {
    Shape::Polygon {
        points: vec![p(base_x, tip.y - half), p(base_x, tip.y + half), tip],
        width,
        filled: false,
    }
}

/// The two-wedge body every in-line valve starts from. `l` is the half
/// length, `h` the half height.
fn bowtie(l: f64, h: f64, pen: f64) -> Vec<Shape> {
    vec![
        wedge(p(0.0, 0.0), -l, h, pen),
        wedge(p(0.0, 0.0), l, h, pen),
    ]
}

/// Nominal bounding box of a valve symbol; actuators roughly double the
/// height above the run.
pub fn valve_size(kind: ValveKind, with_actuator: bool, u: f64) -> SymbolSize {
    let mut height = match kind {
        ValveKind::Relief | ValveKind::PressureRegulator => 1.8 * u,
        ValveKind::FourWay | ValveKind::ThreeWay => 1.2 * u,
        _ => 0.8 * u,
    };
    if with_actuator {
        height += 1.0 * u;
    }
    SymbolSize { length: 1.2 * u, height }
}

pub fn valve_body(kind: ValveKind, u: f64, pen: f64) -> Vec<Shape> {
    let l = 0.6 * u;
    let h = 0.4 * u;
    match kind {
        ValveKind::Gate => bowtie(l, h, pen),
        ValveKind::Globe => {
            let mut shapes = bowtie(l, h, pen);
            shapes.push(Shape::Circle {
                center: p(0.0, 0.0),
                radius: 0.18 * u,
                width: pen,
                filled: true,
            });
            shapes
        }
        ValveKind::Ball => {
            let mut shapes = bowtie(l, h, pen);
            shapes.push(Shape::Circle {
                center: p(0.0, 0.0),
                radius: 0.22 * u,
                width: pen,
                filled: false,
            });
            shapes
        }
        ValveKind::Butterfly => vec![
            line(p(-l, -h), p(-l, h), pen),
            line(p(l, -h), p(l, h), pen),
            line(p(-l, h), p(l, -h), pen),
            Shape::Circle { center: p(0.0, 0.0), radius: 0.12 * u, width: pen, filled: true },
        ],
        ValveKind::Needle => {
            let mut shapes = bowtie(l, h, pen);
            shapes.push(Shape::Polygon {
                points: vec![p(-0.12 * u, -h - 0.3 * u), p(0.12 * u, -h - 0.3 * u), p(0.0, 0.0)],
                width: pen,
                filled: true,
            });
            shapes
        }
        ValveKind::Relief => {
            // Seat turned 90 degrees, spring on the bonnet.
            let mut shapes = vec![
                wedge(p(0.0, 0.0), -l, h, pen),
                Shape::Polygon {
                    points: vec![p(-h, -l * 1.2), p(h, -l * 1.2), p(0.0, 0.0)],
                    width: pen,
                    filled: false,
                },
            ];
            let mut zig = vec![p(0.0, -l * 1.2)];
            let mut x = -0.2 * u;
            let mut y = -l * 1.2 - 0.15 * u;
            for _ in 0..4 {
                zig.push(p(x, y));
                x = -x;
                y -= 0.15 * u;
            }
            shapes.push(Shape::Polyline { points: zig, width: pen });
            shapes
        }
        ValveKind::FourWay => vec![
            wedge(p(0.0, 0.0), -l, h, pen),
            wedge(p(0.0, 0.0), l, h, pen),
            Shape::Polygon {
                points: vec![p(-h, -l), p(h, -l), p(0.0, 0.0)],
                width: pen,
                filled: false,
            },
            Shape::Polygon {
                points: vec![p(-h, l), p(h, l), p(0.0, 0.0)],
                width: pen,
                filled: false,
            },
        ],
        ValveKind::ThreeWay => {
            let mut shapes = bowtie(l, h, pen);
            shapes.push(Shape::Polygon {
                points: vec![p(-h, l), p(h, l), p(0.0, 0.0)],
                width: pen,
                filled: false,
            });
            shapes
        }
        ValveKind::Check => {
            let mut shapes = bowtie(l, h, pen);
            // Flap with its hinge dot.
            shapes.push(line(p(-0.3 * u, h), p(0.3 * u, -h), pen));
            shapes.push(Shape::Circle {
                center: p(0.3 * u, -h),
                radius: 0.08 * u,
                width: pen,
                filled: true,
            });
            shapes
        }
        ValveKind::StopCheck => {
            let mut shapes = valve_body(ValveKind::Check, u, pen);
            shapes.push(line(p(0.0, 0.0), p(0.0, -h - 0.3 * u), pen));
            shapes.push(line(p(-0.2 * u, -h - 0.3 * u), p(0.2 * u, -h - 0.3 * u), pen));
            shapes
        }
        ValveKind::PressureRegulator => {
            let mut shapes = bowtie(l, h, pen);
            shapes.push(line(p(0.0, 0.0), p(0.0, -0.7 * u), pen));
            shapes.push(Shape::Arc {
                center: p(0.0, -0.7 * u),
                radius: 0.35 * u,
                start_deg: 0.0,
                sweep_deg: 180.0,
                width: pen,
            });
            shapes.push(line(p(-0.35 * u, -0.7 * u), p(0.35 * u, -0.7 * u), pen));
            shapes
        }
        ValveKind::Diaphragm => {
            let mut shapes = bowtie(l, h, pen);
            shapes.push(Shape::Arc {
                center: p(0.0, 0.0),
                radius: 0.3 * u,
                start_deg: 180.0,
                sweep_deg: 180.0,
                width: pen,
            });
            shapes
        }
        ValveKind::Plug => {
            let mut shapes = bowtie(l, h, pen);
            shapes.push(Shape::Polygon {
                points: vec![
                    p(-0.15 * u, -0.1 * u),
                    p(0.15 * u, -0.1 * u),
                    p(0.15 * u, 0.1 * u),
                    p(-0.15 * u, 0.1 * u),
                ],
                width: pen,
                filled: true,
            });
            shapes
        }
    }
}

/// Actuator glyph above the stem. Only drawn for bodies with a stem; the
/// stem itself is part of the glyph so stemless bodies stay clean.
pub fn actuator_glyph(kind: ActuatorKind, u: f64, pen: f64) -> Vec<Shape> {
    let stem_top = -1.0 * u;
    let mut shapes = vec![line(p(0.0, 0.0), p(0.0, stem_top), pen)];
    match kind {
        ActuatorKind::HandWheel => {
            shapes.push(line(p(-0.4 * u, stem_top), p(0.4 * u, stem_top), pen));
        }
        ActuatorKind::Diaphragm => {
            shapes.push(Shape::Arc {
                center: p(0.0, stem_top),
                radius: 0.45 * u,
                start_deg: 180.0,
                sweep_deg: 180.0,
                width: pen,
            });
            shapes.push(line(p(-0.45 * u, stem_top), p(0.45 * u, stem_top), pen));
        }
        ActuatorKind::Motor => {
            shapes.push(Shape::Circle {
                center: p(0.0, stem_top - 0.35 * u),
                radius: 0.35 * u,
                width: pen,
                filled: false,
            });
            shapes.push(Shape::Text {
                at: p(0.0, stem_top - 0.22 * u),
                content: "M".to_string(),
                size: 0.4 * u,
                anchor: TextAnchor::Middle,
            });
        }
        ActuatorKind::Piston => {
            shapes.push(Shape::Polygon {
                points: vec![
                    p(-0.4 * u, stem_top - 0.5 * u),
                    p(0.4 * u, stem_top - 0.5 * u),
                    p(0.4 * u, stem_top),
                    p(-0.4 * u, stem_top),
                ],
                width: pen,
                filled: false,
            });
            shapes.push(line(p(0.0, stem_top - 0.5 * u), p(0.0, stem_top - 0.25 * u), pen));
        }
        ActuatorKind::Solenoid => {
            shapes.push(Shape::Polygon {
                points: vec![
                    p(-0.35 * u, stem_top - 0.7 * u),
                    p(0.35 * u, stem_top - 0.7 * u),
                    p(0.35 * u, stem_top),
                    p(-0.35 * u, stem_top),
                ],
                width: pen,
                filled: false,
            });
            shapes.push(Shape::Text {
                at: p(0.0, stem_top - 0.2 * u),
                content: "S".to_string(),
                size: 0.4 * u,
                anchor: TextAnchor::Middle,
            });
        }
        ActuatorKind::Spring => {
            let mut zig = vec![p(0.0, stem_top)];
            let mut x = -0.25 * u;
            let mut y = stem_top - 0.15 * u;
            for _ in 0..4 {
                zig.push(p(x, y));
                x = -x;
                y -= 0.15 * u;
            }
            shapes.push(Shape::Polyline { points: zig, width: pen });
        }
        ActuatorKind::Pilot => {
            shapes.push(Shape::Polygon {
                points: vec![
                    p(0.0, stem_top),
                    p(0.6 * u, stem_top),
                    p(0.6 * u, stem_top - 0.4 * u),
                    p(0.0, stem_top - 0.4 * u),
                ],
                width: pen,
                filled: false,
            });
        }
    }
    shapes
}
