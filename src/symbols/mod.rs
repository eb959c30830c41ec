mod equipment;
mod reactors;
mod valves;

use crate::canvas::{Canvas, Shape};
use crate::geom::{Point2, Quarter, ViewMode};
use crate::model::ElementKind;

pub use valves::{actuator_glyph, valve_body};

/// Local bounding box of a drawn symbol in canvas units, handed back so
/// callers can place tag labels around it. Scales inversely with the
/// drafting scale: `size(2s) == size(s) / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SymbolSize {
    pub length: f64,
    pub height: f64,
}

/// Transient per-call drawing options: horizontal flip and shear factors
/// used to fake axonometric perspective on flat symbols. Never stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawOptions {
    pub flip: bool,
    pub skew_x: f64,
    pub skew_y: f64,
}

impl DrawOptions {
    /// Picks flip/skew for a symbol sitting on a run with the given
    /// screen sector. Plan views draw symbols flat; isometric views shear
    /// them so their axis follows the +-30 degree pipe direction, and
    /// flip them on leftward runs so asymmetric bodies face the flow.
    pub fn for_quarter(view: ViewMode, quarter: Quarter, skew_ratio: f64) -> Self {
        if !view.is_isometric() {
            return Self::default();
        }
        match quarter {
            Quarter::R => Self::default(),
            Quarter::L => Self { flip: true, ..Self::default() },
            Quarter::Rb => Self { skew_y: skew_ratio, ..Self::default() },
            Quarter::Rt => Self { skew_y: -skew_ratio, ..Self::default() },
            Quarter::Lb => Self { flip: true, skew_y: skew_ratio, skew_x: 0.0 },
            Quarter::Lt => Self { flip: true, skew_y: -skew_ratio, skew_x: 0.0 },
            // Vertical runs lean the upright symbol instead.
            Quarter::T | Quarter::B => Self { skew_x: skew_ratio, ..Self::default() },
        }
    }
}

/// Applies the fixed composition chain to local-frame shapes:
/// skew, then horizontal flip, then translation to the anchor, then an
/// optional rotation about the anchor. The order is part of the contract;
/// reordering it moves sheared symbols off their pipes.
pub fn place(
    shapes: Vec<Shape>,
    anchor: Point2,
    opts: DrawOptions,
    rotation_deg: f64,
) -> Vec<Shape> {
    let skew_y = if opts.flip { -opts.skew_y } else { opts.skew_y };
    let (sin, cos) = rotation_deg.to_radians().sin_cos();
    let transform = move |p: Point2| {
        let p = Point2::new(p.x + opts.skew_x * p.y, p.y + skew_y * p.x);
        let p = if opts.flip { Point2::new(-p.x, p.y) } else { p };
        let p = p.add(anchor);
        if rotation_deg == 0.0 {
            return p;
        }
        let d = p.sub(anchor);
        Point2::new(
            anchor.x + d.x * cos - d.y * sin,
            anchor.y + d.x * sin + d.y * cos,
        )
    };
    shapes
        .into_iter()
        .map(|shape| shape.map_points(&transform))
        .collect()
}

/// Draws one element symbol at `anchor` for drafting scale 1:`scale`,
/// returning its bounding size. `rotation_deg` only affects valves; every
/// other body ignores it. Unknown kinds draw nothing and report a nominal
/// label box.
pub fn draw_element(
    canvas: &mut Canvas,
    kind: ElementKind,
    anchor: Point2,
    scale: f64,
    opts: DrawOptions,
    rotation_deg: f64,
    pen: f64,
) -> SymbolSize {
    let u = 1000.0 / scale;
    let (shapes, size, rotation) = match kind {
        ElementKind::Tank => with_rot(equipment::tank(u, pen), 0.0),
        ElementKind::Drum => with_rot(equipment::drum(u, pen), 0.0),
        ElementKind::Pump => with_rot(equipment::pump(u, pen), 0.0),
        ElementKind::Separator => with_rot(equipment::separator(u, pen), 0.0),
        ElementKind::Mixer => with_rot(equipment::mixer(u, pen), 0.0),
        ElementKind::Splitter => with_rot(equipment::splitter(u, pen), 0.0),
        ElementKind::Source => with_rot(equipment::source(u, pen), 0.0),
        ElementKind::Sink => with_rot(equipment::sink(u, pen), 0.0),
        ElementKind::Column => with_rot(equipment::column(u, pen), 0.0),
        ElementKind::AbsorptionColumn => with_rot(equipment::absorption_column(u, pen), 0.0),
        ElementKind::Extractor => with_rot(equipment::extractor(u, pen), 0.0),
        ElementKind::Expander => with_rot(equipment::expander(u, pen), 0.0),
        ElementKind::Compressor => with_rot(equipment::compressor(u, pen), 0.0),
        ElementKind::ReliefValve => with_rot(equipment::relief_valve(u, pen), 0.0),
        ElementKind::Enlarger => with_rot(equipment::enlarger(u, pen), 0.0),
        ElementKind::Pfr => with_rot(reactors::pfr(u, pen), 0.0),
        ElementKind::Cstr => with_rot(reactors::cstr(u, pen), 0.0),
        ElementKind::Reactor => with_rot(reactors::reactor(u, pen), 0.0),
        ElementKind::StraightTubeExchanger => {
            with_rot(reactors::straight_tube_exchanger(u, pen), 0.0)
        }
        ElementKind::UTubeExchanger => with_rot(reactors::u_tube_exchanger(u, pen), 0.0),
        ElementKind::Heater => with_rot(reactors::heater(u, pen), 0.0),
        ElementKind::Cooler => with_rot(reactors::cooler(u, pen), 0.0),
        ElementKind::Valve(valve, actuator) => {
            let mut shapes = valve_body(valve, u, pen);
            if let Some(actuator) = actuator {
                shapes.extend(actuator_glyph(actuator, u, pen));
            }
            let size = valves::valve_size(valve, actuator.is_some(), u);
            (shapes, size, rotation_deg)
        }
        // Silent no-op: the caller still gets a label box to write into.
        ElementKind::Unknown => (
            Vec::new(),
            SymbolSize { length: 2.0 * u, height: 1.0 * u },
            0.0,
        ),
    };
    canvas.extend(place(shapes, anchor, opts, rotation));
    size
}

fn with_rot(
    drawn: (Vec<Shape>, SymbolSize),
    rotation_deg: f64,
) -> (Vec<Shape>, SymbolSize, f64) {
    (drawn.0, drawn.1, rotation_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ActuatorKind, ValveKind};

    const ALL_KINDS: [ElementKind; 24] = [
        ElementKind::Tank,
        ElementKind::Drum,
        ElementKind::Pump,
        ElementKind::Separator,
        ElementKind::Mixer,
        ElementKind::Splitter,
        ElementKind::Source,
        ElementKind::Sink,
        ElementKind::Column,
        ElementKind::AbsorptionColumn,
        ElementKind::Extractor,
        ElementKind::Expander,
        ElementKind::Compressor,
        ElementKind::ReliefValve,
        ElementKind::Enlarger,
        ElementKind::Pfr,
        ElementKind::Cstr,
        ElementKind::Reactor,
        ElementKind::StraightTubeExchanger,
        ElementKind::UTubeExchanger,
        ElementKind::Heater,
        ElementKind::Cooler,
        ElementKind::Valve(ValveKind::Gate, Some(ActuatorKind::Motor)),
        ElementKind::Valve(ValveKind::Check, None),
    ];

    #[test]
    fn every_known_kind_emits_shapes() {
        for kind in ALL_KINDS {
            let mut canvas = Canvas::new();
            let size = draw_element(
                &mut canvas,
                kind,
                Point2::new(500.0, 500.0),
                100.0,
                DrawOptions::default(),
                0.0,
                1.0,
            );
            assert!(!canvas.shapes.is_empty(), "{kind:?} drew nothing");
            assert!(size.length > 0.0 && size.height > 0.0, "{kind:?} has no extent");
        }
    }

    #[test]
    fn unknown_kind_is_a_silent_no_op() {
        let mut canvas = Canvas::new();
        let size = draw_element(
            &mut canvas,
            ElementKind::Unknown,
            Point2::ZERO,
            100.0,
            DrawOptions::default(),
            0.0,
            1.0,
        );
        assert!(canvas.shapes.is_empty());
        assert!(size.length > 0.0, "label box must still be reported");
    }

    #[test]
    fn symbol_size_halves_when_scale_doubles() {
        for kind in ALL_KINDS {
            let mut a = Canvas::new();
            let mut b = Canvas::new();
            let at_s = draw_element(&mut a, kind, Point2::ZERO, 100.0, DrawOptions::default(), 0.0, 1.0);
            let at_2s = draw_element(&mut b, kind, Point2::ZERO, 200.0, DrawOptions::default(), 0.0, 1.0);
            assert!((at_2s.height - at_s.height / 2.0).abs() < 1e-9, "{kind:?}");
            assert!((at_2s.length - at_s.length / 2.0).abs() < 1e-9, "{kind:?}");
        }
    }

    #[test]
    fn placement_translates_to_the_anchor() {
        let anchor = Point2::new(300.0, 120.0);
        let shapes = place(
            vec![Shape::Line {
                a: Point2::new(-10.0, 0.0),
                b: Point2::new(10.0, 0.0),
                width: 1.0,
                dashed: false,
            }],
            anchor,
            DrawOptions::default(),
            0.0,
        );
        match &shapes[0] {
            Shape::Line { a, b, .. } => {
                assert_eq!(*a, Point2::new(290.0, 120.0));
                assert_eq!(*b, Point2::new(310.0, 120.0));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn flip_mirrors_after_skew() {
        let shapes = place(
            vec![Shape::Line {
                a: Point2::new(10.0, 0.0),
                b: Point2::new(10.0, 10.0),
                width: 1.0,
                dashed: false,
            }],
            Point2::ZERO,
            DrawOptions { flip: true, skew_x: 0.5, skew_y: 0.0 },
            0.0,
        );
        match &shapes[0] {
            Shape::Line { a, b, .. } => {
                // Skew moves the top point right by 5 before the mirror.
                assert_eq!(*a, Point2::new(-10.0, 0.0));
                assert_eq!(*b, Point2::new(-15.0, 10.0));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn valve_rotation_spins_about_the_anchor() {
        let anchor = Point2::new(100.0, 100.0);
        let mut flat = Canvas::new();
        let mut turned = Canvas::new();
        draw_element(&mut flat, ElementKind::Valve(ValveKind::Gate, None), anchor, 100.0, DrawOptions::default(), 0.0, 1.0);
        draw_element(&mut turned, ElementKind::Valve(ValveKind::Gate, None), anchor, 100.0, DrawOptions::default(), 90.0, 1.0);
        assert_ne!(flat.shapes, turned.shapes);
        // A non-valve body ignores the rotation entirely.
        let mut pump_a = Canvas::new();
        let mut pump_b = Canvas::new();
        draw_element(&mut pump_a, ElementKind::Pump, anchor, 100.0, DrawOptions::default(), 0.0, 1.0);
        draw_element(&mut pump_b, ElementKind::Pump, anchor, 100.0, DrawOptions::default(), 90.0, 1.0);
        assert_eq!(pump_a.shapes, pump_b.shapes);
    }
}
