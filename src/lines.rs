//! Line style renderer: base strokes plus the repeating service
//! decorations that distinguish pneumatic, hydraulic, signal and other
//! runs on a flowsheet, and the arrowheads and pipe bodies drawn on top.

use crate::canvas::{Canvas, Shape, TextAnchor};
use crate::config::LineStyleConfig;
use crate::geom::{quarter, Point2, ViewMode};
use crate::model::LineType;
use crate::symbols::{place, DrawOptions};

/// Strokes the segment and walks outward from its midpoint in fixed
/// steps, emitting the service glyph at each stop until the half-length
/// is reached. A segment shorter than one step gets the bare stroke.
pub fn draw_line(
    canvas: &mut Canvas,
    start: Point2,
    end: Point2,
    width: f64,
    line_type: Option<LineType>,
    cfg: &LineStyleConfig,
) {
    let dashed = matches!(
        line_type,
        Some(LineType::InstrumentSignal) | Some(LineType::InstrumentCapillary)
    );
    canvas.push(Shape::Line { a: start, b: end, width, dashed });

    let Some(line_type) = line_type else {
        return;
    };
    if line_type == LineType::ProcessFlow {
        // Process flow is just the heavy stroke.
        return;
    }

    let len = start.dist(end);
    if len == 0.0 {
        return;
    }
    let dir = Point2::new((end.x - start.x) / len, (end.y - start.y) / len);
    let mid = start.mid(end);

    let mut offset = 0.0;
    let mut index = 0u32;
    while offset <= len / 2.0 - cfg.tick_size {
        let ahead = Point2::new(mid.x + dir.x * offset, mid.y + dir.y * offset);
        decoration(canvas, line_type, ahead, dir, width, index, cfg);
        if offset > 0.0 {
            let behind = Point2::new(mid.x - dir.x * offset, mid.y - dir.y * offset);
            decoration(canvas, line_type, behind, dir, width, index, cfg);
        }
        offset += cfg.decoration_step;
        index += 1;
    }
}

fn decoration(
    canvas: &mut Canvas,
    line_type: LineType,
    at: Point2,
    dir: Point2,
    width: f64,
    index: u32,
    cfg: &LineStyleConfig,
) {
    let t = cfg.tick_size;
    let perp = Point2::new(-dir.y, dir.x);
    // Diagonal between the run direction and its normal.
    let diag = Point2::new(
        (dir.x + perp.x) * std::f64::consts::FRAC_1_SQRT_2,
        (dir.y + perp.y) * std::f64::consts::FRAC_1_SQRT_2,
    );
    let slash = |canvas: &mut Canvas, c: Point2| {
        canvas.line(
            Point2::new(c.x - diag.x * t, c.y - diag.y * t),
            Point2::new(c.x + diag.x * t, c.y + diag.y * t),
            width,
        );
    };
    let back_slash = |canvas: &mut Canvas, c: Point2| {
        let d = Point2::new(
            (dir.x - perp.x) * std::f64::consts::FRAC_1_SQRT_2,
            (dir.y - perp.y) * std::f64::consts::FRAC_1_SQRT_2,
        );
        canvas.line(
            Point2::new(c.x - d.x * t, c.y - d.y * t),
            Point2::new(c.x + d.x * t, c.y + d.y * t),
            width,
        );
    };

    match line_type {
        LineType::ProcessFlow => {}
        LineType::PneumaticAir => {
            // Double slash.
            slash(canvas, Point2::new(at.x - dir.x * 3.0, at.y - dir.y * 3.0));
            slash(canvas, Point2::new(at.x + dir.x * 3.0, at.y + dir.y * 3.0));
        }
        LineType::Hydraulic => {
            slash(canvas, at);
            canvas.text(
                Point2::new(at.x + perp.x * (t + 4.0), at.y + perp.y * (t + 4.0)),
                "L",
                2.0 * t,
                TextAnchor::Middle,
            );
        }
        LineType::InertGas => {
            // Triple perpendicular tick.
            for k in [-1.0, 0.0, 1.0] {
                let c = Point2::new(at.x + dir.x * 4.0 * k, at.y + dir.y * 4.0 * k);
                canvas.line(
                    Point2::new(c.x - perp.x * t, c.y - perp.y * t),
                    Point2::new(c.x + perp.x * t, c.y + perp.y * t),
                    width,
                );
            }
        }
        LineType::InstrumentSignal => {
            canvas.line(
                Point2::new(at.x - perp.x * t, at.y - perp.y * t),
                Point2::new(at.x + perp.x * t, at.y + perp.y * t),
                width,
            );
        }
        LineType::InstrumentCapillary => {
            slash(canvas, at);
            back_slash(canvas, at);
        }
        LineType::ElectricalWires => {
            canvas.circle(at, cfg.dot_radius, width, true);
        }
        LineType::HeatTracing => {
            if index % 2 == 0 {
                slash(canvas, at);
            } else {
                canvas.text(
                    Point2::new(at.x + perp.x * (t + 4.0), at.y + perp.y * (t + 4.0)),
                    "S",
                    2.0 * t,
                    TextAnchor::Middle,
                );
            }
        }
    }
}

/// Flow arrowhead: a filled three-point polygon. The two base corners
/// are the point `arrow_length` back along the run, rotated by the
/// half-angle either way about the tip.
pub fn draw_arrow(canvas: &mut Canvas, tip: Point2, toward: Point2, width: f64, cfg: &LineStyleConfig) {
    let len = toward.dist(tip);
    if len == 0.0 {
        return;
    }
    let dir = Point2::new((tip.x - toward.x) / len, (tip.y - toward.y) / len);
    let base = Point2::new(tip.x - dir.x * cfg.arrow_length, tip.y - dir.y * cfg.arrow_length);
    let spin = |deg: f64| {
        let (sin, cos) = deg.to_radians().sin_cos();
        let d = base.sub(tip);
        Point2::new(tip.x + d.x * cos - d.y * sin, tip.y + d.x * sin + d.y * cos)
    };
    canvas.polygon(
        vec![tip, spin(cfg.arrow_angle_deg), spin(-cfg.arrow_angle_deg)],
        width,
        true,
    );
}

/// PFD pipe body: a small rectangle straddling the segment midpoint. In
/// isometric views it takes the same flip/skew as a symbol riding the
/// same run, so the body appears to lie along the pipe.
pub fn draw_pipe_body(
    canvas: &mut Canvas,
    start: Point2,
    end: Point2,
    view: ViewMode,
    width: f64,
    skew_ratio: f64,
    cfg: &LineStyleConfig,
) {
    let opts = DrawOptions::for_quarter(view, quarter(start, end), skew_ratio);
    let l = cfg.pipe_body_length / 2.0;
    let h = cfg.pipe_body_height / 2.0;
    let local = vec![Shape::Polygon {
        points: vec![
            Point2::new(-l, -h),
            Point2::new(l, -h),
            Point2::new(l, h),
            Point2::new(-l, h),
        ],
        width,
        filled: false,
    }];
    canvas.extend(place(local, start.mid(end), opts, 0.0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::IsoCorner;

    fn cfg() -> LineStyleConfig {
        LineStyleConfig::default()
    }

    #[test]
    fn plain_line_is_a_single_stroke() {
        let mut canvas = Canvas::new();
        draw_line(&mut canvas, Point2::ZERO, Point2::new(500.0, 0.0), 1.0, None, &cfg());
        assert_eq!(canvas.shapes.len(), 1);
    }

    #[test]
    fn process_flow_adds_no_glyphs() {
        let mut canvas = Canvas::new();
        draw_line(
            &mut canvas,
            Point2::ZERO,
            Point2::new(500.0, 0.0),
            2.0,
            Some(LineType::ProcessFlow),
            &cfg(),
        );
        assert_eq!(canvas.shapes.len(), 1);
    }

    #[test]
    fn decorations_walk_out_from_the_midpoint() {
        let mut canvas = Canvas::new();
        draw_line(
            &mut canvas,
            Point2::ZERO,
            Point2::new(300.0, 0.0),
            1.0,
            Some(LineType::ElectricalWires),
            &cfg(),
        );
        // Half-length 150, step 30: dots at 0, +-30, +-60, +-90, +-120 -> 9.
        let dots = canvas
            .shapes
            .iter()
            .filter(|s| matches!(s, Shape::Circle { filled: true, .. }))
            .count();
        assert_eq!(dots, 9);
        match canvas.shapes.first() {
            Some(Shape::Line { dashed, .. }) => assert!(!dashed),
            other => panic!("base stroke first, got {other:?}"),
        }
    }

    #[test]
    fn instrument_signal_base_is_dashed() {
        let mut canvas = Canvas::new();
        draw_line(
            &mut canvas,
            Point2::ZERO,
            Point2::new(120.0, 0.0),
            1.0,
            Some(LineType::InstrumentSignal),
            &cfg(),
        );
        match canvas.shapes.first() {
            Some(Shape::Line { dashed, .. }) => assert!(dashed),
            other => panic!("expected base stroke, got {other:?}"),
        }
    }

    #[test]
    fn short_segment_keeps_only_its_stroke() {
        let mut canvas = Canvas::new();
        draw_line(
            &mut canvas,
            Point2::ZERO,
            Point2::new(10.0, 0.0),
            1.0,
            Some(LineType::PneumaticAir),
            &cfg(),
        );
        assert_eq!(canvas.shapes.len(), 1);
        // Degenerate segment likewise.
        draw_line(
            &mut canvas,
            Point2::ZERO,
            Point2::ZERO,
            1.0,
            Some(LineType::PneumaticAir),
            &cfg(),
        );
        assert_eq!(canvas.shapes.len(), 2);
    }

    #[test]
    fn arrowhead_is_a_filled_triangle_at_the_tip() {
        let mut canvas = Canvas::new();
        let tip = Point2::new(100.0, 0.0);
        draw_arrow(&mut canvas, tip, Point2::ZERO, 1.0, &cfg());
        match &canvas.shapes[0] {
            Shape::Polygon { points, filled, .. } => {
                assert!(*filled);
                assert_eq!(points.len(), 3);
                assert_eq!(points[0], tip);
                // Base corners sit behind the tip.
                assert!(points[1].x < tip.x && points[2].x < tip.x);
            }
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn pipe_body_shears_only_in_isometric_views() {
        let a = Point2::ZERO;
        let b = Point2::new(100.0, 58.0); // roughly a 30 degree run
        let mut plan = Canvas::new();
        let mut iso = Canvas::new();
        draw_pipe_body(&mut plan, a, b, ViewMode::Plane, 1.0, 0.5, &cfg());
        draw_pipe_body(&mut iso, a, b, ViewMode::Isometric(IsoCorner::Ne), 1.0, 0.5, &cfg());
        assert_ne!(plan.shapes, iso.shapes);
    }
}
