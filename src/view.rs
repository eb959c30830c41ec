//! View builder: projects the 3D model into drawing-plane coordinates,
//! picks the drafting scale, and replays the projection at final scale
//! and sheet position while emitting primitives in the fixed z-order
//! (lines, then symbols, then instrumentation, then the border).

use crate::canvas::{Canvas, TextAnchor};
use crate::config::DraftConfig;
use crate::geom::{project, quarter, Point2, Point3, Quarter, ViewMode};
use crate::lines::{draw_arrow, draw_line, draw_pipe_body};
use crate::model::{ElementKind, LineType, ProcessModel};
use crate::scale::{select_scale, SheetSize, MARGIN_LEFT, MARGIN_TOP};
use crate::sheet::draw_sheet;
use crate::symbols::{draw_element, DrawOptions};

/// Which drawing is being produced. The kind only selects layers; the
/// projection and scale machinery is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramKind {
    Pfd,
    Pid,
    IsoSpool,
}

impl DiagramKind {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "pfd" => Some(Self::Pfd),
            "pid" | "p&id" => Some(Self::Pid),
            "iso" | "spool" => Some(Self::IsoSpool),
            _ => None,
        }
    }
}

/// An element with its computed drawing-plane position. The 3D position
/// is retained so the render pass can re-project it at final scale.
#[derive(Debug, Clone)]
pub struct ProjectedElement {
    pub tag: String,
    pub kind: ElementKind,
    pub position: Point3,
    pub position2: Point2,
    pub quarter: Quarter,
    pub rotation: f64,
    /// The element's own symbol scale multiplier from the model.
    pub symbol_scale: f64,
    pub connection_points2: Vec<Point2>,
}

#[derive(Debug, Clone)]
pub struct ProjectedSegment {
    pub start3: Point3,
    pub end3: Point3,
    pub start: Point2,
    pub end: Point2,
    pub quarter: Quarter,
}

#[derive(Debug, Clone)]
pub struct ProjectedLine {
    pub name: String,
    pub line_type: Option<LineType>,
    pub segments: Vec<ProjectedSegment>,
}

#[derive(Debug, Clone)]
pub struct ProjectedInstrument {
    pub tag: String,
    pub letters: String,
    pub number: String,
    pub position: Point3,
    pub position2: Point2,
}

/// Everything `render` needs: per-view 2D data plus the selected scale.
/// Derived state only; recomputed on every view or model change.
#[derive(Debug, Clone)]
pub struct ViewData {
    pub view: ViewMode,
    pub elements: Vec<ProjectedElement>,
    pub lines: Vec<ProjectedLine>,
    pub instruments: Vec<ProjectedInstrument>,
    pub instrument_lines: Vec<ProjectedLine>,
    pub scale: u32,
}

struct Extent {
    min: Point2,
    max: Point2,
    any: bool,
}

impl Extent {
    fn new() -> Self {
        Self { min: Point2::ZERO, max: Point2::ZERO, any: false }
    }

    fn grow(&mut self, p: Point2) {
        if !self.any {
            self.min = p;
            self.max = p;
            self.any = true;
            return;
        }
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    fn span(&self) -> Point2 {
        self.max.sub(self.min)
    }

    fn center(&self) -> Point2 {
        self.min.mid(self.max)
    }
}

/// Projects the whole model for one view and selects the drafting scale.
/// Returns `None` when the model has no elements: with nothing to bound
/// there is no scale to pick and nothing to draw.
pub fn compute_view(model: &ProcessModel, view: ViewMode) -> Option<ViewData> {
    if model.elements.is_empty() {
        return None;
    }

    let mut extent = Extent::new();

    let mut elements = Vec::with_capacity(model.elements.len());
    for (tag, element) in &model.elements {
        let position2 = project(view, element.position, 1.0, Point2::ZERO);
        extent.grow(position2);

        let mut connection_points2 = Vec::with_capacity(element.connection_points.len());
        for cp in &element.connection_points {
            let local = crate::geom::rotate_local(
                *cp,
                element.rotation_x,
                element.rotation,
                element.rotation_z,
            );
            let world = Point3::new(
                element.position.x + local.x,
                element.position.y + local.y,
                element.position.z + local.z,
            );
            let p2 = project(view, world, 1.0, Point2::ZERO);
            extent.grow(p2);
            connection_points2.push(p2);
        }

        // The element's screen sector follows its flow axis: first to
        // last nozzle. Elements without two nozzles sit in the default
        // sector.
        let q = if connection_points2.len() >= 2 {
            quarter(connection_points2[0], connection_points2[connection_points2.len() - 1])
        } else {
            Quarter::R
        };

        elements.push(ProjectedElement {
            tag: tag.clone(),
            kind: element.symbol_kind(),
            position: element.position,
            position2,
            quarter: q,
            rotation: element.rotation,
            symbol_scale: if element.scale > 0.0 { element.scale } else { 1.0 },
            connection_points2,
        });
    }

    let mut project_lines = |lines: &[crate::model::PipeLine]| -> Vec<ProjectedLine> {
        lines
            .iter()
            .map(|line| {
                let segments = line
                    .segments
                    .iter()
                    .map(|&(a, b)| {
                        let start = project(view, a, 1.0, Point2::ZERO);
                        let end = project(view, b, 1.0, Point2::ZERO);
                        extent.grow(start);
                        extent.grow(end);
                        ProjectedSegment { start3: a, end3: b, start, end, quarter: quarter(start, end) }
                    })
                    .collect();
                ProjectedLine {
                    name: line.name.clone(),
                    line_type: line.service(),
                    segments,
                }
            })
            .collect()
    };

    let lines = project_lines(&model.lines);
    let instrument_lines = project_lines(&model.instrument_lines);

    let mut instruments = Vec::with_capacity(model.instruments.len());
    for (tag, instrument) in &model.instruments {
        let position2 = project(view, instrument.position, 1.0, Point2::ZERO);
        extent.grow(position2);
        instruments.push(ProjectedInstrument {
            tag: tag.clone(),
            letters: instrument.letters.clone(),
            number: instrument.number.clone(),
            position: instrument.position,
            position2,
        });
    }

    let scale = select_scale(extent.span());

    Some(ViewData {
        view,
        elements,
        lines,
        instruments,
        instrument_lines,
        scale,
    })
}

/// Re-projects every retained 3D position at `scale` with the drawing
/// centered in the sheet's usable area, then draws. Call order is the
/// z-order contract: lines first, symbols over them, instrumentation
/// over both, border and title block last.
#[allow(clippy::too_many_arguments)]
pub fn render(
    canvas: &mut Canvas,
    scale: u32,
    sheet: SheetSize,
    data: &ViewData,
    kind: DiagramKind,
    model: &ProcessModel,
    config: &DraftConfig,
) {
    let coef = scale as f64;
    let offset = placement_offset(data, sheet, coef);
    let theme = &config.theme;
    let view = data.view;

    // Layer 1: pipe lines.
    for line in &data.lines {
        let heavy = line.line_type == Some(LineType::ProcessFlow);
        let width = if heavy { theme.wide_stroke } else { theme.stroke };
        for segment in &line.segments {
            let a = project(view, segment.start3, coef, offset);
            let b = project(view, segment.end3, coef, offset);
            draw_line(canvas, a, b, width, line.line_type, &config.line_style);
            if kind == DiagramKind::Pfd && heavy {
                draw_pipe_body(
                    canvas,
                    a,
                    b,
                    view,
                    theme.stroke,
                    config.symbol.skew_ratio,
                    &config.line_style,
                );
            }
        }
        // Flow direction marker on the last segment.
        if let Some(last) = line.segments.last() {
            let a = project(view, last.start3, coef, offset);
            let b = project(view, last.end3, coef, offset);
            if a != b {
                draw_arrow(canvas, b, a, width, &config.line_style);
            }
        }
    }

    // Layer 2: equipment and valve symbols with their tag labels.
    for element in &data.elements {
        let is_valve = matches!(element.kind, ElementKind::Valve(..));
        if kind == DiagramKind::Pfd && is_valve {
            continue;
        }
        let anchor = project(view, element.position, coef, offset);
        let opts = DrawOptions::for_quarter(view, element.quarter, config.symbol.skew_ratio);
        let rotation = if view.is_isometric() {
            if matches!(element.quarter, Quarter::T | Quarter::B) {
                90.0
            } else {
                0.0
            }
        } else {
            element.rotation
        };
        // The element's own scale multiplier enlarges its symbol without
        // touching the sheet scale.
        let size = draw_element(
            canvas,
            element.kind,
            anchor,
            coef / element.symbol_scale,
            opts,
            rotation,
            theme.stroke,
        );
        canvas.text(
            Point2::new(
                anchor.x,
                anchor.y + size.height / 2.0 + config.symbol.label_gap,
            ),
            element.tag.clone(),
            config.symbol.label_size,
            TextAnchor::Middle,
        );
    }

    // Layer 3: instrumentation (P&IDs only).
    if kind == DiagramKind::Pid {
        for line in &data.instrument_lines {
            let line_type = line.line_type.or(Some(LineType::InstrumentSignal));
            for segment in &line.segments {
                let a = project(view, segment.start3, coef, offset);
                let b = project(view, segment.end3, coef, offset);
                draw_line(canvas, a, b, theme.thin_stroke, line_type, &config.line_style);
            }
        }
        for instrument in &data.instruments {
            let at = project(view, instrument.position, coef, offset);
            let r = config.symbol.bubble_radius;
            canvas.circle(at, r, theme.stroke, false);
            canvas.line(
                Point2::new(at.x - r, at.y),
                Point2::new(at.x + r, at.y),
                theme.thin_stroke,
            );
            canvas.text(
                Point2::new(at.x, at.y - 3.0),
                instrument.letters.clone(),
                config.symbol.label_size,
                TextAnchor::Middle,
            );
            canvas.text(
                Point2::new(at.x, at.y + config.symbol.label_size + 1.0),
                instrument.number.clone(),
                config.symbol.label_size,
                TextAnchor::Middle,
            );
        }
    }

    // Layer 4: border and title block.
    draw_sheet(
        canvas,
        sheet,
        scale,
        &model.titles,
        &model.revisions,
        theme,
        &config.title_block,
    );
}

/// Canvas offset that puts the scaled drawing in the middle of the
/// usable area.
fn placement_offset(data: &ViewData, sheet: SheetSize, coef: f64) -> Point2 {
    let mut extent = Extent::new();
    for element in &data.elements {
        extent.grow(element.position2);
        for p in &element.connection_points2 {
            extent.grow(*p);
        }
    }
    for line in data.lines.iter().chain(&data.instrument_lines) {
        for segment in &line.segments {
            extent.grow(segment.start);
            extent.grow(segment.end);
        }
    }
    for instrument in &data.instruments {
        extent.grow(instrument.position2);
    }

    let target = Point2::new(
        (MARGIN_LEFT + sheet.usable_width() / 2.0) * 2.0,
        (MARGIN_TOP + sheet.usable_height() / 2.0) * 2.0,
    );
    let raw_center = extent.center();
    Point2::new(target.x - raw_center.x / coef, target.y - raw_center.y / coef)
}
