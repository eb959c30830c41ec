use std::path::Path;

use anyhow::Result;

use crate::canvas::{Canvas, Shape, TextAnchor};
use crate::geom::Point2;
use crate::scale::SheetSize;
use crate::theme::Theme;

/// Serializes the command list to SVG. The viewBox is the canvas
/// coordinate system (sheet millimeters x 2), while the document size is
/// the physical sheet, so the output prints at true scale. Shapes are
/// written strictly in append order.
pub fn render_svg(canvas: &Canvas, sheet: SheetSize, theme: &Theme) -> String {
    let mut svg = String::new();
    let w = sheet.width_mm;
    let h = sheet.height_mm;

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}mm\" height=\"{h}mm\" viewBox=\"0 0 {} {}\">",
        w * 2.0,
        h * 2.0
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.paper
    ));

    for shape in &canvas.shapes {
        push_shape(&mut svg, shape, theme);
    }

    svg.push_str("</svg>");
    svg
}

fn push_shape(svg: &mut String, shape: &Shape, theme: &Theme) {
    let ink = theme.ink.as_str();
    match shape {
        Shape::Line { a, b, width, dashed } => {
            let dash = if *dashed { " stroke-dasharray=\"6 4\"" } else { "" };
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{ink}\" stroke-width=\"{width}\"{dash}/>",
                a.x, a.y, b.x, b.y
            ));
        }
        Shape::Polyline { points, width } => {
            svg.push_str(&format!(
                "<polyline points=\"{}\" fill=\"none\" stroke=\"{ink}\" stroke-width=\"{width}\"/>",
                points_attr(points)
            ));
        }
        Shape::Polygon { points, width, filled } => {
            let fill = if *filled { ink } else { "none" };
            svg.push_str(&format!(
                "<polygon points=\"{}\" fill=\"{fill}\" stroke=\"{ink}\" stroke-width=\"{width}\"/>",
                points_attr(points)
            ));
        }
        Shape::Circle { center, radius, width, filled } => {
            let fill = if *filled { ink } else { "none" };
            svg.push_str(&format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{radius:.2}\" fill=\"{fill}\" stroke=\"{ink}\" stroke-width=\"{width}\"/>",
                center.x, center.y
            ));
        }
        Shape::Arc { center, radius, start_deg, sweep_deg, width } => {
            let at = |deg: f64| {
                let (sin, cos) = deg.to_radians().sin_cos();
                Point2::new(center.x + radius * cos, center.y + radius * sin)
            };
            let start = at(*start_deg);
            let end = at(*start_deg + *sweep_deg);
            let large_arc = i32::from(sweep_deg.abs() > 180.0);
            let sweep_flag = i32::from(*sweep_deg >= 0.0);
            svg.push_str(&format!(
                "<path d=\"M {:.2} {:.2} A {radius:.2} {radius:.2} 0 {large_arc} {sweep_flag} {:.2} {:.2}\" fill=\"none\" stroke=\"{ink}\" stroke-width=\"{width}\"/>",
                start.x, start.y, end.x, end.y
            ));
        }
        Shape::Text { at, content, size, anchor } => {
            let anchor = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            svg.push_str(&format!(
                "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"{anchor}\" font-family=\"{}\" font-size=\"{size}\" fill=\"{ink}\">{}</text>",
                at.x,
                at.y,
                escape_xml(&theme.font_family),
                escape_xml(content)
            ));
        }
    }
}

fn points_attr(points: &[Point2]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn write_output_svg(svg: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, svg)?,
        None => println!("{svg}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::SHEETS;

    #[test]
    fn empty_canvas_is_paper_only() {
        let svg = render_svg(&Canvas::new(), SHEETS[1], &Theme::drafting());
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("viewBox=\"0 0 840 594\""));
    }

    #[test]
    fn identical_canvases_serialize_identically() {
        let mut canvas = Canvas::new();
        canvas.line(Point2::ZERO, Point2::new(10.0, 10.0), 1.0);
        canvas.text(Point2::new(5.0, 5.0), "T-100", 8.0, TextAnchor::Middle);
        let a = render_svg(&canvas, SHEETS[0], &Theme::drafting());
        let b = render_svg(&canvas.clone(), SHEETS[0], &Theme::drafting());
        assert_eq!(a, b);
    }

    #[test]
    fn text_is_escaped() {
        let mut canvas = Canvas::new();
        canvas.text(Point2::ZERO, "P&ID <rev \"A\">", 8.0, TextAnchor::Start);
        let svg = render_svg(&canvas, SHEETS[0], &Theme::drafting());
        assert!(svg.contains("P&amp;ID &lt;rev &quot;A&quot;&gt;"));
    }
}
