//! Drafting border, title block and revision table.
//!
//! Everything here is a pure function of the sheet size, the selected
//! scale and the titles metadata; all coordinates are canvas units
//! (sheet millimeters times the x2 canvas scale).

use crate::canvas::{Canvas, TextAnchor};
use crate::config::TitleBlockConfig;
use crate::geom::Point2;
use crate::model::{Revision, Titles};
use crate::scale::{SheetSize, MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP};
use crate::theme::Theme;

pub fn draw_sheet(
    canvas: &mut Canvas,
    sheet: SheetSize,
    scale: u32,
    titles: &Titles,
    revisions: &[Revision],
    theme: &Theme,
    cfg: &TitleBlockConfig,
) {
    let w = sheet.width_mm * 2.0;
    let h = sheet.height_mm * 2.0;
    let left = MARGIN_LEFT * 2.0;
    let top = MARGIN_TOP * 2.0;
    let right = w - MARGIN_RIGHT * 2.0;
    let bottom = h - MARGIN_BOTTOM * 2.0;

    canvas.rect(Point2::new(left, top), right - left, bottom - top, theme.wide_stroke);

    let bw = w * cfg.width_fraction;
    let bh = h * cfg.height_fraction;
    let bx = right - bw;
    let by = bottom - bh;
    let row = bh / cfg.rows as f64;

    canvas.rect(Point2::new(bx, by), bw, bh, theme.stroke);

    let mut cell = |x: f64, y: f64, cw: f64, ch: f64, label: &str, value: &str| {
        canvas.rect(Point2::new(x, y), cw, ch, theme.thin_stroke);
        canvas.text(
            Point2::new(x + 3.0, y + cfg.label_size + 2.0),
            label,
            cfg.label_size,
            TextAnchor::Start,
        );
        canvas.text(
            Point2::new(x + cw / 2.0, y + ch / 2.0 + cfg.value_size / 2.0),
            value,
            cfg.value_size,
            TextAnchor::Middle,
        );
    };

    // Fixed grid: project / customer / double-height title / signatures /
    // date-scale-rev / drawing number and sheet label.
    cell(bx, by, bw, row, "PROJECT", &titles.project);
    cell(bx, by + row, bw, row, "CUSTOMER", &titles.customer);
    cell(bx, by + 2.0 * row, bw, 2.0 * row, "TITLE", &titles.title);

    let third = bw / 3.0;
    cell(bx, by + 4.0 * row, third, row, "DRAWN", &titles.drawn_by);
    cell(bx + third, by + 4.0 * row, third, row, "CHECKED", &titles.checked_by);
    cell(bx + 2.0 * third, by + 4.0 * row, third, row, "APPROVED", &titles.approved_by);

    cell(bx, by + 5.0 * row, third, row, "DATE", &titles.date);
    cell(bx + third, by + 5.0 * row, third, row, "SCALE", &format!("1:{scale}"));
    cell(
        bx + 2.0 * third,
        by + 5.0 * row,
        third,
        row,
        "REV",
        &revisions.len().to_string(),
    );

    cell(bx, by + 6.0 * row, 2.0 * third, 2.0 * row, "DRAWING NO.", &titles.drawing_no);
    cell(bx + 2.0 * third, by + 6.0 * row, third, 2.0 * row, "SHEET", sheet.label);

    draw_revisions(canvas, revisions, bx, by, bw, row, theme, cfg);
}

/// Revision rows stack upward from the top edge of the title block,
/// newest on top of the pile.
fn draw_revisions(
    canvas: &mut Canvas,
    revisions: &[Revision],
    bx: f64,
    baseline: f64,
    bw: f64,
    row: f64,
    theme: &Theme,
    cfg: &TitleBlockConfig,
) {
    // Column widths as fractions of the block width.
    const COLUMNS: [f64; 6] = [0.10, 0.18, 0.36, 0.12, 0.12, 0.12];

    for (i, rev) in revisions.iter().enumerate() {
        let y = baseline - (i + 1) as f64 * row;
        canvas.rect(Point2::new(bx, y), bw, row, theme.thin_stroke);
        let fields = [
            rev.id.as_str(),
            rev.date.as_str(),
            rev.modification.as_str(),
            rev.reviewed_by.as_str(),
            rev.checked_by.as_str(),
            rev.approved_by.as_str(),
        ];
        let mut x = bx;
        for (frac, field) in COLUMNS.iter().zip(fields) {
            let cw = bw * frac;
            if x > bx {
                canvas.line(Point2::new(x, y), Point2::new(x, y + row), theme.thin_stroke);
            }
            canvas.text(
                Point2::new(x + cw / 2.0, y + row / 2.0 + cfg.label_size / 2.0),
                field,
                cfg.label_size,
                TextAnchor::Middle,
            );
            x += cw;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Shape;
    use crate::scale::SHEETS;

    fn texts(canvas: &Canvas) -> Vec<String> {
        canvas
            .shapes
            .iter()
            .filter_map(|s| match s {
                Shape::Text { content, .. } => Some(content.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn title_block_places_the_fixed_cells() {
        let mut canvas = Canvas::new();
        let titles = Titles {
            project: "Unit 300".to_string(),
            drawing_no: "PID-300-001".to_string(),
            ..Titles::default()
        };
        draw_sheet(
            &mut canvas,
            SHEETS[1],
            100,
            &titles,
            &[],
            &Theme::drafting(),
            &TitleBlockConfig::default(),
        );
        let texts = texts(&canvas);
        for expected in ["PROJECT", "CUSTOMER", "TITLE", "DRAWN", "CHECKED", "APPROVED", "DATE", "SCALE", "REV", "DRAWING NO.", "SHEET"] {
            assert!(texts.iter().any(|t| t == expected), "missing {expected}");
        }
        assert!(texts.iter().any(|t| t == "1:100"));
        assert!(texts.iter().any(|t| t == "Unit 300"));
        assert!(texts.iter().any(|t| t == "PID-300-001"));
    }

    #[test]
    fn each_revision_adds_one_row() {
        let rev = |id: &str| Revision { id: id.to_string(), ..Revision::default() };
        let count_rects = |revs: &[Revision]| {
            let mut canvas = Canvas::new();
            draw_sheet(
                &mut canvas,
                SHEETS[1],
                50,
                &Titles::default(),
                revs,
                &Theme::drafting(),
                &TitleBlockConfig::default(),
            );
            canvas.shapes.len()
        };
        let none = count_rects(&[]);
        let one = count_rects(&[rev("A")]);
        let two = count_rects(&[rev("A"), rev("B")]);
        assert_eq!(one - none, two - one, "rows must grow linearly");
        assert!(one > none);
    }

    #[test]
    fn revision_rows_grow_upward() {
        let mut canvas = Canvas::new();
        let revs = vec![
            Revision { id: "A".to_string(), ..Revision::default() },
            Revision { id: "B".to_string(), ..Revision::default() },
        ];
        draw_sheet(
            &mut canvas,
            SHEETS[1],
            50,
            &Titles::default(),
            &revs,
            &Theme::drafting(),
            &TitleBlockConfig::default(),
        );
        let y_of = |id: &str| {
            canvas
                .shapes
                .iter()
                .find_map(|s| match s {
                    Shape::Text { at, content, .. } if content == id => Some(at.y),
                    _ => None,
                })
                .unwrap()
        };
        // "B" (second revision) sits above "A".
        assert!(y_of("B") < y_of("A"));
    }
}
