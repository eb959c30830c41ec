use crate::geom::Point2;
use crate::model::ModelError;

/// Standard drafting scales, "1:N", ascending. A selected scale is always
/// a member of this table, never interpolated.
pub const SCALES: [u32; 12] = [2, 5, 10, 20, 50, 100, 200, 500, 1000, 2000, 5000, 10000];

/// Sheet margins in millimeters. The left margin is wider for binding.
pub const MARGIN_LEFT: f64 = 20.0;
pub const MARGIN_RIGHT: f64 = 20.0;
pub const MARGIN_TOP: f64 = 10.0;
pub const MARGIN_BOTTOM: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetSize {
    pub label: &'static str,
    pub width_mm: f64,
    pub height_mm: f64,
}

impl SheetSize {
    pub fn usable_width(&self) -> f64 {
        self.width_mm - MARGIN_LEFT - MARGIN_RIGHT
    }

    pub fn usable_height(&self) -> f64 {
        self.height_mm - MARGIN_TOP - MARGIN_BOTTOM
    }
}

/// Landscape sheets offered for flowsheets.
pub const SHEETS: [SheetSize; 3] = [
    SheetSize { label: "A4", width_mm: 297.0, height_mm: 210.0 },
    SheetSize { label: "A3", width_mm: 420.0, height_mm: 297.0 },
    SheetSize { label: "A2", width_mm: 594.0, height_mm: 420.0 },
];

/// Isometric spool sheets go further up the A series.
pub const ISO_SHEETS: [SheetSize; 5] = [
    SheetSize { label: "A4", width_mm: 297.0, height_mm: 210.0 },
    SheetSize { label: "A3", width_mm: 420.0, height_mm: 297.0 },
    SheetSize { label: "A2", width_mm: 594.0, height_mm: 420.0 },
    SheetSize { label: "A1", width_mm: 841.0, height_mm: 594.0 },
    SheetSize { label: "A0", width_mm: 1189.0, height_mm: 841.0 },
];

pub fn sheet_by_label(label: &str, isometric: bool) -> Result<SheetSize, ModelError> {
    let catalog: &[SheetSize] = if isometric { &ISO_SHEETS } else { &SHEETS };
    catalog
        .iter()
        .find(|s| s.label.eq_ignore_ascii_case(label))
        .copied()
        .ok_or_else(|| ModelError::UnknownSheet(label.to_string()))
}

/// Scale selection always measures against one canonical sheet (A3 minus
/// margins) so that switching the output sheet never reshuffles scales.
const REFERENCE_SHEET: SheetSize = SHEETS[1];

/// Picks the drafting scale for a drawing whose raw 2D extent (width,
/// height in canvas units) is `extent`: the smallest table entry that
/// still fits the reference usable area. Monotonic in the extent; clamped
/// to the ends of the table.
pub fn select_scale(extent: Point2) -> u32 {
    let need_v = extent.y / REFERENCE_SHEET.usable_height();
    let need_h = extent.x / REFERENCE_SHEET.usable_width();
    let need = need_v.max(need_h);

    let mut prev = 0.0;
    for &scale in SCALES.iter() {
        if need > prev && need <= scale as f64 {
            return scale;
        }
        prev = scale as f64;
    }
    if need <= SCALES[0] as f64 {
        SCALES[0]
    } else {
        SCALES[SCALES.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_extent_selects_smallest_scale() {
        assert_eq!(select_scale(Point2::ZERO), 2);
    }

    #[test]
    fn selection_walks_the_table() {
        // 10 m of pipe on the reference A3: 20000 / 380 ~ 52.6 -> 1:100.
        assert_eq!(select_scale(Point2::new(20000.0, 0.0)), 100);
        // Just inside 1:50 horizontally.
        assert_eq!(select_scale(Point2::new(50.0 * 380.0, 0.0)), 50);
        // Vertical extent governs when it is the worse fit.
        assert_eq!(select_scale(Point2::new(100.0, 267.0 * 120.0)), 200);
    }

    #[test]
    fn selection_clamps_to_table_ends() {
        assert_eq!(select_scale(Point2::new(1.0, 1.0)), 2);
        assert_eq!(select_scale(Point2::new(1.0e9, 1.0e9)), 10000);
    }

    #[test]
    fn selection_is_monotonic() {
        let mut last = 0;
        for step in 0..200 {
            let extent = Point2::new(step as f64 * 25000.0, step as f64 * 12000.0);
            let scale = select_scale(extent);
            assert!(scale >= last, "extent step {step} shrank the scale");
            last = scale;
        }
    }

    #[test]
    fn sheet_lookup_honours_the_catalogs() {
        assert_eq!(sheet_by_label("a3", false).unwrap().width_mm, 420.0);
        assert!(sheet_by_label("A0", false).is_err());
        assert_eq!(sheet_by_label("A0", true).unwrap().height_mm, 841.0);
    }
}
