use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Model-space point in meters. Owned by the surrounding editor; this
/// crate only ever reads it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Drawing-plane point. Units are model meters x 2000 before the drafting
/// scale is applied (1000 model-to-mm x 2 canvas scale), so one canvas
/// unit is half a millimeter on the finished sheet.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ZERO: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Point2) -> Point2 {
        Point2::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Point2) -> Point2 {
        Point2::new(self.x - other.x, self.y - other.y)
    }

    pub fn mid(self, other: Point2) -> Point2 {
        Point2::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn dist(self, other: Point2) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn round(self) -> Point2 {
        Point2::new(self.x.round(), self.y.round())
    }
}

/// Which corner of the model the isometric camera sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsoCorner {
    Nw,
    Ne,
    Se,
    Sw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Plane,
    Isometric(IsoCorner),
}

impl ViewMode {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "plane" | "plan" => Some(Self::Plane),
            "iso-nw" => Some(Self::Isometric(IsoCorner::Nw)),
            "iso-ne" => Some(Self::Isometric(IsoCorner::Ne)),
            "iso-se" => Some(Self::Isometric(IsoCorner::Se)),
            "iso-sw" => Some(Self::Isometric(IsoCorner::Sw)),
            _ => None,
        }
    }

    pub fn is_isometric(self) -> bool {
        matches!(self, Self::Isometric(_))
    }
}

/// Screen-sector label for a segment direction, used to fake axonometric
/// perspective on flat symbols. Eight sectors: four axis-aligned
/// (right/top/left/bottom) and four open quadrants between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quarter {
    T,
    Rt,
    R,
    Rb,
    B,
    Lb,
    L,
    Lt,
}

/// Model-to-canvas factor: 1000 mm per meter times the x2 canvas scale.
pub const UNITS_PER_METER: f64 = 2000.0;

/// (sin, cos) of the 30 degree isometric axis angle.
static ISO_AXIS: Lazy<(f64, f64)> = Lazy::new(|| 30f64.to_radians().sin_cos());

/// Plan projection: drop the vertical axis, keep (x, z), scale and round.
pub fn project_plane(p: Point3) -> Point2 {
    project(ViewMode::Plane, p, 1.0, Point2::ZERO)
}

/// Isometric projection for one of the four standard corner views.
///
/// The screen vector starts as (0, p.y); the x and z coordinates each
/// contribute a horizontal vector rotated by +-30 degrees, with the sign
/// of the coordinate and the rotation direction taken from a per-corner
/// table. Opposite corners mirror each other:
/// `project_iso(p, Sw) == project_iso((-x, y, -z), Ne)`.
pub fn project_iso(p: Point3, corner: IsoCorner, coef: f64, offset: Point2) -> Point2 {
    // (x sign, x rotation dir, z sign, z rotation dir)
    let (sx, rx, sz, rz) = match corner {
        IsoCorner::Nw => (1.0, -1.0, -1.0, 1.0),
        IsoCorner::Ne => (-1.0, 1.0, 1.0, -1.0),
        IsoCorner::Se => (-1.0, -1.0, 1.0, 1.0),
        IsoCorner::Sw => (1.0, 1.0, -1.0, -1.0),
    };
    let (sin, cos) = *ISO_AXIS;
    let screen_x = sx * p.x * cos + sz * p.z * cos;
    let screen_y = p.y + rx * sx * p.x * sin + rz * sz * p.z * sin;
    let k = UNITS_PER_METER / coef;
    // Screen Y grows downward.
    Point2::new(screen_x * k + offset.x, -screen_y * k + offset.y).round()
}

/// Projects a model point for the given view. `coef` is the drafting
/// scale denominator (1 while measuring raw extents) and `offset` the
/// sheet placement in canvas units.
pub fn project(view: ViewMode, p: Point3, coef: f64, offset: Point2) -> Point2 {
    match view {
        ViewMode::Plane => {
            let k = UNITS_PER_METER / coef;
            Point2::new(p.x * k + offset.x, p.z * k + offset.y).round()
        }
        ViewMode::Isometric(corner) => project_iso(p, corner, coef, offset),
    }
}

/// Rotates a local point about the X, then Y, then Z axis, in that fixed
/// order. Angles are degrees. Used on connection-point offsets before
/// they are projected; swapping the order changes where nozzles land.
pub fn rotate_local(p: Point3, rx_deg: f64, ry_deg: f64, rz_deg: f64) -> Point3 {
    let (sx, cx) = rx_deg.to_radians().sin_cos();
    let (sy, cy) = ry_deg.to_radians().sin_cos();
    let (sz, cz) = rz_deg.to_radians().sin_cos();

    // About X.
    let p = Point3::new(p.x, p.y * cx - p.z * sx, p.y * sx + p.z * cx);
    // About Y.
    let p = Point3::new(p.x * cy + p.z * sy, p.y, -p.x * sy + p.z * cy);
    // About Z.
    Point3::new(p.x * cz - p.y * sz, p.x * sz + p.y * cz, p.z)
}

/// Buckets the direction from `start` to `end` into one of the eight
/// screen sectors. The angle is rounded to whole degrees first, so the
/// four axis labels are hit exactly on 0/90/180/270.
///
/// A zero-length segment has no direction; `atan2(0, 0)` is 0, so such
/// segments deliberately fall back to `R` instead of producing an
/// undefined sector.
pub fn quarter(start: Point2, end: Point2) -> Quarter {
    let angle = (end.y - start.y).atan2(end.x - start.x).to_degrees();
    let mut deg = angle.round() as i32 % 360;
    if deg < 0 {
        deg += 360;
    }
    match deg {
        0 => Quarter::R,
        90 => Quarter::T,
        180 => Quarter::L,
        270 => Quarter::B,
        1..=89 => Quarter::Rb,
        91..=179 => Quarter::Lb,
        181..=269 => Quarter::Lt,
        _ => Quarter::Rt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_projection_is_linear() {
        assert_eq!(project_plane(Point3::new(0.0, 0.0, 0.0)), Point2::new(0.0, 0.0));
        assert_eq!(project_plane(Point3::new(1.0, 5.0, 2.0)), Point2::new(2000.0, 4000.0));
    }

    #[test]
    fn iso_opposite_corners_mirror() {
        let p = Point3::new(1.3, 0.7, -2.1);
        let m = Point3::new(-1.3, 0.7, 2.1);
        assert_eq!(
            project_iso(p, IsoCorner::Sw, 1.0, Point2::ZERO),
            project_iso(m, IsoCorner::Ne, 1.0, Point2::ZERO)
        );
        assert_eq!(
            project_iso(p, IsoCorner::Se, 1.0, Point2::ZERO),
            project_iso(m, IsoCorner::Nw, 1.0, Point2::ZERO)
        );
    }

    #[test]
    fn iso_vertical_axis_goes_straight_up() {
        let base = project_iso(Point3::new(0.0, 0.0, 0.0), IsoCorner::Ne, 1.0, Point2::ZERO);
        let top = project_iso(Point3::new(0.0, 1.0, 0.0), IsoCorner::Ne, 1.0, Point2::ZERO);
        assert_eq!(top.x, base.x);
        assert!(top.y < base.y, "screen Y must grow downward");
    }

    #[test]
    fn iso_scale_and_offset_apply() {
        let p = Point3::new(2.0, 0.0, 0.0);
        let raw = project_iso(p, IsoCorner::Sw, 1.0, Point2::ZERO);
        let scaled = project_iso(p, IsoCorner::Sw, 2.0, Point2::new(100.0, 50.0));
        assert_eq!(scaled.x, (raw.x / 2.0 + 100.0).round());
        assert_eq!(scaled.y, (raw.y / 2.0 + 50.0).round());
    }

    #[test]
    fn rotation_order_is_x_then_y_then_z() {
        // Rotating (1,0,0) by 90 about X leaves it alone, then 90 about Y
        // sends it to -z; swapping the order would give +y instead.
        let p = rotate_local(Point3::new(1.0, 0.0, 0.0), 90.0, 90.0, 0.0);
        assert!((p.x).abs() < 1e-9);
        assert!((p.y).abs() < 1e-9);
        assert!((p.z + 1.0).abs() < 1e-9);
    }

    #[test]
    fn quarter_axis_angles_map_exactly() {
        let o = Point2::ZERO;
        assert_eq!(quarter(o, Point2::new(10.0, 0.0)), Quarter::R);
        assert_eq!(quarter(o, Point2::new(0.0, 10.0)), Quarter::T);
        assert_eq!(quarter(o, Point2::new(-10.0, 0.0)), Quarter::L);
        assert_eq!(quarter(o, Point2::new(0.0, -10.0)), Quarter::B);
    }

    #[test]
    fn quarter_is_total_over_the_circle() {
        let o = Point2::ZERO;
        for deg in 0..360 {
            let a = (deg as f64).to_radians();
            let q = quarter(o, Point2::new(a.cos() * 100.0, a.sin() * 100.0));
            let expected = match deg {
                0 => Quarter::R,
                90 => Quarter::T,
                180 => Quarter::L,
                270 => Quarter::B,
                1..=89 => Quarter::Rb,
                91..=179 => Quarter::Lb,
                181..=269 => Quarter::Lt,
                _ => Quarter::Rt,
            };
            assert_eq!(q, expected, "degree {deg}");
        }
    }

    #[test]
    fn quarter_of_degenerate_segment_defaults_to_r() {
        let p = Point2::new(42.0, 7.0);
        assert_eq!(quarter(p, p), Quarter::R);
    }
}
