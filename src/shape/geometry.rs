//! Geometry functions: circumscribed radius, margin and per-side paths
//!
//! A composite glyph is a box whose four sides are each drawn with their own
//! [`SideTreatment`]. Sides are emitted as one clockwise contour (SVG y-down):
//!
//! ```text
//!   (x0,y0) ──TOP──▶ (x1,y0)
//!      ▲                │
//!    LEFT             RIGHT
//!      │                ▼
//!   (x0,y1) ◀─BOTTOM─ (x1,y1)
//! ```
//!
//! LEFT opens the subpath at the bottom-left corner, BOTTOM closes it. With a
//! clockwise traversal an arc with sweep flag 1 bulges away from the box, so
//! the same flag works for every side.
//!
//! Arc radius and notch margin are taken from the length of the side being
//! drawn. Every arc is then a quarter circle and every notch apex reaches the
//! arc's extremal point, whatever the box's aspect ratio.

use glam::{DVec2, dvec2};

use crate::errors::{CodeKind, ShapeError};
use crate::path::PathData;

/// Radius of the circle through the corners of a square of side `size`.
pub fn circumscribed_radius(size: f64) -> f64 {
    size * std::f64::consts::SQRT_2 / 2.0
}

/// How far the circumscribed circle reaches past the square's side midpoint.
/// Notch apexes are offset from the box by this much.
pub fn margin(size: f64) -> f64 {
    circumscribed_radius(size) - size / 2.0
}

/// One side of a glyph box. Discriminants are the stable external codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SideId {
    Right = 0,
    Left = 1,
    Top = 2,
    Bottom = 3,
}

impl SideId {
    /// Emission order: each side starts where the previous one ended.
    pub const TRAVERSAL: [SideId; 4] = [SideId::Left, SideId::Top, SideId::Right, SideId::Bottom];
}

impl TryFrom<i64> for SideId {
    type Error = ShapeError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(SideId::Right),
            1 => Ok(SideId::Left),
            2 => Ok(SideId::Top),
            3 => Ok(SideId::Bottom),
            _ => Err(ShapeError::InvalidShapeCode {
                kind: CodeKind::Side,
                code,
            }),
        }
    }
}

/// Motif applied to one side. Discriminants are the stable external codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SideTreatment {
    Line = 0,
    CurveIn = 1,
    CurveOut = 2,
    OneEdgeIn = 3,
    OneEdgeOut = 4,
    TwoEdgeIn = 5,
    TwoEdgeOut = 6,
}

impl SideTreatment {
    pub const ALL: [SideTreatment; 7] = [
        SideTreatment::Line,
        SideTreatment::CurveIn,
        SideTreatment::CurveOut,
        SideTreatment::OneEdgeIn,
        SideTreatment::OneEdgeOut,
        SideTreatment::TwoEdgeIn,
        SideTreatment::TwoEdgeOut,
    ];

    /// Convex (away from the box centre) rather than concave.
    pub fn is_outward(self) -> bool {
        matches!(
            self,
            SideTreatment::CurveOut | SideTreatment::OneEdgeOut | SideTreatment::TwoEdgeOut
        )
    }
}

impl TryFrom<i64> for SideTreatment {
    type Error = ShapeError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        SideTreatment::ALL
            .into_iter()
            .find(|t| *t as i64 == code)
            .ok_or(ShapeError::InvalidShapeCode {
                kind: CodeKind::Treatment,
                code,
            })
    }
}

/// Axis-aligned box a composite glyph is drawn around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphBox {
    pub min: DVec2,
    pub max: DVec2,
}

impl GlyphBox {
    /// `box_size` wide, `height` tall, top-left corner at `origin`.
    pub fn new(origin: DVec2, box_size: f64, height: f64) -> Self {
        Self {
            min: origin,
            max: origin + dvec2(box_size, height),
        }
    }

    /// Length of `side`: the height for LEFT and RIGHT, the width otherwise.
    pub fn side_length(&self, side: SideId) -> f64 {
        match side {
            SideId::Left | SideId::Right => self.height(),
            SideId::Top | SideId::Bottom => self.width(),
        }
    }

    /// Arc radius for `side`.
    pub fn radius(&self, side: SideId) -> f64 {
        circumscribed_radius(self.side_length(side))
    }

    /// Notch apex offset for `side`.
    pub fn margin(&self, side: SideId) -> f64 {
        margin(self.side_length(side))
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) / 2.0
    }

    /// Midpoint of the right side, where a connector leaves the glyph.
    pub fn right_mid(&self) -> DVec2 {
        dvec2(self.max.x, self.center().y)
    }
}

/// Emit the commands for one side of `bx`.
///
/// The LEFT side starts with a `MoveTo`; every other side continues from the
/// corner the previous side in [`SideId::TRAVERSAL`] ended on. BOTTOM always
/// finishes with `ClosePath`.
pub fn side_path(side: SideId, treatment: SideTreatment, bx: &GlyphBox) -> PathData {
    let (x0, y0) = (bx.min.x, bx.min.y);
    let (x1, y1) = (bx.max.x, bx.max.y);
    let mid = bx.center();

    // Signed offset of notch apexes: positive pushes away from the centre
    let o = if treatment.is_outward() { bx.margin(side) } else { -bx.margin(side) };
    let r = bx.radius(side);
    let sweep = treatment.is_outward();

    // Quarter points along each axis
    let qx = (x0 + bx.width() / 4.0, x1 - bx.width() / 4.0);
    let qy = (y0 + bx.height() / 4.0, y1 - bx.height() / 4.0);

    let start = match side {
        SideId::Left => PathData::new().m(x0, y1),
        _ => PathData::new(),
    };

    use SideTreatment::*;
    match (side, treatment) {
        (SideId::Left, Line) => start.v(y0),
        (SideId::Left, CurveIn | CurveOut) => start.a(r, sweep, x0, y0),
        (SideId::Left, OneEdgeIn | OneEdgeOut) => start.l(x0 - o, mid.y).l(x0, y0),
        (SideId::Left, TwoEdgeIn | TwoEdgeOut) => start.l(x0 - o, qy.1).v(qy.0).l(x0, y0),

        (SideId::Top, Line) => start.h(x1),
        (SideId::Top, CurveIn | CurveOut) => start.a(r, sweep, x1, y0),
        (SideId::Top, OneEdgeIn | OneEdgeOut) => start.l(mid.x, y0 - o).l(x1, y0),
        (SideId::Top, TwoEdgeIn | TwoEdgeOut) => start.l(qx.0, y0 - o).h(qx.1).l(x1, y0),

        (SideId::Right, Line) => start.v(y1),
        (SideId::Right, CurveIn | CurveOut) => start.a(r, sweep, x1, y1),
        (SideId::Right, OneEdgeIn | OneEdgeOut) => start.l(x1 + o, mid.y).l(x1, y1),
        (SideId::Right, TwoEdgeIn | TwoEdgeOut) => start.l(x1 + o, qy.0).v(qy.1).l(x1, y1),

        // The close draws the last edge back to (x0, y1)
        (SideId::Bottom, Line) => start.z(),
        (SideId::Bottom, CurveIn | CurveOut) => start.a(r, sweep, x0, y1).z(),
        (SideId::Bottom, OneEdgeIn | OneEdgeOut) => start.l(mid.x, y1 + o).z(),
        (SideId::Bottom, TwoEdgeIn | TwoEdgeOut) => start.l(qx.1, y1 + o).h(qx.0).z(),
    }
}
