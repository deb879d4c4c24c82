//! Composite glyphs built from four independently treated sides.

use glam::DVec2;

use super::geometry::{GlyphBox, SideId, SideTreatment, side_path};
use super::{Glyph, GlyphShape};
use crate::errors::ShapeError;
use crate::path::PathData;
use crate::types::{FeatureFrame, positive};

/// Open interval of accepted scaling factors. At either bound the inward
/// apexes of opposite sides meet: TOP and BOTTOM at the upper bound, LEFT
/// and RIGHT at the lower one.
pub const SCALING_FACTOR_RANGE: (f64, f64) =
    (std::f64::consts::SQRT_2 - 1.0, std::f64::consts::SQRT_2 + 1.0);

/// Validate a scaling factor given for `field`.
pub(crate) fn check_scaling_factor(field: &'static str, value: f64) -> Result<f64, ShapeError> {
    let value = positive(value).map_err(ShapeError::invalid(field))?;
    let (min, max) = SCALING_FACTOR_RANGE;
    if value <= min || value >= max {
        return Err(ShapeError::ScalingFactorOutOfRange { value });
    }
    Ok(value)
}

/// Side treatments for a composite glyph.
///
/// There is one `rl` treatment for both vertical sides: RIGHT is always the
/// mirror image of LEFT.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeShapeSpec {
    pub rl: SideTreatment,
    pub top: SideTreatment,
    pub bottom: SideTreatment,
    pub scaling_factor: f64,
}

impl CompositeShapeSpec {
    /// Build from typed treatments, validating the scaling factor against
    /// [`SCALING_FACTOR_RANGE`].
    pub fn new(
        rl: SideTreatment,
        top: SideTreatment,
        bottom: SideTreatment,
        scaling_factor: f64,
    ) -> Result<Self, ShapeError> {
        Ok(Self {
            rl,
            top,
            bottom,
            scaling_factor: check_scaling_factor("scaling_factor", scaling_factor)?,
        })
    }

    /// Build from raw external codes. Any out-of-range code is an error.
    pub fn from_codes(rl: i64, top: i64, bottom: i64, scaling_factor: f64) -> Result<Self, ShapeError> {
        Self::new(
            SideTreatment::try_from(rl)?,
            SideTreatment::try_from(top)?,
            SideTreatment::try_from(bottom)?,
            scaling_factor,
        )
    }

    /// Treatment applied to `side`.
    pub fn treatment(&self, side: SideId) -> SideTreatment {
        match side {
            SideId::Left | SideId::Right => self.rl,
            SideId::Top => self.top,
            SideId::Bottom => self.bottom,
        }
    }

    /// Nominal box size for a glyph of the given height.
    pub fn box_size(&self, glyph_height: f64) -> f64 {
        glyph_height * self.scaling_factor
    }
}

/// Builder for [`CompositeShapeSpec`] glyphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeShape {
    pub spec: CompositeShapeSpec,
}

impl CompositeShape {
    /// The box the outline is drawn around, anchored at the feature origin.
    pub fn glyph_box(&self, frame: &FeatureFrame) -> GlyphBox {
        GlyphBox::new(DVec2::ZERO, self.spec.box_size(frame.glyph_height), frame.glyph_height)
    }

    /// One closed contour: LEFT, TOP, RIGHT, BOTTOM.
    pub fn outline(&self, bx: &GlyphBox) -> PathData {
        let mut path = PathData::new();
        for side in SideId::TRAVERSAL {
            path.append(side_path(side, self.spec.treatment(side), bx));
        }
        path
    }
}

impl GlyphShape for CompositeShape {
    fn build(&self, frame: &FeatureFrame) -> Glyph {
        let bx = self.glyph_box(frame);
        crate::log::trace!(
            box_size = bx.width(),
            height = bx.height(),
            rl = ?self.spec.rl,
            top = ?self.spec.top,
            bottom = ?self.spec.bottom,
            "composite glyph"
        );

        let outline = self.outline(&bx);
        // A feature narrower than the box has nothing left to connect
        let reaches_past_box = frame.feature_width() > bx.max.x;
        let connector = (frame.is_multi_residue() && reaches_past_box).then(|| {
            let from = bx.right_mid();
            crate::log::trace!(from_x = from.x, to_x = frame.feature_width(), "composite connector");
            PathData::new().m_to(from).h(frame.feature_width())
        });

        Glyph { outline, connector }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CodeKind;
    use glam::dvec2;

    fn frame(feature_length: u32) -> FeatureFrame {
        FeatureFrame {
            pixels_per_residue: 10.0,
            glyph_height: 10.0,
            feature_length,
        }
    }

    fn composite(rl: SideTreatment, top: SideTreatment, bottom: SideTreatment) -> CompositeShape {
        CompositeShape {
            spec: CompositeShapeSpec::new(rl, top, bottom, 1.2).unwrap(),
        }
    }

    #[test]
    fn all_line_is_a_box() {
        let glyph = composite(SideTreatment::Line, SideTreatment::Line, SideTreatment::Line).build(&frame(1));
        assert_eq!(glyph.outline.to_string(), "M0 10 V0 H12 V10 Z");
        assert!(glyph.connector.is_none());
    }

    #[test]
    fn treatment_lookup_shares_rl() {
        let spec = CompositeShapeSpec::new(
            SideTreatment::CurveOut,
            SideTreatment::OneEdgeIn,
            SideTreatment::TwoEdgeOut,
            1.0,
        )
        .unwrap();
        assert_eq!(spec.treatment(SideId::Left), SideTreatment::CurveOut);
        assert_eq!(spec.treatment(SideId::Right), SideTreatment::CurveOut);
        assert_eq!(spec.treatment(SideId::Top), SideTreatment::OneEdgeIn);
        assert_eq!(spec.treatment(SideId::Bottom), SideTreatment::TwoEdgeOut);
    }

    #[test]
    fn from_codes_rejects_before_building() {
        assert_eq!(
            CompositeShapeSpec::from_codes(0, 7, 0, 1.2),
            Err(ShapeError::InvalidShapeCode {
                kind: CodeKind::Treatment,
                code: 7
            })
        );
        assert!(CompositeShapeSpec::from_codes(2, 4, 6, 1.2).is_ok());
    }

    #[test]
    fn negative_scaling_factor_is_rejected() {
        let err = CompositeShapeSpec::from_codes(0, 0, 0, -1.0).unwrap_err();
        assert!(matches!(err, ShapeError::InvalidRequest { field: "scaling_factor", .. }));
    }

    #[test]
    fn scaling_factor_outside_range_is_rejected() {
        for value in [0.3, SCALING_FACTOR_RANGE.0, SCALING_FACTOR_RANGE.1, 3.0] {
            assert_eq!(
                CompositeShapeSpec::from_codes(0, 3, 3, value),
                Err(ShapeError::ScalingFactorOutOfRange { value }),
                "{value}"
            );
        }
        assert!(matches!(
            CompositeShapeSpec::from_codes(0, 3, 3, 0.0),
            Err(ShapeError::InvalidRequest { field: "scaling_factor", .. })
        ));
        assert!(CompositeShapeSpec::from_codes(0, 3, 3, 0.5).is_ok());
        assert!(CompositeShapeSpec::from_codes(0, 3, 3, 2.4).is_ok());
    }

    #[test]
    fn inward_notches_stay_apart_at_the_largest_factor() {
        let shape = CompositeShape {
            spec: CompositeShapeSpec::from_codes(3, 3, 3, 2.4).unwrap(),
        };
        let v = shape.build(&frame(1)).outline.vertices();
        let (left, top, right, bottom) = (v[1], v[3], v[5], v[7]);
        assert!(top.y < bottom.y, "{top:?} {bottom:?}");
        assert!(left.x < right.x, "{left:?} {right:?}");
    }

    #[test]
    fn scaling_factor_sets_box_width() {
        let shape = CompositeShape {
            spec: CompositeShapeSpec::from_codes(0, 0, 0, 2.0).unwrap(),
        };
        let bx = shape.glyph_box(&frame(1));
        assert_eq!(bx.max, dvec2(20.0, 10.0));
    }

    #[test]
    fn multi_residue_gets_a_connector() {
        let glyph = composite(SideTreatment::OneEdgeOut, SideTreatment::Line, SideTreatment::Line).build(&frame(5));
        let connector = glyph.connector.expect("connector for a 5-residue feature");
        assert_eq!(connector.to_string(), "M12 5 H50");
        assert!(glyph.outline.is_closed());
        assert_eq!(glyph.outline.subpath_count(), 1);
    }

    #[test]
    fn feature_narrower_than_box_has_no_connector() {
        let narrow = FeatureFrame {
            pixels_per_residue: 2.0,
            glyph_height: 10.0,
            feature_length: 3,
        };
        let glyph = composite(SideTreatment::Line, SideTreatment::Line, SideTreatment::Line).build(&narrow);
        assert!(glyph.connector.is_none());
        assert_eq!(glyph.into_path().to_string(), "M0 10 V0 H12 V10 Z");

        // Exactly as wide as the box
        let flush = FeatureFrame {
            pixels_per_residue: 4.0,
            ..narrow
        };
        let glyph = composite(SideTreatment::Line, SideTreatment::Line, SideTreatment::Line).build(&flush);
        assert!(glyph.connector.is_none());
    }

    #[test]
    fn zero_length_has_no_connector() {
        let glyph = composite(SideTreatment::Line, SideTreatment::Line, SideTreatment::Line).build(&frame(0));
        assert!(glyph.connector.is_none());
    }
}
