//! Named glyphs: the rectangle fallback and the four triangles.
//!
//! Triangles are `symbol_size` square, centred on the first residue and
//! topped at `y = 0`. A single-residue triangle is a plain arrowhead; a longer
//! feature adds a shaft running to the far edge of the feature, and the close
//! runs back along that shaft so the filled area stays the arrowhead.

use super::{Glyph, GlyphShape};
use crate::path::PathData;
use crate::types::FeatureFrame;

/// The closed catalogue of named glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NamedShape {
    #[default]
    Rectangle,
    TriangleUp,
    TriangleDown,
    TriangleLeft,
    TriangleRight,
}

impl NamedShape {
    /// Look up a shape by name. Accepts the kebab names and the legacy
    /// camelCase names found in older track configuration.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "rectangle" => Some(NamedShape::Rectangle),
            "triangle-up" | "triangle" | "triangleTop" => Some(NamedShape::TriangleUp),
            "triangle-down" | "triangleBottom" => Some(NamedShape::TriangleDown),
            "triangle-left" | "triangleLeft" => Some(NamedShape::TriangleLeft),
            "triangle-right" | "triangleRight" => Some(NamedShape::TriangleRight),
            _ => None,
        }
    }

    /// Like [`from_name`](Self::from_name), but unknown or blank names become
    /// [`NamedShape::Rectangle`].
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            crate::log::debug!(name, "unknown shape name, falling back to rectangle");
            NamedShape::Rectangle
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            NamedShape::Rectangle => "rectangle",
            NamedShape::TriangleUp => "triangle-up",
            NamedShape::TriangleDown => "triangle-down",
            NamedShape::TriangleLeft => "triangle-left",
            NamedShape::TriangleRight => "triangle-right",
        }
    }
}

// ============================================================================
// Builders
// ============================================================================

/// Full-width rectangle, the universal fallback.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle;

impl GlyphShape for Rectangle {
    fn build(&self, frame: &FeatureFrame) -> Glyph {
        let w = frame.feature_width();
        let h = frame.glyph_height;
        Glyph::from_outline(PathData::new().m(0.0, 0.0).h(w).v(h).h(0.0).z())
    }
}

/// Apex at the top, base on the bottom row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleUp {
    pub symbol_size: f64,
}

impl GlyphShape for TriangleUp {
    fn build(&self, frame: &FeatureFrame) -> Glyph {
        let s = self.symbol_size;
        let c = s / 2.0;
        let m = frame.first_residue_center();

        let path = PathData::new().m(m - c, s).l(m, 0.0).l(m + c, s);
        let path = if frame.is_multi_residue() {
            path.l(frame.feature_width(), s).z()
        } else {
            path.z()
        };
        Glyph::from_outline(path)
    }
}

/// Apex at the bottom. The base lies on the origin row and is drawn
/// explicitly, so this has one segment more than [`TriangleUp`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleDown {
    pub symbol_size: f64,
}

impl GlyphShape for TriangleDown {
    fn build(&self, frame: &FeatureFrame) -> Glyph {
        let s = self.symbol_size;
        let c = s / 2.0;
        let m = frame.first_residue_center();

        let path = PathData::new().m(m - c, 0.0).l(m, s).l(m + c, 0.0);
        let path = if frame.is_multi_residue() {
            path.h(frame.feature_width()).h(m - c).z()
        } else {
            path.h(m - c).z()
        };
        Glyph::from_outline(path)
    }
}

/// Apex pointing left; the shaft leaves from the middle of the back edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleLeft {
    pub symbol_size: f64,
}

impl GlyphShape for TriangleLeft {
    fn build(&self, frame: &FeatureFrame) -> Glyph {
        let s = self.symbol_size;
        let c = s / 2.0;
        let m = frame.first_residue_center();

        let path = PathData::new().m(m - c, c).l(m + c, 0.0).l(m + c, s);
        let path = if frame.is_multi_residue() {
            path.v(c).h(frame.feature_width()).z()
        } else {
            path.z()
        };
        Glyph::from_outline(path)
    }
}

/// Apex pointing right; the shaft leaves from the apex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleRight {
    pub symbol_size: f64,
}

impl GlyphShape for TriangleRight {
    fn build(&self, frame: &FeatureFrame) -> Glyph {
        let s = self.symbol_size;
        let c = s / 2.0;
        let m = frame.first_residue_center();

        let path = PathData::new().m(m + c, c).l(m - c, s).l(m - c, 0.0);
        let path = if frame.is_multi_residue() {
            path.l(m + c, c).h(frame.feature_width()).z()
        } else {
            path.z()
        };
        Glyph::from_outline(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(feature_length: u32) -> FeatureFrame {
        FeatureFrame {
            pixels_per_residue: 10.0,
            glyph_height: 10.0,
            feature_length,
        }
    }

    #[test]
    fn names_resolve() {
        assert_eq!(NamedShape::from_name("triangle-up"), Some(NamedShape::TriangleUp));
        assert_eq!(NamedShape::from_name("triangleTop"), Some(NamedShape::TriangleUp));
        assert_eq!(NamedShape::from_name(" triangleBottom "), Some(NamedShape::TriangleDown));
        assert_eq!(NamedShape::from_name("triangle-left"), Some(NamedShape::TriangleLeft));
        assert_eq!(NamedShape::from_name("triangleRight"), Some(NamedShape::TriangleRight));
        assert_eq!(NamedShape::from_name("diamond"), None);
    }

    #[test]
    fn unknown_and_blank_names_fall_back() {
        assert_eq!(NamedShape::from_name_or_default("hexagon"), NamedShape::Rectangle);
        assert_eq!(NamedShape::from_name_or_default(""), NamedShape::Rectangle);
        assert_eq!(NamedShape::from_name_or_default("   "), NamedShape::Rectangle);
    }

    #[test]
    fn canonical_names_parse_back() {
        for shape in [
            NamedShape::Rectangle,
            NamedShape::TriangleUp,
            NamedShape::TriangleDown,
            NamedShape::TriangleLeft,
            NamedShape::TriangleRight,
        ] {
            assert_eq!(NamedShape::from_name(shape.name()), Some(shape));
        }
    }

    #[test]
    fn rectangle_spans_feature() {
        let glyph = Rectangle.build(&frame(3));
        assert_eq!(glyph.outline.to_string(), "M0 0 H30 V10 H0 Z");
        assert!(glyph.connector.is_none());
    }

    #[test]
    fn rectangle_of_zero_length_is_degenerate_but_valid() {
        let glyph = Rectangle.build(&frame(0));
        assert_eq!(glyph.outline.to_string(), "M0 0 H0 V10 H0 Z");
        assert!(glyph.outline.is_closed());
    }

    #[test]
    fn triangle_down_has_one_extra_segment() {
        for len in [1, 4] {
            let up = TriangleUp { symbol_size: 10.0 }.build(&frame(len));
            let down = TriangleDown { symbol_size: 10.0 }.build(&frame(len));
            assert_eq!(down.outline.drawn_segments(), up.outline.drawn_segments() + 1, "len {len}");
        }
    }

    #[test]
    fn triangle_down_points_down() {
        let glyph = TriangleDown { symbol_size: 10.0 }.build(&frame(1));
        assert_eq!(glyph.outline.to_string(), "M0 0 L5 10 L10 0 H0 Z");
    }

    #[test]
    fn side_triangles_single_residue() {
        let left = TriangleLeft { symbol_size: 10.0 }.build(&frame(1));
        assert_eq!(left.outline.to_string(), "M0 5 L10 0 L10 10 Z");
        let right = TriangleRight { symbol_size: 10.0 }.build(&frame(1));
        assert_eq!(right.outline.to_string(), "M10 5 L0 10 L0 0 Z");
    }

    #[test]
    fn side_triangles_close_along_the_shaft() {
        let left = TriangleLeft { symbol_size: 10.0 }.build(&frame(4));
        assert_eq!(left.outline.to_string(), "M0 5 L10 0 L10 10 V5 H40 Z");
        let right = TriangleRight { symbol_size: 10.0 }.build(&frame(4));
        assert_eq!(right.outline.to_string(), "M10 5 L0 10 L0 0 L10 5 H40 Z");

        // The shaft and the close are on the same row as the start point
        for glyph in [left, right] {
            let v = glyph.outline.vertices();
            let start = v[0];
            let shaft_end = v[v.len() - 2];
            assert_eq!(shaft_end.y, start.y);
        }
    }

    #[test]
    fn triangles_scale_with_symbol_size() {
        let glyph = TriangleUp { symbol_size: 6.0 }.build(&frame(1));
        assert_eq!(glyph.outline.to_string(), "M2 6 L5 0 L8 6 Z");
    }
}
