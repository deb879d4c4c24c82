//! Validated request types and the per-call feature frame.
//!
//! Everything a builder reads is threaded through [`FeatureFrame`]; nothing is
//! stashed on the builder between calls.

use std::fmt;

use crate::config::GlyphConfig;
use crate::errors::ShapeError;
use crate::shape::{ShapeDescriptor, ShapeSpec};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Accept finite values strictly greater than zero.
#[inline]
pub fn positive(val: f64) -> Result<f64, NumericError> {
    let val = non_negative(val)?;
    if val == 0.0 { Err(NumericError::Zero) } else { Ok(val) }
}

/// Accept finite values greater than or equal to zero.
#[inline]
pub fn non_negative(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// One glyph draw call: feature geometry plus the shape to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeRequest {
    pixels_per_residue: f64,
    glyph_height: f64,
    feature_length: u32,
    shape: ShapeSpec,
}

impl ShapeRequest {
    /// Create a request, rejecting non-finite or non-positive scale and height.
    ///
    /// A `feature_length` of zero is accepted; it produces a zero-width glyph.
    pub fn new(
        pixels_per_residue: f64,
        glyph_height: f64,
        feature_length: u32,
        shape: ShapeSpec,
    ) -> Result<Self, ShapeError> {
        Ok(Self {
            pixels_per_residue: positive(pixels_per_residue)
                .map_err(ShapeError::invalid("pixels_per_residue"))?,
            glyph_height: positive(glyph_height).map_err(ShapeError::invalid("glyph_height"))?,
            feature_length,
            shape,
        })
    }

    /// Create a request from a loosely-typed descriptor, as found in track
    /// configuration or per-feature data.
    pub fn from_descriptor(
        pixels_per_residue: f64,
        glyph_height: f64,
        feature_length: u32,
        descriptor: &ShapeDescriptor,
        config: &GlyphConfig,
    ) -> Result<Self, ShapeError> {
        let shape = ShapeSpec::resolve(descriptor, config)?;
        Self::new(pixels_per_residue, glyph_height, feature_length, shape)
    }

    pub fn pixels_per_residue(&self) -> f64 {
        self.pixels_per_residue
    }

    pub fn glyph_height(&self) -> f64 {
        self.glyph_height
    }

    pub fn feature_length(&self) -> u32 {
        self.feature_length
    }

    pub fn shape(&self) -> &ShapeSpec {
        &self.shape
    }

    /// The pixel geometry builders work from.
    pub fn frame(&self) -> FeatureFrame {
        FeatureFrame {
            pixels_per_residue: self.pixels_per_residue,
            glyph_height: self.glyph_height,
            feature_length: self.feature_length,
        }
    }
}

/// Pixel geometry of one feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureFrame {
    pub pixels_per_residue: f64,
    pub glyph_height: f64,
    pub feature_length: u32,
}

impl FeatureFrame {
    /// Full pixel width of the feature.
    pub fn feature_width(&self) -> f64 {
        self.pixels_per_residue * f64::from(self.feature_length)
    }

    /// Centre of the first residue, where single-residue glyphs are anchored.
    pub fn first_residue_center(&self) -> f64 {
        self.pixels_per_residue / 2.0
    }

    /// True when the feature spans more than one residue and needs a shaft or
    /// connector.
    pub fn is_multi_residue(&self) -> bool {
        self.feature_length > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::NamedShape;

    fn rect() -> ShapeSpec {
        ShapeSpec::Named(NamedShape::Rectangle)
    }

    #[test]
    fn validators_reject_bad_values() {
        assert_eq!(positive(f64::NAN), Err(NumericError::NaN));
        assert_eq!(positive(f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(positive(0.0), Err(NumericError::Zero));
        assert_eq!(positive(-1.0), Err(NumericError::Negative));
        assert_eq!(positive(2.5), Ok(2.5));
        assert_eq!(non_negative(0.0), Ok(0.0));
        assert_eq!(non_negative(-0.5), Err(NumericError::Negative));
    }

    #[test]
    fn request_reports_the_offending_field() {
        let err = ShapeRequest::new(0.0, 10.0, 1, rect()).unwrap_err();
        assert_eq!(
            err,
            ShapeError::InvalidRequest {
                field: "pixels_per_residue",
                source: NumericError::Zero
            }
        );

        let err = ShapeRequest::new(10.0, f64::NAN, 1, rect()).unwrap_err();
        assert_eq!(
            err,
            ShapeError::InvalidRequest {
                field: "glyph_height",
                source: NumericError::NaN
            }
        );
    }

    #[test]
    fn zero_length_feature_is_accepted() {
        let req = ShapeRequest::new(10.0, 10.0, 0, rect()).unwrap();
        assert_eq!(req.frame().feature_width(), 0.0);
        assert!(!req.frame().is_multi_residue());
    }

    #[test]
    fn frame_width_scales_with_length() {
        let req = ShapeRequest::new(4.5, 10.0, 7, rect()).unwrap();
        let frame = req.frame();
        assert!((frame.feature_width() - 31.5).abs() < 1e-12);
        assert_eq!(frame.first_residue_center(), 2.25);
        assert!(frame.is_multi_residue());
    }
}
