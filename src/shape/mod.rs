//! Glyph shapes and the classifier that picks a builder for them.
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes
//! - `geometry`: Radius/margin math, side identifiers and per-side paths
//! - `named`: Rectangle and triangle builders
//! - `composite`: Four-sided parametric builder
//!
//! Shapes arrive as a loose [`ShapeDescriptor`] (a name, or a set of raw side
//! codes), are resolved into a typed [`ShapeSpec`], and [`classify`] turns
//! that into a [`ShapeBuilder`].

pub mod composite;
pub mod defaults;
pub mod geometry;
pub mod named;

pub use composite::{CompositeShape, CompositeShapeSpec};
pub use geometry::{GlyphBox, SideId, SideTreatment, circumscribed_radius, margin, side_path};
pub use named::{NamedShape, Rectangle, TriangleDown, TriangleLeft, TriangleRight, TriangleUp};

use enum_dispatch::enum_dispatch;

use crate::config::GlyphConfig;
use crate::errors::ShapeError;
use crate::path::PathData;
use crate::types::FeatureFrame;

/// A built glyph: the closed outline, plus the connector line of a
/// multi-residue composite glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub outline: PathData,
    /// Drawn by the renderer with reduced weight
    pub connector: Option<PathData>,
}

impl Glyph {
    pub(crate) fn from_outline(outline: PathData) -> Self {
        Self {
            outline,
            connector: None,
        }
    }

    /// One command sequence: the outline, then the connector if any.
    pub fn into_path(self) -> PathData {
        let mut path = self.outline;
        if let Some(connector) = self.connector {
            path.append(connector);
        }
        path
    }
}

/// Common behavior for all glyph builders
#[enum_dispatch]
pub trait GlyphShape {
    /// Build the glyph for one feature. Pure: same frame, same output.
    fn build(&self, frame: &FeatureFrame) -> Glyph;
}

/// Every concrete builder, dispatched without boxing.
#[enum_dispatch(GlyphShape)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeBuilder {
    Rectangle,
    TriangleUp,
    TriangleDown,
    TriangleLeft,
    TriangleRight,
    CompositeShape,
}

// ============================================================================
// Descriptors
// ============================================================================

/// Raw side codes as they appear in track configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SideCodes {
    pub rl_shape: Option<i64>,
    pub t_shape: Option<i64>,
    pub b_shape: Option<i64>,
    pub scaling_factor: Option<f64>,
}

impl SideCodes {
    /// True when any of the three side codes is present.
    pub fn is_composite(&self) -> bool {
        self.rl_shape.is_some() || self.t_shape.is_some() || self.b_shape.is_some()
    }
}

/// Loosely-validated shape description from external configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ShapeDescriptor {
    Name(String),
    Sides(SideCodes),
}

impl From<&str> for ShapeDescriptor {
    fn from(name: &str) -> Self {
        ShapeDescriptor::Name(name.to_string())
    }
}

impl From<SideCodes> for ShapeDescriptor {
    fn from(codes: SideCodes) -> Self {
        ShapeDescriptor::Sides(codes)
    }
}

/// A resolved shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeSpec {
    Named(NamedShape),
    Composite(CompositeShapeSpec),
}

impl Default for ShapeSpec {
    fn default() -> Self {
        ShapeSpec::Named(NamedShape::Rectangle)
    }
}

impl ShapeSpec {
    /// Resolve a descriptor.
    ///
    /// Any side code present makes it a composite shape, and then all three
    /// must be present and in range. Names that match nothing, and side code
    /// sets with no codes at all, resolve to the rectangle.
    pub fn resolve(descriptor: &ShapeDescriptor, config: &GlyphConfig) -> Result<Self, ShapeError> {
        match descriptor {
            ShapeDescriptor::Sides(codes) if codes.is_composite() => {
                let required = |code: Option<i64>, field: &'static str| code.ok_or(ShapeError::MissingSideCode { field });
                let spec = CompositeShapeSpec::from_codes(
                    required(codes.rl_shape, "rlShape")?,
                    required(codes.t_shape, "tShape")?,
                    required(codes.b_shape, "bShape")?,
                    codes.scaling_factor.unwrap_or(config.default_scaling_factor),
                )?;
                Ok(ShapeSpec::Composite(spec))
            }
            ShapeDescriptor::Sides(_) => {
                crate::log::debug!("shape has no side codes, falling back to rectangle");
                Ok(ShapeSpec::default())
            }
            ShapeDescriptor::Name(name) => Ok(ShapeSpec::Named(NamedShape::from_name_or_default(name))),
        }
    }
}

impl From<NamedShape> for ShapeSpec {
    fn from(shape: NamedShape) -> Self {
        ShapeSpec::Named(shape)
    }
}

impl From<CompositeShapeSpec> for ShapeSpec {
    fn from(spec: CompositeShapeSpec) -> Self {
        ShapeSpec::Composite(spec)
    }
}

/// Pick the builder for a resolved shape.
pub fn classify(spec: &ShapeSpec, config: &GlyphConfig) -> ShapeBuilder {
    let symbol_size = config.symbol_size;
    match *spec {
        ShapeSpec::Composite(spec) => CompositeShape { spec }.into(),
        ShapeSpec::Named(NamedShape::Rectangle) => Rectangle.into(),
        ShapeSpec::Named(NamedShape::TriangleUp) => TriangleUp { symbol_size }.into(),
        ShapeSpec::Named(NamedShape::TriangleDown) => TriangleDown { symbol_size }.into(),
        ShapeSpec::Named(NamedShape::TriangleLeft) => TriangleLeft { symbol_size }.into(),
        ShapeSpec::Named(NamedShape::TriangleRight) => TriangleRight { symbol_size }.into(),
    }
}
