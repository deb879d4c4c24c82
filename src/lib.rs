//! Parametric path generator for protein feature glyphs.
//!
//! Given a feature's pixel geometry and a shape descriptor, this crate emits
//! the outline of the glyph as SVG path data. Named shapes (rectangle and
//! four triangles) come from a fixed catalogue; composite shapes are built
//! from four independently treated sides (straight, curved, single or double
//! notch, inward or outward).
//!
//! ```
//! use featglyph::{GlyphConfig, ShapeDescriptor, ShapeRequest, SideCodes, build_path};
//!
//! let shape = ShapeDescriptor::Sides(SideCodes {
//!     rl_shape: Some(0),
//!     t_shape: Some(0),
//!     b_shape: Some(0),
//!     scaling_factor: None,
//! });
//! let request = ShapeRequest::from_descriptor(10.0, 10.0, 1, &shape, &GlyphConfig::default())?;
//! assert_eq!(build_path(&request).to_string(), "M0 10 V0 H12 V10 Z");
//! # Ok::<(), featglyph::ShapeError>(())
//! ```
//!
//! Rendering is left to the caller: the output is a [`PathData`] whose
//! `Display` impl is a valid `d` attribute.

pub mod config;
pub mod errors;
pub mod log;
pub mod path;
pub mod shape;
pub mod types;

pub use config::GlyphConfig;
pub use errors::{CodeKind, ShapeError};
pub use path::{PathCommand, PathData};
pub use shape::{
    CompositeShapeSpec, Glyph, GlyphShape, NamedShape, ShapeBuilder, ShapeDescriptor, ShapeSpec,
    SideCodes, SideId, SideTreatment, classify,
};
pub use types::{FeatureFrame, NumericError, ShapeRequest};

/// Build the glyph for a request: the outline plus, for multi-residue
/// composite shapes, a separate connector line.
pub fn build_glyph(request: &ShapeRequest, config: &GlyphConfig) -> Glyph {
    classify(request.shape(), config).build(&request.frame())
}

/// Build the full command sequence for a request with
/// [`GlyphConfig::default()`].
///
/// The config is not part of the request: a request resolved with
/// [`ShapeRequest::from_descriptor`] against a custom config still draws
/// triangles at the default symbol size here. Use [`build_glyph`] with that
/// config and [`Glyph::into_path`] instead.
///
/// Requests are validated on construction, so this cannot fail.
pub fn build_path(request: &ShapeRequest) -> PathData {
    build_glyph(request, &GlyphConfig::default()).into_path()
}
