//! Default sizes (all in pixels)

/// Reference size of the triangle glyphs, independent of residue scale.
pub const SYMBOL_SIZE: f64 = 10.0;
/// Composite box size as a multiple of the glyph height.
pub const SCALING_FACTOR: f64 = 1.2;
