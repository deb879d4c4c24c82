//! Glyph configuration shared by every builder.

use crate::errors::ShapeError;
use crate::shape::composite::check_scaling_factor;
use crate::shape::defaults;
use crate::types::positive;

/// Sizes that do not depend on the residue scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct GlyphConfig {
    /// Reference size of triangle glyphs, in pixels
    pub symbol_size: f64,
    /// Box size multiplier for composite shapes that don't carry their own
    pub default_scaling_factor: f64,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            symbol_size: defaults::SYMBOL_SIZE,
            default_scaling_factor: defaults::SCALING_FACTOR,
        }
    }
}

impl GlyphConfig {
    /// Create a config with validation (symbol size finite and > 0, scaling
    /// factor inside [`SCALING_FACTOR_RANGE`](crate::shape::composite::SCALING_FACTOR_RANGE))
    pub fn new(symbol_size: f64, default_scaling_factor: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            symbol_size: positive(symbol_size).map_err(ShapeError::invalid("symbol_size"))?,
            default_scaling_factor: check_scaling_factor("default_scaling_factor", default_scaling_factor)?,
        })
    }

    /// Re-check a config built through struct literal or deserialization.
    pub fn validated(self) -> Result<Self, ShapeError> {
        Self::new(self.symbol_size, self.default_scaling_factor)
    }
}
