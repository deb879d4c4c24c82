//! Error types with diagnostic codes using miette
//!
//! Unknown named shapes are not errors: they fall back to a rectangle. Every
//! variant here is a hard failure returned before any path command is built.

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

use crate::shape::composite::SCALING_FACTOR_RANGE;
use crate::types::NumericError;

/// Which enumeration a rejected raw code was meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    /// A side index (`0..=3`)
    Side,
    /// A side treatment code (`0..=6`)
    Treatment,
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeKind::Side => write!(f, "side index"),
            CodeKind::Treatment => write!(f, "side treatment code"),
        }
    }
}

impl CodeKind {
    /// Inclusive upper bound of the valid range.
    pub fn max_code(self) -> i64 {
        match self {
            CodeKind::Side => 3,
            CodeKind::Treatment => 6,
        }
    }
}

// ============================================================================
// Shape Errors
// ============================================================================

/// Errors that occur while resolving a shape or validating a request
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("invalid {kind}: {code} (expected 0..={max})", max = .kind.max_code())]
    #[diagnostic(
        code(featglyph::shape::invalid_code),
        help("side codes are produced programmatically; an out-of-range value is a bug upstream")
    )]
    InvalidShapeCode { kind: CodeKind, code: i64 },

    #[error("composite shape is missing `{field}`")]
    #[diagnostic(
        code(featglyph::shape::missing_side_code),
        help("a composite shape needs all of rlShape, tShape and bShape")
    )]
    MissingSideCode { field: &'static str },

    #[error(
        "scaling factor {value} is out of range (expected {min:.4} < factor < {max:.4})",
        min = SCALING_FACTOR_RANGE.0,
        max = SCALING_FACTOR_RANGE.1
    )]
    #[diagnostic(
        code(featglyph::shape::scaling_factor_out_of_range),
        help("outside this range inward treatments on opposite sides of the box run into each other")
    )]
    ScalingFactorOutOfRange { value: f64 },

    #[error("invalid {field}: {source}")]
    #[diagnostic(code(featglyph::request::invalid_value))]
    InvalidRequest {
        field: &'static str,
        #[source]
        source: NumericError,
    },
}

impl ShapeError {
    pub(crate) fn invalid(field: &'static str) -> impl FnOnce(NumericError) -> ShapeError {
        move |source| ShapeError::InvalidRequest { field, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_code_message_names_the_range() {
        let err = ShapeError::InvalidShapeCode {
            kind: CodeKind::Treatment,
            code: 9,
        };
        assert_eq!(err.to_string(), "invalid side treatment code: 9 (expected 0..=6)");

        let err = ShapeError::InvalidShapeCode {
            kind: CodeKind::Side,
            code: -1,
        };
        assert_eq!(err.to_string(), "invalid side index: -1 (expected 0..=3)");
    }

    #[test]
    fn diagnostic_codes_are_stable() {
        let err = ShapeError::MissingSideCode { field: "tShape" };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("featglyph::shape::missing_side_code"));

        let err = ShapeError::InvalidRequest {
            field: "glyph_height",
            source: NumericError::Zero,
        };
        assert_eq!(err.to_string(), "invalid glyph_height: value is zero");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn scaling_factor_message_names_the_bounds() {
        let err = ShapeError::ScalingFactorOutOfRange { value: 3.0 };
        assert_eq!(
            err.to_string(),
            "scaling factor 3 is out of range (expected 0.4142 < factor < 2.4142)"
        );
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("featglyph::shape::scaling_factor_out_of_range"));
    }
}
