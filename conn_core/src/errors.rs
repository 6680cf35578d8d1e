//! # Error Types
//!
//! Structured error types for conn_core. Every calculator raises these
//! synchronously at the call that detects the problem; nothing is retried or
//! recovered internally.
//!
//! ## Example
//!
//! ```rust
//! use conn_core::errors::{CalcError, CalcResult};
//!
//! fn validate_shear_lag(u: f64) -> CalcResult<()> {
//!     if !(u > 0.0 && u <= 1.0) {
//!         return Err(CalcError::invalid_input(
//!             "shear_lag",
//!             u.to_string(),
//!             "Shear lag factor must be in (0, 1]",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_shear_lag(0.85).is_ok());
//! assert_eq!(validate_shear_lag(1.2).unwrap_err().error_code(), "INVALID_INPUT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::units::Dimension;

/// Result type alias for conn_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Design method selector is not "ASD" or "LRFD"
    #[error("Invalid design method '{value}'. Use 'ASD' or 'LRFD'.")]
    InvalidDesignMethod { value: String },

    /// Fillet weld applied to a number of sides other than 1 or 2
    #[error("Invalid weld sides {value}. Welds may be applied to 1 or 2 sides.")]
    InvalidWeldSides { value: u32 },

    /// A quantity carries a unit of the wrong physical dimension
    #[error("Dimension mismatch for '{field}': expected {expected}, found {found} ({unit})")]
    DimensionMismatch {
        field: String,
        expected: Dimension,
        found: Dimension,
        unit: String,
    },

    /// Unit symbol not recognised by the conversion table
    #[error("Unknown unit: '{symbol}'")]
    UnknownUnit { symbol: String },

    /// Material grade not found in the catalogue
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// An input value is invalid (out of range, empty, unparsable)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidDesignMethod error
    pub fn invalid_design_method(value: impl Into<String>) -> Self {
        CalcError::InvalidDesignMethod {
            value: value.into(),
        }
    }

    /// Create an InvalidWeldSides error
    pub fn invalid_weld_sides(value: u32) -> Self {
        CalcError::InvalidWeldSides { value }
    }

    /// Create a DimensionMismatch error
    pub fn dimension_mismatch(
        field: impl Into<String>,
        expected: Dimension,
        found: Dimension,
        unit: impl Into<String>,
    ) -> Self {
        CalcError::DimensionMismatch {
            field: field.into(),
            expected,
            found,
            unit: unit.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(symbol: impl Into<String>) -> Self {
        CalcError::UnknownUnit {
            symbol: symbol.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Attach the offending input name to a dimension mismatch.
    ///
    /// Unit conversions don't know which argument they were called for, so
    /// calculators tag the error on the way out.
    pub fn for_field(self, name: &str) -> Self {
        match self {
            CalcError::DimensionMismatch {
                expected,
                found,
                unit,
                ..
            } => CalcError::DimensionMismatch {
                field: name.to_string(),
                expected,
                found,
                unit,
            },
            other => other,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidDesignMethod { .. } => "INVALID_DESIGN_METHOD",
            CalcError::InvalidWeldSides { .. } => "INVALID_WELD_SIDES",
            CalcError::DimensionMismatch { .. } => "DIMENSION_MISMATCH",
            CalcError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
        }
    }
}
