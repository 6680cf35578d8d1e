//! # Calculation Settings
//!
//! Defaults a caller carries between calculations: code edition, design
//! method, and the plate and bolt grades used when a check does not name
//! its own material.
//!
//! ```rust
//! use conn_core::settings::CalcSettings;
//! use conn_core::calculations::shear_strength_bolts;
//! use conn_core::units::Inches;
//!
//! let settings = CalcSettings::from_json(r#"{"design_method": "LRFD"}"#).unwrap();
//! let rv = shear_strength_bolts(settings.design_method, Inches(0.75), settings.bolt_grade.fu()).unwrap();
//! assert!((rv.0 - 17.892).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};

use crate::design_method::DesignMethod;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{BoltGrade, SteelGrade};

/// Code edition the factors and equations are taken from
pub const CODE_EDITION: &str = "AISC 360-22";

/// Settings shared by a set of connection checks.
///
/// Missing fields in JSON fall back to [`CalcSettings::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    /// Code edition label (e.g., "AISC 360-22")
    pub code: String,

    /// Design method used when a check does not specify one
    pub design_method: DesignMethod,

    /// Default grade for plates and connecting elements
    pub plate_grade: SteelGrade,

    /// Default bolt grade
    pub bolt_grade: BoltGrade,
}

impl Default for CalcSettings {
    fn default() -> Self {
        CalcSettings {
            code: CODE_EDITION.to_string(),
            design_method: DesignMethod::default(),
            plate_grade: SteelGrade::default(),
            bolt_grade: BoltGrade::default(),
        }
    }
}

impl CalcSettings {
    /// Parse settings from JSON.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| CalcError::invalid_input("settings", json, format!("Invalid settings JSON: {e}")))
    }

    /// Serialize settings as pretty-printed JSON.
    pub fn to_json(&self) -> CalcResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CalcError::invalid_input("settings", self.code.clone(), e.to_string()))
    }
}
