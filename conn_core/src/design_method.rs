//! # Design Method (ASD / LRFD)
//!
//! Every limit state produces a nominal strength Rn. The design method turns
//! it into the strength a connection may be designed to:
//!
//! ```text
//! ASD:  Rn / Ω     (allowable strength, Ω = safety factor > 1)
//! LRFD: φ × Rn     (design strength, 0 < φ ≤ 1)
//! ```
//!
//! [`design_strength`] is the single place the method selector is validated.
//! Calculators accept anything implementing [`IntoDesignMethod`], so a typed
//! [`DesignMethod`] and a raw `"ASD"` / `"LRFD"` string go through the same
//! check at the point of use.
//!
//! # Example
//! ```
//! use conn_core::design_method::{design_strength, DesignMethod};
//! use conn_core::units::Kips;
//!
//! let rn = Kips(100.0);
//! assert_eq!(design_strength(DesignMethod::Asd, rn, 2.0, 0.75).unwrap(), Kips(50.0));
//! assert_eq!(design_strength("LRFD", rn, 2.0, 0.75).unwrap(), Kips(75.0));
//! assert!(design_strength("XYZ", rn, 2.0, 0.75).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};
use crate::units::Kips;

/// Design methodology selection
///
/// Serialized as `"ASD"` / `"LRFD"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DesignMethod {
    /// Allowable Strength Design - nominal strength divided by a safety factor Ω
    #[default]
    Asd,
    /// Load and Resistance Factor Design - nominal strength multiplied by φ
    Lrfd,
}

impl DesignMethod {
    /// Both methods, for iteration
    pub const ALL: [DesignMethod; 2] = [DesignMethod::Asd, DesignMethod::Lrfd];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            DesignMethod::Asd => "ASD (Allowable Strength Design)",
            DesignMethod::Lrfd => "LRFD (Load and Resistance Factor Design)",
        }
    }

    /// Short abbreviation
    pub fn code(&self) -> &'static str {
        match self {
            DesignMethod::Asd => "ASD",
            DesignMethod::Lrfd => "LRFD",
        }
    }

    /// Reduce a nominal strength with the factor that belongs to this method.
    pub fn apply(&self, nominal: Kips, asd_factor: f64, lrfd_factor: f64) -> Kips {
        match self {
            DesignMethod::Asd => nominal / asd_factor,
            DesignMethod::Lrfd => nominal * lrfd_factor,
        }
    }
}

impl std::fmt::Display for DesignMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for DesignMethod {
    type Err = CalcError;

    /// Only the exact codes `"ASD"` and `"LRFD"` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASD" => Ok(DesignMethod::Asd),
            "LRFD" => Ok(DesignMethod::Lrfd),
            other => Err(CalcError::invalid_design_method(other)),
        }
    }
}

/// A design method selector that is validated when a calculator uses it.
pub trait IntoDesignMethod {
    fn into_design_method(self) -> CalcResult<DesignMethod>;
}

impl IntoDesignMethod for DesignMethod {
    fn into_design_method(self) -> CalcResult<DesignMethod> {
        Ok(self)
    }
}

impl IntoDesignMethod for &DesignMethod {
    fn into_design_method(self) -> CalcResult<DesignMethod> {
        Ok(*self)
    }
}

impl IntoDesignMethod for &str {
    fn into_design_method(self) -> CalcResult<DesignMethod> {
        self.parse()
    }
}

impl IntoDesignMethod for String {
    fn into_design_method(self) -> CalcResult<DesignMethod> {
        self.parse()
    }
}

impl IntoDesignMethod for &String {
    fn into_design_method(self) -> CalcResult<DesignMethod> {
        self.parse()
    }
}

/// Governing allowable (ASD) or design (LRFD) strength.
///
/// # Arguments
/// * `method` - ASD or LRFD selector
/// * `nominal` - Nominal strength Rn
/// * `asd_factor` - Safety factor Ω
/// * `lrfd_factor` - Resistance factor φ
///
/// # Errors
/// `CalcError::InvalidDesignMethod` if the selector is not ASD or LRFD.
pub fn design_strength(
    method: impl IntoDesignMethod,
    nominal: Kips,
    asd_factor: f64,
    lrfd_factor: f64,
) -> CalcResult<Kips> {
    let method = method.into_design_method()?;
    Ok(method.apply(nominal, asd_factor, lrfd_factor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply() {
        assert_eq!(DesignMethod::Asd.apply(Kips(30.0), 1.5, 1.0), Kips(20.0));
        assert_eq!(DesignMethod::Lrfd.apply(Kips(30.0), 1.5, 1.0), Kips(30.0));
        assert_eq!(DesignMethod::Lrfd.apply(Kips(40.0), 1.67, 0.9), Kips(36.0));
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!("ASD".parse::<DesignMethod>().unwrap(), DesignMethod::Asd);
        assert_eq!("LRFD".parse::<DesignMethod>().unwrap(), DesignMethod::Lrfd);
        for bad in ["asd", "Lrfd", " ASD", "", "XYZ"] {
            assert_eq!(
                bad.parse::<DesignMethod>().unwrap_err(),
                CalcError::invalid_design_method(bad)
            );
        }
    }

    #[test]
    fn test_design_strength_rejects_unknown_method() {
        let err = design_strength("XYZ", Kips(10.0), 2.0, 0.75).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DESIGN_METHOD");
        let err = design_strength(String::from("ALLOWABLE"), Kips(10.0), 2.0, 0.75).unwrap_err();
        assert_eq!(err, CalcError::invalid_design_method("ALLOWABLE"));
    }

    #[test]
    fn test_string_and_enum_agree() {
        for method in DesignMethod::ALL {
            let typed = design_strength(method, Kips(52.2), 2.0, 0.75).unwrap();
            let text = design_strength(method.code(), Kips(52.2), 2.0, 0.75).unwrap();
            assert_eq!(typed, text);
        }
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&DesignMethod::Lrfd).unwrap(), "\"LRFD\"");
        let m: DesignMethod = serde_json::from_str("\"ASD\"").unwrap();
        assert_eq!(m, DesignMethod::Asd);
        assert!(serde_json::from_str::<DesignMethod>("\"XYZ\"").is_err());
    }
}
