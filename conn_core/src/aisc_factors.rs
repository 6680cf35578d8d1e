//! # AISC Resistance Factors and Modeling Constants
//!
//! Safety factors (Ω) and resistance factors (φ) for connection limit states
//! per AISC 360-22, plus the fixed modeling assumptions the calculators use.
//!
//! ## Factor Summary
//!
//! | Limit state             | Ω    | φ    |
//! |-------------------------|------|------|
//! | Bolt shear / tension    | 2.00 | 0.75 |
//! | Bolt bearing            | 2.00 | 0.75 |
//! | Bolt tearout            | 2.00 | 0.75 |
//! | Element shear yield     | 1.50 | 1.00 |
//! | Element shear rupture   | 2.00 | 0.75 |
//! | Element tensile yield   | 1.67 | 0.90 |
//! | Element tensile rupture | 2.00 | 0.75 |
//! | Weld material strength  | 2.00 | 0.75 |

use serde::{Deserialize, Serialize};

use crate::design_method::{design_strength, IntoDesignMethod};
use crate::errors::CalcResult;
use crate::units::{Inches, Kips, Ksi};

// ============================================================================
// AISC Code Section References
// ============================================================================

/// AISC 360-22 section references for each connection check.
pub mod aisc_ref {
    /// Nominal fastener stresses Fnt, Fnv
    pub const FASTENER_STRESSES: &str = "AISC 360-22 Table J3.2";
    /// Tensile and shear strength of bolts
    pub const BOLT_SHEAR_TENSION: &str = "AISC 360-22 J3.7";
    /// Bearing and tearout strength at bolt holes
    pub const BOLT_BEARING_TEAROUT: &str = "AISC 360-22 J3.11";
    /// Strength of elements in tension
    pub const ELEMENT_TENSION: &str = "AISC 360-22 J4.1";
    /// Strength of elements in shear
    pub const ELEMENT_SHEAR: &str = "AISC 360-22 J4.2";
    /// Shear lag factor U
    pub const SHEAR_LAG: &str = "AISC 360-22 Table D3.1";
    /// Fillet weld strength
    pub const WELD_STRENGTH: &str = "AISC 360-22 J2.4";
    /// Minimum size of fillet welds
    pub const MIN_WELD_SIZE: &str = "AISC 360-22 Table J2.4";
}

// ============================================================================
// Modeling Constants
// ============================================================================

/// Fastener shear stress ratio: Fnv = 0.45 Fu (threads included)
pub const FASTENER_SHEAR_RATIO: f64 = 0.45;

/// Fastener tension stress ratio: Fnt = 0.75 Fu
pub const FASTENER_TENSION_RATIO: f64 = 0.75;

/// Bearing coefficient: Rn = 2.4 d t Fu (deformation at service load a consideration)
pub const BEARING_COEFFICIENT: f64 = 2.4;

/// Tearout coefficient: Rn = 1.2 lc t Fu
pub const TEAROUT_COEFFICIENT: f64 = 1.2;

/// Hole oversize used for tearout clear distance (standard hole = d + 1/8")
pub const TEAROUT_HOLE_OVERSIZE: Inches = Inches(0.125);

/// Hole clearance added to the bolt diameter when deducting holes from a net width
pub const NET_SECTION_HOLE_CLEARANCE: Inches = Inches(0.063);

/// Shear yield and shear rupture coefficient (0.60 Fy / 0.60 Fu)
pub const SHEAR_STRESS_RATIO: f64 = 0.60;

/// Weld metal shear coefficient (0.60 FEXX)
pub const WELD_STRESS_RATIO: f64 = 0.60;

/// Electrode classification strength for E70XX filler metal
pub const ELECTRODE_STRENGTH: Ksi = Ksi(70.0);

/// Effective throat of an equal-leg 45° fillet weld per unit leg size (√2/2)
pub const FILLET_THROAT_FACTOR: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Tabulated (rounded) throat factor used when sizing base metal for a weld
///
/// Equal to [`FILLET_THROAT_FACTOR`] rounded to three decimals.
pub const FILLET_THROAT_FACTOR_TABULATED: f64 = 0.707;

/// Base metal shear rupture coefficient (0.6 Fu) for welded parts
pub const BASE_METAL_RUPTURE_RATIO: f64 = 0.6;

/// Fillet weld sizes are specified in sixteenths of an inch
pub const WELD_SIZE_DENOMINATOR: f64 = 16.0;

// ============================================================================
// Resistance Factors
// ============================================================================

/// Ω / φ pair for one limit state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResistanceFactors {
    /// Safety factor Ω (ASD)
    pub omega: f64,
    /// Resistance factor φ (LRFD)
    pub phi: f64,
}

impl ResistanceFactors {
    pub const fn new(omega: f64, phi: f64) -> Self {
        ResistanceFactors { omega, phi }
    }

    /// Governing strength for the given method
    pub fn apply(&self, method: impl IntoDesignMethod, nominal: Kips) -> CalcResult<Kips> {
        design_strength(method, nominal, self.omega, self.phi)
    }
}

/// Connection limit states checked by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LimitState {
    BoltShear,
    BoltTension,
    BoltBearing,
    BoltTearout,
    ShearYield,
    ShearRupture,
    TensileYield,
    TensileRupture,
    WeldMaterial,
}

impl LimitState {
    /// All limit states
    pub const ALL: [LimitState; 9] = [
        LimitState::BoltShear,
        LimitState::BoltTension,
        LimitState::BoltBearing,
        LimitState::BoltTearout,
        LimitState::ShearYield,
        LimitState::ShearRupture,
        LimitState::TensileYield,
        LimitState::TensileRupture,
        LimitState::WeldMaterial,
    ];

    /// Codified Ω and φ
    pub fn factors(&self) -> ResistanceFactors {
        match self {
            LimitState::BoltShear | LimitState::BoltTension => ResistanceFactors::new(2.00, 0.75),
            LimitState::BoltBearing => ResistanceFactors::new(2.00, 0.75),
            LimitState::BoltTearout => ResistanceFactors::new(2.00, 0.75),
            LimitState::ShearYield => ResistanceFactors::new(1.50, 1.00),
            LimitState::ShearRupture => ResistanceFactors::new(2.00, 0.75),
            LimitState::TensileYield => ResistanceFactors::new(1.67, 0.90),
            LimitState::TensileRupture => ResistanceFactors::new(2.00, 0.75),
            LimitState::WeldMaterial => ResistanceFactors::new(2.00, 0.75),
        }
    }

    /// Code section for this check
    pub fn code_reference(&self) -> &'static str {
        match self {
            LimitState::BoltShear | LimitState::BoltTension => aisc_ref::BOLT_SHEAR_TENSION,
            LimitState::BoltBearing | LimitState::BoltTearout => aisc_ref::BOLT_BEARING_TEAROUT,
            LimitState::ShearYield | LimitState::ShearRupture => aisc_ref::ELEMENT_SHEAR,
            LimitState::TensileYield | LimitState::TensileRupture => aisc_ref::ELEMENT_TENSION,
            LimitState::WeldMaterial => aisc_ref::WELD_STRENGTH,
        }
    }

    /// Display name
    pub fn display_name(&self) -> &'static str {
        match self {
            LimitState::BoltShear => "Bolt shear",
            LimitState::BoltTension => "Bolt tension",
            LimitState::BoltBearing => "Bolt bearing",
            LimitState::BoltTearout => "Bolt tearout",
            LimitState::ShearYield => "Shear yielding",
            LimitState::ShearRupture => "Shear rupture",
            LimitState::TensileYield => "Tensile yielding",
            LimitState::TensileRupture => "Tensile rupture",
            LimitState::WeldMaterial => "Weld metal",
        }
    }

    /// Governing strength of this limit state for the given method
    pub fn design_strength(&self, method: impl IntoDesignMethod, nominal: Kips) -> CalcResult<Kips> {
        self.factors().apply(method, nominal)
    }
}

impl std::fmt::Display for LimitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design_method::DesignMethod;

    #[test]
    fn test_factor_table() {
        let expected = [
            (LimitState::BoltShear, 2.00, 0.75),
            (LimitState::BoltTension, 2.00, 0.75),
            (LimitState::BoltBearing, 2.00, 0.75),
            (LimitState::BoltTearout, 2.00, 0.75),
            (LimitState::ShearYield, 1.50, 1.00),
            (LimitState::ShearRupture, 2.00, 0.75),
            (LimitState::TensileYield, 1.67, 0.90),
            (LimitState::TensileRupture, 2.00, 0.75),
            (LimitState::WeldMaterial, 2.00, 0.75),
        ];
        for (state, omega, phi) in expected {
            assert_eq!(state.factors(), ResistanceFactors::new(omega, phi), "{state}");
        }
    }

    #[test]
    fn test_factors_are_in_range() {
        for state in LimitState::ALL {
            let f = state.factors();
            assert!(f.omega > 1.0, "{state}: Ω must exceed 1");
            assert!(f.phi > 0.0 && f.phi <= 1.0, "{state}: φ must be in (0, 1]");
        }
    }

    #[test]
    fn test_throat_factors_agree() {
        assert_eq!((FILLET_THROAT_FACTOR * 1000.0).round() / 1000.0, FILLET_THROAT_FACTOR_TABULATED);
        assert!((FILLET_THROAT_FACTOR - FILLET_THROAT_FACTOR_TABULATED).abs() < 5e-4);
    }

    #[test]
    fn test_limit_state_design_strength() {
        let rn = Kips(90.0);
        assert_eq!(LimitState::ShearYield.design_strength(DesignMethod::Asd, rn).unwrap(), Kips(60.0));
        assert_eq!(LimitState::ShearYield.design_strength(DesignMethod::Lrfd, rn).unwrap(), Kips(90.0));
        assert!(LimitState::TensileYield.design_strength("asd", rn).is_err());
    }

    #[test]
    fn test_code_references() {
        assert_eq!(LimitState::BoltTearout.code_reference(), "AISC 360-22 J3.11");
        assert_eq!(LimitState::WeldMaterial.code_reference(), aisc_ref::WELD_STRENGTH);
    }
}
