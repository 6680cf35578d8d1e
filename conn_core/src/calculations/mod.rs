//! # Connection Limit-State Calculations
//!
//! Every calculator is a pure function:
//!
//! - takes a design method selector (`DesignMethod` or `"ASD"` / `"LRFD"`),
//! - takes geometry and material as [`Quantity`] values in any compatible unit,
//! - normalizes them to inch / ksi,
//! - returns the allowable (ASD) or design (LRFD) strength in kips.
//!
//! Checks on connected material take a slice of parts and return one strength
//! per part ([`PartStrengths`]). Reducing to the governing value across parts
//! and across limit states is left to the caller; [`PartStrengths::governing`]
//! covers the first half.
//!
//! ## Available Calculations
//!
//! - [`fastener`] - Nominal fastener stresses Fnv, Fnt
//! - [`bolt`] - Bolt shear, tension, bearing, tearout
//! - [`connected_element`] - Shear/tensile yield and rupture of plates
//! - [`weld`] - Minimum fillet size, weld metal and base metal strength
//!
//! ## Example
//!
//! ```rust
//! use conn_core::calculations::{bolt::bearing_strength_bolts, PlatePart};
//! use conn_core::units::Quantity;
//!
//! let parts = [
//!     PlatePart::new(Quantity::inches(0.5), Quantity::ksi(58.0)),
//!     PlatePart::new(Quantity::inches(0.375), Quantity::ksi(58.0)),
//! ];
//! let bearing = bearing_strength_bolts("ASD", Quantity::inches(0.75), &parts).unwrap();
//! assert!((bearing[0].0 - 26.1).abs() < 1e-9);
//! assert!((bearing.governing().0 - 19.575).abs() < 1e-9);
//! ```

pub mod bolt;
pub mod connected_element;
pub mod fastener;
pub mod weld;

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::design_method::IntoDesignMethod;
use crate::errors::{CalcError, CalcResult};
use crate::units::{Inches, Kips, Ksi, Quantity};

// Re-export commonly used functions
pub use bolt::{bearing_strength_bolts, shear_strength_bolts, tearout_strength_bolts, tensile_strength_bolts};
pub use connected_element::{shear_rupture, shear_yield, tensile_rupture, tensile_yield};
pub use fastener::nominal_fastener_strength;
pub use weld::{min_weld_size, weld_material_strength, weld_rupture_strength};

// ============================================================================
// Connected Parts
// ============================================================================

/// A connected ply described by its thickness and tensile strength.
///
/// Used for bolt bearing and for base metal next to a fillet weld.
///
/// ## JSON Example
///
/// ```json
/// {
///   "thickness": { "value": 0.5, "unit": "in" },
///   "fu": { "value": 58.0, "unit": "ksi" }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatePart {
    /// Ply thickness t
    pub thickness: Quantity,
    /// Minimum tensile stress Fu
    pub fu: Quantity,
}

impl PlatePart {
    pub fn new(thickness: impl Into<Quantity>, fu: impl Into<Quantity>) -> Self {
        PlatePart {
            thickness: thickness.into(),
            fu: fu.into(),
        }
    }
}

/// A connected ply with the edge distance measured from the bolt centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgePart {
    /// Bolt centre to edge of part, in the direction of force
    pub edge_distance: Quantity,
    /// Ply thickness t
    pub thickness: Quantity,
    /// Minimum tensile stress Fu
    pub fu: Quantity,
}

impl EdgePart {
    pub fn new(edge_distance: impl Into<Quantity>, thickness: impl Into<Quantity>, fu: impl Into<Quantity>) -> Self {
        EdgePart {
            edge_distance: edge_distance.into(),
            thickness: thickness.into(),
            fu: fu.into(),
        }
    }
}

/// A connected element (gusset, splice plate, tab) loaded in shear or tension.
///
/// `stress` is Fy for the yielding checks and Fu for the rupture checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementPart {
    /// Element thickness t
    pub thickness: Quantity,
    /// Length along the shear plane, or width across the tension force
    pub length: Quantity,
    /// Fy (yield checks) or Fu (rupture checks)
    pub stress: Quantity,
}

impl ElementPart {
    pub fn new(thickness: impl Into<Quantity>, length: impl Into<Quantity>, stress: impl Into<Quantity>) -> Self {
        ElementPart {
            thickness: thickness.into(),
            length: length.into(),
            stress: stress.into(),
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// Allowable or design strength of each connected part, in input order.
///
/// Serializes as a plain array of kips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartStrengths(Vec<Kips>);

impl PartStrengths {
    /// Strengths as a slice
    pub fn as_slice(&self) -> &[Kips] {
        &self.0
    }

    /// Number of parts
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Kips> {
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Kips> {
        self.0.iter()
    }

    /// Index of the weakest part (first one on ties)
    pub fn governing_index(&self) -> Option<usize> {
        self.0
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, Kips)>, (i, &k)| match best {
                Some((_, b)) if b <= k => best,
                _ => Some((i, k)),
            })
            .map(|(i, _)| i)
    }

    /// Smallest strength across all parts.
    ///
    /// Calculators never return an empty set, so this is always defined for
    /// their results; a default-constructed empty set reports +∞.
    pub fn governing(&self) -> Kips {
        self.0.iter().fold(Kips(f64::INFINITY), |acc, &k| acc.min(k))
    }

    pub fn into_vec(self) -> Vec<Kips> {
        self.0
    }
}

impl Index<usize> for PartStrengths {
    type Output = Kips;

    fn index(&self, index: usize) -> &Kips {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a PartStrengths {
    type Item = &'a Kips;
    type IntoIter = std::slice::Iter<'a, Kips>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<PartStrengths> for Vec<Kips> {
    fn from(s: PartStrengths) -> Self {
        s.0
    }
}

// ============================================================================
// JSON-driven checks
// ============================================================================

/// One limit-state check described as data.
///
/// This lets scripts and tools drive the calculators from JSON. Each variant
/// carries exactly the arguments of the matching function.
///
/// ## JSON Example
///
/// ```json
/// {
///   "check": "BoltShear",
///   "bolt_dia": { "value": 0.75, "unit": "in" },
///   "f_u": { "value": 120.0, "unit": "ksi" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "check")]
pub enum ConnectionCheck {
    BoltShear { bolt_dia: Quantity, f_u: Quantity },
    BoltTension { bolt_dia: Quantity, f_u: Quantity },
    BoltBearing { bolt_dia: Quantity, parts: Vec<PlatePart> },
    BoltTearout { bolt_dia: Quantity, parts: Vec<EdgePart> },
    ShearYield { parts: Vec<ElementPart> },
    ShearRupture { bolt_dia: Quantity, bolt_count: u32, parts: Vec<ElementPart> },
    TensileYield { parts: Vec<ElementPart> },
    TensileRupture { bolt_dia: Quantity, bolt_count: u32, shear_lag: f64, parts: Vec<ElementPart> },
    WeldMaterial { weld_size_16ths: f64, weld_length: Quantity, weld_sides: u32 },
    WeldRupture { weld_size_16ths: f64, weld_length: Quantity, weld_sides: u32, parts: Vec<PlatePart> },
}

impl ConnectionCheck {
    /// Check name as used in the `"check"` tag
    pub fn name(&self) -> &'static str {
        match self {
            ConnectionCheck::BoltShear { .. } => "BoltShear",
            ConnectionCheck::BoltTension { .. } => "BoltTension",
            ConnectionCheck::BoltBearing { .. } => "BoltBearing",
            ConnectionCheck::BoltTearout { .. } => "BoltTearout",
            ConnectionCheck::ShearYield { .. } => "ShearYield",
            ConnectionCheck::ShearRupture { .. } => "ShearRupture",
            ConnectionCheck::TensileYield { .. } => "TensileYield",
            ConnectionCheck::TensileRupture { .. } => "TensileRupture",
            ConnectionCheck::WeldMaterial { .. } => "WeldMaterial",
            ConnectionCheck::WeldRupture { .. } => "WeldRupture",
        }
    }

    /// Run the check. Single-value checks report a one-element result.
    pub fn evaluate(&self, method: impl IntoDesignMethod) -> CalcResult<PartStrengths> {
        let method = method.into_design_method()?;
        let strengths = match self {
            ConnectionCheck::BoltShear { bolt_dia, f_u } => {
                PartStrengths(vec![shear_strength_bolts(method, *bolt_dia, *f_u)?])
            }
            ConnectionCheck::BoltTension { bolt_dia, f_u } => {
                PartStrengths(vec![tensile_strength_bolts(method, *bolt_dia, *f_u)?])
            }
            ConnectionCheck::BoltBearing { bolt_dia, parts } => bearing_strength_bolts(method, *bolt_dia, parts)?,
            ConnectionCheck::BoltTearout { bolt_dia, parts } => tearout_strength_bolts(method, *bolt_dia, parts)?,
            ConnectionCheck::ShearYield { parts } => shear_yield(method, parts)?,
            ConnectionCheck::ShearRupture {
                bolt_dia,
                bolt_count,
                parts,
            } => shear_rupture(method, *bolt_dia, *bolt_count, parts)?,
            ConnectionCheck::TensileYield { parts } => tensile_yield(method, parts)?,
            ConnectionCheck::TensileRupture {
                bolt_dia,
                bolt_count,
                shear_lag,
                parts,
            } => tensile_rupture(method, *bolt_dia, *bolt_count, *shear_lag, parts)?,
            ConnectionCheck::WeldMaterial {
                weld_size_16ths,
                weld_length,
                weld_sides,
            } => PartStrengths(vec![weld_material_strength(
                method,
                *weld_size_16ths,
                *weld_length,
                *weld_sides,
            )?]),
            ConnectionCheck::WeldRupture {
                weld_size_16ths,
                weld_length,
                weld_sides,
                parts,
            } => PartStrengths(vec![weld_rupture_strength(
                method,
                *weld_size_16ths,
                *weld_length,
                *weld_sides,
                parts,
            )?]),
        };
        Ok(strengths)
    }
}

// ============================================================================
// Helpers shared by the calculators
// ============================================================================

/// Normalize a length, tagging a dimension error with the argument name
pub(crate) fn length_in(q: &Quantity, field: &str) -> CalcResult<Inches> {
    q.to_inches().map_err(|e| e.for_field(field))
}

/// Normalize a stress, tagging a dimension error with the argument name
pub(crate) fn stress_ksi(q: &Quantity, field: &str) -> CalcResult<Ksi> {
    q.to_ksi().map_err(|e| e.for_field(field))
}

/// Part-checks need at least one part to report on
pub(crate) fn require_parts<T>(parts: &[T]) -> CalcResult<()> {
    if parts.is_empty() {
        return Err(CalcError::invalid_input(
            "parts",
            "[]",
            "At least one connected part is required",
        ));
    }
    Ok(())
}

/// Evaluate `f` for every part, collecting the results in order.
pub(crate) fn per_part<T, F>(parts: &[T], mut f: F) -> CalcResult<PartStrengths>
where
    F: FnMut(usize, &T) -> CalcResult<Kips>,
{
    require_parts(parts)?;
    parts
        .iter()
        .enumerate()
        .map(|(i, part)| f(i, part))
        .collect::<CalcResult<Vec<_>>>()
        .map(PartStrengths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design_method::DesignMethod;
    use approx::assert_relative_eq;

    #[test]
    fn test_governing() {
        let s = PartStrengths(vec![Kips(26.1), Kips(19.575), Kips(30.0)]);
        assert_eq!(s.governing(), Kips(19.575));
        assert_eq!(s.governing_index(), Some(1));
        assert_eq!(s.len(), 3);
        assert_eq!(s[2], Kips(30.0));
        assert_eq!(s.get(3), None);
    }

    #[test]
    fn test_governing_keeps_first_on_ties() {
        let s = PartStrengths(vec![Kips(5.0), Kips(5.0)]);
        assert_eq!(s.governing_index(), Some(0));
        assert_eq!(PartStrengths(Vec::new()).governing_index(), None);
    }

    #[test]
    fn test_empty_parts_rejected() {
        let parts: [PlatePart; 0] = [];
        let err = bearing_strength_bolts(DesignMethod::Asd, Inches(0.75), &parts).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_part_dimension_error_names_the_part() {
        let parts = [
            PlatePart::new(Inches(0.5), Ksi(58.0)),
            PlatePart::new(Ksi(0.5), Ksi(58.0)),
        ];
        let err = bearing_strength_bolts(DesignMethod::Asd, Inches(0.75), &parts).unwrap_err();
        match err {
            CalcError::DimensionMismatch { field, .. } => assert_eq!(field, "parts[1].thickness"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_check_from_json() {
        let json = r#"{
            "check": "BoltShear",
            "bolt_dia": { "value": 0.75, "unit": "in" },
            "f_u": { "value": 120.0, "unit": "ksi" }
        }"#;
        let check: ConnectionCheck = serde_json::from_str(json).unwrap();
        assert_eq!(check.name(), "BoltShear");
        let result = check.evaluate("LRFD").unwrap();
        assert_eq!(result.len(), 1);
        assert_relative_eq!(result.governing().0, 17.892, epsilon = 1e-3);
    }

    #[test]
    fn test_check_matches_direct_call() {
        let parts = vec![
            ElementPart::new(Inches(0.5), Inches(6.0), Ksi(58.0)),
            ElementPart::new(Quantity::millimeters(9.525), Inches(6.0), Ksi(58.0)),
        ];
        let check = ConnectionCheck::TensileRupture {
            bolt_dia: Quantity::inches(0.75),
            bolt_count: 2,
            shear_lag: 0.85,
            parts: parts.clone(),
        };
        let via_check = check.evaluate(DesignMethod::Lrfd).unwrap();
        let direct = tensile_rupture(DesignMethod::Lrfd, Inches(0.75), 2, 0.85, &parts).unwrap();
        assert_eq!(via_check, direct);

        let json = serde_json::to_string(&check).unwrap();
        let roundtrip: ConnectionCheck = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, check);
    }

    #[test]
    fn test_check_rejects_bad_method() {
        let check = ConnectionCheck::ShearYield {
            parts: vec![ElementPart::new(Inches(0.5), Inches(6.0), Ksi(36.0))],
        };
        assert_eq!(check.evaluate("XYZ").unwrap_err().error_code(), "INVALID_DESIGN_METHOD");
    }

    #[test]
    fn test_results_serialize_as_array() {
        let s = PartStrengths(vec![Kips(1.5), Kips(2.0)]);
        assert_eq!(serde_json::to_string(&s).unwrap(), "[1.5,2.0]");
    }
}
