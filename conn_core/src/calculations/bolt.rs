//! # Bolt Limit States
//!
//! Strength of a single bolt per AISC 360-22:
//!
//! - Shear on one shear plane and tension (J3.7): Rn = Fn Ab
//! - Bearing at the bolt hole (J3.11): Rn = 2.4 d t Fu, per connected part
//! - Tearout at the bolt hole (J3.11): Rn = 1.2 lc t Fu, per connected part
//!
//! All four use Ω = 2.00 / φ = 0.75.
//!
//! ## Example
//!
//! ```rust
//! use conn_core::calculations::bolt::{shear_strength_bolts, tearout_strength_bolts};
//! use conn_core::calculations::EdgePart;
//! use conn_core::design_method::DesignMethod;
//! use conn_core::units::Quantity;
//!
//! let shear = shear_strength_bolts(DesignMethod::Lrfd, Quantity::inches(0.75), Quantity::ksi(120.0)).unwrap();
//! assert!((shear.0 - 17.89).abs() < 0.01);
//!
//! let parts = [EdgePart::new(Quantity::inches(1.5), Quantity::inches(0.5), Quantity::ksi(58.0))];
//! let tearout = tearout_strength_bolts("ASD", Quantity::inches(0.75), &parts).unwrap();
//! // 1.2 × 1.0625 × 0.5 × 58 / 2.00
//! assert!((tearout[0].0 - 18.4875).abs() < 1e-9);
//! ```

use tracing::debug;

use crate::aisc_factors::LimitState;
use crate::design_method::IntoDesignMethod;
use crate::equations::{bearing_nominal, bolt_nominal_strength, tearout_clear_distance, tearout_nominal};
use crate::errors::CalcResult;
use crate::units::{Kips, Quantity};

use super::fastener::fastener_stresses;
use super::{length_in, per_part, stress_ksi, EdgePart, PartStrengths, PlatePart};

/// Shear strength of one bolt on a single shear plane.
///
/// # Arguments
///
/// * `method` - ASD or LRFD
/// * `bolt_dia` - Nominal bolt diameter (length)
/// * `f_u` - Bolt minimum tensile strength (stress)
///
/// # Returns
///
/// * `Ok(Kips)` - Rn/Ω or φRn with Rn = 0.45 Fu × πd²/4
/// * `Err(CalcError)` - Invalid method or wrong input dimension
pub fn shear_strength_bolts(
    method: impl IntoDesignMethod,
    bolt_dia: impl Into<Quantity>,
    f_u: impl Into<Quantity>,
) -> CalcResult<Kips> {
    let method = method.into_design_method()?;
    let fnv = fastener_stresses(f_u)?.fnv;
    let d = length_in(&bolt_dia.into(), "bolt_dia")?;

    let rn = bolt_nominal_strength(fnv, d);
    let strength = LimitState::BoltShear.design_strength(method, rn)?;

    debug!(
        limit_state = %LimitState::BoltShear,
        %method,
        bolt_dia_in = d.0,
        nominal_kips = rn.0,
        design_kips = strength.0,
        "bolt shear strength"
    );
    Ok(strength)
}

/// Tensile strength of one bolt.
///
/// Same structure as [`shear_strength_bolts`] with Fnt = 0.75 Fu.
pub fn tensile_strength_bolts(
    method: impl IntoDesignMethod,
    bolt_dia: impl Into<Quantity>,
    f_u: impl Into<Quantity>,
) -> CalcResult<Kips> {
    let method = method.into_design_method()?;
    let fnt = fastener_stresses(f_u)?.fnt;
    let d = length_in(&bolt_dia.into(), "bolt_dia")?;

    let rn = bolt_nominal_strength(fnt, d);
    let strength = LimitState::BoltTension.design_strength(method, rn)?;

    debug!(
        limit_state = %LimitState::BoltTension,
        %method,
        bolt_dia_in = d.0,
        nominal_kips = rn.0,
        design_kips = strength.0,
        "bolt tensile strength"
    );
    Ok(strength)
}

/// Bearing strength of one bolt on each connected part.
///
/// Returns one value per part, in order. The governing value is the
/// smallest; see [`PartStrengths::governing`].
///
/// # Errors
/// Invalid method, wrong input dimension, or an empty `parts` slice.
pub fn bearing_strength_bolts(
    method: impl IntoDesignMethod,
    bolt_dia: impl Into<Quantity>,
    parts: &[PlatePart],
) -> CalcResult<PartStrengths> {
    let method = method.into_design_method()?;
    let d = length_in(&bolt_dia.into(), "bolt_dia")?;

    per_part(parts, |i, part| {
        let t = length_in(&part.thickness, &format!("parts[{i}].thickness"))?;
        let fu = stress_ksi(&part.fu, &format!("parts[{i}].fu"))?;

        let rn = bearing_nominal(d, t, fu);
        let strength = LimitState::BoltBearing.design_strength(method, rn)?;

        debug!(
            limit_state = %LimitState::BoltBearing,
            %method,
            part = i,
            nominal_kips = rn.0,
            design_kips = strength.0,
            "bolt bearing strength"
        );
        Ok(strength)
    })
}

/// Tearout strength of one bolt on each connected part.
///
/// The clear distance subtracts half of a standard hole (d + 1/8") from the
/// edge distance. An edge distance smaller than that gives a zero or negative
/// strength, which is returned as-is for the caller to reject.
pub fn tearout_strength_bolts(
    method: impl IntoDesignMethod,
    bolt_dia: impl Into<Quantity>,
    parts: &[EdgePart],
) -> CalcResult<PartStrengths> {
    let method = method.into_design_method()?;
    let d = length_in(&bolt_dia.into(), "bolt_dia")?;

    per_part(parts, |i, part| {
        let edge = length_in(&part.edge_distance, &format!("parts[{i}].edge_distance"))?;
        let t = length_in(&part.thickness, &format!("parts[{i}].thickness"))?;
        let fu = stress_ksi(&part.fu, &format!("parts[{i}].fu"))?;

        let lc = tearout_clear_distance(edge, d);
        let rn = tearout_nominal(lc, t, fu);
        let strength = LimitState::BoltTearout.design_strength(method, rn)?;

        debug!(
            limit_state = %LimitState::BoltTearout,
            %method,
            part = i,
            clear_distance_in = lc.0,
            nominal_kips = rn.0,
            design_kips = strength.0,
            "bolt tearout strength"
        );
        Ok(strength)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design_method::DesignMethod;
    use crate::errors::CalcError;
    use crate::units::{Dimension, Inches, Ksi};
    use approx::assert_relative_eq;

    fn plates() -> [PlatePart; 2] {
        [
            PlatePart::new(Quantity::inches(0.5), Quantity::ksi(58.0)),
            PlatePart::new(Quantity::inches(0.375), Quantity::ksi(58.0)),
        ]
    }

    #[test]
    fn test_shear_lrfd_example() {
        // Fnv = 54 ksi, Ab = 0.4418 in², Rn = 23.86 kip, φRn = 17.89 kip
        let r = shear_strength_bolts(DesignMethod::Lrfd, Inches(0.75), Ksi(120.0)).unwrap();
        assert_relative_eq!(r.0, 17.892, epsilon = 1e-3);
    }

    #[test]
    fn test_shear_and_tension_factor_identity() {
        let d = Inches(0.875);
        let fu = Ksi(120.0);
        let ab = std::f64::consts::PI / 4.0 * 0.875 * 0.875;

        let rn_v = bolt_nominal_strength(Ksi(0.45 * 120.0), d);
        assert_relative_eq!(rn_v.0, 54.0 * ab, epsilon = 1e-12);
        assert_eq!(shear_strength_bolts("ASD", d, fu).unwrap(), rn_v / 2.00);
        assert_eq!(shear_strength_bolts("LRFD", d, fu).unwrap(), rn_v * 0.75);

        let rn_t = bolt_nominal_strength(Ksi(0.75 * 120.0), d);
        assert_eq!(tensile_strength_bolts("ASD", d, fu).unwrap(), rn_t / 2.00);
        assert_eq!(tensile_strength_bolts("LRFD", d, fu).unwrap(), rn_t * 0.75);
    }

    #[test]
    fn test_tension_exceeds_shear() {
        for method in DesignMethod::ALL {
            let v = shear_strength_bolts(method, Inches(0.75), Ksi(120.0)).unwrap();
            let t = tensile_strength_bolts(method, Inches(0.75), Ksi(120.0)).unwrap();
            assert_relative_eq!(t.0 / v.0, 0.75 / 0.45, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_bearing_asd_example() {
        let r = bearing_strength_bolts(DesignMethod::Asd, Inches(0.75), &plates()).unwrap();
        assert_eq!(r.len(), 2);
        assert_relative_eq!(r[0].0, 26.1, epsilon = 1e-9);
        assert_relative_eq!(r[1].0, 19.575, epsilon = 1e-9);
        assert_relative_eq!(r.governing().0, 19.575, epsilon = 1e-9);
    }

    #[test]
    fn test_bearing_lrfd() {
        let r = bearing_strength_bolts(DesignMethod::Lrfd, Inches(0.75), &plates()).unwrap();
        assert_relative_eq!(r[0].0, 52.2 * 0.75, epsilon = 1e-9);
        assert_relative_eq!(r[1].0, 39.15 * 0.75, epsilon = 1e-9);
    }

    #[test]
    fn test_bearing_handles_more_than_two_parts() {
        let parts = [
            PlatePart::new(Inches(0.25), Ksi(58.0)),
            PlatePart::new(Inches(0.5), Ksi(65.0)),
            PlatePart::new(Inches(0.25), Ksi(58.0)),
        ];
        let r = bearing_strength_bolts(DesignMethod::Asd, Inches(0.75), &parts).unwrap();
        assert_eq!(r.len(), 3);
        assert_eq!(r[0], r[2]);
        assert_eq!(r.governing_index(), Some(0));
    }

    #[test]
    fn test_tearout() {
        let parts = [
            EdgePart::new(Inches(1.5), Inches(0.5), Ksi(58.0)),
            EdgePart::new(Inches(1.25), Inches(0.375), Ksi(58.0)),
        ];
        let r = tearout_strength_bolts(DesignMethod::Lrfd, Inches(0.75), &parts).unwrap();
        // lc1 = 1.0625, lc2 = 0.8125
        let rn1 = tearout_nominal(Inches(1.0625), Inches(0.5), Ksi(58.0));
        let rn2 = tearout_nominal(Inches(0.8125), Inches(0.375), Ksi(58.0));
        assert_eq!(r[0], LimitState::BoltTearout.design_strength(DesignMethod::Lrfd, rn1).unwrap());
        assert_eq!(r[1], rn2 * 0.75);
        assert_relative_eq!(r[0].0, 0.75 * 1.2 * 1.0625 * 0.5 * 58.0, epsilon = 1e-9);
    }

    #[test]
    fn test_tearout_with_tiny_edge_is_not_positive() {
        let parts = [EdgePart::new(Inches(0.4375), Inches(0.5), Ksi(58.0))];
        let r = tearout_strength_bolts(DesignMethod::Asd, Inches(0.75), &parts).unwrap();
        assert_eq!(r[0], Kips(0.0));

        let parts = [EdgePart::new(Inches(0.25), Inches(0.5), Ksi(58.0))];
        let r = tearout_strength_bolts(DesignMethod::Asd, Inches(0.75), &parts).unwrap();
        assert!(r[0].0 < 0.0);
    }

    #[test]
    fn test_unit_invariance() {
        let imperial = shear_strength_bolts("LRFD", Quantity::inches(0.75), Quantity::ksi(120.0)).unwrap();
        let metric = shear_strength_bolts(
            "LRFD",
            Quantity::millimeters(19.05),
            Quantity::megapascals(120.0 * 6.894_757_293_168_361),
        )
        .unwrap();
        assert_relative_eq!(imperial.0, metric.0, max_relative = 1e-12);

        let metric_parts = [
            PlatePart::new(Quantity::millimeters(12.7), Quantity::psi(58_000.0)),
            PlatePart::new(Quantity::millimeters(9.525), Quantity::psi(58_000.0)),
        ];
        let a = bearing_strength_bolts("ASD", Quantity::inches(0.75), &plates()).unwrap();
        let b = bearing_strength_bolts("ASD", Quantity::millimeters(19.05), &metric_parts).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            assert_relative_eq!(x.0, y.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_invalid_method() {
        let parts = [EdgePart::new(Inches(1.5), Inches(0.5), Ksi(58.0))];
        let errs = [
            shear_strength_bolts("XYZ", Inches(0.75), Ksi(120.0)).unwrap_err(),
            tensile_strength_bolts("XYZ", Inches(0.75), Ksi(120.0)).unwrap_err(),
            bearing_strength_bolts("XYZ", Inches(0.75), &plates()).unwrap_err(),
            tearout_strength_bolts("XYZ", Inches(0.75), &parts).unwrap_err(),
        ];
        for err in errs {
            assert_eq!(err, CalcError::invalid_design_method("XYZ"));
        }
    }

    #[test]
    fn test_swapped_arguments_are_caught() {
        let err = shear_strength_bolts("ASD", Ksi(120.0), Inches(0.75)).unwrap_err();
        assert_eq!(
            err,
            CalcError::dimension_mismatch("f_u", Dimension::Stress, Dimension::Length, "in")
        );
    }
}
