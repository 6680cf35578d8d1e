//! # Fillet Weld Limit States
//!
//! AISC 360-22 J2.4 with E70 electrode and equal-leg 45° fillets:
//!
//! - [`min_weld_size`] - Table J2.4 minimum leg for the thinnest part
//! - [`weld_material_strength`] - weld metal strength, Ω = 2.00 / φ = 0.75
//! - [`weld_rupture_strength`] - lesser of weld metal and base metal rupture
//!
//! Weld sizes are given in sixteenths of an inch (`5.0` = 5/16"). A weld
//! group is one line of fillet (`weld_sides = 1`) or a fillet on each side of
//! the joint (`weld_sides = 2`).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aisc_factors::{aisc_ref, LimitState};
use crate::design_method::IntoDesignMethod;
use crate::equations::{
    base_metal_required_thickness, min_fillet_weld_size, weld_metal_nominal, weld_strength_per_length,
};
use crate::errors::{CalcError, CalcResult};
use crate::units::{Inches, Kips, Quantity};

use super::{length_in, require_parts, stress_ksi, PlatePart};

/// Number of fillet lines in a weld group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeldSides {
    One,
    Two,
}

impl WeldSides {
    /// Accepts only 1 or 2
    pub fn from_count(count: u32) -> CalcResult<Self> {
        match count {
            1 => Ok(WeldSides::One),
            2 => Ok(WeldSides::Two),
            other => Err(CalcError::invalid_weld_sides(other)),
        }
    }

    pub fn count(&self) -> u32 {
        match self {
            WeldSides::One => 1,
            WeldSides::Two => 2,
        }
    }

    pub fn factor(&self) -> f64 {
        f64::from(self.count())
    }
}

/// Minimum fillet weld leg for the thinnest of the joined parts.
///
/// # Errors
/// - `InvalidInput` when no thickness is given, or any thickness is not a
///   positive finite length
/// - `DimensionMismatch` when a thickness is not a length
///
/// # Example
/// ```rust
/// use conn_core::calculations::weld::min_weld_size;
/// use conn_core::units::Inches;
///
/// let w = min_weld_size([Inches(0.25), Inches(0.625)]).unwrap();
/// assert_eq!(w, Inches(0.1875));
/// ```
pub fn min_weld_size(thicknesses: impl IntoIterator<Item = impl Into<Quantity>>) -> CalcResult<Inches> {
    let mut t_min: Option<Inches> = None;
    for (i, t) in thicknesses.into_iter().enumerate() {
        let t = length_in(&t.into(), &format!("thicknesses[{i}]"))?;
        if !(t.0.is_finite() && t.0 > 0.0) {
            return Err(CalcError::invalid_input(
                format!("thicknesses[{i}]"),
                t.0.to_string(),
                format!("Part thickness must be positive ({})", aisc_ref::MIN_WELD_SIZE),
            ));
        }
        t_min = Some(match t_min {
            Some(current) => current.min(t),
            None => t,
        });
    }

    let t_min = t_min.ok_or_else(|| {
        CalcError::invalid_input("thicknesses", "[]", "At least one part thickness is required")
    })?;

    let size = min_fillet_weld_size(t_min);
    debug!(t_min_in = t_min.0, weld_size_in = size.0, "minimum fillet weld size");
    Ok(size)
}

/// Weld metal strength of a fillet weld group.
///
/// Rn = 0.60 FEXX (√2/2) (w/16) L × sides
///
/// # Example
/// ```rust
/// use conn_core::calculations::weld::weld_material_strength;
/// use conn_core::units::Quantity;
///
/// // 1/4" fillet, 8" long, one side, ASD
/// let r = weld_material_strength("ASD", 4.0, Quantity::inches(8.0), 1).unwrap();
/// assert!((r.0 - 29.698).abs() < 1e-3);
/// ```
pub fn weld_material_strength(
    method: impl IntoDesignMethod,
    weld_size_16ths: f64,
    weld_length: impl Into<Quantity>,
    weld_sides: u32,
) -> CalcResult<Kips> {
    let method = method.into_design_method()?;
    let sides = WeldSides::from_count(weld_sides)?;
    let length = length_in(&weld_length.into(), "weld_length")?;

    let rn = weld_metal_nominal(weld_size_16ths, length, sides.factor());
    let strength = LimitState::WeldMaterial.design_strength(method, rn)?;
    debug!(
        limit_state = %LimitState::WeldMaterial,
        %method,
        weld_size_16ths,
        length_in = length.0,
        sides = sides.count(),
        nominal_kips = rn.0,
        design_kips = strength.0,
        "weld metal strength"
    );
    Ok(strength)
}

/// Weld group strength limited by rupture of the base metal it joins.
///
/// For each part the thickness needed to develop the weld is
/// `t_req = sides × q / (0.6 Fu)`, with `q` the per-inch strength of one
/// fillet. When any part is thinner than its `t_req`, the weld metal strength
/// is scaled by the smallest `t / t_req`; otherwise the weld metal governs
/// and its strength is returned unchanged.
pub fn weld_rupture_strength(
    method: impl IntoDesignMethod,
    weld_size_16ths: f64,
    weld_length: impl Into<Quantity>,
    weld_sides: u32,
    parts: &[PlatePart],
) -> CalcResult<Kips> {
    let method = method.into_design_method()?;
    let sides = WeldSides::from_count(weld_sides)?;
    require_parts(parts)?;

    let material = weld_material_strength(method, weld_size_16ths, weld_length, weld_sides)?;
    let q = weld_strength_per_length(weld_size_16ths);

    let mut reduction = f64::INFINITY;
    for (i, part) in parts.iter().enumerate() {
        let t = length_in(&part.thickness, &format!("parts[{i}].thickness"))?;
        let fu = stress_ksi(&part.fu, &format!("parts[{i}].fu"))?;
        let t_req = base_metal_required_thickness(q, sides.factor(), fu);
        let ratio = t / t_req;
        debug!(part = i, t_in = t.0, t_req_in = t_req.0, ratio, "base metal thickness ratio");
        reduction = reduction.min(ratio);
    }

    if reduction < 1.0 {
        let strength = material * reduction;
        debug!(%method, reduction, design_kips = strength.0, "base metal rupture governs");
        Ok(strength)
    } else {
        debug!(%method, design_kips = material.0, "weld metal governs");
        Ok(material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aisc_factors::{BASE_METAL_RUPTURE_RATIO, FILLET_THROAT_FACTOR, FILLET_THROAT_FACTOR_TABULATED};
    use crate::design_method::DesignMethod;
    use crate::units::Ksi;
    use approx::assert_relative_eq;

    #[test]
    fn test_min_weld_size_brackets() {
        assert_eq!(min_weld_size([Inches(0.1875)]).unwrap(), Inches(0.125));
        assert_eq!(min_weld_size([Inches(0.25)]).unwrap(), Inches(0.1875));
        assert_eq!(min_weld_size([Inches(0.4999)]).unwrap(), Inches(0.1875));
        assert_eq!(min_weld_size([Inches(0.5)]).unwrap(), Inches(0.25));
        assert_eq!(min_weld_size([Inches(0.75)]).unwrap(), Inches(0.3125));
        assert_eq!(min_weld_size([Inches(3.0)]).unwrap(), Inches(0.3125));
    }

    #[test]
    fn test_min_weld_size_uses_thinnest_part() {
        let w = min_weld_size([Inches(1.0), Inches(0.375), Inches(0.75)]).unwrap();
        assert_eq!(w, Inches(0.1875));

        let mixed = vec![Quantity::millimeters(25.4), Quantity::inches(0.5)];
        assert_eq!(min_weld_size(mixed).unwrap(), Inches(0.25));
    }

    #[test]
    fn test_min_weld_size_rejects_bad_thickness() {
        for t in [0.0, -0.25, f64::NAN] {
            let err = min_weld_size([Inches(t)]).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT", "t = {t}");
        }
        for bad in [f64::NAN, 0.0, -0.5, f64::INFINITY] {
            // a valid part alongside must not hide the bad one
            let err = min_weld_size([Inches(0.5), Inches(bad)]).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT", "t = {bad}");
            let err = min_weld_size([Inches(bad), Inches(0.5)]).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT", "t = {bad}");
        }
        let none: [Inches; 0] = [];
        assert_eq!(min_weld_size(none).unwrap_err().error_code(), "INVALID_INPUT");
        assert_eq!(
            min_weld_size([Ksi(36.0)]).unwrap_err().error_code(),
            "DIMENSION_MISMATCH"
        );
    }

    #[test]
    fn test_weld_material_strength() {
        // 5/16" fillet, 10" long, both sides
        let rn = 0.6 * 70.0 * FILLET_THROAT_FACTOR * 0.3125 * 10.0 * 2.0;
        let asd = weld_material_strength(DesignMethod::Asd, 5.0, Inches(10.0), 2).unwrap();
        let lrfd = weld_material_strength(DesignMethod::Lrfd, 5.0, Inches(10.0), 2).unwrap();
        assert_relative_eq!(asd.0, rn / 2.0, max_relative = 1e-12);
        assert_relative_eq!(lrfd.0, rn * 0.75, max_relative = 1e-12);
        assert_relative_eq!(lrfd.0, 139.2117, epsilon = 1e-3);
    }

    #[test]
    fn test_two_sides_doubles_strength() {
        let one = weld_material_strength("LRFD", 6.0, Inches(12.0), 1).unwrap();
        let two = weld_material_strength("LRFD", 6.0, Inches(12.0), 2).unwrap();
        assert_relative_eq!(two.0, 2.0 * one.0, max_relative = 1e-12);
    }

    #[test]
    fn test_invalid_weld_sides() {
        for sides in [0, 3, 4] {
            assert_eq!(
                weld_material_strength("ASD", 4.0, Inches(6.0), sides).unwrap_err(),
                CalcError::InvalidWeldSides { value: sides }
            );
            let parts = [PlatePart::new(Inches(0.5), Ksi(58.0))];
            assert_eq!(
                weld_rupture_strength("ASD", 4.0, Inches(6.0), sides, &parts).unwrap_err(),
                CalcError::InvalidWeldSides { value: sides }
            );
        }
    }

    #[test]
    fn test_weld_rupture_thick_parts_returns_weld_metal() {
        let parts = [
            PlatePart::new(Inches(2.0), Ksi(58.0)),
            PlatePart::new(Inches(1.5), Ksi(65.0)),
        ];
        for method in DesignMethod::ALL {
            let material = weld_material_strength(method, 5.0, Inches(10.0), 2).unwrap();
            let rupture = weld_rupture_strength(method, 5.0, Inches(10.0), 2, &parts).unwrap();
            assert_eq!(rupture, material);
        }
    }

    #[test]
    fn test_weld_rupture_thin_part_governs() {
        let parts = [
            PlatePart::new(Inches(0.75), Ksi(58.0)),
            PlatePart::new(Inches(0.25), Ksi(58.0)),
        ];
        let material = weld_material_strength("ASD", 5.0, Inches(10.0), 2).unwrap();
        let rupture = weld_rupture_strength("ASD", 5.0, Inches(10.0), 2, &parts).unwrap();

        let q = 0.6 * 70.0 * FILLET_THROAT_FACTOR_TABULATED * 5.0 / 16.0;
        let t_req = 2.0 * q / (BASE_METAL_RUPTURE_RATIO * 58.0);
        assert_relative_eq!(rupture.0, material.0 * 0.25 / t_req, max_relative = 1e-12);
        assert!(rupture < material);
    }

    #[test]
    fn test_single_side_needs_half_the_thickness() {
        // t_req for one 5/16" fillet on Fu = 58 ksi is about 0.267"
        let parts = [PlatePart::new(Inches(0.3), Ksi(58.0))];
        let one = weld_rupture_strength("LRFD", 5.0, Inches(4.0), 1, &parts).unwrap();
        assert_eq!(one, weld_material_strength("LRFD", 5.0, Inches(4.0), 1).unwrap());
        let two = weld_rupture_strength("LRFD", 5.0, Inches(4.0), 2, &parts).unwrap();
        assert!(two < weld_material_strength("LRFD", 5.0, Inches(4.0), 2).unwrap());
    }

    #[test]
    fn test_throat_factors_agree() {
        assert_relative_eq!(FILLET_THROAT_FACTOR, FILLET_THROAT_FACTOR_TABULATED, epsilon = 5e-4);
        assert_eq!((FILLET_THROAT_FACTOR * 1000.0).round() / 1000.0, FILLET_THROAT_FACTOR_TABULATED);
    }

    #[test]
    fn test_metric_inputs() {
        let parts = [PlatePart::new(Quantity::millimeters(6.35), Quantity::megapascals(400.0))];
        let metric = weld_rupture_strength("LRFD", 5.0, Quantity::millimeters(254.0), 2, &parts).unwrap();
        let fu = Quantity::megapascals(400.0).to_ksi().unwrap();
        let imperial = weld_rupture_strength("LRFD", 5.0, Inches(10.0), 2, &[PlatePart::new(Inches(0.25), fu)]).unwrap();
        assert_relative_eq!(metric.0, imperial.0, max_relative = 1e-12);
    }

    #[test]
    fn test_invalid_method() {
        let parts = [PlatePart::new(Inches(0.5), Ksi(58.0))];
        assert_eq!(
            weld_material_strength("XYZ", 4.0, Inches(6.0), 1).unwrap_err().error_code(),
            "INVALID_DESIGN_METHOD"
        );
        assert_eq!(
            weld_rupture_strength("XYZ", 4.0, Inches(6.0), 1, &parts).unwrap_err().error_code(),
            "INVALID_DESIGN_METHOD"
        );
    }

    #[test]
    fn test_weld_sides_enum() {
        assert_eq!(WeldSides::from_count(2).unwrap(), WeldSides::Two);
        assert_eq!(WeldSides::Two.factor(), 2.0);
        assert_eq!(WeldSides::One.count(), 1);
    }
}
