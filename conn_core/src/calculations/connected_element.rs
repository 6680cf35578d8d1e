//! # Connected Element Limit States
//!
//! Strength of plates and other connecting elements per AISC 360-22 J4:
//!
//! | Check            | Nominal strength         | Ω    | φ    |
//! |------------------|--------------------------|------|------|
//! | Shear yielding   | 0.60 Fy t L              | 1.50 | 1.00 |
//! | Shear rupture    | 0.60 Fu t wn             | 2.00 | 0.75 |
//! | Tensile yielding | Fy t L                   | 1.67 | 0.90 |
//! | Tensile rupture  | Fu t wn U                | 2.00 | 0.75 |
//!
//! where wn = L − (d + 0.063") n is the width left after a line of n holes.
//!
//! Every function evaluates each part independently and returns one result
//! per part. A net width that goes to zero or below (too many holes for the
//! element) produces a non-positive strength rather than an error.

use tracing::debug;

use crate::aisc_factors::{aisc_ref, LimitState};
use crate::design_method::{DesignMethod, IntoDesignMethod};
use crate::equations::{
    net_width, shear_rupture_nominal, shear_yield_nominal, tensile_rupture_nominal, tensile_yield_nominal,
};
use crate::errors::{CalcError, CalcResult};
use crate::units::{Inches, Kips, Ksi, Quantity};

use super::{length_in, per_part, stress_ksi, ElementPart, PartStrengths};

/// Normalized thickness, length and stress of one element
fn normalize(i: usize, part: &ElementPart) -> CalcResult<(Inches, Inches, Ksi)> {
    let t = length_in(&part.thickness, &format!("parts[{i}].thickness"))?;
    let len = length_in(&part.length, &format!("parts[{i}].length"))?;
    let stress = stress_ksi(&part.stress, &format!("parts[{i}].stress"))?;
    Ok((t, len, stress))
}

fn log_part(limit_state: LimitState, method: DesignMethod, part: usize, rn: Kips, strength: Kips) {
    debug!(
        limit_state = %limit_state,
        %method,
        part,
        nominal_kips = rn.0,
        design_kips = strength.0,
        "connected element strength"
    );
}

/// Shear yield strength of each element (`stress` = Fy).
///
/// # Example
/// ```rust
/// use conn_core::calculations::{connected_element::shear_yield, ElementPart};
/// use conn_core::units::Quantity;
///
/// let parts = [ElementPart::new(Quantity::inches(0.5), Quantity::inches(6.0), Quantity::ksi(36.0))];
/// let r = shear_yield("ASD", &parts).unwrap();
/// // 0.60 × 36 × 0.5 × 6 / 1.50
/// assert!((r[0].0 - 43.2).abs() < 1e-9);
/// ```
pub fn shear_yield(method: impl IntoDesignMethod, parts: &[ElementPart]) -> CalcResult<PartStrengths> {
    let method = method.into_design_method()?;
    per_part(parts, |i, part| {
        let (t, len, fy) = normalize(i, part)?;
        let rn = shear_yield_nominal(fy, t, len);
        let strength = LimitState::ShearYield.design_strength(method, rn)?;
        log_part(LimitState::ShearYield, method, i, rn, strength);
        Ok(strength)
    })
}

/// Shear rupture strength of each element along a line of bolts (`stress` = Fu).
///
/// # Arguments
///
/// * `method` - ASD or LRFD
/// * `bolt_dia` - Bolt diameter; holes are taken as d + 0.063"
/// * `bolt_count` - Number of holes deducted from the shear plane
/// * `parts` - Elements along the shear plane
pub fn shear_rupture(
    method: impl IntoDesignMethod,
    bolt_dia: impl Into<Quantity>,
    bolt_count: u32,
    parts: &[ElementPart],
) -> CalcResult<PartStrengths> {
    let method = method.into_design_method()?;
    let d = length_in(&bolt_dia.into(), "bolt_dia")?;
    per_part(parts, |i, part| {
        let (t, len, fu) = normalize(i, part)?;
        let wn = net_width(len, d, bolt_count);
        let rn = shear_rupture_nominal(fu, t, wn);
        let strength = LimitState::ShearRupture.design_strength(method, rn)?;
        log_part(LimitState::ShearRupture, method, i, rn, strength);
        Ok(strength)
    })
}

/// Tensile yield strength of each element on its gross section (`stress` = Fy).
pub fn tensile_yield(method: impl IntoDesignMethod, parts: &[ElementPart]) -> CalcResult<PartStrengths> {
    let method = method.into_design_method()?;
    per_part(parts, |i, part| {
        let (t, width, fy) = normalize(i, part)?;
        let rn = tensile_yield_nominal(fy, t, width);
        let strength = LimitState::TensileYield.design_strength(method, rn)?;
        log_part(LimitState::TensileYield, method, i, rn, strength);
        Ok(strength)
    })
}

/// Tensile rupture strength of each element on its effective net section (`stress` = Fu).
///
/// `shear_lag` is the factor U from AISC 360-22 Table D3.1, supplied by the
/// caller. It must lie in (0, 1].
pub fn tensile_rupture(
    method: impl IntoDesignMethod,
    bolt_dia: impl Into<Quantity>,
    bolt_count: u32,
    shear_lag: f64,
    parts: &[ElementPart],
) -> CalcResult<PartStrengths> {
    let method = method.into_design_method()?;
    if !(shear_lag > 0.0 && shear_lag <= 1.0) {
        return Err(CalcError::invalid_input(
            "shear_lag",
            shear_lag.to_string(),
            format!("Shear lag factor U must be in (0, 1] ({})", aisc_ref::SHEAR_LAG),
        ));
    }
    let d = length_in(&bolt_dia.into(), "bolt_dia")?;
    per_part(parts, |i, part| {
        let (t, width, fu) = normalize(i, part)?;
        let wn = net_width(width, d, bolt_count);
        let rn = tensile_rupture_nominal(fu, t, wn, shear_lag);
        let strength = LimitState::TensileRupture.design_strength(method, rn)?;
        log_part(LimitState::TensileRupture, method, i, rn, strength);
        Ok(strength)
    })
}
