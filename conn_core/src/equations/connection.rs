//! # Connection Strength Formulas
//!
//! Nominal-strength equations for bolted and welded connections, in canonical
//! inch / ksi / kip units. These functions do no unit conversion and no
//! validation; the calculators in [`crate::calculations`] normalize inputs,
//! then call into here.
//!
//! ## Notation
//!
//! - `d` = Bolt diameter
//! - `t` = Thickness of the connected part
//! - `Fu`, `Fy` = Minimum tensile / yield stress
//! - `lc` = Clear distance from the hole edge to the part edge
//! - `n` = Number of bolts across the net section
//! - `U` = Shear lag factor
//! - `w` = Fillet weld leg size (sixteenths of an inch)
//!
//! ## References
//!
//! - AISC 360-22 Chapter J: Design of Connections
//! - AISC 360-22 Chapter D: Design of Members for Tension

use crate::aisc_factors::{
    BASE_METAL_RUPTURE_RATIO, BEARING_COEFFICIENT, ELECTRODE_STRENGTH, FASTENER_SHEAR_RATIO,
    FASTENER_TENSION_RATIO, FILLET_THROAT_FACTOR, FILLET_THROAT_FACTOR_TABULATED,
    NET_SECTION_HOLE_CLEARANCE, SHEAR_STRESS_RATIO, TEAROUT_COEFFICIENT, TEAROUT_HOLE_OVERSIZE,
    WELD_SIZE_DENOMINATOR, WELD_STRESS_RATIO,
};
use crate::units::{Inches, Kips, KipsPerInch, Ksi, SqIn};

// =============================================================================
// FASTENER FORMULAS
// AISC 360-22 J3.7, Table J3.2
// =============================================================================

/// Nominal shear stress of a fastener
///
/// # Formula
/// Fnv = 0.45 Fu
#[inline]
pub fn fastener_shear_stress(fu: Ksi) -> Ksi {
    FASTENER_SHEAR_RATIO * fu
}

/// Nominal tensile stress of a fastener
///
/// # Formula
/// Fnt = 0.75 Fu
#[inline]
pub fn fastener_tension_stress(fu: Ksi) -> Ksi {
    FASTENER_TENSION_RATIO * fu
}

/// Gross (unthreaded) bolt area
///
/// # Formula
/// Ab = π d² / 4
///
/// # Example
/// ```rust
/// use conn_core::equations::connection::bolt_area;
/// use conn_core::units::Inches;
///
/// let ab = bolt_area(Inches(0.75));
/// assert!((ab.0 - 0.4418).abs() < 1e-4);
/// ```
#[inline]
pub fn bolt_area(d: Inches) -> SqIn {
    (std::f64::consts::PI / 4.0) * (d * d)
}

/// Nominal strength of one bolt on one shear plane (or in tension)
///
/// # Formula
/// Rn = Fn Ab
#[inline]
pub fn bolt_nominal_strength(fn_stress: Ksi, d: Inches) -> Kips {
    fn_stress * bolt_area(d)
}

// =============================================================================
// BEARING AND TEAROUT
// AISC 360-22 J3.11(a)
// =============================================================================

/// Nominal bearing strength of one bolt on one connected part
///
/// # Formula
/// Rn = 2.4 d t Fu
#[inline]
pub fn bearing_nominal(d: Inches, t: Inches, fu: Ksi) -> Kips {
    BEARING_COEFFICIENT * (d * t) * fu
}

/// Clear distance from the edge of a standard hole to the edge of the part
///
/// ```text
///   ┌──────────────────────┐
///   │        ╭───╮         │
///   │        │ ● │←─ lc ──→│
///   │        ╰───╯         │
///   └──────────────────────┘
///            ←── edge ────→
/// ```
///
/// # Formula
/// lc = edge − (d + 1/8") / 2
///
/// Not clamped: a hole that breaks out of the part gives lc ≤ 0.
#[inline]
pub fn tearout_clear_distance(edge: Inches, d: Inches) -> Inches {
    edge - (d + TEAROUT_HOLE_OVERSIZE) / 2.0
}

/// Nominal tearout strength of one bolt on one connected part
///
/// # Formula
/// Rn = 1.2 lc t Fu
#[inline]
pub fn tearout_nominal(lc: Inches, t: Inches, fu: Ksi) -> Kips {
    TEAROUT_COEFFICIENT * (lc * t) * fu
}

// =============================================================================
// CONNECTED ELEMENTS
// AISC 360-22 J4.1, J4.2
// =============================================================================

/// Width remaining after deducting a line of bolt holes
///
/// # Formula
/// wn = L − (d + 0.063") n
///
/// Not clamped: too many holes gives wn ≤ 0.
#[inline]
pub fn net_width(length: Inches, d: Inches, bolt_count: u32) -> Inches {
    length - (d + NET_SECTION_HOLE_CLEARANCE) * f64::from(bolt_count)
}

/// Nominal shear yield strength
///
/// # Formula
/// Rn = 0.60 Fy Agv,  Agv = t L
#[inline]
pub fn shear_yield_nominal(fy: Ksi, t: Inches, length: Inches) -> Kips {
    SHEAR_STRESS_RATIO * fy * (t * length)
}

/// Nominal shear rupture strength
///
/// # Formula
/// Rn = 0.60 Fu Anv,  Anv = t wn
#[inline]
pub fn shear_rupture_nominal(fu: Ksi, t: Inches, net_width: Inches) -> Kips {
    SHEAR_STRESS_RATIO * fu * (t * net_width)
}

/// Nominal tensile yield strength
///
/// # Formula
/// Rn = Fy Ag,  Ag = t L
#[inline]
pub fn tensile_yield_nominal(fy: Ksi, t: Inches, length: Inches) -> Kips {
    fy * (t * length)
}

/// Nominal tensile rupture strength
///
/// # Formula
/// Rn = Fu Ae,  Ae = An U,  An = t wn
#[inline]
pub fn tensile_rupture_nominal(fu: Ksi, t: Inches, net_width: Inches, shear_lag: f64) -> Kips {
    fu * (t * net_width) * shear_lag
}

// =============================================================================
// FILLET WELDS
// AISC 360-22 J2.4, Table J2.4
// =============================================================================

/// Minimum fillet weld leg size for the thinner connected part
///
/// | Thinner part t (in)  | Min. leg (in) |
/// |----------------------|---------------|
/// | t < 1/4              | 1/8           |
/// | 1/4 ≤ t < 1/2        | 3/16          |
/// | 1/2 ≤ t < 3/4        | 1/4           |
/// | 3/4 ≤ t              | 5/16          |
#[inline]
pub fn min_fillet_weld_size(t_min: Inches) -> Inches {
    let t = t_min.0;
    let size = if t < 0.25 {
        0.1250
    } else if t < 0.5 {
        0.1875
    } else if t < 0.75 {
        0.2500
    } else {
        0.3125
    };
    Inches(size)
}

/// Weld leg size in inches from sixteenths
#[inline]
pub fn weld_leg(size_16ths: f64) -> Inches {
    Inches(size_16ths / WELD_SIZE_DENOMINATOR)
}

/// Nominal weld metal strength of a fillet weld group
///
/// # Formula
/// Rn = 0.60 FEXX (√2/2) w L × sides
#[inline]
pub fn weld_metal_nominal(size_16ths: f64, length: Inches, sides: f64) -> Kips {
    let throat_stress = WELD_STRESS_RATIO * ELECTRODE_STRENGTH * FILLET_THROAT_FACTOR;
    (throat_stress * weld_leg(size_16ths)) * length * sides
}

/// Weld metal strength per inch of a single fillet, from the tabulated throat
///
/// # Formula
/// q = 0.60 FEXX (0.707 w)
#[inline]
pub fn weld_strength_per_length(size_16ths: f64) -> KipsPerInch {
    let throat = weld_leg(size_16ths) * FILLET_THROAT_FACTOR_TABULATED;
    (WELD_STRESS_RATIO * ELECTRODE_STRENGTH) * throat
}

/// Base metal thickness needed so the part does not rupture before the weld
///
/// # Formula
/// t_req = sides q / (0.6 Fu)
#[inline]
pub fn base_metal_required_thickness(q: KipsPerInch, sides: f64, fu: Ksi) -> Inches {
    (q * sides) / (BASE_METAL_RUPTURE_RATIO * fu)
}
