//! # Fastener Strength Model
//!
//! Nominal stresses of bolt material per AISC 360-22 Table J3.2, derived from
//! the bolt's minimum tensile strength:
//!
//! ```text
//! Fnv = 0.45 Fu   (shear, threads not excluded from the shear plane)
//! Fnt = 0.75 Fu   (tension)
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::{fastener_shear_stress, fastener_tension_stress};
use crate::errors::CalcResult;
use crate::units::{Ksi, Quantity};

use super::stress_ksi;

/// Nominal shear and tensile stresses of a fastener material
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FastenerStresses {
    /// Nominal shear stress Fnv (ksi)
    pub fnv: Ksi,
    /// Nominal tensile stress Fnt (ksi)
    pub fnt: Ksi,
}

/// Derive (Fnv, Fnt) from the fastener's ultimate tensile strength.
///
/// # Errors
/// `DimensionMismatch` if `f_u` is not a stress.
///
/// # Example
/// ```rust
/// use conn_core::calculations::fastener::nominal_fastener_strength;
/// use conn_core::units::Quantity;
///
/// let (fnv, fnt) = nominal_fastener_strength(Quantity::ksi(120.0)).unwrap();
/// assert!((fnv.0 - 54.0).abs() < 1e-12);
/// assert!((fnt.0 - 90.0).abs() < 1e-12);
/// ```
pub fn nominal_fastener_strength(f_u: impl Into<Quantity>) -> CalcResult<(Ksi, Ksi)> {
    let stresses = fastener_stresses(f_u)?;
    Ok((stresses.fnv, stresses.fnt))
}

/// Same as [`nominal_fastener_strength`], with named fields.
pub fn fastener_stresses(f_u: impl Into<Quantity>) -> CalcResult<FastenerStresses> {
    let fu = stress_ksi(&f_u.into(), "f_u")?;
    Ok(FastenerStresses {
        fnv: fastener_shear_stress(fu),
        fnt: fastener_tension_stress(fu),
    })
}
