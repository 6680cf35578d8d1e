//! # Connection Design Equations
//!
//! All nominal-strength equations used by the limit-state calculators live in
//! one place so they can be checked line by line against the code.
//!
//! ## Modules
//!
//! - [`connection`] - Bolt, bearing/tearout, connected-element and fillet weld formulas
//!
//! ## Units
//!
//! Equations take and return canonical newtypes (`Inches`, `Ksi`, `Kips`).
//! Unit conversion from caller quantities happens before these are called.
//!
//! ## References
//!
//! - AISC 360-22: Specification for Structural Steel Buildings
//! - AISC Steel Construction Manual, 16th Edition

pub mod connection;

pub use connection::{
    // Fasteners
    fastener_shear_stress,
    fastener_tension_stress,
    bolt_area,
    bolt_nominal_strength,
    // Bearing / tearout
    bearing_nominal,
    tearout_clear_distance,
    tearout_nominal,
    // Connected elements
    net_width,
    shear_yield_nominal,
    shear_rupture_nominal,
    tensile_yield_nominal,
    tensile_rupture_nominal,
    // Fillet welds
    min_fillet_weld_size,
    weld_leg,
    weld_metal_nominal,
    weld_strength_per_length,
    base_metal_required_thickness,
};
