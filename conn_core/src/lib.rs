//! # conn_core - Steel Connection Limit-State Engine
//!
//! `conn_core` computes available strengths of bolted and welded steel
//! connections per AISC 360-22, under either Allowable Strength Design (ASD,
//! nominal strength divided by Ω) or Load and Resistance Factor Design (LRFD,
//! nominal strength multiplied by φ).
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Every calculator is a pure function of its inputs
//! - **Unit-checked**: Inputs are quantities with units; a length passed where
//!   a stress belongs is an error, not a silently wrong answer
//! - **JSON-First**: Inputs, results, settings and errors implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use conn_core::calculations::{bearing_strength_bolts, shear_strength_bolts, PlatePart};
//! use conn_core::units::Quantity;
//!
//! // 3/4" A325 bolt in single shear, LRFD
//! let rv = shear_strength_bolts("LRFD", Quantity::inches(0.75), Quantity::ksi(120.0)).unwrap();
//! assert!((rv.0 - 17.89).abs() < 0.01);
//!
//! // Bearing on a 1/2" and a 3/8" A36 plate, ASD
//! let parts = [
//!     PlatePart::new(Quantity::inches(0.5), Quantity::ksi(58.0)),
//!     PlatePart::new(Quantity::inches(0.375), Quantity::ksi(58.0)),
//! ];
//! let rb = bearing_strength_bolts("ASD", Quantity::inches(0.75), &parts).unwrap();
//! assert!((rb.governing().0 - 19.575).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Bolt, connected element and fillet weld limit states
//! - [`design_method`] - ASD / LRFD selection
//! - [`aisc_factors`] - Ω / φ per limit state and fixed modeling constants
//! - [`equations`] - Nominal strength formulas in canonical units
//! - [`materials`] - Steel and bolt grades
//! - [`units`] - Quantities with units and canonical newtypes
//! - [`settings`] - Calculation defaults
//! - [`errors`] - Structured error types
//!
//! ## Logging
//!
//! Calculators emit `tracing` events at `debug` level (limit state, method,
//! nominal and design strength) and unit normalization at `trace` level.
//! No subscriber is installed by this crate.

pub mod aisc_factors;
pub mod calculations;
pub mod design_method;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use aisc_factors::{LimitState, ResistanceFactors};
pub use calculations::{ConnectionCheck, EdgePart, ElementPart, PartStrengths, PlatePart};
pub use design_method::{DesignMethod, IntoDesignMethod};
pub use errors::{CalcError, CalcResult};
pub use materials::{BoltGrade, SteelGrade};
pub use settings::CalcSettings;
pub use units::{Dimension, Inches, Kips, Ksi, Quantity, Unit};
