//! # Materials
//!
//! Steel and fastener grades for connection checks. Grades are a convenience
//! for filling in Fy / Fu; every calculator also accepts raw stress
//! quantities.
//!
//! ## Example
//!
//! ```rust
//! use conn_core::materials::{BoltGrade, SteelGrade};
//! use conn_core::calculations::bolt::shear_strength_bolts;
//! use conn_core::units::Quantity;
//!
//! let rn = shear_strength_bolts("LRFD", Quantity::inches(0.75), BoltGrade::A325.fu()).unwrap();
//! assert!((rn.0 - 17.89).abs() < 0.01);
//!
//! let plate_fy = SteelGrade::A36.fy();
//! assert_eq!(plate_fy.value, 36.0);
//! ```

pub mod steel;

pub use steel::{BoltGrade, SteelGrade};
