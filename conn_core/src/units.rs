//! # Unit Types
//!
//! Two layers of unit handling:
//!
//! - [`Quantity`]: a magnitude tagged with a [`Unit`]. This is what callers
//!   hand to the calculators. It can hold inches or millimetres, ksi or MPa,
//!   and is checked for the right physical [`Dimension`] at the boundary.
//! - Canonical newtypes ([`Inches`], [`Ksi`], [`Kips`], [`SqIn`], [`KipsPerInch`]):
//!   lightweight f64 wrappers used inside the calculators once every input has
//!   been normalized. Arithmetic between them is dimension-correct by
//!   construction (`Ksi * SqIn = Kips`).
//!
//! ## US Customary Canonical Units
//!
//! AISC connection equations are written in inch/kip units, so everything
//! normalizes to:
//! - Length: inches (in)
//! - Stress: kips per square inch (ksi)
//! - Force: kips (1 kip = 1000 lbf)
//!
//! The conversion table is a static `match`; there is no unit registry.
//!
//! ## Example
//!
//! ```rust
//! use conn_core::units::{Quantity, Unit};
//!
//! let dia = Quantity::millimeters(19.05);
//! let dia_in = dia.to_inches().unwrap();
//! assert!((dia_in.0 - 0.75).abs() < 1e-12);
//!
//! let fu: Quantity = "400 MPa".parse().unwrap();
//! assert_eq!(fu.unit, Unit::Megapascal);
//! assert!(fu.to_inches().is_err()); // a stress is not a length
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};

/// Millimetres per inch (exact by definition)
pub const MM_PER_INCH: f64 = 25.4;

/// Newtons per kip (1000 lbf, exact by definition of the pound-force)
pub const NEWTONS_PER_KIP: f64 = 4448.2216152605;

/// Pascals per ksi (NEWTONS_PER_KIP / 0.0254² m²)
pub const PASCALS_PER_KSI: f64 = 6_894_757.293_168_361;

// ============================================================================
// Dimensions and Units
// ============================================================================

/// Physical dimension of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Length,
    Stress,
    Force,
    Dimensionless,
}

impl Dimension {
    /// Canonical unit that calculators normalize this dimension to
    pub fn canonical_unit(&self) -> Unit {
        match self {
            Dimension::Length => Unit::Inch,
            Dimension::Stress => Unit::Ksi,
            Dimension::Force => Unit::Kip,
            Dimension::Dimensionless => Unit::Unitless,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Length => "length",
            Dimension::Stress => "stress",
            Dimension::Force => "force",
            Dimension::Dimensionless => "dimensionless",
        };
        write!(f, "{}", name)
    }
}

/// Units accepted at the calculator boundary.
///
/// Serialized as the unit symbol (`"in"`, `"MPa"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    // Length
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "ft")]
    Foot,
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "m")]
    Meter,

    // Stress
    #[serde(rename = "ksi")]
    Ksi,
    #[serde(rename = "psi")]
    Psi,
    #[serde(rename = "Pa")]
    Pascal,
    #[serde(rename = "kPa")]
    Kilopascal,
    #[serde(rename = "MPa")]
    Megapascal,
    #[serde(rename = "GPa")]
    Gigapascal,

    // Force
    #[serde(rename = "kip")]
    Kip,
    #[serde(rename = "lbf")]
    PoundForce,
    #[serde(rename = "N")]
    Newton,
    #[serde(rename = "kN")]
    Kilonewton,

    #[serde(rename = "1")]
    Unitless,
}

impl Unit {
    /// All supported units
    pub const ALL: [Unit; 16] = [
        Unit::Inch,
        Unit::Foot,
        Unit::Millimeter,
        Unit::Centimeter,
        Unit::Meter,
        Unit::Ksi,
        Unit::Psi,
        Unit::Pascal,
        Unit::Kilopascal,
        Unit::Megapascal,
        Unit::Gigapascal,
        Unit::Kip,
        Unit::PoundForce,
        Unit::Newton,
        Unit::Kilonewton,
        Unit::Unitless,
    ];

    /// Physical dimension of this unit
    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::Inch | Unit::Foot | Unit::Millimeter | Unit::Centimeter | Unit::Meter => Dimension::Length,
            Unit::Ksi | Unit::Psi | Unit::Pascal | Unit::Kilopascal | Unit::Megapascal | Unit::Gigapascal => {
                Dimension::Stress
            }
            Unit::Kip | Unit::PoundForce | Unit::Newton | Unit::Kilonewton => Dimension::Force,
            Unit::Unitless => Dimension::Dimensionless,
        }
    }

    /// Unit symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Inch => "in",
            Unit::Foot => "ft",
            Unit::Millimeter => "mm",
            Unit::Centimeter => "cm",
            Unit::Meter => "m",
            Unit::Ksi => "ksi",
            Unit::Psi => "psi",
            Unit::Pascal => "Pa",
            Unit::Kilopascal => "kPa",
            Unit::Megapascal => "MPa",
            Unit::Gigapascal => "GPa",
            Unit::Kip => "kip",
            Unit::PoundForce => "lbf",
            Unit::Newton => "N",
            Unit::Kilonewton => "kN",
            Unit::Unitless => "1",
        }
    }

    /// Scale to the canonical unit of the same dimension as a `(numerator, denominator)` pair.
    ///
    /// canonical = value × numerator / denominator. Keeping the defining
    /// constant in the denominator (25.4, 4448.22...) avoids rounding an
    /// inverse before it is applied.
    fn canonical_scale(&self) -> (f64, f64) {
        match self {
            Unit::Inch => (1.0, 1.0),
            Unit::Foot => (12.0, 1.0),
            Unit::Millimeter => (1.0, MM_PER_INCH),
            Unit::Centimeter => (10.0, MM_PER_INCH),
            Unit::Meter => (1000.0, MM_PER_INCH),
            Unit::Ksi => (1.0, 1.0),
            Unit::Psi => (1.0, 1000.0),
            Unit::Pascal => (1.0, PASCALS_PER_KSI),
            Unit::Kilopascal => (1.0e3, PASCALS_PER_KSI),
            Unit::Megapascal => (1.0e6, PASCALS_PER_KSI),
            Unit::Gigapascal => (1.0e9, PASCALS_PER_KSI),
            Unit::Kip => (1.0, 1.0),
            Unit::PoundForce => (1.0, 1000.0),
            Unit::Newton => (1.0, NEWTONS_PER_KIP),
            Unit::Kilonewton => (1.0e3, NEWTONS_PER_KIP),
            Unit::Unitless => (1.0, 1.0),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Unit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim() {
            "in" | "inch" | "inches" | "\"" => Unit::Inch,
            "ft" | "foot" | "feet" | "'" => Unit::Foot,
            "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => Unit::Millimeter,
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => Unit::Centimeter,
            "m" | "meter" | "meters" | "metre" | "metres" => Unit::Meter,
            "ksi" => Unit::Ksi,
            "psi" => Unit::Psi,
            "Pa" | "pa" => Unit::Pascal,
            "kPa" | "kpa" => Unit::Kilopascal,
            "MPa" | "mpa" | "N/mm2" | "N/mm²" => Unit::Megapascal,
            "GPa" | "gpa" => Unit::Gigapascal,
            "kip" | "kips" | "k" => Unit::Kip,
            "lbf" | "lb" | "lbs" => Unit::PoundForce,
            "N" => Unit::Newton,
            "kN" | "kn" => Unit::Kilonewton,
            "1" | "" => Unit::Unitless,
            other => return Err(CalcError::unknown_unit(other)),
        };
        Ok(unit)
    }
}

// ============================================================================
// Quantity
// ============================================================================

/// A magnitude with a unit.
///
/// ## JSON Example
///
/// ```json
/// { "value": 0.75, "unit": "in" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    pub fn inches(value: f64) -> Self {
        Self::new(value, Unit::Inch)
    }

    pub fn feet(value: f64) -> Self {
        Self::new(value, Unit::Foot)
    }

    pub fn millimeters(value: f64) -> Self {
        Self::new(value, Unit::Millimeter)
    }

    pub fn ksi(value: f64) -> Self {
        Self::new(value, Unit::Ksi)
    }

    pub fn psi(value: f64) -> Self {
        Self::new(value, Unit::Psi)
    }

    pub fn megapascals(value: f64) -> Self {
        Self::new(value, Unit::Megapascal)
    }

    pub fn kips(value: f64) -> Self {
        Self::new(value, Unit::Kip)
    }

    pub fn kilonewtons(value: f64) -> Self {
        Self::new(value, Unit::Kilonewton)
    }

    pub fn dimensionless(value: f64) -> Self {
        Self::new(value, Unit::Unitless)
    }

    /// Physical dimension of this quantity
    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// Convert to another unit of the same dimension.
    pub fn convert_to(&self, target: Unit) -> CalcResult<Quantity> {
        let canonical = self.canonical(target.dimension())?;
        let (num, den) = target.canonical_scale();
        Ok(Quantity::new(canonical * den / num, target))
    }

    /// Normalize a length to inches
    pub fn to_inches(&self) -> CalcResult<Inches> {
        self.canonical(Dimension::Length).map(Inches)
    }

    /// Normalize a stress to ksi
    pub fn to_ksi(&self) -> CalcResult<Ksi> {
        self.canonical(Dimension::Stress).map(Ksi)
    }

    /// Normalize a force to kips
    pub fn to_kips(&self) -> CalcResult<Kips> {
        self.canonical(Dimension::Force).map(Kips)
    }

    fn canonical(&self, expected: Dimension) -> CalcResult<f64> {
        let found = self.dimension();
        if found != expected {
            return Err(CalcError::dimension_mismatch(
                "",
                expected,
                found,
                self.unit.symbol(),
            ));
        }
        let (num, den) = self.unit.canonical_scale();
        let value = self.value * num / den;
        tracing::trace!(
            from = %self,
            to = value,
            unit = expected.canonical_unit().symbol(),
            "normalized quantity"
        );
        Ok(value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Unitless => write!(f, "{}", self.value),
            unit => write!(f, "{} {}", self.value, unit),
        }
    }
}

impl FromStr for Quantity {
    type Err = CalcError;

    /// Parse `"<number> <unit>"`; the space is optional (`"0.75in"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (number, symbol) = split_number(s);
        let value: f64 = number
            .parse()
            .map_err(|_| CalcError::invalid_input("quantity", s, "Expected '<number> <unit>'"))?;
        let unit: Unit = symbol.parse()?;
        Ok(Quantity::new(value, unit))
    }
}

/// Split at the end of the numeric prefix, allowing exponents like `1e3`.
fn split_number(s: &str) -> (&str, &str) {
    let bytes = s.as_bytes();
    let mut end = 0;
    while end < bytes.len() {
        let c = bytes[end];
        let is_exponent = (c == b'e' || c == b'E')
            && end > 0
            && bytes
                .get(end + 1)
                .is_some_and(|n| n.is_ascii_digit() || *n == b'-' || *n == b'+');
        if c.is_ascii_digit() || c == b'.' || is_exponent || ((c == b'-' || c == b'+') && (end == 0 || matches!(bytes[end - 1], b'e' | b'E'))) {
            end += 1;
        } else {
            break;
        }
    }
    (&s[..end], s[end..].trim())
}

// ============================================================================
// Canonical Newtypes
// ============================================================================

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Stress in kips per square inch (ksi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ksi(pub f64);

/// Force in kips (1 kip = 1000 pounds)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kips(pub f64);

/// Area in square inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqIn(pub f64);

/// Line strength in kips per inch (weld strength per unit length)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KipsPerInch(pub f64);

impl From<Inches> for Quantity {
    fn from(v: Inches) -> Self {
        Quantity::inches(v.0)
    }
}

impl From<Ksi> for Quantity {
    fn from(v: Ksi) -> Self {
        Quantity::ksi(v.0)
    }
}

impl From<Kips> for Quantity {
    fn from(v: Kips) -> Self {
        Quantity::kips(v.0)
    }
}

impl fmt::Display for Kips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} kip", self.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Neg for $type {
            type Output = Self;
            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Mul<$type> for f64 {
            type Output = $type;
            fn mul(self, rhs: $type) -> Self::Output {
                rhs * self
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        /// Ratio of two like quantities
        impl Div for $type {
            type Output = f64;
            fn div(self, rhs: Self) -> Self::Output {
                self.0 / rhs.0
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }

            /// Smaller of two values
            pub fn min(self, other: Self) -> Self {
                Self(self.0.min(other.0))
            }
        }
    };
}

impl_arithmetic!(Inches);
impl_arithmetic!(Ksi);
impl_arithmetic!(Kips);
impl_arithmetic!(SqIn);
impl_arithmetic!(KipsPerInch);

// Cross-dimension products

impl Mul for Inches {
    type Output = SqIn;
    fn mul(self, rhs: Inches) -> SqIn {
        SqIn(self.0 * rhs.0)
    }
}

impl Mul<SqIn> for Ksi {
    type Output = Kips;
    fn mul(self, rhs: SqIn) -> Kips {
        Kips(self.0 * rhs.0)
    }
}

impl Mul<Ksi> for SqIn {
    type Output = Kips;
    fn mul(self, rhs: Ksi) -> Kips {
        Kips(self.0 * rhs.0)
    }
}

impl Mul<Inches> for Ksi {
    type Output = KipsPerInch;
    fn mul(self, rhs: Inches) -> KipsPerInch {
        KipsPerInch(self.0 * rhs.0)
    }
}

impl Mul<Inches> for KipsPerInch {
    type Output = Kips;
    fn mul(self, rhs: Inches) -> Kips {
        Kips(self.0 * rhs.0)
    }
}

impl Div<Ksi> for KipsPerInch {
    type Output = Inches;
    fn div(self, rhs: Ksi) -> Inches {
        Inches(self.0 / rhs.0)
    }
}
