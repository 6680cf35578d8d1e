//! Structural Steel and Bolt Grades (ASTM)
//!
//! Minimum specified yield (Fy) and tensile (Fu) stresses for the plate and
//! shape grades commonly used in connections, and minimum tensile strengths
//! for structural bolt grades.
//!
//! ## Data Source
//!
//! AISC Steel Construction Manual, 16th Ed., Table 2-3 (plates/shapes) and
//! Table 2-6 (fasteners), using the thinnest-thickness range for each grade.
//!
//! ## Example
//!
//! ```rust
//! use conn_core::materials::steel::{BoltGrade, SteelGrade};
//!
//! let plate = SteelGrade::A36;
//! assert_eq!(plate.fy().value, 36.0);
//! assert_eq!(plate.fu().value, 58.0);
//!
//! let bolt = BoltGrade::from_str_flexible("a325").unwrap();
//! assert_eq!(bolt.fu().value, 120.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::Quantity;

/// ASTM grade of a connected plate or shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SteelGrade {
    /// ASTM A36 carbon steel (plates, angles, channels)
    #[serde(rename = "A36")]
    #[default]
    A36,
    /// ASTM A572 Grade 50 high-strength low-alloy
    #[serde(rename = "A572-50")]
    A572Gr50,
    /// ASTM A992 (W-shapes)
    #[serde(rename = "A992")]
    A992,
    /// ASTM A529 Grade 50
    #[serde(rename = "A529-50")]
    A529Gr50,
    /// ASTM A500 Grade C (rectangular HSS)
    #[serde(rename = "A500-C")]
    A500GrC,
}

impl SteelGrade {
    /// All steel grades for selection lists
    pub const ALL: [SteelGrade; 5] = [
        SteelGrade::A36,
        SteelGrade::A572Gr50,
        SteelGrade::A992,
        SteelGrade::A529Gr50,
        SteelGrade::A500GrC,
    ];

    /// Parse from a loose user-entered string ("A572 Gr 50", "a992", ...)
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let key: String = s
            .to_uppercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match key.as_str() {
            "A36" => Ok(SteelGrade::A36),
            "A57250" | "A572GR50" => Ok(SteelGrade::A572Gr50),
            "A992" => Ok(SteelGrade::A992),
            "A52950" | "A529GR50" => Ok(SteelGrade::A529Gr50),
            "A500C" | "A500GRC" => Ok(SteelGrade::A500GrC),
            _ => Err(CalcError::material_not_found(s)),
        }
    }

    /// Minimum yield stress Fy (ksi)
    pub fn fy_ksi(&self) -> f64 {
        match self {
            SteelGrade::A36 => 36.0,
            SteelGrade::A572Gr50 => 50.0,
            SteelGrade::A992 => 50.0,
            SteelGrade::A529Gr50 => 50.0,
            SteelGrade::A500GrC => 50.0,
        }
    }

    /// Minimum tensile stress Fu (ksi)
    pub fn fu_ksi(&self) -> f64 {
        match self {
            SteelGrade::A36 => 58.0,
            SteelGrade::A572Gr50 => 65.0,
            SteelGrade::A992 => 65.0,
            SteelGrade::A529Gr50 => 70.0,
            SteelGrade::A500GrC => 62.0,
        }
    }

    /// Minimum yield stress as a quantity
    pub fn fy(&self) -> Quantity {
        Quantity::ksi(self.fy_ksi())
    }

    /// Minimum tensile stress as a quantity
    pub fn fu(&self) -> Quantity {
        Quantity::ksi(self.fu_ksi())
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::A36 => "ASTM A36",
            SteelGrade::A572Gr50 => "ASTM A572 Gr. 50",
            SteelGrade::A992 => "ASTM A992",
            SteelGrade::A529Gr50 => "ASTM A529 Gr. 50",
            SteelGrade::A500GrC => "ASTM A500 Gr. C",
        }
    }
}

impl std::str::FromStr for SteelGrade {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// ASTM grade of a structural bolt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BoltGrade {
    /// ASTM A307 common bolt
    A307,
    /// ASTM F3125 Grade A325 (Group 120)
    #[default]
    A325,
    /// ASTM F3125 Grade A490 (Group 150)
    A490,
}

impl BoltGrade {
    /// All bolt grades for selection lists
    pub const ALL: [BoltGrade; 3] = [BoltGrade::A307, BoltGrade::A325, BoltGrade::A490];

    /// Parse from a loose user-entered string
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let key: String = s
            .to_uppercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match key.as_str() {
            "A307" => Ok(BoltGrade::A307),
            "A325" | "F3125A325" | "GROUPA" | "GROUP120" => Ok(BoltGrade::A325),
            "A490" | "F3125A490" | "GROUPB" | "GROUP150" => Ok(BoltGrade::A490),
            _ => Err(CalcError::material_not_found(s)),
        }
    }

    /// Minimum tensile strength Fu (ksi)
    pub fn fu_ksi(&self) -> f64 {
        match self {
            BoltGrade::A307 => 60.0,
            BoltGrade::A325 => 120.0,
            BoltGrade::A490 => 150.0,
        }
    }

    /// Minimum tensile strength as a quantity
    pub fn fu(&self) -> Quantity {
        Quantity::ksi(self.fu_ksi())
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            BoltGrade::A307 => "ASTM A307",
            BoltGrade::A325 => "ASTM F3125 Gr. A325",
            BoltGrade::A490 => "ASTM F3125 Gr. A490",
        }
    }
}

impl std::str::FromStr for BoltGrade {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}

impl std::fmt::Display for BoltGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fu_exceeds_fy() {
        for grade in SteelGrade::ALL {
            assert!(grade.fu_ksi() > grade.fy_ksi(), "{grade}");
        }
    }

    #[test]
    fn test_flexible_parsing() {
        assert_eq!(SteelGrade::from_str_flexible("A572 Gr. 50").unwrap(), SteelGrade::A572Gr50);
        assert_eq!(SteelGrade::from_str_flexible("a500-c").unwrap(), SteelGrade::A500GrC);
        assert_eq!(BoltGrade::from_str_flexible("F3125 A490").unwrap(), BoltGrade::A490);
        assert_eq!("A992".parse::<SteelGrade>().unwrap(), SteelGrade::A992);
        assert_eq!("a307".parse::<BoltGrade>().unwrap(), BoltGrade::A307);
        assert!(matches!(
            SteelGrade::from_str_flexible("A999"),
            Err(CalcError::MaterialNotFound { .. })
        ));
    }

    #[test]
    fn test_quantities_are_stresses() {
        assert_eq!(SteelGrade::A992.fy().to_ksi().unwrap().0, 50.0);
        assert_eq!(BoltGrade::A490.fu().to_ksi().unwrap().0, 150.0);
        assert!(BoltGrade::A307.fu().to_inches().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&SteelGrade::A572Gr50).unwrap();
        assert_eq!(json, "\"A572-50\"");
        let roundtrip: SteelGrade = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, SteelGrade::A572Gr50);
    }
}
