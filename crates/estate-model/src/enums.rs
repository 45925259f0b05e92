//! Type-safe prefix enumerations for building and unit codes.
//!
//! Building and unit categories are stored as plain strings by the host
//! application; the `for_category` / `for_unit_type` lookups accept those
//! strings leniently, while `FromStr` on the enums gives callers a strict
//! parse of a bare two-letter tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Two-letter prefix of a building code.
///
/// - `ZR`: residential, single block
/// - `ZM`: residential, multiple blocks
/// - `ZP`: parking (separate or integrated)
/// - `ZI`: infrastructure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingPrefix {
    Residential,
    ResidentialMulti,
    Parking,
    Infrastructure,
}

impl BuildingPrefix {
    /// Returns the two-letter tag as it appears in rendered codes.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildingPrefix::Residential => "ZR",
            BuildingPrefix::ResidentialMulti => "ZM",
            BuildingPrefix::Parking => "ZP",
            BuildingPrefix::Infrastructure => "ZI",
        }
    }

    /// Resolve the prefix for a building category string.
    ///
    /// The generic `residential` / `residential_main` categories pick their
    /// prefix from `has_multiple_blocks`; the remaining categories map
    /// through a fixed table. Unknown categories fall back to `Residential`:
    /// category strings come from an external store, and a display code is
    /// still expected for rows this library has never heard of.
    pub fn for_category(category: &str, has_multiple_blocks: bool) -> Self {
        match category {
            "residential" | "residential_main" => {
                if has_multiple_blocks {
                    BuildingPrefix::ResidentialMulti
                } else {
                    BuildingPrefix::Residential
                }
            }
            "residential_single" => BuildingPrefix::Residential,
            "residential_multi" => BuildingPrefix::ResidentialMulti,
            "parking_separate" | "parking_integrated" => BuildingPrefix::Parking,
            "infrastructure" => BuildingPrefix::Infrastructure,
            _ => BuildingPrefix::Residential,
        }
    }
}

impl fmt::Display for BuildingPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BuildingPrefix {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ZR" => Ok(BuildingPrefix::Residential),
            "ZM" => Ok(BuildingPrefix::ResidentialMulti),
            "ZP" => Ok(BuildingPrefix::Parking),
            "ZI" => Ok(BuildingPrefix::Infrastructure),
            _ => Err(ModelError::UnknownPrefix(s.to_string())),
        }
    }
}

/// Two-letter prefix of a unit code.
///
/// - `EF`: flat-class units (flats, both halves of a duplex)
/// - `EO`: offices and other non-residential units
/// - `EP`: parking places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitPrefix {
    Flat,
    Office,
    ParkingPlace,
}

impl UnitPrefix {
    /// Returns the two-letter tag as it appears in rendered codes.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitPrefix::Flat => "EF",
            UnitPrefix::Office => "EO",
            UnitPrefix::ParkingPlace => "EP",
        }
    }

    /// Resolve the prefix for a unit-type string.
    ///
    /// Unknown types fall back to `Flat`, same leniency rationale as
    /// [`BuildingPrefix::for_category`].
    pub fn for_unit_type(unit_type: &str) -> Self {
        match unit_type {
            "flat" | "duplex_up" | "duplex_down" => UnitPrefix::Flat,
            "office" | "office_inventory" | "non_res_block" | "infrastructure" => {
                UnitPrefix::Office
            }
            "parking_place" => UnitPrefix::ParkingPlace,
            _ => UnitPrefix::Flat,
        }
    }
}

impl fmt::Display for UnitPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UnitPrefix {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EF" => Ok(UnitPrefix::Flat),
            "EO" => Ok(UnitPrefix::Office),
            "EP" => Ok(UnitPrefix::ParkingPlace),
            _ => Err(ModelError::UnknownPrefix(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn building_prefix_for_category() {
        assert_eq!(
            BuildingPrefix::for_category("residential", false),
            BuildingPrefix::Residential
        );
        assert_eq!(
            BuildingPrefix::for_category("residential", true),
            BuildingPrefix::ResidentialMulti
        );
        assert_eq!(
            BuildingPrefix::for_category("residential_main", true),
            BuildingPrefix::ResidentialMulti
        );
        assert_eq!(
            BuildingPrefix::for_category("parking_separate", false),
            BuildingPrefix::Parking
        );
        assert_eq!(
            BuildingPrefix::for_category("parking_integrated", true),
            BuildingPrefix::Parking
        );
        assert_eq!(
            BuildingPrefix::for_category("infrastructure", false),
            BuildingPrefix::Infrastructure
        );
    }

    #[test]
    fn building_prefix_unknown_category_defaults_to_residential() {
        assert_eq!(
            BuildingPrefix::for_category("warehouse", false),
            BuildingPrefix::Residential
        );
        assert_eq!(
            BuildingPrefix::for_category("", true),
            BuildingPrefix::Residential
        );
    }

    #[test]
    fn unit_prefix_for_unit_type() {
        assert_eq!(UnitPrefix::for_unit_type("flat"), UnitPrefix::Flat);
        assert_eq!(UnitPrefix::for_unit_type("duplex_up"), UnitPrefix::Flat);
        assert_eq!(UnitPrefix::for_unit_type("duplex_down"), UnitPrefix::Flat);
        assert_eq!(UnitPrefix::for_unit_type("office"), UnitPrefix::Office);
        assert_eq!(
            UnitPrefix::for_unit_type("office_inventory"),
            UnitPrefix::Office
        );
        assert_eq!(
            UnitPrefix::for_unit_type("non_res_block"),
            UnitPrefix::Office
        );
        assert_eq!(
            UnitPrefix::for_unit_type("infrastructure"),
            UnitPrefix::Office
        );
        assert_eq!(
            UnitPrefix::for_unit_type("parking_place"),
            UnitPrefix::ParkingPlace
        );
        assert_eq!(UnitPrefix::for_unit_type("garden"), UnitPrefix::Flat);
    }

    #[test]
    fn prefix_from_str_round_trips() {
        for prefix in [
            BuildingPrefix::Residential,
            BuildingPrefix::ResidentialMulti,
            BuildingPrefix::Parking,
            BuildingPrefix::Infrastructure,
        ] {
            assert_eq!(prefix.as_str().parse::<BuildingPrefix>().unwrap(), prefix);
        }
        assert!("ZX".parse::<BuildingPrefix>().is_err());
        assert!("EF".parse::<BuildingPrefix>().is_err());
        assert!("EX".parse::<UnitPrefix>().is_err());
    }
}
