//! Validated newtypes over the raw code strings.
//!
//! The free functions in [`crate::codes`] are deliberately lenient; these
//! wrappers are for call sites that want a shape guarantee attached to the
//! value itself (persistence payloads, typed lookups).

use std::fmt;
use std::str::FromStr;

use crate::codes;
use crate::enums::{BuildingPrefix, UnitPrefix};
use crate::ModelError;

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ProjectCode(String);

impl ProjectCode {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        if !codes::is_valid_project_code(&value) {
            return Err(ModelError::InvalidProjectCode(value));
        }
        Ok(Self(value))
    }

    /// Render and validate a code for a project sequence number.
    ///
    /// Fails only when the sequence exceeds the 6-digit pad width.
    pub fn from_sequence(sequence: u64) -> Result<Self, ModelError> {
        Self::new(codes::generate_project_code(sequence))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn sequence(&self) -> u64 {
        codes::extract_number(&self.0)
    }
}

impl fmt::Display for ProjectCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectCode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct BuildingCode(String);

impl BuildingCode {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        if !codes::is_valid_building_code(&value) {
            return Err(ModelError::InvalidBuildingCode(value));
        }
        Ok(Self(value))
    }

    pub fn from_sequence(prefix: BuildingPrefix, sequence: u64) -> Result<Self, ModelError> {
        Self::new(codes::generate_building_code(prefix, sequence))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn prefix(&self) -> BuildingPrefix {
        // shape is checked at construction, the tag always parses
        self.0[..2].parse().unwrap_or(BuildingPrefix::Residential)
    }

    pub fn sequence(&self) -> u64 {
        codes::extract_number(&self.0)
    }
}

impl fmt::Display for BuildingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BuildingCode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct UnitCode(String);

impl UnitCode {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        if !codes::is_valid_unit_code(&value) {
            return Err(ModelError::InvalidUnitCode(value));
        }
        Ok(Self(value))
    }

    pub fn from_sequence(prefix: UnitPrefix, sequence: u64) -> Result<Self, ModelError> {
        Self::new(codes::generate_unit_code(prefix, sequence))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn prefix(&self) -> UnitPrefix {
        self.0[..2].parse().unwrap_or(UnitPrefix::Flat)
    }

    pub fn sequence(&self) -> u64 {
        codes::extract_number(&self.0)
    }
}

impl fmt::Display for UnitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for UnitCode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A fully validated three-tier identifier.
///
/// Invariant: a unit code is only present when a building code is present.
/// `Display` renders the hyphen-joined form; `FromStr` parses and validates
/// every present segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FullIdentifier {
    project: ProjectCode,
    building: Option<BuildingCode>,
    unit: Option<UnitCode>,
}

impl FullIdentifier {
    pub fn new(
        project: ProjectCode,
        building: Option<BuildingCode>,
        unit: Option<UnitCode>,
    ) -> Result<Self, ModelError> {
        if unit.is_some() && building.is_none() {
            return Err(ModelError::InvalidIdentifier(
                "unit code without a building code".to_string(),
            ));
        }
        Ok(Self {
            project,
            building,
            unit,
        })
    }

    pub fn project(&self) -> &ProjectCode {
        &self.project
    }

    pub fn building(&self) -> Option<&BuildingCode> {
        self.building.as_ref()
    }

    pub fn unit(&self) -> Option<&UnitCode> {
        self.unit.as_ref()
    }
}

impl fmt::Display for FullIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codes::format_full_identifier(
            self.project.as_str(),
            self.building.as_ref().map(BuildingCode::as_str),
            self.unit.as_ref().map(UnitCode::as_str),
        ))
    }
}

impl FromStr for FullIdentifier {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = codes::parse_identifier(s);
        let Some(project) = parsed.project_code else {
            return Err(ModelError::InvalidIdentifier(s.to_string()));
        };
        let project = ProjectCode::new(project)?;
        let building = parsed.building_code.map(BuildingCode::new).transpose()?;
        let unit = parsed.unit_code.map(UnitCode::new).transpose()?;
        Self::new(project, building, unit)
    }
}
