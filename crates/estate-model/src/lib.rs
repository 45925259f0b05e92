//! Identifier data model for real-estate project hierarchies.
//!
//! Projects, buildings and units carry short display codes that compose into
//! a three-tier identifier such as `UJ000001-ZR01-EF001`. This crate owns the
//! codec for that format: code generation from sequence numbers, prefix
//! resolution from host category strings, positional parsing, validation and
//! per-prefix sequence scoping. Everything here is pure and synchronous.

pub mod codes;
pub mod enums;
pub mod error;
pub mod ids;

pub use codes::{
    ParsedIdentifier, extract_number, format_full_identifier, generate_building_code,
    generate_project_code, generate_unit_code, is_valid_building_code, is_valid_project_code,
    is_valid_unit_code, next_building_code, next_sequence_number, next_unit_code,
    parse_identifier,
};
pub use enums::{BuildingPrefix, UnitPrefix};
pub use error::{ModelError, Result};
pub use ids::{BuildingCode, FullIdentifier, ProjectCode, UnitCode};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codec_surface_is_consistent() {
        let project = generate_project_code(7);
        let building = generate_building_code(BuildingPrefix::Residential, 1);
        let unit = generate_unit_code(UnitPrefix::Flat, 3);
        let full = format_full_identifier(&project, Some(&building), Some(&unit));
        assert_eq!(full, "UJ000007-ZR01-EF003");

        let parsed = parse_identifier(&full);
        assert_eq!(parsed.project_code.as_deref(), Some(project.as_str()));
        assert!(is_valid_project_code(&project));
        assert!(is_valid_building_code(&building));
        assert!(is_valid_unit_code(&unit));
    }
}
