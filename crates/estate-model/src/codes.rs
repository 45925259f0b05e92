//! Generation, parsing and validation of the three-tier code format.
//!
//! Codes are cosmetic display identifiers, not primary keys: generation is
//! total and never fails, while the `is_valid_*` validators are the single
//! place where a malformed code becomes observable. Callers that want a
//! validated value should go through the newtypes in [`crate::ids`].
//!
//! A full identifier reads `UJ000001-ZR01-EF001`: project, building, unit,
//! joined with hyphens. A unit segment never renders without its building.

use crate::enums::{BuildingPrefix, UnitPrefix};

/// Digits in the numeric part of a project code.
pub const PROJECT_CODE_DIGITS: usize = 6;
/// Digits in the numeric part of a building code.
pub const BUILDING_CODE_DIGITS: usize = 2;
/// Digits in the numeric part of a unit code.
pub const UNIT_CODE_DIGITS: usize = 3;

/// Render a project code: `UJ` + zero-padded sequence number.
///
/// Sequences above 999 999 keep all their digits (padding never truncates),
/// producing a code that [`is_valid_project_code`] rejects.
pub fn generate_project_code(sequence: u64) -> String {
    format!("UJ{sequence:0width$}", width = PROJECT_CODE_DIGITS)
}

/// Render a building code: prefix tag + zero-padded 2-digit sequence number.
pub fn generate_building_code(prefix: BuildingPrefix, sequence: u64) -> String {
    format!(
        "{}{sequence:0width$}",
        prefix.as_str(),
        width = BUILDING_CODE_DIGITS
    )
}

/// Render a unit code: prefix tag + zero-padded 3-digit sequence number.
pub fn generate_unit_code(prefix: UnitPrefix, sequence: u64) -> String {
    format!(
        "{}{sequence:0width$}",
        prefix.as_str(),
        width = UNIT_CODE_DIGITS
    )
}

/// Reduce an optional code to its last hyphen-segment, tolerating callers
/// that hand over a full identifier instead of a bare code.
fn bare_segment(code: Option<&str>) -> Option<&str> {
    let segment = code?.rsplit('-').next()?;
    if segment.is_empty() { None } else { Some(segment) }
}

/// Join project, building and unit codes into a display identifier.
///
/// Returns `""` when the project code is empty. Building and unit inputs are
/// normalized to their last hyphen-segment. When no building segment
/// survives normalization, the unit is dropped as well: a unit never renders
/// without its building.
pub fn format_full_identifier(
    project: &str,
    building: Option<&str>,
    unit: Option<&str>,
) -> String {
    if project.is_empty() {
        return String::new();
    }
    let Some(building) = bare_segment(building) else {
        return project.to_string();
    };
    match bare_segment(unit) {
        Some(unit) => format!("{project}-{building}-{unit}"),
        None => format!("{project}-{building}"),
    }
}

/// Positional segments of a display identifier, missing ones as `None`.
///
/// Produced by [`parse_identifier`]; segment shapes are not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedIdentifier {
    pub project_code: Option<String>,
    pub building_code: Option<String>,
    pub unit_code: Option<String>,
}

/// Split a display identifier into its positional segments.
///
/// Purely positional: no shape validation happens here, that is the job of
/// the `is_valid_*` validators. Empty input yields all-`None`.
pub fn parse_identifier(identifier: &str) -> ParsedIdentifier {
    if identifier.is_empty() {
        return ParsedIdentifier::default();
    }
    let mut segments = identifier.split('-');
    let mut next = || {
        segments
            .next()
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
    };
    ParsedIdentifier {
        project_code: next(),
        building_code: next(),
        unit_code: next(),
    }
}

/// Exactly `UJ` followed by 6 ASCII digits.
pub fn is_valid_project_code(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == 2 + PROJECT_CODE_DIGITS
        && bytes[0] == b'U'
        && bytes[1] == b'J'
        && bytes[2..].iter().all(u8::is_ascii_digit)
}

/// Exactly `ZR`, `ZM`, `ZP` or `ZI` followed by 2 ASCII digits.
pub fn is_valid_building_code(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == 2 + BUILDING_CODE_DIGITS
        && bytes[0] == b'Z'
        && matches!(bytes[1], b'R' | b'M' | b'P' | b'I')
        && bytes[2..].iter().all(u8::is_ascii_digit)
}

/// Exactly `EF`, `EO` or `EP` followed by 3 ASCII digits.
pub fn is_valid_unit_code(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == 2 + UNIT_CODE_DIGITS
        && bytes[0] == b'E'
        && matches!(bytes[1], b'F' | b'O' | b'P')
        && bytes[2..].iter().all(u8::is_ascii_digit)
}

/// The trailing run of ASCII digits as an integer, 0 when there is none
/// (or the run does not fit in a `u64`).
pub fn extract_number(code: &str) -> u64 {
    let digits = code
        .as_bytes()
        .iter()
        .rev()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if digits == 0 {
        return 0;
    }
    code[code.len() - digits..].parse().unwrap_or(0)
}

/// Next free sequence number among `codes`, scoped to `prefix` when given.
///
/// Codes whose extracted number is zero (no digits, or literally zero) do
/// not count as occupied. An empty filtered set starts the sequence at 1.
pub fn next_sequence_number<I, S>(codes: I, prefix: Option<&str>) -> u64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    codes
        .into_iter()
        .filter_map(|code| {
            let code = code.as_ref();
            if prefix.is_none_or(|prefix| code.starts_with(prefix)) {
                let number = extract_number(code);
                (number > 0).then_some(number)
            } else {
                None
            }
        })
        .max()
        .map_or(1, |max| max + 1)
}

/// Next building code for a category within a project, scoped per prefix.
pub fn next_building_code<I, S>(existing: I, category: &str, has_multiple_blocks: bool) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let prefix = BuildingPrefix::for_category(category, has_multiple_blocks);
    let sequence = next_sequence_number(existing, Some(prefix.as_str()));
    generate_building_code(prefix, sequence)
}

/// Next unit code for a unit type within a building, scoped per prefix.
pub fn next_unit_code<I, S>(existing: I, unit_type: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let prefix = UnitPrefix::for_unit_type(unit_type);
    let sequence = next_sequence_number(existing, Some(prefix.as_str()));
    generate_unit_code(prefix, sequence)
}
