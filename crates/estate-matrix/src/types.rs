//! Generation-domain entities: floors, entrances, units and the counts
//! matrix an operator fills in before a bulk generation run.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use estate_model::UnitPrefix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FloorId(Uuid);

impl FloorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for FloorId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for FloorId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for FloorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntranceId(Uuid);

impl EntranceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EntranceId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for EntranceId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntranceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identity of a unit record. Ids are random (v4) so they stay stable across
/// renumbering runs and double as keys in the host's store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(Uuid);

impl UnitId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UnitId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UnitId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Kind of a generated unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    Flat,
    Office,
}

impl UnitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitKind::Flat => "flat",
            UnitKind::Office => "office",
        }
    }

    /// Code prefix used when rendering a display identifier for this unit.
    pub fn code_prefix(&self) -> UnitPrefix {
        UnitPrefix::for_unit_type(self.as_str())
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UnitKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(UnitKind::Flat),
            "office" => Ok(UnitKind::Office),
            _ => Err(format!("unknown unit kind: {s}")),
        }
    }
}

/// A unit record as produced by generation and consumed by the host's
/// persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub floor_id: FloorId,
    pub entrance_id: EntranceId,
    /// Display number within the building; compared with natural ordering.
    pub num: String,
    #[serde(rename = "type")]
    pub kind: UnitKind,
    pub rooms_count: u32,
    pub total_area: f64,
}

/// A floor of a building. `index` gives vertical ordering, ascending from
/// the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    pub id: FloorId,
    pub index: i32,
}

/// An entrance (stairwell) of a building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entrance {
    pub id: EntranceId,
    pub number: u32,
}

/// Per-cell unit counts entered by the operator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCounts {
    pub apartments: u32,
    pub offices: u32,
}

/// Sparse floor × entrance table of unit counts.
///
/// Cells are keyed by floor id and entrance number. A cell that was never
/// written reads back as zero counts, so sparse input needs no special
/// casing downstream.
#[derive(Debug, Clone, Default)]
pub struct CountsMatrix {
    cells: HashMap<(FloorId, u32), CellCounts>,
}

impl CountsMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, floor: FloorId, entrance_number: u32, counts: CellCounts) {
        self.cells.insert((floor, entrance_number), counts);
    }

    pub fn get(&self, floor: FloorId, entrance_number: u32) -> CellCounts {
        self.cells
            .get(&(floor, entrance_number))
            .copied()
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
