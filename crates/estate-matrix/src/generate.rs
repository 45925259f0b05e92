//! Bulk unit generation and renumbering over a floor × entrance counts
//! matrix.

use tracing::debug;

use crate::grid::GridMap;
use crate::types::{CountsMatrix, Entrance, Floor, Unit, UnitId, UnitKind};

/// Walks the counts matrix in canonical order and emits unit records.
///
/// Traversal is entrance-major in the given entrance order, floors ascending
/// by `index` within each entrance. All inputs are borrowed and never
/// mutated; the only non-determinism is fresh id allocation for new units.
pub struct MatrixGenerator<'a> {
    floors: &'a [Floor],
    entrances: &'a [Entrance],
    counts: &'a CountsMatrix,
}

impl<'a> MatrixGenerator<'a> {
    pub fn new(floors: &'a [Floor], entrances: &'a [Entrance], counts: &'a CountsMatrix) -> Self {
        Self {
            floors,
            entrances,
            counts,
        }
    }

    fn floors_bottom_up(&self) -> Vec<&'a Floor> {
        let mut floors: Vec<&Floor> = self.floors.iter().collect();
        floors.sort_by_key(|floor| floor.index);
        floors
    }

    /// Create fresh units for every counted cell.
    ///
    /// Each cell emits its apartments first, then its offices. Flats and
    /// offices share one monotonically increasing number stream starting at
    /// `start_num`; cells missing from the matrix emit nothing. Room counts
    /// and areas initialize to zero, to be filled in by the operator later.
    pub fn generate_initial_units(&self, start_num: u32) -> Vec<Unit> {
        let floors = self.floors_bottom_up();
        let mut units = Vec::new();
        let mut next_num = start_num;
        for entrance in self.entrances {
            for &floor in &floors {
                let counts = self.counts.get(floor.id, entrance.number);
                for _ in 0..counts.apartments {
                    units.push(new_unit(floor, entrance, next_num, UnitKind::Flat));
                    next_num += 1;
                }
                for _ in 0..counts.offices {
                    units.push(new_unit(floor, entrance, next_num, UnitKind::Office));
                    next_num += 1;
                }
            }
        }
        debug!(
            units = units.len(),
            floors = self.floors.len(),
            entrances = self.entrances.len(),
            "generated initial units"
        );
        units
    }

    /// Renumber an existing collection back to canonical traversal order.
    ///
    /// Only apartment counts take part in a reset; office counts are left
    /// untouched. For each apartment slot, a unit already occupying that
    /// cell-and-slot position (per the grid built from `existing`) keeps its
    /// id, room count and area while `num`, kind (forced to flat), floor and
    /// entrance are overwritten; vacant slots get a brand-new zeroed unit.
    /// Numbering follows the same single stream as generation.
    pub fn prepare_reset_payload(&self, existing: &[Unit], start_num: u32) -> Vec<Unit> {
        let grid = GridMap::build(existing);
        let floors = self.floors_bottom_up();
        let mut payload = Vec::new();
        let mut next_num = start_num;
        let mut reused = 0usize;
        for entrance in self.entrances {
            for &floor in &floors {
                let counts = self.counts.get(floor.id, entrance.number);
                let cell = grid.cell(floor.id, entrance.id);
                for slot in 0..counts.apartments as usize {
                    let mut unit = match cell.get(slot) {
                        Some(occupant) => {
                            reused += 1;
                            (*occupant).clone()
                        }
                        None => new_unit(floor, entrance, next_num, UnitKind::Flat),
                    };
                    unit.floor_id = floor.id;
                    unit.entrance_id = entrance.id;
                    unit.kind = UnitKind::Flat;
                    unit.num = next_num.to_string();
                    next_num += 1;
                    payload.push(unit);
                }
            }
        }
        debug!(units = payload.len(), reused, "prepared reset payload");
        payload
    }
}

fn new_unit(floor: &Floor, entrance: &Entrance, num: u32, kind: UnitKind) -> Unit {
    Unit {
        id: UnitId::new(),
        floor_id: floor.id,
        entrance_id: entrance.id,
        num: num.to_string(),
        kind,
        rooms_count: 0,
        total_area: 0.0,
    }
}
