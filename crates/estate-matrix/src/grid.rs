//! Borrowed grid index over an existing unit collection.

use std::collections::HashMap;

use crate::natural::unit_num_cmp;
use crate::types::{EntranceId, FloorId, Unit};

/// Units grouped by (floor, entrance), each cell ordered by natural unit
/// number with empty numbers last.
///
/// Borrows the underlying slice; build it fresh whenever the collection
/// changes.
#[derive(Debug, Default)]
pub struct GridMap<'a> {
    cells: HashMap<(FloorId, EntranceId), Vec<&'a Unit>>,
}

impl<'a> GridMap<'a> {
    pub fn build(units: &'a [Unit]) -> Self {
        let mut cells: HashMap<(FloorId, EntranceId), Vec<&'a Unit>> = HashMap::new();
        for unit in units {
            cells
                .entry((unit.floor_id, unit.entrance_id))
                .or_default()
                .push(unit);
        }
        for cell in cells.values_mut() {
            cell.sort_by(|a, b| unit_num_cmp(&a.num, &b.num));
        }
        Self { cells }
    }

    /// Units in one cell in display order; empty for cells with no units.
    pub fn cell(&self, floor: FloorId, entrance: EntranceId) -> &[&'a Unit] {
        self.cells
            .get(&(floor, entrance))
            .map_or(&[], Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{UnitId, UnitKind};

    fn unit(floor: FloorId, entrance: EntranceId, num: &str) -> Unit {
        Unit {
            id: UnitId::new(),
            floor_id: floor,
            entrance_id: entrance,
            num: num.to_string(),
            kind: UnitKind::Flat,
            rooms_count: 0,
            total_area: 0.0,
        }
    }

    #[test]
    fn cells_are_naturally_ordered() {
        let floor = FloorId::new();
        let entrance = EntranceId::new();
        let units = vec![
            unit(floor, entrance, "10"),
            unit(floor, entrance, "2"),
            unit(floor, entrance, "1"),
        ];

        let grid = GridMap::build(&units);
        let nums: Vec<&str> = grid
            .cell(floor, entrance)
            .iter()
            .map(|unit| unit.num.as_str())
            .collect();
        assert_eq!(nums, vec!["1", "2", "10"]);
    }

    #[test]
    fn unnumbered_units_come_last() {
        let floor = FloorId::new();
        let entrance = EntranceId::new();
        let units = vec![
            unit(floor, entrance, ""),
            unit(floor, entrance, "3"),
        ];

        let grid = GridMap::build(&units);
        let cell = grid.cell(floor, entrance);
        assert_eq!(cell[0].num, "3");
        assert_eq!(cell[1].num, "");
    }

    #[test]
    fn absent_cells_are_empty() {
        let units: Vec<Unit> = vec![];
        let grid = GridMap::build(&units);
        assert!(grid.is_empty());
        assert!(grid.cell(FloorId::new(), EntranceId::new()).is_empty());
    }

    #[test]
    fn units_group_by_floor_and_entrance() {
        let floor_a = FloorId::new();
        let floor_b = FloorId::new();
        let entrance = EntranceId::new();
        let units = vec![
            unit(floor_a, entrance, "1"),
            unit(floor_b, entrance, "2"),
            unit(floor_a, entrance, "3"),
        ];

        let grid = GridMap::build(&units);
        assert_eq!(grid.cell(floor_a, entrance).len(), 2);
        assert_eq!(grid.cell(floor_b, entrance).len(), 1);
    }
}
