//! Unit-matrix generation for real-estate projects.
//!
//! Converts a sparse floor × entrance counts matrix into concrete unit
//! records, and re-derives a canonical numbering from an existing unit
//! collection. The whole crate is pure and synchronous: inputs are borrowed
//! and never mutated, new collections are returned, and the only
//! non-determinism is fresh id allocation for newly created units.
//!
//! The host builds a [`CountsMatrix`] from operator input, runs a
//! [`MatrixGenerator`] over its floors and entrances, and forwards the
//! returned payload to its persistence layer.

pub mod generate;
pub mod grid;
pub mod natural;
pub mod types;

pub use generate::MatrixGenerator;
pub use grid::GridMap;
pub use natural::{natural_cmp, unit_num_cmp};
pub use types::{
    CellCounts, CountsMatrix, Entrance, EntranceId, Floor, FloorId, Unit, UnitId, UnitKind,
};
