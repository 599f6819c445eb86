//! In-memory storage keyed by 4-D coordinates.

use rand::Rng;
use rustc_hash::FxHashMap;

use crate::spacetime::{Position, Spacetime4D};

/// Hashable key for a 4-D coordinate.
///
/// `f64` coordinates are keyed by bit pattern with negative zero
/// normalized, so coordinates that compare equal share a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellKey([u64; 4]);

impl From<Position> for CellKey {
    fn from(pos: Position) -> Self {
        CellKey(pos.0.map(|v| if v == 0.0 { 0.0_f64.to_bits() } else { v.to_bits() }))
    }
}

/// Flat storage mapping spacetime coordinates to integer values.
///
/// Entries are never evicted; the map grows with every distinct
/// coordinate stored.
#[derive(Debug, Default)]
pub struct HyperMemory {
    cells: FxHashMap<CellKey, i64>,
}

impl HyperMemory {
    /// Create an empty memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value at a coordinate, overwriting any previous value.
    pub fn store(&mut self, key: impl Into<CellKey>, value: i64) {
        self.cells.insert(key.into(), value);
    }

    /// Look up the value at a coordinate.
    pub fn retrieve(&self, key: impl Into<CellKey>) -> Option<i64> {
        self.cells.get(&key.into()).copied()
    }

    /// Number of stored cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check whether any cell is stored.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Seed the demo cells: four random integers stored at the positions
/// reached by stepping x through deltas 0, 1, 2, 3.
///
/// The shifts go through the live spacetime, so the node boots with those
/// deltas already applied (x = 6) and the stored keys at x = 0, 1, 3, 6.
pub fn seed_demo_cells(spacetime: &mut Spacetime4D, memory: &mut HyperMemory) {
    let mut rng = rand::thread_rng();
    for i in 0..4 {
        let pos = spacetime.shift(0.0, f64::from(i), 0.0, 0.0);
        memory.store(pos, rng.gen_range(0..100));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_retrieve() {
        let mut memory = HyperMemory::new();
        let pos = Position([0.0, 1.0, 0.0, 0.0]);

        assert_eq!(memory.retrieve(pos), None);
        memory.store(pos, 42);
        assert_eq!(memory.retrieve(pos), Some(42));

        memory.store(pos, 7);
        assert_eq!(memory.retrieve(pos), Some(7));
        assert_eq!(memory.len(), 1);
    }

    #[test]
    fn test_negative_zero_shares_cell() {
        let mut memory = HyperMemory::new();
        memory.store(Position([0.0, -0.0, 0.0, 0.0]), 9);

        assert_eq!(memory.retrieve(Position::ORIGIN), Some(9));
    }

    #[test]
    fn test_seed_demo_cells() {
        let mut spacetime = Spacetime4D::new();
        let mut memory = HyperMemory::new();
        seed_demo_cells(&mut spacetime, &mut memory);

        assert_eq!(memory.len(), 4);
        // The cumulative shifts leave the node at x = 6...
        assert_eq!(spacetime.position(), Position([0.0, 6.0, 0.0, 0.0]));
        // ...and the origin cell is always populated.
        let origin = memory.retrieve(Position::ORIGIN).unwrap();
        assert!((0..100).contains(&origin));
    }
}
