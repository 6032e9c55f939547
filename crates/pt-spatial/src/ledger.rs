//! `OccupancyLedger`: the cells claimed during the current tick.
//!
//! # Ordering is the mechanism
//!
//! The ledger is seeded once per tick with every agent and target position,
//! then updated agent by agent in roster order: the destination is claimed
//! and the vacated cell released.  Because agents are processed strictly
//! sequentially, an agent decided later in the pass sees every claim made
//! earlier in the same pass, which is what prevents same-tick collisions.
//!
//! Claims are counted rather than boolean so that two bodies that already
//! overlap at the start of a tick (a patroller standing on a target, say)
//! cannot free each other's cell by moving away.

use pt_core::Cell;

#[cfg(not(feature = "fx-hash"))]
type ClaimMap = std::collections::HashMap<Cell, u32>;
#[cfg(feature = "fx-hash")]
type ClaimMap = rustc_hash::FxHashMap<Cell, u32>;

/// Counted set of claimed cells.
#[derive(Default, Debug, Clone)]
pub struct OccupancyLedger {
    claims: ClaimMap,
}

impl OccupancyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every claim and claim each of `cells` once.
    pub fn seed(&mut self, cells: impl IntoIterator<Item = Cell>) {
        self.claims.clear();
        for cell in cells {
            self.claim(cell);
        }
    }

    /// Add one claim on `cell`.
    pub fn claim(&mut self, cell: Cell) {
        *self.claims.entry(cell).or_insert(0) += 1;
    }

    /// Remove one claim on `cell`.  Releasing an unclaimed cell is a no-op.
    pub fn release(&mut self, cell: Cell) {
        if let Some(count) = self.claims.get_mut(&cell) {
            *count -= 1;
            if *count == 0 {
                self.claims.remove(&cell);
            }
        }
    }

    /// Move one claim from `from` to `to`.
    pub fn transfer(&mut self, from: Cell, to: Cell) {
        self.claim(to);
        self.release(from);
    }

    #[inline]
    pub fn is_claimed(&self, cell: Cell) -> bool {
        self.claims.contains_key(&cell)
    }

    /// Number of claims on `cell`.
    pub fn claims_on(&self, cell: Cell) -> u32 {
        self.claims.get(&cell).copied().unwrap_or(0)
    }

    /// Number of distinct claimed cells.
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    pub fn clear(&mut self) {
        self.claims.clear();
    }
}
