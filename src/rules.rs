//! Move legality and win detection.
//!
//! The single rule of the puzzle: only a topmost ring may move, and only
//! onto an empty tower or a strictly larger ring. These checks run before
//! every mutation, whether the move is manual or solver-driven.

use crate::rings::{Ring, RingId};
use crate::towers::{TowerId, Towers, TARGET_TOWER};

/// True iff `ring` is the topmost ring of the tower holding it.
///
/// A buried ring can never be the object of a move.
#[inline]
pub fn can_move(towers: &Towers, rings: &[Ring], ring: RingId) -> bool {
    towers.top(rings[ring].tower) == Some(ring)
}

/// True iff `ring` may come to rest on `target`.
///
/// Holds when the target is empty or its top ring is strictly larger.
/// A ring released over its own tower compares against itself and is
/// rejected here like any other illegal placement.
#[inline]
pub fn can_place(towers: &Towers, rings: &[Ring], ring: RingId, target: TowerId) -> bool {
    match towers.top(target) {
        None => true,
        Some(top) => rings[top].size > rings[ring].size,
    }
}

/// True iff the target tower holds every ring in the game.
#[inline]
pub fn is_won(towers: &Towers, ring_total: usize) -> bool {
    towers.height(TARGET_TOWER) == ring_total
}
