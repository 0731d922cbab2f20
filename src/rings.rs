//! Ring definitions and sizing.
//!
//! Rings are identified by their creation index and carry an ordinal size;
//! the largest ring is created first. The viewer derives each ring's drawn
//! width from the ordinal size.

use crate::towers::TowerId;

/// Stable identity of a ring within a session (its creation index).
///
/// Ring 0 is the largest ring and keeps the first palette color.
pub type RingId = usize;

/// Maximum rings per game.
///
/// The viewer's palette has eight fixed colors, one per ring.
pub const MAX_RINGS: usize = 8;

/// A single ring of the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring {
    /// Creation index, also the palette index.
    pub id: RingId,
    /// Ordinal size in 1..=N; larger means wider.
    pub size: u32,
    /// Index of the tower currently holding this ring.
    ///
    /// Kept in sync with the tower stacks by the session; the stacks are
    /// the authoritative record.
    pub tower: TowerId,
}

/// Drawn width of a ring in world units, derived from its ordinal size.
///
/// Linear in the size so every step in the stack is visibly distinct.
#[inline]
pub fn ring_width(size: u32) -> f32 {
    0.3 + size as f32 * 0.25
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_width_grows_with_size() {
        for size in 1..MAX_RINGS as u32 {
            assert!(ring_width(size + 1) > ring_width(size));
        }
    }
}
