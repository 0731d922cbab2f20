//! Tower storage and board rendering.
//!
//! Three ordered stacks of ring ids, last element topmost. This module is
//! pure storage: pushing and popping here is the only way ring-to-tower
//! assignment changes, and no legality checks happen at this level.

use crate::rings::{Ring, RingId};

/// Index of a tower (0, 1, or 2).
pub type TowerId = usize;

/// Number of towers on the board.
pub const NUM_TOWERS: usize = 3;

/// Tower that receives the full starting stack on a new game.
pub const SOURCE_TOWER: TowerId = 0;

/// Spare tower used by the automatic solution.
pub const AUX_TOWER: TowerId = 1;

/// Tower that must receive all rings to win.
pub const TARGET_TOWER: TowerId = 2;

/// The three ring stacks of the board.
#[derive(Debug, Clone, Default)]
pub struct Towers {
    stacks: [Vec<RingId>; NUM_TOWERS],
}

impl Towers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Topmost ring of a tower, if any.
    #[inline]
    pub fn top(&self, tower: TowerId) -> Option<RingId> {
        self.stacks[tower].last().copied()
    }

    /// Places a ring on top of a tower.
    #[inline]
    pub fn push(&mut self, tower: TowerId, ring: RingId) {
        self.stacks[tower].push(ring);
    }

    /// Removes and returns the topmost ring of a tower.
    #[inline]
    pub fn pop(&mut self, tower: TowerId) -> Option<RingId> {
        self.stacks[tower].pop()
    }

    /// Number of rings currently on a tower.
    #[inline]
    pub fn height(&self, tower: TowerId) -> usize {
        self.stacks[tower].len()
    }

    /// The full stack of a tower, bottom first.
    #[inline]
    pub fn stack(&self, tower: TowerId) -> &[RingId] {
        &self.stacks[tower]
    }

    /// Empties all three towers.
    pub fn clear(&mut self) {
        for stack in &mut self.stacks {
            stack.clear();
        }
    }
}

/// Formats the board as a human-readable string.
///
/// One row per stack level from top to bottom, each tower shown as the
/// ordinal size of the ring at that level or a bare post, then a base line
/// with 1-based tower numbers.
pub fn render(towers: &Towers, rings: &[Ring]) -> String {
    let height = rings.len().max(1);

    let mut output = String::new();
    for level in (0..height).rev() {
        for tower in 0..NUM_TOWERS {
            match towers.stack(tower).get(level) {
                Some(&ring) => output.push_str(&format!(" [{}] ", rings[ring].size)),
                None => output.push_str("  |  "),
            }
        }
        output.push('\n');
    }
    output.push_str("==1====2====3==\n");

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rings_descending(count: usize) -> Vec<Ring> {
        (0..count)
            .map(|id| Ring {
                id,
                size: (count - id) as u32,
                tower: SOURCE_TOWER,
            })
            .collect()
    }

    #[test]
    fn test_push_pop_top() {
        let mut towers = Towers::new();
        assert_eq!(towers.top(0), None);

        towers.push(0, 7);
        towers.push(0, 3);
        assert_eq!(towers.top(0), Some(3));
        assert_eq!(towers.height(0), 2);

        assert_eq!(towers.pop(0), Some(3));
        assert_eq!(towers.pop(0), Some(7));
        assert_eq!(towers.pop(0), None);
    }

    #[test]
    fn test_stack_order_is_bottom_first() {
        let mut towers = Towers::new();
        towers.push(1, 0);
        towers.push(1, 1);
        towers.push(1, 2);
        assert_eq!(towers.stack(1), &[0, 1, 2]);
    }

    #[test]
    fn test_clear_empties_every_tower() {
        let mut towers = Towers::new();
        towers.push(0, 0);
        towers.push(1, 1);
        towers.push(2, 2);
        towers.clear();
        for tower in 0..NUM_TOWERS {
            assert_eq!(towers.height(tower), 0);
        }
    }

    #[test]
    fn test_render_starting_board() {
        let rings = rings_descending(3);
        let mut towers = Towers::new();
        for ring in &rings {
            towers.push(SOURCE_TOWER, ring.id);
        }

        let expected = concat!(
            " [1]   |    |  \n",
            " [2]   |    |  \n",
            " [3]   |    |  \n",
            "==1====2====3==\n",
        );
        assert_eq!(render(&towers, &rings), expected);
    }

    #[test]
    fn test_render_mid_game_board() {
        let rings = rings_descending(3);
        let mut towers = Towers::new();
        // ring 0 (size 3) and ring 1 (size 2) on tower 0, ring 2 (size 1) moved
        towers.push(SOURCE_TOWER, 0);
        towers.push(SOURCE_TOWER, 1);
        towers.push(TARGET_TOWER, 2);

        let expected = concat!(
            "  |    |    |  \n",
            " [2]   |    |  \n",
            " [3]   |   [1] \n",
            "==1====2====3==\n",
        );
        assert_eq!(render(&towers, &rings), expected);
    }
}
