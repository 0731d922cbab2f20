//! Canonical Tower of Hanoi move generator.
//!
//! The classic recursion (move n-1 rings aside, move the largest, move the
//! n-1 back on top) is driven by an explicit task stack instead of call
//! recursion, so the sequence is lazy: each `next` does a bounded amount of
//! work and the playback layer can consume one settled move at a time.

use crate::towers::TowerId;

/// A single move: lift the top ring of `from` and drop it on `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: TowerId,
    pub to: TowerId,
}

/// Number of moves the canonical solution needs for `rings` rings.
#[inline]
pub fn required_moves(rings: usize) -> u64 {
    debug_assert!(rings < 64);
    (1u64 << rings) - 1
}

/// Pending work on the generator stack.
#[derive(Debug, Clone, Copy)]
enum Task {
    /// Move `rings` rings from `from` to `to` using `via` as the spare.
    Split {
        rings: usize,
        from: TowerId,
        to: TowerId,
        via: TowerId,
    },
    /// Emit the move of a single ring.
    Emit { from: TowerId, to: TowerId },
}

/// Lazy canonical move sequence for a given ring count and tower roles.
///
/// Yields exactly `required_moves(rings)` moves. Applied in order to a
/// board that starts with all rings stacked on `from`, every yielded move
/// is legal. The three tower indices must be pairwise distinct.
#[derive(Debug, Clone)]
pub struct Solution {
    tasks: Vec<Task>,
    remaining: u64,
}

impl Solution {
    pub fn new(rings: usize, from: TowerId, to: TowerId, via: TowerId) -> Self {
        debug_assert!(from != to && from != via && to != via);
        Self {
            tasks: vec![Task::Split {
                rings,
                from,
                to,
                via,
            }],
            remaining: required_moves(rings),
        }
    }
}

impl Iterator for Solution {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        while let Some(task) = self.tasks.pop() {
            match task {
                Task::Emit { from, to } => {
                    self.remaining -= 1;
                    return Some(Move { from, to });
                }
                Task::Split { rings: 0, .. } => {}
                Task::Split {
                    rings: 1,
                    from,
                    to,
                    ..
                } => {
                    self.remaining -= 1;
                    return Some(Move { from, to });
                }
                Task::Split {
                    rings,
                    from,
                    to,
                    via,
                } => {
                    // pushed in reverse so the stack pops the first half first
                    self.tasks.push(Task::Split {
                        rings: rings - 1,
                        from: via,
                        to,
                        via: from,
                    });
                    self.tasks.push(Task::Emit { from, to });
                    self.tasks.push(Task::Split {
                        rings: rings - 1,
                        from,
                        to: via,
                        via: to,
                    });
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Solution {}

/// Collects the full canonical solution.
pub fn solve(rings: usize, from: TowerId, to: TowerId, via: TowerId) -> Vec<Move> {
    Solution::new(rings, from, to, via).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::towers::{AUX_TOWER, SOURCE_TOWER, TARGET_TOWER};

    #[test]
    fn test_required_moves() {
        assert_eq!(required_moves(1), 1);
        assert_eq!(required_moves(3), 7);
        assert_eq!(required_moves(8), 255);
        assert_eq!(required_moves(20), 1_048_575);
    }

    #[test]
    fn test_sequence_length_matches_required_moves() {
        for rings in 1..=10 {
            let moves = solve(rings, SOURCE_TOWER, TARGET_TOWER, AUX_TOWER);
            assert_eq!(moves.len() as u64, required_moves(rings));
        }
    }

    #[test]
    fn test_single_ring_goes_straight_across() {
        let moves = solve(1, SOURCE_TOWER, TARGET_TOWER, AUX_TOWER);
        assert_eq!(
            moves,
            vec![Move {
                from: SOURCE_TOWER,
                to: TARGET_TOWER
            }]
        );
    }

    #[test]
    fn test_three_ring_sequence_is_canonical() {
        let moves = solve(3, SOURCE_TOWER, TARGET_TOWER, AUX_TOWER);
        let pairs: Vec<(TowerId, TowerId)> = moves.iter().map(|m| (m.from, m.to)).collect();
        assert_eq!(
            pairs,
            vec![(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)]
        );
    }

    #[test]
    fn test_exact_size_counts_down_while_iterating() {
        let mut sequence = Solution::new(4, SOURCE_TOWER, TARGET_TOWER, AUX_TOWER);
        let mut left = required_moves(4) as usize;
        assert_eq!(sequence.len(), left);
        while sequence.next().is_some() {
            left -= 1;
            assert_eq!(sequence.len(), left);
        }
        assert_eq!(left, 0);
    }

    #[test]
    fn test_tower_roles_are_respected() {
        // solving onto the middle tower instead of the default target
        let moves = solve(2, 2, 1, 0);
        let pairs: Vec<(TowerId, TowerId)> = moves.iter().map(|m| (m.from, m.to)).collect();
        assert_eq!(pairs, vec![(2, 0), (2, 1), (0, 1)]);
    }
}
