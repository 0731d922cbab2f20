//! Game session: state, manual moves, and automatic playback.
//!
//! `Session` owns the towers, the rings, and the move counter, and runs the
//! mode machine that arbitrates between manual play and the automatic
//! solver. All mutation funnels through one apply path that validates,
//! pops, pushes, counts, and reports the result, so manual and automatic
//! moves cannot drift apart.
//!
//! Invalid input never errors. Grabbing a buried ring, releasing onto an
//! illegal tower, or starting the solver twice all degrade to a refusal the
//! caller can observe and render.

use std::fmt;

use crate::rings::{Ring, RingId, MAX_RINGS};
use crate::rules;
use crate::solver::{Move, Solution};
use crate::towers::{self, TowerId, Towers, AUX_TOWER, SOURCE_TOWER, TARGET_TOWER};

/// What the session is currently doing.
#[derive(Debug, Clone)]
enum Mode {
    Idle,
    /// A topmost ring is held by the player.
    Dragging(RingId),
    /// The solver's move sequence is being played back.
    Solving(Solution),
}

/// A move that has been applied to the board.
///
/// `height` is the ring's new 0-based level on `to`, which is all the
/// viewer needs to derive the landing anchor. `won` reports the win check
/// run right after the placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub ring: RingId,
    pub from: TowerId,
    pub to: TowerId,
    pub height: usize,
    pub won: bool,
}

/// Outcome of releasing a held ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The ring landed on a legal tower.
    Moved(AppliedMove),
    /// No legal target; the ring stays where it was and should snap back.
    Returned(RingId),
}

/// Status line for passive display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ready,
    /// Holds the ordinal size of the held ring.
    Grabbed(u32),
    Solving,
    Won,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ready => write!(f, "Drag the rings to solve the puzzle"),
            Status::Grabbed(size) => write!(f, "Picked up ring {size}"),
            Status::Solving => write!(f, "Solving automatically..."),
            Status::Won => write!(f, "Solved!"),
        }
    }
}

/// One game of the puzzle.
#[derive(Debug, Clone)]
pub struct Session {
    towers: Towers,
    rings: Vec<Ring>,
    moves: u32,
    mode: Mode,
}

impl Session {
    /// Starts a game with `count` rings (clamped to 1..=MAX_RINGS) stacked
    /// descending on the source tower.
    pub fn new(count: usize) -> Self {
        let mut session = Self {
            towers: Towers::new(),
            rings: Vec::new(),
            moves: 0,
            mode: Mode::Idle,
        };
        session.reset(count);
        session
    }

    /// Wholesale reset: rebuilds the rings, repopulates the source tower,
    /// zeroes the counter, and returns to idle.
    pub fn reset(&mut self, count: usize) {
        let count = count.clamp(1, MAX_RINGS);

        self.towers.clear();
        self.rings.clear();
        self.moves = 0;
        self.mode = Mode::Idle;

        for id in 0..count {
            self.rings.push(Ring {
                id,
                size: (count - id) as u32,
                tower: SOURCE_TOWER,
            });
            self.towers.push(SOURCE_TOWER, id);
        }
    }

    /// Tries to pick up a ring. Refused unless the session is idle and the
    /// ring is the top of its tower.
    pub fn grab(&mut self, ring: RingId) -> bool {
        if !matches!(self.mode, Mode::Idle) {
            return false;
        }
        if !rules::can_move(&self.towers, &self.rings, ring) {
            return false;
        }
        self.mode = Mode::Dragging(ring);
        true
    }

    /// The ring currently held, if any.
    ///
    /// Pointer-motion gate: the viewer lets a ring's visual follow input
    /// only while this reports it as held. Following never mutates the
    /// board.
    pub fn grabbed(&self) -> Option<RingId> {
        match self.mode {
            Mode::Dragging(ring) => Some(ring),
            _ => None,
        }
    }

    /// Drops the held ring onto the tower the viewer's hit-test found.
    ///
    /// `None` target (released off the board) and illegal targets both
    /// leave the board and counter untouched and report `Returned` so the
    /// visual snaps back to its slot. Returns `None` if nothing was held.
    pub fn release(&mut self, target: Option<TowerId>) -> Option<Placement> {
        let ring = self.grabbed()?;
        self.mode = Mode::Idle;

        let from = self.rings[ring].tower;
        let applied = target.and_then(|to| self.apply(Move { from, to }));
        Some(match applied {
            Some(step) => Placement::Moved(step),
            None => Placement::Returned(ring),
        })
    }

    /// Begins automatic playback of the canonical solution.
    ///
    /// Refused while a ring is held or a playback is already running, and
    /// refused unless every ring is back on the source tower (a reachable
    /// all-on-source layout is necessarily in canonical order).
    pub fn start_solve(&mut self) -> bool {
        if !matches!(self.mode, Mode::Idle) {
            return false;
        }
        if self.towers.height(SOURCE_TOWER) != self.rings.len() {
            return false;
        }
        self.mode = Mode::Solving(Solution::new(
            self.rings.len(),
            SOURCE_TOWER,
            TARGET_TOWER,
            AUX_TOWER,
        ));
        true
    }

    /// Applies the next solver move through the same path as manual moves.
    ///
    /// The caller animates the returned step and calls again once it has
    /// settled, which keeps playback strictly in solver order, one visible
    /// move at a time. Returns `None` once the sequence is drained (the
    /// session is idle again) or when no playback is running.
    pub fn advance_solve(&mut self) -> Option<AppliedMove> {
        let Mode::Solving(sequence) = &mut self.mode else {
            return None;
        };
        let Some(step) = sequence.next() else {
            self.mode = Mode::Idle;
            return None;
        };
        // solver moves are legal by construction, so apply cannot refuse
        self.apply(step)
    }

    /// Validates and executes one move, keeping the ring's tower field in
    /// sync and counting it. Returns `None` without touching anything if
    /// the move is illegal or the source tower is empty.
    fn apply(&mut self, step: Move) -> Option<AppliedMove> {
        let ring = self.towers.top(step.from)?;
        if !rules::can_place(&self.towers, &self.rings, ring, step.to) {
            return None;
        }

        self.towers.pop(step.from);
        self.towers.push(step.to, ring);
        self.rings[ring].tower = step.to;
        self.moves += 1;

        Some(AppliedMove {
            ring,
            from: step.from,
            to: step.to,
            height: self.towers.height(step.to) - 1,
            won: self.is_won(),
        })
    }

    pub fn is_solving(&self) -> bool {
        matches!(self.mode, Mode::Solving(_))
    }

    pub fn is_won(&self) -> bool {
        rules::is_won(&self.towers, self.rings.len())
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    pub fn ring(&self, ring: RingId) -> &Ring {
        &self.rings[ring]
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn towers(&self) -> &Towers {
        &self.towers
    }

    pub fn status(&self) -> Status {
        match &self.mode {
            Mode::Dragging(ring) => Status::Grabbed(self.rings[*ring].size),
            Mode::Solving(_) => Status::Solving,
            Mode::Idle if self.is_won() => Status::Won,
            Mode::Idle => Status::Ready,
        }
    }

    /// ASCII board, for the CLI and for tests.
    pub fn render(&self) -> String {
        towers::render(&self.towers, &self.rings)
    }
}
