//! Tower of Hanoi Puzzle Library
//!
//! Provides the puzzle state machine and move generator for the classic
//! three-tower ring puzzle: tower storage, the single legality rule, win
//! detection, the canonical solver sequence, and the session controller
//! that applies manual and automatic moves through one path.

pub mod rings;
pub mod rules;
pub mod session;
pub mod solver;
pub mod towers;

pub use session::Session;
pub use solver::{Move, Solution};
