//! # Boggle Player
//!
//! Word-finding over a Boggle board: enumerate every lexicon word
//! spellable by an acyclic simple path of adjacent dice, or check one
//! specific word and recover its path.
//!
//! The lexicon is indexed by a ternary search tree built in randomized
//! order; the board is a grid of dice with 8-direction adjacency.

pub mod board;
pub mod player;
pub mod tst;
pub mod util;

pub use board::{Board, BoardFile, Die};
pub use player::BogglePlayer;
pub use tst::Tst;
