#![deny(clippy::used_underscore_binding, clippy::map_unwrap_or,
   clippy::int_plus_one, clippy::string_add_assign, clippy::if_not_else,
   clippy::invalid_upcast_comparisons,
   clippy::mutex_integer, clippy::mut_mut, clippy::items_after_statements,
   clippy::print_stdout, clippy::mem_forget, clippy::maybe_infinite_iter)]

//! A Scrabble move-search library for Rust.
//! <br>
//! Given a board, a dictionary and a rack of letters, this crate
//! enumerates every legal placement of rack tiles such that all resulting
//! letter runs are dictionary words, and picks one according to a
//! pluggable ranking policy (by default the highest score).
//!
//! The naive enumeration is exponential in the rack size; the search
//! prunes with a prefix trie and a suffix trie over the dictionary, so
//! each partial placement only tries letters that can still lead to a
//! word. With the `rayon` feature (on by default) rows and columns are
//! searched in parallel.
//!
//! # How to use `scrabble_solver`
//! Build a [`Board`] (a standard board, an empty one, or one parsed from
//! text), a [`Dictionary`] from a word list, and a [`Context`] with the
//! rack. Then let a [`Solver`] find the move. A word list must contain
//! one word per line; any plain-text list works.
//!
//! # Basic usage
//! ```
//! # use scrabble_solver::{Board, Context, Dictionary, Solver, Error};
//! let board = Board::standard();
//! let dictionary = Dictionary::from_words(&["heat", "heats", "at"]);
//! let context = Context::new(board, dictionary, "thesa".parse()?);
//! let best = Solver::default().solve(&context)?;
//! println!("{}", best);
//! println!("{}", context.board.execute_move(&best)?);
//! # Ok::<(), Error>(())
//! ```
mod board;
mod constraints;
mod context;
mod dictionary;
mod error;
mod geometry;
mod moves;
mod policies;
mod rack;
mod solver;
mod state;
mod tiles;

pub use crate::board::{Board, Square};
pub use crate::constraints::{AffixConstraint, AffixConstraints};
pub use crate::context::{Context, MoveScore};
pub use crate::dictionary::{Dictionary, NodeId, Trie};
pub use crate::error::{AffixKind, Error};
pub use crate::geometry::{Direction, Point, ALL_DIRECTIONS};
pub use crate::moves::{Move, MoveType};
pub use crate::policies::{PriorityCalculator, PruningStrategy, RankingStrategy};
pub use crate::rack::Rack;
pub use crate::solver::Solver;
pub use crate::state::{State, TerminalState};
pub use crate::tiles::{
    is_tile, letter_points, PlacedTile, BINGO_BONUS, BLANK, RACK_SIZE, TILE_DISTRIBUTION,
};
