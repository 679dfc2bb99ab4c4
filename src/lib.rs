//! core48: the rules engine of a sliding-tile merge puzzle
//!
//! This crate provides:
//! - A `Board` that owns the live grid, the score, the game-over flag, and a
//!   linear undo/redo history of `Round` snapshots
//! - Pure `Grid` transforms implementing the compress/merge mechanics
//! - A `TileSource` seam so tile spawns can be driven by any `rand` RNG in
//!   production and by a scripted source in tests
//!
//! Front-ends own rendering, input binding, and animation; they drive the
//! engine through `shift`/`undo`/`redo` and read state back through the
//! accessors.
//!
//! Quick start:
//! ```
//! use core48::{Board, Direction};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let rng = StdRng::seed_from_u64(42);
//! let mut board = Board::new(4, rng).expect("4 is a valid board size");
//! if board.shift(Direction::Left).changed() {
//!     board.undo();
//! }
//! assert_eq!(board.grid().size(), 4);
//! ```

pub use engine::*;
pub use error::*;

mod engine;
mod error;
