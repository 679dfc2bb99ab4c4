pub use board::*;
pub use grid::*;
pub use round::*;
pub use spawn::*;

mod board;
mod grid;
mod round;
mod spawn;
