use rand::Rng;

use super::grid::{Direction, Grid, Score};
use super::round::Round;
use super::spawn::{RandomTileSource, TileSource};
use crate::error::{Error, Result};

/// Cells per side of a standard board.
pub const DEFAULT_SIZE: usize = 4;

/// Outcome of a shift attempt.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ShiftOutcome {
    NoChange,
    Moved,
}

impl ShiftOutcome {
    pub const fn changed(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Moved => true,
        }
    }
}

/// Board owns the live game state and the history of the states that led to
/// it. The undo stack always holds at least one round and its last entry is
/// the live state; the redo stack holds rounds stepped back over by `undo`
/// and empties whenever a new shift is accepted.
pub struct Board {
    size: usize,
    source: Box<dyn TileSource>,
    rounds: Vec<Round>,
    undone: Vec<Round>,
}

impl Board {
    /// Initialize a board of the given size, spawning its two starting
    /// tiles from the given random number generator. `size` must be at
    /// least 2.
    pub fn new(size: usize, rng: impl Rng + 'static) -> Result<Self> {
        Self::with_tile_source(size, RandomTileSource::new(rng))
    }

    /// Initialize a board with full control over spawn decisions.
    pub fn with_tile_source(size: usize, source: impl TileSource + 'static) -> Result<Self> {
        if size < 2 {
            return Err(Error::InvalidConfiguration { size });
        }
        let mut source: Box<dyn TileSource> = Box::new(source);
        let mut round = Round::empty(size);
        round.spawn(source.as_mut());
        round.spawn(source.as_mut());

        let mut rounds = Vec::with_capacity(2000);
        rounds.push(round);
        Ok(Self {
            size,
            source,
            rounds,
            undone: Vec::with_capacity(2000),
        })
    }

    /// Attempts to shift the board in the given direction. An accepted
    /// shift banks its merge points, spawns one tile, becomes the new live
    /// round, and invalidates the redo stack; a rejected one leaves every
    /// observable untouched. Shifting a finished game is always rejected.
    pub fn shift(&mut self, direction: Direction) -> ShiftOutcome {
        let prev = self
            .rounds
            .last()
            .expect("a board always holds at least one round");
        if prev.is_over() {
            return ShiftOutcome::NoChange;
        }
        let mut round = prev.clone();
        if !round.shift(direction, self.source.as_mut()) {
            return ShiftOutcome::NoChange;
        }
        log::trace!("shift {} accepted, score {}", direction, round.score());
        if round.is_over() {
            log::debug!("no shift remains, final score {}", round.score());
        }
        self.rounds.push(round);
        self.undone.clear();
        ShiftOutcome::Moved
    }

    /// Steps back to the round before the last accepted shift. The initial
    /// round is the floor and never pops. Returns true when the board
    /// changed.
    pub fn undo(&mut self) -> bool {
        if self.rounds.len() < 2 {
            return false;
        }
        let round = self
            .rounds
            .pop()
            .expect("a board always holds at least one round");
        self.undone.push(round);
        log::trace!("undo to score {}", self.score());
        true
    }

    /// Restores the most recently undone round. Returns true when the board
    /// changed.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(round) => {
                self.rounds.push(round);
                log::trace!("redo to score {}", self.score());
                true
            }
            None => false,
        }
    }

    /// The live grid.
    pub fn grid(&self) -> &Grid {
        self.current().grid()
    }

    pub fn score(&self) -> Score {
        self.current().score()
    }

    pub fn is_game_over(&self) -> bool {
        self.current().is_over()
    }

    pub fn can_undo(&self) -> bool {
        self.rounds.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The live round, one coherent view of grid, score, and game-over flag.
    pub fn current(&self) -> &Round {
        self.rounds
            .last()
            .expect("a board always holds at least one round")
    }

    #[cfg(test)]
    pub(crate) fn set_initial_round(&mut self, round: Round) {
        self.rounds = vec![round];
        self.undone.clear();
    }
}
