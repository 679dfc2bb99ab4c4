use super::grid::{Direction, Grid, Score};
use super::spawn::TileSource;

/// Round is one complete game state: the grid, the score accumulated to
/// reach it, and whether any shift remains. Rounds are the unit stored on
/// the undo and redo stacks, so cloning one yields a fully independent
/// snapshot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Round {
    grid: Grid,
    score: Score,
    over: bool,
}

impl Round {
    pub(crate) fn empty(size: usize) -> Self {
        Self {
            grid: Grid::empty(size),
            score: 0,
            over: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_grid(grid: Grid, score: Score) -> Self {
        let over = !grid.has_moves();
        Self { grid, score, over }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// True once no shift can change the grid.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Applies the directional merge and, when the grid changed, banks the
    /// earned points, spawns one tile, and re-evaluates whether any shift
    /// remains. Returns true when the round changed, false for a rejected
    /// shift that left everything untouched.
    pub(crate) fn shift(&mut self, direction: Direction, source: &mut dyn TileSource) -> bool {
        let (grid, points) = self.grid.shifted(direction);
        if grid == self.grid {
            return false;
        }
        self.grid = grid;
        self.score += points;
        self.spawn(source);
        self.over = !self.grid.has_moves();
        true
    }

    /// Places one tile from the source on an empty cell. Does nothing on a
    /// full grid.
    pub(crate) fn spawn(&mut self, source: &mut dyn TileSource) {
        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            return;
        }
        let (row, col) = empty[source.pick_slot(empty.len())];
        self.grid.set(row, col, source.pick_tile());
    }
}

#[cfg(test)]
mod test {
    use super::super::spawn::ScriptedTileSource;
    use super::*;

    fn grid(rows: [[u32; 4]; 4]) -> Grid {
        Grid::from_rows(rows.iter().map(|row| row.to_vec()).collect())
    }

    #[test]
    fn clone_is_independent() {
        let initial = Round::from_grid(
            grid([
                [2, 0, 0, 0],
                [2, 0, 0, 0],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ]),
            0,
        );
        let cloned = initial.clone();
        assert_eq!(initial, cloned);

        let mut shifted = initial.clone();
        let mut source = ScriptedTileSource::new(&[0], &[4]);
        assert!(shifted.shift(Direction::Up, &mut source));
        assert_eq!(initial, cloned, "shifting one copy must not touch others");
        assert_ne!(initial, shifted);
    }

    #[test]
    fn rejected_shift_consults_no_source() {
        let initial = Round::from_grid(
            grid([
                [2, 4, 8, 16],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ]),
            4,
        );
        let mut round = initial.clone();
        // An empty script panics when consulted, so a rejected shift passing
        // through here proves no spawn happened.
        let mut source = ScriptedTileSource::new(&[], &[]);
        assert!(!round.shift(Direction::Left, &mut source));
        assert_eq!(round, initial);
    }

    #[test]
    fn accepted_shift_merges_banks_and_spawns() {
        let mut round = Round::from_grid(
            grid([
                [0, 2, 0, 2],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ]),
            10,
        );
        // Post-merge empties run (0,1)..(3,3) row-major; slot 3 is (1,0).
        let mut source = ScriptedTileSource::new(&[3], &[4]);
        assert!(round.shift(Direction::Left, &mut source));
        assert_eq!(
            round.grid(),
            &grid([
                [4, 0, 0, 0],
                [4, 0, 0, 0],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ])
        );
        assert_eq!(round.score(), 14);
        assert!(!round.is_over());
    }

    #[test]
    fn shift_into_dead_position_sets_over() {
        let mut round = Round::from_grid(Grid::from_rows(vec![vec![2, 4], vec![8, 0]]), 0);
        let mut source = ScriptedTileSource::new(&[0], &[4]);
        assert!(round.shift(Direction::Right, &mut source));
        assert_eq!(round.grid(), &Grid::from_rows(vec![vec![2, 4], vec![4, 8]]));
        assert!(round.is_over());
        assert_eq!(round.score(), 0, "sliding without merging earns nothing");
    }

    #[test]
    fn spawn_on_full_grid_is_a_noop() {
        let full = grid([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        let mut round = Round::from_grid(full.clone(), 0);
        let mut source = ScriptedTileSource::new(&[], &[]);
        round.spawn(&mut source);
        assert_eq!(round.grid(), &full);
    }

    #[test]
    fn spawn_fills_the_scripted_empty_cell() {
        let mut round = Round::from_grid(
            grid([
                [2, 0, 4, 0],
                [0, 2, 4, 8],
                [2, 4, 2, 4],
                [0, 0, 2, 2],
            ]),
            0,
        );
        // Empties row-major: (0,1) (0,3) (1,0) (3,0) (3,1); slot 3 is (3,0).
        let mut source = ScriptedTileSource::new(&[3], &[2]);
        round.spawn(&mut source);
        assert_eq!(round.grid().get(3, 0), 2);
    }
}
