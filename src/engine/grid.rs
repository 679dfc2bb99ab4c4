/// A single cell value. Zero marks an empty cell; anything else is a power
/// of two.
pub type Tile = u32;

/// Points accumulated by merges.
pub type Score = u64;

/// Direction represents the direction of a shift.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        };
        write!(f, "{}", s)
    }
}

/// Grid is a square matrix of tiles. It is a plain value: orientation
/// transforms and shifts return new grids rather than mutating in place.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Tile>>,
}

impl Grid {
    pub(crate) fn empty(size: usize) -> Self {
        Self {
            rows: vec![vec![0; size]; size],
        }
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: Vec<Vec<Tile>>) -> Self {
        Self { rows }
    }

    /// Cells per side.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// The tile at the given cell. Both coordinates must be below `size`.
    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.rows[row][col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: Tile) {
        self.rows[row][col] = value;
    }

    /// The grid contents as row slices, top row first.
    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    /// The largest tile on the grid.
    pub fn highest_tile(&self) -> Tile {
        self.rows
            .iter()
            .flat_map(|row| row.iter().copied())
            .max()
            .unwrap_or(0)
    }

    /// Coordinates of every empty cell in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for (rdx, row) in self.rows.iter().enumerate() {
            for (cdx, &tile) in row.iter().enumerate() {
                if tile == 0 {
                    cells.push((rdx, cdx));
                }
            }
        }
        cells
    }

    /// True while a legal shift remains: an empty cell, or two equal tiles
    /// adjacent in some row or column.
    pub(crate) fn has_moves(&self) -> bool {
        let size = self.size();
        for (rdx, row) in self.rows.iter().enumerate() {
            for (cdx, &tile) in row.iter().enumerate() {
                if tile == 0 {
                    return true;
                }
                if cdx + 1 < size && tile == row[cdx + 1] {
                    return true;
                }
                if rdx + 1 < size && tile == self.rows[rdx + 1][cdx] {
                    return true;
                }
            }
        }
        false
    }

    /// The mirror of this grid across its main diagonal.
    pub(crate) fn transposed(&self) -> Self {
        let size = self.size();
        let mut rows = vec![vec![0; size]; size];
        for (rdx, row) in self.rows.iter().enumerate() {
            for (cdx, &tile) in row.iter().enumerate() {
                rows[cdx][rdx] = tile;
            }
        }
        Self { rows }
    }

    /// This grid with every row reversed.
    pub(crate) fn reversed(&self) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().rev().copied().collect())
            .collect();
        Self { rows }
    }

    /// Shifts the grid in the given direction, normalizing every direction
    /// to a leftward merge through transpose/reverse. Returns the shifted
    /// grid and the points earned by merges; the result equals `self` when
    /// nothing can move that way.
    pub(crate) fn shifted(&self, direction: Direction) -> (Self, Score) {
        match direction {
            Direction::Left => self.merged_left(),
            Direction::Right => {
                let (grid, points) = self.reversed().merged_left();
                (grid.reversed(), points)
            }
            Direction::Up => {
                let (grid, points) = self.transposed().merged_left();
                (grid.transposed(), points)
            }
            Direction::Down => {
                let (grid, points) = self.transposed().reversed().merged_left();
                (grid.reversed().transposed(), points)
            }
        }
    }

    fn merged_left(&self) -> (Self, Score) {
        let mut points = 0;
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let (merged, earned) = merge_row(row);
                points += earned;
                merged
            })
            .collect();
        (Self { rows }, points)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self
            .rows
            .iter()
            .flat_map(|row| row.iter())
            .map(|tile| tile.to_string().len())
            .max()
            .unwrap_or(1);
        for row in &self.rows {
            for (cdx, &tile) in row.iter().enumerate() {
                if cdx > 0 {
                    write!(f, " ")?;
                }
                if tile == 0 {
                    write!(f, "{:>width$}", ".", width = width)?;
                } else {
                    write!(f, "{:>width$}", tile, width = width)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Slides the nonzero tiles of a row to its front, preserving their order.
pub(crate) fn compress(row: &[Tile]) -> Vec<Tile> {
    let mut compressed: Vec<Tile> = row.iter().copied().filter(|&tile| tile != 0).collect();
    compressed.resize(row.len(), 0);
    compressed
}

/// Compresses the row, combines equal neighbors in one left-to-right pass,
/// and compresses again. Each merged pair doubles the left tile, frees the
/// right one, and earns the doubled value; a tile produced by a merge never
/// merges again within the pass.
pub(crate) fn merge_row(row: &[Tile]) -> (Vec<Tile>, Score) {
    let mut merged = compress(row);
    let mut points = 0;
    for idx in 1..merged.len() {
        if merged[idx] != 0 && merged[idx] == merged[idx - 1] {
            merged[idx - 1] *= 2;
            merged[idx] = 0;
            points += Score::from(merged[idx - 1]);
        }
    }
    (compress(&merged), points)
}
