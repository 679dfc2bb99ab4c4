use rand::distributions::Distribution;
use rand::distributions::WeightedIndex;
use rand::Rng;

use super::grid::Tile;

const SPAWN_CHOICES: [Tile; 2] = [2, 4];
const SPAWN_WEIGHTS: [u8; 2] = [9, 1];

/// TileSource answers the two questions a tile spawn asks: which empty cell
/// receives the tile, and what value it carries. Implementations other than
/// the random one exist to make spawns deterministic under test.
pub trait TileSource {
    /// Index of the chosen cell among the currently empty cells, counted in
    /// row-major order. `empty` is the number of empty cells and is always
    /// at least 1.
    fn pick_slot(&mut self, empty: usize) -> usize;

    /// Value of the spawned tile.
    fn pick_tile(&mut self) -> Tile;
}

/// The production source: a uniform slot choice and a 9:1 weighting of 2
/// over 4 for the spawned value.
pub struct RandomTileSource<R: Rng> {
    rng: R,
    weighted_index: WeightedIndex<u8>,
}

impl<R: Rng> RandomTileSource<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            weighted_index: WeightedIndex::new(SPAWN_WEIGHTS)
                .expect("SPAWN_WEIGHTS should never be empty"),
        }
    }
}

impl<R: Rng> TileSource for RandomTileSource<R> {
    fn pick_slot(&mut self, empty: usize) -> usize {
        self.rng.gen_range(0..empty)
    }

    fn pick_tile(&mut self) -> Tile {
        SPAWN_CHOICES[self.weighted_index.sample(&mut self.rng)]
    }
}

/// A source that replays predetermined slot and tile choices.
#[cfg(test)]
pub(crate) struct ScriptedTileSource {
    slots: std::collections::VecDeque<usize>,
    tiles: std::collections::VecDeque<Tile>,
}

#[cfg(test)]
impl ScriptedTileSource {
    pub(crate) fn new(slots: &[usize], tiles: &[Tile]) -> Self {
        Self {
            slots: slots.iter().copied().collect(),
            tiles: tiles.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl TileSource for ScriptedTileSource {
    fn pick_slot(&mut self, empty: usize) -> usize {
        let slot = self
            .slots
            .pop_front()
            .expect("the spawn script ran out of slots");
        assert!(
            slot < empty,
            "scripted slot {} out of range for {} empty cells",
            slot,
            empty
        );
        slot
    }

    fn pick_tile(&mut self) -> Tile {
        self.tiles
            .pop_front()
            .expect("the spawn script ran out of tiles")
    }
}

#[cfg(test)]
mod test {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn random_tiles_are_twos_and_fours() {
        let mut source = RandomTileSource::new(rng());
        let mut twos = 0;
        let mut fours = 0;
        for _ in 0..1000 {
            match source.pick_tile() {
                2 => twos += 1,
                4 => fours += 1,
                other => panic!("spawned a {}", other),
            }
        }
        assert!(twos > 0 && fours > 0, "both values must appear");
        assert!(twos > fours, "2 must dominate at a 9:1 weighting");
    }

    #[test]
    fn random_slots_stay_in_range() {
        let mut source = RandomTileSource::new(rng());
        for empty in 1..=16 {
            for _ in 0..100 {
                assert!(source.pick_slot(empty) < empty);
            }
        }
    }

    #[test]
    fn scripted_source_replays_in_order() {
        let mut source = ScriptedTileSource::new(&[3, 0, 1], &[2, 4]);
        assert_eq!(source.pick_slot(16), 3);
        assert_eq!(source.pick_tile(), 2);
        assert_eq!(source.pick_slot(4), 0);
        assert_eq!(source.pick_tile(), 4);
        assert_eq!(source.pick_slot(2), 1);
    }
}
