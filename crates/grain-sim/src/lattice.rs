//! 2D lattice of cells with absorbing boundaries.

use crate::cell::Cell;
use grain_core::{CellState, Coordinate, Error, GrainId, LatticeConfig, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A 2D lattice of cells. Edges are absorbing: cells outside the grid
/// simply do not exist as neighbors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lattice {
    rows: usize,
    cols: usize,
    grain_count: u32,
    /// Row-major cell storage
    pub(crate) cells: Vec<Cell>,
    /// Number of unclaimed cells; stays in sync with the cell states
    /// at every quiescent point between growth steps
    pub(crate) empty_count: usize,
    /// Number of growth steps performed so far
    pub(crate) step: u64,
}

impl Lattice {
    /// Build a lattice from configuration, with grain placement driven by
    /// a ChaCha8 generator seeded from `config.seed`.
    pub fn new(config: &LatticeConfig) -> Result<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config.rows, config.cols, config.grain_count, &mut rng)
    }

    /// Build a lattice with an injected random generator (deterministic
    /// seeding in tests).
    pub fn with_rng<R: Rng>(
        rows: usize,
        cols: usize,
        grain_count: u32,
        rng: &mut R,
    ) -> Result<Self> {
        Self::check_dimensions(rows, cols, grain_count)?;
        let mut lattice = Self::unseeded(rows, cols, grain_count);
        lattice.seed_grains(rng);
        Ok(lattice)
    }

    /// Build a lattice with explicit seed placement: grain id `k + 1` is
    /// assigned to `sites[k]`.
    pub fn with_seed_sites(rows: usize, cols: usize, sites: &[Coordinate]) -> Result<Self> {
        let grain_count = u32::try_from(sites.len())
            .map_err(|_| Error::Config(format!("too many seed sites ({})", sites.len())))?;
        Self::check_dimensions(rows, cols, grain_count)?;

        let mut lattice = Self::unseeded(rows, cols, grain_count);
        for (k, &site) in sites.iter().enumerate() {
            if site.row >= rows || site.col >= cols {
                return Err(Error::Config(format!(
                    "seed site {site} is outside a {rows}x{cols} lattice"
                )));
            }
            let index = lattice.index_of(site);
            if !lattice.cells[index].is_empty() {
                return Err(Error::Config(format!("duplicate seed site {site}")));
            }
            lattice.cells[index].set(0, CellState::Grain(GrainId(k as u32 + 1)));
            lattice.empty_count -= 1;
        }
        Ok(lattice)
    }

    fn check_dimensions(rows: usize, cols: usize, grain_count: u32) -> Result<()> {
        if rows == 0 || cols == 0 {
            return Err(Error::Config(format!(
                "lattice dimensions must be nonzero (got {rows}x{cols})"
            )));
        }
        if grain_count == 0 {
            return Err(Error::Config(
                "at least one seed grain is required".to_string(),
            ));
        }
        if grain_count as usize > rows * cols {
            return Err(Error::Config(format!(
                "{grain_count} grains cannot be seeded into {rows}x{cols} = {} cells",
                rows * cols
            )));
        }
        Ok(())
    }

    fn unseeded(rows: usize, cols: usize, grain_count: u32) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::empty(Coordinate::new(row, col)));
            }
        }
        Self {
            rows,
            cols,
            grain_count,
            cells,
            empty_count: rows * cols,
            step: 0,
        }
    }

    /// Place the seed grains by rejection sampling: a uniform row, then a
    /// uniform cell within that row, retried while the sampled cell is
    /// already claimed. All seeds share the construction instant.
    fn seed_grains<R: Rng>(&mut self, rng: &mut R) {
        for id in 1..=self.grain_count {
            loop {
                let row = rng.gen_range(0..self.rows);
                let col = rng.gen_range(0..self.cols);
                let index = self.index_of(Coordinate::new(row, col));
                if self.cells[index].is_empty() {
                    self.cells[index].set(0, CellState::Grain(GrainId(id)));
                    self.empty_count -= 1;
                    break;
                }
            }
        }
    }

    /// Every coordinate within Chebyshev distance 1 of `coord`, the queried
    /// cell included, clipped to lattice bounds. A bounded 3x3 window scan,
    /// O(1) per query.
    pub fn neighbors_of(&self, coord: Coordinate) -> Vec<Coordinate> {
        let row_lo = coord.row.saturating_sub(1);
        let row_hi = (coord.row + 1).min(self.rows - 1);
        let col_lo = coord.col.saturating_sub(1);
        let col_hi = (coord.col + 1).min(self.cols - 1);

        let mut neighbors = Vec::with_capacity(9);
        for row in row_lo..=row_hi {
            for col in col_lo..=col_hi {
                neighbors.push(Coordinate::new(row, col));
            }
        }
        neighbors
    }

    pub fn cell(&self, coord: Coordinate) -> &Cell {
        &self.cells[self.index_of(coord)]
    }

    /// Raw integer state at (row, col): 0 for empty, the grain id otherwise.
    /// Consumed by external renderers.
    pub fn state_at(&self, row: usize, col: usize) -> u32 {
        self.cell(Coordinate::new(row, col)).state().as_raw()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn grain_count(&self) -> u32 {
        self.grain_count
    }

    pub fn empty_count(&self) -> usize {
        self.empty_count
    }

    /// Number of growth steps performed so far
    pub fn step(&self) -> u64 {
        self.step
    }

    pub(crate) fn index_of(&self, coord: Coordinate) -> usize {
        coord.row * self.cols + coord.col
    }

    /// Iterator over all coordinates, row-major
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().map(|cell| cell.coordinate())
    }

    /// Iterator over all cells with their coordinates, row-major
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &Cell)> + '_ {
        self.cells.iter().map(|cell| (cell.coordinate(), cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_lattice_creation() {
        let config = LatticeConfig {
            rows: 10,
            cols: 10,
            grain_count: 5,
            seed: 42,
        };
        let lattice = Lattice::new(&config).unwrap();
        assert_eq!(lattice.dimensions(), (10, 10));
        assert_eq!(lattice.grain_count(), 5);
        assert_eq!(lattice.empty_count(), 95);
        assert_eq!(lattice.step(), 0);
    }

    #[test]
    fn test_seeding_places_each_id_once() {
        let config = LatticeConfig {
            rows: 8,
            cols: 6,
            grain_count: 7,
            seed: 3,
        };
        let lattice = Lattice::new(&config).unwrap();

        let mut counts: HashMap<u32, usize> = HashMap::new();
        for (_, cell) in lattice.iter() {
            if let Some(id) = cell.state().grain() {
                *counts.entry(id.as_u32()).or_insert(0) += 1;
            }
            // All cells share the construction instant at time 0
            assert_eq!(cell.generation(), 0);
        }

        assert_eq!(counts.len(), 7);
        for id in 1..=7 {
            assert_eq!(counts[&id], 1, "grain {id} seeded exactly once");
        }
    }

    #[test]
    fn test_seeding_all_cells_is_legal() {
        let config = LatticeConfig {
            rows: 2,
            cols: 2,
            grain_count: 4,
            seed: 0,
        };
        let lattice = Lattice::new(&config).unwrap();
        assert_eq!(lattice.empty_count(), 0);
    }

    #[test]
    fn test_rejects_too_many_grains() {
        let config = LatticeConfig {
            rows: 2,
            cols: 2,
            grain_count: 5,
            seed: 0,
        };
        assert!(matches!(Lattice::new(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_degenerate_dimensions() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(matches!(
            Lattice::with_rng(0, 5, 1, &mut rng),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Lattice::with_rng(5, 0, 1, &mut rng),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            Lattice::with_rng(5, 5, 0, &mut rng),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_with_seed_sites() {
        let sites = [Coordinate::new(0, 0), Coordinate::new(2, 3)];
        let lattice = Lattice::with_seed_sites(3, 4, &sites).unwrap();
        assert_eq!(lattice.state_at(0, 0), 1);
        assert_eq!(lattice.state_at(2, 3), 2);
        assert_eq!(lattice.empty_count(), 10);
    }

    #[test]
    fn test_with_seed_sites_rejects_duplicates_and_out_of_bounds() {
        let duplicated = [Coordinate::new(1, 1), Coordinate::new(1, 1)];
        assert!(matches!(
            Lattice::with_seed_sites(3, 3, &duplicated),
            Err(Error::Config(_))
        ));

        let outside = [Coordinate::new(3, 0)];
        assert!(matches!(
            Lattice::with_seed_sites(3, 3, &outside),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_neighbor_counts() {
        let lattice = Lattice::with_seed_sites(3, 3, &[Coordinate::new(1, 1)]).unwrap();
        // Self-inclusive Moore neighborhood: 4 corner, 6 edge, 9 interior
        assert_eq!(lattice.neighbors_of(Coordinate::new(0, 0)).len(), 4);
        assert_eq!(lattice.neighbors_of(Coordinate::new(0, 1)).len(), 6);
        assert_eq!(lattice.neighbors_of(Coordinate::new(1, 1)).len(), 9);
        assert_eq!(lattice.neighbors_of(Coordinate::new(2, 2)).len(), 4);
    }

    #[test]
    fn test_neighbors_within_chebyshev_distance() {
        let lattice = Lattice::with_seed_sites(4, 5, &[Coordinate::new(0, 0)]).unwrap();
        for coord in lattice.coordinates() {
            for neighbor in lattice.neighbors_of(coord) {
                assert!(coord.chebyshev_distance(&neighbor) <= 1);
            }
        }
    }

    #[test]
    fn test_neighbor_symmetry() {
        let lattice = Lattice::with_seed_sites(4, 5, &[Coordinate::new(0, 0)]).unwrap();
        for a in lattice.coordinates() {
            for b in lattice.neighbors_of(a) {
                assert!(
                    lattice.neighbors_of(b).contains(&a),
                    "{a} is a neighbor of {b} but not vice versa"
                );
            }
        }
    }

    #[test]
    fn test_single_row_neighbors() {
        let lattice = Lattice::with_seed_sites(1, 5, &[Coordinate::new(0, 0)]).unwrap();
        assert_eq!(lattice.neighbors_of(Coordinate::new(0, 0)).len(), 2);
        assert_eq!(lattice.neighbors_of(Coordinate::new(0, 2)).len(), 3);
        assert_eq!(lattice.neighbors_of(Coordinate::new(0, 4)).len(), 2);
    }
}
