//! Plain-text rendering of a filled lattice.

use grain_sim::Lattice;
use std::fmt::Write;

/// Render the lattice as a column-aligned table of raw states, row-major.
/// A `0` marks a still-empty cell and should never appear after a
/// successful fill.
pub fn render_table(lattice: &Lattice) -> String {
    let (rows, cols) = lattice.dimensions();
    let width = lattice.grain_count().to_string().len();

    let mut out = String::with_capacity(rows * cols * (width + 1));
    for row in 0..rows {
        for col in 0..cols {
            if col > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{:>width$}", lattice.state_at(row, col));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use grain_core::Coordinate;

    #[test]
    fn test_render_aligned_table() {
        let sites = [Coordinate::new(0, 0), Coordinate::new(1, 1)];
        let mut lattice = Lattice::with_seed_sites(2, 2, &sites).unwrap();
        lattice.fill().unwrap();

        let rendered = render_table(&lattice);
        assert_eq!(rendered.lines().count(), 2);
        for line in rendered.lines() {
            assert_eq!(line.split_whitespace().count(), 2);
        }
        assert!(!rendered.contains('0'), "no empty cells after fill");
    }

    #[test]
    fn test_render_pads_wide_ids() {
        let sites: Vec<Coordinate> = (0..10).map(|col| Coordinate::new(0, col)).collect();
        let lattice = Lattice::with_seed_sites(1, 10, &sites).unwrap();

        let rendered = render_table(&lattice);
        assert_eq!(rendered, " 1  2  3  4  5  6  7  8  9 10\n");
    }
}
