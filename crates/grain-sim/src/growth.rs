//! Majority-vote growth rule and the fill-until-done driver.

use crate::lattice::Lattice;
use grain_core::{CellState, Error, GrainId, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Summary of a completed fill run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillReport {
    /// Growth steps performed
    pub steps: u64,
    /// Cells claimed by growth (seeds excluded)
    pub cells_claimed: usize,
}

impl Lattice {
    /// One synchronous growth step. Returns the number of cells claimed.
    ///
    /// The whole step shares a single `step_instant`, and only neighbors
    /// whose generation strictly predates it are counted. That filter is
    /// what makes the sequential scan behave like a simultaneous update:
    /// cells claimed earlier in the same pass carry the step instant and
    /// cast no votes until the next step.
    pub fn advance(&mut self) -> usize {
        let step_instant = self.step + 1;
        let mut claimed = 0;
        let mut tallies = vec![0u32; self.grain_count() as usize];

        for index in 0..self.cells.len() {
            if !self.cells[index].is_empty() {
                continue;
            }

            let coord = self.cells[index].coordinate();
            tallies.fill(0);
            for neighbor in self.neighbors_of(coord) {
                let cell = self.cell(neighbor);
                if let CellState::Grain(id) = cell.state() {
                    if cell.generation() < step_instant {
                        tallies[(id.as_u32() - 1) as usize] += 1;
                    }
                }
            }

            // Strictly greatest tally wins; ties go to the lowest grain id
            // (ids are scanned in ascending order and replace the running
            // winner only on a strictly larger tally).
            let mut winner: Option<(GrainId, u32)> = None;
            for (i, &votes) in tallies.iter().enumerate() {
                if votes == 0 {
                    continue;
                }
                if winner.map_or(true, |(_, best)| votes > best) {
                    winner = Some((GrainId(i as u32 + 1), votes));
                }
            }

            if let Some((id, _)) = winner {
                self.cells[index].set(step_instant, CellState::Grain(id));
                self.empty_count -= 1;
                claimed += 1;
            }
        }

        self.step = step_instant;
        debug!(
            step = step_instant,
            claimed,
            empty = self.empty_count,
            "growth step complete"
        );
        claimed
    }

    /// Run growth steps until no empty cells remain.
    ///
    /// Fails with [`Error::Stuck`] if a step claims zero cells while empty
    /// cells remain, rather than looping forever on an unreachable cell.
    #[instrument(skip(self), fields(grains = self.grain_count(), empty = self.empty_count()))]
    pub fn fill(&mut self) -> Result<FillReport> {
        let start_step = self.step;
        let mut cells_claimed = 0;

        while self.empty_count > 0 {
            let claimed = self.advance();
            if claimed == 0 {
                return Err(Error::Stuck {
                    step: self.step,
                    empty_remaining: self.empty_count,
                });
            }
            cells_claimed += claimed;

            if self.step % 32 == 0 {
                info!(
                    step = self.step,
                    empty = self.empty_count,
                    "growth in progress"
                );
            }
        }

        let report = FillReport {
            steps: self.step - start_step,
            cells_claimed,
        };
        info!(
            steps = report.steps,
            cells_claimed = report.cells_claimed,
            "lattice full"
        );
        Ok(report)
    }
}
