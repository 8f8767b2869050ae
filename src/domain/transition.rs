//! Generation transition using a two-phase compute/commit update.
//!
//! The compute phase writes every cell's pending state from the committed
//! snapshot; only once the whole board has been computed does the commit phase
//! promote pending to committed. A neighbor count therefore never observes a
//! cell that has already advanced, and the result does not depend on the order
//! in which cells are visited.

use log::trace;

use super::neighbors::count_unchecked;
use super::{Cell, Coord, Grid};

/// Applies Conway's rule to a whole [`Grid`], one generation per call.
#[derive(Clone, Copy, Debug, Default)]
pub struct TransitionEngine;

impl TransitionEngine {
    pub const fn new() -> Self {
        Self
    }

    /// Compute phase: assign the pending state of every cell.
    pub(crate) fn compute(&self, grid: &mut Grid) {
        let order = grid.coords();
        self.compute_in_order(grid, order);
    }

    pub(crate) fn compute_in_order(&self, grid: &mut Grid, order: impl IntoIterator<Item = Coord>) {
        for coord in order {
            let neighbors = count_unchecked(coord, grid);
            let next = Cell::next_state(grid.active_unchecked(coord), neighbors);
            grid.cell_mut(coord).set_pending(next);
        }
    }

    /// Commit phase: promote every pending state. Returns the cells that changed.
    pub(crate) fn commit(&self, grid: &mut Grid) -> Vec<Coord> {
        grid.cells_mut()
            .filter_map(|(coord, cell)| cell.commit().then_some(coord))
            .collect()
    }

    /// Advance the grid by one generation and return the coordinates whose
    /// committed state changed.
    pub fn compute_and_commit(&self, grid: &mut Grid) -> Vec<Coord> {
        self.compute(grid);
        let changed = self.commit(grid);
        trace!("generation committed, {} cells changed", changed.len());
        changed
    }
}
