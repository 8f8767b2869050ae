use super::error::{LifeError, Result};
use super::{Cell, Coord};

/// Grid owns the state of a square, bounded board.
/// The dimension is fixed at construction; cells are stored row-major.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    dimension: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Number of cells a board of this dimension holds, or `None` when its
    /// storage would not fit in the address space.
    pub const fn checked_cell_count(dimension: usize) -> Option<usize> {
        let Some(count) = dimension.checked_mul(dimension) else {
            return None;
        };
        match count.checked_mul(std::mem::size_of::<Cell>()) {
            Some(bytes) if bytes <= isize::MAX as usize => Some(count),
            _ => None,
        }
    }

    /// Create a new grid with all cells initially dead.
    ///
    /// Panics if `checked_cell_count(dimension)` is `None`;
    /// `SimulationConfig::validate` rejects such dimensions up front.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            cells: vec![Cell::DEAD; dimension * dimension],
        }
    }

    /// Side length of the board
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x < self.dimension && coord.y < self.dimension
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, coord: Coord) -> usize {
        coord.y * self.dimension + coord.x
    }

    fn index_of(&self, coord: Coord) -> Result<usize> {
        if self.contains(coord) {
            Ok(self.get_index(coord))
        } else {
            Err(self.out_of_bounds(coord))
        }
    }

    pub(crate) fn out_of_bounds(&self, coord: Coord) -> LifeError {
        LifeError::OutOfBounds {
            x: coord.x,
            y: coord.y,
            dimension: self.dimension,
        }
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, coord: Coord) -> Result<Cell> {
        self.index_of(coord).map(|idx| self.cells[idx])
    }

    pub fn is_active(&self, coord: Coord) -> Result<bool> {
        self.get(coord).map(Cell::is_active)
    }

    /// Committed state for a coordinate already known to be on the board.
    pub(crate) fn active_unchecked(&self, coord: Coord) -> bool {
        self.cells[self.get_index(coord)].is_active()
    }

    pub(crate) fn cell_mut(&mut self, coord: Coord) -> &mut Cell {
        let idx = self.get_index(coord);
        &mut self.cells[idx]
    }

    /// Set the committed state of one cell (seeding and painting)
    pub fn set_active(&mut self, coord: Coord, value: bool) -> Result<()> {
        let idx = self.index_of(coord)?;
        self.cells[idx].set_active(value);
        Ok(())
    }

    /// Flip one cell and return its new state
    pub fn toggle(&mut self, coord: Coord) -> Result<bool> {
        let idx = self.index_of(coord)?;
        Ok(self.cells[idx].toggle())
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::DEAD);
    }

    /// All coordinates in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let dimension = self.dimension;
        (0..dimension).flat_map(move |y| (0..dimension).map(move |x| Coord::new(x, y)))
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.coords().zip(self.cells.iter().copied())
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = (Coord, &mut Cell)> + '_ {
        self.coords().zip(self.cells.iter_mut())
    }

    /// Live coordinates in row-major order
    pub fn live_cells(&self) -> Vec<Coord> {
        self.iter_cells()
            .filter(|(_, cell)| cell.is_active())
            .map(|(coord, _)| coord)
            .collect()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_active()).count()
    }
}
