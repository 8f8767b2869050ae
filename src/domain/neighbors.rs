//! Moore-neighborhood counting on a bounded board.
//!
//! Positions past an edge are treated as permanently dead; nothing wraps.

use super::error::Result;
use super::{Coord, Grid};

/// The eight Moore offsets, clockwise from north. `y` grows downwards.
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (0, -1),  // N
    (1, -1),  // NE
    (1, 0),   // E
    (1, 1),   // SE
    (0, 1),   // S
    (-1, 1),  // SW
    (-1, 0),  // W
    (-1, -1), // NW
];

/// On-grid neighbors of `coord`, in `MOORE_OFFSETS` order.
pub fn neighbors(coord: Coord, grid: &Grid) -> impl Iterator<Item = Coord> + '_ {
    MOORE_OFFSETS
        .into_iter()
        .filter_map(move |(dx, dy)| coord.offset(dx, dy))
        .filter(move |&n| grid.contains(n))
}

/// Count live neighbors of an in-bounds coordinate.
/// Reads only committed state, never the pending next generation.
pub(crate) fn count_unchecked(coord: Coord, grid: &Grid) -> u8 {
    neighbors(coord, grid)
        .filter(|&n| grid.active_unchecked(n))
        .count() as u8
}

/// Count live cells in the Moore neighborhood of `coord`.
pub fn count_live_neighbors(coord: Coord, grid: &Grid) -> Result<u8> {
    if !grid.contains(coord) {
        return Err(grid.out_of_bounds(coord));
    }
    Ok(count_unchecked(coord, grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LifeError;

    fn grid_with(dimension: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(dimension);
        for &(x, y) in live {
            grid.set_active(Coord::new(x, y), true).unwrap();
        }
        grid
    }

    #[test]
    fn corner_has_three_addressable_neighbors() {
        let grid = Grid::new(10);
        assert_eq!(neighbors(Coord::new(0, 0), &grid).count(), 3);
        assert_eq!(neighbors(Coord::new(9, 9), &grid).count(), 3);
        assert_eq!(neighbors(Coord::new(0, 5), &grid).count(), 5);
        assert_eq!(neighbors(Coord::new(5, 5), &grid).count(), 8);
    }

    #[test]
    fn fully_live_board_saturates_at_edges() {
        let all: Vec<(usize, usize)> = (0..4).flat_map(|y| (0..4).map(move |x| (x, y))).collect();
        let grid = grid_with(4, &all);
        assert_eq!(count_live_neighbors(Coord::new(0, 0), &grid), Ok(3));
        assert_eq!(count_live_neighbors(Coord::new(3, 1), &grid), Ok(5));
        assert_eq!(count_live_neighbors(Coord::new(1, 1), &grid), Ok(8));
    }

    #[test]
    fn edges_do_not_wrap() {
        // Live cells on the opposite edges would be neighbors on a torus.
        let grid = grid_with(5, &[(4, 0), (0, 4), (4, 4)]);
        assert_eq!(count_live_neighbors(Coord::new(0, 0), &grid), Ok(0));
    }

    #[test]
    fn cell_does_not_count_itself() {
        let grid = grid_with(3, &[(1, 1)]);
        assert_eq!(count_live_neighbors(Coord::new(1, 1), &grid), Ok(0));
        assert_eq!(count_live_neighbors(Coord::new(0, 0), &grid), Ok(1));
    }

    #[test]
    fn each_direction_is_counted_once() {
        let grid = grid_with(3, &[(1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2), (0, 1), (0, 0)]);
        assert_eq!(count_live_neighbors(Coord::new(1, 1), &grid), Ok(8));
    }

    #[test]
    fn out_of_bounds_lookup_fails() {
        let grid = Grid::new(3);
        assert_eq!(
            count_live_neighbors(Coord::new(3, 0), &grid),
            Err(LifeError::OutOfBounds { x: 3, y: 0, dimension: 3 })
        );
    }
}
