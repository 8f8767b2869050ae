use std::fmt;

/// Position of a cell on the board. `x` is the column, `y` the row.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Shift by a signed offset. Returns `None` when either axis would go negative.
    pub const fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        match (self.x.checked_add_signed(dx), self.y.checked_add_signed(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cell holds the committed state of one board position plus the
/// next-generation state written during a tick's compute phase.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Cell {
    active: bool,
    pending: bool,
}

impl Cell {
    pub const DEAD: Cell = Cell { active: false, pending: false };
    pub const ALIVE: Cell = Cell { active: true, pending: true };

    /// Check if the cell is alive in the current generation
    pub const fn is_active(self) -> bool {
        self.active
    }

    #[cfg(test)]
    pub(crate) const fn pending(self) -> bool {
        self.pending
    }

    /// Direct write outside a tick; pending mirrors the committed state.
    pub(crate) fn set_active(&mut self, value: bool) {
        self.active = value;
        self.pending = value;
    }

    pub(crate) fn set_pending(&mut self, value: bool) {
        self.pending = value;
    }

    /// Flip the committed state. No transition is in flight outside a tick,
    /// so the pending state follows.
    pub(crate) fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.pending = self.active;
        self.active
    }

    /// Promote the pending state computed for this tick.
    pub(crate) fn commit(&mut self) -> bool {
        let changed = self.active != self.pending;
        self.active = self.pending;
        changed
    }

    /// Conway's rules (B3/S23):
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Live cell with fewer than 2 or more than 3 neighbors dies
    /// 3. Dead cell with exactly 3 neighbors becomes alive
    /// 4. Dead cell with any other count stays dead
    pub const fn next_state(active: bool, neighbors: u8) -> bool {
        match (active, neighbors) {
            (true, 2 | 3) => true,
            (true, _) => false,
            (false, 3) => true,
            (false, _) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert!(!Cell::next_state(true, 0));
        assert!(!Cell::next_state(true, 1));
    }

    #[test]
    fn test_survival() {
        assert!(Cell::next_state(true, 2));
        assert!(Cell::next_state(true, 3));
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert!(!Cell::next_state(true, n));
        }
    }

    #[test]
    fn test_reproduction() {
        assert!(Cell::next_state(false, 3));
    }

    #[test]
    fn test_dead_stays_dead_without_three() {
        for n in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert!(!Cell::next_state(false, n));
        }
    }

    #[test]
    fn toggle_twice_restores_cell() {
        for before in [Cell::DEAD, Cell::ALIVE] {
            let mut cell = before;

            assert_eq!(cell.toggle(), !before.is_active());
            assert_eq!(cell.pending(), cell.is_active());

            cell.toggle();
            assert_eq!(cell, before);
        }
    }

    #[test]
    fn commit_reports_change() {
        let mut cell = Cell::DEAD;
        cell.set_pending(true);
        assert!(cell.commit());
        assert!(cell.is_active());
        assert!(!cell.commit());
    }

    #[test]
    fn coord_offset_rejects_negative() {
        let origin = Coord::new(0, 0);
        assert_eq!(origin.offset(-1, 0), None);
        assert_eq!(origin.offset(0, -1), None);
        assert_eq!(origin.offset(1, 1), Some(Coord::new(1, 1)));
    }
}
