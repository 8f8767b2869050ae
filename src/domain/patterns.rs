use std::fmt;
use std::str::FromStr;

use log::debug;

use super::error::{LifeError, Result};
use super::{Coord, Grid};

/// Board size the pattern anchors were laid out for.
pub const REFERENCE_DIMENSION: usize = 100;

/// The closed set of seed patterns, identified by their display names.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PatternName {
    Glider,
    GliderGun,
    Spinner,
    Pulsar,
    SimpkinGliderGun,
    PufferTrain,
}

impl PatternName {
    pub const ALL: [PatternName; 6] = [
        PatternName::Glider,
        PatternName::GliderGun,
        PatternName::Spinner,
        PatternName::Pulsar,
        PatternName::SimpkinGliderGun,
        PatternName::PufferTrain,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PatternName::Glider => "Glider",
            PatternName::GliderGun => "Glider Gun",
            PatternName::Spinner => "Spinner",
            PatternName::Pulsar => "Pulsar",
            PatternName::SimpkinGliderGun => "Simpkin Glider Gun",
            PatternName::PufferTrain => "Puffer Train",
        }
    }

    pub fn pattern(self) -> &'static Pattern {
        match self {
            PatternName::Glider => &presets::GLIDER,
            PatternName::GliderGun => &presets::GLIDER_GUN,
            PatternName::Spinner => &presets::SPINNER,
            PatternName::Pulsar => &presets::PULSAR,
            PatternName::SimpkinGliderGun => &presets::SIMPKIN_GLIDER_GUN,
            PatternName::PufferTrain => &presets::PUFFER_TRAIN,
        }
    }
}

impl fmt::Display for PatternName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternName {
    type Err = LifeError;

    /// Case-sensitive match against the display names.
    fn from_str(s: &str) -> Result<Self> {
        PatternName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| LifeError::InvalidPattern(s.to_string()))
    }
}

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    pub name: PatternName,
    pub description: &'static str,
    /// Top-left corner of the bounding box on a `REFERENCE_DIMENSION` board
    pub anchor: (usize, usize),
    /// Live cells relative to the bounding-box corner
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0)
    }

    /// Anchor scaled to a board of `dimension`. Identity at `REFERENCE_DIMENSION`.
    pub fn origin_for(&self, dimension: usize) -> Coord {
        let (ax, ay) = self.anchor;
        Coord::new(
            ax * dimension / REFERENCE_DIMENSION,
            ay * dimension / REFERENCE_DIMENSION,
        )
    }

    /// Absolute coordinates with the bounding box placed at `origin`.
    /// Coordinates are not bounds checked.
    pub fn cells_at(&self, origin: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().map(move |&(dx, dy)| {
            Coord::new(origin.x.saturating_add(dx), origin.y.saturating_add(dy))
        })
    }

    /// Absolute coordinates this pattern occupies on a board of `dimension`.
    pub fn placement(&self, dimension: usize) -> Vec<Coord> {
        self.cells_at(self.origin_for(dimension)).collect()
    }

    /// Place the pattern at its scaled anchor. See [`Pattern::apply_at`].
    pub fn apply(&self, grid: &mut Grid) -> Result<Vec<Coord>> {
        self.apply_at(grid, self.origin_for(grid.dimension()))
    }

    /// Activate every cell of the pattern with its bounding box at `origin`.
    ///
    /// Additive: cells outside the pattern keep their state. All coordinates are
    /// checked before anything is written, so a pattern that does not fit leaves
    /// the grid untouched. Returns the cells that were dead before.
    pub fn apply_at(&self, grid: &mut Grid, origin: Coord) -> Result<Vec<Coord>> {
        if let Some(outside) = self.cells_at(origin).find(|&c| !grid.contains(c)) {
            return Err(grid.out_of_bounds(outside));
        }

        let mut activated = Vec::new();
        for coord in self.cells_at(origin) {
            if !grid.is_active(coord)? {
                activated.push(coord);
            }
            grid.set_active(coord, true)?;
        }
        debug!(
            "placed {} at {origin}, {} cells activated",
            self.name,
            activated.len()
        );
        Ok(activated)
    }
}

/// Lookup of the named seed patterns.
#[derive(Clone, Copy, Debug, Default)]
pub struct PatternLibrary;

impl PatternLibrary {
    /// Get all available patterns
    pub fn all() -> impl Iterator<Item = &'static Pattern> {
        PatternName::ALL.into_iter().map(PatternName::pattern)
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        PatternName::ALL.into_iter().map(PatternName::as_str)
    }

    pub fn get(name: &str) -> Result<&'static Pattern> {
        name.parse::<PatternName>().map(PatternName::pattern)
    }

    /// Seed `grid` with the pattern called `name`.
    pub fn apply(name: &str, grid: &mut Grid) -> Result<Vec<Coord>> {
        Self::get(name)?.apply(grid)
    }
}

/// Pattern data. Anchors reproduce the classic placements on a 100x100 board.
pub mod presets {
    use super::*;

    /// Glider travelling towards lower x, higher y (period 4)
    pub const GLIDER: Pattern = Pattern {
        name: PatternName::Glider,
        description: "Spaceship, moves diagonally (period 4)",
        anchor: (4, 20),
        cells: &[(0, 0), (0, 1), (0, 2), (1, 2), (2, 1)],
    };

    /// Gosper glider gun
    pub const GLIDER_GUN: Pattern = Pattern {
        name: PatternName::GliderGun,
        description: "Gosper gun, emits a glider every 30 generations",
        anchor: (1, 1),
        cells: &[
            // Left square
            (0, 4), (0, 5),
            (1, 4), (1, 5),

            // Left circle
            (10, 4), (10, 5), (10, 6),
            (11, 3), (11, 7),
            (12, 2), (12, 8),
            (13, 2), (13, 8),
            (14, 5),
            (15, 3), (15, 7),
            (16, 4), (16, 5), (16, 6),
            (17, 5),

            // Middle pieces
            (20, 2), (20, 3), (20, 4),
            (21, 2), (21, 3), (21, 4),
            (22, 1), (22, 5),
            (24, 0), (24, 1), (24, 5), (24, 6),

            // Right square
            (34, 2), (34, 3),
            (35, 2), (35, 3),
        ],
    };

    /// Blinker, vertical phase first (period 2)
    pub const SPINNER: Pattern = Pattern {
        name: PatternName::Spinner,
        description: "Oscillator (period 2)",
        anchor: (10, 10),
        cells: &[(0, 0), (0, 1), (0, 2)],
    };

    /// Five parallel bars that burst into a symmetric display
    pub const PULSAR: Pattern = Pattern {
        name: PatternName::Pulsar,
        description: "Parallel bars, evolves into a symmetric display",
        anchor: (48, 48),
        cells: &[
            (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6),
            (2, 0), (2, 1), (2, 2), (2, 3), (2, 4), (2, 5), (2, 6),
            (4, 0), (4, 1), (4, 2), (4, 3), (4, 4), (4, 5), (4, 6),
            (8, 0), (8, 1), (8, 2), (8, 3), (8, 4), (8, 5), (8, 6),
            (24, 0), (24, 1), (24, 2), (24, 3), (24, 4), (24, 5), (24, 6),
        ],
    };

    /// Simkin glider gun
    pub const SIMPKIN_GLIDER_GUN: Pattern = Pattern {
        name: PatternName::SimpkinGliderGun,
        description: "Two-engine glider gun",
        anchor: (2, 10),
        cells: &[
            // Left block
            (0, 2), (0, 3), (1, 2), (1, 3),

            // First engine
            (5, 2), (5, 3), (5, 4), (6, 1), (6, 5), (7, 0), (7, 6), (8, 0), (8, 6),
            (9, 1), (9, 5), (10, 2), (10, 3), (10, 4),
            (11, 1), (11, 5), (12, 0), (12, 6), (13, 0), (13, 6), (14, 1), (14, 5),
            (15, 2), (15, 3), (15, 4),

            // Middle block
            (20, 2), (20, 3), (21, 2), (21, 3),

            // Second engine
            (23, 2), (23, 3), (23, 4), (24, 1), (24, 5), (25, 0), (25, 6), (26, 0), (26, 6),
            (27, 1), (27, 5), (28, 2), (28, 3), (28, 4),
            (29, 1), (29, 5), (30, 0), (30, 6), (31, 0), (31, 6), (32, 1), (32, 5),
            (33, 2), (33, 3), (33, 4),

            // Right block
            (40, 2), (40, 3), (41, 2), (41, 3),
        ],
    };

    /// Puffer with its debris trail
    pub const PUFFER_TRAIN: Pattern = Pattern {
        name: PatternName::PufferTrain,
        description: "Puffer that leaves debris behind",
        anchor: (10, 48),
        cells: &[
            // Puffer
            (0, 2), (0, 3), (0, 4),
            (1, 1), (1, 4),
            (2, 1),
            (3, 1), (3, 4),
            (4, 1),
            (5, 2), (5, 3), (5, 4),

            // Debris
            (12, 1), (12, 2), (12, 3),
            (13, 0), (13, 3),
            (14, 0),
            (15, 0), (15, 3),
            (16, 0),
            (17, 1), (17, 2), (17, 3),
        ],
    };
}
