mod cell;
mod error;
mod grid;
pub mod neighbors;
mod patterns;
mod transition;

pub use cell::{Cell, Coord};
pub use error::{ConfigError, LifeError, Result};
pub use grid::Grid;
pub use neighbors::count_live_neighbors;
pub use patterns::{Pattern, PatternLibrary, PatternName, REFERENCE_DIMENSION, presets};
pub use transition::TransitionEngine;
