// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Run control and coordination
pub mod application;

// Re-exports for convenience
pub use domain::{Cell, Coord, Grid, LifeError, Pattern, PatternLibrary, PatternName, TransitionEngine};
pub use application::{Redraw, RedrawCause, RedrawSink, RunState, SimulationConfig, SimulationController};
