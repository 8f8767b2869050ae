mod config;
mod controller;
mod redraw;

pub use config::{DEFAULT_TICK_INTERVAL, MAX_TICK_INTERVAL, SimulationConfig};
pub use controller::{RunState, SimulationController};
pub use redraw::{NullSink, Redraw, RedrawCause, RedrawSink};
