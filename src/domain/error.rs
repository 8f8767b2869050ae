use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum LifeError {
    #[error("Coordinate ({x}, {y}) is outside the {dimension}x{dimension} grid")]
    OutOfBounds { x: usize, y: usize, dimension: usize },

    #[error("Unknown pattern: '{0}'")]
    InvalidPattern(String),

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("grid dimension must be at least 1")]
    ZeroDimension,
    #[error("grid dimension {0} is too large to allocate")]
    DimensionTooLarge(usize),
    #[error("tick interval must be greater than zero")]
    ZeroInterval,
    #[error("tick interval {0:?} is too long")]
    IntervalTooLong(std::time::Duration),
}

pub type Result<T> = std::result::Result<T, LifeError>;
