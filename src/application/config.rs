use std::time::Duration;

use crate::domain::{ConfigError, Grid, REFERENCE_DIMENSION};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(25);

/// Longest accepted tick interval. Keeps every tick deadline representable.
pub const MAX_TICK_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Board size and tick cadence, both fixed for the lifetime of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub dimension: usize,
    pub tick_interval: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dimension: REFERENCE_DIMENSION,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl SimulationConfig {
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        if Grid::checked_cell_count(self.dimension).is_none() {
            return Err(ConfigError::DimensionTooLarge(self.dimension));
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        if self.tick_interval > MAX_TICK_INTERVAL {
            return Err(ConfigError::IntervalTooLong(self.tick_interval));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_board() {
        let config = SimulationConfig::default();
        assert_eq!(config.dimension, 100);
        assert_eq!(config.tick_interval, Duration::from_millis(25));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn builder_overrides_fields() {
        let config = SimulationConfig::default()
            .with_dimension(40)
            .with_tick_interval(Duration::from_millis(100));
        assert_eq!(config.dimension, 40);
        assert_eq!(config.tick_interval, Duration::from_millis(100));
    }

    #[test]
    fn zero_values_are_rejected() {
        assert_eq!(
            SimulationConfig::default().with_dimension(0).validate(),
            Err(ConfigError::ZeroDimension)
        );
        assert_eq!(
            SimulationConfig::default().with_tick_interval(Duration::ZERO).validate(),
            Err(ConfigError::ZeroInterval)
        );
    }

    #[test]
    fn oversized_values_are_rejected() {
        let huge = 1 << (usize::BITS / 2);
        assert_eq!(
            SimulationConfig::default().with_dimension(huge).validate(),
            Err(ConfigError::DimensionTooLarge(huge))
        );
        assert_eq!(
            SimulationConfig::default().with_tick_interval(Duration::MAX).validate(),
            Err(ConfigError::IntervalTooLong(Duration::MAX))
        );
        assert_eq!(
            SimulationConfig::default().with_tick_interval(MAX_TICK_INTERVAL).validate(),
            Ok(())
        );
    }
}
