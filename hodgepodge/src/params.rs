//! Automaton parameters.

use crate::error::ConfigError;
use crate::seed::SeedRange;
use crate::Cell;

pub const DEFAULT_STATES: u32 = 100;
pub const DEFAULT_K1: f64 = 1.0;
pub const DEFAULT_K2: f64 = 1.5;
pub const DEFAULT_G: f64 = 34.0;

/// Immutable rule configuration, fixed for the lifetime of a simulation.
///
/// State `0` is healthy, `states - 1` is ill and everything in between is
/// infected at some severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    /// Number of discrete health levels.
    pub states: u32,
    /// Damps the influence of infected neighbours on a healthy cell.
    pub k1: f64,
    /// Damps the influence of ill neighbours on a healthy cell.
    pub k2: f64,
    /// Growth pushing infected cells towards illness.
    pub g: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            states: DEFAULT_STATES,
            k1: DEFAULT_K1,
            k2: DEFAULT_K2,
            g: DEFAULT_G,
        }
    }
}

impl Params {
    pub fn with_states(mut self, states: u32) -> Self {
        self.states = states;
        self
    }

    pub fn with_k1(mut self, k1: f64) -> Self {
        self.k1 = k1;
        self
    }

    pub fn with_k2(mut self, k2: f64) -> Self {
        self.k2 = k2;
        self
    }

    pub fn with_g(mut self, g: f64) -> Self {
        self.g = g;
        self
    }

    /// The fully ill state, also the ceiling of every stepped value.
    pub fn ill(&self) -> Cell {
        self.states - 1
    }

    /// Largest value the given seeding range can produce.
    pub fn max_seed(&self, range: SeedRange) -> Cell {
        match range {
            SeedRange::Inclusive => self.states,
            SeedRange::Clamped => self.ill(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.states < 2 {
            return Err(ConfigError::TooFewStates(self.states));
        }
        for (name, value) in [("k1", self.k1), ("k2", self.k2)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDivisor { name, value });
            }
        }
        if !self.g.is_finite() || self.g < 0.0 {
            return Err(ConfigError::InvalidGrowth(self.g));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_circular_pattern_tuning() {
        let p = Params::default();
        assert_eq!(p.states, 100);
        assert_eq!(p.k1, 1.0);
        assert_eq!(p.k2, 1.5);
        assert_eq!(p.g, 34.0);
        assert_eq!(p.ill(), 99);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn builders_override_single_fields() {
        let p = Params::default().with_states(4).with_g(2.0);
        assert_eq!(p.states, 4);
        assert_eq!(p.k1, DEFAULT_K1);
        assert_eq!(p.k2, DEFAULT_K2);
        assert_eq!(p.g, 2.0);
    }

    #[test]
    fn seed_ceiling_depends_on_range() {
        let p = Params::default().with_states(4);
        assert_eq!(p.max_seed(SeedRange::Inclusive), 4);
        assert_eq!(p.max_seed(SeedRange::Clamped), 3);
    }

    #[test]
    fn rejects_degenerate_values() {
        assert_eq!(
            Params::default().with_states(1).validate(),
            Err(ConfigError::TooFewStates(1))
        );
        assert!(matches!(
            Params::default().with_k1(0.0).validate(),
            Err(ConfigError::InvalidDivisor { name: "k1", .. })
        ));
        assert!(matches!(
            Params::default().with_k2(f64::NAN).validate(),
            Err(ConfigError::InvalidDivisor { name: "k2", .. })
        ));
        assert_eq!(
            Params::default().with_g(-1.0).validate(),
            Err(ConfigError::InvalidGrowth(-1.0))
        );
    }
}
