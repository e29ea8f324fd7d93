//! Error types for configuring and rendering the automaton.

use thiserror::Error;

/// Rejected construction parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The grid has no interior cell to evolve.
    #[error("grid {width}x{height} has no interior; both dimensions must be at least 3")]
    GridTooSmall { width: usize, height: usize },

    /// The cell count does not fit in memory addressing.
    #[error("grid {width}x{height} is too large to allocate")]
    GridTooLarge { width: usize, height: usize },

    /// Fewer than two states leaves no distinction between healthy and ill.
    #[error("number of states must be at least 2, got {0}")]
    TooFewStates(u32),

    /// A damping divisor that is zero, negative or not finite.
    #[error("{name} must be a finite value greater than 0, got {value}")]
    InvalidDivisor { name: &'static str, value: f64 },

    /// Growth must be non-negative since the rule has no lower clamp.
    #[error("g must be a finite value of at least 0, got {0}")]
    InvalidGrowth(f64),
}

/// Errors produced while converting states into pixels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("frame holds {actual} bytes, expected {expected} (4 per cell)")]
    FrameSize { expected: usize, actual: usize },
}
