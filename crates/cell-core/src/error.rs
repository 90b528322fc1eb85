use cell_physics::DomainError;
use thiserror::Error;

/// Invalid cell configuration, reported before any solve is attempted.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("fit saturation currents and fit lifetime cannot both be enabled")]
    ConflictingFitModes,
    #[error("parallel resistance must be positive, got {0} Ohm*m^2")]
    NonPositiveParallelResistance(f64),
    #[error("series resistance must be non-negative, got {0} Ohm*m^2")]
    NegativeSeriesResistance(f64),
    #[error("cell temperature must be positive, got {0} K")]
    NonPositiveTemperature(f64),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Iterative solve failure. Never masked with a stale or default value;
/// retrying with a different seed is the caller's policy.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolveError {
    #[error("{context} did not converge within {max_iters} iterations (last residual {residual:e})")]
    Convergence {
        context: &'static str,
        max_iters: usize,
        residual: f64,
    },
    #[error("derivative vanished during {context} at x = {x}")]
    ZeroDerivative { context: &'static str, x: f64 },
}
