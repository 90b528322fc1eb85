//! Two-diode solar-cell model with temperature-dependent saturation currents
//!
//! - `cell`: cell parameter set with reference defaults, effect flags
//! - `effects`: scaling-law selection and the derived thermal state
//! - `model`: the implicit J(U) solver, figures of merit, IV/PV sweeps
//! - `roots`: Newton and secant root finding shared by the solver
//! - `error`: configuration and convergence error types
//!
//! A [`TwoDiodeModel`] is built once from parameters plus flags and is then
//! immutable; every query is a pure function of the terminal voltage, so a
//! model can be cloned and swept from multiple threads.

pub mod cell;
pub mod effects;
pub mod error;
pub mod model;
pub mod roots;

pub use cell::{CellParameters, EffectFlags};
pub use effects::{SaturationCurrents, ScalingLaw, ThermalState};
pub use error::{ConfigError, SolveError};
pub use model::{CellCharacteristics, MaxPowerPoint, TwoDiodeModel, U_MAX, U_MIN};
