//! Semiconductor parameter models for crystalline silicon
//!
//! This crate implements the empirical parameter chain consumed by the
//! two-diode solar-cell solver in `cell-core`:
//!
//! - `constants`: CODATA-2018 physical constants and STC values
//! - `bandgap`: silicon bandgap energy, nine published formulas
//! - `effective_mass`: conduction/valence effective masses (Green 1990)
//! - `carrier`: intrinsic carrier concentration (nine published models) and
//!   Fermi-statistics doped concentrations with Schenk bandgap narrowing
//! - `chemical_potential`: deviation of the chemical potential from the
//!   bandgap center
//! - `mobility`: Klaassen unified bulk mobility for As, P and B dopants
//! - `diffusion`: minority-carrier diffusion coefficients via the Einstein
//!   relation
//!
//! Every model is a pure function of temperature (and doping where stated).
//! Temperatures must be positive kelvin; out-of-domain arguments are
//! reported as [`DomainError`] and never masked.

pub mod bandgap;
pub mod carrier;
pub mod chemical_potential;
pub mod constants;
pub mod diffusion;
pub mod effective_mass;
pub mod mobility;

use thiserror::Error;

/// Out-of-domain argument for a parameter model.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("temperature {0} K is outside the model domain (T > 0 K required)")]
    NonPositiveTemperature(f64),
    #[error("doping density {0} cm^-3 is outside the model domain (N >= 0 required)")]
    NegativeDoping(f64),
}

/// Validate a temperature argument before evaluating any formula.
pub(crate) fn check_temperature(t: f64) -> Result<(), DomainError> {
    if !(t > 0.0) {
        return Err(DomainError::NonPositiveTemperature(t));
    }
    Ok(())
}

pub use bandgap::{bandgap, BandgapModel};
pub use carrier::{doped_concentrations, intrinsic_concentration, ConcentrationModel, DopedConcentrations};
pub use chemical_potential::{chemical_potential, chemical_potential_const_mass};
pub use diffusion::{einstein, electron_diffusion, hole_diffusion};
pub use effective_mass::effective_masses;
pub use mobility::{bulk_mobility, BulkMobility};
