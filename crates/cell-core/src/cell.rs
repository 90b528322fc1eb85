//! Cell configuration records
//!
//! [`CellParameters`] and [`EffectFlags`] are plain value objects owned by
//! the caller. The solver never mutates them; every solve is a pure
//! function of one configuration snapshot, so snapshots can be cloned
//! freely across threads (temperature sweeps, fit loops).

use crate::error::ConfigError;
use cell_physics::constants::T_STC;

/// Typical crystalline-silicon cell values, used as defaults and in tests.
pub const J_S1_TYPICAL: f64 = 1.0e-8; // A/m^2
pub const J_S2_TYPICAL: f64 = 1.0e-5; // A/m^2
pub const R_S_TYPICAL: f64 = 0.5e-4; // Ohm*m^2
pub const R_P_TYPICAL: f64 = 3000.0e-4; // Ohm*m^2

/// Two-diode-model cell parameters.
///
/// Current densities are in A/m^2, resistances in Ohm*m^2, temperatures in
/// K, doping densities in m^-3. `j_s1_ini`/`j_s2_ini` are the diode
/// saturation currents at the reference temperature `t_ini`; the effective
/// values at `t_sim` come out of the selected scaling law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellParameters {
    /// Photocurrent density [A/m^2], negative under illumination
    pub j_ph: f64,
    /// Diffusion-limited saturation current at `t_ini` [A/m^2]
    pub j_s1_ini: f64,
    /// Space-charge-recombination saturation current at `t_ini` [A/m^2]
    pub j_s2_ini: f64,
    /// Series resistance [Ohm*m^2], >= 0
    pub r_s: f64,
    /// Parallel (shunt) resistance [Ohm*m^2], > 0
    pub r_p: f64,
    /// Reference temperature [K]
    pub t_ini: f64,
    /// Simulation temperature [K]
    pub t_sim: f64,
    /// Device thickness [m]
    pub thickness: f64,
    /// Minority-carrier lifetime [s]
    pub lifetime: f64,
    /// Surface recombination velocity [m/s]
    pub surface_velocity: f64,
    /// Donor concentration [m^-3]
    pub n_d: f64,
    /// Acceptor concentration [m^-3]
    pub n_a: f64,
}

impl Default for CellParameters {
    fn default() -> Self {
        Self {
            j_ph: -10.0e-20,
            j_s1_ini: J_S1_TYPICAL,
            j_s2_ini: J_S2_TYPICAL,
            r_s: R_S_TYPICAL,
            r_p: R_P_TYPICAL,
            t_ini: T_STC,
            t_sim: T_STC + 75.0,
            thickness: 180.0e-6,
            lifetime: 50.0e-6,
            surface_velocity: 6.0,
            n_d: 1.0e12,
            n_a: 1.0e24,
        }
    }
}

impl CellParameters {
    /// Check the physical invariants: R_p > 0 (the shunt branch divides by
    /// it), R_s >= 0, both temperatures positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.r_p > 0.0) {
            return Err(ConfigError::NonPositiveParallelResistance(self.r_p));
        }
        if !(self.r_s >= 0.0) {
            return Err(ConfigError::NegativeSeriesResistance(self.r_s));
        }
        if !(self.t_ini > 0.0) {
            return Err(ConfigError::NonPositiveTemperature(self.t_ini));
        }
        if !(self.t_sim > 0.0) {
            return Err(ConfigError::NonPositiveTemperature(self.t_sim));
        }
        Ok(())
    }
}

/// Temperature-dependence effect selection.
///
/// The five effect flags are independent; they decide which physical
/// sub-models feed the saturation-current scaling. The two fit flags are
/// mutually exclusive — enabling both is a configuration error, reported
/// rather than silently resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectFlags {
    /// Temperature-scale the saturation currents at all
    pub saturation_scaling: bool,
    /// Bandgap temperature dependence (Paessler 2002)
    pub bandgap: bool,
    /// Effective-mass temperature dependence (Green 1990)
    pub effective_mass: bool,
    /// Diffusion-coefficient temperature dependence (Einstein relation,
    /// fixed 300 K mobility)
    pub diffusion: bool,
    /// Mobility temperature dependence (Klaassen unified model)
    pub mobility: bool,
    /// Fit mode: scale saturation currents for an external fit loop
    pub fit_saturation: bool,
    /// Fit mode: derive J_s1 from fundamental constants, solving for an
    /// implied lifetime
    pub fit_lifetime: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parameters_are_valid() {
        CellParameters::default().validate().unwrap();
    }

    #[test]
    fn zero_shunt_resistance_is_rejected() {
        let params = CellParameters {
            r_p: 0.0,
            ..CellParameters::default()
        };
        assert_eq!(
            params.validate(),
            Err(ConfigError::NonPositiveParallelResistance(0.0))
        );
    }

    #[test]
    fn negative_series_resistance_is_rejected() {
        let params = CellParameters {
            r_s: -1.0e-4,
            ..CellParameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::NegativeSeriesResistance(_))
        ));
    }

    #[test]
    fn non_positive_temperatures_are_rejected() {
        for (t_ini, t_sim) in [(0.0, 300.0), (300.0, -1.0)] {
            let params = CellParameters {
                t_ini,
                t_sim,
                ..CellParameters::default()
            };
            assert!(matches!(
                params.validate(),
                Err(ConfigError::NonPositiveTemperature(_))
            ));
        }
    }
}
