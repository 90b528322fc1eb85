//! Minority-carrier diffusion coefficients
//!
//! Einstein relation D = V_T(T) * mu. The fixed 300 K majority mobilities
//! are the Klaassen lattice values for phosphorus-doped (electron) and
//! boron-doped (hole) silicon.

use crate::constants::thermal_voltage;
use crate::{check_temperature, DomainError};

/// Electron mobility at 300 K, Klaassen phosphorus value [m^2/Vs]
pub const MU_E_300K: f64 = 1414.0e-4;
/// Hole mobility at 300 K, Klaassen boron value [m^2/Vs]
pub const MU_H_300K: f64 = 470.5e-4;

/// Einstein relation: diffusion coefficient [m^2/s] from a mobility
/// [m^2/Vs] at temperature `t` [K].
pub fn einstein(t: f64, mobility: f64) -> f64 {
    thermal_voltage(t) * mobility
}

/// Electron diffusion coefficient [m^2/s] with the fixed 300 K mobility.
pub fn electron_diffusion(t: f64) -> Result<f64, DomainError> {
    check_temperature(t)?;
    Ok(einstein(t, MU_E_300K))
}

/// Hole diffusion coefficient [m^2/s] with the fixed 300 K mobility.
pub fn hole_diffusion(t: f64) -> Result<f64, DomainError> {
    check_temperature(t)?;
    Ok(einstein(t, MU_H_300K))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn electron_diffusion_at_300k() {
        // V_T(300) * 0.1414 = 25.85 mV * 0.1414 = 3.656e-3 m^2/s
        let d = electron_diffusion(300.0).unwrap();
        assert!((d - 3.656e-3).abs() < 1e-5, "D_e = {}", d);
    }

    #[test]
    fn scales_linearly_with_temperature() {
        let d300 = electron_diffusion(300.0).unwrap();
        let d600 = electron_diffusion(600.0).unwrap();
        assert!((d600 / d300 - 2.0).abs() < 1e-12);
    }
}
