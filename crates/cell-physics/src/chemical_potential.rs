//! Deviation of the chemical potential from the bandgap center
//!
//! mu = 3/4 * k_B * T * ln(m_v / m_c) in eV. The temperature-dependent
//! variant takes the Green (1990) effective masses; the constant-mass
//! variant pins them at their 300 K values.

use crate::constants::K_B;
use crate::effective_mass::effective_masses;
use crate::{check_temperature, DomainError};

// Green (1990) reference masses at 300 K
const M_C_300K: f64 = 1.09;
const M_V_300K: f64 = 1.15;

/// Chemical-potential deviation [eV] with temperature-dependent masses.
pub fn chemical_potential(t: f64) -> Result<f64, DomainError> {
    let (m_c, m_v) = effective_masses(t)?;
    Ok(0.75 * K_B * t * (m_v / m_c).ln())
}

/// Chemical-potential deviation [eV] with the fixed 300 K masses.
pub fn chemical_potential_const_mass(t: f64) -> Result<f64, DomainError> {
    check_temperature(t)?;
    Ok(0.75 * K_B * t * (M_V_300K / M_C_300K).ln())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn const_mass_value_at_300k() {
        // 0.75 * 8.617e-5 * 300 * ln(1.15/1.09) = 1.04 meV
        let mu = chemical_potential_const_mass(300.0).unwrap();
        assert!((mu - 1.04e-3).abs() < 2e-5);
    }

    #[test]
    fn variants_agree_near_300k() {
        // the Green masses reproduce roughly (1.09, 1.15) at 300 K
        let mu = chemical_potential(300.0).unwrap();
        let mu_const = chemical_potential_const_mass(300.0).unwrap();
        assert!((mu - mu_const).abs() < 1e-3);
    }

    #[test]
    fn positive_since_holes_are_heavier() {
        for t in [100.0, 300.0, 500.0] {
            assert!(chemical_potential(t).unwrap() > 0.0);
        }
    }

    #[test]
    fn non_positive_temperature_is_rejected() {
        assert_eq!(
            chemical_potential(0.0),
            Err(DomainError::NonPositiveTemperature(0.0))
        );
        assert_eq!(
            chemical_potential_const_mass(-10.0),
            Err(DomainError::NonPositiveTemperature(-10.0))
        );
    }
}
