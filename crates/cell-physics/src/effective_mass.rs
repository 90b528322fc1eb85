//! Effective carrier masses
//!
//! Green (1990) parameterization of the density-of-states effective masses
//! in silicon, as multiples of the free-electron rest mass. The conduction
//! mass follows the bandgap-ratio-corrected cube-root expression with the
//! 4.2 K longitudinal/transverse masses; the valence mass is a degree-4
//! rational polynomial fit raised to the 2/3 power. Valid over the full
//! 0-600 K range without singularities.

use crate::bandgap::{bandgap, BandgapModel, E_G_0K_PAESSLER2002};
use crate::{check_temperature, DomainError};

// Longitudinal and transverse conduction masses at 4.2 K
const M_LC_4K: f64 = 0.9163;
const M_TC_4K: f64 = 0.1905;

// Valence-mass polynomial coefficients, Green (1990) table
const A: f64 = 0.4435870;
const B: f64 = 0.3609528e-2; // K^-1
const C: f64 = 0.1173515e-3; // K^-2
const D: f64 = 0.1263218e-5; // K^-3
const E: f64 = 0.3025581e-8; // K^-4
const F: f64 = 0.4683382e-2; // K^-1
const G: f64 = 0.2286895e-3; // K^-2
const H: f64 = 0.7469271e-6; // K^-3
const I: f64 = 0.1727481e-8; // K^-4

/// Effective conduction and valence masses `(m_c, m_v)` at `t` [K],
/// dimensionless multiples of the free-electron mass.
///
/// The conduction mass depends on the Paessler-2002 bandgap at `t` and at
/// the 0 K reference.
pub fn effective_masses(t: f64) -> Result<(f64, f64), DomainError> {
    check_temperature(t)?;
    let e_g = bandgap(BandgapModel::Paessler2002, t)?;

    let m_c = (36.0 * M_LC_4K * (E_G_0K_PAESSLER2002 / e_g * M_TC_4K).powi(2)).powf(1.0 / 3.0);

    let num = A + B * t + C * t.powi(2) + D * t.powi(3) + E * t.powi(4);
    let den = 1.0 + F * t + G * t.powi(2) + H * t.powi(3) + I * t.powi(4);
    let m_v = (num / den).powf(2.0 / 3.0);

    Ok((m_c, m_v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masses_at_300k_match_green_table() {
        let (m_c, m_v) = effective_masses(300.0).unwrap();
        assert!((m_c - 1.09).abs() < 0.02, "m_c = {}", m_c);
        assert!((m_v - 1.15).abs() < 0.02, "m_v = {}", m_v);
    }

    #[test]
    fn masses_finite_over_physical_range() {
        for i in 1..=60 {
            let t = 10.0 * i as f64;
            let (m_c, m_v) = effective_masses(t).unwrap();
            assert!(m_c.is_finite() && m_c > 0.0);
            assert!(m_v.is_finite() && m_v > 0.0);
        }
    }

    #[test]
    fn rejects_non_positive_temperature() {
        assert!(effective_masses(-1.0).is_err());
    }
}
