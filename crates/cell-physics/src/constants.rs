//! Physical constants
//!
//! CODATA recommendation on the 2018 adjustment of the values of the
//! constants (physics.nist.gov/cuu). Charge, Planck and Boltzmann values
//! are exact by definition since the 2019 SI revision.

/// Elementary charge [C]
pub const Q_E: f64 = 1.602176634e-19;
/// Electron rest mass [kg]
pub const M_E: f64 = 9.1093837015e-31;
/// Planck constant [J s]
pub const H_PLANCK_J: f64 = 6.62607015e-34;
/// Planck constant [eV s]
pub const H_PLANCK: f64 = H_PLANCK_J / Q_E;
/// Boltzmann constant [J/K]
pub const K_B_J: f64 = 1.380649e-23;
/// Boltzmann constant [eV/K]
pub const K_B: f64 = K_B_J / Q_E;

/// Standard-test-condition temperature [K]
pub const T_STC: f64 = 273.15 + 25.0;
/// Thermal voltage times elementary charge at STC [eV]
pub const U_TE_STC: f64 = K_B * T_STC;

/// Thermal voltage k_B * T / q [V]
pub fn thermal_voltage(t: f64) -> f64 {
    K_B_J * t / Q_E
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thermal_voltage_at_stc() {
        // k*298.15/q = 25.693 mV
        assert!((thermal_voltage(T_STC) - 0.025693).abs() < 1e-5);
    }

    #[test]
    fn ev_constants_consistent() {
        assert!((K_B * Q_E - K_B_J).abs() < 1e-35);
        assert!((H_PLANCK - 4.135667696e-15).abs() < 1e-23);
    }
}
