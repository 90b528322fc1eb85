//! Silicon bandgap energy
//!
//! Nine published temperature-dependence formulas selectable at run time.
//! All return the gap in eV for T > 0 K. `Paessler2002` is the production
//! default consumed by the downstream models.
//!
//! ## References
//!
//! - J. Bardeen, W. Shockley, Phys. Rev. 80 (1950)
//! - Y. P. Varshni, Physica 34 (1967); modified parameters from the
//!   Sentaurus Device User Guide C-2009.06
//! - W. Bludau et al., J. Appl. Phys. 45 (1974)
//! - F. H. Gaensslen et al. (1976-79)
//! - M. A. Green, J. Appl. Phys. 67 (1990)
//! - R. Paessler, Phys. Status Solidi B 216 (1999); Phys. Rev. B 66 (2002)

use crate::{check_temperature, DomainError};

/// Bandgap formula selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandgapModel {
    /// Bardeen and Shockley (1950), linear fit
    BardeenShockley,
    /// Varshni (1967), original parameters
    Varshni,
    /// Varshni form with Sentaurus parameters
    VarshniModified,
    /// Bludau et al. (1974), two parameter sets split at 170 K
    Bludau,
    /// Gaensslen (1976-79), quadratic in T/300
    Gaensslen,
    /// Green (1990), three parameter sets split at 170 K and 275 K
    Green,
    /// Green form with Palankovski parameters, cubic in T/300
    GreenModified,
    /// Paessler (1999), power-law dispersion model
    Paessler1999,
    /// Paessler (2002), dispersion-related model; production default
    Paessler2002,
}

impl Default for BandgapModel {
    fn default() -> Self {
        BandgapModel::Paessler2002
    }
}

// Varshni (1967) original parameters
const E_G_0K_VAR: f64 = 1.1557; // eV
const ALPHA_VAR: f64 = 7.021e-4; // eV/K
const BETA_VAR: f64 = 1108.0; // K

// Varshni, Sentaurus parameters
const E_G_0K_VAR_MOD: f64 = 1.1696; // eV
const ALPHA_VAR_MOD: f64 = 4.73e-4; // eV/K
const BETA_VAR_MOD: f64 = 636.0; // K

// Bludau et al. (1974), pieces below/above 170 K
const E_G_0K_BLU_1: f64 = 1.17; // eV
const A_BLU_1: f64 = 1.059e-5; // eV/K
const B_BLU_1: f64 = -6.05e-7; // eV/K^2
const E_G_0K_BLU_2: f64 = 1.1785; // eV
const A_BLU_2: f64 = -9.025e-5; // eV/K
const B_BLU_2: f64 = -3.05e-7; // eV/K^2

// Gaensslen
const E_G_0K_GAE: f64 = 1.1785; // eV
const E_1_GAE: f64 = -0.02708; // eV
const E_2_GAE: f64 = -0.02745; // eV

// Green (1990) original, pieces below 170 K / below 275 K / above
const A_GRE_1: f64 = 1.17; // eV
const B_GRE_1: f64 = 1.059e-5; // eV/K
const C_GRE_1: f64 = -6.05e-7; // eV/K^2
const A_GRE_2: f64 = 1.1785; // eV
const B_GRE_2: f64 = -9.025e-5; // eV/K
const C_GRE_2: f64 = -3.05e-7; // eV/K^2
const A_GRE_3: f64 = 1.206; // eV
const B_GRE_3: f64 = -2.73e-4; // eV/K
const C_GRE_3: f64 = 0.0; // eV/K^2

// Green, Palankovski parameters
const E_G_0K_GRE: f64 = 1.17; // eV
const E_1_GRE: f64 = 0.00572; // eV
const E_2_GRE: f64 = -0.06948; // eV
const E_3_GRE: f64 = 0.018; // eV

// Paessler (1999)
const E_G_0K_PAE1999: f64 = 1.17; // eV
const ALPHA_PAE1999: f64 = 0.318e-3; // eV/K
const THETA_P_PAE1999: f64 = 406.0; // K
const P_PAE1999: f64 = 2.33;

// Paessler (2002)
/// Silicon bandgap at 0 K in the Paessler 2002 parameterization [eV]
pub const E_G_0K_PAESSLER2002: f64 = 1.17;
const ALPHA_PAE2002: f64 = 0.323e-3; // eV/K
const DELTA_PAE2002: f64 = 0.51;
const THETA_PAE2002: f64 = 446.0; // K

/// Silicon bandgap energy [eV] at temperature `t` [K].
///
/// # Arguments
/// * `model` - Published formula to evaluate
/// * `t` - Temperature [K], must be positive
pub fn bandgap(model: BandgapModel, t: f64) -> Result<f64, DomainError> {
    check_temperature(t)?;
    let e_g = match model {
        BandgapModel::BardeenShockley => {
            // 1.184 eV zero-temperature intercept is not defined in the
            // original paper; value adopted from the reference data set.
            1.184 - 3.0e-4 * t
        }
        BandgapModel::Varshni => E_G_0K_VAR - ALPHA_VAR * t * t / (BETA_VAR + t),
        BandgapModel::VarshniModified => {
            E_G_0K_VAR_MOD - ALPHA_VAR_MOD * t * t / (BETA_VAR_MOD + t)
        }
        BandgapModel::Bludau => {
            if t < 170.0 {
                E_G_0K_BLU_1 + A_BLU_1 * t + B_BLU_1 * t * t
            } else {
                // parameter set fitted up to 300 K
                E_G_0K_BLU_2 + A_BLU_2 * t + B_BLU_2 * t * t
            }
        }
        BandgapModel::Gaensslen => {
            let tr = t / 300.0;
            E_G_0K_GAE + E_1_GAE * tr + E_2_GAE * tr * tr
        }
        BandgapModel::Green => {
            if t < 170.0 {
                A_GRE_1 + B_GRE_1 * t + C_GRE_1 * t * t
            } else if t < 275.0 {
                A_GRE_2 + B_GRE_2 * t + C_GRE_2 * t * t
            } else {
                // parameter set fitted up to 415 K
                A_GRE_3 + B_GRE_3 * t + C_GRE_3 * t * t
            }
        }
        BandgapModel::GreenModified => {
            let tr = t / 300.0;
            E_G_0K_GRE + E_1_GRE * tr + E_2_GRE * tr * tr + E_3_GRE * tr * tr * tr
        }
        BandgapModel::Paessler1999 => {
            E_G_0K_PAE1999
                - (ALPHA_PAE1999 * THETA_P_PAE1999 / 2.0)
                    * ((1.0 + (2.0 * t / THETA_P_PAE1999).powf(P_PAE1999)).powf(1.0 / P_PAE1999)
                        - 1.0)
        }
        BandgapModel::Paessler2002 => {
            let d2 = DELTA_PAE2002 * DELTA_PAE2002;
            let x = 2.0 * t / THETA_PAE2002;
            let series = 1.0
                + std::f64::consts::PI.powi(2) / (3.0 + 3.0 * d2) * x.powi(2)
                + (0.75 * d2 - 0.25) * x.powi(3)
                + 8.0 / 3.0 * x.powi(4)
                + x.powi(6);
            E_G_0K_PAESSLER2002
                - ALPHA_PAE2002
                    * THETA_PAE2002
                    * ((1.0 - 3.0 * d2) / ((THETA_PAE2002 / t).exp() - 1.0)
                        + 1.5 * d2 * (series.powf(1.0 / 6.0) - 1.0))
        }
    };
    Ok(e_g)
}

/// All formula selectors, in publication order.
pub const ALL_MODELS: [BandgapModel; 9] = [
    BandgapModel::BardeenShockley,
    BandgapModel::Varshni,
    BandgapModel::VarshniModified,
    BandgapModel::Bludau,
    BandgapModel::Gaensslen,
    BandgapModel::Green,
    BandgapModel::GreenModified,
    BandgapModel::Paessler1999,
    BandgapModel::Paessler2002,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paessler2002_at_300k_matches_reference() {
        let e_g = bandgap(BandgapModel::Paessler2002, 300.0).unwrap();
        assert!((e_g - 1.1242).abs() < 5e-4, "got {}", e_g);
    }

    #[test]
    fn rejects_non_positive_temperature() {
        assert!(bandgap(BandgapModel::Varshni, 0.0).is_err());
        assert!(bandgap(BandgapModel::Varshni, -10.0).is_err());
    }
}
