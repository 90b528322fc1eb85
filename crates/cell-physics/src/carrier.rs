//! Carrier concentrations
//!
//! Two layers:
//!
//! - [`intrinsic_concentration`]: nine published fits for the intrinsic
//!   carrier density of silicon. Each carries an advisory validity range in
//!   its docs; the range is not enforced.
//! - [`doped_concentrations`]: Fermi-statistics electron/hole densities for
//!   a doped sample. Applies a Fermi-Dirac inverse half-integral
//!   approximation and a Schenk-style bandgap-narrowing correction
//!   (exchange-correlation and ionic terms) before solving charge balance
//!   `n * p = n_i^2`, `n - p = N_D - N_A`.
//!
//! Doping inputs are in cm^-3 (the convention of the published parameter
//! tables); all outputs are in m^-3.

use crate::bandgap::{bandgap, BandgapModel};
use crate::constants::{K_B, K_B_J, Q_E};
use crate::{check_temperature, DomainError};
use std::f64::consts::PI;

/// Intrinsic-concentration formula selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcentrationModel {
    /// Misiakos and Tsamakis (1993); accurate 78-340 K
    MisiakosTsamakis,
    /// Morin and Maita (1954); accurate 0-700 K
    MorinMaita,
    /// Putley and Mitchell (1958); accurate 350-500 K
    PutleyMitchell,
    /// Barber (1967); accurate 230-700 K
    Barber,
    /// Slotboom (1977); accurate 280-450 K
    Slotboom,
    /// Wasserab (1977)
    Wasserab,
    /// Green (1990), effective density-of-states form; accurate 200-500 K
    Green1990,
    /// Sproul and Green (1991); accurate 275-375 K
    SproulGreen1991,
    /// Sproul and Green (1993); accurate 77-400 K
    SproulGreen1993,
}

/// Intrinsic carrier concentration [m^-3] at temperature `t` [K].
pub fn intrinsic_concentration(model: ConcentrationModel, t: f64) -> Result<f64, DomainError> {
    check_temperature(t)?;
    let n_i = match model {
        ConcentrationModel::MisiakosTsamakis => {
            5.29e25 * (t / 300.0).powf(2.54) * (-6726.0 / t).exp()
        }
        ConcentrationModel::MorinMaita => {
            (1.5e33 * t.powi(3) * (-1.21 / (K_B * t)).exp()).sqrt() * 1.0e6
        }
        ConcentrationModel::PutleyMitchell => {
            3.0e22 * t.powf(1.5) * (-0.603 / (K_B * t)).exp()
        }
        ConcentrationModel::Barber => 1.72e22 * t.powf(1.5) * (-0.6025 / (K_B * t)).exp(),
        ConcentrationModel::Slotboom => {
            (9.61e32 * t.powi(3) * (-1.206 / (K_B * t)).exp()).sqrt() * 1.0e6
        }
        ConcentrationModel::Wasserab => {
            5.71e25 * (t / 300.0).powf(2.365) * (-6733.0 / t).exp()
        }
        ConcentrationModel::Green1990 => {
            let e_g = bandgap(BandgapModel::Green, t)?;
            let n_c = 2.86e25 * (t / 300.0).powf(1.58);
            let n_v = 3.1e25 * (t / 300.0).powf(1.85);
            (n_c * n_v * (-e_g / (K_B * t)).exp()).sqrt()
        }
        ConcentrationModel::SproulGreen1991 => {
            9.15e25 * (t / 300.0).powi(2) * (-6880.0 / t).exp()
        }
        ConcentrationModel::SproulGreen1993 => {
            let e_g = bandgap(BandgapModel::Green, t)?;
            1.64e21 * t.powf(1.706) * (-e_g / (2.0 * K_B * t)).exp()
        }
    };
    Ok(n_i)
}

/// Carrier densities of a doped sample, all in m^-3.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DopedConcentrations {
    /// Bandgap-narrowing-corrected intrinsic concentration [m^-3]
    pub n_i: f64,
    /// Electron concentration [m^-3]
    pub n: f64,
    /// Hole concentration [m^-3]
    pub p: f64,
}

// Schenk BGN: band degeneracies, density fractions, excitonic Rydberg [eV]
// and Bohr radius [cm]
const G_E: f64 = 12.0;
const G_H: f64 = 4.0;
const A_E: f64 = 0.5187;
const A_H: f64 = 0.4813;
const RY_EX: f64 = 0.01655;
const A_EX: f64 = 0.0000003719;

// Schenk table 2 (exchange-correlation term)
const B_E: f64 = 8.0;
const B_H: f64 = 1.0;
const C_E: f64 = 1.3346;
const C_H: f64 = 1.2365;
const D_E: f64 = 0.893;
const D_H: f64 = 1.153;
const P_XC: f64 = 7.0 / 30.0;

// Schenk table 3 (ionic term)
const H_E: f64 = 3.91;
const H_H: f64 = 4.2;
const J_E: f64 = 2.8585;
const J_H: f64 = 2.9307;
const K_E: f64 = 0.012;
const K_H: f64 = 0.19;
const Q_E_ION: f64 = 0.75;
const Q_H_ION: f64 = 0.25;

fn check_doping(n: f64) -> Result<(), DomainError> {
    if !(n >= 0.0) {
        return Err(DomainError::NegativeDoping(n));
    }
    Ok(())
}

/// Squared Fermi-corrected intrinsic concentration [cm^-6].
///
/// `n_d`/`n_a` in cm^-3. Direct form of the reference fit: undoped
/// intrinsic density (Sproul-Green form with the Green-original bandgap),
/// a Joyce-Dixon-style inverse Fermi integral and the Schenk
/// bandgap-narrowing shifts of both band edges.
fn squared_intrinsic_fermi(t: f64, n_d: f64, n_a: f64) -> Result<f64, DomainError> {
    let v_t = K_B_J * t / Q_E;
    let net = (n_d - n_a).abs();

    let e_g = bandgap(BandgapModel::Green, t)?;

    // Uncorrected intrinsic density [cm^-3]; the 0.9688 prefactor rescales
    // the Sproul-Green fit to Fermi statistics.
    let n_i_0 = 0.9688 * 1.64e15 * t.powf(1.706) * (-e_g * 1.6022e-19 / (2.0 * 1.3806e-23 * t)).exp();

    // Effective conduction-band density of states [cm^-3]
    let n_c = n_i_0 * (0.9477f64.powf(1.5) * (e_g / v_t).exp()).sqrt();

    // Inverse Fermi integral of order 1/2
    let f = net / n_c;
    let d = if f == 1.0 {
        // closed-form limit of ln(f)/(1 - f^2) at f = 1
        -0.5
    } else {
        f.ln() / (1.0 - f * f)
    };
    let u = (3.0 * PI.sqrt() * f / 4.0).powf(2.0 / 3.0);
    let fermi_inverse = d + u / (1.0 + (0.24 + 1.08 * u).powi(-2));

    // Normalized carrier densities and temperature (Schenk eq. 29)
    let v_aex = A_EX.powi(3);
    let n_h = n_a * v_aex;
    let n_e = n_d * v_aex;
    let n_s = n_e + n_h;
    let n_p = A_E * n_e + A_H * n_h;
    let n_ion = n_s;
    let t_0 = v_t / RY_EX;
    let w = n_s * n_s / t_0.powi(3);

    // Exchange-correlation shifts (Schenk eq. 33)
    let four_pi_cubed = (4.0 * PI).powi(3);
    let d_xc_h = -(four_pi_cubed
        * n_s
        * n_s
        * ((48.0 * n_h / (PI * G_H)).powf(1.0 / 3.0) + C_H * (1.0 + D_H * n_p.powf(P_XC)).ln())
        + 8.0 * PI * A_H / G_H * n_h * t_0.powi(2)
        + (8.0 * PI * n_s).sqrt() * t_0.powf(2.5))
        / (four_pi_cubed * n_s * n_s
            + t_0.powi(3)
            + B_H * n_s.sqrt() * t_0.powi(2)
            + 40.0 * n_s.powf(1.5) * t_0);
    let d_xc_e = -(four_pi_cubed
        * n_s
        * n_s
        * ((48.0 * n_e / (PI * G_E)).powf(1.0 / 3.0) + C_E * (1.0 + D_E * n_p.powf(P_XC)).ln())
        + 8.0 * PI * A_E / G_E * n_e * t_0.powi(2)
        + (8.0 * PI * n_s).sqrt() * t_0.powf(2.5))
        / (four_pi_cubed * n_s * n_s
            + t_0.powi(3)
            + B_E * n_s.sqrt() * t_0.powi(2)
            + 40.0 * n_s.powf(1.5) * t_0);

    // Ionic shifts (Schenk eq. 37)
    let d_i_h = -n_ion * (1.0 + w)
        / ((t_0 * n_s / (2.0 * PI)).sqrt() * (1.0 + H_H * (1.0 + n_s.sqrt() / t_0).ln())
            + J_H * w * n_p.powf(0.75) * (1.0 + K_H * n_p.powf(Q_H_ION)));
    let d_i_e = -n_ion * (1.0 + w)
        / ((t_0 * n_s / (2.0 * PI)).sqrt() * (1.0 + H_E * (1.0 + n_s.sqrt() / t_0).ln())
            + J_E * w * n_p.powf(0.75) * (1.0 + K_E * n_p.powf(Q_E_ION)));

    let de_c = -RY_EX * (d_xc_e + d_i_e) / v_t;
    let de_v = -RY_EX * (d_xc_h + d_i_h) / v_t;

    // Boltzmann conduction factor
    let bc = (fermi_inverse - de_c).exp();

    Ok(n_i_0 * n_i_0 * f * de_v.exp() / bc)
}

/// Bandgap-narrowing-corrected carrier densities at `t` [K].
///
/// `n_d`/`n_a` are donor/acceptor densities in cm^-3; outputs are in m^-3.
/// The majority density equals the net doping; the minority density follows
/// from `n * p = n_i^2`. Zero net doping (`n_d == n_a`, including undoped)
/// is the intrinsic limit `n = p = n_i`, returned without evaluating the
/// degenerate correction terms.
pub fn doped_concentrations(
    t: f64,
    n_d: f64,
    n_a: f64,
) -> Result<DopedConcentrations, DomainError> {
    check_temperature(t)?;
    check_doping(n_d)?;
    check_doping(n_a)?;

    if n_d == n_a {
        let e_g = bandgap(BandgapModel::Green, t)?;
        let n_i_0 =
            0.9688 * 1.64e15 * t.powf(1.706) * (-e_g * 1.6022e-19 / (2.0 * 1.3806e-23 * t)).exp();
        let n_i = n_i_0 * 1.0e6;
        return Ok(DopedConcentrations { n_i, n: n_i, p: n_i });
    }

    let n_i2 = squared_intrinsic_fermi(t, n_d, n_a)?;

    let (n, p) = if n_d > n_a {
        let n = n_d - n_a;
        (n, n_i2 / n)
    } else {
        let p = n_a - n_d;
        (n_i2 / p, p)
    };

    Ok(DopedConcentrations {
        n_i: n_i2.sqrt() * 1.0e6,
        n: n * 1.0e6,
        p: p * 1.0e6,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_models_near_1e16_at_300k() {
        let models = [
            ConcentrationModel::MisiakosTsamakis,
            ConcentrationModel::MorinMaita,
            ConcentrationModel::PutleyMitchell,
            ConcentrationModel::Barber,
            ConcentrationModel::Slotboom,
            ConcentrationModel::Wasserab,
            ConcentrationModel::Green1990,
            ConcentrationModel::SproulGreen1991,
            ConcentrationModel::SproulGreen1993,
        ];
        for model in models {
            let n_i = intrinsic_concentration(model, 300.0).unwrap();
            assert!(n_i > 1.0e15 && n_i < 1.0e17, "{:?}: {}", model, n_i);
        }
    }

    #[test]
    fn doped_majority_equals_net_doping() {
        let c = doped_concentrations(300.0, 1.0e16, 1.0).unwrap();
        // n in m^-3, net doping in cm^-3
        assert!((c.n / 1.0e6 - (1.0e16 - 1.0)).abs() / 1.0e16 < 1e-12);
        // mass action law
        let ratio = c.n * c.p / (c.n_i * c.n_i);
        assert!((ratio - 1.0).abs() < 1e-9, "n*p/n_i^2 = {}", ratio);
    }

    #[test]
    fn compensated_doping_is_finite() {
        // N_D == N_A must not produce a math-domain failure
        let c = doped_concentrations(300.0, 1.0e16, 1.0e16).unwrap();
        assert!(c.n_i.is_finite() && c.n.is_finite() && c.p.is_finite());
        assert_eq!(c.n, c.p);
    }
}
