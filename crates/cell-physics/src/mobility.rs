//! Klaassen unified bulk mobility
//!
//! D. B. M. Klaassen, "A unified mobility model for device simulation I + II"
//! (1992), Solid-State Electronics 35, 953-967. Sufficient accuracy over
//! 50-500 K.
//!
//! Majority-carrier bulk mobilities for three dopant species: arsenic and
//! phosphorus donors (electrons) and the boron acceptor (holes). Lattice
//! scattering follows a power law in temperature; ionized-impurity,
//! carrier-carrier and minority-impurity scattering follow the unified
//! screened model; the two contributions combine via Matthiessen's rule.
//! Fully closed-form in (T, N_D, N_A) — no iteration.
//!
//! The carrier densities entering the screening terms come from
//! [`doped_concentrations`](crate::carrier::doped_concentrations) at the
//! same temperature and doping.

use crate::carrier::doped_concentrations;
use crate::{check_temperature, DomainError};

/// Majority bulk mobilities per dopant species [m^2/Vs].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulkMobility {
    /// Electron mobility, arsenic-doped material [m^2/Vs]
    pub arsenic: f64,
    /// Electron mobility, phosphorus-doped material [m^2/Vs]
    pub phosphorus: f64,
    /// Hole mobility, boron-doped material [m^2/Vs]
    pub boron: f64,
}

// Majority mobilities vs impurity concentration at 300 K (I, table 1) [m^2/Vs]
const MU_MAX_AS_300K: f64 = 1417.0e-4;
const MU_MAX_P_300K: f64 = 1414.0e-4;
const MU_MAX_B_300K: f64 = 470.5e-4;
const MU_MIN_AS_300K: f64 = 52.2e-4;
const MU_MIN_P_300K: f64 = 68.5e-4;
const MU_MIN_B_300K: f64 = 44.9e-4;
const N_REF_1_AS: f64 = 9.68e22; // m^-3
const N_REF_1_P: f64 = 9.2e22; // m^-3
const N_REF_1_B: f64 = 2.23e23; // m^-3
const ALPHA_1_AS: f64 = 0.68;
const ALPHA_1_P: f64 = 0.711;
const ALPHA_1_B: f64 = 0.719;

// Lattice-scattering temperature exponents (II, figures 1-2)
const THETA_E: f64 = 2.285;
const THETA_H: f64 = 2.247;

// Screening-regime blend weights for P(N, c) (I, p. 957)
const F_CW: f64 = 2.459;
const F_BH: f64 = 3.828;

// Normalized effective masses m/m_0
const M_E_NORM: f64 = 1.0;
const M_H_NORM: f64 = 1.258;

// G(P) parameters (I, table 2)
const S1: f64 = 0.89233;
const S2: f64 = 0.41372;
const S3: f64 = 0.19778;
const S4: f64 = 0.28227;
const S5: f64 = 0.005978;
const S6: f64 = 1.80618;
const S7: f64 = 0.72169;

// F(P) parameters (I, table 2); r5 per Klaassen, not the Sentaurus refit
const R1: f64 = 0.7643;
const R2: f64 = 2.2999;
const R3: f64 = 6.5502;
const R4: f64 = 2.367;
const R5: f64 = -0.01552;
const R6: f64 = 0.6478;

// Clustering function Z(N) for ultra-high concentrations (I, eq. 14)
const C_D: f64 = 0.21;
const N_REF_D: f64 = 4.0e26; // m^-3
const C_A: f64 = 0.5;
const N_REF_A: f64 = 7.2e26; // m^-3

// Polynomial extrapolation of G(P) below the fitted minimum:
// P_min and G_min as quartics in T/(300*m)
const Q_FIT: [f64; 5] = [0.0922, 0.3553, -0.1927, 0.0847, -0.0148];
const K_FIT: [f64; 5] = [-0.036, 0.222, -0.1321, 0.0533, -0.0089];

fn quartic(coeffs: &[f64; 5], x: f64) -> f64 {
    coeffs[0] + coeffs[1] * x + coeffs[2] * x.powi(2) + coeffs[3] * x.powi(3) + coeffs[4] * x.powi(4)
}

/// Lattice-scattering mobility (II, eq. 1) [m^2/Vs].
fn lattice(t: f64) -> (f64, f64, f64) {
    let mu_as = MU_MAX_AS_300K * (300.0 / t).powf(THETA_E);
    let mu_p = MU_MAX_P_300K * (300.0 / t).powf(THETA_E);
    let mu_b = MU_MAX_B_300K * (300.0 / t).powf(THETA_H);
    (mu_as, mu_p, mu_b)
}

/// Mobility from all non-lattice bulk scattering mechanisms (I, eq. 20).
///
/// `n_ds`/`n_as` are the substitutional dopant densities in m^-3; `n`, `p`
/// and the total carrier density `c` are in m^-3.
fn impurity_limited(t: f64, n_ds: f64, n_as: f64, n: f64, p: f64, c: f64) -> (f64, f64, f64) {
    // clustering correction (I, eq. 14-15)
    let z_d = 1.0 + 1.0 / (C_D + (N_REF_D / n_ds).powi(2));
    let z_a = 1.0 + 1.0 / (C_A + (N_REF_A / n_as).powi(2));
    let n_d = z_d * n_ds;
    let n_a = z_a * n_as;

    // Two-body scattering density (I, eq. 18). The raw substitutional
    // densities enter here, not the clustered N_D/N_A of the paper; this is
    // the Sentaurus convention and the implemented one.
    let n_e_sc = n_ds + n_as + p;
    let n_h_sc = n_ds + n_as + n;

    // Screening function P(N, c): fixed-weight blend of the
    // Conwell-Weisskopf and Brooks-Herring regimes (I, eq. 16, A3, 8)
    let p_cw_e = 3.97e17 * ((t / 300.0).powi(3) / (z_d.powi(3) * n_e_sc)).powf(2.0 / 3.0);
    let p_cw_h = 3.97e17 * ((t / 300.0).powi(3) / (z_a.powi(3) * n_h_sc)).powf(2.0 / 3.0);
    let p_bh_e = (1.36e26 / c) * M_E_NORM * (t / 300.0).powi(2);
    let p_bh_h = (1.36e26 / c) * M_H_NORM * (t / 300.0).powi(2);
    let p_e = 1.0 / (F_CW / p_cw_e + F_BH / p_bh_e);
    let p_h = 1.0 / (F_CW / p_cw_h + F_BH / p_bh_h);

    // Electron-hole scattering F(P) (I, eq. 12)
    let f_p_e = (R1 * p_e.powf(R6) + R2 + R3 / M_H_NORM) / (p_e.powf(R6) + R4 + R5 / M_H_NORM);
    let f_p_h = (R1 * p_h.powf(R6) + R2 + R3 * M_H_NORM) / (p_h.powf(R6) + R4 + R5 * M_H_NORM);

    // Minority-impurity scattering G(P) (I, eq. 9), with the quartic
    // extrapolation below P_min where the closed form diverges
    let x_e = t / (300.0 * M_E_NORM);
    let x_h = t / (300.0 * M_H_NORM);
    let p_min_e = quartic(&Q_FIT, x_e);
    let p_min_h = quartic(&Q_FIT, x_h);
    let g_p_e = if p_e < p_min_e {
        quartic(&K_FIT, x_e)
    } else {
        1.0 - S1 / (S2 + x_e.powf(S4) * p_e).powf(S3) + S5 / (p_e / x_e.powf(S7)).powf(S6)
    };
    let g_p_h = if p_h < p_min_h {
        quartic(&K_FIT, x_h)
    } else {
        1.0 - S1 / (S2 + x_h.powf(S4) * p_h).powf(S3) + S5 / (p_h / x_h.powf(S7)).powf(S6)
    };

    // Effective two-body scattering density (I, eq. 21)
    let n_e_sc_eff = n_d + g_p_e * n_a + p / f_p_e;
    let n_h_sc_eff = n_a + g_p_h * n_d + n / f_p_h;

    // Majority impurity scattering including screening (II, eq. 2a/2b)
    let mu_as_n =
        MU_MAX_AS_300K.powi(2) * (t / 300.0).powf(3.0 * ALPHA_1_AS - 1.5) / (MU_MAX_AS_300K - MU_MIN_AS_300K);
    let mu_p_n =
        MU_MAX_P_300K.powi(2) * (t / 300.0).powf(3.0 * ALPHA_1_P - 1.5) / (MU_MAX_P_300K - MU_MIN_P_300K);
    let mu_b_n =
        MU_MAX_B_300K.powi(2) * (t / 300.0).powf(3.0 * ALPHA_1_B - 1.5) / (MU_MAX_B_300K - MU_MIN_B_300K);
    let mu_as_c = MU_MAX_AS_300K * MU_MIN_AS_300K * (t / 300.0).sqrt() / (MU_MAX_AS_300K - MU_MIN_AS_300K);
    let mu_p_c = MU_MAX_P_300K * MU_MIN_P_300K * (t / 300.0).sqrt() / (MU_MAX_P_300K - MU_MIN_P_300K);
    let mu_b_c = MU_MAX_B_300K * MU_MIN_B_300K * (t / 300.0).sqrt() / (MU_MAX_B_300K - MU_MIN_B_300K);

    // Combined non-lattice mobility (I, eq. 20)
    let mu_as = mu_as_n * (n_e_sc / n_e_sc_eff) * (N_REF_1_AS / n_e_sc).powf(ALPHA_1_AS)
        + mu_as_c * (c / n_e_sc_eff);
    let mu_p = mu_p_n * (n_e_sc / n_e_sc_eff) * (N_REF_1_P / n_e_sc).powf(ALPHA_1_P)
        + mu_p_c * (c / n_e_sc_eff);
    let mu_b = mu_b_n * (n_h_sc / n_h_sc_eff) * (N_REF_1_B / n_h_sc).powf(ALPHA_1_B)
        + mu_b_c * (c / n_h_sc_eff);

    (mu_as, mu_p, mu_b)
}

/// Total majority bulk mobility at `t` [K] for dopings `n_d`/`n_a` [cm^-3].
///
/// Matthiessen combination of the lattice term and the unified
/// impurity/carrier scattering term.
pub fn bulk_mobility(t: f64, n_d: f64, n_a: f64) -> Result<BulkMobility, DomainError> {
    check_temperature(t)?;

    let carriers = doped_concentrations(t, n_d, n_a)?;
    let c = carriers.n + carriers.p;

    let (mu_as_l, mu_p_l, mu_b_l) = lattice(t);
    let (mu_as_i, mu_p_i, mu_b_i) =
        impurity_limited(t, n_d * 1.0e6, n_a * 1.0e6, carriers.n, carriers.p, c);

    Ok(BulkMobility {
        arsenic: 1.0 / (1.0 / mu_as_l + 1.0 / mu_as_i),
        phosphorus: 1.0 / (1.0 / mu_p_l + 1.0 / mu_p_i),
        boron: 1.0 / (1.0 / mu_b_l + 1.0 / mu_b_i),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_doping_approaches_lattice_value() {
        let mu = bulk_mobility(300.0, 1.0e12, 1.0).unwrap();
        assert!((mu.phosphorus - MU_MAX_P_300K).abs() / MU_MAX_P_300K < 0.1, "{:?}", mu);
    }

    #[test]
    fn mobility_decreases_with_doping() {
        let low = bulk_mobility(300.0, 1.0e15, 1.0).unwrap();
        let high = bulk_mobility(300.0, 1.0e18, 1.0).unwrap();
        assert!(high.phosphorus < low.phosphorus);
        assert!(high.arsenic < low.arsenic);
    }

    #[test]
    fn mobility_decreases_with_temperature() {
        let cold = bulk_mobility(300.0, 1.0e15, 1.0).unwrap();
        let hot = bulk_mobility(400.0, 1.0e15, 1.0).unwrap();
        assert!(hot.phosphorus < cold.phosphorus);
    }
}
