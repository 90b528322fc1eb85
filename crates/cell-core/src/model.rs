//! Two-diode model solver
//!
//! Equivalent circuit: photocurrent source, two parallel diode branches
//! with ideality factors 1 and 2, a shunt resistance R_p and a series
//! resistance R_s. The unconstrained current density at junction voltage U
//! is
//!
//! ```text
//! j(U) = J_ph + J_s1*(exp(U/V_T) - 1) + J_s2*(exp(U/2V_T) - 1) + U/R_p
//! ```
//!
//! Outside the window [U_MIN, U_MAX] the curve is extrapolated linearly to
//! keep the exponentials from overflowing at extreme bias. The series
//! resistance couples terminal voltage and current implicitly,
//! `J = j_bounded(U - J*R_s)`; [`TwoDiodeModel::current_density`] inverts
//! that relation with a Newton iteration on the resistive voltage drop.
//!
//! A constructed model is an immutable configuration snapshot: every query
//! is a pure function, so clones can run on parallel sweeps without shared
//! state.

use crate::cell::{CellParameters, EffectFlags};
use crate::effects::{effective_saturation_currents, SaturationCurrents, ScalingLaw, ThermalState};
use crate::error::{ConfigError, SolveError};
use crate::roots::{newton_root, secant_root, RootConfig};

/// Lower edge of the exponential evaluation window [V]
pub const U_MIN: f64 = -0.5;
/// Upper edge of the exponential evaluation window [V]
pub const U_MAX: f64 = 1.5;

/// Relative convergence tolerance of the series-resistance iteration
const ACCURACY: f64 = 1.0e-9;
/// Iteration cap for the series-resistance Newton solve
const MAX_SERIES_ITERS: usize = 100;

/// Newton seed for the open-circuit voltage [V]
const U_OC_SEED: f64 = 0.62;
/// Secant seed for the maximum-power-point search [V]
const MPP_SEED: f64 = 0.5;

/// Maximum-power-point result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxPowerPoint {
    /// MPP voltage [V]
    pub voltage: f64,
    /// MPP current density [A/m^2]
    pub current: f64,
    /// MPP power density [W/m^2]
    pub power: f64,
}

/// Solar-cell figures of merit, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellCharacteristics {
    /// Open-circuit voltage [V]
    pub u_oc: f64,
    /// Short-circuit current density [A/m^2]
    pub j_sc: f64,
    /// Maximum-power-point voltage [V]
    pub u_mpp: f64,
    /// Maximum-power-point current density [A/m^2]
    pub j_mpp: f64,
    /// Maximum power density [W/m^2]
    pub s_mpp: f64,
    /// Fill factor [%]
    pub fill_factor: f64,
    /// Conversion efficiency relative to 1000 W/m^2 irradiance; only
    /// meaningful at standard test conditions, which the solver does not
    /// verify
    pub efficiency: f64,
}

/// Immutable two-diode solver over one configuration snapshot.
#[derive(Debug, Clone, Copy)]
pub struct TwoDiodeModel {
    params: CellParameters,
    law: ScalingLaw,
    state: ThermalState,
    currents: SaturationCurrents,
}

impl TwoDiodeModel {
    /// Validate the parameters, resolve the scaling law and derive the
    /// effective saturation currents at `t_sim`.
    pub fn new(params: CellParameters, flags: EffectFlags) -> Result<Self, ConfigError> {
        params.validate()?;
        let law = ScalingLaw::select(&flags, params.t_ini, params.t_sim)?;
        let state = ThermalState::derive(&params, &flags)?;
        let currents = effective_saturation_currents(&params, law, &state);
        Ok(Self {
            params,
            law,
            state,
            currents,
        })
    }

    /// The scaling law this configuration resolved to.
    pub fn scaling_law(&self) -> ScalingLaw {
        self.law
    }

    /// Derived thermal state of this configuration.
    pub fn thermal_state(&self) -> &ThermalState {
        &self.state
    }

    /// Effective saturation currents at `t_sim`.
    pub fn saturation_currents(&self) -> SaturationCurrents {
        self.currents
    }

    /// Unconstrained diode equation at junction voltage `u`.
    fn j_unbounded(&self, u: f64) -> f64 {
        let v_t = self.state.u_te_sim;
        self.params.j_ph
            + self.currents.j_s1 * ((u / v_t).exp() - 1.0)
            + self.currents.j_s2 * ((u / (2.0 * v_t)).exp() - 1.0)
            + u / self.params.r_p
    }

    fn dj_unbounded(&self, u: f64) -> f64 {
        let v_t = self.state.u_te_sim;
        self.currents.j_s1 / v_t * (u / v_t).exp()
            + self.currents.j_s2 / (2.0 * v_t) * (u / (2.0 * v_t)).exp()
            + 1.0 / self.params.r_p
    }

    /// Diode equation with linear extrapolation outside [U_MIN, U_MAX].
    fn j_bounded(&self, u: f64) -> f64 {
        if u < U_MIN {
            self.j_unbounded(U_MIN) + self.dj_unbounded(U_MIN) * (u - U_MIN)
        } else if u > U_MAX {
            self.j_unbounded(U_MAX) + self.dj_unbounded(U_MAX) * (u - U_MAX)
        } else {
            self.j_unbounded(u)
        }
    }

    fn dj_bounded(&self, u: f64) -> f64 {
        if u < U_MIN {
            self.dj_unbounded(U_MIN)
        } else if u > U_MAX {
            self.dj_unbounded(U_MAX)
        } else {
            self.dj_unbounded(u)
        }
    }

    /// Current density [A/m^2] at terminal voltage `u` [V].
    ///
    /// With R_s = 0 the junction sees the terminal voltage directly. With
    /// R_s > 0 the current solves `J = j_bounded(U - J*R_s)`; the Newton
    /// iteration runs on the resistive drop `U_Rs` seeded with the
    /// series-resistance-free estimate, to relative tolerance 1e-9.
    pub fn current_density(&self, u: f64) -> Result<f64, SolveError> {
        let r_s = self.params.r_s;
        if r_s == 0.0 {
            return Ok(self.j_bounded(u));
        }

        let mut u_r_s = self.j_bounded(u) * r_s;
        let mut j = u_r_s / r_s;
        let mut ji = self.j_bounded(u - u_r_s) - j;
        let mut iters = 0;
        while (ji / j).abs() > ACCURACY {
            if iters >= MAX_SERIES_ITERS {
                return Err(SolveError::Convergence {
                    context: "series-resistance coupling",
                    max_iters: MAX_SERIES_ITERS,
                    residual: (ji / j).abs(),
                });
            }
            let deriv = -self.dj_bounded(u - u_r_s) - 1.0 / r_s;
            u_r_s -= ji / deriv;
            j = u_r_s / r_s;
            ji = self.j_bounded(u - u_r_s) - j;
            iters += 1;
        }
        Ok(j)
    }

    /// Closed-form derivative dJ/dU of the resistance-coupled curve.
    ///
    /// Obtained by implicit differentiation; the exponential terms are
    /// evaluated at the junction voltage `u - J*R_s`.
    pub fn slope(&self, u: f64) -> Result<f64, SolveError> {
        let j = self.current_density(u)?;
        let v_t = self.state.u_te_sim;
        let u_j = u - j * self.params.r_s;
        let g1 = self.currents.j_s1 / v_t * (u_j / v_t).exp();
        let g2 = 0.5 * self.currents.j_s2 / v_t * (u_j / (2.0 * v_t)).exp();
        let r_s = self.params.r_s;
        let r_p = self.params.r_p;
        Ok((g1 + g2 + 1.0 / r_p) / (1.0 + r_s / r_p + r_s * g1 + r_s * g2))
    }

    /// Power density [W/m^2] at terminal voltage `u`.
    pub fn power(&self, u: f64) -> Result<f64, SolveError> {
        Ok(u * self.current_density(u)?)
    }

    /// dP/dU = J + U * dJ/dU.
    pub fn power_slope(&self, u: f64) -> Result<f64, SolveError> {
        Ok(self.current_density(u)? + u * self.slope(u)?)
    }

    /// Open-circuit voltage [V]: the root of J(U) = 0.
    pub fn open_circuit_voltage(&self) -> Result<f64, SolveError> {
        newton_root(
            |u| self.current_density(u),
            |u| self.slope(u),
            U_OC_SEED,
            &RootConfig::default(),
            "open-circuit voltage",
        )
    }

    /// Short-circuit current density [A/m^2]: J at zero bias.
    pub fn short_circuit_current(&self) -> Result<f64, SolveError> {
        self.current_density(0.0)
    }

    /// Maximum power point: the root of dP/dU.
    pub fn max_power_point(&self) -> Result<MaxPowerPoint, SolveError> {
        let voltage = secant_root(
            |u| self.power_slope(u),
            MPP_SEED,
            &RootConfig::default(),
            "maximum power point",
        )?;
        let current = self.current_density(voltage)?;
        Ok(MaxPowerPoint {
            voltage,
            current,
            power: voltage * current,
        })
    }

    /// All figures of merit in one solve.
    pub fn characteristics(&self) -> Result<CellCharacteristics, SolveError> {
        let u_oc = self.open_circuit_voltage()?;
        let j_sc = self.short_circuit_current()?;
        let mpp = self.max_power_point()?;
        Ok(CellCharacteristics {
            u_oc,
            j_sc,
            u_mpp: mpp.voltage,
            j_mpp: mpp.current,
            s_mpp: mpp.power,
            fill_factor: mpp.power / (u_oc * j_sc) * 100.0,
            // 1000 W/m^2 STC irradiance
            efficiency: mpp.voltage * mpp.current / 1000.0,
        })
    }

    /// Current densities for a sequence of terminal voltages.
    ///
    /// Lazy: one solve per yielded point, no cross-point state, input
    /// order preserved. An empty input yields an empty iterator.
    pub fn iv_curve<'a, I>(&'a self, voltages: I) -> impl Iterator<Item = Result<f64, SolveError>> + 'a
    where
        I: IntoIterator<Item = f64>,
        I::IntoIter: 'a,
    {
        voltages.into_iter().map(move |u| self.current_density(u))
    }

    /// Power densities for a sequence of terminal voltages; same contract
    /// as [`iv_curve`](Self::iv_curve).
    pub fn pv_curve<'a, I>(&'a self, voltages: I) -> impl Iterator<Item = Result<f64, SolveError>> + 'a
    where
        I: IntoIterator<Item = f64>,
        I::IntoIter: 'a,
    {
        voltages.into_iter().map(move |u| self.power(u))
    }
}

/// Print a one-line summary of a characteristics solve.
pub fn debug_dump_characteristics(ch: &CellCharacteristics) {
    println!(
        "characteristics: u_oc={:.4} j_sc={:.2} u_mpp={:.4} j_mpp={:.2} s_mpp={:.2} ff={:.1}% eta={:.4}",
        ch.u_oc, ch.j_sc, ch.u_mpp, ch.j_mpp, ch.s_mpp, ch.fill_factor, ch.efficiency
    );
}
