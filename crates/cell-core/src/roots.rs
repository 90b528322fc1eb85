//! Scalar root finders
//!
//! Newton and secant iterations over fallible scalar functions (the diode
//! curve itself can fail to converge in its inner series-resistance
//! solve, so the callbacks return `Result`). Both finders carry a hard
//! iteration budget; exhausting it is a reported [`SolveError`], never an
//! endless loop or a stale value.

use crate::error::SolveError;

/// Iteration budget and tolerance for a root solve.
#[derive(Debug, Clone)]
pub struct RootConfig {
    pub max_iters: usize,
    /// Relative step tolerance: converged when |dx| <= rel_tol * max(|x|, 1)
    pub rel_tol: f64,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            rel_tol: 1.0e-9,
        }
    }
}

/// Derivative-aware Newton iteration from `x0`.
pub fn newton_root<F, D>(
    mut f: F,
    mut df: D,
    x0: f64,
    config: &RootConfig,
    context: &'static str,
) -> Result<f64, SolveError>
where
    F: FnMut(f64) -> Result<f64, SolveError>,
    D: FnMut(f64) -> Result<f64, SolveError>,
{
    let mut x = x0;
    let mut residual = f64::MAX;
    for _ in 0..config.max_iters {
        let fx = f(x)?;
        let dfx = df(x)?;
        if dfx == 0.0 {
            return Err(SolveError::ZeroDerivative { context, x });
        }
        let dx = fx / dfx;
        x -= dx;
        residual = dx.abs();
        if residual <= config.rel_tol * x.abs().max(1.0) {
            return Ok(x);
        }
    }
    Err(SolveError::Convergence {
        context,
        max_iters: config.max_iters,
        residual,
    })
}

/// Secant iteration seeded at `x0` (second point offset by one part in 1e4).
///
/// Used where no closed-form derivative is available.
pub fn secant_root<F>(
    mut f: F,
    x0: f64,
    config: &RootConfig,
    context: &'static str,
) -> Result<f64, SolveError>
where
    F: FnMut(f64) -> Result<f64, SolveError>,
{
    let mut x_prev = x0;
    let mut x = x0 + 1.0e-4 * x0.abs().max(1.0e-4);
    let mut f_prev = f(x_prev)?;
    let mut residual = f64::MAX;
    for _ in 0..config.max_iters {
        let fx = f(x)?;
        let denom = fx - f_prev;
        if denom == 0.0 {
            if fx == 0.0 {
                return Ok(x);
            }
            return Err(SolveError::ZeroDerivative { context, x });
        }
        let x_next = x - fx * (x - x_prev) / denom;
        residual = (x_next - x).abs();
        x_prev = x;
        f_prev = fx;
        x = x_next;
        if residual <= config.rel_tol * x.abs().max(1.0) {
            return Ok(x);
        }
    }
    Err(SolveError::Convergence {
        context,
        max_iters: config.max_iters,
        residual,
    })
}
