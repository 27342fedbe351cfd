//! Nonlinear least-squares fit of the launch velocity.
//!
//! Given:
//! - release heights `h_i`
//! - central distances `d_i`
//!
//! we minimize `Σ (d_i - v · t(h_i))²` over the single parameter `v` with a
//! Levenberg–Marquardt iteration. Each damped step is solved as a tall linear
//! least-squares system (see `math::ols`).
//!
//! The iteration is deterministic: fixed starting point, fixed damping schedule.

use nalgebra::{DMatrix, DVector};
use tracing::debug;

use crate::domain::FitResult;
use crate::error::{PipelineError, Result};
use crate::math::solve_least_squares;
use crate::models::flight_time;
use crate::models::kinematics::distance_for_flight_time;

/// Solver settings.
#[derive(Debug, Clone)]
pub struct FitOptions {
    /// Starting guess for the velocity (m/s).
    pub initial_velocity: f64,
    pub max_iterations: usize,
    /// Relative step tolerance.
    pub xtol: f64,
    /// Relative SSE reduction tolerance.
    pub ftol: f64,
    /// Initial Marquardt damping factor.
    pub initial_damping: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            initial_velocity: 1.0,
            max_iterations: 200,
            xtol: 1.49012e-8,
            ftol: 1.49012e-8,
            initial_damping: 1e-3,
        }
    }
}

const MAX_DAMPING: f64 = 1e16;
const MIN_DAMPING: f64 = 1e-15;

/// Fit the launch velocity to `(height, distance)` pairs.
pub fn fit_velocity(heights: &[f64], distances: &[f64], opts: &FitOptions) -> Result<FitResult> {
    if heights.len() != distances.len() {
        return Err(PipelineError::invalid(format!(
            "{} heights but {} distances",
            heights.len(),
            distances.len()
        )));
    }
    if let Some(bad) = distances.iter().find(|d| !d.is_finite()) {
        return Err(PipelineError::invalid(format!("non-finite distance {bad}")));
    }

    // Jacobian column ∂d/∂v; also validates every height.
    let jac = heights
        .iter()
        .map(|&h| flight_time(h))
        .collect::<Result<Vec<f64>>>()?;

    let n = jac.len();
    if n < 2 {
        return Err(PipelineError::no_convergence(format!(
            "need at least 2 conditions to fit, got {n}"
        )));
    }
    let h_min = heights.iter().copied().fold(f64::INFINITY, f64::min);
    let h_max = heights.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if h_max - h_min <= 0.0 {
        return Err(PipelineError::no_convergence(format!(
            "all release heights are equal ({h_min}); the fit is degenerate"
        )));
    }

    let jtj: f64 = jac.iter().map(|t| t * t).sum();
    if !(jtj.is_finite() && jtj > 0.0) {
        return Err(PipelineError::no_convergence("singular normal matrix"));
    }

    let sse_at = |v: f64| sum_squared_residuals(&jac, distances, v);

    let mut v = opts.initial_velocity;
    let mut sse = sse_at(v);
    let mut damping = opts.initial_damping;
    let mut iterations = 0;
    let mut converged = sse == 0.0;

    while !converged && iterations < opts.max_iterations {
        iterations += 1;

        // [J; √(λ·JᵀJ)] δ = [r; 0]  (Marquardt diagonal scaling)
        let mut a = DMatrix::<f64>::zeros(n + 1, 1);
        let mut b = DVector::<f64>::zeros(n + 1);
        for i in 0..n {
            a[(i, 0)] = jac[i];
            b[i] = residual(jac[i], distances[i], v);
        }
        a[(n, 0)] = (damping * jtj).sqrt();

        let delta = solve_least_squares(&a, &b)
            .map(|step| step[0])
            .ok_or_else(|| PipelineError::no_convergence("damped step could not be solved"))?;

        let candidate = v + delta;
        let candidate_sse = sse_at(candidate);
        if !(candidate.is_finite() && candidate_sse.is_finite()) {
            return Err(PipelineError::no_convergence(format!(
                "non-finite estimate after {iterations} iterations"
            )));
        }

        let small_step = delta.abs() <= opts.xtol * (candidate.abs() + opts.xtol);
        if candidate_sse <= sse {
            let reduction = sse - candidate_sse;
            let small_reduction = reduction <= opts.ftol * sse;
            v = candidate;
            sse = candidate_sse;
            damping = (damping / 10.0).max(MIN_DAMPING);
            converged = small_step || small_reduction || sse == 0.0;
        } else {
            // A rejected step that is already below tolerance means we are at
            // the minimum to working precision.
            converged = small_step;
            damping *= 10.0;
            if damping > MAX_DAMPING {
                break;
            }
        }
    }

    if !converged {
        return Err(PipelineError::no_convergence(format!(
            "no convergence after {iterations} iterations (v = {v}, sse = {sse})"
        )));
    }

    let covariance = sse / (n - 1) as f64 / jtj;
    if !(v.is_finite() && covariance.is_finite()) {
        return Err(PipelineError::no_convergence("non-finite estimate"));
    }

    debug!(velocity = v, sse, covariance, iterations, "velocity fit converged");

    Ok(FitResult {
        velocity: v,
        covariance,
        sse,
        iterations,
    })
}

/// Observed minus predicted distance for one condition.
fn residual(flight_time: f64, distance: f64, velocity: f64) -> f64 {
    distance - distance_for_flight_time(flight_time, velocity)
}

fn sum_squared_residuals(flight_times: &[f64], distances: &[f64], velocity: f64) -> f64 {
    flight_times
        .iter()
        .zip(distances)
        .map(|(&t, &d)| residual(t, d, velocity).powi(2))
        .sum()
}
