use argmin::core::{ArgminFloat, Executor, State, TerminationReason};

use crate::{
    error::GearError,
    misc::{from_count, to_f64_lossy, FloatingPoint},
};

use super::{
    last_step, AddendumFactorProblem, AddendumFactorSolverOptions, FixedPointIteration,
};

/// Solve the addendum factor of a cycloidal wheel driving a pinion.
///
/// The contact angle is iterated from zero until two successive values differ
/// by at most the tolerance (1e-6 by default), then turned into the factor
/// `0.25·np·(1 − k + √(1 + k² − 2k·cos t))` with `k = 1 + 2·nw/np`.
///
/// # Failures
/// - if a tooth count is zero
/// - if the iteration hits `max_iters` (10 000 by default) without converging
///
/// # Example
/// ```
/// use cycloid::prelude::*;
/// use approx::assert_relative_eq;
///
/// let factor = solve_addendum_factor::<f64>(17, 112, None).unwrap();
/// assert_relative_eq!(factor, 2.0419809666, epsilon = 1e-9);
/// ```
pub fn solve_addendum_factor<T>(
    pinion_teeth: usize,
    wheel_teeth: usize,
    options: Option<AddendumFactorSolverOptions<T>>,
) -> anyhow::Result<T>
where
    T: FloatingPoint + ArgminFloat,
{
    anyhow::ensure!(
        pinion_teeth >= 1 && wheel_teeth >= 1,
        GearError::InvalidGearSpec(format!(
            "tooth counts must be at least 1, got pinion {} and wheel {}",
            pinion_teeth, wheel_teeth
        ))
    );
    let options = options.unwrap_or_default();

    let problem =
        AddendumFactorProblem::<T>::new(from_count(pinion_teeth), from_count(wheel_teeth));
    let solver = FixedPointIteration::new(options.tolerance());
    let res = Executor::new(problem, solver)
        .configure(|state| state.param(T::zero()).max_iters(options.max_iters()))
        .run()?;

    let state = res.state();
    let t = state.get_param().copied();
    let converged = matches!(
        state.get_termination_reason(),
        Some(TerminationReason::SolverConverged)
    );

    match t {
        Some(t) if converged => {
            let factor = problem.addendum_factor(t);
            #[cfg(feature = "log")]
            log::debug!(
                "addendum factor for {}/{} teeth converged after {} iterations: t = {}, factor = {}",
                pinion_teeth,
                wheel_teeth,
                state.get_iter(),
                t,
                factor
            );
            Ok(factor)
        }
        _ => {
            let delta = last_step(state).map(to_f64_lossy).unwrap_or(f64::NAN);
            #[cfg(feature = "log")]
            log::warn!(
                "addendum factor for {}/{} teeth stopped after {} iterations with step {:e}",
                pinion_teeth,
                wheel_teeth,
                state.get_iter(),
                delta
            );
            anyhow::bail!(GearError::NumericConvergence {
                iterations: state.get_iter(),
                delta,
            })
        }
    }
}
