use argmin::{argmin_error_closure, core::*};

/// Plain fixed-point iteration `x ← f(x)` driven by argmin's executor.
/// Converges once two successive parameters differ by at most `tolerance`;
/// the iteration cap is the executor's `max_iters`.
#[derive(Clone, Copy)]
pub struct FixedPointIteration<F> {
    tolerance: F,
}

impl<F: ArgminFloat> FixedPointIteration<F> {
    pub fn new(tolerance: F) -> Self {
        Self { tolerance }
    }
}

/// Absolute difference between the current and the previous parameter
pub fn last_step<F: ArgminFloat>(state: &IterState<F, (), (), (), (), F>) -> Option<F> {
    match (state.get_param(), state.get_prev_param()) {
        (Some(current), Some(prev)) => Some((*current - *prev).abs()),
        _ => None,
    }
}

impl<O, F> Solver<O, IterState<F, (), (), (), (), F>> for FixedPointIteration<F>
where
    O: Operator<Param = F, Output = F>,
    F: ArgminFloat,
{
    const NAME: &'static str = "Fixed point iteration";

    fn next_iter(
        &mut self,
        problem: &mut Problem<O>,
        state: IterState<F, (), (), (), (), F>,
    ) -> Result<(IterState<F, (), (), (), (), F>, Option<KV>), Error> {
        let param = *state.get_param().ok_or_else(argmin_error_closure!(
            NotInitialized,
            concat!(
                "`FixedPointIteration` requires an initial parameter. ",
                "Please provide an initial guess via `Executor`s `configure` method."
            )
        ))?;
        let next = problem.apply(&param)?;
        Ok((state.param(next), None))
    }

    fn terminate(&mut self, state: &IterState<F, (), (), (), (), F>) -> TerminationStatus {
        match last_step(state) {
            Some(step) if step.is_nan() => TerminationStatus::Terminated(
                TerminationReason::SolverExit("parameter is NaN".into()),
            ),
            Some(step) if step <= self.tolerance => {
                TerminationStatus::Terminated(TerminationReason::SolverConverged)
            }
            _ => TerminationStatus::NotTerminated,
        }
    }
}
