use solvekit_core::{Solution, Status};

/// Logs how a solver terminated and hands the solution back.
pub(crate) fn finish<X>(method: &'static str, solution: Solution<X>) -> Solution<X> {
    match solution.status {
        Status::Converged => log::debug!(
            "{method}: converged after {} iterations (error {:e})",
            solution.iters,
            solution.error
        ),
        Status::MaxIters => log::warn!(
            "{method}: hit the iteration limit ({}) with error {:e}",
            solution.iters,
            solution.error
        ),
        Status::StoppedByObserver => log::debug!(
            "{method}: stopped by observer after {} iterations (error {:e})",
            solution.iters,
            solution.error
        ),
    }
    solution
}
