use nalgebra::{DMatrix, DVector};
use solvekit_core::{Config, IterationRecord, Observer, Solution, Status};

use crate::finish::finish;

use super::{Action, Error, LinearSystem};

/// One sweep of a stationary method: maps `x` to the next iterate.
pub(super) type Sweep = fn(&DMatrix<f64>, &DVector<f64>, &DVector<f64>) -> DVector<f64>;

/// Shared driver for Jacobi and Gauss-Seidel.
///
/// Starts from the system's initial guess (zeros by default), applies `sweep`
/// until `‖x_new - x‖∞` is within the tolerance, and returns the last iterate.
pub(super) fn solve<Obs>(
    method: &'static str,
    sweep: Sweep,
    system: &LinearSystem,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<DVector<f64>>, Error>
where
    Obs: Observer<IterationRecord<DVector<f64>>, Action>,
{
    let matrix = system.matrix();
    let rhs = system.rhs();

    if let Some(row) = (0..system.size()).find(|&i| matrix[(i, i)] == 0.0) {
        return Err(Error::ZeroPivot { row });
    }

    if !system.is_diagonally_dominant() {
        log::debug!("{method}: matrix is not diagonally dominant, convergence is not guaranteed");
    }

    let mut x = system.initial_guess();
    let mut error = f64::INFINITY;

    for iter in 1..=config.max_iters() {
        let next = sweep(matrix, rhs, &x);
        error = (&next - &x).amax();
        x = next;

        let record = IterationRecord::new(iter, x.clone(), error);
        if let Some(Action::StopEarly) = observer.observe(&record) {
            return Ok(finish(method, solution(Status::StoppedByObserver, x, error, iter)));
        }

        if config.is_within(error) {
            return Ok(finish(method, solution(Status::Converged, x, error, iter)));
        }
    }

    Ok(finish(
        method,
        solution(Status::MaxIters, x, error, config.max_iters()),
    ))
}

fn solution(status: Status, x: DVector<f64>, error: f64, iters: usize) -> Solution<DVector<f64>> {
    Solution {
        status,
        x,
        error,
        iters,
    }
}
