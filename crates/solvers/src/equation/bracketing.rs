use solvekit_core::{Config, IterationRecord, Observer, ScalarFunction, Solution, Status};

use crate::finish::finish;

use super::{
    Action, Error,
    bracket::{Bracket, Start},
    evaluate,
};

/// How a bracketing method picks the next point inside the bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Rule {
    /// Bisection: split at the midpoint.
    Midpoint,

    /// Regula falsi: split where the secant through the endpoints crosses zero.
    FalsePosition,
}

impl Rule {
    fn name(self) -> &'static str {
        match self {
            Self::Midpoint => "bisection",
            Self::FalsePosition => "regula falsi",
        }
    }

    fn next_point(self, bracket: &Bracket) -> f64 {
        match self {
            Self::Midpoint => bracket.midpoint(),
            Self::FalsePosition => bracket.secant_point(),
        }
    }

    /// The approximation reported after splitting at `split`.
    fn estimate(self, bracket: &Bracket, split: f64) -> f64 {
        match self {
            Self::Midpoint => bracket.midpoint(),
            Self::FalsePosition => split,
        }
    }
}

/// Shared loop for bisection and regula falsi.
///
/// Iterates while the half-width exceeds the tolerance and the budget allows.
/// The half-width is the error metric for both rules.
pub(super) fn solve<F, Obs>(
    rule: Rule,
    f: &F,
    interval: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<f64>, Error>
where
    F: ScalarFunction,
    Obs: Observer<IterationRecord<f64>, Action>,
{
    let method = rule.name();

    let mut bracket = match Bracket::establish(f, interval)? {
        Start::Root(x) => return Ok(finish(method, exact(x, 0))),
        Start::Bracket(bracket) => bracket,
    };
    let mut best = rule.next_point(&bracket);

    for iter in 1..=config.max_iters() {
        if config.is_within(bracket.half_width()) {
            return Ok(finish(method, settle(Status::Converged, best, &bracket, iter - 1)));
        }

        let split = rule.next_point(&bracket);
        let f_split = evaluate::value(f, split)?;

        if f_split == 0.0 {
            let _ = observer.observe(&IterationRecord::new(iter, split, 0.0));
            return Ok(finish(method, exact(split, iter)));
        }

        bracket.shrink(split, f_split);
        best = rule.estimate(&bracket, split);

        let record = IterationRecord::new(iter, best, bracket.half_width());
        if let Some(Action::StopEarly) = observer.observe(&record) {
            return Ok(finish(
                method,
                settle(Status::StoppedByObserver, best, &bracket, iter),
            ));
        }
    }

    let status = if config.is_within(bracket.half_width()) {
        Status::Converged
    } else {
        Status::MaxIters
    };
    Ok(finish(method, settle(status, best, &bracket, config.max_iters())))
}

fn exact(x: f64, iters: usize) -> Solution<f64> {
    Solution {
        status: Status::Converged,
        x,
        error: 0.0,
        iters,
    }
}

fn settle(status: Status, x: f64, bracket: &Bracket, iters: usize) -> Solution<f64> {
    Solution {
        status,
        x,
        error: bracket.half_width(),
        iters,
    }
}
