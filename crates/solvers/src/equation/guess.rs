//! Heuristics for choosing a bracket or starting point.
//!
//! These helpers only sample `f` on a fixed grid. They can miss roots that
//! lie outside the grid, pairs of roots closer together than the grid step,
//! and roots where `f` touches zero without changing sign. A `None` (or the
//! fallback `0.0`) means nothing was found on the grid, not that `f` has no
//! root.
//!
//! Sample points where `f` fails or is not finite are skipped.

use solvekit_core::ScalarFunction;

/// Lower end of the default scan grid.
pub const SCAN_START: f64 = -10.0;

/// Upper end of the default scan grid.
pub const SCAN_END: f64 = 10.0;

/// Spacing of the default scan grid.
pub const SCAN_STEP: f64 = 0.1;

/// Coarse sample points used by [`newton_start`].
pub const NEWTON_SAMPLES: [f64; 5] = [-10.0, -5.0, 0.0, 5.0, 10.0];

/// Walks the grid `start, start + step, ..., end` and returns the first
/// adjacent pair `[a, a + step]` across which `f` changes sign.
///
/// A grid point where `f` is exactly zero is returned as the left end of its
/// pair; the bracketing solvers accept it as an endpoint root.
///
/// Returns `None` if `step` is not positive and finite, the range is empty or
/// non-finite, or no sign change is found.
pub fn scan_bracket<F: ScalarFunction>(f: &F, start: f64, end: f64, step: f64) -> Option<[f64; 2]> {
    if !(step > 0.0 && step.is_finite() && start.is_finite() && end.is_finite()) || end < start {
        return None;
    }

    // Grid points come from the index so the step does not accumulate error.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let intervals = ((end - start) / step + 1e-9).floor() as usize;
    #[allow(clippy::cast_precision_loss)]
    let point = |i: usize| start + step * i as f64;

    let mut left = sample(f, point(0));
    for i in 1..=intervals {
        let x = point(i);
        let right = sample(f, x);

        if let (Some((a, fa)), Some((b, fb))) = (left, right)
            && (fa == 0.0 || (fb != 0.0 && (fa < 0.0) != (fb < 0.0)))
        {
            return Some([a, b]);
        }

        left = right;
    }
    None
}

/// Scans the default grid `-10..=10` with step `0.1`.
///
/// The result can seed either a bracketing solver or the secant method.
pub fn find_bracket<F: ScalarFunction>(f: &F) -> Option<[f64; 2]> {
    scan_bracket(f, SCAN_START, SCAN_END, SCAN_STEP)
}

/// Picks two starting points for the secant method.
///
/// Uses the first sign change on the default grid, so the pair is close to a
/// root when one exists there.
pub fn secant_pair<F: ScalarFunction>(f: &F) -> Option<[f64; 2]> {
    find_bracket(f)
}

/// Picks a starting point for Newton-Raphson.
///
/// Evaluates `f` at [`NEWTON_SAMPLES`] and returns the midpoint of the first
/// neighbouring pair with a strict sign change, or `0.0` if there is none.
/// This is only a heuristic: a start inside a sign change can still diverge,
/// and `0.0` is not informed by `f` at all.
pub fn newton_start<F: ScalarFunction>(f: &F) -> f64 {
    NEWTON_SAMPLES
        .windows(2)
        .find_map(|pair| {
            let (_, fa) = sample(f, pair[0])?;
            let (_, fb) = sample(f, pair[1])?;
            (fa * fb < 0.0).then(|| 0.5 * (pair[0] + pair[1]))
        })
        .unwrap_or(0.0)
}

fn sample<F: ScalarFunction>(f: &F, x: f64) -> Option<(f64, f64)> {
    f.evaluate(x)
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| (x, value))
}
