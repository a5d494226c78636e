//! Gaussian elimination with partial pivoting.
//!
//! # Algorithm
//!
//! The solver works on the augmented matrix `[A | b]`. For each pivot column
//! `i` it picks the row in `i..n` with the largest `|A[r, i]|`, swaps it into
//! row `i`, divides the row by the pivot, and eliminates column `i` from the
//! rows below. Back substitution then runs from the last row up:
//!
//! ```text
//! x[i] = aug[i, n] - Σ_{j>i} aug[i, j]·x[j]
//! ```
//!
//! A candidate entry `A[r, i]` counts as numerically zero when it is no
//! larger than `n · ε · max_j |A[r, j]|`, measured against the scale of its
//! own row in the input matrix. Only nonzero candidates can become pivots, so
//! badly scaled but nonsingular systems still solve. When every candidate in
//! a column is zero the solve fails with [`Error::Singular`].
//!
//! The returned [`Solution`] always has [`Status::Converged`], `iters = n`
//! pivot steps, and the infinity norm of `A·x - b` as its error.

use nalgebra::{DMatrix, DVector};
use solvekit_core::{Solution, Status};

use crate::finish::finish;

use super::{Error, LinearSystem};

const METHOD: &str = "gaussian elimination";

/// Solves `A·x = b` by Gaussian elimination with partial pivoting.
///
/// # Errors
///
/// Returns [`Error::Singular`] if no usable pivot exists in some column.
pub fn solve(system: &LinearSystem) -> Result<Solution<DVector<f64>>, Error> {
    let n = system.size();
    let matrix = system.matrix();
    let rhs = system.rhs();

    let mut aug = DMatrix::from_fn(n, n + 1, |i, j| if j < n { matrix[(i, j)] } else { rhs[i] });

    // Row scales follow their rows through the swaps.
    let mut scale: Vec<f64> = (0..n).map(|r| matrix.row(r).amax()).collect();
    #[allow(clippy::cast_precision_loss)]
    let relative = f64::EPSILON * n as f64;

    for i in 0..n {
        let pivot_row = (i..n)
            .filter(|&r| aug[(r, i)].abs() > relative * scale[r])
            .reduce(|best, r| {
                if aug[(r, i)].abs() > aug[(best, i)].abs() {
                    r
                } else {
                    best
                }
            })
            .ok_or(Error::Singular { column: i })?;

        let pivot = aug[(pivot_row, i)];
        aug.swap_rows(i, pivot_row);
        scale.swap(i, pivot_row);

        for j in i..=n {
            aug[(i, j)] /= pivot;
        }

        for r in (i + 1)..n {
            let factor = aug[(r, i)];
            if factor == 0.0 {
                continue;
            }
            for j in i..=n {
                let delta = factor * aug[(i, j)];
                aug[(r, j)] -= delta;
            }
        }
    }

    let mut x = DVector::zeros(n);
    for i in (0..n).rev() {
        let tail: f64 = ((i + 1)..n).map(|j| aug[(i, j)] * x[j]).sum();
        x[i] = aug[(i, n)] - tail;
    }

    let error = system.residual(&x)?.amax();

    Ok(finish(
        METHOD,
        Solution {
            status: Status::Converged,
            x,
            error,
            iters: n,
        },
    ))
}
