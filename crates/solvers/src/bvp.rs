//! Finite-difference solver for two-point boundary value problems.
//!
//! # Problem
//!
//! Find `y(x)` on `[a, b]` with
//!
//! ```text
//! y''(x) = f(x),    y(a) = α,    y(b) = β
//! ```
//!
//! # Method
//!
//! The interval is split into `N + 1` equal steps of width `h`, giving the
//! grid `x[i] = a + i·h` for `i = 0..=N+1`. At each of the `N` interior points
//! the second derivative is replaced by the central difference, and the
//! equations are multiplied through by `h²`:
//!
//! ```text
//! y[i-1] - 2·y[i] + y[i+1] = h²·f(x[i])
//! ```
//!
//! The known boundary values move to the right-hand side of the first and
//! last rows. The resulting tridiagonal system is solved with
//! [`linear::thomas`]. The scheme is second-order accurate: halving `h`
//! divides the error by about four, and quadratic solutions are reproduced
//! exactly.
//!
//! The returned [`Solution`] carries the Thomas step count and the residual
//! of the scaled difference equations.

mod error;

pub use error::Error;

use nalgebra::DVector;
use solvekit_core::{ScalarFunction, Solution};

use crate::{finish::finish, linear};

const METHOD: &str = "finite difference";

/// A solution sampled on the finite-difference grid, boundary points
/// included.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Grid points `a = x[0] < x[1] < ... < x[N+1] = b`.
    pub x: DVector<f64>,

    /// Approximate `y(x)` at each grid point.
    pub y: DVector<f64>,
}

/// Solves `y'' = source(x)` on `interval` with Dirichlet `boundary` values
/// `[y(a), y(b)]`, using `interior` unknown grid points.
///
/// # Errors
///
/// - [`Error::InvalidInterval`] unless `a < b` and both are finite.
/// - [`Error::NonFiniteBoundary`] if a boundary value is NaN or infinite.
/// - [`Error::NoInteriorPoints`] if `interior` is zero.
/// - [`Error::Function`] or [`Error::NonFiniteValue`] if `source` fails.
pub fn solve<F: ScalarFunction>(
    source: &F,
    interval: [f64; 2],
    boundary: [f64; 2],
    interior: usize,
) -> Result<Solution<Profile>, Error> {
    let [a, b] = interval;
    if !(a.is_finite() && b.is_finite() && a < b) {
        return Err(Error::InvalidInterval { a, b });
    }
    let [alpha, beta] = boundary;
    if !(alpha.is_finite() && beta.is_finite()) {
        return Err(Error::NonFiniteBoundary { alpha, beta });
    }
    if interior == 0 {
        return Err(Error::NoInteriorPoints);
    }

    #[allow(clippy::cast_precision_loss)]
    let h = (b - a) / (interior + 1) as f64;
    #[allow(clippy::cast_precision_loss)]
    let x = DVector::from_fn(interior + 2, |i, _| {
        if i == interior + 1 { b } else { a + h * i as f64 }
    });

    let mut rhs = DVector::zeros(interior);
    for i in 0..interior {
        let xi = x[i + 1];
        let value = source.evaluate(xi).map_err(Error::function)?;
        if !value.is_finite() {
            return Err(Error::NonFiniteValue { x: xi, value });
        }
        rhs[i] = h * h * value;
    }
    rhs[0] -= alpha;
    rhs[interior - 1] -= beta;

    let system = linear::TridiagonalSystem::new(
        DVector::from_element(interior - 1, 1.0),
        DVector::from_element(interior, -2.0),
        DVector::from_element(interior - 1, 1.0),
        rhs,
    )?;
    let inner = linear::thomas::solve(&system)?;

    let y = DVector::from_fn(interior + 2, |i, _| match i {
        0 => alpha,
        i if i == interior + 1 => beta,
        i => inner.x[i - 1],
    });

    Ok(finish(
        METHOD,
        Solution {
            status: inner.status,
            x: Profile { x, y },
            error: inner.error,
            iters: inner.iters,
        },
    ))
}
