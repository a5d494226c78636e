use solvekit_core::ScalarFunction;
use thiserror::Error;

use super::{Error, evaluate};

/// Errors that can occur when validating a bracketing interval.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,

    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,

    /// Function values at the endpoints have the same sign.
    #[error("no sign change: f({left}) = {f_left}, f({right}) = {f_right}")]
    NoSignChange {
        left: f64,
        right: f64,
        f_left: f64,
        f_right: f64,
    },
}

/// How a bracketing solve begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Start {
    /// An endpoint is an exact root; no iteration is needed.
    Root(f64),

    /// A valid bracket with a strict sign change.
    Bracket(Bracket),
}

/// Ordered bounds `left < right` with opposite-signed function values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bracket {
    left: f64,
    right: f64,
    f_left: f64,
    f_right: f64,
}

impl Bracket {
    /// Validates `interval`, orders it, and evaluates `f` at both ends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBracket`] if the endpoints are non-finite, equal,
    /// or do not straddle a sign change, and propagates evaluation failures.
    #[allow(clippy::float_cmp)]
    pub(crate) fn establish<F: ScalarFunction>(f: &F, interval: [f64; 2]) -> Result<Start, Error> {
        let [a, b] = interval;

        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite.into());
        }

        if a == b {
            return Err(BracketError::ZeroWidth.into());
        }

        let (left, right) = if a < b { (a, b) } else { (b, a) };
        let f_left = evaluate::value(f, left)?;
        let f_right = evaluate::value(f, right)?;

        if f_left == 0.0 {
            return Ok(Start::Root(left));
        }
        if f_right == 0.0 {
            return Ok(Start::Root(right));
        }
        if !opposite_signs(f_left, f_right) {
            return Err(BracketError::NoSignChange {
                left,
                right,
                f_left,
                f_right,
            }
            .into());
        }

        Ok(Start::Bracket(Self {
            left,
            right,
            f_left,
            f_right,
        }))
    }

    /// Returns the bracket bounds as an array.
    pub(crate) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the midpoint of the bracket.
    pub(crate) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns half the bracket width, the error bound of the midpoint.
    pub(crate) fn half_width(&self) -> f64 {
        0.5 * (self.right - self.left)
    }

    /// Returns the false-position point `b - f(b)·(b - a) / (f(b) - f(a))`.
    ///
    /// The denominator is never zero because the endpoint values have
    /// opposite signs.
    pub(crate) fn secant_point(&self) -> f64 {
        self.right - self.f_right * (self.right - self.left) / (self.f_right - self.f_left)
    }

    /// Replaces one endpoint with `x`, keeping the sign change inside.
    ///
    /// If `f(x)·f(left) < 0` the root lies in `[left, x]` and `right` moves;
    /// otherwise `left` moves. `fx` must be nonzero.
    pub(crate) fn shrink(&mut self, x: f64, fx: f64) {
        if opposite_signs(fx, self.f_left) {
            self.right = x;
            self.f_right = fx;
        } else {
            self.left = x;
            self.f_left = fx;
        }
    }
}

/// Sign test equivalent to `a * b < 0` for nonzero values, without forming
/// the product.
fn opposite_signs(a: f64, b: f64) -> bool {
    (a < 0.0) != (b < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn bracket(f: impl Fn(f64) -> f64, interval: [f64; 2]) -> Bracket {
        match Bracket::establish(&f, interval).expect("valid bracket") {
            Start::Bracket(bracket) => bracket,
            Start::Root(x) => panic!("unexpected exact root at {x}"),
        }
    }

    #[test]
    fn orders_reversed_interval() {
        let b = bracket(|x| x - 1.5, [3.0, 1.0]);
        assert_eq!(b.as_array(), [1.0, 3.0]);
    }

    #[test]
    fn rejects_non_finite_and_zero_width() {
        let f = |x: f64| x;
        assert!(matches!(
            Bracket::establish(&f, [f64::NAN, 1.0]),
            Err(Error::InvalidBracket(BracketError::NonFinite))
        ));
        assert!(matches!(
            Bracket::establish(&f, [0.0, f64::INFINITY]),
            Err(Error::InvalidBracket(BracketError::NonFinite))
        ));
        assert!(matches!(
            Bracket::establish(&f, [2.0, 2.0]),
            Err(Error::InvalidBracket(BracketError::ZeroWidth))
        ));
    }

    #[test]
    fn rejects_same_sign_endpoints() {
        let f = |x: f64| x * x + 1.0;
        assert!(matches!(
            Bracket::establish(&f, [-1.0, 1.0]),
            Err(Error::InvalidBracket(BracketError::NoSignChange { .. }))
        ));
    }

    #[test]
    fn same_sign_check_survives_underflow() {
        // Product of the endpoint values underflows to zero.
        let f = |x: f64| if x < 0.0 { 1e-200 } else { 2e-200 };
        assert!(matches!(
            Bracket::establish(&f, [-1.0, 1.0]),
            Err(Error::InvalidBracket(BracketError::NoSignChange { .. }))
        ));
    }

    #[test]
    fn exact_endpoint_root_short_circuits() {
        let f = |x: f64| x - 2.0;
        assert_eq!(Bracket::establish(&f, [2.0, 5.0]).unwrap(), Start::Root(2.0));
        assert_eq!(Bracket::establish(&f, [0.0, 2.0]).unwrap(), Start::Root(2.0));
    }

    #[test]
    fn shrink_keeps_sign_change() {
        let mut b = bracket(|x| x - 0.3, [0.0, 1.0]);

        // f(0.5) > 0 shares the sign of f(1): right moves.
        b.shrink(0.5, 0.2);
        assert_eq!(b.as_array(), [0.0, 0.5]);

        // f(0.25) < 0 shares the sign of f(0): left moves.
        b.shrink(0.25, -0.05);
        assert_eq!(b.as_array(), [0.25, 0.5]);
        assert_relative_eq!(b.half_width(), 0.125);
        assert_relative_eq!(b.midpoint(), 0.375);
    }

    #[test]
    fn secant_point_is_linear_interpolation() {
        // For a linear function the secant point is the exact root.
        let b = bracket(|x| 2.0 * x - 1.0, [0.0, 2.0]);
        assert_relative_eq!(b.secant_point(), 0.5);
    }
}
