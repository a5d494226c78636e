use nalgebra::{DMatrix, DVector};

use super::Error;

/// A square linear system `A·x = b` with an optional starting iterate.
///
/// Construction validates the shapes, so every solver can rely on `A` being
/// `n × n` with `n > 0` and `b` having length `n`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    matrix: DMatrix<f64>,
    rhs: DVector<f64>,
    initial_guess: Option<DVector<f64>>,
}

impl LinearSystem {
    /// Creates a system from the coefficient matrix and right-hand side.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] for a `0 × 0` matrix, [`Error::NotSquare`] if
    /// `matrix` is not square, and [`Error::DimensionMismatch`] if `rhs` has
    /// the wrong length.
    pub fn new(matrix: DMatrix<f64>, rhs: DVector<f64>) -> Result<Self, Error> {
        let (rows, cols) = matrix.shape();
        if rows == 0 && cols == 0 {
            return Err(Error::Empty);
        }
        if rows != cols {
            return Err(Error::NotSquare { rows, cols });
        }
        check_len(rows, rhs.len())?;

        Ok(Self {
            matrix,
            rhs,
            initial_guess: None,
        })
    }

    /// Sets the starting iterate used by the iterative solvers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `x0` has the wrong length.
    pub fn with_initial_guess(mut self, x0: DVector<f64>) -> Result<Self, Error> {
        check_len(self.size(), x0.len())?;
        self.initial_guess = Some(x0);
        Ok(self)
    }

    /// Returns the number of unknowns.
    #[must_use]
    pub fn size(&self) -> usize {
        self.rhs.len()
    }

    /// Returns the coefficient matrix `A`.
    #[must_use]
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Returns the right-hand side `b`.
    #[must_use]
    pub fn rhs(&self) -> &DVector<f64> {
        &self.rhs
    }

    /// Returns a copy of the starting iterate, zeros if none was set.
    #[must_use]
    pub fn initial_guess(&self) -> DVector<f64> {
        self.initial_guess
            .clone()
            .unwrap_or_else(|| DVector::zeros(self.size()))
    }

    /// Returns true if `|A[i,i]| >= Σ_{j≠i} |A[i,j]|` for every row.
    ///
    /// Jacobi and Gauss-Seidel are guaranteed to converge when the inequality
    /// is strict; the solvers do not require it.
    #[must_use]
    pub fn is_diagonally_dominant(&self) -> bool {
        self.matrix.row_iter().enumerate().all(|(i, row)| {
            let diagonal = row[i].abs();
            let off_diagonal = row.iter().map(|v| v.abs()).sum::<f64>() - diagonal;
            diagonal >= off_diagonal
        })
    }

    /// Computes the residual `A·x - b`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `x` has the wrong length.
    pub fn residual(&self, x: &DVector<f64>) -> Result<DVector<f64>, Error> {
        check_len(self.size(), x.len())?;
        Ok(&self.matrix * x - &self.rhs)
    }
}

/// A tridiagonal system stored as its three bands and right-hand side.
///
/// Row `i` reads `sub[i-1]·x[i-1] + main[i]·x[i] + sup[i]·x[i+1] = rhs[i]`,
/// with the out-of-range terms dropped in the first and last rows.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalSystem {
    sub: DVector<f64>,
    main: DVector<f64>,
    sup: DVector<f64>,
    rhs: DVector<f64>,
}

impl TridiagonalSystem {
    /// Creates a system from its bands.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if `main` is empty and
    /// [`Error::DimensionMismatch`] unless `sub` and `sup` have length `n - 1`
    /// and `rhs` has length `n`, where `n = main.len()`.
    pub fn new(
        sub: DVector<f64>,
        main: DVector<f64>,
        sup: DVector<f64>,
        rhs: DVector<f64>,
    ) -> Result<Self, Error> {
        let n = main.len();
        if n == 0 {
            return Err(Error::Empty);
        }
        check_len(n - 1, sub.len())?;
        check_len(n - 1, sup.len())?;
        check_len(n, rhs.len())?;

        Ok(Self {
            sub,
            main,
            sup,
            rhs,
        })
    }

    /// Returns the number of unknowns.
    #[must_use]
    pub fn size(&self) -> usize {
        self.main.len()
    }

    /// Returns the sub-diagonal, length `n - 1`.
    #[must_use]
    pub fn sub(&self) -> &DVector<f64> {
        &self.sub
    }

    /// Returns the main diagonal, length `n`.
    #[must_use]
    pub fn main(&self) -> &DVector<f64> {
        &self.main
    }

    /// Returns the super-diagonal, length `n - 1`.
    #[must_use]
    pub fn sup(&self) -> &DVector<f64> {
        &self.sup
    }

    /// Returns the right-hand side, length `n`.
    #[must_use]
    pub fn rhs(&self) -> &DVector<f64> {
        &self.rhs
    }

    /// Expands the bands into the equivalent dense system.
    #[must_use]
    pub fn to_dense(&self) -> LinearSystem {
        let n = self.size();
        let matrix = DMatrix::from_fn(n, n, |i, j| {
            if i == j {
                self.main[i]
            } else if i == j + 1 {
                self.sub[j]
            } else if j == i + 1 {
                self.sup[i]
            } else {
                0.0
            }
        });

        LinearSystem {
            matrix,
            rhs: self.rhs.clone(),
            initial_guess: None,
        }
    }

    /// Computes the residual `A·x - b` without forming the dense matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `x` has the wrong length.
    pub fn residual(&self, x: &DVector<f64>) -> Result<DVector<f64>, Error> {
        let n = self.size();
        check_len(n, x.len())?;

        Ok(DVector::from_fn(n, |i, _| {
            let mut row = self.main[i] * x[i] - self.rhs[i];
            if i > 0 {
                row += self.sub[i - 1] * x[i - 1];
            }
            if i + 1 < n {
                row += self.sup[i] * x[i + 1];
            }
            row
        }))
    }
}

fn check_len(expected: usize, actual: usize) -> Result<(), Error> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::DimensionMismatch { expected, actual })
    }
}
