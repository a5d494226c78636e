use nalgebra::{DMatrix, DVector};
use rand::{Rng, SeedableRng, rngs::StdRng};
use solvekit_solvers::linear::{LinearSystem, TridiagonalSystem};

/// Reproducible source of random linear systems.
pub struct SystemGenerator {
    rng: StdRng,
}

impl SystemGenerator {
    /// Creates a generator from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates a strictly diagonally dominant `n × n` system.
    ///
    /// Off-diagonal entries and `b` are uniform in `[1, 10)`. Each diagonal
    /// entry is its row's off-diagonal sum plus a uniform `[1, 10)` margin.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn dominant_system(&mut self, n: usize) -> LinearSystem {
        let mut matrix = DMatrix::from_fn(n, n, |_, _| self.rng.gen_range(1.0..10.0));
        let rhs = DVector::from_fn(n, |_, _| self.rng.gen_range(1.0..10.0));

        for i in 0..n {
            let off_diagonal: f64 = (0..n).filter(|&j| j != i).map(|j| matrix[(i, j)]).sum();
            matrix[(i, i)] = off_diagonal + self.rng.gen_range(1.0..10.0);
        }

        LinearSystem::new(matrix, rhs).expect("generated shapes are consistent")
    }

    /// Generates an `n × n` tridiagonal system with integer-valued entries.
    ///
    /// Sub- and super-diagonals are drawn from `1..10`, the main diagonal
    /// from `10..20`, and the right-hand side from `10..50`.
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn tridiagonal_system(&mut self, n: usize) -> TridiagonalSystem {
        let sub = self.integers(n - 1, 1, 10);
        let main = self.integers(n, 10, 20);
        let sup = self.integers(n - 1, 1, 10);
        let rhs = self.integers(n, 10, 50);

        TridiagonalSystem::new(sub, main, sup, rhs).expect("generated shapes are consistent")
    }

    fn integers(&mut self, len: usize, low: i32, high: i32) -> DVector<f64> {
        DVector::from_fn(len, |_, _| f64::from(self.rng.gen_range(low..high)))
    }
}
