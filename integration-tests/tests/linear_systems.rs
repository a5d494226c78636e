use approx::assert_relative_eq;
use integration_tests::SystemGenerator;
use nalgebra::{DMatrix, DVector, Matrix3, Vector3, dmatrix, dvector};
use solvekit_core::{Config, Status};
use solvekit_observers::Recorder;
use solvekit_solvers::linear::{LinearSystem, gauss_seidel, gaussian, jacobi, thomas};

const SEED: u64 = 0x5eed;

/// Solves a 3 × 3 system by Cramer's rule.
fn cramer(a: &DMatrix<f64>, b: &DVector<f64>) -> DVector<f64> {
    let a = Matrix3::from_fn(|i, j| a[(i, j)]);
    let b = Vector3::new(b[0], b[1], b[2]);
    let det = a.determinant();
    DVector::from_fn(3, |k, _| {
        let mut replaced = a;
        replaced.set_column(k, &b);
        replaced.determinant() / det
    })
}

fn round6(x: f64) -> f64 {
    (x * 1e6).round() / 1e6
}

#[test]
fn gaussian_matches_cramers_rule() {
    let a = dmatrix![2.0, 1.0, 1.0; 3.0, 2.0, 3.0; 1.0, 4.0, 9.0];
    let b = dvector![10.0, 18.0, 16.0];
    let expected = cramer(&a, &b);

    let system = LinearSystem::new(a.clone(), b.clone()).expect("valid system");
    let solution = gaussian::solve(&system).expect("nonsingular");

    assert_eq!(solution.x.map(round6), expected.map(round6));
    assert_relative_eq!(&a * &solution.x, b, epsilon = 1e-10);
}

#[test]
fn gaussian_round_trips_random_systems() {
    let mut generator = SystemGenerator::new(SEED);
    for n in [1, 2, 5, 10, 25] {
        let system = generator.dominant_system(n);
        let solution = gaussian::solve(&system).expect("dominant systems are nonsingular");

        let scale = system.rhs().amax();
        assert!(solution.error <= 1e-12 * scale * n as f64);
    }
}

#[test]
fn iterative_solvers_agree_with_elimination() {
    let mut generator = SystemGenerator::new(SEED);
    let config = Config::new(1000, 1e-10).expect("valid config");

    for n in 2..=6 {
        let system = generator.dominant_system(n);
        let direct = gaussian::solve(&system).expect("nonsingular");
        let by_jacobi = jacobi::solve_unobserved(&system, &config).expect("solves");
        let by_seidel = gauss_seidel::solve_unobserved(&system, &config).expect("solves");

        assert_eq!(by_jacobi.status, Status::Converged);
        assert_eq!(by_seidel.status, Status::Converged);
        assert_relative_eq!(by_jacobi.x, direct.x, epsilon = 1e-6);
        assert_relative_eq!(by_seidel.x, direct.x, epsilon = 1e-6);
        assert!(
            by_seidel.iters <= by_jacobi.iters,
            "n = {n}: gauss-seidel took {} sweeps, jacobi {}",
            by_seidel.iters,
            by_jacobi.iters
        );
    }
}

#[test]
fn iterative_solvers_use_linear_defaults() {
    let system = SystemGenerator::new(SEED).dominant_system(3);
    let solution = gauss_seidel::solve_unobserved(&system, &Config::linear()).expect("solves");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.error <= 1e-6);
}

#[test]
fn converged_iterate_is_a_fixed_point() {
    let system = SystemGenerator::new(SEED).dominant_system(4);
    let config = Config::linear();

    let first = gauss_seidel::solve_unobserved(&system, &config).expect("solves");
    let restarted = system
        .clone()
        .with_initial_guess(first.x.clone())
        .expect("matching length");
    let second = gauss_seidel::solve_unobserved(&restarted, &config).expect("solves");

    assert_eq!(second.iters, 1);
    assert!(second.error <= first.error);
    assert_relative_eq!(second.x, first.x, epsilon = 1e-6);
}

#[test]
fn sweep_errors_shrink_on_dominant_systems() {
    let system = SystemGenerator::new(SEED).dominant_system(5);
    let mut recorder = Recorder::new();
    gauss_seidel::solve(&system, &Config::linear(), &mut recorder).expect("solves");

    let errors = recorder.errors();
    assert!(errors.len() > 1);
    assert!(errors.last() < errors.first());
}

#[test]
fn thomas_matches_dense_elimination() {
    let mut generator = SystemGenerator::new(SEED);
    for n in [1, 2, 3, 10, 50] {
        let system = generator.tridiagonal_system(n);
        let banded = thomas::solve(&system).expect("nonzero pivots");
        let dense = gaussian::solve(&system.to_dense()).expect("nonsingular");

        assert_eq!(banded.iters, 2 * n - 1);
        assert_relative_eq!(banded.x, dense.x, epsilon = 1e-9, max_relative = 1e-9);
        assert!(banded.error < 1e-9);
    }
}
