use std::f64::consts::PI;

use approx::assert_relative_eq;
use solvekit_core::{Config, ScalarFunction, Status};
use solvekit_solvers::{
    bvp,
    equation::{Error, bisection, newton, secant},
    spline::{self, NaturalSpline},
};

/// A natural spline through `sin` sampled on 21 points of `[0, 2π]`.
fn sine_spline() -> NaturalSpline {
    let x: Vec<f64> = (0..=20_u32).map(|i| 2.0 * PI * f64::from(i) / 20.0).collect();
    let y: Vec<f64> = x.iter().map(|v| v.sin()).collect();
    NaturalSpline::new(&x, &y).expect("valid data")
}

#[test]
fn root_finders_locate_spline_zero() {
    let spline = sine_spline();
    let config = Config::default();

    let by_bisection = bisection::solve_unobserved(&spline, [3.0, 3.3], &config).expect("solves");
    let by_secant = secant::solve_unobserved(&spline, [3.0, 3.3], &config).expect("solves");
    let by_newton = newton::solve_unobserved(&spline, 3.0, &config).expect("solves");

    for solution in [&by_bisection, &by_secant, &by_newton] {
        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, PI, epsilon = 1e-6);
    }
}

#[test]
fn evaluating_outside_the_knots_is_a_function_error() {
    let spline = sine_spline();
    let result = bisection::solve_unobserved(&spline, [-1.0, 1.0], &Config::default());
    assert!(matches!(result, Err(Error::Function(_))));
}

#[test]
fn spline_through_boundary_value_profile() {
    // Solve y'' = -π² sin(πx) on [0, 1], then interpolate between grid points.
    let source = |x: f64| -PI * PI * (PI * x).sin();
    let solution = bvp::solve(&source, [0.0, 1.0], [0.0, 0.0], 99).expect("solves");
    let profile = solution.x;

    let interpolant =
        NaturalSpline::new(profile.x.as_slice(), profile.y.as_slice()).expect("grid is increasing");

    for k in 0..=50_u32 {
        let x = 0.013 + 0.019 * f64::from(k);
        let value = interpolant.evaluate(x).expect("inside the grid");
        assert!((value - (PI * x).sin()).abs() < 2e-4);
    }
    assert!(matches!(
        interpolant.evaluate(1.5),
        Err(spline::Error::OutOfBounds { .. })
    ));
}
