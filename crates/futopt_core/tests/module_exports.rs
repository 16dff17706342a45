//! Integration tests for module exports.
//!
//! Verify that all public modules and types are reachable via absolute paths.

#[test]
fn test_distribution_module_exports() {
    use futopt_core::math::distributions::normal_cdf;
    use futopt_core::math::distributions::normal_density;

    let _ = normal_cdf(0.3_f64);
    let _ = normal_density(0.3_f64);
}

#[test]
fn test_solver_module_exports() {
    use futopt_core::math::solvers::{
        NewtonRaphsonSolver, RootResult, SolverConfig, DEFAULT_TOLERANCE,
    };

    let config: SolverConfig<f64> = SolverConfig::default();
    assert_eq!(config.tolerance, DEFAULT_TOLERANCE);

    let solver = NewtonRaphsonSolver::new(SolverConfig::bounded(1e-12, 20));
    let result: RootResult<f64> = solver
        .find_root_detailed(|x: f64| x * x - 9.0, |x: f64| 2.0 * x, 1.0)
        .unwrap();
    assert!((result.root - 3.0).abs() < 1e-12);
    assert!(result.iterations > 1);
}

#[test]
fn test_error_type_exports() {
    use futopt_core::types::error::{PricingError, SolverError};
    use futopt_core::types::PricingError as ReexportedPricingError;

    let err: ReexportedPricingError = SolverError::NumericalInstability("x".to_string()).into();
    assert!(matches!(err, PricingError::NumericalInstability(_)));
}

#[test]
fn test_float_reexport() {
    use futopt_core::Float;

    fn generic_sqrt<T: Float>(x: T) -> T {
        x.sqrt()
    }
    assert_eq!(generic_sqrt(4.0_f64), 2.0);
}
