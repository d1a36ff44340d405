//! Van Deemter 식의 기준 성질 회귀 테스트.
use van_deemter_toolbox::deemter::{
    analytic_minimum, evaluate, evaluate_at, find_minimum, sample_curve, Analysis, Coefficients,
    DeemterError, SamplingDomain,
};
use van_deemter_toolbox::input::InputSnapshot;

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.9} got {actual:.9} (diff {diff:.3e}, tol {tol})"
    );
}

#[test]
fn formula_matches_definition() {
    for &(u, a, b, c) in &[
        (1.0, 0.0, 0.0, 0.0),
        (3.7, 1.2, 0.4, 0.02),
        (200.0, 2.0, 1.0, 0.1),
        (0.05, 0.3, 0.9, 0.07),
    ] {
        let h = evaluate(u, &Coefficients::new(a, b, c)).expect("valid u");
        assert_close("H", h, a + b / u + c * u, 1e-9);
    }
}

#[test]
fn zero_coefficients_give_zero() {
    let zero = Coefficients::new(0.0, 0.0, 0.0);
    for u in [0.1, 1.0, 42.0, 1e6] {
        assert_eq!(evaluate(u, &zero).unwrap(), 0.0);
    }
}

#[test]
fn reference_scenario_at_fifty() {
    // 0.5 + 0.1/50 + 0.01·50 = 0.5 + 0.002 + 0.5
    let h = evaluate(50.0, &Coefficients::new(0.5, 0.1, 0.01)).unwrap();
    assert_close("H(50)", h, 1.002, 1e-9);
}

#[test]
fn non_positive_flow_rate_is_a_domain_error() {
    let coeffs = Coefficients::default();
    assert_eq!(evaluate(0.0, &coeffs), Err(DeemterError::Domain { u: 0.0 }));
    assert!(matches!(evaluate(-3.0, &coeffs), Err(DeemterError::Domain { .. })));
    assert!(evaluate_at(0.0, &coeffs).is_err());
}

#[test]
fn sample_count_endpoints_and_spacing() {
    let domain = SamplingDomain::new(1.0, 200.0, 400).unwrap();
    let curve = sample_curve(&domain, &Coefficients::default()).unwrap();
    let pts = curve.points();
    assert_eq!(pts.len(), 400);
    assert_eq!(pts[0].u, 1.0);
    assert_eq!(pts[399].u, 200.0);
    let step = 199.0 / 399.0;
    for pair in pts.windows(2) {
        assert_close("step", pair[1].u - pair[0].u, step, 1e-9);
    }
}

#[test]
fn sampled_minimum_near_analytic_optimum() {
    let coeffs = Coefficients::new(0.5, 0.1, 0.01);
    let domain = SamplingDomain::default();
    let curve = sample_curve(&domain, &coeffs).unwrap();
    let best = find_minimum(&curve).unwrap();
    let exact = analytic_minimum(&coeffs).unwrap();
    assert_close("u_opt", exact.u, 10f64.sqrt(), 1e-12);
    assert_close("u_opt sampled", best.u, exact.u, domain.step());
    assert_close("H_min", best.h, 0.563, 1e-3);
    assert!(exact.h <= best.h);
}

#[test]
fn without_mass_transfer_minimum_is_at_upper_end() {
    let domain = SamplingDomain::default();
    let curve = sample_curve(&domain, &Coefficients::new(0.5, 0.1, 0.0)).unwrap();
    for pair in curve.points().windows(2) {
        assert!(pair[1].h < pair[0].h);
    }
    assert_eq!(find_minimum(&curve).unwrap().u, domain.u_max);
}

#[test]
fn without_longitudinal_diffusion_minimum_is_at_lower_end() {
    let domain = SamplingDomain::default();
    let curve = sample_curve(&domain, &Coefficients::new(0.5, 0.0, 0.01)).unwrap();
    for pair in curve.points().windows(2) {
        assert!(pair[1].h > pair[0].h);
    }
    assert_eq!(find_minimum(&curve).unwrap().u, domain.u_min);
}

#[test]
fn selected_point_is_plain_evaluation() {
    let coeffs = Coefficients::new(0.8, 0.25, 0.03);
    for u in [1.0, 17.5, 123.0] {
        let p = evaluate_at(u, &coeffs).unwrap();
        assert_eq!(p.h(), evaluate(u, &coeffs).unwrap());
    }
}

#[test]
fn analysis_is_a_pure_function_of_its_inputs() {
    let snapshot = InputSnapshot {
        coefficients: Coefficients::new(1.1, 0.6, 0.04),
        flow_rate: 12.0,
    };
    let domain = SamplingDomain::default();
    let first = Analysis::compute(&snapshot, &domain).unwrap();
    let second = Analysis::compute(&snapshot, &domain).unwrap();
    assert_eq!(first, second);
    assert_close("selected", first.selected.h(), 1.1 + 0.05 + 0.48, 1e-12);
}
