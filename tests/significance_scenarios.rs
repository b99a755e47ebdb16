use absig::engine::{evaluate_significance, run_significance_test};
use absig::error::EngineError;
use absig::models::{GroupObservation, Hypothesis, TestConfiguration, ZMethod};

fn obs(events: u64, population: u64) -> GroupObservation {
    GroupObservation::new(events, population).unwrap()
}

fn config(hypothesis: Hypothesis, alpha: f64, method: ZMethod) -> TestConfiguration {
    TestConfiguration::new(hypothesis, alpha)
        .unwrap()
        .with_method(method)
}

#[test]
fn test_reference_run_is_not_significant() {
    // 23/228 vs 30/254 at alpha 0.05: a visible lift, nowhere near significant.
    let result = run_significance_test(
        &obs(23, 228),
        &obs(30, 254),
        &TestConfiguration::default(),
    )
    .unwrap();

    assert!((result.rate_a - 10.087719298245613).abs() < 1e-12);
    assert!((result.rate_b - 11.811023622047244).abs() < 1e-12);
    assert!((result.difference - 1.723304323801631).abs() < 1e-12);
    assert!((result.standard_error_diff - 0.028423421639172).abs() < 1e-12);
    assert!((result.z_score - 0.603814026931805).abs() < 1e-9);
    assert!((result.p_value - 0.545967183573495).abs() < 1e-9);
    assert!(!result.is_significant);
}

#[test]
fn test_larger_effect_flips_at_ten_percent_alpha() {
    // 23/228 vs 41/254 lands just above p = 0.05: the verdict depends on
    // the chosen alpha, not on the arithmetic.
    let a = obs(23, 228);
    let b = obs(41, 254);

    let strict = run_significance_test(
        &a,
        &b,
        &config(Hypothesis::TwoSided, 0.05, ZMethod::Pooled),
    )
    .unwrap();
    assert!((strict.z_score - 1.955568446365828).abs() < 1e-9);
    assert!((strict.p_value - 0.050515873176596).abs() < 1e-9);
    assert!(!strict.is_significant);

    let loose = run_significance_test(
        &a,
        &b,
        &config(Hypothesis::TwoSided, 0.10, ZMethod::Pooled),
    )
    .unwrap();
    assert_eq!(loose.p_value, strict.p_value);
    assert!(loose.is_significant);
}

#[test]
fn test_estimators_disagree_on_borderline_runs() {
    // Same borderline groups: pooled says no at alpha 0.05, unpooled says yes.
    let a = obs(23, 228);
    let b = obs(41, 254);

    let pooled = run_significance_test(
        &a,
        &b,
        &config(Hypothesis::TwoSided, 0.05, ZMethod::Pooled),
    )
    .unwrap();
    let unpooled = run_significance_test(
        &a,
        &b,
        &config(Hypothesis::TwoSided, 0.05, ZMethod::Unpooled),
    )
    .unwrap();

    assert!(!pooled.is_significant);
    assert!((unpooled.z_score - 1.984408581516979).abs() < 1e-9);
    assert!((unpooled.p_value - 0.047210169847908).abs() < 1e-9);
    assert!(unpooled.is_significant);
}

#[test]
fn test_one_sided_halves_the_p_value() {
    let a = obs(23, 228);
    let b = obs(41, 254);

    let two = run_significance_test(
        &a,
        &b,
        &config(Hypothesis::TwoSided, 0.05, ZMethod::Pooled),
    )
    .unwrap();
    let one = run_significance_test(
        &a,
        &b,
        &config(Hypothesis::OneSided, 0.05, ZMethod::Pooled),
    )
    .unwrap();

    assert!((one.p_value - 0.025257936588298).abs() < 1e-9);
    assert!((two.p_value - 2.0 * one.p_value).abs() < 1e-8);
    assert!(one.is_significant);
}

#[test]
fn test_degenerate_groups_error_under_both_estimators() {
    for method in [ZMethod::Pooled, ZMethod::Unpooled] {
        let cfg = config(Hypothesis::TwoSided, 0.05, method);

        let err = run_significance_test(&obs(0, 100), &obs(0, 100), &cfg).unwrap_err();
        assert!(
            matches!(err, EngineError::DegenerateInput { .. }),
            "all-zero groups, {:?}: {}",
            method,
            err
        );

        let err = run_significance_test(&obs(100, 100), &obs(100, 100), &cfg).unwrap_err();
        assert!(
            matches!(err, EngineError::DegenerateInput { .. }),
            "all-converting groups, {:?}: {}",
            method,
            err
        );
    }
}

#[test]
fn test_p_value_shrinks_as_the_effect_grows() {
    let a = obs(23, 228);
    let cfg = TestConfiguration::default();

    let mut previous_p = f64::INFINITY;
    let mut previous_rate = 0.0;
    for events_b in 30..=41 {
        let result = run_significance_test(&a, &obs(events_b, 254), &cfg).unwrap();
        assert!(
            result.p_value < previous_p,
            "p did not shrink at events_b={}: {} >= {}",
            events_b,
            result.p_value,
            previous_p
        );
        assert!(result.rate_b > previous_rate);
        assert!(result.difference > 0.0);
        previous_p = result.p_value;
        previous_rate = result.rate_b;
    }
}

#[test]
fn test_swapped_groups_negate_z_and_keep_p() {
    let a = obs(23, 228);
    let b = obs(41, 254);
    let cfg = TestConfiguration::default();

    let forward = run_significance_test(&a, &b, &cfg).unwrap();
    let backward = run_significance_test(&b, &a, &cfg).unwrap();

    assert!((forward.z_score + backward.z_score).abs() < 1e-12);
    assert!((forward.p_value - backward.p_value).abs() < 1e-12);
    assert_eq!(forward.is_significant, backward.is_significant);
    assert!((forward.difference + backward.difference).abs() < 1e-12);
}

#[test]
fn test_unpooled_matches_the_classic_formula() {
    // Recompute the unpooled chain by hand and compare against the engine.
    let result = run_significance_test(
        &obs(23, 228),
        &obs(30, 254),
        &TestConfiguration::default().with_method(ZMethod::Unpooled),
    )
    .unwrap();

    let rate_a = (23f64 / 228f64) * 100.0;
    let rate_b = (30f64 / 254f64) * 100.0;
    let se_a = (rate_a / 100.0 * (1.0 - rate_a / 100.0) / 228.0).sqrt();
    let se_b = (rate_b / 100.0 * (1.0 - rate_b / 100.0) / 254.0).sqrt();
    let sed = (se_a.powi(2) + se_b.powi(2)).sqrt();
    let z = ((rate_b - rate_a) / sed) / 100.0;

    assert!((result.z_score - z).abs() < 1e-15);
    assert!((result.standard_error_diff - sed).abs() < 1e-15);
}

#[test]
fn test_verdict_threshold_is_strict() {
    // A p-value exactly at alpha must not count as significant.
    assert!(!evaluate_significance(0.05, 0.05));
    assert!(evaluate_significance(0.049999999, 0.05));
}
