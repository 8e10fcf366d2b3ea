use betrothal_core::commentary::{classify_with, GapMetrics, GapSide, Severity};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn severity(total_left: f64, total_right: f64) -> Severity {
    classify_with(total_left, total_right, &mut StdRng::seed_from_u64(0)).severity
}

fn title(total_left: f64, total_right: f64) -> String {
    classify_with(total_left, total_right, &mut StdRng::seed_from_u64(0)).title
}

#[test]
fn equal_totals_are_ok() {
    assert_eq!(severity(100_000.0, 100_000.0), Severity::Ok);
}

#[test]
fn two_empty_ledgers_are_ok() {
    let metrics = GapMetrics::between(0.0, 0.0);
    assert!(metrics.ratio.is_finite());
    assert_eq!(severity(0.0, 0.0), Severity::Ok);
}

#[test]
fn small_relative_gap_is_mild() {
    // diff 4k over 52k: past the ok threshold, well under the mild caps.
    assert_eq!(severity(52_000.0, 48_000.0), Severity::Mild);
}

#[test]
fn ratio_at_the_ok_boundary_falls_to_mild() {
    // ratio exactly 0.05 misses the strict ok comparison.
    assert_eq!(severity(100_000.0, 95_000.0), Severity::Mild);
}

#[test]
fn abs_diff_at_the_mild_cap_falls_to_medium() {
    // ratio 0.05 with a 50k gap: the mild rule needs abs diff strictly
    // under 50k, the medium rule takes it instead.
    assert_eq!(severity(1_000_000.0, 950_000.0), Severity::Medium);
}

#[test]
fn failing_the_mild_ratio_falls_to_medium() {
    // diff 10k over 60k: ratio 1/6 fails the mild rule, medium matches.
    assert_eq!(severity(60_000.0, 50_000.0), Severity::Medium);
    assert_eq!(title(60_000.0, 50_000.0), "差额明显：建议先别上头 🧊");
}

#[test]
fn large_absolute_gap_forces_heavy_despite_moderate_ratio() {
    // ratio 1/6 looks medium, but the 200k absolute gap trips the heavy
    // rule's OR clause first.
    assert_eq!(severity(1_200_000.0, 1_000_000.0), Severity::Heavy);
}

#[test]
fn large_relative_gap_is_heavy() {
    assert_eq!(severity(100_000.0, 30_000.0), Severity::Heavy);
}

#[test]
fn overlap_band_falls_through_to_the_default_tier() {
    // ratio 0.5 with a 150k gap matches neither the medium nor the heavy
    // rule; the fallback medium tier catches it under its own title.
    assert_eq!(severity(300_000.0, 150_000.0), Severity::Medium);
    assert_eq!(title(300_000.0, 150_000.0), "差距偏大：建议对齐预期 🧠");
    assert_ne!(title(300_000.0, 150_000.0), title(60_000.0, 50_000.0));
}

#[test]
fn severity_is_symmetric_under_operand_swap() {
    let pairs = [
        (100_000.0, 100_000.0),
        (52_000.0, 48_000.0),
        (60_000.0, 50_000.0),
        (300_000.0, 150_000.0),
        (1_200_000.0, 1_000_000.0),
        (100_000.0, 30_000.0),
        (0.0, 75_000.0),
    ];
    for (a, b) in pairs {
        assert_eq!(severity(a, b), severity(b, a), "asymmetric for {a} vs {b}");
    }
}

#[test]
fn metrics_mirror_under_operand_swap() {
    let forward = GapMetrics::between(90_000.0, 40_000.0);
    let backward = GapMetrics::between(40_000.0, 90_000.0);
    assert_eq!(forward.diff, -backward.diff);
    assert_eq!(forward.abs_diff, backward.abs_diff);
    assert_eq!(forward.ratio, backward.ratio);
    assert_eq!(forward.higher_side, backward.lower_side);
    assert_eq!(forward.lower_side, backward.higher_side);
    assert_eq!(forward.higher_side, GapSide::BridePrice);
}

#[test]
fn negative_totals_still_classify() {
    // Negative amounts are unexpected but not rejected; the divisor floor
    // keeps the ratio defined.
    let metrics = GapMetrics::between(-10_000.0, -10_000.0);
    assert!(metrics.ratio.is_finite());
    assert_eq!(severity(-10_000.0, -10_000.0), Severity::Ok);
}
