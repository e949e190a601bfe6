mod common;

use clarity_core::compare::{relative_percentages, Comparison, PercentagePair, PhotoSlot};
use clarity_core::quality::{compute_sharpness, SharpnessMethod, SharpnessScore};

use common::checkerboard;

fn pair(a: i32, b: i32) -> PercentagePair {
    PercentagePair { a, b }
}

fn laplacian_score(value: f64) -> SharpnessScore {
    SharpnessScore {
        value,
        method: SharpnessMethod::Laplacian,
        laplacian_value: value,
        tenengrad_value: None,
    }
}

// ---------------------------------------------------------------------------
// relative_percentages
// ---------------------------------------------------------------------------

#[test]
fn test_both_zero_is_even_split() {
    assert_eq!(relative_percentages(0.0, 0.0), pair(50, 50));
}

#[test]
fn test_invalid_inputs_are_sanitized_to_tie() {
    assert_eq!(relative_percentages(-5.0, f64::NAN), pair(50, 50));
    assert_eq!(relative_percentages(f64::NEG_INFINITY, -0.0), pair(50, 50));
}

#[test]
fn test_one_sided_scores() {
    assert_eq!(relative_percentages(1.0, 0.0), pair(100, 0));
    assert_eq!(relative_percentages(0.0, 2.0), pair(0, 100));
    // Infinity sanitizes to zero, so the finite side takes everything.
    assert_eq!(relative_percentages(f64::INFINITY, 1.0), pair(0, 100));
}

#[test]
fn test_proportional_split() {
    assert_eq!(relative_percentages(3.0, 1.0), pair(75, 25));
    assert_eq!(relative_percentages(64.0, 36.0), pair(64, 36));
    assert_eq!(relative_percentages(1.0, 1.0), pair(50, 50));
}

#[test]
fn test_half_rounds_away_from_zero() {
    // 1 / 8 = 12.5%
    assert_eq!(relative_percentages(1.0, 7.0), pair(13, 87));
    assert_eq!(relative_percentages(7.0, 1.0), pair(88, 12));
}

#[test]
fn test_huge_scores_do_not_overflow() {
    assert_eq!(relative_percentages(f64::MAX, f64::MAX), pair(50, 50));
    assert_eq!(relative_percentages(f64::MAX, 0.0), pair(100, 0));
}

#[test]
fn test_percentages_always_sum_to_100() {
    let values = [
        0.0, 1e-300, 1e-9, 0.004, 0.5, 1.0, 2.0, 3.0, 7.0, 33.3, 99.5, 1e6, 1e300,
    ];
    for &a in &values {
        for &b in &values {
            let p = relative_percentages(a, b);
            assert_eq!(p.a + p.b, 100, "({a}, {b}) -> {p:?}");
            assert!((0..=100).contains(&p.a), "({a}, {b}) -> {p:?}");
            assert!((0..=100).contains(&p.b), "({a}, {b}) -> {p:?}");
        }
    }
}

// ---------------------------------------------------------------------------
// Leading slot and message
// ---------------------------------------------------------------------------

#[test]
fn test_leading_slot() {
    assert_eq!(pair(64, 36).leading_slot(), Some(PhotoSlot::A));
    assert_eq!(pair(36, 64).leading_slot(), Some(PhotoSlot::B));
    assert_eq!(pair(50, 50).leading_slot(), None);
}

#[test]
fn test_comparison_messages() {
    let a_wins = Comparison::new(laplacian_score(64.0), laplacian_score(36.0));
    assert_eq!(a_wins.to_string(), "Image A is sharper: 64% vs 36%");

    let b_wins = Comparison::new(laplacian_score(1.0), laplacian_score(3.0));
    assert_eq!(b_wins.to_string(), "Image B is sharper: 75% vs 25%");

    let tie = Comparison::new(laplacian_score(0.0), laplacian_score(0.0));
    assert_eq!(tie.leading_slot(), None);
    assert_eq!(tie.to_string(), "Both images are equally sharp (50% each)");
}

#[test]
fn test_checkerboard_contrast_split() {
    // Laplacian variance scales with the square of the contrast: 192^2 / 64^2 = 9.
    let sharp = compute_sharpness(5, 5, &checkerboard(5, 5, 32, 224), 1e-6).unwrap();
    let soft = compute_sharpness(5, 5, &checkerboard(5, 5, 96, 160), 1e-6).unwrap();

    let comparison = Comparison::new(sharp, soft);
    assert_eq!(comparison.percentages, pair(90, 10));
    assert_eq!(comparison.leading_slot(), Some(PhotoSlot::A));
}

#[test]
fn test_comparison_serializes_scores_and_split() {
    let fallback = SharpnessScore {
        value: 2.5,
        method: SharpnessMethod::Tenengrad,
        laplacian_value: 0.0,
        tenengrad_value: Some(2.5),
    };
    let comparison = Comparison::new(laplacian_score(7.5), fallback);

    let json = serde_json::to_value(&comparison).unwrap();
    assert_eq!(json["percentages"]["a"], 75);
    assert_eq!(json["percentages"]["b"], 25);
    assert_eq!(json["score_a"]["method"], "Laplacian");
    assert!(json["score_a"]["tenengrad_value"].is_null());
    assert_eq!(json["score_b"]["method"], "Tenengrad");
    assert_eq!(json["score_b"]["tenengrad_value"], 2.5);
    assert_eq!(serde_json::to_value(PhotoSlot::B).unwrap(), "B");
}
