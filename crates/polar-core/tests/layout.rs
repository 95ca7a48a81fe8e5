// File: crates/polar-core/tests/layout.rs
// Purpose: Pin the pure layout math: angular partitioning, radii, flip rules.

use polar_core::types::HAlign;
use polar_core::{chord_length, image_rotation, label_placement, LayoutParams};

#[test]
fn slots_tile_the_span() {
    let values = vec![1.0; 11];
    let p = LayoutParams::compute(&values, 90.0, 350.0, None).unwrap();

    // Per-wedge allotments sum to the span.
    let total: f64 = (0..11).map(|i| {
        let (s, e) = p.wedge_slot(i);
        e - s
    }).sum();
    assert!((total - 350.0).abs() < 1e-9);
    assert!((p.wedge_size * 11.0 - 350.0).abs() < 1e-9);

    // Slots are contiguous and non-overlapping.
    for i in 0..10 {
        let (_, end) = p.wedge_slot(i);
        let (next_start, _) = p.wedge_slot(i + 1);
        assert!((end - next_start).abs() < 1e-9, "slot {} not contiguous", i);
    }
}

#[test]
fn gap_sits_on_leading_edge_only() {
    let values = vec![2.0; 8];
    let p = LayoutParams::compute(&values, 90.0, 350.0, None).unwrap();
    for i in 0..8 {
        let (slot_start, slot_end) = p.wedge_slot(i);
        let arc = p.wedge_arc(i);
        assert!((arc.start - slot_start - p.wedge_padding).abs() < 1e-9);
        // Trailing edge flush with the slot boundary: no symmetric gap.
        assert!((arc.end - slot_end).abs() < 1e-9);
    }
}

#[test]
fn radius_is_monotonic_and_offset_by_hub() {
    let values = vec![1.5, 3.0, 7.804];
    let p = LayoutParams::compute(&values, 90.0, 350.0, None).unwrap();

    // Default hub is twice the smallest value.
    assert!((p.inner_padding - 3.0).abs() < 1e-9);
    assert!((p.limit - (7.804 + 3.0) * 1.25).abs() < 1e-9);

    let mut prev = f64::NEG_INFINITY;
    for &v in &values {
        let r = p.radius(v);
        assert!((r - (p.inner_padding + v)).abs() < 1e-9);
        assert!(r > prev);
        prev = r;
    }
}

#[test]
fn chord_matches_reference_value() {
    // 350 degrees over 11 wedges at radius 5.
    let chord = chord_length(350.0 / 11.0, 5.0);
    assert!((chord - 2.74).abs() < 0.01, "chord was {}", chord);
}

#[test]
fn label_flips_on_the_left_half() {
    let right_half = label_placement(45.0, "Finland", Some(7.804));
    assert_eq!(right_half.align, HAlign::Left);
    assert!((right_half.rotation - 45.0).abs() < 1e-9);
    assert_eq!(right_half.text, "(7.804) Finland");

    let left_half = label_placement(200.0, "Chad", Some(4.397));
    assert_eq!(left_half.align, HAlign::Right);
    assert!((left_half.rotation - 20.0).abs() < 1e-9);
    assert_eq!(left_half.text, "Chad (4.397)");
}

#[test]
fn label_angle_normalizes_full_turns() {
    let wrapped = label_placement(405.0, "Iceland", None);
    assert_eq!(wrapped.align, HAlign::Left);
    assert!((wrapped.rotation - 45.0).abs() < 1e-9);
    assert_eq!(wrapped.text, "Iceland");
}

#[test]
fn image_rotation_threshold_is_unnormalized() {
    // At or below 270 the image is flipped back by a half turn.
    assert!((image_rotation(200.0) - 20.0).abs() < 1e-9);
    assert!((image_rotation(270.0) - 90.0).abs() < 1e-9);
    // Past 270 (including the 360..440 tail a 90-degree start produces)
    // the rotation passes through unmodified.
    assert!((image_rotation(300.0) - 300.0).abs() < 1e-9);
    assert!((image_rotation(420.0) - 420.0).abs() < 1e-9);
}

#[test]
fn layout_is_deterministic() {
    let values = vec![1.2, 4.5, 2.2, 6.9, 3.3];
    let a = LayoutParams::compute(&values, 90.0, 350.0, None).unwrap();
    let b = LayoutParams::compute(&values, 90.0, 350.0, None).unwrap();
    assert_eq!(a, b);
}

#[test]
fn rejects_degenerate_inputs() {
    assert!(LayoutParams::compute(&[], 90.0, 350.0, None).is_err());
    assert!(LayoutParams::compute(&[1.0, -2.0], 90.0, 350.0, None).is_err());
    assert!(LayoutParams::compute(&[1.0, f64::NAN], 90.0, 350.0, None).is_err());
    assert!(LayoutParams::compute(&[1.0], 90.0, 0.0, None).is_err());
}
