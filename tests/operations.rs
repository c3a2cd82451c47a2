//! Cross-operation properties exercised through the public API.

use siglab::{Signal, convolve, generate, reflect, resample, scale, shift, subtract, sum};

fn sample_signal() -> Signal {
    Signal::from_parts(vec![3.0, -1.0, 2.0, 5.0], 1)
}

#[test]
fn zero_extension_outside_domain() {
    let s = sample_signal();
    for n in -50..50 {
        if !s.domain().contains(&n) {
            assert_eq!(s.value_at(n), 0.0);
        }
    }
}

#[test]
fn sum_domain_is_union_of_input_domains() {
    let s1 = Signal::from_parts(vec![1.0, 2.0, 3.0], 2);
    let s2 = Signal::from_parts(vec![4.0, 5.0], 0);
    let result = sum(&s1, &s2);

    let lo = s1.domain().start.min(s2.domain().start);
    let hi = s1.domain().end.max(s2.domain().end);
    assert_eq!(result.domain(), lo..hi);
}

#[test]
fn subtract_is_sum_with_negated_signal() {
    let s1 = sample_signal();
    let s2 = Signal::from_parts(vec![-2.0, 4.0, 0.5], 2);

    let direct = subtract(&s1, &s2);
    let via_sum = sum(&s1, &scale(&s2, -1.0));
    for n in direct.domain() {
        assert_eq!(direct.value_at(n), via_sum.value_at(n));
    }
}

#[test]
fn scale_round_trips_through_inversion() {
    let s = sample_signal();
    assert_eq!(scale(&s, 1.0), s);
    assert_eq!(scale(&scale(&s, -1.0), -1.0), s);
}

#[test]
fn reflect_twice_restores_samples() {
    let s = sample_signal();
    assert_eq!(reflect(&reflect(&s)).samples(), s.samples());
}

#[test]
fn shifts_compose_additively() {
    let s = sample_signal();
    assert_eq!(shift(&shift(&s, 4), -7), shift(&s, -3));
}

#[test]
fn resample_by_one_is_identity() {
    let s = sample_signal();
    assert_eq!(resample(&s, 1.0), s);
}

#[test]
fn convolution_length_adds_supports() {
    let s1 = sample_signal();
    let s2 = Signal::from_parts(vec![-2.0, 4.0, 0.5], 2);
    assert_eq!(convolve(&s1, &s2).len(), s1.len() + s2.len() - 1);
}

#[test]
fn convolution_with_impulse_is_identity() {
    let s = sample_signal();
    assert_eq!(convolve(&s, &generate::impulse()), s);
}

#[test]
fn convolution_distributes_over_sum() {
    // (s1 + s2) * h == s1 * h + s2 * h, pointwise
    let s1 = Signal::from_parts(vec![1.0, 2.0], 0);
    let s2 = Signal::from_parts(vec![3.0, -1.0, 4.0], 1);
    let h = Signal::from_parts(vec![0.5, -2.0], 0);

    let lhs = convolve(&sum(&s1, &s2), &h);
    let rhs = sum(&convolve(&s1, &h), &convolve(&s2, &h));
    for n in -10..10 {
        assert!(
            (lhs.value_at(n) - rhs.value_at(n)).abs() < 1e-12,
            "mismatch at index {}",
            n
        );
    }
}

#[test]
fn capture_style_ingestion_rejects_bad_samples() {
    // A capture collaborator delivers a finished buffer with offset 0;
    // a NaN from a broken decode is refused at the boundary.
    let decoded = vec![0.1, 0.2, f64::NAN];
    assert!(Signal::new(decoded, 0).is_err());

    let decoded = vec![0.1, 0.2, 0.3];
    let s = Signal::new(decoded, 0).unwrap();
    assert_eq!(s.offset(), 0);
}
