//! Resampling: linear interpolation and stride decimation.

use crate::Signal;

/// Resamples a signal by a single positive factor `steps`.
///
/// - `steps >= 1` interpolates: each sample pairs with its successor
///   (the last pairs with itself) and emits `steps` linearly
///   interpolated values `y1 + (k/steps) * (y2 - y1)`; the final
///   emitted sample is then dropped (for `steps != 1`) because it
///   coincides with where the next original sample would land. The
///   offset scales by `steps`.
/// - `steps < 1` decimates with stride `n = round(1/steps)`: only
///   samples at storage indices divisible by `n` are kept. The offset
///   is deliberately left unchanged, so the zero reference drifts
///   whenever the input offset is not a multiple of the stride.
///   Callers wanting an aligned zero reference must re-zero
///   afterwards.
///
/// `steps == 1` is an exact pass-through. `steps` must be positive
/// and finite; fractional factors above 1 emit `ceil(steps)` samples
/// per input pair and round the scaled offset to the nearest integer.
///
/// # Examples
///
/// ```
/// use siglab::{Signal, resample};
///
/// let s = Signal::from_parts(vec![0.0, 2.0, 4.0], 1);
///
/// let up = resample(&s, 2.0);
/// assert_eq!(up.samples(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(up.offset(), 2);
///
/// let down = resample(&s, 0.5);
/// assert_eq!(down.samples(), &[0.0, 4.0]);
/// assert_eq!(down.offset(), 1); // unchanged
/// ```
pub fn resample(s: &Signal, steps: f64) -> Signal {
    if steps < 1.0 {
        decimate(s, steps)
    } else {
        interpolate(s, steps)
    }
}

fn decimate(s: &Signal, steps: f64) -> Signal {
    let stride = (1.0 / steps).round() as usize;
    let samples = s.samples().iter().copied().step_by(stride).collect();
    Signal::from_parts(samples, s.offset())
}

fn interpolate(s: &Signal, steps: f64) -> Signal {
    let per_sample = steps.ceil() as usize;
    let mut samples = Vec::with_capacity(s.len() * per_sample);

    for (i, &y1) in s.samples().iter().enumerate() {
        // The last sample pairs with itself
        let y2 = s.samples().get(i + 1).copied().unwrap_or(y1);
        let distance = y2 - y1;
        for k in 0..per_sample {
            samples.push(y1 + (k as f64 / steps) * distance);
        }
    }

    // The last emitted value duplicates the position where the next
    // original sample would start
    if steps != 1.0 {
        samples.pop();
    }

    Signal::from_parts(samples, (s.offset() as f64 * steps).round() as isize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resample_factor_one_is_identity() {
        let s = Signal::from_parts(vec![3.0, -1.0, 2.0, 5.0], 1);
        assert_eq!(resample(&s, 1.0), s);
    }

    #[test]
    fn test_interpolate_by_two() {
        let s = Signal::from_parts(vec![0.0, 2.0, 4.0], 0);
        let up = resample(&s, 2.0);
        assert_eq!(up.samples(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(up.offset(), 0);
    }

    #[test]
    fn test_interpolate_scales_offset() {
        let s = Signal::from_parts(vec![1.0, 1.0], 1);
        assert_eq!(resample(&s, 3.0).offset(), 3);
    }

    #[test]
    fn test_interpolate_by_three() {
        let s = Signal::from_parts(vec![0.0, 3.0], 0);
        let up = resample(&s, 3.0);
        // (0,3) emits 0,1,2; (3,3) emits 3,3,3; the trailing 3 is dropped
        assert_eq!(up.samples(), &[0.0, 1.0, 2.0, 3.0, 3.0]);
    }

    #[test]
    fn test_interpolate_single_sample() {
        let s = Signal::from_parts(vec![5.0], 0);
        let up = resample(&s, 2.0);
        // The lone sample pairs with itself: 5,5 minus the dropped tail
        assert_eq!(up.samples(), &[5.0]);
    }

    #[test]
    fn test_decimate_by_two() {
        let s = Signal::from_parts(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 0);
        let down = resample(&s, 0.5);
        assert_eq!(down.samples(), &[0.0, 2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_decimate_rounds_reciprocal() {
        let s = Signal::from_parts(vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 0);
        // 1/0.3 rounds to stride 3
        let down = resample(&s, 0.3);
        assert_eq!(down.samples(), &[0.0, 3.0, 6.0]);
    }

    #[test]
    fn test_decimate_keeps_offset_unchanged() {
        let s = Signal::from_parts(vec![0.0, 1.0, 2.0, 3.0, 4.0], 3);
        assert_eq!(resample(&s, 0.5).offset(), 3);
    }

    #[test]
    fn test_resample_empty() {
        assert!(resample(&Signal::empty(), 2.0).is_empty());
        assert!(resample(&Signal::empty(), 0.5).is_empty());
    }
}
