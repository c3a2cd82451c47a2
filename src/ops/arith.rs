//! Element-wise arithmetic: sum, subtraction, and scaling.

use crate::Signal;

/// Logical-index bounds of the union of both domains.
///
/// `max` is never below `min`: each signal's domain end is at least its
/// domain start, and `max` dominates both ends.
fn union_bounds(s1: &Signal, s2: &Signal) -> (isize, isize) {
    let min = (-s1.offset()).min(-s2.offset());
    let max = (s1.len() as isize - s1.offset()).max(s2.len() as isize - s2.offset());
    (min, max)
}

fn combine(s1: &Signal, s2: &Signal, f: impl Fn(f64, f64) -> f64) -> Signal {
    let (min, max) = union_bounds(s1, s2);
    let samples = (min..max)
        .map(|i| f(s1.value_at(i), s2.value_at(i)))
        .collect();
    Signal::from_parts(samples, -min)
}

/// Adds two signals element-wise over the union of their domains.
///
/// Where only one signal has a stored sample the other contributes 0
/// (zero-padded addition). The result's domain is exactly the union of
/// the input domains.
///
/// # Examples
///
/// ```
/// use siglab::{Signal, sum};
///
/// let s1 = Signal::from_parts(vec![1.0, 2.0], 1);
/// let s2 = Signal::from_parts(vec![10.0, 20.0, 30.0], 0);
/// let total = sum(&s1, &s2);
///
/// assert_eq!(total.samples(), &[1.0, 12.0, 20.0, 30.0]);
/// assert_eq!(total.offset(), 1);
/// ```
pub fn sum(s1: &Signal, s2: &Signal) -> Signal {
    combine(s1, s2, |a, b| a + b)
}

/// Subtracts `s2` from `s1` element-wise over the union of their
/// domains, with the same zero-padding convention as [`sum`].
pub fn subtract(s1: &Signal, s2: &Signal) -> Signal {
    combine(s1, s2, |a, b| a - b)
}

/// Multiplies every sample by `factor`; the offset is unchanged.
///
/// A factor above 1 amplifies, a factor inside `(0, 1)` attenuates,
/// a negative factor inverts, and 0 yields an all-zero signal of the
/// same length. The transform is the same in every case; only the
/// label shown to the user differs.
///
/// # Examples
///
/// ```
/// use siglab::{Signal, scale};
///
/// let s = Signal::from_parts(vec![1.0, -2.0], 1);
/// assert_eq!(scale(&s, 0.5).samples(), &[0.5, -1.0]);
/// assert_eq!(scale(&s, 0.5).offset(), 1);
/// ```
pub fn scale(s: &Signal, factor: f64) -> Signal {
    let samples = s.samples().iter().map(|&v| v * factor).collect();
    Signal::from_parts(samples, s.offset())
}
