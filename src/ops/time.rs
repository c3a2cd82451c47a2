//! Time-axis operations: reflection and shifting.

use crate::Signal;

/// Time-reverses a signal about logical index 0.
///
/// The sample array is reversed and the offset recomputed to
/// `len - 1 - offset`, which maps logical index `i` to `-i` without
/// touching the indices themselves. A length-0 input yields a
/// length-0 output with offset `-1 - offset`; degenerate, but safe.
///
/// # Examples
///
/// ```
/// use siglab::{Signal, reflect};
///
/// let s = Signal::from_parts(vec![3.0, -1.0, 2.0, 5.0], 1);
/// let r = reflect(&s);
///
/// assert_eq!(r.samples(), &[5.0, 2.0, -1.0, 3.0]);
/// assert_eq!(r.offset(), 2);
/// assert_eq!(r.value_at(1), s.value_at(-1));
/// ```
pub fn reflect(s: &Signal) -> Signal {
    let mut samples = s.samples().to_vec();
    samples.reverse();
    let offset = s.len() as isize - 1 - s.offset();
    Signal::from_parts(samples, offset)
}

/// Shifts a signal in time by an integer amount.
///
/// The samples are untouched; only the offset moves, to
/// `offset - amount`. A positive amount delays the signal (its
/// support moves to later logical indices), a negative amount
/// advances it. No resampling occurs.
///
/// # Examples
///
/// ```
/// use siglab::{Signal, shift};
///
/// let s = Signal::from_parts(vec![1.0, 2.0], 0);
/// let delayed = shift(&s, 3);
///
/// assert_eq!(delayed.value_at(3), 1.0);
/// assert_eq!(delayed.value_at(0), 0.0);
/// ```
pub fn shift(s: &Signal, amount: isize) -> Signal {
    Signal::from_parts(s.samples().to_vec(), s.offset() - amount)
}
