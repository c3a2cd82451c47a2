//! Discrete linear convolution.

use crate::Signal;

/// Convolves two signals.
///
/// Computes the convolution sum over the finite supports of both
/// inputs: `out[p] = sum over j of s1[j] * s2[p - j]` for storage
/// indices `p` in `0..L1 + L2 - 1`, accumulated into a pre-sized
/// dense buffer so that positions with no contributing pair come out
/// as explicit zeros. The output offset is the sum of the input
/// offsets. If either input is empty the result is empty.
///
/// # Examples
///
/// ```
/// use siglab::{Signal, convolve};
///
/// let s = Signal::from_parts(vec![2.0, 7.0, 1.0], 1);
/// let impulse = Signal::from_parts(vec![1.0], 0);
///
/// // Convolution with the unit impulse is the identity
/// assert_eq!(convolve(&s, &impulse), s);
/// ```
pub fn convolve(s1: &Signal, s2: &Signal) -> Signal {
    let offset = s1.offset() + s2.offset();
    if s1.is_empty() || s2.is_empty() {
        return Signal::from_parts(Vec::new(), offset);
    }

    let mut samples = vec![0.0; s1.len() + s2.len() - 1];
    for (i, &a) in s1.samples().iter().enumerate() {
        for (j, &b) in s2.samples().iter().enumerate() {
            samples[i + j] += a * b;
        }
    }

    Signal::from_parts(samples, offset)
}
