//! Constructors for standard test signals.
//!
//! Small generators for the signals a DSP lesson keeps reaching for:
//! the unit impulse, the unit step, integer ramps, and uniform random
//! noise for scratch input.

use crate::Signal;
use rand::Rng;

/// The unit impulse: a single 1.0 at logical index 0.
///
/// Convolving any signal with the impulse returns that signal.
///
/// # Examples
///
/// ```
/// use siglab::{convolve, generate, Signal};
///
/// let s = Signal::from_parts(vec![1.0, 2.0, 3.0], 1);
/// assert_eq!(convolve(&s, &generate::impulse()), s);
/// ```
pub fn impulse() -> Signal {
    Signal::from_parts(vec![1.0], 0)
}

/// The unit step truncated to `len` samples: all ones, starting at
/// logical index 0.
pub fn unit_step(len: usize) -> Signal {
    Signal::from_parts(vec![1.0; len], 0)
}

/// An inclusive integer ramp from `from` to `to`, offset 0.
///
/// A descending range (`to < from`) yields the empty signal.
///
/// # Examples
///
/// ```
/// use siglab::generate;
///
/// let ramp = generate::ramp(-2, 2);
/// assert_eq!(ramp.samples(), &[-2.0, -1.0, 0.0, 1.0, 2.0]);
/// ```
pub fn ramp(from: i32, to: i32) -> Signal {
    let samples = (from..=to).map(f64::from).collect();
    Signal::from_parts(samples, 0)
}

/// `len` samples drawn uniformly from `[-1, 1]`, offset 0.
///
/// Takes the generator as an argument so callers can seed a
/// deterministic one.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use siglab::generate;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let noise = generate::random(8, &mut rng);
/// assert_eq!(noise.len(), 8);
/// ```
pub fn random<R: Rng>(len: usize, rng: &mut R) -> Signal {
    let samples = (0..len).map(|_| rng.gen_range(-1.0..=1.0)).collect();
    Signal::from_parts(samples, 0)
}
