//! The operation library: pure functions from one or two signals to a
//! new signal.
//!
//! Every operation is total over well-formed [`Signal`]s, allocates
//! its result, and leaves its inputs untouched. The [`Operation`]
//! enum mirrors the operation chooser a front end presents to the
//! user and dispatches to the free functions.

mod arith;
mod convolve;
mod resample;
mod time;

pub use arith::{scale, subtract, sum};
pub use convolve::convolve;
pub use resample::resample;
pub use time::{reflect, shift};

use crate::Signal;

/// A user-selectable signal operation, with its parameter where one
/// exists.
///
/// Binary operations consume both signals; unary ones apply to the
/// first signal only, matching how the operations are presented: two
/// signals are always on screen, and the unary transforms act on
/// signal 1.
///
/// # Examples
///
/// ```
/// use siglab::{Operation, Signal};
///
/// let s1 = Signal::from_parts(vec![1.0, 2.0], 0);
/// let s2 = Signal::from_parts(vec![10.0], 0);
///
/// let result = Operation::Sum.apply(&s1, &s2);
/// assert_eq!(result.samples(), &[11.0, 2.0]);
///
/// let result = Operation::Scale(2.0).apply(&s1, &s2);
/// assert_eq!(result.samples(), &[2.0, 4.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    /// Element-wise addition of both signals.
    Sum,
    /// Element-wise subtraction (signal 1 minus signal 2).
    Subtract,
    /// Multiply signal 1 by a constant factor.
    Scale(f64),
    /// Time-reverse signal 1 about logical index 0.
    Reflect,
    /// Delay (positive) or advance (negative) signal 1.
    Shift(isize),
    /// Interpolate (factor >= 1) or decimate (factor < 1) signal 1.
    Resample(f64),
    /// Discrete linear convolution of both signals.
    Convolve,
}

impl Operation {
    /// Applies this operation, using `s2` only for the binary
    /// operations.
    pub fn apply(&self, s1: &Signal, s2: &Signal) -> Signal {
        match *self {
            Operation::Sum => sum(s1, s2),
            Operation::Subtract => subtract(s1, s2),
            Operation::Scale(factor) => scale(s1, factor),
            Operation::Reflect => reflect(s1),
            Operation::Shift(amount) => shift(s1, amount),
            Operation::Resample(steps) => resample(s1, steps),
            Operation::Convolve => convolve(s1, s2),
        }
    }

    /// Whether the operation consumes both signals.
    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            Operation::Sum | Operation::Subtract | Operation::Convolve
        )
    }

    /// Human-facing title for the result, including the
    /// parameter-dependent wording for the parameterized operations.
    pub fn label(&self) -> String {
        match *self {
            Operation::Sum => "Sum (S1 + S2)".to_string(),
            Operation::Subtract => "Difference (S1 - S2)".to_string(),
            Operation::Scale(factor) => {
                let verb = if factor.abs() < 1.0 {
                    "Attenuation"
                } else {
                    "Amplification"
                };
                format!("{} ({} * S1)", verb, factor)
            }
            Operation::Reflect => "Reflection (S1)".to_string(),
            Operation::Shift(amount) => format!("Shift (S1 by {})", amount),
            Operation::Resample(steps) => {
                if steps < 1.0 {
                    format!("Decimation (S1 by {})", (1.0 / steps).round())
                } else {
                    format!("Interpolation (S1 by {})", steps)
                }
            }
            Operation::Convolve => "Convolution (S1, S2)".to_string(),
        }
    }
}
