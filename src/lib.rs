//! siglab - discrete-time signal operations for teaching DSP.
//!
//! This library models finite discrete-time signals as a sample
//! sequence plus an explicit zero index, and provides the classic
//! classroom operations over them: sum, subtraction, scaling,
//! reflection, shifting, interpolation/decimation, and convolution.
//! Everything outside a signal's stored range reads as zero, so
//! operations over signals with different supports stay well-defined.
//!
//! The operations are pure functions over immutable values: nothing
//! here holds state, performs I/O, or can fail on well-formed input.
//! Front ends own signal lifecycle; edits produce new values.
//!
//! # Examples
//!
//! ```
//! use siglab::{convolve, sum, Signal};
//!
//! let s1 = Signal::from_parts(vec![3.0, -1.0, 2.0, 5.0], 1);
//! let s2 = Signal::from_parts(vec![-2.0, 4.0, 0.5], 2);
//!
//! let total = sum(&s1, &s2);
//! assert_eq!(total.domain(), -2..3);
//!
//! let conv = convolve(&s1, &s2);
//! assert_eq!(conv.len(), s1.len() + s2.len() - 1);
//! assert_eq!(conv.offset(), 3);
//! ```

pub mod error;
pub mod generate;
pub mod ops;
pub mod signal;

#[cfg(feature = "plot")]
pub mod plot;
#[cfg(feature = "wav")]
pub mod wav;

// Re-export commonly used types at the crate root
pub use error::SignalError;
pub use ops::{Operation, convolve, reflect, resample, scale, shift, subtract, sum};
pub use signal::Signal;

#[cfg(feature = "plot")]
pub use plot::plot_signal;
#[cfg(feature = "wav")]
pub use wav::{WavError, read_wav, write_wav};

/// Compile-time signal literal: `signal!("3 [-1] 2 5")`.
#[cfg(feature = "macros")]
pub use siglab_macros::signal;
