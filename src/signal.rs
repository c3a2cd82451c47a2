//! The core `Signal` value type.
//!
//! A [`Signal`] is a finite sequence of real samples together with an
//! integer offset that says which storage position is logical index 0.
//! Everything outside the stored range is implicitly zero, so every
//! signal behaves as if it extended to infinity in both directions.

use crate::SignalError;
use std::fmt;
use std::ops::Range;

/// A finite discrete-time signal with an explicit zero index.
///
/// Logical index `n` lives at storage index `n + offset`; the
/// half-open range of logical indices with stored samples is the
/// signal's [`domain`](Signal::domain). Reading outside the domain
/// yields `0.0` (zero-extension), which is what makes element-wise
/// operations over two signals with different supports well-defined.
///
/// Signals are immutable values: every edit and every operation
/// produces a new `Signal`. Equality is structural.
///
/// # Examples
///
/// ```
/// use siglab::Signal;
///
/// // Samples [3, -1, 2, 5] with the -1 at logical index 0
/// let s = Signal::from_parts(vec![3.0, -1.0, 2.0, 5.0], 1);
///
/// assert_eq!(s.domain(), -1..3);
/// assert_eq!(s.value_at(-1), 3.0);
/// assert_eq!(s.value_at(0), -1.0);
/// assert_eq!(s.value_at(100), 0.0); // zero-extended
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Signal {
    samples: Vec<f64>,
    offset: isize,
}

impl Signal {
    /// Creates a signal from untrusted sample data, validating that
    /// every sample is finite.
    ///
    /// This is the ingestion boundary: user-typed values and decoded
    /// audio go through here so that NaN or infinite samples are
    /// rejected up front instead of silently contaminating every
    /// downstream result.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::NonFinite`] for the first NaN or
    /// infinite sample encountered.
    ///
    /// # Examples
    ///
    /// ```
    /// use siglab::Signal;
    ///
    /// let s = Signal::new(vec![1.0, 2.0], 0).unwrap();
    /// assert_eq!(s.len(), 2);
    ///
    /// assert!(Signal::new(vec![1.0, f64::NAN], 0).is_err());
    /// ```
    pub fn new(samples: Vec<f64>, offset: isize) -> Result<Self, SignalError> {
        for (index, &value) in samples.iter().enumerate() {
            if !value.is_finite() {
                return Err(SignalError::NonFinite { index, value });
            }
        }
        Ok(Self { samples, offset })
    }

    /// Creates a signal without validating the samples.
    ///
    /// Used by the operation library, whose outputs cannot contain
    /// non-finite values when the inputs do not, and by trusted
    /// in-crate producers. Callers holding data from outside the
    /// library should prefer [`Signal::new`].
    pub fn from_parts(samples: Vec<f64>, offset: isize) -> Self {
        Self { samples, offset }
    }

    /// The empty signal (no samples, offset 0).
    pub fn empty() -> Self {
        Self::default()
    }

    /// The stored samples, in storage order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// The storage index corresponding to logical index 0.
    ///
    /// Usually within `0..=len`, but any value is tolerated; reads
    /// through [`value_at`](Signal::value_at) stay well-defined
    /// regardless.
    pub fn offset(&self) -> isize {
        self.offset
    }

    /// Number of stored samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the signal has no stored samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The half-open range of logical indices with stored samples.
    ///
    /// # Examples
    ///
    /// ```
    /// use siglab::Signal;
    ///
    /// let s = Signal::from_parts(vec![1.0, 2.0, 3.0], 2);
    /// assert_eq!(s.domain(), -2..1);
    ///
    /// assert_eq!(Signal::empty().domain(), 0..0);
    /// ```
    pub fn domain(&self) -> Range<isize> {
        -self.offset..self.samples.len() as isize - self.offset
    }

    /// The sample at logical index `n`, zero-extended.
    ///
    /// Returns the stored sample when `n` is inside
    /// [`domain`](Signal::domain) and `0.0` otherwise. Total over all
    /// of `isize`; never panics, whatever the offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use siglab::Signal;
    ///
    /// let s = Signal::from_parts(vec![4.0, 7.0], 1);
    /// assert_eq!(s.value_at(-1), 4.0);
    /// assert_eq!(s.value_at(0), 7.0);
    /// assert_eq!(s.value_at(1), 0.0);
    /// assert_eq!(s.value_at(isize::MIN), 0.0);
    /// ```
    pub fn value_at(&self, n: isize) -> f64 {
        if self.domain().contains(&n) {
            self.samples[(n + self.offset) as usize]
        } else {
            0.0
        }
    }

    /// Iterates over `(logical index, value)` pairs of the stored
    /// samples, in storage order.
    ///
    /// # Examples
    ///
    /// ```
    /// use siglab::Signal;
    ///
    /// let s = Signal::from_parts(vec![5.0, 6.0], 1);
    /// let pairs: Vec<_> = s.iter().collect();
    /// assert_eq!(pairs, vec![(-1, 5.0), (0, 6.0)]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (isize, f64)> + '_ {
        self.samples
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i as isize - self.offset, v))
    }

    /// Returns a copy of this signal with one sample appended at the
    /// end, validating the new value.
    ///
    /// This is the user-entry edit path; the offset is unchanged, so
    /// the new sample lands at the logical index one past the previous
    /// end of the domain.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::NonFinite`] when `value` is NaN or
    /// infinite.
    pub fn with_appended(&self, value: f64) -> Result<Self, SignalError> {
        if !value.is_finite() {
            return Err(SignalError::NonFinite {
                index: self.samples.len(),
                value,
            });
        }
        let mut samples = self.samples.clone();
        samples.push(value);
        Ok(Self {
            samples,
            offset: self.offset,
        })
    }

    /// Returns a copy of this signal with the sample at the given
    /// storage index removed.
    ///
    /// The offset is preserved, so every sample after the removed one
    /// slides one logical index earlier. An out-of-range index leaves
    /// the signal unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use siglab::Signal;
    ///
    /// let s = Signal::from_parts(vec![1.0, 2.0, 3.0], 1);
    /// let shorter = s.without_sample(1);
    /// assert_eq!(shorter.samples(), &[1.0, 3.0]);
    /// assert_eq!(shorter.offset(), 1);
    /// ```
    pub fn without_sample(&self, storage_index: usize) -> Self {
        if storage_index >= self.samples.len() {
            return self.clone();
        }
        let mut samples = self.samples.clone();
        samples.remove(storage_index);
        Self {
            samples,
            offset: self.offset,
        }
    }

    /// Returns a copy of this signal with the zero reference moved to
    /// the given storage index.
    ///
    /// An index equal to `len` is allowed: the zero reference then
    /// sits one past the last stored sample, which the table-editing
    /// flow produces when the user re-zeroes on the trailing cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use siglab::Signal;
    ///
    /// let s = Signal::from_parts(vec![1.0, 2.0, 3.0], 0);
    /// let rezeroed = s.rezeroed(2);
    /// assert_eq!(rezeroed.value_at(0), 3.0);
    /// ```
    pub fn rezeroed(&self, storage_index: usize) -> Self {
        Self {
            samples: self.samples.clone(),
            offset: storage_index as isize,
        }
    }
}

impl fmt::Display for Signal {
    /// Formats the samples in storage order, bracketing the one at
    /// logical index 0 when the offset points inside the signal:
    /// `3 [-1] 2 5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.samples.is_empty() {
            return write!(f, "(empty, offset {})", self.offset);
        }
        let marked = (0..self.samples.len() as isize).contains(&self.offset);
        for (i, value) in self.samples.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            if marked && i as isize == self.offset {
                write!(f, "[{}]", value)?;
            } else {
                write!(f, "{}", value)?;
            }
        }
        if !marked {
            write!(f, " (offset {})", self.offset)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_finite_samples() {
        let s = Signal::new(vec![0.0, -1.5, 1e300], 1).unwrap();
        assert_eq!(s.samples(), &[0.0, -1.5, 1e300]);
        assert_eq!(s.offset(), 1);
    }

    #[test]
    fn test_new_rejects_non_finite_samples() {
        let err = Signal::new(vec![1.0, f64::NAN], 0).unwrap_err();
        assert!(matches!(err, SignalError::NonFinite { index: 1, .. }));

        assert!(Signal::new(vec![f64::INFINITY], 0).is_err());
        assert!(Signal::new(vec![f64::NEG_INFINITY], 0).is_err());
    }

    #[test]
    fn test_domain() {
        let s = Signal::from_parts(vec![1.0, 2.0, 3.0, 4.0], 1);
        assert_eq!(s.domain(), -1..3);

        let s = Signal::from_parts(vec![1.0], 0);
        assert_eq!(s.domain(), 0..1);

        assert!(Signal::empty().domain().is_empty());
    }

    #[test]
    fn test_value_at_inside_domain() {
        let s = Signal::from_parts(vec![3.0, -1.0, 2.0, 5.0], 1);
        assert_eq!(s.value_at(-1), 3.0);
        assert_eq!(s.value_at(0), -1.0);
        assert_eq!(s.value_at(1), 2.0);
        assert_eq!(s.value_at(2), 5.0);
    }

    #[test]
    fn test_value_at_zero_extends() {
        let s = Signal::from_parts(vec![3.0, -1.0, 2.0, 5.0], 1);
        for n in [-100, -2, 3, 4, 100, isize::MIN, isize::MAX] {
            assert_eq!(s.value_at(n), 0.0, "expected zero outside domain at {}", n);
        }
    }

    #[test]
    fn test_value_at_with_out_of_range_offset() {
        // Offsets outside 0..=len never appear via the editing paths,
        // but reads must stay total anyway.
        let s = Signal::from_parts(vec![1.0, 2.0], -5);
        assert_eq!(s.value_at(5), 1.0);
        assert_eq!(s.value_at(6), 2.0);
        assert_eq!(s.value_at(0), 0.0);

        let s = Signal::from_parts(vec![1.0, 2.0], 10);
        assert_eq!(s.value_at(-10), 1.0);
        assert_eq!(s.value_at(0), 0.0);
    }

    #[test]
    fn test_iter_yields_logical_indices() {
        let s = Signal::from_parts(vec![3.0, -1.0, 2.0], 1);
        let pairs: Vec<_> = s.iter().collect();
        assert_eq!(pairs, vec![(-1, 3.0), (0, -1.0), (1, 2.0)]);
    }

    #[test]
    fn test_with_appended() {
        let s = Signal::from_parts(vec![1.0], 0);
        let longer = s.with_appended(2.0).unwrap();
        assert_eq!(longer.samples(), &[1.0, 2.0]);
        assert_eq!(longer.offset(), 0);
        // The original value is untouched
        assert_eq!(s.len(), 1);

        assert!(s.with_appended(f64::NAN).is_err());
    }

    #[test]
    fn test_without_sample() {
        let s = Signal::from_parts(vec![1.0, 2.0, 3.0], 2);
        assert_eq!(s.without_sample(0).samples(), &[2.0, 3.0]);
        assert_eq!(s.without_sample(0).offset(), 2);
        // Out of range is a no-op
        assert_eq!(s.without_sample(3), s);
    }

    #[test]
    fn test_shrink_to_empty() {
        let mut s = Signal::from_parts(vec![1.0, 2.0], 1);
        s = s.without_sample(0);
        s = s.without_sample(0);
        assert!(s.is_empty());
        assert_eq!(s.offset(), 1);
        assert_eq!(s.value_at(0), 0.0);
    }

    #[test]
    fn test_rezeroed() {
        let s = Signal::from_parts(vec![1.0, 2.0, 3.0], 0);
        assert_eq!(s.rezeroed(1).value_at(0), 2.0);
        // One past the end is a legal zero reference
        let past_end = s.rezeroed(3);
        assert_eq!(past_end.offset(), 3);
        assert_eq!(past_end.value_at(-1), 3.0);
    }

    #[test]
    fn test_structural_equality() {
        let a = Signal::from_parts(vec![1.0, 2.0], 1);
        let b = Signal::from_parts(vec![1.0, 2.0], 1);
        let c = Signal::from_parts(vec![1.0, 2.0], 0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display() {
        let s = Signal::from_parts(vec![3.0, -1.0, 2.0], 1);
        assert_eq!(s.to_string(), "3 [-1] 2");

        let s = Signal::from_parts(vec![1.0, 2.0], 2);
        assert_eq!(s.to_string(), "1 2 (offset 2)");

        assert_eq!(Signal::empty().to_string(), "(empty, offset 0)");
    }
}
