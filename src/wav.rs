//! WAV import and export for signals.
//!
//! Import takes the first channel only, normalizes integer formats to
//! `[-1, 1]`, and can decimate by a stride on the way in, which keeps
//! captured audio short enough to inspect sample by sample. Export
//! writes mono 32-bit float.

use crate::{Signal, SignalError};
use std::path::Path;
use thiserror::Error;

/// Errors from reading or writing WAV files.
#[derive(Error, Debug)]
pub enum WavError {
    /// The underlying WAV codec failed.
    #[error("WAV error: {0}")]
    Codec(#[from] hound::Error),
    /// The file decoded to zero samples.
    #[error("WAV file contains no samples")]
    Empty,
    /// The decoded samples failed signal validation.
    #[error(transparent)]
    Signal(#[from] SignalError),
}

/// Reads a WAV file into a signal with offset 0.
///
/// Only the first channel is kept. Integer sample formats are scaled
/// to `[-1, 1]`; float formats are passed through (and validated, so
/// a NaN in the file is rejected rather than propagated). `stride`
/// keeps every `stride`-th sample; pass 1 to keep them all.
///
/// # Errors
///
/// Returns [`WavError::Empty`] for a file with no samples,
/// [`WavError::Signal`] when a decoded sample is non-finite, and
/// [`WavError::Codec`] for I/O or format problems.
pub fn read_wav(path: impl AsRef<Path>, stride: usize) -> Result<Signal, WavError> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    let samples: Result<Vec<f64>, _> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(|v| v as f64))
            .collect(),
        hound::SampleFormat::Int => {
            let max_value = (1i64 << (spec.bits_per_sample - 1)) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / max_value))
                .collect()
        }
    };
    let samples = samples?;

    if samples.is_empty() {
        return Err(WavError::Empty);
    }

    let first_channel = samples
        .into_iter()
        .step_by(spec.channels as usize)
        .step_by(stride.max(1))
        .collect();

    Ok(Signal::new(first_channel, 0)?)
}

/// Writes a signal to a mono 32-bit float WAV file.
///
/// The offset is not representable in the container and is dropped;
/// only the stored samples are written, in storage order.
pub fn write_wav(
    signal: &Signal,
    path: impl AsRef<Path>,
    sample_rate: u32,
) -> Result<(), WavError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in signal.samples() {
        writer.write_sample(sample as f32)?;
    }
    writer.finalize()?;
    Ok(())
}
